//! Integration tests for Layer 1: World
//!
//! Tests for items, repositories, locations, the map and game state.

mod map;
mod repository;
