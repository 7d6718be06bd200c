//! Integration tests for Layer 0: Foundation
//!
//! Tests for core types: Error, Direction and Config.

mod config;
mod directions;
mod errors;
