//! Integration tests for Layer 2: Language
//!
//! Tests for the world definition lexer and parser.

mod definitions;
mod lexer;
