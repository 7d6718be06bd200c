//! Wayfarer - Text adventure runtime
//!
//! This crate re-exports all layers of the Wayfarer system for convenient access.
//! For detailed documentation, see the individual layer crates.
//!
//! # Architecture
//!
//! ```text
//! Layer 4: wayfarer_runtime    - Run loop, line editing, config files, CLI
//! Layer 3: wayfarer_parser     - Player commands: parse, execute, undo, history
//! Layer 2: wayfarer_language   - World definition lexer and parser
//! Layer 1: wayfarer_world      - Items, locations, the map and the game state
//! Layer 0: wayfarer_foundation - Errors, directions, configuration
//! ```

pub use wayfarer_foundation as foundation;
pub use wayfarer_language as language;
pub use wayfarer_parser as parser;
pub use wayfarer_runtime as runtime;
pub use wayfarer_world as world;
