//! Run loop, line editing, configuration files and CLI for Wayfarer.
//!
//! This crate provides:
//! - [`Engine`] - The turn loop that reads player lines and prints results
//! - [`LineEditor`] - Input abstraction with rustyline and script backends
//! - [`properties`] - TOML configuration files flattened into [`Config`] tables
//!
//! [`Config`]: wayfarer_foundation::Config

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod editor;
pub mod engine;
pub mod properties;

pub use editor::{LineEditor, ReadResult, RustylineEditor, ScriptEditor};
pub use engine::{ENGINE_INFO, Engine};
pub use properties::{load_config, load_table, parse_table};
