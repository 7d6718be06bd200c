//! Player command parsing, execution and undo for Wayfarer.
//!
//! ```text
//! "take coin"
//!      │
//!      ▼
//! ┌─────────────┐
//! │ TOKENIZER   │  → [Word("take"), Word("coin"), End]
//! └─────────────┘
//!      │
//!      ▼
//! ┌─────────────┐
//! │ DISPATCH    │  → tries Help, Look, Take, ... in order
//! └─────────────┘
//!      │
//!      ▼
//! ┌─────────────┐
//! │ COMMAND     │  → execute against the game, maybe record for undo
//! └─────────────┘
//! ```
//!
//! # Modules
//!
//! - [`tokenizer`] - Split raw input into words
//! - [`vocabulary`] - The configured words of each command kind
//! - [`command`] - The command lifecycle: parse, execute, undo
//! - [`parser`] - Priority dispatch and history bookkeeping

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod command;
pub mod parser;
pub mod tokenizer;
pub mod vocabulary;

pub use command::{Action, Command, CommandState, describe_location, help_listing};
pub use parser::CommandParser;
pub use tokenizer::{InputToken, InputTokenizer};
pub use vocabulary::Vocabulary;
