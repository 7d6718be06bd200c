//! Lexer and parser for the Wayfarer world definition language.
//!
//! This crate provides:
//! - [`Lexer`] - Tokenization of definition text
//! - [`DefinitionParser`] - Two-pass parsing into a linked [`GameDefinition`]

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod lexer;
pub mod parser;
pub mod token;

pub use lexer::Lexer;
pub use parser::{DefinitionParser, GameDefinition, parse_definition};
pub use token::{Token, TokenKind};
