//! Core types, errors, directions and configuration for Wayfarer.
//!
//! This crate provides:
//! - [`Error`] - Error type with one [`ErrorKind`] per failure family
//! - [`Direction`] - The twelve compass, vertical and in/out directions
//! - [`Config`] - Immutable engine and command configuration keyed by [`ConfigKey`]

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod config;
pub mod direction;
pub mod error;

pub use config::{CommandKind, Config, ConfigKey, ConfigValue, KeywordForm};
pub use direction::Direction;
pub use error::{Error, ErrorKind, Result};
