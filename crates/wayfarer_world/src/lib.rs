//! Items, locations and game state for Wayfarer.
//!
//! This crate provides:
//! - [`Item`] - Immutable game pieces with identity
//! - [`ItemRepository`] - Insertion-ordered item containers
//! - [`Location`] - Places with items, exits and directional connections
//! - [`WorldMap`] - Arena of locations addressed by [`LocationId`]
//! - [`Game`] - The mutable world state a player acts upon

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod game;
pub mod item;
pub mod location;
pub mod map;
pub mod repository;

pub use game::{Game, describe_items};
pub use item::{Item, ItemId};
pub use location::{ExitCondition, Location};
pub use map::{LocationId, WorldMap};
pub use repository::ItemRepository;
