//! Locations and their connections.

use std::fmt;

use wayfarer_foundation::{Direction, Error, ErrorKind, Result};

use crate::item::{Item, ItemId};
use crate::map::LocationId;
use crate::repository::ItemRepository;

/// Marks a location as a goal: entering it with enough inventory value ends the game.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExitCondition {
    /// Minimum inventory value needed to finish.
    pub threshold: i64,
    /// Message shown when the game ends here.
    pub message: String,
}

/// A place in the world.
///
/// Connections are one-way: linking `a` north to `b` says nothing about how
/// to get from `b` back to `a`.
#[derive(Clone, Debug)]
pub struct Location {
    name: String,
    description: String,
    exit: Option<ExitCondition>,
    items: ItemRepository,
    connections: [Option<LocationId>; Direction::COUNT],
}

impl Location {
    /// Creates an ordinary location with no items and no connections.
    #[must_use]
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            exit: None,
            items: ItemRepository::new(),
            connections: [None; Direction::COUNT],
        }
    }

    /// Creates an exit location.
    #[must_use]
    pub fn with_exit(
        name: impl Into<String>,
        description: impl Into<String>,
        threshold: i64,
        message: impl Into<String>,
    ) -> Self {
        let mut location = Self::new(name, description);
        location.exit = Some(ExitCondition {
            threshold,
            message: message.into(),
        });
        location
    }

    /// Returns the location name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the location description.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns true if this is an exit location.
    #[must_use]
    pub const fn has_exit_threshold(&self) -> bool {
        self.exit.is_some()
    }

    /// Returns the exit condition, if any.
    #[must_use]
    pub const fn exit(&self) -> Option<&ExitCondition> {
        self.exit.as_ref()
    }

    /// Returns the inventory value needed to finish here.
    ///
    /// # Errors
    ///
    /// Returns `NoExitThreshold` if this is not an exit location.
    pub fn exit_threshold(&self) -> Result<i64> {
        self.exit
            .as_ref()
            .map(|exit| exit.threshold)
            .ok_or_else(|| Error::new(ErrorKind::NoExitThreshold))
    }

    /// Returns the message shown when the game ends here.
    ///
    /// # Errors
    ///
    /// Returns `NoExitThreshold` if this is not an exit location.
    pub fn exit_message(&self) -> Result<&str> {
        self.exit
            .as_ref()
            .map(|exit| exit.message.as_str())
            .ok_or_else(|| Error::new(ErrorKind::NoExitThreshold))
    }

    /// Connects this location to `target` in `direction`, replacing any
    /// previous connection in that direction.
    pub fn set_connection(&mut self, direction: Direction, target: LocationId) {
        self.connections[direction.index()] = Some(target);
    }

    /// Returns true if there is a connection in `direction`.
    #[must_use]
    pub fn has_connected_location(&self, direction: Direction) -> bool {
        self.connections[direction.index()].is_some()
    }

    /// Returns the location connected in `direction`.
    ///
    /// # Errors
    ///
    /// Returns `NoConnectedLocation` if there is none.
    pub fn connected_location(&self, direction: Direction) -> Result<LocationId> {
        self.connections[direction.index()]
            .ok_or_else(|| Error::new(ErrorKind::NoConnectedLocation))
    }

    /// Iterates over the directions that lead somewhere, with their targets.
    pub fn connections(&self) -> impl Iterator<Item = (Direction, LocationId)> + '_ {
        Direction::ALL
            .into_iter()
            .filter_map(|dir| self.connections[dir.index()].map(|target| (dir, target)))
    }

    /// Places an item here.
    ///
    /// # Errors
    ///
    /// Returns `ItemAlreadyInRepository` if the item is already here.
    pub fn add_item(&mut self, item: Item) -> Result<()> {
        self.items.add_item(item)
    }

    /// Takes an item away from here.
    ///
    /// # Errors
    ///
    /// Returns `ItemNotInRepository` if the item is not here.
    pub fn remove_item(&mut self, id: ItemId) -> Result<Item> {
        self.items.remove_item(id)
    }

    /// Returns true if the item is here.
    #[must_use]
    pub fn has_item(&self, id: ItemId) -> bool {
        self.items.has_item(id)
    }

    /// Returns every item here with the given name.
    #[must_use]
    pub fn items_named(&self, name: &str) -> Vec<&Item> {
        self.items.items_named(name)
    }

    /// Returns every item here.
    #[must_use]
    pub fn all_items(&self) -> &[Item] {
        self.items.all_items()
    }

    /// Returns the underlying item container.
    #[must_use]
    pub const fn items(&self) -> &ItemRepository {
        &self.items
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Location[{}]", self.name)
    }
}
