//! The arena of locations.
//!
//! Locations refer to each other through [`LocationId`]s handed out by the
//! [`WorldMap`] that owns them. Each location may also be registered under
//! the textual id it had in the game definition.

use std::collections::HashMap;
use std::fmt;

use wayfarer_foundation::{Direction, Error, Result};

use crate::location::Location;

/// Index of a location inside its [`WorldMap`].
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LocationId(usize);

impl LocationId {
    /// Creates a location id from a raw index.
    #[must_use]
    pub const fn new(index: usize) -> Self {
        Self(index)
    }

    /// Returns the raw index.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0
    }
}

impl fmt::Debug for LocationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "LocationId({})", self.0)
    }
}

impl fmt::Display for LocationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Owns every location of a world.
#[derive(Clone, Debug, Default)]
pub struct WorldMap {
    locations: Vec<Location>,
    keys: Vec<String>,
    index: HashMap<String, LocationId>,
}

impl WorldMap {
    /// Creates an empty map.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a location under a textual key and returns its id.
    ///
    /// If the key was already registered it now refers to the new location.
    pub fn add(&mut self, key: impl Into<String>, location: Location) -> LocationId {
        let key = key.into();
        let id = LocationId(self.locations.len());
        self.locations.push(location);
        self.keys.push(key.clone());
        self.index.insert(key, id);
        id
    }

    /// Looks up a location id by its textual key.
    #[must_use]
    pub fn lookup(&self, key: &str) -> Option<LocationId> {
        self.index.get(key).copied()
    }

    /// Returns the textual key a location was added under.
    #[must_use]
    pub fn key(&self, id: LocationId) -> Option<&str> {
        self.keys.get(id.0).map(String::as_str)
    }

    /// Returns true if `id` refers to a location in this map.
    #[must_use]
    pub fn contains(&self, id: LocationId) -> bool {
        id.0 < self.locations.len()
    }

    /// Returns the location with the given id.
    ///
    /// # Errors
    ///
    /// Returns `UnknownLocation` if `id` is not from this map.
    pub fn get(&self, id: LocationId) -> Result<&Location> {
        self.locations
            .get(id.0)
            .ok_or_else(|| Error::unknown_location(id.to_string()))
    }

    /// Returns the location with the given id, mutably.
    ///
    /// # Errors
    ///
    /// Returns `UnknownLocation` if `id` is not from this map.
    pub fn get_mut(&mut self, id: LocationId) -> Result<&mut Location> {
        self.locations
            .get_mut(id.0)
            .ok_or_else(|| Error::unknown_location(id.to_string()))
    }

    // Callers hold ids validated against this map.
    pub(crate) fn at(&self, id: LocationId) -> &Location {
        &self.locations[id.0]
    }

    pub(crate) fn at_mut(&mut self, id: LocationId) -> &mut Location {
        &mut self.locations[id.0]
    }

    /// Connects `from` to `to` in `direction`. The reverse link is not created.
    ///
    /// # Errors
    ///
    /// Returns `UnknownLocation` if either id is not from this map.
    pub fn link(&mut self, from: LocationId, direction: Direction, to: LocationId) -> Result<()> {
        if !self.contains(to) {
            return Err(Error::unknown_location(to.to_string()));
        }
        self.get_mut(from)?.set_connection(direction, to);
        Ok(())
    }

    /// Iterates over every location with its id, in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (LocationId, &Location)> {
        self.locations
            .iter()
            .enumerate()
            .map(|(i, location)| (LocationId(i), location))
    }

    /// Number of locations.
    #[must_use]
    pub fn len(&self) -> usize {
        self.locations.len()
    }

    /// Returns true if there are no locations.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.locations.is_empty()
    }
}
