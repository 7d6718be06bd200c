//! Item containers.
//!
//! An [`ItemRepository`] holds items in insertion order. Each item identity
//! appears at most once; names may repeat, so name lookups return every
//! match and leave disambiguation to the caller.

use wayfarer_foundation::{Error, ErrorKind, Result};

use crate::item::{Item, ItemId};

/// An insertion-ordered multiset of items.
#[derive(Clone, Debug, Default)]
pub struct ItemRepository {
    items: Vec<Item>,
}

impl ItemRepository {
    /// Creates an empty repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an item.
    ///
    /// # Errors
    ///
    /// Returns `ItemAlreadyInRepository` if this exact item is already held.
    pub fn add_item(&mut self, item: Item) -> Result<()> {
        if self.has_item(item.id()) {
            return Err(Error::new(ErrorKind::ItemAlreadyInRepository));
        }
        self.items.push(item);
        Ok(())
    }

    /// Removes an item and returns it.
    ///
    /// # Errors
    ///
    /// Returns `ItemNotInRepository` if the item is not held.
    pub fn remove_item(&mut self, id: ItemId) -> Result<Item> {
        let index = self
            .items
            .iter()
            .position(|item| item.id() == id)
            .ok_or_else(|| Error::new(ErrorKind::ItemNotInRepository))?;
        Ok(self.items.remove(index))
    }

    /// Returns the item with the given identity.
    ///
    /// # Errors
    ///
    /// Returns `ItemNotInRepository` if the item is not held.
    pub fn get(&self, id: ItemId) -> Result<&Item> {
        self.items
            .iter()
            .find(|item| item.id() == id)
            .ok_or_else(|| Error::new(ErrorKind::ItemNotInRepository))
    }

    /// Returns true if this exact item is held.
    #[must_use]
    pub fn has_item(&self, id: ItemId) -> bool {
        self.items.iter().any(|item| item.id() == id)
    }

    /// Returns every item with the given name, earliest added first.
    #[must_use]
    pub fn items_named(&self, name: &str) -> Vec<&Item> {
        self.items.iter().filter(|item| item.name() == name).collect()
    }

    /// Returns every held item, earliest added first.
    #[must_use]
    pub fn all_items(&self) -> &[Item] {
        &self.items
    }

    /// Sum of the values of all held items, saturating at the `i64` bounds.
    #[must_use]
    pub fn total_value(&self) -> i64 {
        self.items.iter().map(Item::value).fold(0, i64::saturating_add)
    }

    /// Number of held items.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns true if nothing is held.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
