//! Game state.
//!
//! A [`Game`] owns the world map, the player's position and inventory, the
//! history of executed commands, and the pending event log. It is generic
//! over the command type stored in the history so that this layer does not
//! depend on the command layer above it.

use std::collections::VecDeque;
use std::fmt;
use std::fmt::Write as _;

use wayfarer_foundation::{Direction, Error, ErrorKind, Result};

use crate::item::{Item, ItemId};
use crate::location::Location;
use crate::map::{LocationId, WorldMap};
use crate::repository::ItemRepository;

/// The mutable state of one running adventure.
pub struct Game<C> {
    title: String,
    author: String,
    description: String,
    map: WorldMap,
    current: LocationId,
    inventory: ItemRepository,
    history: VecDeque<C>,
    events: Vec<String>,
    has_events: bool,
    ended: bool,
}

impl<C> Game<C> {
    /// Creates a game whose world is the single given location.
    #[must_use]
    pub fn new(
        title: impl Into<String>,
        author: impl Into<String>,
        description: impl Into<String>,
        initial: Location,
    ) -> Self {
        let mut map = WorldMap::new();
        let key = initial.name().to_string();
        let current = map.add(key, initial);
        Self::assemble(title.into(), author.into(), description.into(), map, current)
    }

    /// Creates a game over an already linked map.
    ///
    /// # Errors
    ///
    /// Returns `UnknownLocation` if `initial` is not in `map`.
    pub fn with_map(
        title: impl Into<String>,
        author: impl Into<String>,
        description: impl Into<String>,
        map: WorldMap,
        initial: LocationId,
    ) -> Result<Self> {
        if !map.contains(initial) {
            return Err(Error::unknown_location(initial.to_string()));
        }
        Ok(Self::assemble(
            title.into(),
            author.into(),
            description.into(),
            map,
            initial,
        ))
    }

    fn assemble(
        title: String,
        author: String,
        description: String,
        map: WorldMap,
        current: LocationId,
    ) -> Self {
        Self {
            title,
            author,
            description,
            map,
            current,
            inventory: ItemRepository::new(),
            history: VecDeque::new(),
            events: Vec::new(),
            has_events: false,
            ended: false,
        }
    }

    // =========================================================================
    // Information
    // =========================================================================

    /// Returns the game title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the game author.
    #[must_use]
    pub fn author(&self) -> &str {
        &self.author
    }

    /// Returns the game description.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Title, author and description, one per line.
    #[must_use]
    pub fn report_information(&self) -> String {
        format!("{}\n{}\n{}", self.title, self.author, self.description)
    }

    /// Returns the world map.
    #[must_use]
    pub const fn map(&self) -> &WorldMap {
        &self.map
    }

    /// Returns the location with the given id.
    ///
    /// # Errors
    ///
    /// Returns `UnknownLocation` if `id` is not part of this world.
    pub fn location(&self, id: LocationId) -> Result<&Location> {
        self.map.get(id)
    }

    // =========================================================================
    // Player position
    // =========================================================================

    /// Returns the id of the player's location.
    #[must_use]
    pub const fn current_location_id(&self) -> LocationId {
        self.current
    }

    /// Returns the player's location.
    #[must_use]
    pub fn current_location(&self) -> &Location {
        self.map.at(self.current)
    }

    fn current_location_mut(&mut self) -> &mut Location {
        self.map.at_mut(self.current)
    }

    /// Name of the player's location.
    #[must_use]
    pub fn report_location_name(&self) -> &str {
        self.current_location().name()
    }

    /// Description of the player's location.
    #[must_use]
    pub fn report_location_description(&self) -> &str {
        self.current_location().description()
    }

    /// Returns true if the player's location connects in `direction`.
    #[must_use]
    pub fn has_connected_location(&self, direction: Direction) -> bool {
        self.current_location().has_connected_location(direction)
    }

    /// Moves the player through the connection in `direction`.
    ///
    /// Arriving at an exit location while carrying at least its threshold in
    /// value queues the exit message and ends the game. The move itself
    /// succeeds either way.
    ///
    /// # Errors
    ///
    /// Returns `NoConnectedLocation` if there is no connection that way.
    pub fn move_player(&mut self, direction: Direction) -> Result<()> {
        let target = self.current_location().connected_location(direction)?;
        log::debug!(
            "player moves {direction} from {} to {}",
            self.current_location().name(),
            self.map.at(target).name()
        );
        self.current = target;

        let score = self.inventory.total_value();
        let reached = self
            .current_location()
            .exit()
            .filter(|exit| score >= exit.threshold)
            .map(|exit| exit.message.clone());
        if let Some(message) = reached {
            log::debug!("exit reached with score {score}");
            self.add_event(message);
            self.end();
        }
        Ok(())
    }

    /// Puts the player directly at `id` without evaluating exit conditions.
    ///
    /// Used to reverse a movement.
    ///
    /// # Errors
    ///
    /// Returns `UnknownLocation` if `id` is not part of this world.
    pub fn relocate_player(&mut self, id: LocationId) -> Result<()> {
        if !self.map.contains(id) {
            return Err(Error::unknown_location(id.to_string()));
        }
        self.current = id;
        Ok(())
    }

    // =========================================================================
    // Items
    // =========================================================================

    /// Every item in the player's location.
    #[must_use]
    pub fn all_location_items(&self) -> &[Item] {
        self.current_location().all_items()
    }

    /// Every item in the inventory.
    #[must_use]
    pub fn all_inventory_items(&self) -> &[Item] {
        self.inventory.all_items()
    }

    /// Items in the player's location with the given name, earliest first.
    #[must_use]
    pub fn items_in_location(&self, name: &str) -> Vec<&Item> {
        self.current_location().items_named(name)
    }

    /// Items in the inventory with the given name, earliest first.
    #[must_use]
    pub fn items_in_inventory(&self, name: &str) -> Vec<&Item> {
        self.inventory.items_named(name)
    }

    /// Returns true if the inventory holds the item.
    #[must_use]
    pub fn is_item_in_inventory(&self, id: ItemId) -> bool {
        self.inventory.has_item(id)
    }

    /// Returns true if the player's location holds the item.
    #[must_use]
    pub fn is_item_in_location(&self, id: ItemId) -> bool {
        self.current_location().has_item(id)
    }

    /// Total value of the inventory, which is the player's score.
    #[must_use]
    pub fn inventory_value(&self) -> i64 {
        self.inventory.total_value()
    }

    /// Returns the inventory.
    #[must_use]
    pub const fn inventory(&self) -> &ItemRepository {
        &self.inventory
    }

    /// Moves an item from the player's location into the inventory.
    ///
    /// # Errors
    ///
    /// Returns `ItemAlreadyInRepository` if the inventory already holds it,
    /// or `ItemNotInRepository` if the location does not.
    pub fn move_item_to_inventory(&mut self, id: ItemId) -> Result<()> {
        if self.inventory.has_item(id) {
            return Err(Error::new(ErrorKind::ItemAlreadyInRepository));
        }
        let item = self.current_location_mut().remove_item(id)?;
        log::debug!("{} moves to the inventory", item.name());
        self.inventory.add_item(item)
    }

    /// Moves an item from the inventory into the player's location.
    ///
    /// # Errors
    ///
    /// Returns `ItemAlreadyInRepository` if the location already holds it,
    /// or `ItemNotInRepository` if the inventory does not.
    pub fn move_item_to_location(&mut self, id: ItemId) -> Result<()> {
        if self.current_location().has_item(id) {
            return Err(Error::new(ErrorKind::ItemAlreadyInRepository));
        }
        let item = self.inventory.remove_item(id)?;
        log::debug!("{} moves to {}", item.name(), self.current_location().name());
        self.current_location_mut().add_item(item)
    }

    // =========================================================================
    // Command history
    // =========================================================================

    /// Appends a command to the history.
    pub fn add_executed_command(&mut self, command: C) {
        self.history.push_back(command);
    }

    /// Number of commands in the history.
    #[must_use]
    pub fn executed_command_count(&self) -> usize {
        self.history.len()
    }

    /// Removes and returns the oldest command.
    ///
    /// # Errors
    ///
    /// Returns `NoExecutedCommands` if the history is empty.
    pub fn remove_oldest_executed_command(&mut self) -> Result<C> {
        self.history
            .pop_front()
            .ok_or_else(|| Error::new(ErrorKind::NoExecutedCommands))
    }

    /// Removes and returns the newest command.
    ///
    /// # Errors
    ///
    /// Returns `NoExecutedCommands` if the history is empty.
    pub fn remove_newest_executed_command(&mut self) -> Result<C> {
        self.history
            .pop_back()
            .ok_or_else(|| Error::new(ErrorKind::NoExecutedCommands))
    }

    /// Empties the history.
    pub fn clear_executed_commands(&mut self) {
        self.history.clear();
    }

    /// Iterates over the history, oldest first.
    pub fn executed_commands(&self) -> impl Iterator<Item = &C> {
        self.history.iter()
    }

    // =========================================================================
    // Events
    // =========================================================================

    /// Queues a message for the player.
    pub fn add_event(&mut self, message: impl Into<String>) {
        self.events.push(message.into());
        self.has_events = true;
    }

    /// Returns true if events are waiting to be reported.
    #[must_use]
    pub const fn has_events(&self) -> bool {
        self.has_events
    }

    /// Joins every pending event, one per line. Events stay queued.
    ///
    /// # Errors
    ///
    /// Returns `NoGameEvents` if nothing is queued.
    pub fn report_events(&self) -> Result<String> {
        if self.events.is_empty() {
            return Err(Error::new(ErrorKind::NoGameEvents));
        }
        Ok(self.events.join("\n"))
    }

    /// Discards every pending event.
    pub fn clear_events(&mut self) {
        self.events.clear();
        self.has_events = false;
    }

    // =========================================================================
    // Lifecycle
    // =========================================================================

    /// Returns true once the game has ended.
    #[must_use]
    pub const fn is_ended(&self) -> bool {
        self.ended
    }

    /// Ends the game. There is no way back.
    pub fn end(&mut self) {
        self.ended = true;
    }
}

impl<C> fmt::Debug for Game<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Game")
            .field("title", &self.title)
            .field("current", &self.current)
            .field("inventory", &self.inventory)
            .field("history", &self.history.len())
            .field("events", &self.events)
            .field("ended", &self.ended)
            .finish_non_exhaustive()
    }
}

impl<C> fmt::Display for Game<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Game[{}]", self.title)
    }
}

/// Lists item names separated by commas and closed with a period.
///
/// With `show_values` each name is followed by its value in parentheses,
/// e.g. `key (5), lamp (2).`
#[must_use]
pub fn describe_items<'a>(items: impl IntoIterator<Item = &'a Item>, show_values: bool) -> String {
    let mut out = String::new();
    for (i, item) in items.into_iter().enumerate() {
        if i > 0 {
            out.push_str(", ");
        }
        out.push_str(item.name());
        if show_values {
            let _ = write!(out, " ({})", item.value());
        }
    }
    out.push('.');
    out
}
