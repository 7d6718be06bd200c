//! Player commands.
//!
//! A [`Command`] is created fresh for one input line and one command kind.
//! It moves through [`CommandState`]: `parse` reads the line, `execute`
//! applies it to the game, and `undo` (Take, Drop and Go only) reverses it.
//!
//! Player mistakes such as naming an absent item are reported through the
//! result string and a `false` return. Errors are reserved for misuse of the
//! lifecycle and broken world invariants.

use wayfarer_foundation::{CommandKind, Config, ConfigKey, Direction, Error, ErrorKind, Result};
use wayfarer_world::{Game, ItemId, LocationId, describe_items};

use crate::tokenizer::InputTokenizer;
use crate::vocabulary::Vocabulary;

/// Lifecycle of a command.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum CommandState {
    /// Freshly created.
    Unparsed,
    /// The line matched this command.
    Parsed,
    /// Applied to the game.
    Executed,
    /// Reversed.
    Undone,
}

/// What a parsed command does, with the state needed to reverse it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Action {
    /// List the available commands.
    Help,
    /// Describe the current location.
    Look,
    /// Move an item from the location to the inventory.
    Take {
        /// Item name as typed.
        item: String,
        /// The item actually moved.
        moved: Option<ItemId>,
    },
    /// Move an item from the inventory to the location.
    Drop {
        /// Item name as typed.
        item: String,
        /// The item actually moved.
        moved: Option<ItemId>,
    },
    /// Move the player.
    Go {
        /// Where to go.
        direction: Direction,
        /// Where the player was before moving.
        from: Option<LocationId>,
    },
    /// List carried items.
    Inventory,
    /// Describe one item.
    Examine {
        /// Item name as typed.
        item: String,
    },
    /// Reverse the most recent recorded command.
    Undo,
    /// End the game.
    Quit,
}

/// One player command.
#[derive(Clone, Debug)]
pub struct Command {
    kind: CommandKind,
    action: Option<Action>,
    state: CommandState,
    result: Option<String>,
}

impl Command {
    /// Creates an unparsed command of the given kind.
    #[must_use]
    pub const fn new(kind: CommandKind) -> Self {
        Self {
            kind,
            action: None,
            state: CommandState::Unparsed,
            result: None,
        }
    }

    /// Returns the command kind.
    #[must_use]
    pub const fn kind(&self) -> CommandKind {
        self.kind
    }

    /// Returns the lifecycle state.
    #[must_use]
    pub const fn state(&self) -> CommandState {
        self.state
    }

    /// Returns the parsed action, if any.
    #[must_use]
    pub const fn action(&self) -> Option<&Action> {
        self.action.as_ref()
    }

    /// Returns the text produced by the last execute or undo.
    #[must_use]
    pub fn result(&self) -> Option<&str> {
        self.result.as_deref()
    }

    /// Returns true if execute or undo produced text.
    #[must_use]
    pub const fn has_result(&self) -> bool {
        self.result.is_some()
    }

    /// Returns true if this command can be undone.
    #[must_use]
    pub const fn is_reversible(&self) -> bool {
        self.kind.is_reversible()
    }

    /// Tries to read `line` as this command.
    ///
    /// The first word must be one of the command's words. Take, Drop and
    /// Examine need a second word naming the item; Go needs a second word
    /// naming a direction.
    pub fn parse(&mut self, line: &str, vocabulary: &Vocabulary) -> bool {
        let tokens = InputTokenizer::tokenize(line);
        let Some(verb) = InputTokenizer::word(&tokens, 0) else {
            return false;
        };
        if !vocabulary.is_keyword(self.kind, verb) {
            return false;
        }
        let argument = InputTokenizer::word(&tokens, 1).map(str::to_string);

        let action = match (self.kind, argument) {
            (CommandKind::Help, _) => Action::Help,
            (CommandKind::Look, _) => Action::Look,
            (CommandKind::Inventory, _) => Action::Inventory,
            (CommandKind::Undo, _) => Action::Undo,
            (CommandKind::Quit, _) => Action::Quit,
            (CommandKind::Take, Some(item)) => Action::Take { item, moved: None },
            (CommandKind::Drop, Some(item)) => Action::Drop { item, moved: None },
            (CommandKind::Examine, Some(item)) => Action::Examine { item },
            (CommandKind::Go, Some(word)) => match Direction::from_word(&word) {
                Some(direction) => Action::Go {
                    direction,
                    from: None,
                },
                None => return false,
            },
            (CommandKind::Take | CommandKind::Drop | CommandKind::Examine | CommandKind::Go, None) => {
                return false;
            }
        };

        self.action = Some(action);
        self.state = CommandState::Parsed;
        self.result = None;
        true
    }

    /// Applies the command to `game`.
    ///
    /// Returns whether the game-level effect happened.
    ///
    /// # Errors
    ///
    /// Returns `UnparsedCommand` if the command was never parsed, or any
    /// world error raised while moving items or the player.
    pub fn execute(&mut self, game: &mut Game<Command>, config: &Config) -> Result<bool> {
        let Some(action) = self.action.as_mut() else {
            return Err(Error::new(ErrorKind::UnparsedCommand));
        };

        let (success, text) = match action {
            Action::Help => (
                true,
                format!("{}\n{}\n", config.text(ConfigKey::EngineHelp), help_listing(config)),
            ),
            Action::Look => (true, describe_location(game, config)),
            Action::Take { item, moved } => take_item(game, config, item, moved)?,
            Action::Drop { item, moved } => drop_item(game, config, item, moved)?,
            Action::Go { direction, from } => {
                if game.has_connected_location(*direction) {
                    let previous = game.current_location_id();
                    game.move_player(*direction)?;
                    *from = Some(previous);
                    (true, describe_location(game, config))
                } else {
                    (false, message(config, ConfigKey::GoNoConnection))
                }
            }
            Action::Inventory => (true, describe_inventory(game, config)),
            Action::Examine { item } => {
                let found = game
                    .items_in_inventory(item)
                    .into_iter()
                    .chain(game.items_in_location(item))
                    .next();
                match found {
                    Some(found) => (true, format!("{}: {}\n", found.name(), found.description())),
                    None => (false, message(config, ConfigKey::ExamineNotFound)),
                }
            }
            Action::Undo => undo_newest(game, config)?,
            Action::Quit => {
                game.end();
                (true, message(config, ConfigKey::QuitBye))
            }
        };

        log::debug!("{} command executed: {success}", self.kind.name());
        self.result = Some(text);
        self.state = CommandState::Executed;
        Ok(success)
    }

    /// Reverses an executed Take, Drop or Go.
    ///
    /// Returns false, with the failure message as result, if the world no
    /// longer allows the reversal (for instance the taken item is gone).
    ///
    /// # Errors
    ///
    /// Returns `IrreversibleCommand` for other kinds, `UnparsedCommand` if
    /// never parsed, `UnexecutedCommand` if never executed and
    /// `CommandAlreadyUndone` on a second undo.
    pub fn undo(&mut self, game: &mut Game<Command>, config: &Config) -> Result<bool> {
        if !self.is_reversible() {
            return Err(Error::new(ErrorKind::IrreversibleCommand));
        }
        match self.state {
            CommandState::Unparsed => return Err(Error::new(ErrorKind::UnparsedCommand)),
            CommandState::Parsed => return Err(Error::new(ErrorKind::UnexecutedCommand)),
            CommandState::Undone => return Err(Error::new(ErrorKind::CommandAlreadyUndone)),
            CommandState::Executed => {}
        }
        let Some(action) = self.action.as_ref() else {
            return Err(Error::new(ErrorKind::UnparsedCommand));
        };

        let (success, text) = match action {
            Action::Take { moved: Some(id), .. }
                if game.is_item_in_inventory(*id) && !game.is_item_in_location(*id) =>
            {
                game.move_item_to_location(*id)?;
                (true, message(config, ConfigKey::TakeUndoSuccess))
            }
            Action::Take { .. } => (false, message(config, ConfigKey::TakeUndoFailure)),
            Action::Drop { moved: Some(id), .. }
                if game.is_item_in_location(*id) && !game.is_item_in_inventory(*id) =>
            {
                game.move_item_to_inventory(*id)?;
                (true, message(config, ConfigKey::DropUndoSuccess))
            }
            Action::Drop { .. } => (false, message(config, ConfigKey::DropUndoFailure)),
            Action::Go {
                from: Some(from), ..
            } => {
                game.relocate_player(*from)?;
                (
                    true,
                    format!(
                        "{}{}",
                        message(config, ConfigKey::GoUndoSuccess),
                        describe_location(game, config)
                    ),
                )
            }
            Action::Go { .. } => (false, message(config, ConfigKey::GoUndoFailure)),
            _ => return Err(Error::new(ErrorKind::IrreversibleCommand)),
        };

        log::debug!("{} command undone: {success}", self.kind.name());
        self.result = Some(text);
        self.state = CommandState::Undone;
        Ok(success)
    }
}

fn take_item(
    game: &mut Game<Command>,
    config: &Config,
    item: &str,
    moved: &mut Option<ItemId>,
) -> Result<(bool, String)> {
    let found = game.items_in_location(item);
    let Some(first) = found.first().map(|i| i.id()) else {
        return Ok((false, message(config, ConfigKey::TakeNotInLocation)));
    };
    if found.len() > 1 && !config.flag(ConfigKey::TakeAllowFifo) {
        return Ok((false, message(config, ConfigKey::TakeRepeatedInLocation)));
    }
    if !game.items_in_inventory(item).is_empty() && !config.flag(ConfigKey::TakeAllowRepetitions) {
        return Ok((false, message(config, ConfigKey::TakeAlreadyInInventory)));
    }
    game.move_item_to_inventory(first)?;
    *moved = Some(first);
    Ok((true, message(config, ConfigKey::TakeSuccess)))
}

fn drop_item(
    game: &mut Game<Command>,
    config: &Config,
    item: &str,
    moved: &mut Option<ItemId>,
) -> Result<(bool, String)> {
    let found = game.items_in_inventory(item);
    let Some(first) = found.first().map(|i| i.id()) else {
        return Ok((false, message(config, ConfigKey::DropNotInInventory)));
    };
    if found.len() > 1 && !config.flag(ConfigKey::DropAllowFifo) {
        return Ok((false, message(config, ConfigKey::DropRepeatedInInventory)));
    }
    game.move_item_to_location(first)?;
    *moved = Some(first);
    Ok((true, message(config, ConfigKey::DropSuccess)))
}

/// Undoes the newest reversible command, discarding the entries above it.
fn undo_newest(game: &mut Game<Command>, config: &Config) -> Result<(bool, String)> {
    while game.executed_command_count() > 0 {
        let mut previous = game.remove_newest_executed_command()?;
        if !previous.is_reversible() {
            log::trace!("skipping {} in history", previous.kind().name());
            continue;
        }
        let undone = previous.undo(game, config)?;
        return Ok((undone, previous.result().unwrap_or_default().to_string()));
    }
    Ok((false, message(config, ConfigKey::UndoNothingToUndo)))
}

/// A configured message as one output line.
fn message(config: &Config, key: ConfigKey) -> String {
    format!("{}\n", config.text(key))
}

/// The help line of every command kind, in dispatch priority order.
#[must_use]
pub fn help_listing(config: &Config) -> String {
    CommandKind::ALL
        .into_iter()
        .map(|kind| config.text(ConfigKey::CommandHelp(kind)))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Name and description of the player's location, followed by its items
/// when `flag.showLocationItems` is set.
#[must_use]
pub fn describe_location<C>(game: &Game<C>, config: &Config) -> String {
    let location = game.current_location();
    let mut text = format!("{}\n{}\n", location.name(), location.description());
    if config.flag(ConfigKey::ShowLocationItems) {
        let items = location.all_items();
        if items.is_empty() {
            text.push('\n');
            text.push_str(&message(config, ConfigKey::LocationWithoutItems));
        } else {
            let show_values = config.flag(ConfigKey::ShowItemValues);
            text.push('\n');
            text.push_str(config.text(ConfigKey::LocationWithItems));
            text.push_str(&describe_items(items, show_values));
            text.push('\n');
        }
    }
    text
}

fn describe_inventory<C>(game: &Game<C>, config: &Config) -> String {
    let items = game.all_inventory_items();
    if items.is_empty() {
        return message(config, ConfigKey::InventoryEmpty);
    }
    let show_values = config.flag(ConfigKey::ShowItemValues);
    let mut text = format!(
        "{}{}\n",
        config.text(ConfigKey::InventoryContents),
        describe_items(items, show_values)
    );
    if show_values {
        text.push_str(config.text(ConfigKey::PlayerScore));
        text.push_str(&game.inventory_value().to_string());
        text.push('\n');
    }
    text
}
