//! Engine and command configuration.
//!
//! Every recognised setting is a [`ConfigKey`] with a typed default. A
//! [`Config`] is built once at startup by merging those defaults with an
//! override table (string keys, matched case-insensitively, unknown keys
//! ignored) and is immutable afterwards.

use std::collections::HashMap;
use std::fmt;

use crate::error::{Error, Result};

/// The player command kinds, in dispatch priority order.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum CommandKind {
    /// List the available commands.
    Help,
    /// Describe the current location.
    Look,
    /// Move an item from the location to the inventory.
    Take,
    /// Move an item from the inventory to the location.
    Drop,
    /// Move the player in a direction.
    Go,
    /// List carried items.
    Inventory,
    /// Describe a single item.
    Examine,
    /// Reverse the most recent reversible command.
    Undo,
    /// End the game.
    Quit,
}

impl CommandKind {
    /// All command kinds in dispatch priority order.
    pub const ALL: [CommandKind; 9] = [
        Self::Help,
        Self::Look,
        Self::Take,
        Self::Drop,
        Self::Go,
        Self::Inventory,
        Self::Examine,
        Self::Undo,
        Self::Quit,
    ];

    /// Name used inside configuration keys (`keyword.<name>Command`).
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Help => "help",
            Self::Look => "look",
            Self::Take => "take",
            Self::Drop => "drop",
            Self::Go => "go",
            Self::Inventory => "inventory",
            Self::Examine => "examine",
            Self::Undo => "undo",
            Self::Quit => "quit",
        }
    }

    /// Default keyword, abbreviation and alternate form.
    #[must_use]
    pub const fn default_keywords(self) -> [&'static str; 3] {
        match self {
            Self::Help => ["help", "info", "about"],
            Self::Look => ["look", "l", "search"],
            Self::Take => ["take", "t", "pick"],
            Self::Drop => ["drop", "d", "leave"],
            Self::Go => ["go", "g", "walk"],
            Self::Inventory => ["inventory", "inv", "items"],
            Self::Examine => ["examine", "x", "inspect"],
            Self::Undo => ["undo", "u", "back"],
            Self::Quit => ["quit", "q", "exit"],
        }
    }

    /// Default help line shown by the help command.
    #[must_use]
    pub const fn default_help(self) -> &'static str {
        match self {
            Self::Help => "help|info|about",
            Self::Look => "look|l|search",
            Self::Take => "(take|t|pick) <item name>",
            Self::Drop => "(drop|d|leave) <item name>",
            Self::Go => "(go|g|walk) <direction>",
            Self::Inventory => "inventory|inv|items",
            Self::Examine => "(examine|x|inspect) <item name>",
            Self::Undo => "undo|u|back",
            Self::Quit => "quit|q|exit",
        }
    }

    /// Whether commands of this kind can be undone (and so enter the history).
    #[must_use]
    pub const fn is_reversible(self) -> bool {
        matches!(self, Self::Take | Self::Drop | Self::Go)
    }
}

/// Which of a command's three accepted words a keyword key refers to.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum KeywordForm {
    /// `keyword.<kind>Command`
    Primary,
    /// `keyword.<kind>Command.abbrev`
    Abbrev,
    /// `keyword.<kind>Command.alt`
    Alt,
}

impl KeywordForm {
    /// All forms, in the order of [`CommandKind::default_keywords`].
    pub const ALL: [KeywordForm; 3] = [Self::Primary, Self::Abbrev, Self::Alt];

    const fn suffix(self) -> &'static str {
        match self {
            Self::Primary => "",
            Self::Abbrev => ".abbrev",
            Self::Alt => ".alt",
        }
    }

    const fn position(self) -> usize {
        match self {
            Self::Primary => 0,
            Self::Abbrev => 1,
            Self::Alt => 2,
        }
    }
}

/// A recognised configuration key.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[allow(missing_docs)]
pub enum ConfigKey {
    // Engine
    Prompt,
    UnknownCommand,
    EngineHelp,
    LocationWithItems,
    LocationWithoutItems,
    PlayerScore,
    GameOver,
    ShowEngineInfo,
    ShowGameInfo,
    AutodescribeFirstLocation,
    ShowLocationItems,
    ShowItemValues,
    CommandHistorySize,

    // Every command kind
    Keyword(CommandKind, KeywordForm),
    CommandHelp(CommandKind),

    // Take
    TakeNotInLocation,
    TakeRepeatedInLocation,
    TakeAlreadyInInventory,
    TakeSuccess,
    TakeUndoSuccess,
    TakeUndoFailure,
    TakeAllowFifo,
    TakeAllowRepetitions,

    // Drop
    DropNotInInventory,
    DropRepeatedInInventory,
    DropSuccess,
    DropUndoSuccess,
    DropUndoFailure,
    DropAllowFifo,

    // Go
    GoNoConnection,
    GoUndoSuccess,
    GoUndoFailure,

    // Inventory
    InventoryEmpty,
    InventoryContents,

    // Examine
    ExamineNotFound,

    // Undo
    UndoNothingToUndo,

    // Quit
    QuitBye,
}

impl ConfigKey {
    const FIXED: [ConfigKey; 35] = [
        Self::Prompt,
        Self::UnknownCommand,
        Self::EngineHelp,
        Self::LocationWithItems,
        Self::LocationWithoutItems,
        Self::PlayerScore,
        Self::GameOver,
        Self::ShowEngineInfo,
        Self::ShowGameInfo,
        Self::AutodescribeFirstLocation,
        Self::ShowLocationItems,
        Self::ShowItemValues,
        Self::CommandHistorySize,
        Self::TakeNotInLocation,
        Self::TakeRepeatedInLocation,
        Self::TakeAlreadyInInventory,
        Self::TakeSuccess,
        Self::TakeUndoSuccess,
        Self::TakeUndoFailure,
        Self::TakeAllowFifo,
        Self::TakeAllowRepetitions,
        Self::DropNotInInventory,
        Self::DropRepeatedInInventory,
        Self::DropSuccess,
        Self::DropUndoSuccess,
        Self::DropUndoFailure,
        Self::DropAllowFifo,
        Self::GoNoConnection,
        Self::GoUndoSuccess,
        Self::GoUndoFailure,
        Self::InventoryEmpty,
        Self::InventoryContents,
        Self::ExamineNotFound,
        Self::UndoNothingToUndo,
        Self::QuitBye,
    ];

    /// Returns every recognised key.
    pub fn all() -> impl Iterator<Item = ConfigKey> {
        let fixed = Self::FIXED.into_iter();
        let per_command = CommandKind::ALL.into_iter().flat_map(|kind| {
            KeywordForm::ALL
                .into_iter()
                .map(move |form| Self::Keyword(kind, form))
                .chain(std::iter::once(Self::CommandHelp(kind)))
        });
        fixed.chain(per_command)
    }

    /// Returns the property name of this key, e.g. `message.prompt`.
    #[must_use]
    pub fn name(self) -> String {
        match self {
            Self::Keyword(kind, form) => {
                format!("keyword.{}Command{}", kind.name(), form.suffix())
            }
            Self::CommandHelp(kind) => format!("message.{}Command.help", kind.name()),
            other => other.fixed_name().to_string(),
        }
    }

    fn fixed_name(self) -> &'static str {
        match self {
            Self::Prompt => "message.prompt",
            Self::UnknownCommand => "message.unknownCommand",
            Self::EngineHelp => "message.engineHelp",
            Self::LocationWithItems => "message.locationWithItems",
            Self::LocationWithoutItems => "message.locationWithoutItems",
            Self::PlayerScore => "message.playerScore",
            Self::GameOver => "message.gameOver",
            Self::ShowEngineInfo => "flag.showEngineInfo",
            Self::ShowGameInfo => "flag.showGameInfo",
            Self::AutodescribeFirstLocation => "flag.autodescribeFirstLocation",
            Self::ShowLocationItems => "flag.showLocationItems",
            Self::ShowItemValues => "flag.showItemValues",
            Self::CommandHistorySize => "limit.commandHistorySize",
            Self::TakeNotInLocation => "message.takeCommand.itemNameNotInLocation",
            Self::TakeRepeatedInLocation => "message.takeCommand.itemNameRepeatedInLocation",
            Self::TakeAlreadyInInventory => "message.takeCommand.itemNameAlreadyInInventory",
            Self::TakeSuccess => "message.takeCommand.success",
            Self::TakeUndoSuccess => "message.takeCommand.undoSuccess",
            Self::TakeUndoFailure => "message.takeCommand.undoFailure",
            Self::TakeAllowFifo => {
                "flag.takeCommand.allowFIFODisambiguationForItemNameRepeatedInLocation"
            }
            Self::TakeAllowRepetitions => "flag.takeCommand.allowRepetitionsInInventoryItemNames",
            Self::DropNotInInventory => "message.dropCommand.itemNameNotInInventory",
            Self::DropRepeatedInInventory => "message.dropCommand.itemNameRepeatedInInventory",
            Self::DropSuccess => "message.dropCommand.success",
            Self::DropUndoSuccess => "message.dropCommand.undoSuccess",
            Self::DropUndoFailure => "message.dropCommand.undoFailure",
            Self::DropAllowFifo => {
                "flag.dropCommand.allowFIFODisambiguationForItemNameRepeatedInInventory"
            }
            Self::GoNoConnection => "message.goCommand.noConnection",
            Self::GoUndoSuccess => "message.goCommand.undoSuccess",
            Self::GoUndoFailure => "message.goCommand.undoFailure",
            Self::InventoryEmpty => "message.inventoryCommand.empty",
            Self::InventoryContents => "message.inventoryCommand.contents",
            Self::ExamineNotFound => "message.examineCommand.notFound",
            Self::UndoNothingToUndo => "message.undoCommand.nothingToUndo",
            Self::QuitBye => "message.quitCommand.bye",
            Self::Keyword(..) | Self::CommandHelp(_) => "",
        }
    }

    /// Returns the value this key has when no override is given.
    #[must_use]
    pub fn default_value(self) -> ConfigValue {
        match self {
            Self::Prompt => "> ".into(),
            Self::UnknownCommand => "Pardon?".into(),
            Self::EngineHelp => "These are the available player commands:".into(),
            Self::LocationWithItems => "This location contains the following items: ".into(),
            Self::LocationWithoutItems => "This location has no items.".into(),
            Self::PlayerScore => "Player score: ".into(),
            Self::GameOver => "GAME OVER".into(),
            Self::ShowEngineInfo
            | Self::ShowGameInfo
            | Self::AutodescribeFirstLocation
            | Self::ShowLocationItems
            | Self::ShowItemValues => true.into(),
            Self::CommandHistorySize => ConfigValue::Number(1),
            Self::Keyword(kind, form) => kind.default_keywords()[form.position()].into(),
            Self::CommandHelp(kind) => kind.default_help().into(),
            Self::TakeNotInLocation => "There is no item with that name in this location.".into(),
            Self::TakeRepeatedInLocation => {
                "There are several items with that name in this location.".into()
            }
            Self::TakeAlreadyInInventory => {
                "There is another item with that name in the inventory.".into()
            }
            Self::TakeSuccess => "It has been taken.".into(),
            Self::TakeUndoSuccess => "It has returned to this location.".into(),
            Self::TakeUndoFailure => {
                "The item cannot return to this location from the inventory.".into()
            }
            Self::TakeAllowFifo | Self::TakeAllowRepetitions | Self::DropAllowFifo => false.into(),
            Self::DropNotInInventory => "You are not carrying an item with that name.".into(),
            Self::DropRepeatedInInventory => "You are carrying several items with that name.".into(),
            Self::DropSuccess => "It has been dropped.".into(),
            Self::DropUndoSuccess => "It has returned to the inventory.".into(),
            Self::DropUndoFailure => {
                "The item cannot return to the inventory from this location.".into()
            }
            Self::GoNoConnection => "You cannot go that way.".into(),
            Self::GoUndoSuccess => "You have returned to the previous location.".into(),
            Self::GoUndoFailure => "You cannot return to the previous location.".into(),
            Self::InventoryEmpty => "You are carrying nothing.".into(),
            Self::InventoryContents => "You are carrying the following items: ".into(),
            Self::ExamineNotFound => "There is no item with that name here.".into(),
            Self::UndoNothingToUndo => "There is nothing to undo.".into(),
            Self::QuitBye => "You leave the adventure.".into(),
        }
    }
}

impl fmt::Display for ConfigKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name())
    }
}

/// A typed configuration value.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ConfigValue {
    /// A message or keyword.
    Text(String),
    /// An on/off switch.
    Flag(bool),
    /// An integer limit.
    Number(i64),
}

impl ConfigValue {
    /// Parses `raw` as a value of the same type as `self`.
    ///
    /// Flags follow the lenient convention: `true` (any case) is true and
    /// anything else is false.
    fn parse_like(&self, key: ConfigKey, raw: &str) -> Result<Self> {
        match self {
            Self::Text(_) => Ok(Self::Text(raw.to_string())),
            Self::Flag(_) => Ok(Self::Flag(raw.trim().eq_ignore_ascii_case("true"))),
            Self::Number(_) => raw
                .trim()
                .parse()
                .map(Self::Number)
                .map_err(|_| Error::invalid_config(key.name(), raw)),
        }
    }
}

impl From<&str> for ConfigValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for ConfigValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<bool> for ConfigValue {
    fn from(value: bool) -> Self {
        Self::Flag(value)
    }
}

impl From<i64> for ConfigValue {
    fn from(value: i64) -> Self {
        Self::Number(value)
    }
}

/// Immutable configuration shared by the engine and every command.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    values: HashMap<ConfigKey, ConfigValue>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            values: ConfigKey::all()
                .map(|key| (key, key.default_value()))
                .collect(),
        }
    }
}

impl Config {
    /// Creates a configuration holding every default.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a configuration from defaults plus an override table.
    ///
    /// Keys are matched case-insensitively and unknown keys are ignored.
    ///
    /// # Errors
    ///
    /// Returns [`crate::ErrorKind::InvalidConfig`] if an integer key holds a
    /// value that does not parse.
    pub fn from_table<'a, I>(table: I) -> Result<Self>
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let index: HashMap<String, ConfigKey> = ConfigKey::all()
            .map(|key| (key.name().to_ascii_lowercase(), key))
            .collect();

        let mut config = Self::default();
        for (name, raw) in table {
            let Some(&key) = index.get(&name.to_ascii_lowercase()) else {
                continue;
            };
            let value = key.default_value().parse_like(key, raw)?;
            config.values.insert(key, value);
        }
        Ok(config)
    }

    /// Returns a copy with one value overridden.
    #[must_use]
    pub fn with(mut self, key: ConfigKey, value: impl Into<ConfigValue>) -> Self {
        self.values.insert(key, value.into());
        self
    }

    /// Returns the value stored for `key`.
    #[must_use]
    pub fn get(&self, key: ConfigKey) -> Option<&ConfigValue> {
        self.values.get(&key)
    }

    /// Returns a text setting, or the empty string if `key` is not textual.
    #[must_use]
    pub fn text(&self, key: ConfigKey) -> &str {
        match self.values.get(&key) {
            Some(ConfigValue::Text(s)) => s,
            _ => "",
        }
    }

    /// Returns a flag setting, or `false` if `key` is not a flag.
    #[must_use]
    pub fn flag(&self, key: ConfigKey) -> bool {
        matches!(self.values.get(&key), Some(ConfigValue::Flag(true)))
    }

    /// Returns an integer setting, or `0` if `key` is not numeric.
    #[must_use]
    pub fn number(&self, key: ConfigKey) -> i64 {
        match self.values.get(&key) {
            Some(ConfigValue::Number(n)) => *n,
            _ => 0,
        }
    }

    /// Maximum number of commands kept for undo. Negative limits count as zero.
    #[must_use]
    pub fn history_limit(&self) -> usize {
        usize::try_from(self.number(ConfigKey::CommandHistorySize)).unwrap_or(0)
    }

    /// Returns the three words that invoke commands of `kind`.
    #[must_use]
    pub fn keywords(&self, kind: CommandKind) -> [&str; 3] {
        KeywordForm::ALL.map(|form| self.text(ConfigKey::Keyword(kind, form)))
    }
}
