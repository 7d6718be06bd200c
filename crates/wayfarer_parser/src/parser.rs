//! Command dispatch.
//!
//! Turns an input line into the first command kind, in priority order, whose
//! parse accepts it, and applies the history policy after execution.

use wayfarer_foundation::{CommandKind, Config, Result};
use wayfarer_world::Game;

use crate::command::{Command, help_listing};
use crate::vocabulary::Vocabulary;

/// Parses player lines into commands under one configuration.
#[derive(Clone, Debug)]
pub struct CommandParser {
    config: Config,
    vocabulary: Vocabulary,
}

impl CommandParser {
    /// Creates a parser for `config`.
    #[must_use]
    pub fn new(config: Config) -> Self {
        let vocabulary = Vocabulary::from_config(&config);
        Self { config, vocabulary }
    }

    /// Returns the configuration.
    #[must_use]
    pub const fn config(&self) -> &Config {
        &self.config
    }

    /// Returns the command vocabulary.
    #[must_use]
    pub const fn vocabulary(&self) -> &Vocabulary {
        &self.vocabulary
    }

    /// Returns the parsed command for `line`, or `None` if no kind accepts it.
    ///
    /// Kinds are tried in the order Help, Look, Take, Drop, Go, Inventory,
    /// Examine, Undo, Quit; each try uses a fresh command.
    #[must_use]
    pub fn parse_next_command(&self, line: &str) -> Option<Command> {
        let command = CommandKind::ALL.into_iter().find_map(|kind| {
            let mut command = Command::new(kind);
            command.parse(line, &self.vocabulary).then_some(command)
        });
        match &command {
            Some(command) => log::debug!("{line:?} parsed as {}", command.kind().name()),
            None => {
                let named = line
                    .split_whitespace()
                    .next()
                    .and_then(|word| self.vocabulary.classify(word));
                match named {
                    Some(kind) => log::debug!("{line:?} names {} but does not fit it", kind.name()),
                    None => log::debug!("{line:?} matches no command"),
                }
            }
        }
        command
    }

    /// The help line of every command, one per line.
    #[must_use]
    pub fn report_help(&self) -> String {
        help_listing(&self.config)
    }

    /// Executes `command` against `game` under this configuration.
    ///
    /// # Errors
    ///
    /// See [`Command::execute`].
    pub fn execute(&self, command: &mut Command, game: &mut Game<Command>) -> Result<bool> {
        command.execute(game, &self.config)
    }

    /// Stores an executed command in the game history if its execution
    /// succeeded.
    ///
    /// Undo commands are not stored, since they consume history. When the
    /// history is full the oldest entry is evicted first; a limit
    /// of zero keeps nothing. Returns whether the command was stored.
    ///
    /// # Errors
    ///
    /// Returns `NoExecutedCommands` only if the history shrinks underneath
    /// the eviction, which a single-threaded caller cannot cause.
    pub fn record(&self, game: &mut Game<Command>, command: Command, executed: bool) -> Result<bool> {
        let limit = self.config.history_limit();
        if !executed || limit == 0 || command.kind() == CommandKind::Undo {
            return Ok(false);
        }
        while game.executed_command_count() >= limit {
            game.remove_oldest_executed_command()?;
        }
        game.add_executed_command(command);
        Ok(true)
    }
}

impl Default for CommandParser {
    fn default() -> Self {
        Self::new(Config::default())
    }
}
