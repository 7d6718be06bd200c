//! The game run loop.
//!
//! An [`Engine`] owns the game, the command parser and both console
//! handles. Each turn reads a line, runs the first command that accepts it,
//! applies the history policy and prints the result and any game events.

use std::io::{self, Write};

use wayfarer_foundation::{Config, ConfigKey, Result};
use wayfarer_parser::{Command, CommandParser};
use wayfarer_world::{Game, describe_items};

use crate::editor::{LineEditor, ReadResult, RustylineEditor};

/// Banner printed at startup when `flag.showEngineInfo` is set.
pub const ENGINE_INFO: &str = concat!(
    "WAYFARER, A GAME ENGINE FOR TEXT ADVENTURES\n",
    "Version ",
    env!("CARGO_PKG_VERSION")
);

/// Drives one game from its introduction to its end.
pub struct Engine<E: LineEditor = RustylineEditor, W: Write = io::Stdout> {
    game: Game<Command>,
    parser: CommandParser,
    editor: E,
    out: W,
}

impl Engine {
    /// Creates an engine reading from the terminal and printing to stdout.
    ///
    /// # Errors
    ///
    /// Returns an `Io` error if the line editor cannot be initialised.
    pub fn new(game: Game<Command>, config: Config) -> Result<Self> {
        Ok(Self::with_io(game, config, RustylineEditor::new()?, io::stdout()))
    }
}

impl<E: LineEditor, W: Write> Engine<E, W> {
    /// Creates an engine over explicit input and output handles.
    pub fn with_io(game: Game<Command>, config: Config, mut editor: E, out: W) -> Self {
        let parser = CommandParser::new(config);
        editor.set_keywords(parser.vocabulary().all_words());
        Self {
            game,
            parser,
            editor,
            out,
        }
    }

    /// The game being played.
    #[must_use]
    pub fn game(&self) -> &Game<Command> {
        &self.game
    }

    /// The configuration in effect.
    #[must_use]
    pub fn config(&self) -> &Config {
        self.parser.config()
    }

    /// Consumes the engine and returns its output handle.
    pub fn into_output(self) -> W {
        self.out
    }

    /// Plays the game until it ends or the input runs out.
    ///
    /// History and events are cleared first, then the introduction is
    /// printed. Ctrl+C abandons the current line only.
    ///
    /// # Errors
    ///
    /// Returns `Io` errors from either handle, and any domain error raised
    /// while executing a command.
    pub fn run(&mut self) -> Result<()> {
        self.game.clear_executed_commands();
        self.game.clear_events();
        self.print_introduction()?;

        while !self.game.is_ended() {
            let prompt = self.config().text(ConfigKey::Prompt).to_owned();
            let line = match self.editor.read_line(&prompt)? {
                ReadResult::Line(line) => line,
                ReadResult::Interrupted => continue,
                ReadResult::Eof => {
                    log::debug!("input exhausted");
                    break;
                }
            };
            if !line.trim().is_empty() {
                self.editor.add_history(&line);
            }
            self.turn(&line)?;
        }

        self.out.flush()?;
        Ok(())
    }

    /// Runs a single player line.
    ///
    /// # Errors
    ///
    /// See [`Engine::run`].
    pub fn turn(&mut self, line: &str) -> Result<()> {
        let Some(mut command) = self.parser.parse_next_command(line) else {
            writeln!(self.out, "{}", self.parser.config().text(ConfigKey::UnknownCommand))?;
            return Ok(());
        };

        let executed = self.parser.execute(&mut command, &mut self.game)?;
        if let Some(result) = command.result() {
            write!(self.out, "{result}")?;
        }
        self.parser.record(&mut self.game, command, executed)?;

        if self.game.has_events() {
            let events = self.game.report_events()?;
            writeln!(self.out, "{events}")?;
            self.print_game_over()?;
            self.game.clear_events();
        }
        Ok(())
    }

    fn print_introduction(&mut self) -> Result<()> {
        let config = self.parser.config();
        if config.flag(ConfigKey::ShowEngineInfo) {
            writeln!(self.out, "{ENGINE_INFO}\n")?;
        }
        if config.flag(ConfigKey::ShowGameInfo) {
            writeln!(self.out, "{}\n", self.game.report_information())?;
        }
        if config.flag(ConfigKey::AutodescribeFirstLocation) {
            writeln!(
                self.out,
                "{}\n{}\n",
                self.game.report_location_name(),
                self.game.report_location_description()
            )?;
        }
        if config.flag(ConfigKey::ShowLocationItems) {
            let items = self.game.all_location_items();
            if items.is_empty() {
                writeln!(self.out, "{}\n", config.text(ConfigKey::LocationWithoutItems))?;
            } else {
                let listing = describe_items(items, config.flag(ConfigKey::ShowItemValues));
                writeln!(
                    self.out,
                    "{}{listing}\n",
                    config.text(ConfigKey::LocationWithItems)
                )?;
            }
        }
        Ok(())
    }

    fn print_game_over(&mut self) -> Result<()> {
        let config = self.parser.config();
        let game_over = config.text(ConfigKey::GameOver);
        if config.flag(ConfigKey::ShowItemValues) {
            writeln!(
                self.out,
                "\n{}{}\n{game_over}",
                config.text(ConfigKey::PlayerScore),
                self.game.inventory_value()
            )?;
        } else {
            writeln!(self.out, "{game_over}")?;
        }
        Ok(())
    }
}
