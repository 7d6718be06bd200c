//! Error types for the Wayfarer system.
//!
//! Uses `thiserror` for ergonomic error definition. Definition-load failures
//! and runtime contract violations are distinct [`ErrorKind`]s so callers can
//! match on them; player mistakes never surface here.

use thiserror::Error;

/// Result type alias for Wayfarer operations.
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for Wayfarer operations.
#[derive(Debug, Error)]
#[error("{kind}{}", .origin.as_ref().map(|o| format!(" (in {o})")).unwrap_or_default())]
pub struct Error {
    /// The kind of error that occurred.
    pub kind: ErrorKind,
    /// Where the error came from, such as a definition or config file path.
    pub origin: Option<String>,
}

impl Error {
    /// Creates a new error with the given kind.
    #[must_use]
    pub fn new(kind: ErrorKind) -> Self {
        Self { kind, origin: None }
    }

    /// Records where this error came from.
    #[must_use]
    pub fn with_origin(mut self, origin: impl Into<String>) -> Self {
        self.origin = Some(origin.into());
        self
    }

    /// Creates a definition-load error.
    #[must_use]
    pub fn invalid_definition(line: u32, message: impl Into<String>) -> Self {
        Self::new(ErrorKind::InvalidDefinition {
            line,
            message: message.into(),
        })
    }

    /// Creates an invalid configuration value error.
    #[must_use]
    pub fn invalid_config(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self::new(ErrorKind::InvalidConfig {
            key: key.into(),
            value: value.into(),
        })
    }

    /// Creates an unknown location error.
    #[must_use]
    pub fn unknown_location(id: impl Into<String>) -> Self {
        Self::new(ErrorKind::UnknownLocation(id.into()))
    }

    /// Creates an I/O error from anything displayable.
    #[must_use]
    pub fn io(message: impl ToString) -> Self {
        Self::new(ErrorKind::Io(message.to_string()))
    }

    /// Returns the definition line this error refers to, if any.
    #[must_use]
    pub fn line(&self) -> Option<u32> {
        match &self.kind {
            ErrorKind::InvalidDefinition { line, .. } => Some(*line),
            _ => None,
        }
    }
}

impl From<ErrorKind> for Error {
    fn from(kind: ErrorKind) -> Self {
        Self::new(kind)
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Self::io(err)
    }
}

/// Categorized error kinds for pattern matching.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ErrorKind {
    /// The game definition is malformed. Loading aborts; no partial world exists.
    #[error("error in line {line} of game definition: {message}")]
    InvalidDefinition {
        /// Line number (1-indexed) of the last token read.
        line: u32,
        /// What was expected or found.
        message: String,
    },

    /// A command was executed before it was parsed.
    #[error("unparsed command")]
    UnparsedCommand,

    /// A command was undone before it was executed.
    #[error("unexecuted command")]
    UnexecutedCommand,

    /// A command was undone a second time.
    #[error("command already undone")]
    CommandAlreadyUndone,

    /// Undo was requested on a command kind that cannot be reversed.
    #[error("command cannot be undone")]
    IrreversibleCommand,

    /// The destination repository already holds this exact item.
    #[error("item already present in repository")]
    ItemAlreadyInRepository,

    /// The source repository does not hold this item.
    #[error("item not present in repository")]
    ItemNotInRepository,

    /// There is no connection in the requested direction.
    #[error("no connected location")]
    NoConnectedLocation,

    /// The location is not an exit location.
    #[error("location has no exit threshold")]
    NoExitThreshold,

    /// The event log was read while empty.
    #[error("no game events")]
    NoGameEvents,

    /// The command history was popped while empty.
    #[error("no executed commands")]
    NoExecutedCommands,

    /// A location id does not name any location in the world.
    #[error("unknown location: {0}")]
    UnknownLocation(String),

    /// A configuration value could not be read as its key's type.
    #[error("invalid value {value:?} for configuration key {key}")]
    InvalidConfig {
        /// The configuration key.
        key: String,
        /// The offending value.
        value: String,
    },

    /// Reading input or writing output failed.
    #[error("i/o error: {0}")]
    Io(String),

    /// Internal error (should not happen).
    #[error("internal error: {0}")]
    Internal(String),
}
