//! Token types for the world definition language.

/// A token from lexical analysis.
#[derive(Clone, Debug, PartialEq)]
pub struct Token {
    /// The type and value of this token.
    pub kind: TokenKind,
    line: u32,
}

impl Token {
    /// Creates a token starting on the 1-based `line`.
    #[must_use]
    pub const fn new(kind: TokenKind, line: u32) -> Self {
        Self { kind, line }
    }

    /// Returns the line this token starts on.
    #[must_use]
    pub const fn line(&self) -> u32 {
        self.line
    }

    /// Returns true if this is the bare word `word`.
    #[must_use]
    pub fn is_word(&self, word: &str) -> bool {
        matches!(&self.kind, TokenKind::Word(w) if w == word)
    }
}

/// Token types for the world definition language.
#[derive(Clone, Debug, PartialEq)]
pub enum TokenKind {
    /// Bare word like `location`, `hall` or `n`
    Word(String),
    /// Quoted string with the quotes stripped and escapes resolved
    String(String),
    /// Integer literal like `5` or `-2`
    Int(i64),
    /// Number with a fraction like `2.5`
    Float(f64),
    /// Comment text (including `#`)
    Comment(String),
    /// End of input
    Eof,
    /// Lexer error
    Error(String),
}

impl TokenKind {
    /// Returns true if this token kind should be ignored during parsing.
    #[must_use]
    pub const fn is_trivia(&self) -> bool {
        matches!(self, Self::Comment(_))
    }

    /// Returns true if this token is a number of either kind.
    #[must_use]
    pub const fn is_number(&self) -> bool {
        matches!(self, Self::Int(_) | Self::Float(_))
    }

    /// Returns a human-readable name for this token kind.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::Word(_) => "word",
            Self::String(_) => "string",
            Self::Int(_) => "integer",
            Self::Float(_) => "number",
            Self::Comment(_) => "comment",
            Self::Eof => "end of input",
            Self::Error(_) => "error",
        }
    }
}
