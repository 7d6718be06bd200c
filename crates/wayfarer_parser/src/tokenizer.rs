//! Input tokenization.
//!
//! Splits a raw player line into whitespace-separated words. Case is kept:
//! keywords are compared case-insensitively but item names are not.

/// A token from player input.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum InputToken {
    /// A word, as typed
    Word(String),
    /// End of input
    End,
}

impl InputToken {
    /// Returns the word, or `None` for [`InputToken::End`].
    #[must_use]
    pub fn as_word(&self) -> Option<&str> {
        match self {
            Self::Word(w) => Some(w),
            Self::End => None,
        }
    }
}

/// Tokenizes player input.
pub struct InputTokenizer;

impl InputTokenizer {
    /// Tokenizes a raw input line. The result always ends with
    /// [`InputToken::End`].
    #[must_use]
    pub fn tokenize(input: &str) -> Vec<InputToken> {
        input
            .split_whitespace()
            .map(|w| InputToken::Word(w.to_string()))
            .chain(std::iter::once(InputToken::End))
            .collect()
    }

    /// Returns the word at `index`, if the line has that many words.
    #[must_use]
    pub fn word(tokens: &[InputToken], index: usize) -> Option<&str> {
        tokens.get(index).and_then(InputToken::as_word)
    }
}
