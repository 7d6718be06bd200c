//! Command vocabulary.
//!
//! Each command kind answers to three words (keyword, abbreviation and
//! alternate form) taken from the configuration. Matching ignores case.

use std::collections::HashMap;

use wayfarer_foundation::{CommandKind, Config};

/// The words each command kind answers to.
#[derive(Clone, Debug)]
pub struct Vocabulary {
    keywords: HashMap<CommandKind, [String; 3]>,
}

impl Vocabulary {
    /// Reads the keywords of every command kind from `config`.
    #[must_use]
    pub fn from_config(config: &Config) -> Self {
        let keywords = CommandKind::ALL
            .into_iter()
            .map(|kind| (kind, config.keywords(kind).map(str::to_string)))
            .collect();
        Self { keywords }
    }

    /// Returns the keyword, abbreviation and alternate form of `kind`.
    #[must_use]
    pub fn keywords(&self, kind: CommandKind) -> &[String] {
        self.keywords.get(&kind).map(|words| &words[..]).unwrap_or(&[])
    }

    /// Returns true if `word` is one of the words of `kind`.
    #[must_use]
    pub fn is_keyword(&self, kind: CommandKind, word: &str) -> bool {
        self.keywords(kind)
            .iter()
            .any(|keyword| keyword.eq_ignore_ascii_case(word))
    }

    /// Returns the first kind, in dispatch priority order, that `word` names.
    #[must_use]
    pub fn classify(&self, word: &str) -> Option<CommandKind> {
        CommandKind::ALL
            .into_iter()
            .find(|&kind| self.is_keyword(kind, word))
    }

    /// Every configured word, in dispatch priority order, without duplicates.
    #[must_use]
    pub fn all_words(&self) -> Vec<String> {
        let mut words: Vec<String> = Vec::new();
        for kind in CommandKind::ALL {
            for word in self.keywords(kind) {
                if !word.is_empty() && !words.contains(word) {
                    words.push(word.clone());
                }
            }
        }
        words
    }
}

impl Default for Vocabulary {
    fn default() -> Self {
        Self::from_config(&Config::default())
    }
}
