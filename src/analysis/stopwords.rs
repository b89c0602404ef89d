//! The stop-word set fixed at engine construction time. Stop words are
//! stripped from both indexed documents and parsed queries.

use std::collections::BTreeSet;

use crate::analysis::tokenizer::{self, is_valid_word};
use crate::core::error::{Error, Result};

/// An ordered set of unique, non-empty stop-word terms.
#[derive(Debug, Clone, Default)]
pub struct StopWords {
    words: BTreeSet<String>,
}

impl StopWords {
    /// Builds the set from an iterator of strings. Empty strings are
    /// discarded; the remainder are deduplicated. Fails with
    /// `InvalidArgument` if any stop word contains a byte `< 0x20`.
    pub fn from_words<I, S>(words: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut set = BTreeSet::new();
        for word in words {
            let word = word.as_ref();
            if word.is_empty() {
                continue;
            }
            if !is_valid_word(word) {
                return Err(Error::invalid_argument(format!(
                    "stop word {:?} contains an invalid byte",
                    word
                )));
            }
            set.insert(word.to_string());
        }
        Ok(StopWords { words: set })
    }

    /// Builds the set by splitting a single space-separated string, the
    /// way the reference constructor accepts `stop_words_text`.
    pub fn from_text(text: &str) -> Result<Self> {
        Self::from_words(tokenizer::split(text))
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn discards_empty_and_dedups() {
        let sw = StopWords::from_text("in the the in ").unwrap();
        assert_eq!(sw.len(), 2);
        assert!(sw.contains("in"));
        assert!(sw.contains("the"));
    }

    #[test]
    fn rejects_control_bytes() {
        let err = StopWords::from_words(["bad\tword"]).unwrap_err();
        assert_eq!(err.kind, crate::core::error::ErrorKind::InvalidArgument);
    }

    #[test]
    fn empty_construction_is_fine() {
        let sw = StopWords::from_text("").unwrap();
        assert!(sw.is_empty());
    }
}
