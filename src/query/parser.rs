//! Query-string parsing: splits a raw query into plus-words (must
//! appear) and minus-words (must not appear), dropping stop words from
//! the plus side and rejecting malformed minus-word syntax.
//!
//! Grounded on `original_source/search_server.cpp`'s
//! `ParseQueryWord`/`ParseQuery`: a leading `-` marks a minus word, `--`
//! or a bare `-` (nothing following it, or nothing but another `-`) is
//! `InvalidArgument`, and both sides collapse duplicates.

use std::collections::BTreeSet;

use crate::analysis::stopwords::StopWords;
use crate::analysis::tokenizer;
use crate::core::error::{Error, Result};

/// A parsed query: the set of required terms and the set of excluded
/// terms, each deduplicated and already stripped of stop words.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedQuery {
    pub plus_words: BTreeSet<String>,
    pub minus_words: BTreeSet<String>,
}

impl ParsedQuery {
    pub fn is_empty(&self) -> bool {
        self.plus_words.is_empty() && self.minus_words.is_empty()
    }
}

/// Parses `text` against `stop_words`. Stop words are dropped from
/// `plus_words` but still validated as ordinary words on the minus
/// side: `-the` is a syntactically valid (if useless) minus word.
pub fn parse_query(text: &str, stop_words: &StopWords) -> Result<ParsedQuery> {
    let mut parsed = ParsedQuery::default();
    for raw in tokenizer::split(text) {
        if raw.is_empty() {
            continue;
        }
        if !tokenizer::is_valid_word(raw) {
            return Err(Error::invalid_argument(format!(
                "query word contains invalid characters: {raw:?}"
            )));
        }
        if let Some(word) = raw.strip_prefix('-') {
            if word.is_empty() {
                return Err(Error::invalid_argument("minus sign with no word following it"));
            }
            if word.starts_with('-') {
                return Err(Error::invalid_argument(format!(
                    "double minus sign is not allowed: {raw:?}"
                )));
            }
            parsed.minus_words.insert(word.to_string());
        } else if !stop_words.contains(raw) {
            parsed.plus_words.insert(raw.to_string());
        }
    }
    Ok(parsed)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stop_words(words: &[&str]) -> StopWords {
        StopWords::from_words(words).unwrap()
    }

    #[test]
    fn stop_words_are_dropped_from_plus_side() {
        let sw = stop_words(&["in", "the"]);
        let parsed = parse_query("cat in the city", &sw).unwrap();
        assert_eq!(
            parsed.plus_words,
            ["cat", "city"].into_iter().map(String::from).collect()
        );
    }

    #[test]
    fn leading_minus_marks_exclusion() {
        let sw = stop_words(&[]);
        let parsed = parse_query("cat -city", &sw).unwrap();
        assert!(parsed.plus_words.contains("cat"));
        assert!(parsed.minus_words.contains("city"));
    }

    #[test]
    fn bare_minus_is_invalid() {
        let sw = stop_words(&[]);
        assert!(parse_query("cat -", &sw).is_err());
    }

    #[test]
    fn double_minus_is_invalid() {
        let sw = stop_words(&[]);
        assert!(parse_query("cat --city", &sw).is_err());
    }

    #[test]
    fn duplicate_words_collapse() {
        let sw = stop_words(&[]);
        let parsed = parse_query("cat cat dog", &sw).unwrap();
        assert_eq!(parsed.plus_words.len(), 2);
    }
}
