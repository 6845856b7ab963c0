//! Membership hashes and keyword matching.

use std::collections::HashSet;
use std::fmt::Display;

use indexmap::IndexMap;

/// Maps the string form of every item to `true`. Duplicates collapse onto
/// the first occurrence's position.
pub fn array_to_hash<I>(items: I) -> IndexMap<String, bool>
where
    I: IntoIterator,
    I::Item: Display,
{
    items
        .into_iter()
        .map(|item| (item.to_string(), true))
        .collect()
}

/// Membership test over a fixed word list.
#[derive(Debug, Clone)]
pub struct KeywordMatcher {
    words: HashSet<String>,
    case_insensitive: bool,
}

impl KeywordMatcher {
    /// When `case_insensitive` is set, words are lower-cased here and every
    /// probe is lower-cased in [`KeywordMatcher::matches`].
    pub fn new<I>(words: I, case_insensitive: bool) -> Self
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let words = words
            .into_iter()
            .map(|w| {
                if case_insensitive {
                    w.as_ref().to_lowercase()
                } else {
                    w.as_ref().to_string()
                }
            })
            .collect();
        KeywordMatcher {
            words,
            case_insensitive,
        }
    }

    pub fn matches(&self, word: &str) -> bool {
        if self.case_insensitive {
            self.words.contains(&word.to_lowercase())
        } else {
            self.words.contains(word)
        }
    }

    pub fn is_case_insensitive(&self) -> bool {
        self.case_insensitive
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

/// Shorthand for [`KeywordMatcher::new`].
pub fn create_keyword_matcher<I>(words: I, case_insensitive: bool) -> KeywordMatcher
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    KeywordMatcher::new(words, case_insensitive)
}
