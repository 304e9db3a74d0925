//! The inverted romanization → Thai words index.
//!
//! [`build_raw_index`] collects every (variant, word) pair from the sources,
//! [`rank`] orders and truncates each candidate list into the final
//! [`Index`], and `index_io` reads and writes it as a JSON object.

mod builder;
mod index_io;
mod rank;

use std::collections::BTreeMap;
use std::io;

use serde::{Deserialize, Serialize};

use crate::source::FrequencyTable;
use crate::thai::ThaiWord;

pub use builder::{build_raw_index, is_eligible, romanization_variants, RawIndex};
pub(crate) use index_io::write_atomic;
pub use rank::{compare_candidates, rank, rank_candidates};

/// Candidates per key: the runtime selects them with the 1–9 number keys.
pub const MAX_CANDIDATES: usize = 9;

/// Shortest romanization kept as a key.
pub const MIN_VARIANT_LENGTH: usize = 2;

#[derive(Debug, thiserror::Error)]
pub enum IndexError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Knobs for index construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndexOptions {
    pub max_candidates: usize,
    pub min_variant_length: usize,
    /// Also run every key through the spelling-variant expander.
    pub expand_spelling_variants: bool,
}

impl Default for IndexOptions {
    fn default() -> Self {
        Self {
            max_candidates: MAX_CANDIDATES,
            min_variant_length: MIN_VARIANT_LENGTH,
            expand_spelling_variants: false,
        }
    }
}

/// A broken output invariant found by [`Index::validate`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Violation {
    #[error("key {key:?} is shorter than {min} chars")]
    ShortKey { key: String, min: usize },

    #[error("key {key:?} is not lowercase")]
    NotLowercase { key: String },

    #[error("key {key:?} has {count} candidates (max {max})")]
    TooManyCandidates { key: String, count: usize, max: usize },

    #[error("key {key:?} lists {word} more than once")]
    Duplicate { key: String, word: String },

    #[error("key {key:?} is not in ranking order")]
    Unordered { key: String },

    #[error("key {key:?} lists {word}, which has no frequency and no repetition mark")]
    Ineligible { key: String, word: String },
}

/// Romanization variant → ranked Thai candidates. Keys iterate in sorted
/// order.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Index {
    entries: BTreeMap<String, Vec<ThaiWord>>,
}

impl Index {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lookup(&self, key: &str) -> &[ThaiWord] {
        self.entries.get(key).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[ThaiWord])> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_slice()))
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Number of keys.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sum of all candidate list lengths.
    pub fn candidate_count(&self) -> usize {
        self.entries.values().map(Vec::len).sum()
    }

    pub(crate) fn insert(&mut self, key: String, words: Vec<ThaiWord>) {
        self.entries.insert(key, words);
    }

    /// Check the output invariants. Ranking order and eligibility are only
    /// checked when `frequencies` is given.
    pub fn validate(
        &self,
        options: &IndexOptions,
        frequencies: Option<&FrequencyTable>,
    ) -> Vec<Violation> {
        let mut violations = Vec::new();
        for (key, words) in &self.entries {
            if key.chars().count() < options.min_variant_length {
                violations.push(Violation::ShortKey {
                    key: key.clone(),
                    min: options.min_variant_length,
                });
            }
            if key.to_lowercase() != *key {
                violations.push(Violation::NotLowercase { key: key.clone() });
            }
            if words.len() > options.max_candidates {
                violations.push(Violation::TooManyCandidates {
                    key: key.clone(),
                    count: words.len(),
                    max: options.max_candidates,
                });
            }
            for (i, word) in words.iter().enumerate() {
                if words[..i].contains(word) {
                    violations.push(Violation::Duplicate {
                        key: key.clone(),
                        word: word.to_string(),
                    });
                }
            }
            let Some(freq) = frequencies else {
                continue;
            };
            if words
                .windows(2)
                .any(|w| compare_candidates(&w[0], &w[1], freq).is_gt())
            {
                violations.push(Violation::Unordered { key: key.clone() });
            }
            for word in words {
                if !is_eligible(word, freq) {
                    violations.push(Violation::Ineligible {
                        key: key.clone(),
                        word: word.to_string(),
                    });
                }
            }
        }
        violations
    }
}

impl FromIterator<(String, Vec<ThaiWord>)> for Index {
    fn from_iter<I: IntoIterator<Item = (String, Vec<ThaiWord>)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}
