/// Character-level classification and the word type for Thai script.
use std::borrow::Borrow;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Mai yamok: the preceding word or syllable is spoken twice.
pub const REPETITION_MARK: char = 'ๆ';

pub fn is_thai(c: char) -> bool {
    ('\u{0E00}'..='\u{0E7F}').contains(&c)
}

pub fn is_thai_digit(c: char) -> bool {
    ('\u{0E50}'..='\u{0E59}').contains(&c)
}

pub fn is_latin(c: char) -> bool {
    c.is_ascii_alphabetic()
}

/// A Thai-script word as it appears in the source data.
///
/// The text is kept opaque: the repetition mark may appear at any position
/// and takes part in ordinary concatenation, so it is only exposed through
/// [`ThaiWord::contains_repetition_mark`].
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ThaiWord(String);

impl ThaiWord {
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }

    pub fn contains_repetition_mark(&self) -> bool {
        self.0.contains(REPETITION_MARK)
    }

    /// Number of code points, the length used for ranking.
    pub fn char_len(&self) -> usize {
        self.0.chars().count()
    }

    /// The reduplicated form: this word followed by the repetition mark.
    pub fn reduplicated(&self) -> ThaiWord {
        let mut text = String::with_capacity(self.0.len() + REPETITION_MARK.len_utf8());
        text.push_str(&self.0);
        text.push(REPETITION_MARK);
        ThaiWord(text)
    }
}

impl fmt::Display for ThaiWord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ThaiWord {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for ThaiWord {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl Borrow<str> for ThaiWord {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for ThaiWord {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
