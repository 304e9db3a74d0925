use std::collections::HashMap;
use std::path::Path;

use tracing::info;

use super::{for_each_record, read_source, LoadStats, SourceError};
use crate::thai::ThaiWord;

/// Thai word → corpus usage count.
#[derive(Debug, Default, Clone)]
pub struct FrequencyTable {
    counts: HashMap<ThaiWord, u64>,
}

impl FrequencyTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, word: ThaiWord, count: u64) {
        self.counts.insert(word, count);
    }

    pub fn contains(&self, word: &str) -> bool {
        self.counts.contains_key(word)
    }

    /// Usage count, 0 for words not in the table.
    pub fn get(&self, word: &str) -> u64 {
        self.counts.get(word).copied().unwrap_or(0)
    }

    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }
}

impl<W: Into<ThaiWord>> FromIterator<(W, u64)> for FrequencyTable {
    fn from_iter<I: IntoIterator<Item = (W, u64)>>(iter: I) -> Self {
        Self {
            counts: iter.into_iter().map(|(w, c)| (w.into(), c)).collect(),
        }
    }
}

/// Parse `word<TAB>count` lines. A later line for the same word wins.
///
/// The whole line is trimmed first, then it must split into exactly two
/// fields with a non-negative integer count.
pub fn parse_frequencies(text: &str) -> (FrequencyTable, LoadStats) {
    let mut table = FrequencyTable::new();
    let stats = for_each_record(text, 0, None, |line| {
        let fields: Vec<&str> = line.trim().split('\t').collect();
        let [word, count] = fields.as_slice() else {
            return false;
        };
        let word = word.trim();
        let Ok(count) = count.trim().parse::<u64>() else {
            return false;
        };
        if word.is_empty() {
            return false;
        }
        table.insert(ThaiWord::from(word), count);
        true
    });
    (table, stats)
}

pub fn load_frequencies(path: &Path) -> Result<FrequencyTable, SourceError> {
    let text = read_source(path)?;
    let (table, stats) = parse_frequencies(&text);
    info!(
        path = %path.display(),
        words = table.len(),
        skipped = stats.skipped,
        "loaded frequencies"
    );
    Ok(table)
}
