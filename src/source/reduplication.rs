use std::collections::HashMap;
use std::path::Path;

use tracing::info;

use super::{for_each_record, leading_pair, read_source, LoadStats, SourceError};
use crate::thai::ThaiWord;

/// Curated base words that are commonly typed reduplicated (e.g. สู้ → สู้ๆ).
#[derive(Debug, Default, Clone)]
pub struct ReduplicationSeed {
    entries: Vec<(ThaiWord, String)>,
    positions: HashMap<ThaiWord, usize>,
}

impl ReduplicationSeed {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the base romanization of `word`, replacing any earlier one.
    pub fn insert(&mut self, word: ThaiWord, roman: String) {
        match self.positions.get(&word) {
            Some(&pos) => self.entries[pos].1 = roman,
            None => {
                self.positions.insert(word.clone(), self.entries.len());
                self.entries.push((word, roman));
            }
        }
    }

    pub fn get(&self, word: &str) -> Option<&str> {
        self.positions
            .get(word)
            .map(|&pos| self.entries[pos].1.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&ThaiWord, &str)> {
        self.entries.iter().map(|(w, r)| (w, r.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<W: Into<ThaiWord>, R: Into<String>> FromIterator<(W, R)> for ReduplicationSeed {
    fn from_iter<I: IntoIterator<Item = (W, R)>>(iter: I) -> Self {
        let mut seed = ReduplicationSeed::new();
        for (word, roman) in iter {
            seed.insert(word.into(), roman.into());
        }
        seed
    }
}

/// Parse `word<TAB>romanization<TAB>note` rows after one header row.
/// The note column is ignored and may be missing.
pub fn parse_reduplication_seed(text: &str) -> (ReduplicationSeed, LoadStats) {
    let mut seed = ReduplicationSeed::new();
    let stats = for_each_record(text, 1, None, |line| {
        let Some((word, roman)) = leading_pair(line) else {
            return false;
        };
        seed.insert(ThaiWord::from(word), roman.to_string());
        true
    });
    (seed, stats)
}

pub fn load_reduplication_seed(path: &Path) -> Result<ReduplicationSeed, SourceError> {
    let text = read_source(path)?;
    let (seed, stats) = parse_reduplication_seed(&text);
    info!(
        path = %path.display(),
        words = seed.len(),
        skipped = stats.skipped,
        "loaded reduplication seed"
    );
    Ok(seed)
}
