use std::collections::HashMap;
use std::path::Path;

use tracing::info;

use super::{for_each_record, leading_pair, read_source, LoadStats, SourceError};
use crate::thai::ThaiWord;

/// A Thai word and its romanizations, in source order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub word: ThaiWord,
    pub romanizations: Vec<String>,
}

/// Thai word → romanizations, keeping the order words were first seen.
#[derive(Debug, Default, Clone)]
pub struct Lexicon {
    entries: Vec<Entry>,
    positions: HashMap<ThaiWord, usize>,
}

impl Lexicon {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one (word, romanization) pair. Repeated pairs are kept.
    pub fn push(&mut self, word: ThaiWord, roman: String) {
        match self.positions.get(&word) {
            Some(&pos) => self.entries[pos].romanizations.push(roman),
            None => {
                self.positions.insert(word.clone(), self.entries.len());
                self.entries.push(Entry {
                    word,
                    romanizations: vec![roman],
                });
            }
        }
    }

    pub fn get(&self, word: &str) -> Option<&Entry> {
        self.positions.get(word).map(|&pos| &self.entries[pos])
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn iter(&self) -> impl Iterator<Item = &Entry> {
        self.entries.iter()
    }

    /// Number of distinct words.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Total (word, romanization) pairs.
    pub fn pair_count(&self) -> usize {
        self.entries.iter().map(|e| e.romanizations.len()).sum()
    }
}

impl<W: Into<ThaiWord>, R: Into<String>> FromIterator<(W, R)> for Lexicon {
    fn from_iter<I: IntoIterator<Item = (W, R)>>(iter: I) -> Self {
        let mut lexicon = Lexicon::new();
        for (word, roman) in iter {
            lexicon.push(word.into(), roman.into());
        }
        lexicon
    }
}

/// Parse `thai<TAB>romanization` records.
///
/// `max_entries` bounds the number of lines read, skipped lines included.
pub fn parse_romanizations(text: &str, max_entries: Option<usize>) -> (Lexicon, LoadStats) {
    let mut lexicon = Lexicon::new();
    let stats = for_each_record(text, 0, max_entries, |line| {
        let Some((thai, roman)) = leading_pair(line) else {
            return false;
        };
        lexicon.push(ThaiWord::from(thai), roman.to_string());
        true
    });
    (lexicon, stats)
}

pub fn load_romanizations(path: &Path, max_entries: Option<usize>) -> Result<Lexicon, SourceError> {
    let text = read_source(path)?;
    let (lexicon, stats) = parse_romanizations(&text, max_entries);
    info!(
        path = %path.display(),
        words = lexicon.len(),
        pairs = lexicon.pair_count(),
        skipped = stats.skipped,
        "loaded romanizations"
    );
    Ok(lexicon)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_romanizations() {
        let text = "\u{feff}กิน\tkin\n\
                    ผม\tphom\n\
                    กิน\tkin\n\
                    กิน\t kin khao \n";
        let (lexicon, stats) = parse_romanizations(text, None);
        assert_eq!(stats.skipped, 0);
        assert_eq!(lexicon.len(), 2);
        assert_eq!(lexicon.entries()[0].word.as_str(), "กิน");
        assert_eq!(
            lexicon.get("กิน").unwrap().romanizations,
            vec!["kin", "kin", "kin khao"]
        );
        assert_eq!(lexicon.get("ผม").unwrap().romanizations, vec!["phom"]);
        assert_eq!(lexicon.pair_count(), 4);
    }

    #[test]
    fn test_malformed_records_are_skipped() {
        let text = "กิน\tkin\n\
                    no tab here\n\
                    \tmissing word\n\
                    ข้าว\t\n\
                    \n\
                    ผม\tphom\textra\n";
        let (lexicon, stats) = parse_romanizations(text, None);
        assert_eq!(stats.total_lines, 6);
        assert_eq!(stats.skipped, 4);
        assert_eq!(lexicon.len(), 2);
        assert!(lexicon.get("ข้าว").is_none());
        assert_eq!(lexicon.get("ผม").unwrap().romanizations, vec!["phom"]);
    }

    #[test]
    fn test_max_entries_counts_every_line() {
        let text = "กิน\tkin\nbad\nผม\tphom\nข้าว\tkhao\n";
        let (lexicon, _) = parse_romanizations(text, Some(3));
        assert_eq!(lexicon.len(), 2);
        assert!(lexicon.get("ข้าว").is_none());
    }

    #[test]
    fn test_crlf_lines() {
        let (lexicon, _) = parse_romanizations("กิน\tkin\r\nผม\tphom\r\n", None);
        assert_eq!(lexicon.get("กิน").unwrap().romanizations, vec!["kin"]);
        assert_eq!(lexicon.get("ผม").unwrap().romanizations, vec!["phom"]);
    }

    #[test]
    fn test_load_romanizations_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("data.tsv");
        std::fs::write(&path, "\u{feff}สวัสดี\tsawatdi\n").unwrap();
        let lexicon = load_romanizations(&path, None).unwrap();
        assert_eq!(lexicon.get("สวัสดี").unwrap().romanizations, vec!["sawatdi"]);
    }

    #[test]
    fn test_load_romanizations_missing_file_is_fatal() {
        let dir = tempfile::tempdir().unwrap();
        let result = load_romanizations(&dir.path().join("nope.tsv"), None);
        assert!(result.is_err());
    }

    #[test]
    fn test_from_iter() {
        let lexicon: Lexicon = [("กิน", "kin"), ("กิน", "gin")].into_iter().collect();
        assert_eq!(lexicon.len(), 1);
        assert_eq!(lexicon.pair_count(), 2);
    }
}
