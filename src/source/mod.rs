//! Loaders for the tab-separated source tables.
//!
//! Every loader has a `parse_*` function over text and a `load_*` wrapper
//! that reads a file. Malformed records are counted and skipped; only a file
//! that cannot be read is an error.

mod frequency;
mod lexicon;
pub mod ngram;
mod reduplication;

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tracing::debug;

pub use frequency::{load_frequencies, parse_frequencies, FrequencyTable};
pub use lexicon::{load_romanizations, parse_romanizations, Entry, Lexicon};
pub use reduplication::{load_reduplication_seed, parse_reduplication_seed, ReduplicationSeed};

const BYTE_ORDER_MARK: char = '\u{feff}';

#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    #[error("cannot read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("{} is not valid UTF-8", path.display())]
    Encoding { path: PathBuf },
}

impl SourceError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::Io { source, .. } if source.kind() == io::ErrorKind::NotFound)
    }
}

/// Line counters reported by every loader.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct LoadStats {
    pub total_lines: u64,
    pub skipped: u64,
}

impl LoadStats {
    pub fn accepted(&self) -> u64 {
        self.total_lines - self.skipped
    }
}

/// Read a whole UTF-8 source file.
pub(crate) fn read_source(path: &Path) -> Result<String, SourceError> {
    let bytes = fs::read(path).map_err(|source| SourceError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    String::from_utf8(bytes).map_err(|_| SourceError::Encoding {
        path: path.to_path_buf(),
    })
}

/// Drive `accept` over every line of `text`.
///
/// A leading byte-order mark is dropped, `skip_lines` lines are skipped
/// unconditionally (headers), and at most `limit` lines are looked at.
/// `accept` returns `false` to mark a line as skipped.
pub(crate) fn for_each_record(
    text: &str,
    skip_lines: usize,
    limit: Option<usize>,
    mut accept: impl FnMut(&str) -> bool,
) -> LoadStats {
    let text = text.strip_prefix(BYTE_ORDER_MARK).unwrap_or(text);
    let mut stats = LoadStats::default();

    let lines = text.lines().skip(skip_lines);
    let lines: Box<dyn Iterator<Item = &str>> = match limit {
        Some(n) => Box::new(lines.take(n)),
        None => Box::new(lines),
    };

    for line in lines {
        stats.total_lines += 1;
        if !accept(line) {
            stats.skipped += 1;
        }
    }

    debug!(
        total_lines = stats.total_lines,
        skipped = stats.skipped,
        "records parsed"
    );
    stats
}

/// First two tab-separated fields of `line`, trimmed. `None` when there are
/// fewer than two fields or either one is empty.
pub(crate) fn leading_pair(line: &str) -> Option<(&str, &str)> {
    let mut fields = line.split('\t');
    let first = fields.next()?.trim();
    let second = fields.next()?.trim();
    if first.is_empty() || second.is_empty() {
        return None;
    }
    Some((first, second))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_for_each_record_strips_bom() {
        let mut first = None;
        for_each_record("\u{feff}กิน\tkin\n", 0, None, |line| {
            first = leading_pair(line).map(|(thai, _)| thai.to_string());
            true
        });
        assert_eq!(first.as_deref(), Some("กิน"));
    }

    #[test]
    fn test_for_each_record_counts() {
        let stats = for_each_record("a\tb\nbad\n\nc\td\n", 0, None, |line| {
            leading_pair(line).is_some()
        });
        assert_eq!(stats.total_lines, 4);
        assert_eq!(stats.skipped, 2);
        assert_eq!(stats.accepted(), 2);
    }

    #[test]
    fn test_for_each_record_header_and_limit() {
        let mut seen = Vec::new();
        let stats = for_each_record("header\na\nb\nc\n", 1, Some(2), |line| {
            seen.push(line.to_string());
            true
        });
        assert_eq!(seen, vec!["a", "b"]);
        assert_eq!(stats.total_lines, 2);
    }

    #[test]
    fn test_leading_pair() {
        assert_eq!(leading_pair(" กิน \t kin \tnote"), Some(("กิน", "kin")));
        assert_eq!(leading_pair("กิน"), None);
        assert_eq!(leading_pair("กิน\t "), None);
        assert_eq!(leading_pair("\tkin"), None);
    }

    #[test]
    fn test_read_source_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = read_source(&dir.path().join("missing.tsv")).unwrap_err();
        assert!(err.is_not_found());
        assert!(err.to_string().contains("missing.tsv"));
    }

    #[test]
    fn test_read_source_invalid_utf8() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("latin1.tsv");
        std::fs::write(&path, [0x66, 0xff, 0x09, 0x61]).unwrap();
        let err = read_source(&path).unwrap_err();
        assert!(matches!(err, SourceError::Encoding { .. }));
    }
}
