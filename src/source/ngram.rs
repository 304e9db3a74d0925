//! Word n-gram count tables (`w1<TAB>w2<TAB>count`, `w1<TAB>w2<TAB>w3<TAB>count`).

use std::collections::HashMap;
use std::path::Path;

use tracing::info;

use super::{for_each_record, read_source, LoadStats, SourceError};

/// Separator joining the words of an n-gram key, as the runtime expects.
pub const KEY_SEPARATOR: &str = "|";

/// Parse an n-gram table of the given `order` (2 for bigrams, 3 for
/// trigrams). Lines must have exactly `order` non-empty words and a
/// non-negative integer count. Counts for a repeated n-gram are summed.
pub fn parse_ngram_counts(text: &str, order: usize) -> (HashMap<String, u64>, LoadStats) {
    let mut counts: HashMap<String, u64> = HashMap::new();
    let stats = for_each_record(text, 0, None, |line| {
        let fields: Vec<&str> = line.trim().split('\t').map(str::trim).collect();
        let Some((count, words)) = fields.split_last() else {
            return false;
        };
        if words.len() != order || words.iter().any(|w| w.is_empty() || w.contains(KEY_SEPARATOR))
        {
            return false;
        }
        let Ok(count) = count.parse::<u64>() else {
            return false;
        };
        let key = words.join(KEY_SEPARATOR);
        let slot = counts.entry(key).or_insert(0);
        *slot = slot.saturating_add(count);
        true
    });
    (counts, stats)
}

pub fn load_ngram_counts(path: &Path, order: usize) -> Result<HashMap<String, u64>, SourceError> {
    let text = read_source(path)?;
    let (counts, stats) = parse_ngram_counts(&text, order);
    info!(
        path = %path.display(),
        order,
        ngrams = counts.len(),
        skipped = stats.skipped,
        "loaded n-gram counts"
    );
    Ok(counts)
}
