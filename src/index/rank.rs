use std::cmp::Ordering;

use tracing::{debug, debug_span};

use super::{Index, RawIndex};
use crate::source::FrequencyTable;
use crate::thai::ThaiWord;

/// Candidate order: more frequent first, then shorter (in code points),
/// then by code point order.
pub fn compare_candidates(a: &ThaiWord, b: &ThaiWord, frequencies: &FrequencyTable) -> Ordering {
    frequencies
        .get(b.as_str())
        .cmp(&frequencies.get(a.as_str()))
        .then_with(|| a.char_len().cmp(&b.char_len()))
        .then_with(|| a.cmp(b))
}

/// Sort one candidate list, drop repeats and keep the first `max_candidates`.
///
/// Idempotent: ranking an already ranked list leaves it unchanged.
pub fn rank_candidates(
    words: &mut Vec<ThaiWord>,
    frequencies: &FrequencyTable,
    max_candidates: usize,
) {
    words.sort_by(|a, b| compare_candidates(a, b, frequencies));
    words.dedup();
    words.truncate(max_candidates);
}

/// Rank every list of `raw` into the final index.
pub fn rank(raw: RawIndex, frequencies: &FrequencyTable, max_candidates: usize) -> Index {
    let _span = debug_span!("rank", keys = raw.len()).entered();
    let mut truncated = 0usize;
    let index: Index = raw
        .into_lists()
        .into_iter()
        .map(|(key, mut words)| {
            if words.len() > max_candidates {
                truncated += 1;
            }
            rank_candidates(&mut words, frequencies, max_candidates);
            (key, words)
        })
        .collect();
    debug!(keys = index.len(), truncated, "index ranked");
    index
}
