use std::collections::HashMap;

use tracing::{debug, debug_span};

use super::IndexOptions;
use crate::romanization::{normalize, spelling_variants, to_paiboon, VariantSet};
use crate::source::{FrequencyTable, Lexicon, ReduplicationSeed};
use crate::thai::ThaiWord;

/// Variant → words, in first-seen order, before ranking.
#[derive(Debug, Default, Clone)]
pub struct RawIndex {
    lists: HashMap<String, Vec<ThaiWord>>,
}

impl RawIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `word` under `key` unless it is already listed there.
    /// Returns whether the word was added.
    pub fn append(&mut self, key: String, word: &ThaiWord) -> bool {
        let list = self.lists.entry(key).or_default();
        if list.contains(word) {
            return false;
        }
        list.push(word.clone());
        true
    }

    pub fn get(&self, key: &str) -> Option<&[ThaiWord]> {
        self.lists.get(key).map(Vec::as_slice)
    }

    pub fn len(&self) -> usize {
        self.lists.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lists.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[ThaiWord])> {
        self.lists.iter().map(|(k, v)| (k.as_str(), v.as_slice()))
    }

    pub(super) fn into_lists(self) -> HashMap<String, Vec<ThaiWord>> {
        self.lists
    }
}

/// Words with a known frequency go in; reduplicated forms always do.
pub fn is_eligible(word: &ThaiWord, frequencies: &FrequencyTable) -> bool {
    frequencies.contains(word.as_str()) || word.contains_repetition_mark()
}

/// The keys one source romanization of `word` is indexed under.
///
/// The normalized romanization and its Paiboon form; for a reduplicated word
/// spelled with a space ("su su"), also the joined spelling and its Paiboon
/// form. Empty for blank romanizations.
pub fn romanization_variants(word: &ThaiWord, roman: &str, options: &IndexOptions) -> VariantSet {
    let mut variants = VariantSet::new();
    let Some(roman) = normalize(roman) else {
        return variants;
    };

    if word.contains_repetition_mark() && roman.contains(' ') {
        let joined = roman.replace(' ', "");
        variants.insert(to_paiboon(&joined));
        variants.insert(joined);
    }
    variants.insert(to_paiboon(&roman));
    variants.insert(roman);

    if options.expand_spelling_variants {
        let expanded: Vec<String> = variants
            .iter()
            .flat_map(|v| spelling_variants(v, options.min_variant_length))
            .collect();
        variants.extend(expanded);
    }

    variants.retain(|v| v.chars().count() >= options.min_variant_length);
    variants
}

/// Invert the lexicon into variant → words.
///
/// Words that are neither in `frequencies` nor carry the repetition mark are
/// skipped. Each seed word is then added in reduplicated form (`word` + ๆ)
/// under its doubled romanization and doubled Paiboon spelling.
pub fn build_raw_index(
    lexicon: &Lexicon,
    frequencies: &FrequencyTable,
    seed: &ReduplicationSeed,
    options: &IndexOptions,
) -> RawIndex {
    let _span = debug_span!("build_raw_index", words = lexicon.len()).entered();
    let mut raw = RawIndex::new();
    let mut ineligible = 0usize;

    for entry in lexicon.iter() {
        if !is_eligible(&entry.word, frequencies) {
            ineligible += 1;
            continue;
        }
        for roman in &entry.romanizations {
            for key in romanization_variants(&entry.word, roman, options) {
                raw.append(key, &entry.word);
            }
        }
    }

    let mut reduplicated = 0usize;
    for (word, roman) in seed.iter() {
        let Some(roman) = normalize(roman) else {
            continue;
        };
        let doubled_word = word.reduplicated();
        let paiboon = to_paiboon(&roman);
        for key in [roman.repeat(2), paiboon.repeat(2)] {
            if key.chars().count() >= options.min_variant_length && raw.append(key, &doubled_word)
            {
                reduplicated += 1;
            }
        }
    }

    debug!(
        eligible = lexicon.len() - ineligible,
        ineligible,
        reduplicated,
        keys = raw.len(),
        "raw index built"
    );
    raw
}
