//! Bigram/trigram frequency export for the runtime's context scoring.

use std::collections::{BTreeMap, HashMap};
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::index::{write_atomic, IndexError};

/// `{"bigrams": {"w1|w2": n}, "trigrams": {"w1|w2|w3": n}}`
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NgramExport {
    pub bigrams: BTreeMap<String, u64>,
    pub trigrams: BTreeMap<String, u64>,
}

impl NgramExport {
    /// Keep the `top_bigrams` / `top_trigrams` most frequent n-grams.
    pub fn from_counts(
        bigrams: &HashMap<String, u64>,
        trigrams: &HashMap<String, u64>,
        top_bigrams: usize,
        top_trigrams: usize,
    ) -> Self {
        Self {
            bigrams: top_n(bigrams, top_bigrams),
            trigrams: top_n(trigrams, top_trigrams),
        }
    }

    /// Compact JSON: the file ships inside the app bundle.
    pub fn to_json(&self) -> Result<String, IndexError> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn save(&self, path: &Path) -> Result<(), IndexError> {
        let json = self.to_json()?;
        write_atomic(path, json.as_bytes())
    }
}

/// The `n` highest counts; ties go to the smaller key so the cut is stable.
pub fn top_n(counts: &HashMap<String, u64>, n: usize) -> BTreeMap<String, u64> {
    let mut ranked: Vec<(&String, &u64)> = counts.iter().collect();
    ranked.sort_by(|a, b| b.1.cmp(a.1).then_with(|| a.0.cmp(b.0)));
    ranked
        .into_iter()
        .take(n)
        .map(|(k, v)| (k.clone(), *v))
        .collect()
}
