//! End-to-end compilation: load sources, build and rank the index, write it.

use std::path::Path;

use tracing::{info, info_span, warn};

use crate::config::{CompileConfig, NgramSettings, SourceSettings};
use crate::index::{build_raw_index, rank, Index, IndexError, IndexOptions};
use crate::ngram::NgramExport;
use crate::source::ngram::load_ngram_counts;
use crate::source::{
    load_frequencies, load_reduplication_seed, load_romanizations, FrequencyTable, Lexicon,
    ReduplicationSeed, SourceError,
};

#[derive(Debug, thiserror::Error)]
pub enum CompileError {
    #[error("source error: {0}")]
    Source(#[from] SourceError),

    #[error("output error: {0}")]
    Output(#[from] IndexError),
}

/// All inputs of one compilation, fully loaded.
#[derive(Debug, Default, Clone)]
pub struct Sources {
    pub lexicon: Lexicon,
    pub frequencies: FrequencyTable,
    pub seed: ReduplicationSeed,
}

impl Sources {
    /// Load the configured tables. The romanization and frequency tables are
    /// required; a reduplication seed that is not configured or not found
    /// leaves the seed empty.
    pub fn load(settings: &SourceSettings) -> Result<Self, SourceError> {
        let lexicon = load_romanizations(&settings.romanization, settings.max_entries)?;
        let frequencies = load_frequencies(&settings.frequency)?;
        let seed = match &settings.reduplication {
            Some(path) => load_optional_seed(path)?,
            None => {
                info!("no reduplication seed configured");
                ReduplicationSeed::new()
            }
        };
        Ok(Self {
            lexicon,
            frequencies,
            seed,
        })
    }
}

fn load_optional_seed(path: &Path) -> Result<ReduplicationSeed, SourceError> {
    match load_reduplication_seed(path) {
        Ok(seed) => Ok(seed),
        Err(e) if e.is_not_found() => {
            warn!(path = %path.display(), "reduplication seed not found, skipping doubled forms");
            Ok(ReduplicationSeed::new())
        }
        Err(e) => Err(e),
    }
}

/// Build and rank the index from loaded sources.
pub fn build_index(sources: &Sources, options: &IndexOptions) -> Index {
    let raw = build_raw_index(
        &sources.lexicon,
        &sources.frequencies,
        &sources.seed,
        options,
    );
    rank(raw, &sources.frequencies, options.max_candidates)
}

/// Counters reported after a run.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct CompileStats {
    pub source_words: usize,
    pub source_pairs: usize,
    pub frequency_words: usize,
    pub seed_words: usize,
    pub keys: usize,
    pub candidates: usize,
}

/// Result of [`compile`]: the index as written plus what went into it.
#[derive(Debug)]
pub struct Compilation {
    pub index: Index,
    pub frequencies: FrequencyTable,
    pub stats: CompileStats,
}

/// Run the whole pipeline and write the index to `config.output.dictionary`.
///
/// Nothing is written unless every step succeeds.
pub fn compile(config: &CompileConfig) -> Result<Compilation, CompileError> {
    let _span = info_span!("compile").entered();
    let sources = Sources::load(&config.sources)?;
    let index = build_index(&sources, &config.index_options());
    index.save(&config.output.dictionary, config.output.pretty)?;

    let stats = CompileStats {
        source_words: sources.lexicon.len(),
        source_pairs: sources.lexicon.pair_count(),
        frequency_words: sources.frequencies.len(),
        seed_words: sources.seed.len(),
        keys: index.len(),
        candidates: index.candidate_count(),
    };
    info!(
        path = %config.output.dictionary.display(),
        keys = stats.keys,
        candidates = stats.candidates,
        "dictionary written"
    );

    Ok(Compilation {
        index,
        frequencies: sources.frequencies,
        stats,
    })
}

/// Load bigram and trigram count tables, keep the most frequent ones and
/// write them to `settings.output`.
pub fn export_ngrams(
    bigrams: &Path,
    trigrams: &Path,
    settings: &NgramSettings,
) -> Result<NgramExport, CompileError> {
    let _span = info_span!("export_ngrams").entered();
    let bigram_counts = load_ngram_counts(bigrams, 2)?;
    let trigram_counts = load_ngram_counts(trigrams, 3)?;
    let export = NgramExport::from_counts(
        &bigram_counts,
        &trigram_counts,
        settings.top_bigrams,
        settings.top_trigrams,
    );
    export.save(&settings.output)?;
    info!(
        path = %settings.output.display(),
        bigrams = export.bigrams.len(),
        trigrams = export.trigrams.len(),
        "n-gram frequencies written"
    );
    Ok(export)
}
