//! Compiler configuration loaded from TOML.
//!
//! - `parse_config_toml(toml)` parses and validates a configuration
//! - `load_config(path)` does the same for a file
//! - Default values are embedded via `include_str!("default_config.toml")`

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::index::{IndexOptions, MAX_CANDIDATES};

pub const DEFAULT_CONFIG_TOML: &str = include_str!("default_config.toml");

/// Returns the embedded default configuration TOML content.
pub fn default_toml() -> &'static str {
    DEFAULT_CONFIG_TOML
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("TOML parse error: {0}")]
    Parse(String),
    #[error("invalid value for {field}: {reason}")]
    InvalidValue { field: String, reason: String },
    #[error("cannot read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompileConfig {
    pub sources: SourceSettings,
    pub index: IndexSettings,
    pub output: OutputSettings,
    #[serde(default)]
    pub ngram: NgramSettings,
}

impl Default for CompileConfig {
    fn default() -> Self {
        parse_config_toml(DEFAULT_CONFIG_TOML).expect("default config TOML must be valid")
    }
}

impl CompileConfig {
    pub fn index_options(&self) -> IndexOptions {
        IndexOptions {
            max_candidates: self.index.max_candidates,
            min_variant_length: self.index.min_variant_length,
            expand_spelling_variants: self.index.expand_spelling_variants,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SourceSettings {
    pub romanization: PathBuf,
    pub frequency: PathBuf,
    /// Reduplication seed; without it no doubled-syllable keys are built.
    #[serde(default)]
    pub reduplication: Option<PathBuf>,
    /// Stop reading the romanization source after this many lines.
    #[serde(default)]
    pub max_entries: Option<usize>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndexSettings {
    pub max_candidates: usize,
    pub min_variant_length: usize,
    #[serde(default)]
    pub expand_spelling_variants: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutputSettings {
    pub dictionary: PathBuf,
    #[serde(default = "default_pretty")]
    pub pretty: bool,
}

fn default_pretty() -> bool {
    true
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NgramSettings {
    pub top_bigrams: usize,
    pub top_trigrams: usize,
    pub output: PathBuf,
}

impl Default for NgramSettings {
    fn default() -> Self {
        Self {
            top_bigrams: 50_000,
            top_trigrams: 10_000,
            output: PathBuf::from("ngram_frequencies.json"),
        }
    }
}

pub fn parse_config_toml(toml_str: &str) -> Result<CompileConfig, ConfigError> {
    let config: CompileConfig =
        toml::from_str(toml_str).map_err(|e| ConfigError::Parse(e.to_string()))?;
    validate(&config)?;
    Ok(config)
}

pub fn load_config(path: &Path) -> Result<CompileConfig, ConfigError> {
    let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_config_toml(&content)
}

pub fn validate(config: &CompileConfig) -> Result<(), ConfigError> {
    fn invalid(field: &str, reason: &str) -> ConfigError {
        ConfigError::InvalidValue {
            field: field.to_string(),
            reason: reason.to_string(),
        }
    }

    if config.sources.romanization.as_os_str().is_empty() {
        return Err(invalid("sources.romanization", "must not be empty"));
    }
    if config.sources.frequency.as_os_str().is_empty() {
        return Err(invalid("sources.frequency", "must not be empty"));
    }
    if config.sources.max_entries == Some(0) {
        return Err(invalid("sources.max_entries", "must be positive"));
    }
    if !(1..=MAX_CANDIDATES).contains(&config.index.max_candidates) {
        return Err(invalid(
            "index.max_candidates",
            "must be between 1 and 9 (one per number key)",
        ));
    }
    if config.index.min_variant_length == 0 {
        return Err(invalid("index.min_variant_length", "must be positive"));
    }
    if config.output.dictionary.as_os_str().is_empty() {
        return Err(invalid("output.dictionary", "must not be empty"));
    }
    if config.ngram.top_bigrams == 0 {
        return Err(invalid("ngram.top_bigrams", "must be positive"));
    }
    if config.ngram.top_trigrams == 0 {
        return Err(invalid("ngram.top_trigrams", "must be positive"));
    }
    Ok(())
}
