use std::fs;
use std::path::Path;

use crate::config::{parse_config_toml, CompileConfig, NgramSettings};
use crate::index::{Index, IndexOptions};
use crate::{compile, export_ngrams, CompileError};

const ROMANIZATIONS: &str = "\u{feff}กิน\tkin\n\
                             ผม\tphom\n\
                             สวัสดี\tsawatdi\n\
                             ขิง\tkhing\n\
                             broken line\n\
                             เร็วๆ\treo reo\n\
                             ไม่ค่อย\tmai khoi\n";

const FREQUENCIES: &str = "กิน\t500\n\
                           ผม\t1200\n\
                           สวัสดี\t300\n\
                           ไม่ค่อย\tnot-a-number\n";

const SEED: &str = "thai\tromanization\tnote\n\
                    สู้\tsu\tkeep fighting\n\
                    ค่อย\tkhoi\tgradually\n";

fn write_sources(dir: &Path, with_seed: bool) -> CompileConfig {
    fs::write(dir.join("thai2rom.tsv"), ROMANIZATIONS).unwrap();
    fs::write(dir.join("tnc_freq.txt"), FREQUENCIES).unwrap();
    if with_seed {
        fs::write(dir.join("repeatable_words.tsv"), SEED).unwrap();
    }
    let toml = format!(
        r#"
[sources]
romanization = "{dir}/thai2rom.tsv"
frequency = "{dir}/tnc_freq.txt"
reduplication = "{dir}/repeatable_words.tsv"

[index]
max_candidates = 9
min_variant_length = 2

[output]
dictionary = "{dir}/out/dictionary.json"
"#,
        dir = dir.display()
    );
    parse_config_toml(&toml).unwrap()
}

fn lookup<'a>(index: &'a Index, key: &str) -> Vec<&'a str> {
    index.lookup(key).iter().map(|w| w.as_str()).collect()
}

#[test]
fn compile_writes_ranked_dictionary() {
    let dir = tempfile::tempdir().unwrap();
    let config = write_sources(dir.path(), true);
    let result = compile(&config).unwrap();

    assert_eq!(result.stats.source_words, 6);
    assert_eq!(result.stats.frequency_words, 3);
    assert_eq!(result.stats.seed_words, 2);
    assert_eq!(result.stats.keys, result.index.len());

    let json = fs::read_to_string(&config.output.dictionary).unwrap();
    assert!(json.contains("\"กิน\""));
    assert!(!json.contains("\\u0e"));

    let index = Index::open(&config.output.dictionary).unwrap();
    assert_eq!(index, result.index);
    assert!(index
        .validate(&IndexOptions::default(), Some(&result.frequencies))
        .is_empty());

    assert_eq!(lookup(&index, "kin"), vec!["กิน"]);
    assert_eq!(lookup(&index, "gin"), vec!["กิน"]);
    assert_eq!(lookup(&index, "pom"), vec!["ผม"]);
    assert_eq!(lookup(&index, "sawatdi"), vec!["สวัสดี"]);
    // no frequency data
    assert!(!index.contains_key("khing"));
    assert!(!index.contains_key("mai khoi"));
    // reduplicated source word, typed with or without the space
    assert_eq!(lookup(&index, "reoreo"), vec!["เร็วๆ"]);
    assert_eq!(lookup(&index, "reo reo"), vec!["เร็วๆ"]);
    // from the seed
    assert_eq!(lookup(&index, "susu"), vec!["สู้ๆ"]);
    assert_eq!(lookup(&index, "khoikhoi"), vec!["ค่อยๆ"]);
    assert_eq!(lookup(&index, "koikoi"), vec!["ค่อยๆ"]);
}

#[test]
fn compile_without_seed_file() {
    let dir = tempfile::tempdir().unwrap();
    let config = write_sources(dir.path(), false);
    let result = compile(&config).unwrap();
    assert_eq!(result.stats.seed_words, 0);
    assert!(!result.index.contains_key("susu"));
    assert!(result.index.contains_key("reoreo"));
}

#[test]
fn compile_with_seed_unset() {
    let dir = tempfile::tempdir().unwrap();
    let mut config = write_sources(dir.path(), true);
    config.sources.reduplication = None;
    let result = compile(&config).unwrap();
    assert!(!result.index.contains_key("susu"));
}

#[test]
fn missing_romanization_source_is_fatal() {
    let dir = tempfile::tempdir().unwrap();
    let config = write_sources(dir.path(), true);
    fs::remove_file(&config.sources.romanization).unwrap();

    let err = compile(&config).unwrap_err();
    assert!(matches!(err, CompileError::Source(_)));
    assert!(err.to_string().contains("thai2rom.tsv"));
    assert!(!config.output.dictionary.exists());
}

#[test]
fn missing_frequency_source_is_fatal() {
    let dir = tempfile::tempdir().unwrap();
    let config = write_sources(dir.path(), true);
    fs::remove_file(&config.sources.frequency).unwrap();
    assert!(compile(&config).is_err());
    assert!(!config.output.dictionary.exists());
}

#[test]
fn compile_respects_max_entries_and_expansion() {
    let dir = tempfile::tempdir().unwrap();
    let mut config = write_sources(dir.path(), false);
    config.sources.max_entries = Some(3);
    config.index.expand_spelling_variants = true;
    config.output.pretty = false;

    let result = compile(&config).unwrap();
    assert_eq!(result.stats.source_words, 3);
    assert_eq!(lookup(&result.index, "sawasdee"), vec!["สวัสดี"]);
    assert_eq!(lookup(&result.index, "sawadee"), vec!["สวัสดี"]);
    assert!(!result.index.contains_key("khing"));

    let json = fs::read_to_string(&config.output.dictionary).unwrap();
    assert!(!json.contains('\n'));
}

#[test]
fn export_ngrams_writes_top_counts() {
    let dir = tempfile::tempdir().unwrap();
    let bigrams = dir.path().join("bigrams.tsv");
    let trigrams = dir.path().join("trigrams.tsv");
    fs::write(&bigrams, "ผม\tกิน\t10\nกิน\tข้าว\t50\nไป\tไหน\t5\n").unwrap();
    fs::write(&trigrams, "ผม\tกิน\tข้าว\t7\nbad line\n").unwrap();

    let settings = NgramSettings {
        top_bigrams: 2,
        top_trigrams: 10,
        output: dir.path().join("ngram_frequencies.json"),
    };
    let export = export_ngrams(&bigrams, &trigrams, &settings).unwrap();
    assert_eq!(export.bigrams.len(), 2);
    assert!(!export.bigrams.contains_key("ไป|ไหน"));
    assert_eq!(export.trigrams["ผม|กิน|ข้าว"], 7);

    let json = fs::read_to_string(&settings.output).unwrap();
    assert!(json.starts_with("{\"bigrams\":{"));
}
