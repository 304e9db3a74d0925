use std::path::{Path, PathBuf};
use std::process;

use clap::{Parser, Subcommand};

use thaiphon_dict::config::{self, CompileConfig};
use thaiphon_dict::index::{Index, IndexOptions};
use thaiphon_dict::romanization::{normalize, spelling_variants, to_paiboon};
use thaiphon_dict::source::{load_frequencies, FrequencyTable};
use thaiphon_dict::trace_init::init_tracing;

/// Unwrap a Result or print the error and exit.
macro_rules! die {
    ($result:expr, $($arg:tt)*) => {
        $result.unwrap_or_else(|e| {
            eprintln!($($arg)*, e);
            process::exit(1);
        })
    };
}

/// Spot checks printed after a compile: (typed romanization, expected word).
const SAMPLE_LOOKUPS: &[(&str, &str)] = &[
    ("gin", "กิน"),
    ("pom", "ผม"),
    ("yak", "อยาก"),
    ("kin", "กิน"),
    ("phom", "ผม"),
    ("sawatdi", "สวัสดี"),
    ("susu", "สู้ๆ"),
];

#[derive(Parser)]
#[command(name = "dictool", about = "Thai phonetic dictionary build tool")]
struct Cli {
    /// Log as JSON lines
    #[arg(long, global = true)]
    log_json: bool,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Compile the romanization → Thai dictionary JSON
    Compile {
        /// Configuration TOML (defaults built in)
        #[arg(long)]
        config: Option<PathBuf>,
        /// Thai<TAB>RTGS source
        #[arg(long)]
        romanization: Option<PathBuf>,
        /// Word<TAB>count frequency table
        #[arg(long)]
        frequency: Option<PathBuf>,
        /// Reduplication seed (header + Thai<TAB>RTGS<TAB>note)
        #[arg(long, conflicts_with = "no_reduplication")]
        reduplication: Option<PathBuf>,
        /// Build without a reduplication seed
        #[arg(long)]
        no_reduplication: bool,
        /// Read at most N source lines
        #[arg(long)]
        max_entries: Option<usize>,
        /// Candidates per key (1-9)
        #[arg(long)]
        max_candidates: Option<usize>,
        /// Also index generated spelling variants
        #[arg(long)]
        expand_variants: bool,
        /// Write single-line JSON
        #[arg(long)]
        compact: bool,
        /// Output file
        output: Option<PathBuf>,
    },
    /// Export top bigram/trigram frequencies as JSON
    Ngram {
        /// Configuration TOML (defaults built in)
        #[arg(long)]
        config: Option<PathBuf>,
        /// w1<TAB>w2<TAB>count
        bigrams: PathBuf,
        /// w1<TAB>w2<TAB>w3<TAB>count
        trigrams: PathBuf,
        /// Bigrams to keep
        #[arg(long)]
        top_bigrams: Option<usize>,
        /// Trigrams to keep
        #[arg(long)]
        top_trigrams: Option<usize>,
        /// Output file
        output: Option<PathBuf>,
    },
    /// Look up romanizations in a compiled dictionary
    Lookup {
        /// Dictionary JSON
        dict_file: PathBuf,
        /// Romanizations to look up
        #[arg(required = true)]
        romanizations: Vec<String>,
    },
    /// Show dictionary stats and check its invariants
    Info {
        /// Dictionary JSON
        dict_file: PathBuf,
        /// Frequency table, enables ranking checks
        #[arg(long)]
        frequency: Option<PathBuf>,
    },
    /// Convert RTGS romanizations to Paiboon-style spelling
    Transliterate {
        #[arg(required = true)]
        romanizations: Vec<String>,
    },
    /// List the spelling variants of a romanization
    Variants {
        romanization: String,
        /// Shortest variant to keep
        #[arg(long, default_value = "2")]
        min_len: usize,
    },
    /// Export default configuration as TOML
    ConfigExport,
    /// Validate a configuration TOML file
    ConfigValidate {
        /// Path to the TOML file
        file: PathBuf,
    },
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.log_json);

    match cli.command {
        Command::Compile {
            config,
            romanization,
            frequency,
            reduplication,
            no_reduplication,
            max_entries,
            max_candidates,
            expand_variants,
            compact,
            output,
        } => {
            let mut cfg = load_config(config.as_deref());
            if let Some(path) = romanization {
                cfg.sources.romanization = path;
            }
            if let Some(path) = frequency {
                cfg.sources.frequency = path;
            }
            if reduplication.is_some() {
                cfg.sources.reduplication = reduplication;
            }
            if no_reduplication {
                cfg.sources.reduplication = None;
            }
            if max_entries.is_some() {
                cfg.sources.max_entries = max_entries;
            }
            if let Some(n) = max_candidates {
                cfg.index.max_candidates = n;
            }
            if expand_variants {
                cfg.index.expand_spelling_variants = true;
            }
            if compact {
                cfg.output.pretty = false;
            }
            if let Some(path) = output {
                cfg.output.dictionary = path;
            }
            die!(config::validate(&cfg), "Error in configuration: {}");
            compile(&cfg);
        }
        Command::Ngram {
            config,
            bigrams,
            trigrams,
            top_bigrams,
            top_trigrams,
            output,
        } => {
            let mut cfg = load_config(config.as_deref());
            if let Some(n) = top_bigrams {
                cfg.ngram.top_bigrams = n;
            }
            if let Some(n) = top_trigrams {
                cfg.ngram.top_trigrams = n;
            }
            if let Some(path) = output {
                cfg.ngram.output = path;
            }
            die!(config::validate(&cfg), "Error in configuration: {}");
            ngram(&bigrams, &trigrams, &cfg);
        }
        Command::Lookup {
            dict_file,
            romanizations,
        } => lookup(&dict_file, &romanizations),
        Command::Info {
            dict_file,
            frequency,
        } => info(&dict_file, frequency.as_deref()),
        Command::Transliterate { romanizations } => {
            for roman in &romanizations {
                let key = normalize(roman).unwrap_or_default();
                println!("{roman} → {}", to_paiboon(&key));
            }
        }
        Command::Variants {
            romanization,
            min_len,
        } => {
            let key = normalize(&romanization).unwrap_or_default();
            for variant in spelling_variants(&key, min_len) {
                println!("{variant}");
            }
        }
        Command::ConfigExport => print!("{}", config::default_toml()),
        Command::ConfigValidate { file } => {
            die!(config::load_config(&file), "Invalid configuration: {}");
            println!("{}: OK", file.display());
        }
    }
}

fn load_config(path: Option<&Path>) -> CompileConfig {
    match path {
        Some(path) => die!(config::load_config(path), "Error loading configuration: {}"),
        None => CompileConfig::default(),
    }
}

fn compile(cfg: &CompileConfig) {
    eprintln!("Romanizations: {}", cfg.sources.romanization.display());
    eprintln!("Frequencies:   {}", cfg.sources.frequency.display());
    match &cfg.sources.reduplication {
        Some(path) => eprintln!("Reduplication: {}", path.display()),
        None => eprintln!("Reduplication: (none)"),
    }

    let result = die!(thaiphon_dict::compile(cfg), "Error compiling dictionary: {}");
    let stats = result.stats;

    eprintln!(
        "Read {} words ({} romanizations), {} frequencies, {} reduplication seeds",
        stats.source_words, stats.source_pairs, stats.frequency_words, stats.seed_words
    );
    eprintln!(
        "Wrote {} ({} romanizations, {} candidates)",
        cfg.output.dictionary.display(),
        stats.keys,
        stats.candidates
    );

    println!();
    println!("Sample lookups:");
    for (key, expected) in SAMPLE_LOOKUPS {
        let candidates = result.index.lookup(key);
        if candidates.is_empty() {
            println!("  ✗ {key} → (not found)");
            continue;
        }
        let mark = if candidates.iter().any(|w| w.as_str() == *expected) {
            "✓"
        } else {
            "✗"
        };
        println!("  {mark} {key} → {expected}");
        for (i, word) in candidates.iter().take(5).enumerate() {
            let freq = result.frequencies.get(word.as_str());
            let target = if word.as_str() == *expected {
                "  ← target"
            } else {
                ""
            };
            if freq > 0 {
                println!("      {}. {word} (freq: {freq}){target}", i + 1);
            } else {
                println!("      {}. {word} (freq: n/a){target}", i + 1);
            }
        }
    }
}

fn ngram(bigrams: &Path, trigrams: &Path, cfg: &CompileConfig) {
    eprintln!(
        "Keeping top {} bigrams, {} trigrams",
        cfg.ngram.top_bigrams, cfg.ngram.top_trigrams
    );
    let export = die!(
        thaiphon_dict::export_ngrams(bigrams, trigrams, &cfg.ngram),
        "Error exporting n-grams: {}"
    );
    let file_size = std::fs::metadata(&cfg.ngram.output)
        .map(|m| m.len())
        .unwrap_or(0);
    eprintln!(
        "Wrote {} ({} bigrams, {} trigrams, {:.1} MB)",
        cfg.ngram.output.display(),
        export.bigrams.len(),
        export.trigrams.len(),
        file_size as f64 / 1_048_576.0
    );
}

fn lookup(dict_file: &Path, romanizations: &[String]) {
    let index = die!(Index::open(dict_file), "Error opening dictionary: {}");
    for roman in romanizations {
        let key = normalize(roman).unwrap_or_default();
        let candidates = index.lookup(&key);
        if candidates.is_empty() {
            println!("{key} → (not found)");
        } else {
            let words: Vec<&str> = candidates.iter().map(|w| w.as_str()).collect();
            println!("{key} → {}", words.join(", "));
        }
    }
}

fn info(dict_file: &Path, frequency: Option<&Path>) {
    let index = die!(Index::open(dict_file), "Error opening dictionary: {}");
    let frequencies: Option<FrequencyTable> =
        frequency.map(|path| die!(load_frequencies(path), "Error reading frequencies: {}"));

    let file_size = std::fs::metadata(dict_file).map(|m| m.len()).unwrap_or(0);
    println!("Dictionary:    {}", dict_file.display());
    println!("File size:     {:.1} MB", file_size as f64 / 1_048_576.0);
    println!("Romanizations: {}", index.len());
    println!("Candidates:    {}", index.candidate_count());

    let violations = index.validate(&IndexOptions::default(), frequencies.as_ref());
    if violations.is_empty() {
        println!("Invariants:    OK");
    } else {
        println!("Invariants:    {} violations", violations.len());
        for v in violations.iter().take(20) {
            println!("  {v}");
        }
    }

    println!();
    println!("Sample lookups:");
    for (key, _) in SAMPLE_LOOKUPS {
        let words: Vec<&str> = index.lookup(key).iter().map(|w| w.as_str()).collect();
        if words.is_empty() {
            println!("  {key} → (not found)");
        } else {
            println!("  {key} → {}", words.join(", "));
        }
    }

    if !violations.is_empty() {
        process::exit(1);
    }
}
