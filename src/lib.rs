//! Compiler for the romanized-Thai input method dictionary.
//!
//! Turns a (Thai word → RTGS romanization) list, a word frequency table and
//! a reduplication seed into a JSON index from typed romanizations to up to
//! nine ranked Thai candidates.

pub mod compile;
pub mod config;
pub mod index;
pub mod ngram;
pub mod romanization;
pub mod source;
pub mod thai;
pub mod trace_init;

#[cfg(test)]
mod tests;

pub use compile::{build_index, compile, export_ngrams, CompileError, Compilation, Sources};
pub use config::CompileConfig;
pub use index::{Index, IndexOptions};
pub use thai::ThaiWord;
