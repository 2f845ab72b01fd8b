//! Syllable extraction from a Lexique-style pronunciation lexicon.
//!
//! A run loads the registry of already exported syllables, keeps lexicon rows
//! whose shape code is accepted, transliterates their phonetic field to IPA,
//! drops known and duplicate rows, ranks the rest by descending frequency and
//! writes the result table and the grown registry.

pub mod config;
pub mod error;
pub mod filter;
pub mod io_utils;
pub mod lexicon;
pub mod pipeline;
pub mod rank;
pub mod registry;
pub mod stats;
pub mod symbols;
pub mod writer;

pub use config::ExtractConfig;
pub use error::{ExtractError, Result};
pub use filter::{filter_entries, AcceptedEntry, FilterOutcome};
pub use lexicon::{LexiconEntry, LexiconReader};
pub use pipeline::{run, Paths};
pub use rank::{parse_frequency, rank, RankedEntry};
pub use registry::Registry;
pub use stats::RunSummary;
pub use symbols::SymbolMap;
pub use writer::{update_registry, write_output};
