//! Shape filtering, transliteration and two-level deduplication.
//!
//! An entry is dropped when its trimmed orthography is already in the
//! registry, or when its (orthography, transliterated phonetic) pair was
//! already accepted earlier in the same pass. The registry itself is never
//! touched here: syllables accepted by this pass are returned in
//! [`FilterOutcome::new_syllables`] and only merged by the writer. Two rows
//! with the same orthography but different transcriptions therefore both
//! survive.

use std::collections::{BTreeSet, HashSet};

use log::{debug, warn};

use crate::config::ExtractConfig;
use crate::error::{ExtractError, Result};
use crate::lexicon::LexiconEntry;
use crate::registry::Registry;
use crate::symbols::SymbolMap;

/// Entry that passed the filter, phonetic field already transliterated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AcceptedEntry {
    pub line: u64,
    pub ortho: String,
    pub phon: String,
    pub frequency: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct FilterOutcome {
    /// Accepted entries in input order.
    pub accepted: Vec<AcceptedEntry>,
    /// Trimmed orthographic forms of accepted entries.
    pub new_syllables: BTreeSet<String>,
    pub rows_read: usize,
    pub rejected_shape: usize,
    pub skipped_known: usize,
    pub skipped_duplicate: usize,
    pub skipped_malformed: usize,
}

pub fn filter_entries<I>(
    entries: I,
    registry: &Registry,
    symbols: &SymbolMap,
    config: &ExtractConfig,
) -> Result<FilterOutcome>
where
    I: IntoIterator<Item = Result<LexiconEntry>>,
{
    let mut out = FilterOutcome::default();
    let mut seen: HashSet<(String, String)> = HashSet::new();

    for entry in entries {
        out.rows_read += 1;
        let entry = match entry {
            Ok(e) => e,
            Err(ExtractError::MalformedRecord { line, reason }) if config.lenient => {
                warn!("skipping malformed row at line {line}: {reason}");
                out.skipped_malformed += 1;
                continue;
            }
            Err(e) => return Err(e),
        };

        if !config.accepts_shape(&entry.shape) {
            out.rejected_shape += 1;
            continue;
        }
        let Some(source_phon) = entry.phon.as_deref() else {
            let reason = "missing phonetic field".to_string();
            if config.lenient {
                warn!("skipping malformed row at line {}: {reason}", entry.line);
                out.skipped_malformed += 1;
                continue;
            }
            return Err(ExtractError::MalformedRecord {
                line: entry.line,
                reason,
            });
        };

        let syllable = entry.ortho.trim();
        if registry.contains(syllable) {
            out.skipped_known += 1;
            continue;
        }

        let phon = symbols.transliterate(source_phon);
        let key = (entry.ortho.clone(), phon);
        if seen.contains(&key) {
            debug!("duplicate {:?} at line {}", key, entry.line);
            out.skipped_duplicate += 1;
            continue;
        }

        out.new_syllables.insert(syllable.to_string());
        let (ortho, phon) = key.clone();
        seen.insert(key);
        out.accepted.push(AcceptedEntry {
            line: entry.line,
            ortho,
            phon,
            frequency: entry.frequency,
        });
    }

    Ok(out)
}
