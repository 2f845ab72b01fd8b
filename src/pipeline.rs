use std::path::PathBuf;

use log::info;

use crate::config::ExtractConfig;
use crate::error::Result;
use crate::filter::filter_entries;
use crate::io_utils::with_path;
use crate::lexicon::LexiconReader;
use crate::rank::rank;
use crate::registry::Registry;
use crate::stats::RunSummary;
use crate::symbols::SymbolMap;
use crate::writer::{update_registry, write_output};

/// File locations for one run.
#[derive(Debug, Clone)]
pub struct Paths {
    pub lexicon: PathBuf,
    pub output: PathBuf,
    pub registry: PathBuf,
}

/// Load the registry, filter and rank the lexicon, then write the output
/// table and grow the registry. With `dry_run` nothing is written.
pub fn run(paths: &Paths, config: &ExtractConfig, dry_run: bool) -> Result<RunSummary> {
    config.validate()?;
    let mut summary = RunSummary {
        dry_run,
        ..RunSummary::default()
    };

    let registry = Registry::load(&paths.registry)?;
    summary.registry_found = registry.existed();
    summary.registry_size = registry.len();

    let symbols = SymbolMap::lexique();
    let reader = LexiconReader::from_path(&paths.lexicon, config)?;
    let outcome = filter_entries(reader, &registry, &symbols, config)
        .map_err(|e| with_path("reading lexicon", &paths.lexicon, e))?;
    summary.record_filter(&outcome);

    let (ranked, bad_frequency) = rank(outcome.accepted, config.lenient)?;
    summary.skipped_malformed += bad_frequency;
    summary.accepted = ranked.len();

    // Entries dropped for a bad frequency must not reach the registry.
    let mut new_syllables = outcome.new_syllables;
    if bad_frequency > 0 {
        new_syllables = ranked.iter().map(|e| e.ortho.trim().to_string()).collect();
    }

    if dry_run {
        summary.syllables_added = registry.missing_from(&new_syllables).len();
    } else {
        write_output(&paths.output, &ranked)?;
        info!(
            "wrote {} entries to '{}'",
            ranked.len(),
            paths.output.display()
        );
        summary.syllables_added = update_registry(&paths.registry, &registry, &new_syllables)?;
        summary.registry_updated = summary.syllables_added > 0;
    }

    summary.report();
    Ok(summary)
}
