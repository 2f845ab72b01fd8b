//! `RunSummary` collects per-stage counts for one run. It is logged at the end
//! of the run and can be printed as JSON by the CLI.

use log::info;
use serde::Serialize;

use crate::filter::FilterOutcome;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RunSummary {
    pub registry_found: bool,
    pub registry_size: usize,
    pub rows_read: usize,
    pub rejected_shape: usize,
    pub skipped_known: usize,
    pub skipped_duplicate: usize,
    pub skipped_malformed: usize,
    pub accepted: usize,
    pub syllables_added: usize,
    pub registry_updated: bool,
    pub dry_run: bool,
}

impl RunSummary {
    pub fn record_filter(&mut self, outcome: &FilterOutcome) {
        self.rows_read = outcome.rows_read;
        self.rejected_shape = outcome.rejected_shape;
        self.skipped_known = outcome.skipped_known;
        self.skipped_duplicate = outcome.skipped_duplicate;
        self.skipped_malformed += outcome.skipped_malformed;
    }

    pub fn report(&self) {
        info!(
            "read {} rows: {} accepted, {} wrong shape, {} known, {} duplicate, {} malformed",
            self.rows_read,
            self.accepted,
            self.rejected_shape,
            self.skipped_known,
            self.skipped_duplicate,
            self.skipped_malformed,
        );
        if self.dry_run {
            info!(
                "dry run: {} new syllables would be added to the registry",
                self.syllables_added
            );
        }
    }
}
