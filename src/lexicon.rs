//! Schema-aware reader for tab separated lexicon tables.
//!
//! The header row is resolved once against the configured column names; a
//! missing column fails before any row is read. Rows are handed out as typed
//! [`LexiconEntry`] values. Extra columns are ignored and rows may be ragged;
//! a row too short to carry its shape or orthography is a
//! [`ExtractError::MalformedRecord`]. The phonetic and frequency fields are
//! optional here: the filter only requires a transcription for rows whose
//! shape it keeps.
//!
//! Quoting is off: a `"` is an ordinary character and every line is one
//! record, so no field can span lines.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use log::debug;

use crate::config::ExtractConfig;
use crate::error::{ExtractError, Result};
use crate::io_utils::io_error;

/// One row of the lexicon, restricted to the fields the pipeline consumes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LexiconEntry {
    /// 1-based line of the row in the input.
    pub line: u64,
    /// Orthographic form, untrimmed.
    pub ortho: String,
    /// Phonetic transcription in the source alphabet; `None` when the row
    /// stops before that column.
    pub phon: Option<String>,
    /// Syllable-shape code, untrimmed.
    pub shape: String,
    /// Raw frequency text; `None` when the row stops before that column.
    pub frequency: Option<String>,
}

#[derive(Debug, Clone, Copy)]
struct Columns {
    ortho: usize,
    phon: usize,
    shape: usize,
    frequency: usize,
}

pub struct LexiconReader<R: Read> {
    reader: csv::Reader<R>,
    columns: Columns,
    record: csv::StringRecord,
}

impl LexiconReader<File> {
    /// Open the lexicon at `path` and resolve its header.
    pub fn from_path(path: &Path, config: &ExtractConfig) -> Result<Self> {
        let file = File::open(path).map_err(|e| io_error("opening lexicon", path, e))?;
        Self::from_reader(file, config)
    }
}

impl<R: Read> LexiconReader<R> {
    pub fn from_reader(input: R, config: &ExtractConfig) -> Result<Self> {
        let mut reader = csv::ReaderBuilder::new()
            .delimiter(b'\t')
            .flexible(true)
            .quoting(false)
            .from_reader(input);
        let headers = reader.headers()?.clone();
        let find = |name: &str| {
            headers
                .iter()
                .position(|h| h.trim() == name)
                .ok_or_else(|| ExtractError::MalformedRecord {
                    line: 1,
                    reason: format!("header has no '{name}' column"),
                })
        };
        let columns = Columns {
            ortho: find(config.ortho_column.as_str())?,
            phon: find(config.phon_column.as_str())?,
            shape: find(config.shape_column.as_str())?,
            frequency: find(config.frequency_column.as_str())?,
        };
        debug!(
            "lexicon header: {} columns, using {:?}",
            headers.len(),
            columns
        );
        Ok(Self {
            reader,
            columns,
            record: csv::StringRecord::new(),
        })
    }

    fn entry(&self) -> Result<LexiconEntry> {
        let line = self.record.position().map(|p| p.line()).unwrap_or(0);
        let required = |idx: usize, what: &str| {
            self.record
                .get(idx)
                .map(str::to_owned)
                .ok_or_else(|| ExtractError::MalformedRecord {
                    line,
                    reason: format!("missing {what} field"),
                })
        };
        Ok(LexiconEntry {
            line,
            shape: required(self.columns.shape, "shape")?,
            ortho: required(self.columns.ortho, "orthography")?,
            phon: self.record.get(self.columns.phon).map(str::to_owned),
            frequency: self.record.get(self.columns.frequency).map(str::to_owned),
        })
    }
}

impl<R: Read> Iterator for LexiconReader<R> {
    type Item = Result<LexiconEntry>;

    fn next(&mut self) -> Option<Self::Item> {
        match self.reader.read_record(&mut self.record) {
            Ok(true) => Some(self.entry()),
            Ok(false) => None,
            Err(e) => Some(Err(e.into())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const HEADER: &str = "ortho\tphon\tlemme\tcvcv\tfreqfilms2\n";

    fn read_all(text: &str) -> Result<Vec<LexiconEntry>> {
        LexiconReader::from_reader(text.as_bytes(), &ExtractConfig::default())?.collect()
    }

    #[test]
    fn reads_typed_entries_and_ignores_extra_columns() {
        let text = format!("{HEADER}ba\tba\tba\tCV\t120.5\nsel\tsEl\tsel\tCVC\t\n");
        let entries = read_all(&text).unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].ortho, "ba");
        assert_eq!(entries[0].shape, "CV");
        assert_eq!(entries[0].frequency.as_deref(), Some("120.5"));
        assert_eq!(entries[0].line, 2);
        assert_eq!(entries[1].phon.as_deref(), Some("sEl"));
        assert_eq!(entries[1].frequency.as_deref(), Some(""));
        assert_eq!(entries[1].line, 3);
    }

    #[test]
    fn missing_column_fails_at_header() {
        let err = LexiconReader::from_reader(
            "ortho\tphon\tfreqfilms2\nba\tba\t1\n".as_bytes(),
            &ExtractConfig::default(),
        )
        .err()
        .expect("header without cvcv must fail");
        match err {
            ExtractError::MalformedRecord { line, reason } => {
                assert_eq!(line, 1);
                assert!(reason.contains("cvcv"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn short_row_is_malformed() {
        let text = format!("{HEADER}ba\tba\n");
        match read_all(&text) {
            Err(ExtractError::MalformedRecord { line, reason }) => {
                assert_eq!(line, 2);
                assert!(reason.contains("shape"));
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn quoted_field_does_not_span_lines() {
        let text = format!("{HEADER}\"a\nb\"\tba\tba\tCV\t1\n");
        match read_all(&text) {
            Err(ExtractError::MalformedRecord { line, .. }) => assert_eq!(line, 2),
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn quote_is_ordinary_character() {
        let text = format!("{HEADER}l\"a\tla\tla\tCV\t1\n");
        let entries = read_all(&text).unwrap();
        assert_eq!(entries[0].ortho, "l\"a");
    }

    #[test]
    fn phon_is_optional_in_reader() {
        let text = format!("{HEADER}bla\n");
        assert!(read_all(&text).is_err());
        let header = "cvcv\tortho\tfreqfilms2\tphon\n";
        let entries = read_all(&format!("{header}CCV\tbla\t3\n")).unwrap();
        assert_eq!(entries[0].phon, None);
        assert_eq!(entries[0].frequency.as_deref(), Some("3"));
    }

    #[test]
    fn missing_frequency_field_is_none() {
        let text = format!("{HEADER}ba\tba\tba\tCV\n");
        let entries = read_all(&text).unwrap();
        assert_eq!(entries[0].frequency, None);
    }
}
