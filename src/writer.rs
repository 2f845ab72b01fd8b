//! Output table and registry persistence.
//!
//! Both destinations are written to a temporary file in the same directory
//! and renamed into place only after a successful flush. The replaced file
//! keeps its permissions.

use std::collections::BTreeSet;
use std::path::Path;

use log::info;

use crate::error::Result;
use crate::io_utils::{io_error, temp_file_beside, with_path};
use crate::rank::RankedEntry;
use crate::registry::Registry;

/// Write one `ortho<TAB>phon` line per entry, in the given order, replacing
/// whatever was at `path`.
pub fn write_output(path: &Path, entries: &[RankedEntry]) -> Result<()> {
    let temp_file = temp_file_beside(path).map_err(|e| io_error("creating output", path, e))?;
    {
        let mut wtr = csv::WriterBuilder::new()
            .delimiter(b'\t')
            .terminator(csv::Terminator::Any(b'\n'))
            .quote_style(csv::QuoteStyle::Never)
            .has_headers(false)
            .from_writer(temp_file.as_file());
        for entry in entries {
            info!("{} {} freq: {}", entry.ortho, entry.phon, entry.frequency);
            wtr.write_record([entry.ortho.as_str(), entry.phon.as_str()])
                .map_err(|e| with_path("writing output", path, e.into()))?;
        }
        wtr.flush().map_err(|e| io_error("writing output", path, e))?;
    }
    temp_file
        .persist(path)
        .map_err(|e| io_error("replacing output", path, e.error))?;
    Ok(())
}

/// Merge `new_syllables` into the registry at `path`.
///
/// Only syllables absent from `original` count as added. When none are, the
/// file is left alone and `0` is returned; otherwise the full union is saved
/// and the number added is returned.
pub fn update_registry(
    path: &Path,
    original: &Registry,
    new_syllables: &BTreeSet<String>,
) -> Result<usize> {
    let added = original.missing_from(new_syllables).len();
    if added == 0 {
        info!("no new syllables found in this run");
        return Ok(0);
    }
    original.merged(new_syllables).save(path)?;
    info!("updated registry, added {added} new syllables");
    Ok(added)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn ranked(ortho: &str, phon: &str, frequency: f64) -> RankedEntry {
        RankedEntry {
            line: 0,
            ortho: ortho.into(),
            phon: phon.into(),
            frequency,
        }
    }

    #[test]
    fn output_is_tab_separated_without_header() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.tsv");
        fs::write(&path, "stale content\n").unwrap();
        write_output(&path, &[ranked("sel", "sɛl", 9.0), ranked("ba", "bA", 1.0)]).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "sel\tsɛl\nba\tbA\n");
    }

    #[test]
    fn empty_output_truncates() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.tsv");
        fs::write(&path, "stale content\n").unwrap();
        write_output(&path, &[]).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "");
    }

    #[test]
    fn quotes_are_written_verbatim() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.tsv");
        write_output(&path, &[ranked("l\"a", "la", 1.0)]).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "l\"a\tla\n");
    }

    #[test]
    fn output_under_missing_directory_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("out.tsv");
        let err = write_output(&path, &[ranked("ba", "ba", 1.0)]).unwrap_err();
        assert!(matches!(err, crate::ExtractError::Io(_)));
        assert!(!dir.path().join("missing").exists());
    }

    #[cfg(unix)]
    #[test]
    fn output_keeps_file_mode() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.tsv");
        fs::write(&path, "stale content\n").unwrap();
        fs::set_permissions(&path, fs::Permissions::from_mode(0o644)).unwrap();
        write_output(&path, &[ranked("ba", "ba", 1.0)]).unwrap();
        let mode = fs::metadata(&path).unwrap().permissions().mode();
        assert_eq!(mode & 0o777, 0o644);
    }

    #[test]
    fn registry_untouched_without_new_syllables() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("known.txt");
        fs::write(&path, "zo\nba\n").unwrap();
        let original = Registry::load(&path).unwrap();
        let new: BTreeSet<String> = ["ba".to_string()].into();
        assert_eq!(update_registry(&path, &original, &new).unwrap(), 0);
        // Not rewritten, so still in the original order.
        assert_eq!(fs::read_to_string(&path).unwrap(), "zo\nba\n");
    }

    #[test]
    fn registry_gains_union_sorted() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("known.txt");
        fs::write(&path, "zo\nba\n").unwrap();
        let original = Registry::load(&path).unwrap();
        let new: BTreeSet<String> = ["la".to_string(), "ba".to_string()].into();
        assert_eq!(update_registry(&path, &original, &new).unwrap(), 1);
        assert_eq!(fs::read_to_string(&path).unwrap(), "ba\nla\nzo\n");
    }
}
