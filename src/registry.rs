//! Registry of syllables exported by earlier runs.
//!
//! Stored as UTF-8 text, one syllable per line, sorted. A missing file is a
//! fresh start, not an error.

use std::collections::btree_set;
use std::collections::BTreeSet;
use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use log::info;

use crate::error::Result;
use crate::io_utils::{io_error, temp_file_beside};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Registry {
    syllables: BTreeSet<String>,
    existed: bool,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load the registry at `path`, trimming lines and dropping blank ones.
    pub fn load(path: &Path) -> Result<Self> {
        let file = match File::open(path) {
            Ok(f) => f,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                info!(
                    "no existing registry at '{}', starting fresh",
                    path.display()
                );
                return Ok(Self::new());
            }
            Err(e) => return Err(io_error("opening registry", path, e).into()),
        };
        let mut syllables = BTreeSet::new();
        for line in BufReader::new(file).lines() {
            let line = line.map_err(|e| io_error("reading registry", path, e))?;
            let syllable = line.trim();
            if !syllable.is_empty() {
                syllables.insert(syllable.to_string());
            }
        }
        info!("loaded {} known syllables", syllables.len());
        Ok(Self {
            syllables,
            existed: true,
        })
    }

    /// Whether the registry was read from an existing file.
    pub fn existed(&self) -> bool {
        self.existed
    }

    pub fn contains(&self, syllable: &str) -> bool {
        self.syllables.contains(syllable)
    }

    pub fn len(&self) -> usize {
        self.syllables.len()
    }

    pub fn is_empty(&self) -> bool {
        self.syllables.is_empty()
    }

    /// Syllables in lexicographic order.
    pub fn iter(&self) -> btree_set::Iter<'_, String> {
        self.syllables.iter()
    }

    /// Syllables of `candidates` not already present.
    pub fn missing_from<'a>(&self, candidates: &'a BTreeSet<String>) -> BTreeSet<&'a String> {
        candidates
            .iter()
            .filter(|s| !self.syllables.contains(*s))
            .collect()
    }

    /// Union of this registry and `new`, leaving `self` untouched.
    pub fn merged(&self, new: &BTreeSet<String>) -> Registry {
        let mut syllables = self.syllables.clone();
        syllables.extend(new.iter().filter(|s| !s.trim().is_empty()).cloned());
        Registry {
            syllables,
            existed: self.existed,
        }
    }

    /// Write every syllable, sorted, one per line.
    ///
    /// The text goes to a temporary file next to `path` which then replaces
    /// `path`, so a failed save leaves the previous registry in place. The
    /// directory holding `path` must exist.
    pub fn save(&self, path: &Path) -> Result<()> {
        let temp_file =
            temp_file_beside(path).map_err(|e| io_error("creating registry", path, e))?;
        {
            let mut writer = BufWriter::new(temp_file.as_file());
            for syllable in &self.syllables {
                writeln!(writer, "{syllable}")
                    .map_err(|e| io_error("writing registry", path, e))?;
            }
            writer.flush().map_err(|e| io_error("writing registry", path, e))?;
        }
        temp_file
            .persist(path)
            .map_err(|e| io_error("replacing registry", path, e.error))?;
        Ok(())
    }
}

impl FromIterator<String> for Registry {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        Self {
            syllables: iter
                .into_iter()
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .collect(),
            existed: false,
        }
    }
}
