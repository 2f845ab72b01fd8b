use crate::ExtractError;

/// Runtime configuration for one extraction run.
#[derive(Debug, Clone)]
pub struct ExtractConfig {
    /// Column holding the orthographic form.
    pub ortho_column: String,
    /// Column holding the phonetic transcription (source alphabet).
    pub phon_column: String,
    /// Column holding the syllable-shape code.
    pub shape_column: String,
    /// Column holding the corpus frequency.
    pub frequency_column: String,
    /// Shape codes that are kept. Matched exactly after trimming.
    pub accepted_shapes: Vec<String>,
    /// Log and skip malformed rows instead of failing the run.
    pub lenient: bool,
}

impl Default for ExtractConfig {
    fn default() -> Self {
        Self {
            ortho_column: "ortho".into(),
            phon_column: "phon".into(),
            shape_column: "cvcv".into(),
            frequency_column: "freqfilms2".into(),
            accepted_shapes: vec!["CV".into(), "CVC".into()],
            lenient: false,
        }
    }
}

impl ExtractConfig {
    /// Whether `shape` (trimmed) is one of the accepted shape codes.
    pub fn accepts_shape(&self, shape: &str) -> bool {
        let shape = shape.trim();
        self.accepted_shapes.iter().any(|s| s == shape)
    }

    pub fn validate(&self) -> Result<(), ExtractError> {
        if self.accepted_shapes.is_empty() {
            return Err(ExtractError::Config("no accepted shape codes".into()));
        }
        let columns = [
            ("ortho", &self.ortho_column),
            ("phon", &self.phon_column),
            ("shape", &self.shape_column),
            ("frequency", &self.frequency_column),
        ];
        for (role, name) in columns {
            if name.trim().is_empty() {
                return Err(ExtractError::Config(format!("empty {role} column name")));
            }
        }
        Ok(())
    }
}
