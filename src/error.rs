use thiserror::Error;

#[derive(Error, Debug)]
pub enum ExtractError {
    /// Propagated I/O error. Carries the operation and path in its message.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Table level failure that is not an I/O error (bad UTF-8, bad quoting).
    #[error("table error: {0}")]
    Csv(csv::Error),

    /// A lexicon row (or the header) is missing a required field, or carries
    /// a frequency that is not a number.
    #[error("malformed record at line {line}: {reason}")]
    MalformedRecord { line: u64, reason: String },

    /// Configuration error.
    #[error("config error: {0}")]
    Config(String),
}

impl From<csv::Error> for ExtractError {
    fn from(err: csv::Error) -> Self {
        match err.kind() {
            csv::ErrorKind::Io(io) => {
                ExtractError::Io(std::io::Error::new(io.kind(), io.to_string()))
            }
            _ => ExtractError::Csv(err),
        }
    }
}

pub type Result<T> = std::result::Result<T, ExtractError>;
