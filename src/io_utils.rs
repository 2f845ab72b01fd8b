use std::fs;
use std::io;
use std::path::Path;

use tempfile::{Builder, NamedTempFile};

use crate::ExtractError;

/// Format a user friendly I/O error message with suggestions.
pub fn format_io_error(operation: &str, path: &Path, err: &io::Error) -> String {
    use io::ErrorKind::*;
    let suggestion = match err.kind() {
        NotFound => "Check that the file exists and the path is correct.",
        PermissionDenied => "Check permissions or run as a different user.",
        InvalidData => "File is not valid UTF-8 text.",
        UnexpectedEof => "File appears truncated or corrupted.",
        WriteZero => "Disk may be full. Free up space and try again.",
        Other if err.raw_os_error() == Some(28) => "Disk may be full. Free up space and try again.",
        _ => "Check permissions or free up disk space.",
    };
    format!(
        "Error {} '{}': {}. {}",
        operation,
        path.display(),
        err,
        suggestion
    )
}

/// Convert an I/O error into a std::io::Error with context, keeping its kind.
pub fn io_error(operation: &str, path: &Path, err: io::Error) -> io::Error {
    io::Error::new(err.kind(), format_io_error(operation, path, &err))
}

/// Create a temporary file in the directory that will hold `path`, so that
/// persisting it over `path` is a same-filesystem rename.
///
/// The directory must already exist. The temp file takes the permissions of
/// the current `path` when there is one, otherwise the umask default of a
/// newly created file.
pub fn temp_file_beside(path: &Path) -> io::Result<NamedTempFile> {
    let parent_dir = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    #[cfg_attr(not(unix), allow(unused_mut))]
    let mut builder = Builder::new();
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        builder.permissions(fs::Permissions::from_mode(0o666));
    }
    let temp_file = builder.tempfile_in(parent_dir)?;
    match fs::metadata(path) {
        Ok(meta) => temp_file.as_file().set_permissions(meta.permissions())?,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {}
        Err(e) => return Err(e),
    }
    Ok(temp_file)
}

/// Attach operation and path context to an error raised while handling `path`.
///
/// Only I/O failures gain context; record and config errors already say
/// where they come from.
pub fn with_path(operation: &str, path: &Path, err: ExtractError) -> ExtractError {
    match err {
        ExtractError::Io(io) => ExtractError::Io(io_error(operation, path, io)),
        other => other,
    }
}

/// Return an actionable hint for an error variant.
pub fn cli_hint(err: &ExtractError) -> String {
    use ExtractError::*;
    match err {
        Io(io) => format!("{io}"),
        Csv(e) => format!("{e}. Check that the lexicon is UTF-8, tab separated text."),
        MalformedRecord { line, reason } => {
            format!("line {line}: {reason}. Fix the row or rerun with --lenient.")
        }
        Config(msg) => format!("{msg}. Invalid configuration."),
    }
}
