/// Output writing.
///
/// This module is the only place the `roomboard` binary writes files. The
/// write is a plain overwrite: no backup, no merge, and no temp-file rename,
/// so a failure part-way through can leave a truncated file behind.
use std::path::Path;

use crate::error::CliError;

/// Writes `contents` to `path`, replacing any existing file.
///
/// # Errors
///
/// Returns [`CliError::WriteFailed`] (exit code 1) for any I/O failure:
/// missing parent directory, permission denied, disk full, or a directory
/// at `path`.
pub fn write_output(path: &Path, contents: &str) -> Result<(), CliError> {
    std::fs::write(path, contents.as_bytes()).map_err(|e| CliError::WriteFailed {
        path: path.to_path_buf(),
        detail: describe_write_error(&e, path),
    })?;
    log::debug!("wrote {} bytes to {}", contents.len(), path.display());
    Ok(())
}

/// Produces a short description of a write failure.
fn describe_write_error(e: &std::io::Error, path: &Path) -> String {
    let missing_parent = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .is_some_and(|p| !p.exists());
    if e.kind() == std::io::ErrorKind::NotFound && missing_parent {
        "parent directory does not exist".to_owned()
    } else if e.kind() == std::io::ErrorKind::PermissionDenied {
        "permission denied".to_owned()
    } else {
        e.to_string()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
