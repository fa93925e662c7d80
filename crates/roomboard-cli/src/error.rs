/// CLI error types with associated exit codes.
///
/// [`CliError`] is the top-level error type for the `roomboard` binary. Every
/// variant maps to a stable exit code via [`CliError::exit_code`]:
///
/// - Exit code **2**: input failure. The workbook could not be read, or the
///   configured layout does not fit it. Nothing is written.
/// - Exit code **1**: output failure. The page was rendered but could not be
///   written; the output file may be missing or truncated.
use std::fmt;
use std::path::PathBuf;

use roomboard_core::LayoutError;
use roomboard_excel::LoadError;

// ---------------------------------------------------------------------------
// CliError
// ---------------------------------------------------------------------------

/// All error conditions that the `roomboard` CLI can produce.
///
/// [`CliError::message`] returns the single line printed to stderr before
/// exiting.
#[derive(Debug)]
pub enum CliError {
    // --- Exit code 2: input failures ---
    /// The input workbook does not exist.
    FileNotFound {
        /// The path that was not found.
        path: PathBuf,
    },

    /// The input path exists but could not be read.
    IoError {
        /// A human-readable label for the source.
        source: String,
        /// The underlying I/O error message.
        detail: String,
    },

    /// The input is not a readable workbook, has no sheets, or its first
    /// sheet is empty.
    ParseFailed {
        /// Human-readable description of the failure.
        detail: String,
    },

    /// A configured column index lies beyond the header row.
    InvalidLayout {
        /// Human-readable description of the offending column.
        detail: String,
    },

    // --- Exit code 1: output failures ---
    /// The rendered page could not be written.
    WriteFailed {
        /// The output path.
        path: PathBuf,
        /// The underlying I/O error message.
        detail: String,
    },
}

impl CliError {
    /// Returns the process exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::FileNotFound { .. }
            | Self::IoError { .. }
            | Self::ParseFailed { .. }
            | Self::InvalidLayout { .. } => 2,

            Self::WriteFailed { .. } => 1,
        }
    }

    /// Returns a human-readable error message suitable for printing to stderr.
    pub fn message(&self) -> String {
        match self {
            Self::FileNotFound { path } => {
                format!("error: file not found: {}", path.display())
            }
            Self::IoError { source, detail } => {
                format!("error: I/O error reading {source}: {detail}")
            }
            Self::ParseFailed { detail } => format!("error: {detail}"),
            Self::InvalidLayout { detail } => {
                format!("error: invalid column layout: {detail}")
            }
            Self::WriteFailed { path, detail } => {
                format!("error: cannot write {}: {detail}", path.display())
            }
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message())
    }
}

impl std::error::Error for CliError {}

impl From<LoadError> for CliError {
    fn from(e: LoadError) -> Self {
        match e {
            LoadError::NotFound { path } => Self::FileNotFound { path },
            LoadError::Io { path, detail } => Self::IoError {
                source: path.display().to_string(),
                detail,
            },
            LoadError::Workbook { .. } | LoadError::NoSheets | LoadError::EmptySheet { .. } => {
                Self::ParseFailed {
                    detail: e.to_string(),
                }
            }
        }
    }
}

impl From<LayoutError> for CliError {
    fn from(e: LayoutError) -> Self {
        Self::InvalidLayout {
            detail: e.to_string(),
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
