/// Errors produced while loading a workbook.
use std::path::PathBuf;

/// All failures of the loader. Every variant is fatal to a run.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    /// The input path does not exist.
    #[error("input file not found: {}", path.display())]
    NotFound {
        /// The missing path.
        path: PathBuf,
    },

    /// The input path exists but could not be read.
    #[error("cannot read {}: {detail}", path.display())]
    Io {
        /// The unreadable path.
        path: PathBuf,
        /// The underlying I/O error message.
        detail: String,
    },

    /// calamine could not open or parse the workbook.
    #[error("cannot open workbook: {detail}")]
    Workbook {
        /// Human-readable description from calamine.
        detail: String,
    },

    /// The workbook contains no sheets at all.
    #[error("workbook contains no sheets")]
    NoSheets,

    /// The first sheet has no rows, so there is no header.
    #[error("sheet {sheet:?} is empty: expected a header row")]
    EmptySheet {
        /// Name of the empty sheet.
        sheet: String,
    },
}
