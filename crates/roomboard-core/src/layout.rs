//! Column layout of the reservation sheet.
//!
//! The indices are configuration, not inferred from header text. They are
//! checked once against the loaded header so that a misconfigured layout
//! fails before any output is produced.

/// Zero-based positions of the columns the pipeline reads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnLayout {
    /// Column holding the room identifier (e.g. `"Room: A101"`).
    pub room: usize,
    /// Column holding the full English month name.
    pub month: usize,
    /// Column holding the day of month.
    pub day: usize,
}

impl Default for ColumnLayout {
    fn default() -> Self {
        Self {
            room: 0,
            month: 2,
            day: 3,
        }
    }
}

/// A layout that does not fit the loaded sheet.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LayoutError {
    /// A configured column lies beyond the header row.
    #[error("{name} column index {index} is out of range: the header row has {width} column(s)")]
    ColumnOutOfRange {
        /// Which column (`room`, `month` or `day`).
        name: &'static str,
        /// The configured index.
        index: usize,
        /// Number of columns in the header row.
        width: usize,
    },
}

impl ColumnLayout {
    /// Checks every configured index against a header of `width` columns.
    ///
    /// # Errors
    ///
    /// Returns [`LayoutError::ColumnOutOfRange`] for the first index that is
    /// not below `width`, checked in room, month, day order.
    pub fn validate(&self, width: usize) -> Result<(), LayoutError> {
        for (name, index) in self.columns() {
            if index >= width {
                return Err(LayoutError::ColumnOutOfRange { name, index, width });
            }
        }
        Ok(())
    }

    fn columns(&self) -> [(&'static str, usize); 3] {
        [("room", self.room), ("month", self.month), ("day", self.day)]
    }
}
