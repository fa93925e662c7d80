/// Spreadsheet cell model shared by the loader and the pipeline.
///
/// Cells are positionally addressed; there is no schema beyond the column
/// indices in [`crate::ColumnLayout`]. Reading past the end of a row yields
/// [`Cell::Empty`] rather than an error.
/// A single raw cell value.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Cell {
    /// Blank, missing, or error cell.
    #[default]
    Empty,
    /// Text content, stored as read.
    Text(String),
    /// Numeric content. Spreadsheet dates arrive here as their serial value.
    Number(f64),
    /// Boolean content.
    Bool(bool),
}

/// One row of cells.
pub type Row = Vec<Cell>;

static EMPTY: Cell = Cell::Empty;

impl Cell {
    /// Returns the cell's display text.
    ///
    /// Whole numbers render without a fractional part (`5.0` becomes `"5"`),
    /// so a day column typed as a number reads the same as one typed as text.
    pub fn to_text(&self) -> String {
        match self {
            Self::Empty => String::new(),
            Self::Text(s) => s.clone(),
            Self::Number(n) => format_number(*n),
            Self::Bool(b) => b.to_string(),
        }
    }
}

fn format_number(n: f64) -> String {
    if n.fract() == 0.0 && n.abs() < 1e15 {
        #[allow(clippy::cast_possible_truncation)]
        let whole = n as i64;
        whole.to_string()
    } else {
        n.to_string()
    }
}

impl From<&str> for Cell {
    fn from(s: &str) -> Self {
        Self::Text(s.to_owned())
    }
}

impl From<String> for Cell {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

/// Returns the cell at `index`, or [`Cell::Empty`] when the row is shorter.
pub fn cell_at(row: &[Cell], index: usize) -> &Cell {
    row.get(index).unwrap_or(&EMPTY)
}

/// The first sheet of a workbook, split into header and data rows.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Sheet {
    /// Sheet name as discovered in the workbook.
    pub name: String,
    /// Row 0 of the sheet. Never date-filtered.
    pub header: Row,
    /// Every row after the header, in sheet order.
    pub rows: Vec<Row>,
}

impl Sheet {
    /// Number of columns in the header row.
    pub fn width(&self) -> usize {
        self.header.len()
    }
}
