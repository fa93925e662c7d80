//! Clap CLI definition.
//!
//! Every setting has a default matching the historical fixed configuration,
//! so running `roomboard` with no arguments reads `Output.xlsx` and writes
//! `htmltable.html`. Settings can also come from `ROOMBOARD_*` environment
//! variables; flags take precedence.
use std::path::PathBuf;

use chrono::{Local, NaiveDate};
use clap::Parser;
use roomboard_core::{ColumnLayout, PageChrome};

/// Root CLI struct for the `roomboard` binary.
#[derive(Parser, Debug)]
#[command(
    name = "roomboard",
    version,
    about = "Render a room reservation sheet as a filterable HTML page",
    long_about = "Reads the first sheet of a reservation workbook, drops bookings before today,\n\
                  sorts the rest by date, and writes a self-contained HTML page with a\n\
                  room filter dropdown."
)]
pub struct Cli {
    /// Workbook to read (.xlsx, .xlsm, .xlsb, .xls or .ods).
    #[arg(
        long,
        short = 'i',
        value_name = "FILE",
        env = "ROOMBOARD_INPUT",
        default_value = "Output.xlsx"
    )]
    pub input: PathBuf,

    /// HTML file to write; an existing file is overwritten.
    #[arg(
        long,
        short = 'o',
        value_name = "FILE",
        env = "ROOMBOARD_OUTPUT",
        default_value = "htmltable.html"
    )]
    pub output: PathBuf,

    /// Zero-based column holding the room identifier.
    #[arg(long, value_name = "N", env = "ROOMBOARD_ROOM_COLUMN", default_value = "0")]
    pub room_column: usize,

    /// Zero-based column holding the month name.
    #[arg(long, value_name = "N", env = "ROOMBOARD_MONTH_COLUMN", default_value = "2")]
    pub month_column: usize,

    /// Zero-based column holding the day of month.
    #[arg(long, value_name = "N", env = "ROOMBOARD_DAY_COLUMN", default_value = "3")]
    pub day_column: usize,

    /// Reference date for filtering (default: the local date).
    #[arg(long, value_name = "YYYY-MM-DD", env = "ROOMBOARD_TODAY")]
    pub today: Option<NaiveDate>,

    /// Page title (default: "25Live Room Reservations").
    #[arg(long, value_name = "TEXT")]
    pub title: Option<String>,

    /// Heading shown next to the logo (default: "DSU Campus Reservations").
    #[arg(long, value_name = "TEXT")]
    pub heading: Option<String>,

    /// Only log errors (incompatible with `--verbose`).
    #[arg(long, short = 'q', conflicts_with = "verbose")]
    pub quiet: bool,

    /// Log row counts and timing details (incompatible with `--quiet`).
    #[arg(long, short = 'v', conflicts_with = "quiet")]
    pub verbose: bool,
}

impl Cli {
    /// The configured column layout.
    pub fn layout(&self) -> ColumnLayout {
        ColumnLayout {
            room: self.room_column,
            month: self.month_column,
            day: self.day_column,
        }
    }

    /// The reference date: `--today` if given, else the local date.
    pub fn reference_date(&self) -> NaiveDate {
        self.today.unwrap_or_else(|| Local::now().date_naive())
    }

    /// Page chrome with any `--title`/`--heading` overrides applied.
    pub fn page_chrome(&self) -> PageChrome {
        let mut page = PageChrome::default();
        if let Some(title) = &self.title {
            page.title.clone_from(title);
        }
        if let Some(heading) = &self.heading {
            page.heading.clone_from(heading);
        }
        page
    }
}
