#![deny(clippy::print_stdout, clippy::print_stderr)]
//! Core pipeline for turning a reservation sheet into a room board page.
//!
//! The crate never touches the filesystem. Callers hand it a [`Sheet`] that
//! was loaded elsewhere together with a reference "today", and get back a
//! [`Schedule`] (the rows that are still upcoming, in date order) and the
//! rendered HTML document.
//!
//! ```text
//! Sheet --derive_rows--> Vec<DerivedRow> --upcoming--> Schedule --render_document--> String
//! ```

pub mod cell;
pub mod dates;
pub mod layout;
pub mod render;
pub mod room;
pub mod schedule;

pub use cell::{Cell, Row, Sheet, cell_at};
pub use dates::{MONTH_NAMES, derive_date, normalized_date, parse_day, parse_month, rolls_over};
pub use layout::{ColumnLayout, LayoutError};
pub use render::{
    PageChrome, escape_html, render_document, render_dropdown, render_table, room_options,
};
pub use room::{ROOM_PREFIX, room_id};
pub use schedule::{DerivedRow, Schedule, derive_rows, plan, upcoming};
