//! HTML rendering of a [`crate::Schedule`].
//!
//! Produces one self-contained document: inline style, inline filter script,
//! the reservation table and a room dropdown. Only the table rows and the
//! dropdown options depend on the data; everything else comes from
//! [`PageChrome`] and the fixed assets in [`document`].

mod document;
mod dropdown;
mod table;

pub use document::{PageChrome, render_document};
pub use dropdown::{render_dropdown, room_options};
pub use table::render_table;

/// Escapes text for use in HTML element content and quoted attributes.
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            other => out.push(other),
        }
    }
    out
}
