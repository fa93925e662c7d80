/// Reservation table markup.
///
/// The header row comes first, then the data rows in the order given. Column
/// order is never changed. Rows are padded with empty cells to the widest row
/// so that every data row has a room cell for the filter to read.
///
/// Each data row carries `data-room` with its prefix-stripped room identifier.
/// The header row has no such attribute and is skipped by the filter script.
use crate::cell::{Cell, cell_at};
use crate::layout::ColumnLayout;
use crate::render::escape_html;
use crate::room::room_id;
use crate::schedule::DerivedRow;

/// `id` of the rendered `<table>`; the filter script looks it up by this id.
pub(crate) const TABLE_ID: &str = "reservations";

/// Renders the header plus `rows` as an HTML `<table>`.
pub fn render_table(header: &[Cell], rows: &[DerivedRow], layout: &ColumnLayout) -> String {
    let width = rows
        .iter()
        .map(|d| d.row.len())
        .chain(std::iter::once(header.len()))
        .max()
        .unwrap_or(0);

    let mut out = String::new();
    out.push_str(&format!("<table id=\"{TABLE_ID}\">\n"));
    push_row(&mut out, header, width, None);
    for derived in rows {
        let room = room_id(&cell_at(&derived.row, layout.room).to_text()).to_owned();
        push_row(&mut out, &derived.row, width, Some(&room));
    }
    out.push_str("</table>");
    out
}

fn push_row(out: &mut String, row: &[Cell], width: usize, room: Option<&str>) {
    match room {
        Some(room) => {
            out.push_str(&format!("<tr data-room=\"{}\">", escape_html(room)));
        }
        None => out.push_str("<tr>"),
    }
    for col in 0..width {
        out.push_str(&format!(
            "<td>{}</td>",
            escape_html(&cell_at(row, col).to_text())
        ));
    }
    out.push_str("</tr>\n");
}
