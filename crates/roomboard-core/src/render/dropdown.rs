/// Room filter dropdown.
///
/// Options are built from the filtered rows only, so rooms whose bookings are
/// all in the past never show up. The first option is always "Show All Rooms"
/// with an empty value; the filter script treats the empty value as "no
/// filter", which is why empty identifiers are never offered as a room.
use std::collections::BTreeSet;

use crate::cell::cell_at;
use crate::layout::ColumnLayout;
use crate::render::escape_html;
use crate::room::room_id;
use crate::schedule::DerivedRow;

/// `id` of the rendered `<select>`; the filter script looks it up by this id.
pub(crate) const DROPDOWN_ID: &str = "RoomID_dropdown";

const SHOW_ALL_LABEL: &str = "Show All Rooms";

/// Distinct room identifiers of `rows`, sorted by ordinal string order.
pub fn room_options(rows: &[DerivedRow], layout: &ColumnLayout) -> Vec<String> {
    let ids: BTreeSet<String> = rows
        .iter()
        .map(|d| room_id(&cell_at(&d.row, layout.room).to_text()).to_owned())
        .filter(|id| !id.is_empty())
        .collect();
    ids.into_iter().collect()
}

/// Renders the labelled `<select>` block for `options`.
pub fn render_dropdown(options: &[String]) -> String {
    let mut out = String::new();
    out.push_str("<div class=\"room-filter\">\n");
    out.push_str(&format!(
        "    <label for=\"{DROPDOWN_ID}\">Filter by Room:</label>\n"
    ));
    out.push_str(&format!("    <select id=\"{DROPDOWN_ID}\">\n"));
    out.push_str(&format!(
        "        <option value=\"\">{SHOW_ALL_LABEL}</option>\n"
    ));
    for option in options {
        let escaped = escape_html(option);
        out.push_str(&format!(
            "        <option value=\"{escaped}\">{escaped}</option>\n"
        ));
    }
    out.push_str("    </select>\n</div>");
    out
}
