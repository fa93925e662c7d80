/// Full document assembly.
///
/// Layout, in order:
///
/// | Part | Content |
/// |---|---|
/// | `<head>` | title, heading with logo link, inline style |
/// | `<body>` | room dropdown, `.table-container` with the table, filter script |
/// | `<footer>` | attribution link |
use crate::layout::ColumnLayout;
use crate::render::dropdown::{render_dropdown, room_options};
use crate::render::escape_html;
use crate::render::table::render_table;
use crate::schedule::Schedule;

/// Static page text and links.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageChrome {
    /// Contents of `<title>`.
    pub title: String,
    /// Heading text shown next to the logo.
    pub heading: String,
    /// Target of the logo link.
    pub home_url: String,
    /// Logo image source, relative to the output file.
    pub logo_src: String,
    /// Alternative text for the logo image.
    pub logo_alt: String,
    /// Target of the footer link.
    pub footer_url: String,
    /// Text of the footer link.
    pub footer_label: String,
}

impl Default for PageChrome {
    fn default() -> Self {
        Self {
            title: "25Live Room Reservations".to_owned(),
            heading: "DSU Campus Reservations".to_owned(),
            home_url: "https://dsu.edu".to_owned(),
            logo_src: "DSU_UniversityLogo_Icon_Primary.png".to_owned(),
            logo_alt: "DSU Logo".to_owned(),
            footer_url: "https://25live.collegenet.com/pro/sdbor".to_owned(),
            footer_label: "25Live".to_owned(),
        }
    }
}

const STYLE: &str = r"<style>
    .table-container {
        width: 100%;
        overflow-x: auto;
    }
    h1 {
        margin: 0px;
        padding-left: 8px;
        text-align: left;
        font-size: 30pt;
        color: #003552;
        font-family: Arial, sans-serif;
        background-color: white;
    }
    h1 img {
        vertical-align: middle;
    }
    body {
        background-color: #009dd1;
        margin: 0px;
    }
    .room-filter {
        margin: 20px 0px;
        padding-left: 8px;
        font-family: Arial, sans-serif;
        font-weight: bold;
        color: white;
    }
    table {
        background-color: #e0e0e0;
        border-collapse: collapse;
        min-width: 800px;
        width: 100%;
        font-family: Arial, sans-serif;
        table-layout: auto;
        margin: 8px;
    }
    td {
        background-color: #e0e0e0;
        border: 1px solid #000000;
        padding: 10px;
        text-align: left;
        color: #003552;
        word-wrap: break-word;
        overflow: hidden;
        width: auto;
    }
    table tr:first-child td {
        font-weight: bold;
        color: black;
    }
    td:first-child {
        font-weight: bold;
        color: black;
        width: fit-content;
    }
    footer {
        margin: 0px;
        text-align: left;
        font-size: 10pt;
        color: #003552;
        font-family: Arial, sans-serif;
        background-color: white;
    }
</style>";

// Every table row except the first carries data-room; an empty selection
// shows all rows.
const FILTER_SCRIPT: &str = r"<script>
    document.addEventListener('DOMContentLoaded', () => {
        const dropdown = document.getElementById('RoomID_dropdown');
        const table = document.getElementById('reservations');
        if (!dropdown || !table) {
            return;
        }
        const rows = Array.from(table.rows).slice(1);

        const applyFilter = (selected) => {
            rows.forEach((row) => {
                const room = row.dataset.room ?? '';
                row.style.display = selected === '' || room === selected ? '' : 'none';
            });
        };

        dropdown.addEventListener('change', (event) => {
            applyFilter(event.target.value);
        });
    });
</script>";

/// Renders the complete HTML document for `schedule`.
///
/// Deterministic: the same schedule, layout and chrome always produce the
/// same bytes.
pub fn render_document(schedule: &Schedule, layout: &ColumnLayout, page: &PageChrome) -> String {
    let table = render_table(&schedule.header, &schedule.rows, layout);
    let options = room_options(&schedule.rows, layout);
    let dropdown = render_dropdown(&options);
    log::debug!(
        "rendering {} row(s) and {} room option(s)",
        schedule.rows.len(),
        options.len()
    );

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <title>{title}</title>
    <h1><a href="{home_url}" style="text-decoration:none"><img src="{logo_src}" height="30px" alt="{logo_alt}"></a> {heading}</h1>
    {style}
</head>
<body>
    {dropdown}
    <div class="table-container">{table}</div>
    {script}
</body>
<footer>
    <h1><a href="{footer_url}" style="text-decoration:none">{footer_label}</a></h1>
</footer>
</html>
"#,
        title = escape_html(&page.title),
        home_url = escape_html(&page.home_url),
        logo_src = escape_html(&page.logo_src),
        logo_alt = escape_html(&page.logo_alt),
        heading = escape_html(&page.heading),
        style = STYLE,
        dropdown = dropdown,
        table = table,
        script = FILTER_SCRIPT,
        footer_url = escape_html(&page.footer_url),
        footer_label = escape_html(&page.footer_label),
    )
}
