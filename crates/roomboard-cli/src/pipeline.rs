/// The load → plan → render → write pipeline.
///
/// Each stage returns a `Result`; the first failure ends the run and is
/// returned to `main`, which is the only place that prints.
use std::time::Instant;

use roomboard_core::{plan, render_document};

use crate::cli::Cli;
use crate::error::CliError;
use crate::io::write_output;

/// Runs the whole pipeline and returns the number of rows written.
///
/// # Errors
///
/// Returns [`CliError`] if the workbook cannot be loaded, the column layout
/// does not fit the header, or the page cannot be written.
pub fn run(cli: &Cli) -> Result<usize, CliError> {
    let started = Instant::now();
    let layout = cli.layout();
    let today = cli.reference_date();
    log::info!("reading {} (today is {today})", cli.input.display());

    let sheet = roomboard_excel::load_first_sheet(&cli.input)?;
    layout.validate(sheet.width())?;

    let schedule = plan(sheet, &layout, today);
    match schedule.date_span() {
        Some((first, last)) => log::info!(
            "{} upcoming reservation(s) from {first} to {last}",
            schedule.len()
        ),
        None => log::info!("no upcoming reservations on or after {today}"),
    }
    if schedule.dropped_invalid > 0 {
        log::debug!(
            "{} row(s) skipped: month or day could not be read",
            schedule.dropped_invalid
        );
    }

    let html = render_document(&schedule, &layout, &cli.page_chrome());
    write_output(&cli.output, &html)?;

    log::debug!("finished in {:?}", started.elapsed());
    Ok(schedule.len())
}
