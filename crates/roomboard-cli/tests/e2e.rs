//! E2E tests: build a workbook on disk, run the `roomboard` binary, inspect
//! the page it writes and the exit status.
#![allow(clippy::expect_used)]

use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use rust_xlsxwriter::Workbook;

/// Path to the compiled `roomboard` binary.
fn roomboard_bin() -> PathBuf {
    let mut path = std::env::current_exe().expect("current exe");
    path.pop();
    if path.ends_with("deps") {
        path.pop();
    }
    path.push("roomboard");
    path
}

/// Writes a reservation workbook with the default column layout
/// (room, event, month, day).
fn write_workbook(path: &Path, rows: &[(&str, &str, &str, &str)]) {
    let mut workbook = Workbook::new();
    let sheet = workbook.add_worksheet();
    for (col, title) in ["Room", "Event", "Month", "Day"].iter().enumerate() {
        sheet
            .write_string(0, col as u16, *title)
            .expect("write header");
    }
    for (i, (room, event, month, day)) in rows.iter().enumerate() {
        let r = i as u32 + 1;
        sheet.write_string(r, 0, *room).expect("write room");
        sheet.write_string(r, 1, *event).expect("write event");
        sheet.write_string(r, 2, *month).expect("write month");
        sheet.write_string(r, 3, *day).expect("write day");
    }
    workbook.save(path).expect("save workbook");
}

/// Runs the binary with a fixed reference date and a clean environment.
fn run(args: &[&str]) -> Output {
    Command::new(roomboard_bin())
        .args(["--today", "2024-06-01"])
        .args(args)
        .env_remove("RUST_LOG")
        .env_remove("ROOMBOARD_INPUT")
        .env_remove("ROOMBOARD_OUTPUT")
        .env_remove("ROOMBOARD_ROOM_COLUMN")
        .env_remove("ROOMBOARD_MONTH_COLUMN")
        .env_remove("ROOMBOARD_DAY_COLUMN")
        .env_remove("ROOMBOARD_TODAY")
        .output()
        .expect("run roomboard")
}

fn path_str(path: &Path) -> &str {
    path.to_str().expect("UTF-8 path")
}

#[test]
fn renders_upcoming_reservations() {
    let dir = tempfile::tempdir().expect("temp dir");
    let input = dir.path().join("Output.xlsx");
    let output = dir.path().join("htmltable.html");
    write_workbook(
        &input,
        &[
            ("Room: A101", "Seminar", "June", "3"),
            ("Room: B202", "Retreat", "May", "30"),
            ("Room: A101", "Kickoff", "July", "1st"),
        ],
    );

    let out = run(&["-i", path_str(&input), "-o", path_str(&output)]);
    assert_eq!(
        out.status.code(),
        Some(0),
        "stderr: {}",
        String::from_utf8_lossy(&out.stderr)
    );
    let stdout = String::from_utf8(out.stdout).expect("UTF-8 stdout");
    assert_eq!(stdout.trim_end(), "Outputted File: 2 rows processed.");

    let html = std::fs::read_to_string(&output).expect("read page");
    assert!(html.contains("<option value=\"A101\">A101</option>"));
    assert!(!html.contains("B202"), "past reservation leaked into page");
    let seminar = html.find("Seminar").expect("June row present");
    let kickoff = html.find("Kickoff").expect("July row present");
    assert!(seminar < kickoff, "rows must be sorted by date");
}

#[test]
fn unknown_month_does_not_abort_run() {
    let dir = tempfile::tempdir().expect("temp dir");
    let input = dir.path().join("in.xlsx");
    let output = dir.path().join("out.html");
    write_workbook(
        &input,
        &[
            ("Room: C303", "Mystery", "Smarch", "13"),
            ("Room: A101", "Lecture", "August", "9"),
        ],
    );

    let out = run(&["-i", path_str(&input), "-o", path_str(&output)]);
    assert_eq!(out.status.code(), Some(0));
    let html = std::fs::read_to_string(&output).expect("read page");
    assert!(html.contains("Lecture"));
    assert!(!html.contains("Mystery"));
}

#[test]
fn missing_input_exits_2_without_writing() {
    let dir = tempfile::tempdir().expect("temp dir");
    let input = dir.path().join("missing.xlsx");
    let output = dir.path().join("out.html");

    let out = run(&["-i", path_str(&input), "-o", path_str(&output)]);
    assert_eq!(out.status.code(), Some(2));
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("not found"), "stderr: {stderr}");
    assert!(out.stdout.is_empty(), "no success line on failure");
    assert!(!output.exists(), "nothing may be written on input failure");
}

#[test]
fn out_of_range_column_exits_2() {
    let dir = tempfile::tempdir().expect("temp dir");
    let input = dir.path().join("in.xlsx");
    let output = dir.path().join("out.html");
    write_workbook(&input, &[("Room: A101", "Seminar", "June", "3")]);

    let out = run(&[
        "-i",
        path_str(&input),
        "-o",
        path_str(&output),
        "--day-column",
        "9",
    ]);
    assert_eq!(out.status.code(), Some(2));
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("day column index 9"), "stderr: {stderr}");
    assert!(!output.exists());
}

#[test]
fn unwritable_output_exits_1() {
    let dir = tempfile::tempdir().expect("temp dir");
    let input = dir.path().join("in.xlsx");
    let output = dir.path().join("no-such-dir").join("out.html");
    write_workbook(&input, &[("Room: A101", "Seminar", "June", "3")]);

    let out = run(&["-i", path_str(&input), "-o", path_str(&output)]);
    assert_eq!(out.status.code(), Some(1));
    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(!stdout.contains("Outputted File"), "stdout: {stdout}");
}

#[test]
fn rerun_produces_identical_page() {
    let dir = tempfile::tempdir().expect("temp dir");
    let input = dir.path().join("in.xlsx");
    let first = dir.path().join("first.html");
    let second = dir.path().join("second.html");
    write_workbook(
        &input,
        &[
            ("Room: B202", "Board", "June", "20"),
            ("Room: A101", "Seminar", "June", "3"),
        ],
    );

    assert_eq!(
        run(&["-i", path_str(&input), "-o", path_str(&first)])
            .status
            .code(),
        Some(0)
    );
    assert_eq!(
        run(&["-i", path_str(&input), "-o", path_str(&second)])
            .status
            .code(),
        Some(0)
    );
    assert_eq!(
        std::fs::read(&first).expect("first"),
        std::fs::read(&second).expect("second")
    );
}

#[test]
fn run_without_upcoming_rows_is_silent_on_stderr() {
    let dir = tempfile::tempdir().expect("temp dir");
    let input = dir.path().join("in.xlsx");
    let output = dir.path().join("out.html");
    write_workbook(&input, &[("Room: B202", "Retreat", "May", "30")]);

    let out = run(&["-i", path_str(&input), "-o", path_str(&output)]);
    assert_eq!(out.status.code(), Some(0));
    assert!(
        out.stderr.is_empty(),
        "stderr: {}",
        String::from_utf8_lossy(&out.stderr)
    );
    let stdout = String::from_utf8(out.stdout).expect("UTF-8 stdout");
    assert_eq!(stdout.trim_end(), "Outputted File: 0 rows processed.");
    assert!(output.exists());
}

#[test]
fn data_starting_in_column_b_uses_default_layout() {
    let dir = tempfile::tempdir().expect("temp dir");
    let input = dir.path().join("in.xlsx");
    let output = dir.path().join("out.html");
    let mut workbook = Workbook::new();
    let sheet = workbook.add_worksheet();
    for (col, value) in ["Room", "Event", "Month", "Day"].iter().enumerate() {
        sheet
            .write_string(0, col as u16 + 1, *value)
            .expect("write header");
    }
    for (col, value) in ["Room: A101", "Seminar", "June", "3"].iter().enumerate() {
        sheet
            .write_string(1, col as u16 + 1, *value)
            .expect("write row");
    }
    workbook.save(&input).expect("save workbook");

    let out = run(&["-i", path_str(&input), "-o", path_str(&output)]);
    assert_eq!(
        out.status.code(),
        Some(0),
        "stderr: {}",
        String::from_utf8_lossy(&out.stderr)
    );
    let html = std::fs::read_to_string(&output).expect("read page");
    assert!(html.contains("<tr data-room=\"A101\">"));
    assert!(html.contains("<option value=\"A101\">A101</option>"));
}
