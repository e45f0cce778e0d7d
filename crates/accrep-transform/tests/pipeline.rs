//! Integration tests for the streaming pipeline.

use std::fs;

use accrep_model::{MIN_FIELDS, REMOVED_COLUMNS, ReduceError, SEVERITY_COLUMN, SeverityMap};
use accrep_transform::{reduce_file, reduce_stream};

const REDUCED_WIDTH: usize = MIN_FIELDS - REMOVED_COLUMNS.len();

fn header_line() -> String {
    (0..MIN_FIELDS)
        .map(|i| format!("H{i}"))
        .collect::<Vec<_>>()
        .join(",")
}

fn data_line(label: &str) -> String {
    let mut fields: Vec<String> = (0..MIN_FIELDS).map(|i| format!("v{i}")).collect();
    fields[SEVERITY_COLUMN] = label.to_string();
    fields.join(",")
}

fn parse_rows(data: &[u8]) -> Vec<Vec<String>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .from_reader(data);
    reader
        .records()
        .map(|record| {
            record
                .expect("parse output")
                .iter()
                .map(str::to_string)
                .collect()
        })
        .collect()
}

#[test]
fn reduces_rows_in_input_order() {
    let input = format!(
        "{}\n{}\n{}\n",
        header_line(),
        data_line("Mortel"),
        data_line("Léger")
    );
    let mut output = Vec::new();
    let report = reduce_stream(input.as_bytes(), &mut output, &SeverityMap::quebec())
        .expect("reduce stream");

    assert_eq!(report.rows_read, 3);
    assert_eq!(report.rows_written, 3);
    assert_eq!(report.columns_removed, 11);

    let rows = parse_rows(&output);
    assert_eq!(rows.len(), 3);
    for row in &rows {
        assert_eq!(row.len(), REDUCED_WIDTH);
    }
    // Indices 0 and 1 are dropped, so the header starts at H2 and the
    // severity column lands three fields in.
    assert_eq!(rows[0][0], "H2");
    assert_eq!(rows[0][3], "H5");
    assert_eq!(rows[1][3], "3");
    assert_eq!(rows[2][3], "1");
}

#[test]
fn header_only_input_yields_one_row() {
    let input = format!("{}\n", header_line());
    let mut output = Vec::new();
    let report =
        reduce_stream(input.as_bytes(), &mut output, &SeverityMap::quebec()).expect("reduce");
    assert_eq!(report.rows_written, 1);
    let rows = parse_rows(&output);
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].len(), REDUCED_WIDTH);
}

#[test]
fn empty_input_is_an_error() {
    let mut output = Vec::new();
    let err = reduce_stream(&b""[..], &mut output, &SeverityMap::quebec()).expect_err("empty");
    assert!(matches!(err, ReduceError::EmptyInput));
}

#[test]
fn unknown_label_aborts_without_writing_the_row() {
    let input = format!(
        "{}\n{}\n{}\n",
        header_line(),
        data_line("Inconnu"),
        data_line("Grave")
    );
    let mut output = Vec::new();
    let err = reduce_stream(input.as_bytes(), &mut output, &SeverityMap::quebec())
        .expect_err("unknown label");
    assert!(matches!(
        err,
        ReduceError::UnknownSeverity { line: 2, .. }
    ));
    // Only the header made it out before the abort.
    let rows = parse_rows(&output);
    assert_eq!(rows.len(), 1);
}

#[test]
fn short_row_aborts() {
    let input = format!("{}\na,b,c\n", header_line());
    let mut output = Vec::new();
    let err =
        reduce_stream(input.as_bytes(), &mut output, &SeverityMap::quebec()).expect_err("short");
    assert!(matches!(
        err,
        ReduceError::RowTooShort {
            line: 2,
            found: 3,
            required: 33,
        }
    ));
}

#[test]
fn bom_prefixed_input_reduces_cleanly() {
    let input = format!("\u{feff}{}\n{}\n", header_line(), data_line("Grave"));
    let mut output = Vec::new();
    let report =
        reduce_stream(input.as_bytes(), &mut output, &SeverityMap::quebec()).expect("reduce");
    assert_eq!(report.rows_written, 2);
    let rows = parse_rows(&output);
    assert_eq!(rows[0][0], "H2");
    assert_eq!(rows[1][3], "2");
}

#[test]
fn quoted_fields_survive_the_round_trip() {
    let mut fields: Vec<String> = (0..MIN_FIELDS).map(|i| format!("v{i}")).collect();
    fields[SEVERITY_COLUMN] = "Dommages matériels seulement".to_string();
    fields[7] = "Montréal, QC".to_string();
    let data_row = fields
        .iter()
        .map(|f| {
            if f.contains(',') {
                format!("\"{f}\"")
            } else {
                f.clone()
            }
        })
        .collect::<Vec<_>>()
        .join(",");

    let input = format!("{}\n{data_row}\n", header_line());
    let mut output = Vec::new();
    reduce_stream(input.as_bytes(), &mut output, &SeverityMap::quebec()).expect("reduce");

    let rows = parse_rows(&output);
    assert_eq!(rows[1][3], "0");
    // Original index 7 shifts left past the removed indices 0 and 1.
    assert_eq!(rows[1][5], "Montréal, QC");
}

#[test]
fn custom_severity_table_is_honored() {
    let mut reader_input = format!("{}\n", header_line());
    let mut fields: Vec<String> = (0..MIN_FIELDS).map(|i| format!("v{i}")).collect();
    fields[SEVERITY_COLUMN] = "Fatal".to_string();
    reader_input.push_str(&fields.join(","));
    reader_input.push('\n');

    let dir = tempfile::tempdir().expect("create temp dir");
    let table_path = dir.path().join("severity.json");
    fs::write(&table_path, r#"{"Fatal": 9}"#).expect("write table");
    let map = SeverityMap::from_path(&table_path).expect("load table");

    let mut output = Vec::new();
    reduce_stream(reader_input.as_bytes(), &mut output, &map).expect("reduce");
    let rows = parse_rows(&output);
    assert_eq!(rows[1][3], "9");
}

#[test]
fn reduce_file_writes_the_output_file() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let input_path = dir.path().join("rapports.csv");
    let output_path = dir.path().join("rapports-reduit.csv");
    let contents = format!("{}\n{}\n", header_line(), data_line("Mortel"));
    fs::write(&input_path, contents).expect("write input");

    let report =
        reduce_file(&input_path, &output_path, &SeverityMap::quebec()).expect("reduce file");
    assert_eq!(report.rows_written, 2);

    let written = fs::read(&output_path).expect("read output");
    let rows = parse_rows(&written);
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[1][3], "3");
}

#[test]
fn missing_input_reports_the_path() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let input_path = dir.path().join("absent.csv");
    let output_path = dir.path().join("out.csv");
    let err = reduce_file(&input_path, &output_path, &SeverityMap::quebec())
        .expect_err("missing input");
    match err {
        ReduceError::FileOpen { path, .. } => assert_eq!(path, input_path),
        other => panic!("unexpected error: {other}"),
    }
}
