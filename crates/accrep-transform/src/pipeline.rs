//! Streaming file pipeline.
//!
//! One pass over the input: the first record is the header, every record is
//! reduced and written in input order, and the first error aborts the run.
//! A partially written output file may remain after an abort.

use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;

use csv::{ReaderBuilder, WriterBuilder};
use tracing::{debug, info};

use accrep_model::{REMOVED_COLUMNS, ReduceError, Result, SeverityMap};

use crate::reduce::reduce_row;

/// Counts from a completed reduction run.
#[derive(Debug, Clone, Copy)]
pub struct ReduceReport {
    /// Records read from the input, header included.
    pub rows_read: u64,
    /// Records written to the output. Equals `rows_read` on success.
    pub rows_written: u64,
    /// Columns dropped from every row.
    pub columns_removed: usize,
}

/// Reduce CSV data from `input` into `output`.
///
/// The reader is configured without header handling so the header row flows
/// through the same path as data rows (it is reduced but never recoded),
/// and flexible so that row width is validated here rather than by the
/// parser. A UTF-8 BOM on the first field is stripped; the source portal
/// exports one.
///
/// # Errors
///
/// Returns an error on the first unreadable record, short row, unknown
/// severity label, or write failure. An input with no records at all is
/// [`ReduceError::EmptyInput`].
pub fn reduce_stream<R: Read, W: Write>(
    input: R,
    output: W,
    severity: &SeverityMap,
) -> Result<ReduceReport> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(input);
    let mut writer = WriterBuilder::new().from_writer(output);

    let mut rows_read = 0u64;
    let mut rows_written = 0u64;
    for record in reader.records() {
        let line = rows_read + 1;
        let record = record.map_err(|source| ReduceError::CsvRead { line, source })?;
        rows_read += 1;
        let is_header = line == 1;

        let mut fields: Vec<String> = record.iter().map(str::to_string).collect();
        if is_header {
            strip_bom(&mut fields);
            debug!(columns = fields.len(), "read header row");
        }

        let reduced = reduce_row(fields, is_header, severity, line)?;
        writer
            .write_record(&reduced)
            .map_err(|source| ReduceError::CsvWrite { line, source })?;
        rows_written += 1;
    }
    if rows_read == 0 {
        return Err(ReduceError::EmptyInput);
    }
    writer.flush().map_err(|source| ReduceError::CsvWrite {
        line: rows_written,
        source: csv::Error::from(source),
    })?;

    Ok(ReduceReport {
        rows_read,
        rows_written,
        columns_removed: REMOVED_COLUMNS.len(),
    })
}

/// Reduce the accident report at `input` into a new file at `output`.
///
/// # Errors
///
/// Path access failures are reported with the offending path; everything
/// else propagates from [`reduce_stream`].
pub fn reduce_file(input: &Path, output: &Path, severity: &SeverityMap) -> Result<ReduceReport> {
    debug!(
        input = %input.display(),
        output = %output.display(),
        "reducing accident report"
    );
    let source = File::open(input).map_err(|source| ReduceError::FileOpen {
        path: input.to_path_buf(),
        source,
    })?;
    let sink = File::create(output).map_err(|source| ReduceError::FileCreate {
        path: output.to_path_buf(),
        source,
    })?;
    let report = reduce_stream(source, sink, severity)?;
    info!(
        rows = report.rows_written,
        columns_removed = report.columns_removed,
        output = %output.display(),
        "reduced accident report"
    );
    Ok(report)
}

fn strip_bom(fields: &mut [String]) {
    if let Some(first) = fields.first_mut() {
        if let Some(stripped) = first.strip_prefix('\u{feff}') {
            *first = stripped.to_string();
        }
    }
}
