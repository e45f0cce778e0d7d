//! The row transformation.

use accrep_model::{
    MIN_FIELDS, REMOVED_COLUMNS, ReduceError, Result, SEVERITY_COLUMN, SeverityMap,
};

/// Reduce one row: recode the severity label, then drop the fixed columns.
///
/// `line` is the 1-based record number, used only for error reporting.
/// Header rows keep their severity column text untouched but must still
/// cover the removal indices.
///
/// # Errors
///
/// Returns [`ReduceError::RowTooShort`] when the row has fewer than 33
/// fields and [`ReduceError::UnknownSeverity`] when a data row's severity
/// label is not in the table.
pub fn reduce_row(
    mut fields: Vec<String>,
    is_header: bool,
    severity: &SeverityMap,
    line: u64,
) -> Result<Vec<String>> {
    if fields.len() < MIN_FIELDS {
        return Err(ReduceError::RowTooShort {
            line,
            found: fields.len(),
            required: MIN_FIELDS,
        });
    }

    if !is_header {
        let label = &fields[SEVERITY_COLUMN];
        let code = severity
            .code_for(label)
            .ok_or_else(|| ReduceError::UnknownSeverity {
                line,
                label: label.clone(),
            })?;
        fields[SEVERITY_COLUMN] = code.to_string();
    }

    // Highest index first, so the remaining positions never shift.
    for &index in &REMOVED_COLUMNS {
        fields.remove(index);
    }
    Ok(fields)
}
