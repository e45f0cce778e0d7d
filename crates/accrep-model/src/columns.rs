//! Fixed column layout of the accident report export.

/// Original column indices dropped from every row, highest first.
///
/// Removal must walk this order: removing a lower index first would shift
/// every later position and corrupt the row.
pub const REMOVED_COLUMNS: [usize; 11] = [32, 31, 30, 29, 27, 26, 25, 24, 23, 1, 0];

/// Original index of the severity label column.
///
/// Not in [`REMOVED_COLUMNS`], and stable while higher indices are removed,
/// so the label is rewritten before any removal happens.
pub const SEVERITY_COLUMN: usize = 5;

/// Minimum field count a row must have to cover the removal set.
pub const MIN_FIELDS: usize = REMOVED_COLUMNS[0] + 1;

/// Output position of a surviving original column.
///
/// Returns `None` for indices in [`REMOVED_COLUMNS`]. A surviving index
/// shifts left by one for every removed index below it.
pub fn reduced_index(original: usize) -> Option<usize> {
    if REMOVED_COLUMNS.contains(&original) {
        return None;
    }
    let removed_below = REMOVED_COLUMNS
        .iter()
        .filter(|&&removed| removed < original)
        .count();
    Some(original - removed_below)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn removal_set_is_strictly_descending() {
        for pair in REMOVED_COLUMNS.windows(2) {
            assert!(pair[0] > pair[1]);
        }
    }

    #[test]
    fn min_fields_covers_highest_removed_index() {
        assert_eq!(MIN_FIELDS, 33);
    }

    #[test]
    fn removed_columns_have_no_output_position() {
        for &removed in &REMOVED_COLUMNS {
            assert_eq!(reduced_index(removed), None);
        }
    }

    #[test]
    fn surviving_columns_shift_by_removed_count_below() {
        // Indices 0 and 1 are removed, so index 2 lands first.
        assert_eq!(reduced_index(2), Some(0));
        assert_eq!(reduced_index(SEVERITY_COLUMN), Some(3));
        // 22 survives with only {0, 1} below it removed.
        assert_eq!(reduced_index(22), Some(20));
        // 28 survives between the removed runs {23..=27} and {29..=32}.
        assert_eq!(reduced_index(28), Some(21));
    }

    #[test]
    fn output_positions_are_contiguous() {
        let positions: Vec<usize> = (0..MIN_FIELDS).filter_map(reduced_index).collect();
        let expected: Vec<usize> = (0..MIN_FIELDS - REMOVED_COLUMNS.len()).collect();
        assert_eq!(positions, expected);
    }
}
