//! Comparison of a single row pair.

use crate::ValidatorRegistry;
use cellcheck_core::{CellCoordinate, CellValue, SummaryEntry, TableValidator};

/// Compares aligned rows cell by cell.
///
/// Rows of different length are padded with [`CellValue::Empty`], so every
/// column position present in either row produces exactly one entry. A cell
/// ERROR never stops the row.
#[derive(Debug, Clone, Copy)]
pub struct RowComparator<'a> {
    registry: &'a ValidatorRegistry,
    header: &'a [String],
}

impl<'a> RowComparator<'a> {
    /// Creates a comparator. `header` holds the column names used for
    /// registry lookups and may be empty.
    pub fn new(registry: &'a ValidatorRegistry, header: &'a [String]) -> Self {
        Self { registry, header }
    }

    /// Compares `expected` (reference) with `actual` (measured) for row `row`.
    ///
    /// Entries are ordered by column.
    pub fn compare_rows(
        &self,
        row: usize,
        expected: &[CellValue],
        actual: &[CellValue],
    ) -> Vec<SummaryEntry> {
        let width = expected.len().max(actual.len());
        let empty = CellValue::Empty;

        (0..width)
            .map(|column| {
                let e = expected.get(column).unwrap_or(&empty);
                let a = actual.get(column).unwrap_or(&empty);
                let name = self.header.get(column).map(String::as_str);
                let validator = self.registry.resolve_column(name, column);

                SummaryEntry::new(
                    CellCoordinate::new(row, column),
                    e.clone(),
                    a.clone(),
                    validator.compare(e, a),
                    validator.name(),
                )
            })
            .collect()
    }
}
