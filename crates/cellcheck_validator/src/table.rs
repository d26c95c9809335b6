//! In-memory table used by the CLI and in tests.

use cellcheck_core::{CellCoordinate, CellValue, ComparisonResult, HighlightSink, TableSource};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A table held in memory that records highlight instructions.
///
/// Measured rows sent by the comparison engine are kept apart from the table
/// rows, keyed by the reference row they follow, so cell coordinates keep
/// addressing the original rows. Serializes as a JSON array of rows;
/// highlights and measured rows are not serialized.
///
/// ```rust
/// use cellcheck_core::{CellValue, TableSource};
/// use cellcheck_validator::MemoryTable;
///
/// let table: MemoryTable = serde_json::from_str(r#"[["id", "amount"], [1, 9.5], [2]]"#).unwrap();
/// assert_eq!(table.row_count(), 3);
/// assert_eq!(table.column_count(), 2);
/// assert_eq!(table.get_cell(2, 1), CellValue::Empty);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "Vec<Vec<CellValue>>", into = "Vec<Vec<CellValue>>")]
pub struct MemoryTable {
    rows: Vec<Vec<CellValue>>,
    highlights: BTreeMap<CellCoordinate, ComparisonResult>,
    inserted_rows: BTreeMap<usize, MeasuredRow>,
}

/// Measured values of a differing row with the result of each cell.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MeasuredRow {
    /// Measured values
    pub values: Vec<CellValue>,
    /// Result per value
    pub results: Vec<ComparisonResult>,
}

impl MemoryTable {
    /// Creates a table from rows of values.
    pub fn from_rows<R, V>(rows: impl IntoIterator<Item = R>) -> Self
    where
        R: IntoIterator<Item = V>,
        V: Into<CellValue>,
    {
        Self {
            rows: rows
                .into_iter()
                .map(|row| row.into_iter().map(Into::into).collect())
                .collect(),
            highlights: BTreeMap::new(),
            inserted_rows: BTreeMap::new(),
        }
    }

    /// The rows of the table.
    pub fn rows(&self) -> &[Vec<CellValue>] {
        &self.rows
    }

    /// Style recorded for a cell, if any.
    pub fn style_at(&self, row: usize, column: usize) -> Option<ComparisonResult> {
        self.highlights.get(&CellCoordinate::new(row, column)).copied()
    }

    /// All recorded highlights in row-major order.
    pub fn highlights(&self) -> &BTreeMap<CellCoordinate, ComparisonResult> {
        &self.highlights
    }

    /// Measured rows by the reference row they follow.
    pub fn inserted_rows(&self) -> &BTreeMap<usize, MeasuredRow> {
        &self.inserted_rows
    }

    /// Removes all recorded highlights and measured rows.
    pub fn clear_highlights(&mut self) {
        self.highlights.clear();
        self.inserted_rows.clear();
    }
}

impl From<Vec<Vec<CellValue>>> for MemoryTable {
    fn from(rows: Vec<Vec<CellValue>>) -> Self {
        Self {
            rows,
            highlights: BTreeMap::new(),
            inserted_rows: BTreeMap::new(),
        }
    }
}

impl From<MemoryTable> for Vec<Vec<CellValue>> {
    fn from(table: MemoryTable) -> Self {
        table.rows
    }
}

impl TableSource for MemoryTable {
    fn row_count(&self) -> usize {
        self.rows.len()
    }

    fn column_count(&self) -> usize {
        self.rows.iter().map(Vec::len).max().unwrap_or(0)
    }

    fn get_cell(&self, row: usize, column: usize) -> CellValue {
        self.rows
            .get(row)
            .and_then(|r| r.get(column))
            .cloned()
            .unwrap_or_default()
    }

    fn row_values(&self, row: usize) -> Vec<CellValue> {
        self.rows.get(row).cloned().unwrap_or_default()
    }
}

impl HighlightSink for MemoryTable {
    fn set_style(&mut self, coordinate: CellCoordinate, result: ComparisonResult) {
        self.highlights.insert(coordinate, result);
    }

    fn insert_measured_row(
        &mut self,
        after_row: usize,
        values: &[CellValue],
        results: &[ComparisonResult],
    ) {
        self.inserted_rows.insert(
            after_row,
            MeasuredRow {
                values: values.to_vec(),
                results: results.to_vec(),
            },
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_from_rows() {
        let table = MemoryTable::from_rows([vec!["a", "b"], vec!["c"]]);
        assert_eq!(table.row_count(), 2);
        assert_eq!(table.column_count(), 2);
        assert_eq!(table.get_cell(1, 0), CellValue::from("c"));
        assert_eq!(table.get_cell(5, 5), CellValue::Empty);
        assert_eq!(table.row_values(1), vec![CellValue::from("c")]);
    }

    #[test]
    fn test_json_round_trip_keeps_rows() {
        let table: MemoryTable =
            serde_json::from_str(r#"[["id", null, true], [1, 2.5, "x"]]"#).unwrap();
        assert_eq!(table.get_cell(0, 1), CellValue::Empty);
        assert_eq!(table.get_cell(0, 2), CellValue::Bool(true));
        assert_eq!(table.get_cell(1, 0), CellValue::Int(1));
        assert_eq!(table.get_cell(1, 1), CellValue::Float(2.5));

        let json = serde_json::to_string(&table).unwrap();
        assert_eq!(json, r#"[["id",null,true],[1,2.5,"x"]]"#);
    }

    #[test]
    fn test_records_highlights() {
        let mut table = MemoryTable::from_rows([vec![1, 2]]);
        table.set_style(CellCoordinate::new(0, 1), ComparisonResult::Different);

        assert_eq!(table.style_at(0, 1), Some(ComparisonResult::Different));
        assert_eq!(table.style_at(0, 0), None);

        table.clear_highlights();
        assert!(table.highlights().is_empty());
    }

    #[test]
    fn test_records_measured_rows_apart_from_rows() {
        let mut table = MemoryTable::from_rows([vec![1, 2], vec![3, 4]]);
        let results = [ComparisonResult::Equals, ComparisonResult::Different];
        table.insert_measured_row(0, &[CellValue::Int(1), CellValue::Int(5)], &results);
        table.insert_measured_row(0, &[CellValue::Int(1), CellValue::Int(6)], &results);

        assert_eq!(table.row_count(), 2);
        assert_eq!(table.inserted_rows().len(), 1);
        assert_eq!(table.inserted_rows()[&0].values[1], CellValue::Int(6));

        let json = serde_json::to_string(&table).unwrap();
        assert_eq!(json, "[[1,2],[3,4]]");

        table.clear_highlights();
        assert!(table.inserted_rows().is_empty());
    }
}
