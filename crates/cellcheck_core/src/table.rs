//! Abstract access to table engines.
//!
//! Concrete spreadsheet or dataframe back-ends live outside this workspace.
//! They plug into the comparison engine by implementing [`TableSource`] for
//! reading and [`HighlightSink`] for receiving highlight instructions.

use crate::{CellValue, ComparisonResult};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Position of a cell. Rows and columns are 0-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CellCoordinate {
    /// Row index
    pub row: usize,
    /// Column index
    pub column: usize,
}

impl CellCoordinate {
    /// Creates a coordinate.
    pub fn new(row: usize, column: usize) -> Self {
        Self { row, column }
    }
}

impl fmt::Display for CellCoordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.column)
    }
}

/// Read access to a table.
pub trait TableSource {
    /// Number of rows, including a header row if there is one.
    fn row_count(&self) -> usize;

    /// Number of columns of the widest row.
    fn column_count(&self) -> usize;

    /// Value at the given position; [`CellValue::Empty`] outside the table.
    fn get_cell(&self, row: usize, column: usize) -> CellValue;

    /// All values of one row.
    ///
    /// The default reads `column_count()` cells. Engines with ragged rows may
    /// return shorter rows; missing cells are treated as empty.
    fn row_values(&self, row: usize) -> Vec<CellValue> {
        (0..self.column_count())
            .map(|column| self.get_cell(row, column))
            .collect()
    }
}

/// Receiver of highlight instructions.
///
/// The sink maps each result kind to a visual style of its storage medium,
/// for example a fill color (see [`ComparisonResult::cell_colors`]).
pub trait HighlightSink {
    /// Marks one cell with the style of `result`.
    fn set_style(&mut self, coordinate: CellCoordinate, result: ComparisonResult);

    /// Receives the measured values of a compared row that has a DIFFERENT or
    /// ERROR result.
    ///
    /// Called once per such row, after its highlights were sent. `results`
    /// holds one result per value. A sink that shows measured values next to
    /// the reference places them below `after_row` and styles them with the
    /// measured colors of [`ComparisonResult::cell_colors`]. Coordinates of
    /// later highlights still address the reference rows. The default ignores
    /// the row.
    fn insert_measured_row(
        &mut self,
        _after_row: usize,
        _values: &[CellValue],
        _results: &[ComparisonResult],
    ) {
    }
}

impl<T: TableSource + ?Sized> TableSource for &T {
    fn row_count(&self) -> usize {
        (**self).row_count()
    }

    fn column_count(&self) -> usize {
        (**self).column_count()
    }

    fn get_cell(&self, row: usize, column: usize) -> CellValue {
        (**self).get_cell(row, column)
    }

    fn row_values(&self, row: usize) -> Vec<CellValue> {
        (**self).row_values(row)
    }
}
