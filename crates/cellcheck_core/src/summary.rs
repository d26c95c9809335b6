//! Aggregation of comparison results.
//!
//! A [`ComparisonSummary`] keeps one [`SummaryEntry`] per compared cell in
//! row-major order together with cached counts per result kind. It is not
//! synchronized; parallel callers buffer entries per row and record them in
//! row order.

use crate::{CellCoordinate, CellValue, CompareError, ComparisonResult};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Result of one compared cell.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummaryEntry {
    /// Position of the cell
    pub coordinate: CellCoordinate,

    /// Value from the reference table
    pub expected: CellValue,

    /// Value from the measured table
    pub actual: CellValue,

    /// Comparison outcome
    pub result: ComparisonResult,

    /// Name of the validator that produced the result
    pub validator: String,
}

impl SummaryEntry {
    /// Creates a new entry.
    pub fn new(
        coordinate: CellCoordinate,
        expected: CellValue,
        actual: CellValue,
        result: ComparisonResult,
        validator: impl Into<String>,
    ) -> Self {
        Self {
            coordinate,
            expected,
            actual,
            result,
            validator: validator.into(),
        }
    }
}

/// Collected results of a comparison run.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ComparisonSummary {
    entries: Vec<SummaryEntry>,
    counts: [usize; 6],
    header_values: Vec<String>,
}

impl ComparisonSummary {
    /// Creates an empty summary.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends the result of one cell.
    pub fn record(&mut self, entry: SummaryEntry) {
        self.counts[entry.result.index()] += 1;
        self.entries.push(entry);
    }

    /// Appends several entries in order.
    pub fn extend(&mut self, entries: impl IntoIterator<Item = SummaryEntry>) {
        for entry in entries {
            self.record(entry);
        }
    }

    /// All entries in the order they were recorded.
    pub fn entries(&self) -> &[SummaryEntry] {
        &self.entries
    }

    /// Counts per result kind. Kinds that never occurred are left out.
    pub fn counts(&self) -> BTreeMap<ComparisonResult, usize> {
        ComparisonResult::ALL
            .iter()
            .filter(|kind| self.counts[kind.index()] > 0)
            .map(|kind| (*kind, self.counts[kind.index()]))
            .collect()
    }

    /// Number of entries with the given result.
    pub fn count(&self, kind: ComparisonResult) -> usize {
        self.counts[kind.index()]
    }

    /// Total number of compared cells.
    pub fn total(&self) -> usize {
        self.entries.len()
    }

    /// Entries with the given result.
    pub fn cells(&self, kind: ComparisonResult) -> impl Iterator<Item = &SummaryEntry> {
        self.entries.iter().filter(move |e| e.result == kind)
    }

    /// Entries that fail an automated check (DIFFERENT or ERROR).
    pub fn foul_entries(&self) -> impl Iterator<Item = &SummaryEntry> {
        self.entries.iter().filter(|e| e.result.is_foul())
    }

    /// Returns true if no entry is DIFFERENT or ERROR.
    pub fn passed(&self) -> bool {
        self.count(ComparisonResult::Different) == 0 && self.count(ComparisonResult::Error) == 0
    }

    /// Sets the column names used by [`ComparisonSummary::summary_by_column`].
    pub fn set_header_values(&mut self, header_values: Vec<String>) {
        self.header_values = header_values;
    }

    /// Column names, if a header was set.
    pub fn header_values(&self) -> &[String] {
        &self.header_values
    }

    /// Counts per result kind for every header column.
    ///
    /// Entries in columns beyond the header are not included.
    pub fn summary_by_column(&self) -> crate::Result<Vec<BTreeMap<ComparisonResult, usize>>> {
        if self.header_values.is_empty() {
            return Err(CompareError::MissingHeader);
        }

        let mut columns = vec![BTreeMap::new(); self.header_values.len()];
        for entry in &self.entries {
            if let Some(counts) = columns.get_mut(entry.coordinate.column) {
                *counts.entry(entry.result).or_insert(0) += 1;
            }
        }
        Ok(columns)
    }
}

impl fmt::Display for ComparisonSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Comparison Summary:")?;
        for (kind, count) in self.counts() {
            writeln!(f, "{}: {}", kind, count)?;
        }
        Ok(())
    }
}
