//! Sheet comparison engine.
//!
//! This module provides the [`SheetDifferentiator`] that walks two tables row
//! by row, resolves a validator per column, records one summary entry per
//! cell and sends the matching highlight instruction to the reference table.

use crate::{RowComparator, ValidatorRegistry};
use cellcheck_core::{
    CellCoordinate, CellValue, ComparisonResult, ComparisonSummary, HighlightSink, SummaryEntry,
    TableSource,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Instant;
use tracing::{debug, warn};

/// Validator name recorded for cells of rows that exist in only one table.
pub const ROW_ALIGNMENT: &str = "row_alignment";

/// Result recorded for cells of rows that exist in only one table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MissingRowPolicy {
    /// Report missing rows as DIFFERENT
    #[default]
    Different,
    /// Report missing rows as ERROR
    Error,
}

impl MissingRowPolicy {
    /// The result recorded for every cell of a missing row.
    pub fn result(self) -> ComparisonResult {
        match self {
            MissingRowPolicy::Different => ComparisonResult::Different,
            MissingRowPolicy::Error => ComparisonResult::Error,
        }
    }
}

/// Options of a comparison run.
///
/// Every row is compared over the cells it has: a row present in both tables
/// spans the longer of its two versions, a row present in one table spans
/// that version. The entry count of a run is therefore the sum of these row
/// widths, which is the cell count of the longer table for rectangular input.
#[derive(Debug, Clone)]
pub struct DiffOptions {
    /// Row 0 holds column names and is not compared
    pub has_header: bool,

    /// How rows present in only one table are reported
    pub missing_rows: MissingRowPolicy,

    /// Flag checked between rows; a set flag stops the run
    pub interrupt: Option<Arc<AtomicBool>>,
}

impl Default for DiffOptions {
    fn default() -> Self {
        Self {
            has_header: true,
            missing_rows: MissingRowPolicy::default(),
            interrupt: None,
        }
    }
}

impl DiffOptions {
    /// Creates default options (header row, missing rows DIFFERENT).
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets whether row 0 is a header.
    pub fn with_header(mut self, has_header: bool) -> Self {
        self.has_header = has_header;
        self
    }

    /// Sets how missing rows are reported.
    pub fn with_missing_rows(mut self, policy: MissingRowPolicy) -> Self {
        self.missing_rows = policy;
        self
    }

    /// Sets a shared interruption flag.
    pub fn with_interrupt(mut self, flag: Arc<AtomicBool>) -> Self {
        self.interrupt = Some(flag);
        self
    }

    fn interrupted(&self) -> bool {
        self.interrupt
            .as_ref()
            .is_some_and(|flag| flag.load(Ordering::Relaxed))
    }
}

/// Statistics of one comparison run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiffOutcome {
    /// Number of data rows processed (header excluded)
    pub rows_compared: usize,

    /// Number of summary entries recorded
    pub cells_compared: usize,

    /// Number of rows present in only one table
    pub missing_rows: usize,

    /// Number of measured rows sent to the reference because they differ
    pub inserted_rows: usize,

    /// True if the run was stopped by the interruption flag
    pub interrupted: bool,

    /// Duration in milliseconds
    pub duration_ms: u64,
}

/// Compares a measured table against a reference table.
///
/// # Example
///
/// ```rust
/// use cellcheck_core::{ComparisonResult, ComparisonSummary};
/// use cellcheck_validator::{
///     DiffOptions, MemoryTable, SheetDifferentiator, TolerantFloatValidator,
///     ValidatorRegistryBuilder,
/// };
///
/// let registry = ValidatorRegistryBuilder::new()
///     .column("amount", TolerantFloatValidator::new(0.05, 0.05).unwrap())
///     .build();
/// let differ = SheetDifferentiator::new(&registry, DiffOptions::new());
///
/// let measured: MemoryTable = serde_json::from_str(r#"[["id", "amount"], [1, 10.03]]"#).unwrap();
/// let mut reference: MemoryTable = serde_json::from_str(r#"[["id", "amount"], [1, 10.0]]"#).unwrap();
///
/// let mut summary = ComparisonSummary::new();
/// let outcome = differ.differentiate(&measured, &mut reference, &mut summary);
///
/// assert_eq!(outcome.rows_compared, 1);
/// assert_eq!(summary.count(ComparisonResult::Almost), 1);
/// assert_eq!(reference.style_at(1, 1), Some(ComparisonResult::Almost));
/// ```
#[derive(Debug, Clone)]
pub struct SheetDifferentiator<'a> {
    registry: &'a ValidatorRegistry,
    options: DiffOptions,
}

/// Entries of one row and where the row was found.
struct RowEntries {
    row: usize,
    entries: Vec<SummaryEntry>,
    missing: bool,
    in_measured: bool,
}

impl<'a> SheetDifferentiator<'a> {
    /// Creates a differentiator.
    pub fn new(registry: &'a ValidatorRegistry, options: DiffOptions) -> Self {
        Self { registry, options }
    }

    /// Options of this differentiator.
    pub fn options(&self) -> &DiffOptions {
        &self.options
    }

    /// Compares `measured` against `reference`.
    ///
    /// For every compared cell a highlight instruction is sent to `reference`
    /// and an entry is appended to `summary`, in row-major order. With a
    /// header, row 0 of the reference names the columns and is neither
    /// compared nor highlighted.
    pub fn differentiate<M, R>(
        &self,
        measured: &M,
        reference: &mut R,
        summary: &mut ComparisonSummary,
    ) -> DiffOutcome
    where
        M: TableSource + ?Sized,
        R: TableSource + HighlightSink + ?Sized,
    {
        let start = Instant::now();
        let header = self.header(&*reference, summary);
        let (first_row, row_count) = self.row_range(measured, &*reference);
        let mut outcome = DiffOutcome::default();

        for row in first_row..row_count {
            if self.options.interrupted() {
                outcome.interrupted = true;
                break;
            }

            let row_entries = self.row_entries(measured, &*reference, row, &header);
            commit(row_entries, reference, summary, &mut outcome);
        }

        self.finish(outcome, measured, &*reference, start)
    }

    /// Compares `measured` against `reference` without highlighting and
    /// returns a fresh summary.
    pub fn summarize<M, R>(&self, measured: &M, reference: &R) -> ComparisonSummary
    where
        M: TableSource + ?Sized,
        R: TableSource + ?Sized,
    {
        let mut summary = ComparisonSummary::new();
        self.differentiate(measured, &mut Unhighlighted(reference), &mut summary);
        summary
    }

    /// Same as [`SheetDifferentiator::differentiate`], computing rows in
    /// parallel.
    ///
    /// Results are committed in row order, so entries and highlights are
    /// identical to a sequential run.
    #[cfg(feature = "parallel")]
    pub fn differentiate_parallel<M, R>(
        &self,
        measured: &M,
        reference: &mut R,
        summary: &mut ComparisonSummary,
    ) -> DiffOutcome
    where
        M: TableSource + Sync + ?Sized,
        R: TableSource + HighlightSink + Sync + ?Sized,
    {
        use rayon::prelude::*;

        let start = Instant::now();
        let header = self.header(&*reference, summary);
        let (first_row, row_count) = self.row_range(measured, &*reference);
        let shared: &R = reference;

        let rows: Vec<Option<RowEntries>> = (first_row..row_count)
            .into_par_iter()
            .map(|row| {
                (!self.options.interrupted())
                    .then(|| self.row_entries(measured, shared, row, &header))
            })
            .collect();

        let mut outcome = DiffOutcome::default();
        for row_entries in rows {
            let Some(row_entries) = row_entries else {
                outcome.interrupted = true;
                break;
            };
            commit(row_entries, reference, summary, &mut outcome);
        }

        self.finish(outcome, measured, &*reference, start)
    }

    /// Reads the header row and stores it in the summary.
    fn header<R: TableSource + ?Sized>(
        &self,
        reference: &R,
        summary: &mut ComparisonSummary,
    ) -> Vec<String> {
        if !self.options.has_header || reference.row_count() == 0 {
            return Vec::new();
        }

        let header: Vec<String> = reference
            .row_values(0)
            .iter()
            .map(|value| value.as_header_name().unwrap_or_default())
            .collect();
        summary.set_header_values(header.clone());
        header
    }

    fn row_range<M, R>(&self, measured: &M, reference: &R) -> (usize, usize)
    where
        M: TableSource + ?Sized,
        R: TableSource + ?Sized,
    {
        let first_row = usize::from(self.options.has_header);
        let row_count = measured.row_count().max(reference.row_count());
        (first_row, row_count.max(first_row))
    }

    fn row_entries<M, R>(&self, measured: &M, reference: &R, row: usize, header: &[String]) -> RowEntries
    where
        M: TableSource + ?Sized,
        R: TableSource + ?Sized,
    {
        let in_measured = row < measured.row_count();
        let in_reference = row < reference.row_count();

        if in_measured && in_reference {
            let entries = RowComparator::new(self.registry, header).compare_rows(
                row,
                &reference.row_values(row),
                &measured.row_values(row),
            );
            return RowEntries {
                row,
                entries,
                missing: false,
                in_measured,
            };
        }

        let result = self.options.missing_rows.result();
        let values = if in_reference {
            reference.row_values(row)
        } else {
            measured.row_values(row)
        };
        let entries = values
            .into_iter()
            .enumerate()
            .map(|(column, value)| {
                let (expected, actual) = if in_reference {
                    (value, CellValue::Empty)
                } else {
                    (CellValue::Empty, value)
                };
                SummaryEntry::new(
                    CellCoordinate::new(row, column),
                    expected,
                    actual,
                    result,
                    ROW_ALIGNMENT,
                )
            })
            .collect();

        RowEntries {
            row,
            entries,
            missing: true,
            in_measured,
        }
    }

    fn finish<M, R>(&self, mut outcome: DiffOutcome, measured: &M, reference: &R, start: Instant) -> DiffOutcome
    where
        M: TableSource + ?Sized,
        R: TableSource + ?Sized,
    {
        outcome.duration_ms = start.elapsed().as_millis() as u64;

        if outcome.missing_rows > 0 {
            warn!(
                "Row count mismatch: measured has {} rows, reference has {}; {} rows reported as {}",
                measured.row_count(),
                reference.row_count(),
                outcome.missing_rows,
                self.options.missing_rows.result()
            );
        }
        if outcome.interrupted {
            warn!("Comparison interrupted after {} rows", outcome.rows_compared);
        }
        debug!(
            "Compared {} rows ({} cells) in {}ms",
            outcome.rows_compared, outcome.cells_compared, outcome.duration_ms
        );

        outcome
    }
}

/// Sends highlights and records entries of one row, pairwise, then passes
/// a differing measured row to the sink.
fn commit<R>(
    row_entries: RowEntries,
    reference: &mut R,
    summary: &mut ComparisonSummary,
    outcome: &mut DiffOutcome,
) where
    R: HighlightSink + ?Sized,
{
    outcome.rows_compared += 1;
    outcome.cells_compared += row_entries.entries.len();
    if row_entries.missing {
        outcome.missing_rows += 1;
    }

    let foul = row_entries.in_measured
        && row_entries.entries.iter().any(|entry| entry.result.is_foul());
    let measured_row: Option<(Vec<CellValue>, Vec<ComparisonResult>)> = foul.then(|| {
        row_entries
            .entries
            .iter()
            .map(|entry| (entry.actual.clone(), entry.result))
            .unzip()
    });

    for entry in row_entries.entries {
        reference.set_style(entry.coordinate, entry.result);
        summary.record(entry);
    }

    if let Some((values, results)) = measured_row {
        reference.insert_measured_row(row_entries.row, &values, &results);
        outcome.inserted_rows += 1;
    }
}

/// Read-only view of a table that drops highlight instructions.
struct Unhighlighted<'t, T: ?Sized>(&'t T);

impl<T: TableSource + ?Sized> TableSource for Unhighlighted<'_, T> {
    fn row_count(&self) -> usize {
        self.0.row_count()
    }

    fn column_count(&self) -> usize {
        self.0.column_count()
    }

    fn get_cell(&self, row: usize, column: usize) -> CellValue {
        self.0.get_cell(row, column)
    }

    fn row_values(&self, row: usize) -> Vec<CellValue> {
        self.0.row_values(row)
    }
}

impl<T: ?Sized> HighlightSink for Unhighlighted<'_, T> {
    fn set_style(&mut self, _coordinate: CellCoordinate, _result: ComparisonResult) {}
}
