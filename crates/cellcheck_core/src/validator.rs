//! The cell validator capability.
//!
//! Every validator, built-in or user-defined, implements [`TableValidator`].
//! The row comparator and sheet differentiator only talk to this trait, so new
//! validators can be added without touching the orchestration code.

use crate::{CellValue, ComparisonResult};
use std::fmt::Debug;
use std::sync::Arc;

/// Compares one expected (reference) value with one actual (measured) value.
///
/// Implementations must be pure: the result depends only on the two inputs
/// and the validator's own configuration. They are shared between threads
/// when rows are compared in parallel.
///
/// # Example
///
/// ```rust
/// use cellcheck_core::{CellValue, ComparisonResult, TableValidator};
///
/// #[derive(Debug)]
/// struct CaseInsensitive;
///
/// impl TableValidator for CaseInsensitive {
///     fn compare(&self, expected: &CellValue, actual: &CellValue) -> ComparisonResult {
///         match (expected.as_text(), actual.as_text()) {
///             (Some(a), Some(b)) if a == b => ComparisonResult::Equals,
///             (Some(a), Some(b)) if a.eq_ignore_ascii_case(b) => ComparisonResult::Matching,
///             (Some(_), Some(_)) => ComparisonResult::Different,
///             _ => ComparisonResult::Error,
///         }
///     }
///
///     fn name(&self) -> &str {
///         "case_insensitive"
///     }
/// }
///
/// let v = CaseInsensitive;
/// assert_eq!(v.compare(&"abc".into(), &"ABC".into()), ComparisonResult::Matching);
/// ```
pub trait TableValidator: Send + Sync + Debug {
    /// Compares `expected` with `actual`.
    fn compare(&self, expected: &CellValue, actual: &CellValue) -> ComparisonResult;

    /// Short name recorded in summary entries.
    fn name(&self) -> &str;
}

impl<T: TableValidator + ?Sized> TableValidator for Arc<T> {
    fn compare(&self, expected: &CellValue, actual: &CellValue) -> ComparisonResult {
        (**self).compare(expected, actual)
    }

    fn name(&self) -> &str {
        (**self).name()
    }
}
