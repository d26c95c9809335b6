//! Outcome of comparing one cell pair.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Result of comparing an expected (reference) value with an actual (measured)
/// value.
///
/// Variants are ordered from most to least exact, so `EQUALS < ALMOST` and
/// every acceptable result sorts before every foul one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ComparisonResult {
    /// Values are identical
    Equals,
    /// Values are semantically equal but differ in raw form (e.g. `1` and `WAHR`)
    Matching,
    /// Values are equal after rounding or within a tolerance window
    Almost,
    /// Comparison was intentionally skipped
    Omitted,
    /// Values differ
    Different,
    /// At least one value could not be interpreted
    Error,
}

impl ComparisonResult {
    /// All result kinds in exactness order.
    pub const ALL: [ComparisonResult; 6] = [
        ComparisonResult::Equals,
        ComparisonResult::Matching,
        ComparisonResult::Almost,
        ComparisonResult::Omitted,
        ComparisonResult::Different,
        ComparisonResult::Error,
    ];

    /// Returns true if the result is acceptable for an automated check.
    pub fn is_ok(self) -> bool {
        !self.is_foul()
    }

    /// Returns true if the result should fail an automated check.
    pub fn is_foul(self) -> bool {
        matches!(self, ComparisonResult::Different | ComparisonResult::Error)
    }

    /// Position in [`ComparisonResult::ALL`].
    pub fn index(self) -> usize {
        self as usize
    }

    /// Upper-case name as used in reports.
    pub fn name(self) -> &'static str {
        match self {
            ComparisonResult::Equals => "EQUALS",
            ComparisonResult::Matching => "MATCHING",
            ComparisonResult::Almost => "ALMOST",
            ComparisonResult::Omitted => "OMITTED",
            ComparisonResult::Different => "DIFFERENT",
            ComparisonResult::Error => "ERROR",
        }
    }

    /// Default fill colors as `(measured, reference)` RGB hex strings.
    ///
    /// Highlight adapters are free to use their own palette.
    pub fn cell_colors(self) -> (&'static str, &'static str) {
        match self {
            ComparisonResult::Equals => ("FFFFFF", "FFFFFF"),
            ComparisonResult::Matching => ("FFFFFF", "CCFFCC"),
            ComparisonResult::Almost => ("FFFFFF", "CCFFFF"),
            ComparisonResult::Omitted => ("CCCCCC", "CCCCCC"),
            ComparisonResult::Different => ("CCFFCC", "FF9999"),
            ComparisonResult::Error => ("FF9999", "FF0000"),
        }
    }
}

impl fmt::Display for ComparisonResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ok_and_foul_partition() {
        for result in ComparisonResult::ALL {
            assert_ne!(result.is_ok(), result.is_foul(), "{result}");
        }
        assert!(ComparisonResult::Omitted.is_ok());
        assert!(ComparisonResult::Error.is_foul());
    }

    #[test]
    fn test_exactness_order() {
        assert!(ComparisonResult::Equals < ComparisonResult::Matching);
        assert!(ComparisonResult::Matching < ComparisonResult::Almost);
        assert!(ComparisonResult::Almost < ComparisonResult::Different);
        for (i, result) in ComparisonResult::ALL.iter().enumerate() {
            assert_eq!(result.index(), i);
        }
    }

    #[test]
    fn test_serde_names() {
        let json = serde_json::to_string(&ComparisonResult::Almost).unwrap();
        assert_eq!(json, "\"ALMOST\"");
        let parsed: ComparisonResult = serde_json::from_str("\"ERROR\"").unwrap();
        assert_eq!(parsed, ComparisonResult::Error);
    }
}
