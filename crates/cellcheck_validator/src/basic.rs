//! Validators that do not interpret the cell contents.

use cellcheck_core::{CellValue, ComparisonResult, TableValidator};

/// Raw equality: EQUALS when both values are identical, DIFFERENT otherwise.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EqualValidator;

impl TableValidator for EqualValidator {
    fn compare(&self, expected: &CellValue, actual: &CellValue) -> ComparisonResult {
        if expected == actual {
            ComparisonResult::Equals
        } else {
            ComparisonResult::Different
        }
    }

    fn name(&self) -> &str {
        "equal"
    }
}

/// Marks a column as deliberately not compared.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OmittedValidator;

impl TableValidator for OmittedValidator {
    fn compare(&self, _expected: &CellValue, _actual: &CellValue) -> ComparisonResult {
        ComparisonResult::Omitted
    }

    fn name(&self) -> &str {
        "omitted"
    }
}

/// Accepts any pair of values.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IgnoreValidator;

impl TableValidator for IgnoreValidator {
    fn compare(&self, _expected: &CellValue, _actual: &CellValue) -> ComparisonResult {
        ComparisonResult::Matching
    }

    fn name(&self) -> &str {
        "ignore"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_equal_is_strict() {
        let v = EqualValidator;
        assert_eq!(v.compare(&"abc".into(), &"abc".into()), ComparisonResult::Equals);
        assert_eq!(v.compare(&"abc".into(), &"ABC".into()), ComparisonResult::Different);
        assert_eq!(v.compare(&CellValue::Int(42), &"42".into()), ComparisonResult::Different);
        assert_eq!(v.compare(&CellValue::Empty, &CellValue::Empty), ComparisonResult::Equals);
    }

    #[test]
    fn test_omitted_and_ignore() {
        let pairs = [
            (CellValue::Int(1), CellValue::Int(2)),
            (CellValue::Empty, "x".into()),
            (CellValue::Bool(true), CellValue::Bool(true)),
        ];
        for (expected, actual) in &pairs {
            assert_eq!(OmittedValidator.compare(expected, actual), ComparisonResult::Omitted);
            assert_eq!(IgnoreValidator.compare(expected, actual), ComparisonResult::Matching);
        }
    }
}
