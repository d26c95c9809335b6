use crate::basic::EqualValidator;
use crate::boolean::BoolValidator;
use crate::date::DateValidator;
use crate::number::{DEFAULT_DIGITS, IntValidator, NumberValidator};
use crate::numeric::{RoundingMode, to_number};
use cellcheck_core::{
    CellValue, ComparisonResult, ConfigurationError, DatePrecision, LocaleProfile, TableValidator,
    ValueKind, ValueClassifier,
};

/// General purpose validator for spreadsheet cells.
///
/// Empty cells are handled first: two empty cells are EQUALS, a single empty
/// one is DIFFERENT. Otherwise the kind of the expected value decides which
/// delegate compares the pair. Strings fall back to raw equality.
///
/// The texts `"1"` and `"0"` are boolean tokens as well as numbers. When the
/// expected value is such a token and the actual value is a number but no
/// boolean, the pair is compared as numbers.
///
/// # Example
///
/// ```rust
/// use cellcheck_core::{CellValue, ComparisonResult, TableValidator};
/// use cellcheck_validator::ExcelValueValidator;
///
/// let v = ExcelValueValidator::default();
/// assert_eq!(v.compare(&CellValue::Int(42), &"42".into()), ComparisonResult::Equals);
/// assert_eq!(v.compare(&CellValue::Bool(true), &"FALSCH".into()), ComparisonResult::Different);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ExcelValueValidator {
    classifier: ValueClassifier,
    bool_validator: BoolValidator,
    date_validator: DateValidator,
    int_validator: IntValidator,
    number_validator: NumberValidator,
}

impl Default for ExcelValueValidator {
    fn default() -> Self {
        Self {
            classifier: ValueClassifier::default(),
            bool_validator: BoolValidator::default(),
            date_validator: DateValidator::default(),
            int_validator: IntValidator::default(),
            number_validator: NumberValidator::default(),
        }
    }
}

impl ExcelValueValidator {
    /// Creates a validator whose delegates use the given settings.
    pub fn new(
        date_precision: DatePrecision,
        digits: i32,
        rounding: RoundingMode,
        profile: LocaleProfile,
    ) -> Result<Self, ConfigurationError> {
        let profile = profile.normalized()?;
        Ok(Self {
            classifier: ValueClassifier::new(profile.clone()),
            bool_validator: BoolValidator::new(profile.clone())?,
            date_validator: DateValidator::new(date_precision, profile.clone())?,
            int_validator: IntValidator::new(0.0, profile.clone())?,
            number_validator: NumberValidator::new(digits, rounding, profile)?,
        })
    }

    /// Creates a validator with default delegates for a locale.
    pub fn with_profile(profile: LocaleProfile) -> Result<Self, ConfigurationError> {
        Self::new(
            DatePrecision::default(),
            DEFAULT_DIGITS as i32,
            RoundingMode::default(),
            profile,
        )
    }

    /// The delegate chosen for a value of `kind`.
    fn delegate(&self, kind: ValueKind) -> &dyn TableValidator {
        match kind {
            ValueKind::Boolean => &self.bool_validator,
            ValueKind::DateTime => &self.date_validator,
            ValueKind::Integer => &self.int_validator,
            ValueKind::Number => &self.number_validator,
            ValueKind::String | ValueKind::Empty => &EqualValidator,
        }
    }

    /// The numeric kind of `expected` if both values read as numbers.
    fn numeric_kind(&self, expected: &CellValue, actual: &CellValue) -> Option<ValueKind> {
        let profile = self.classifier.profile();
        let number = to_number(expected, profile).ok()?;
        to_number(actual, profile).ok()?;
        Some(if number.is_integral() {
            ValueKind::Integer
        } else {
            ValueKind::Number
        })
    }
}

impl TableValidator for ExcelValueValidator {
    fn compare(&self, expected: &CellValue, actual: &CellValue) -> ComparisonResult {
        match (expected.is_empty(), actual.is_empty()) {
            (true, true) => return ComparisonResult::Equals,
            (true, false) | (false, true) => return ComparisonResult::Different,
            (false, false) => {}
        }

        let mut kind = self.classifier.classify(expected);
        if kind == ValueKind::Boolean && self.bool_validator.normalize(actual).is_err() {
            kind = self.numeric_kind(expected, actual).unwrap_or(kind);
        }
        self.delegate(kind).compare(expected, actual)
    }

    fn name(&self) -> &str {
        "excel_value"
    }
}
