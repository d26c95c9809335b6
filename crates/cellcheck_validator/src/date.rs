use cellcheck_core::{
    CellValue, ComparisonResult, ConfigurationError, DatePrecision, LocaleProfile, TableValidator,
    to_datetime,
};

/// Compares dates after truncating both to a precision.
///
/// Native dates and text in ISO 8601 or one of the profile's date formats are
/// accepted. Anything else is an ERROR.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DateValidator {
    precision: DatePrecision,
    profile: LocaleProfile,
}

impl DateValidator {
    /// Creates a validator with the given precision.
    pub fn new(precision: DatePrecision, profile: LocaleProfile) -> Result<Self, ConfigurationError> {
        Ok(Self {
            precision,
            profile: profile.normalized()?,
        })
    }

    /// Truncation precision.
    pub fn precision(&self) -> DatePrecision {
        self.precision
    }
}

impl TableValidator for DateValidator {
    fn compare(&self, expected: &CellValue, actual: &CellValue) -> ComparisonResult {
        let (Ok(e), Ok(a)) = (
            to_datetime(expected, &self.profile),
            to_datetime(actual, &self.profile),
        ) else {
            return ComparisonResult::Error;
        };

        if self.precision.truncate(e) == self.precision.truncate(a) {
            ComparisonResult::Equals
        } else {
            ComparisonResult::Different
        }
    }

    fn name(&self) -> &str {
        "date"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use pretty_assertions::assert_eq;

    fn validator(precision: DatePrecision) -> DateValidator {
        DateValidator::new(precision, LocaleProfile::german()).unwrap()
    }

    #[test]
    fn test_day_precision_ignores_time() {
        let v = validator(DatePrecision::Day);
        assert_eq!(
            v.compare(&"2024-01-01T10:00".into(), &"2024-01-01T23:00".into()),
            ComparisonResult::Equals
        );
        assert_eq!(
            v.compare(&"2024-01-01".into(), &"2024-01-02".into()),
            ComparisonResult::Different
        );
    }

    #[test]
    fn test_minute_precision() {
        let v = validator(DatePrecision::Minute);
        assert_eq!(
            v.compare(&"2024-01-01T10:00".into(), &"2024-01-01T23:00".into()),
            ComparisonResult::Different
        );
        assert_eq!(
            v.compare(&"2024-01-01 10:00:05".into(), &"2024-01-01T10:00:59".into()),
            ComparisonResult::Equals
        );
    }

    #[test]
    fn test_mixed_native_and_text() {
        let v = validator(DatePrecision::Day);
        let native = CellValue::Date(NaiveDate::from_ymd_opt(2024, 12, 31).unwrap());
        assert_eq!(v.compare(&native, &"31.12.2024".into()), ComparisonResult::Equals);
    }

    #[test]
    fn test_non_dates_are_errors() {
        let v = validator(DatePrecision::Day);
        assert_eq!(
            v.compare(&"2024-01-01".into(), &"tomorrow".into()),
            ComparisonResult::Error
        );
        assert_eq!(
            v.compare(&CellValue::Int(45000), &"2024-01-01".into()),
            ComparisonResult::Error
        );
    }
}
