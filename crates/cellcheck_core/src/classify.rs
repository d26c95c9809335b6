//! Detection of the semantic kind of a cell value.

use crate::{CellValue, LocaleProfile, ValueKind, parse_bool, parse_datetime, parse_number};

/// Classifies values by their shape, not by a declared schema.
///
/// The rules are applied in a fixed order so the outcome is deterministic:
/// blank → native kinds → boolean tokens → locale numbers → dates → string.
/// Classification never fails; anything unrecognized is a string.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ValueClassifier {
    profile: LocaleProfile,
}

impl ValueClassifier {
    /// Creates a classifier for the given locale profile.
    pub fn new(profile: LocaleProfile) -> Self {
        Self { profile }
    }

    /// The profile used for text values.
    pub fn profile(&self) -> &LocaleProfile {
        &self.profile
    }

    /// Returns the detected kind of `value`.
    pub fn classify(&self, value: &CellValue) -> ValueKind {
        classify(value, &self.profile)
    }
}

/// Returns the detected kind of `value` under `profile`.
pub fn classify(value: &CellValue, profile: &LocaleProfile) -> ValueKind {
    match value {
        v if v.is_empty() => ValueKind::Empty,
        CellValue::Bool(_) => ValueKind::Boolean,
        CellValue::Date(_) | CellValue::DateTime(_) => ValueKind::DateTime,
        CellValue::Int(_) => ValueKind::Integer,
        CellValue::Float(x) if x.is_finite() && x.fract() == 0.0 => ValueKind::Integer,
        CellValue::Float(_) => ValueKind::Number,
        CellValue::Text(text) => classify_text(text, profile),
        CellValue::Empty => ValueKind::Empty,
    }
}

fn classify_text(text: &str, profile: &LocaleProfile) -> ValueKind {
    if parse_bool(text, profile).is_ok() {
        return ValueKind::Boolean;
    }
    if let Ok(number) = parse_number(text, profile) {
        return if number.is_integral() {
            ValueKind::Integer
        } else {
            ValueKind::Number
        };
    }
    if parse_datetime(text, profile).is_ok() {
        return ValueKind::DateTime;
    }
    ValueKind::String
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_native_kinds() {
        let c = ValueClassifier::default();
        assert_eq!(c.classify(&CellValue::Empty), ValueKind::Empty);
        assert_eq!(c.classify(&CellValue::Bool(false)), ValueKind::Boolean);
        assert_eq!(c.classify(&CellValue::Int(42)), ValueKind::Integer);
        assert_eq!(c.classify(&CellValue::Float(42.0)), ValueKind::Integer);
        assert_eq!(c.classify(&CellValue::Float(4.2)), ValueKind::Number);
        assert_eq!(c.classify(&CellValue::Float(f64::NAN)), ValueKind::Number);
        let date = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        assert_eq!(c.classify(&CellValue::Date(date)), ValueKind::DateTime);
    }

    #[test]
    fn test_text_kinds() {
        let c = ValueClassifier::default();
        assert_eq!(c.classify(&"  ".into()), ValueKind::Empty);
        assert_eq!(c.classify(&"WAHR".into()), ValueKind::Boolean);
        // boolean tokens win over numbers
        assert_eq!(c.classify(&"1".into()), ValueKind::Boolean);
        assert_eq!(c.classify(&"42".into()), ValueKind::Integer);
        assert_eq!(c.classify(&"1,234.5".into()), ValueKind::Number);
        assert_eq!(c.classify(&"2024-01-01T10:00".into()), ValueKind::DateTime);
        assert_eq!(c.classify(&"hello".into()), ValueKind::String);
        assert_eq!(c.classify(&"12x34".into()), ValueKind::String);
    }

    #[test]
    fn test_german_text_kinds() {
        let c = ValueClassifier::new(LocaleProfile::german());
        assert_eq!(c.classify(&"1.234,56".into()), ValueKind::Number);
        assert_eq!(c.classify(&"1.000".into()), ValueKind::Integer);
        assert_eq!(c.classify(&"31.12.2024".into()), ValueKind::DateTime);
    }
}
