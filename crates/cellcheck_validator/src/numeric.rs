//! Numeric coercion and rounding shared by the number validators.

use cellcheck_core::{CellValue, ConfigurationError, LocaleProfile, Number, ParseError, parse_number};
use serde::{Deserialize, Serialize};

/// Largest supported number of rounding digits (f64 has ~15 significant digits).
pub const MAX_DIGITS: u32 = 15;

/// Tie-break rule used when rounding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoundingMode {
    /// 2.5 → 3, -2.5 → -3
    #[default]
    HalfAwayFromZero,
    /// 2.5 → 2, 3.5 → 4
    HalfEven,
}

impl RoundingMode {
    /// Rounds `value` to `digits` decimal places.
    pub fn round(self, value: f64, digits: u32) -> f64 {
        let factor = 10f64.powi(digits as i32);
        let scaled = value * factor;
        let rounded = match self {
            RoundingMode::HalfAwayFromZero => scaled.round(),
            RoundingMode::HalfEven => scaled.round_ties_even(),
        };
        rounded / factor
    }
}

/// Validates a configured number of rounding digits.
pub fn check_digits(digits: i32) -> Result<u32, ConfigurationError> {
    u32::try_from(digits)
        .ok()
        .filter(|d| *d <= MAX_DIGITS)
        .ok_or(ConfigurationError::InvalidDigits {
            digits,
            max: MAX_DIGITS,
        })
}

/// Validates a tolerance parameter.
pub fn check_tolerance(name: &'static str, value: f64) -> Result<f64, ConfigurationError> {
    if value.is_finite() && value >= 0.0 {
        Ok(value)
    } else {
        Err(ConfigurationError::InvalidTolerance { name, value })
    }
}

fn wrong_kind(value: &CellValue, target: &'static str) -> ParseError {
    ParseError::WrongKind {
        kind: value.type_name(),
        value: value.to_string(),
        target,
    }
}

/// Coerces a cell to a finite number.
pub fn to_number(value: &CellValue, profile: &LocaleProfile) -> Result<Number, ParseError> {
    match value {
        CellValue::Int(i) => Ok(Number::Int(*i)),
        CellValue::Float(x) if x.is_finite() => Ok(Number::Float(*x)),
        CellValue::Text(s) => parse_number(s, profile),
        other => Err(wrong_kind(other, "number")),
    }
}

/// Coerces a cell to a finite `f64`.
pub fn to_f64(value: &CellValue, profile: &LocaleProfile) -> Result<f64, ParseError> {
    to_number(value, profile).map(Number::as_f64)
}

/// An integer view of a numeric cell.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum IntegerValue {
    /// The value is integral
    Exact(i64),
    /// A float within the rounding tolerance of an integer
    Rounded(i64),
    /// A float too far from any integer
    Fractional(f64),
}

/// Coerces a cell to an integer.
///
/// Integral floats count as exact; floats within `tolerance` of the nearest
/// integer are rounded; anything else numeric stays fractional.
pub fn to_integer(
    value: &CellValue,
    profile: &LocaleProfile,
    tolerance: f64,
) -> Result<IntegerValue, ParseError> {
    match to_number(value, profile)? {
        Number::Int(i) => Ok(IntegerValue::Exact(i)),
        Number::Float(x) => {
            let nearest = x.round();
            let in_range = nearest >= i64::MIN as f64 && nearest < i64::MAX as f64;
            if !in_range {
                Ok(IntegerValue::Fractional(x))
            } else if x.fract() == 0.0 {
                Ok(IntegerValue::Exact(nearest as i64))
            } else if (x - nearest).abs() <= tolerance {
                Ok(IntegerValue::Rounded(nearest as i64))
            } else {
                Ok(IntegerValue::Fractional(x))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_rounding_modes() {
        assert_eq!(RoundingMode::HalfAwayFromZero.round(2.5, 0), 3.0);
        assert_eq!(RoundingMode::HalfAwayFromZero.round(-2.5, 0), -3.0);
        assert_eq!(RoundingMode::HalfEven.round(2.5, 0), 2.0);
        assert_eq!(RoundingMode::HalfEven.round(3.5, 0), 4.0);
        assert_eq!(RoundingMode::HalfAwayFromZero.round(5.123, 2), 5.12);
    }

    #[test]
    fn test_check_digits() {
        assert_eq!(check_digits(2), Ok(2));
        assert!(check_digits(-1).is_err());
        assert!(check_digits(16).is_err());
    }

    #[test]
    fn test_check_tolerance() {
        assert_eq!(check_tolerance("delta_up", 0.5), Ok(0.5));
        assert!(check_tolerance("delta_up", -0.1).is_err());
        assert!(check_tolerance("delta_up", f64::NAN).is_err());
        assert!(check_tolerance("delta_up", f64::INFINITY).is_err());
    }

    #[test]
    fn test_to_integer() {
        let profile = LocaleProfile::default();
        assert_eq!(
            to_integer(&CellValue::Float(42.0), &profile, 0.0),
            Ok(IntegerValue::Exact(42))
        );
        assert_eq!(
            to_integer(&"  1000  ".into(), &profile, 0.0),
            Ok(IntegerValue::Exact(1000))
        );
        assert_eq!(
            to_integer(&CellValue::Float(41.9999), &profile, 0.001),
            Ok(IntegerValue::Rounded(42))
        );
        assert_eq!(
            to_integer(&CellValue::Float(41.5), &profile, 0.001),
            Ok(IntegerValue::Fractional(41.5))
        );
        assert!(to_integer(&CellValue::Bool(true), &profile, 0.0).is_err());
        assert!(to_integer(&"abc".into(), &profile, 0.0).is_err());
    }

    #[test]
    fn test_to_f64_rejects_non_finite() {
        let profile = LocaleProfile::default();
        assert!(to_f64(&CellValue::Float(f64::NAN), &profile).is_err());
        assert!(to_f64(&CellValue::Empty, &profile).is_err());
        assert_eq!(to_f64(&"1,234.5".into(), &profile), Ok(1234.5));
    }
}
