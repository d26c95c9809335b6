//! Integer and floating point validators.
//!
//! All three validators accept native numbers and locale-formatted numeric
//! text. A value that cannot be coerced to a number makes the comparison an
//! ERROR before any rounding or tolerance logic runs.

use crate::numeric::{IntegerValue, RoundingMode, check_digits, check_tolerance, to_f64, to_integer};
use cellcheck_core::{CellValue, ComparisonResult, ConfigurationError, LocaleProfile, TableValidator};

/// Default number of decimal digits used for rounding.
pub const DEFAULT_DIGITS: u32 = 10;

/// Compares integer values.
///
/// Native integers, integral floats and numeric text are exact. A float within
/// `tolerance` of an integer is rounded to it; equality that needed such a
/// rounding is reported as MATCHING.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct IntValidator {
    tolerance: f64,
    profile: LocaleProfile,
}

impl IntValidator {
    /// Creates a validator. `tolerance` is the largest distance from an integer
    /// that still rounds to it.
    pub fn new(tolerance: f64, profile: LocaleProfile) -> Result<Self, ConfigurationError> {
        Ok(Self {
            tolerance: check_tolerance("tolerance", tolerance)?,
            profile: profile.normalized()?,
        })
    }

    /// Rounding tolerance.
    pub fn tolerance(&self) -> f64 {
        self.tolerance
    }
}

impl TableValidator for IntValidator {
    fn compare(&self, expected: &CellValue, actual: &CellValue) -> ComparisonResult {
        let (Ok(e), Ok(a)) = (
            to_integer(expected, &self.profile, self.tolerance),
            to_integer(actual, &self.profile, self.tolerance),
        ) else {
            return ComparisonResult::Error;
        };

        match (e, a) {
            (IntegerValue::Exact(e), IntegerValue::Exact(a)) => {
                if e == a {
                    ComparisonResult::Equals
                } else {
                    ComparisonResult::Different
                }
            }
            (IntegerValue::Fractional(x), other) | (other, IntegerValue::Fractional(x)) => {
                let y = match other {
                    IntegerValue::Exact(i) | IntegerValue::Rounded(i) => i as f64,
                    IntegerValue::Fractional(y) => y,
                };
                if x == y {
                    ComparisonResult::Matching
                } else {
                    ComparisonResult::Different
                }
            }
            (
                IntegerValue::Exact(e) | IntegerValue::Rounded(e),
                IntegerValue::Exact(a) | IntegerValue::Rounded(a),
            ) => {
                if e == a {
                    ComparisonResult::Matching
                } else {
                    ComparisonResult::Different
                }
            }
        }
    }

    fn name(&self) -> &str {
        "int"
    }
}

/// Compares numbers, accepting differences that vanish after rounding.
#[derive(Debug, Clone, PartialEq)]
pub struct NumberValidator {
    digits: u32,
    rounding: RoundingMode,
    profile: LocaleProfile,
}

impl Default for NumberValidator {
    fn default() -> Self {
        Self {
            digits: DEFAULT_DIGITS,
            rounding: RoundingMode::default(),
            profile: LocaleProfile::default(),
        }
    }
}

impl NumberValidator {
    /// Creates a validator rounding to `digits` decimal places.
    pub fn new(
        digits: i32,
        rounding: RoundingMode,
        profile: LocaleProfile,
    ) -> Result<Self, ConfigurationError> {
        Ok(Self {
            digits: check_digits(digits)?,
            rounding,
            profile: profile.normalized()?,
        })
    }

    /// Number of decimal digits compared.
    pub fn digits(&self) -> u32 {
        self.digits
    }
}

impl TableValidator for NumberValidator {
    fn compare(&self, expected: &CellValue, actual: &CellValue) -> ComparisonResult {
        let (Ok(e), Ok(a)) = (to_f64(expected, &self.profile), to_f64(actual, &self.profile)) else {
            return ComparisonResult::Error;
        };

        if e == a {
            ComparisonResult::Equals
        } else if self.rounding.round(e, self.digits) == self.rounding.round(a, self.digits) {
            ComparisonResult::Almost
        } else {
            ComparisonResult::Different
        }
    }

    fn name(&self) -> &str {
        "number"
    }
}

/// Compares numbers within an asymmetric tolerance window.
///
/// The deviation `actual - expected`, rounded to `precision` digits, is
/// accepted as ALMOST when it lies in `[-delta_down, +delta_up]`.
#[derive(Debug, Clone, PartialEq)]
pub struct TolerantFloatValidator {
    delta_up: f64,
    delta_down: f64,
    precision: u32,
    rounding: RoundingMode,
    profile: LocaleProfile,
}

impl TolerantFloatValidator {
    /// Creates a validator with the default precision of ten digits.
    pub fn new(delta_up: f64, delta_down: f64) -> Result<Self, ConfigurationError> {
        Self::with_options(
            delta_up,
            delta_down,
            DEFAULT_DIGITS as i32,
            RoundingMode::default(),
            LocaleProfile::default(),
        )
    }

    /// Creates a validator with explicit precision, rounding and locale.
    pub fn with_options(
        delta_up: f64,
        delta_down: f64,
        precision: i32,
        rounding: RoundingMode,
        profile: LocaleProfile,
    ) -> Result<Self, ConfigurationError> {
        Ok(Self {
            delta_up: check_tolerance("delta_up", delta_up)?,
            delta_down: check_tolerance("delta_down", delta_down)?,
            precision: check_digits(precision)?,
            rounding,
            profile: profile.normalized()?,
        })
    }

    /// Upper and lower bound of the accepted deviation.
    pub fn window(&self) -> (f64, f64) {
        (-self.delta_down, self.delta_up)
    }
}

impl TableValidator for TolerantFloatValidator {
    fn compare(&self, expected: &CellValue, actual: &CellValue) -> ComparisonResult {
        let (Ok(e), Ok(a)) = (to_f64(expected, &self.profile), to_f64(actual, &self.profile)) else {
            return ComparisonResult::Error;
        };

        let diff = a - e;
        if diff == 0.0 {
            return ComparisonResult::Equals;
        }

        let deviation = self.rounding.round(diff, self.precision);
        if (-self.delta_down..=self.delta_up).contains(&deviation) {
            ComparisonResult::Almost
        } else {
            ComparisonResult::Different
        }
    }

    fn name(&self) -> &str {
        "tolerant_float"
    }
}
