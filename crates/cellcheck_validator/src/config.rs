//! Serializable validator settings.

use crate::number::DEFAULT_DIGITS;
use crate::{
    BoolValidator, DateValidator, EqualValidator, ExcelValueValidator, IgnoreValidator,
    IntValidator, NumberValidator, OmittedValidator, RoundingMode, TolerantFloatValidator,
    Validator,
};
use cellcheck_core::{ConfigurationError, DatePrecision, LocaleProfile};
use serde::{Deserialize, Serialize};
use std::fmt;

fn default_digits() -> i32 {
    DEFAULT_DIGITS as i32
}

/// Settings of one validator, tagged by `type`.
///
/// ```yaml
/// type: tolerant_float
/// delta_up: 0.05
/// delta_down: 0.02
/// precision: 2
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ValidatorConfig {
    /// Raw equality
    Equal,

    /// Boolean tokens
    Bool,

    /// Dates truncated to a precision
    Date {
        #[serde(default)]
        precision: DatePrecision,
    },

    /// Column is not compared
    Omitted,

    /// Any pair matches
    Ignore,

    /// Integers with an optional rounding tolerance
    Int {
        #[serde(default)]
        tolerance: f64,
    },

    /// Numbers compared after rounding
    Number {
        #[serde(default = "default_digits")]
        digits: i32,
        #[serde(default)]
        rounding: RoundingMode,
    },

    /// Numbers within a tolerance window
    TolerantFloat {
        delta_up: f64,
        delta_down: f64,
        #[serde(default = "default_digits")]
        precision: i32,
        #[serde(default)]
        rounding: RoundingMode,
    },

    /// Kind detected from the expected value
    ExcelValue {
        #[serde(default)]
        date_precision: DatePrecision,
        #[serde(default = "default_digits")]
        digits: i32,
        #[serde(default)]
        rounding: RoundingMode,
    },
}

impl Default for ValidatorConfig {
    fn default() -> Self {
        ValidatorConfig::ExcelValue {
            date_precision: DatePrecision::default(),
            digits: default_digits(),
            rounding: RoundingMode::default(),
        }
    }
}

impl ValidatorConfig {
    /// Builds the validator, checking every parameter.
    pub fn build(&self, profile: &LocaleProfile) -> Result<Validator, ConfigurationError> {
        let profile = profile.clone();
        let validator = match self {
            ValidatorConfig::Equal => EqualValidator.into(),
            ValidatorConfig::Bool => BoolValidator::new(profile)?.into(),
            ValidatorConfig::Date { precision } => DateValidator::new(*precision, profile)?.into(),
            ValidatorConfig::Omitted => OmittedValidator.into(),
            ValidatorConfig::Ignore => IgnoreValidator.into(),
            ValidatorConfig::Int { tolerance } => IntValidator::new(*tolerance, profile)?.into(),
            ValidatorConfig::Number { digits, rounding } => {
                NumberValidator::new(*digits, *rounding, profile)?.into()
            }
            ValidatorConfig::TolerantFloat {
                delta_up,
                delta_down,
                precision,
                rounding,
            } => TolerantFloatValidator::with_options(
                *delta_up,
                *delta_down,
                *precision,
                *rounding,
                profile,
            )?
            .into(),
            ValidatorConfig::ExcelValue {
                date_precision,
                digits,
                rounding,
            } => ExcelValueValidator::new(*date_precision, *digits, *rounding, profile)?.into(),
        };
        Ok(validator)
    }

    /// The `type` tag of this configuration.
    pub fn type_name(&self) -> &'static str {
        match self {
            ValidatorConfig::Equal => "equal",
            ValidatorConfig::Bool => "bool",
            ValidatorConfig::Date { .. } => "date",
            ValidatorConfig::Omitted => "omitted",
            ValidatorConfig::Ignore => "ignore",
            ValidatorConfig::Int { .. } => "int",
            ValidatorConfig::Number { .. } => "number",
            ValidatorConfig::TolerantFloat { .. } => "tolerant_float",
            ValidatorConfig::ExcelValue { .. } => "excel_value",
        }
    }
}

impl fmt::Display for ValidatorConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidatorConfig::Date { precision } => write!(f, "date(precision={})", precision),
            ValidatorConfig::Int { tolerance } => write!(f, "int(tolerance={})", tolerance),
            ValidatorConfig::Number { digits, .. } => write!(f, "number(digits={})", digits),
            ValidatorConfig::TolerantFloat {
                delta_up,
                delta_down,
                precision,
                ..
            } => write!(
                f,
                "tolerant_float(delta_up={}, delta_down={}, precision={})",
                delta_up, delta_down, precision
            ),
            ValidatorConfig::ExcelValue {
                date_precision,
                digits,
                ..
            } => write!(
                f,
                "excel_value(date_precision={}, digits={})",
                date_precision, digits
            ),
            other => f.write_str(other.type_name()),
        }
    }
}
