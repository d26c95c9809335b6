//! The closed set of built-in validators.

use crate::{
    BoolValidator, DateValidator, EqualValidator, ExcelValueValidator, IgnoreValidator,
    IntValidator, NumberValidator, OmittedValidator, TolerantFloatValidator,
};
use cellcheck_core::{CellValue, ComparisonResult, TableValidator};
use std::sync::Arc;

/// Any validator that can be assigned to a column.
///
/// The built-in validators are plain variants so a registry can be inspected
/// and cloned cheaply. User-defined validators plug in through
/// [`Validator::Custom`].
#[derive(Debug, Clone)]
pub enum Validator {
    /// Raw equality
    Equal(EqualValidator),
    /// Booleans and their textual tokens
    Bool(BoolValidator),
    /// Dates truncated to a precision
    Date(DateValidator),
    /// Column is reported as OMITTED
    Omitted(OmittedValidator),
    /// Column always matches
    Ignore(IgnoreValidator),
    /// Integers with a rounding tolerance
    Int(IntValidator),
    /// Numbers rounded to a number of digits
    Number(NumberValidator),
    /// Numbers within an asymmetric window
    TolerantFloat(TolerantFloatValidator),
    /// Dispatch on the detected kind of the expected value
    ExcelValue(ExcelValueValidator),
    /// User-defined validator
    Custom(Arc<dyn TableValidator>),
}

impl Validator {
    /// Wraps a user-defined validator.
    pub fn custom(validator: impl TableValidator + 'static) -> Self {
        Validator::Custom(Arc::new(validator))
    }

    fn inner(&self) -> &dyn TableValidator {
        match self {
            Validator::Equal(v) => v,
            Validator::Bool(v) => v,
            Validator::Date(v) => v,
            Validator::Omitted(v) => v,
            Validator::Ignore(v) => v,
            Validator::Int(v) => v,
            Validator::Number(v) => v,
            Validator::TolerantFloat(v) => v,
            Validator::ExcelValue(v) => v,
            Validator::Custom(v) => v.as_ref(),
        }
    }
}

impl Default for Validator {
    fn default() -> Self {
        Validator::ExcelValue(ExcelValueValidator::default())
    }
}

impl TableValidator for Validator {
    fn compare(&self, expected: &CellValue, actual: &CellValue) -> ComparisonResult {
        self.inner().compare(expected, actual)
    }

    fn name(&self) -> &str {
        self.inner().name()
    }
}

macro_rules! impl_from_validator {
    ($($variant:ident => $ty:ty),* $(,)?) => {
        $(
            impl From<$ty> for Validator {
                fn from(v: $ty) -> Self {
                    Validator::$variant(v)
                }
            }
        )*
    };
}

impl_from_validator! {
    Equal => EqualValidator,
    Bool => BoolValidator,
    Date => DateValidator,
    Omitted => OmittedValidator,
    Ignore => IgnoreValidator,
    Int => IntValidator,
    Number => NumberValidator,
    TolerantFloat => TolerantFloatValidator,
    ExcelValue => ExcelValueValidator,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[derive(Debug)]
    struct AlwaysError;

    impl TableValidator for AlwaysError {
        fn compare(&self, _expected: &CellValue, _actual: &CellValue) -> ComparisonResult {
            ComparisonResult::Error
        }

        fn name(&self) -> &str {
            "always_error"
        }
    }

    #[test]
    fn test_dispatch_and_names() {
        let cases: Vec<(Validator, &str)> = vec![
            (EqualValidator.into(), "equal"),
            (BoolValidator::default().into(), "bool"),
            (DateValidator::default().into(), "date"),
            (OmittedValidator.into(), "omitted"),
            (IgnoreValidator.into(), "ignore"),
            (IntValidator::default().into(), "int"),
            (NumberValidator::default().into(), "number"),
            (TolerantFloatValidator::new(0.1, 0.1).unwrap().into(), "tolerant_float"),
            (Validator::default(), "excel_value"),
        ];
        for (validator, name) in cases {
            assert_eq!(validator.name(), name);
        }
    }

    #[test]
    fn test_custom_validator() {
        let v = Validator::custom(AlwaysError);
        assert_eq!(v.name(), "always_error");
        assert_eq!(
            v.compare(&CellValue::Int(1), &CellValue::Int(1)),
            ComparisonResult::Error
        );
    }
}
