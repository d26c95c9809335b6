use cellcheck_core::{
    CellValue, ComparisonResult, ConfigurationError, LocaleProfile, ParseError, TableValidator,
    parse_bool,
};

/// Compares boolean cells, including the textual forms spreadsheets produce.
///
/// Both values are normalized first: native booleans, the numbers 0 and 1,
/// and the profile's boolean tokens. A value that cannot be normalized makes
/// the comparison an ERROR. Identical raw values are EQUALS; values that only
/// agree after normalization (`"WAHR"` vs `true`) are MATCHING.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BoolValidator {
    profile: LocaleProfile,
}

impl BoolValidator {
    /// Creates a validator using the tokens of `profile`.
    pub fn new(profile: LocaleProfile) -> Result<Self, ConfigurationError> {
        Ok(Self {
            profile: profile.normalized()?,
        })
    }

    /// The profile whose tokens are accepted.
    pub fn profile(&self) -> &LocaleProfile {
        &self.profile
    }

    pub(crate) fn normalize(&self, value: &CellValue) -> Result<bool, ParseError> {
        match value {
            CellValue::Bool(b) => Ok(*b),
            CellValue::Int(0) => Ok(false),
            CellValue::Int(1) => Ok(true),
            CellValue::Float(x) if *x == 0.0 => Ok(false),
            CellValue::Float(x) if *x == 1.0 => Ok(true),
            CellValue::Text(s) => parse_bool(s, &self.profile),
            other => Err(ParseError::UnknownBoolean(other.to_string())),
        }
    }
}

impl TableValidator for BoolValidator {
    fn compare(&self, expected: &CellValue, actual: &CellValue) -> ComparisonResult {
        let (Ok(e), Ok(a)) = (self.normalize(expected), self.normalize(actual)) else {
            return ComparisonResult::Error;
        };

        if expected == actual {
            ComparisonResult::Equals
        } else if e == a {
            ComparisonResult::Matching
        } else {
            ComparisonResult::Different
        }
    }

    fn name(&self) -> &str {
        "bool"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_native_and_token_values() {
        let v = BoolValidator::default();
        assert_eq!(
            v.compare(&CellValue::Bool(true), &CellValue::Bool(true)),
            ComparisonResult::Equals
        );
        assert_eq!(
            v.compare(&"WAHR".into(), &CellValue::Bool(true)),
            ComparisonResult::Matching
        );
        assert_eq!(
            v.compare(&CellValue::Int(0), &"nein".into()),
            ComparisonResult::Matching
        );
        assert_eq!(
            v.compare(&CellValue::Bool(true), &"FALSCH".into()),
            ComparisonResult::Different
        );
        assert_eq!(
            v.compare(&" yes ".into(), &" yes ".into()),
            ComparisonResult::Equals
        );
    }

    #[test]
    fn test_unknown_token_is_error() {
        let profile = LocaleProfile::default()
            .with_boolean_tokens(["TRUE", "WAHR", "1"], ["FALSE", "FALSCH", "0"]);
        let v = BoolValidator::new(profile).unwrap();

        assert_eq!(
            v.compare(&"ja".into(), &CellValue::Bool(true)),
            ComparisonResult::Error
        );
        assert_eq!(
            v.compare(&"wahr".into(), &CellValue::Bool(true)),
            ComparisonResult::Matching
        );
    }

    #[test]
    fn test_non_boolean_numbers_are_errors() {
        let v = BoolValidator::default();
        assert_eq!(
            v.compare(&CellValue::Int(2), &CellValue::Int(2)),
            ComparisonResult::Error
        );
        assert_eq!(
            v.compare(&CellValue::Empty, &CellValue::Bool(false)),
            ComparisonResult::Error
        );
        assert_eq!(
            v.compare(&CellValue::Float(1.0), &CellValue::Bool(true)),
            ComparisonResult::Matching
        );
    }

    #[test]
    fn test_rejects_invalid_profile() {
        let profile = LocaleProfile::default().with_boolean_tokens(["1"], ["1"]);
        assert!(BoolValidator::new(profile).is_err());
    }
}
