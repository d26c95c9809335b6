//! Error types for table comparison.
//!
//! Cell-level failures ([`ParseError`]) never abort a run; they are turned into
//! `ERROR` results by the validators. Configuration failures
//! ([`ConfigurationError`]) are raised while validators and registries are
//! built, before any row is compared.

use thiserror::Error;

/// Result type for comparison operations.
pub type Result<T> = std::result::Result<T, CompareError>;

/// A value could not be coerced to the kind a validator requires.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ParseError {
    /// The input contains no numeric token at all
    #[error("No numeric token in '{0}'")]
    NoNumericToken(String),

    /// The input looks numeric but violates the separator rules of the profile
    #[error("Malformed number '{input}': {reason}")]
    MalformedNumber {
        /// Raw input
        input: String,
        /// Which rule was violated
        reason: String,
    },

    /// The input is not one of the configured boolean tokens
    #[error("Unknown boolean value '{0}'")]
    UnknownBoolean(String),

    /// The input is not a recognized date or date/time
    #[error("Unknown date value '{0}'")]
    UnknownDate(String),

    /// The value has a kind the requested coercion cannot handle
    #[error("Cannot interpret {kind} value '{value}' as {target}")]
    WrongKind {
        /// Kind of the offending value
        kind: &'static str,
        /// Display form of the value
        value: String,
        /// Requested target kind
        target: &'static str,
    },
}

impl ParseError {
    /// Creates a malformed-number error.
    pub fn malformed(input: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::MalformedNumber {
            input: input.into(),
            reason: reason.into(),
        }
    }
}

/// Invalid validator, locale or registry configuration.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigurationError {
    /// Rounding digits outside the supported range
    #[error("Rounding digits must be between 0 and {max}, got {digits}")]
    InvalidDigits {
        /// Configured value
        digits: i32,
        /// Largest supported value
        max: u32,
    },

    /// Negative or non-finite tolerance
    #[error("Tolerance '{name}' must be a finite, non-negative number, got {value}")]
    InvalidTolerance {
        /// Parameter name (delta_up, delta_down, tolerance)
        name: &'static str,
        /// Configured value
        value: f64,
    },

    /// Inconsistent locale profile
    #[error("Invalid locale profile: {0}")]
    InvalidLocale(String),

    /// Unknown locale profile name
    #[error("Unknown locale profile '{0}'")]
    UnknownLocale(String),

    /// Column rule that cannot be resolved
    #[error("Invalid column rule: {0}")]
    InvalidColumnRule(String),
}

/// Umbrella error for comparison operations.
#[derive(Error, Debug)]
pub enum CompareError {
    /// Cell value could not be parsed
    #[error(transparent)]
    Parse(#[from] ParseError),

    /// Invalid configuration
    #[error(transparent)]
    Configuration(#[from] ConfigurationError),

    /// Per-column summaries need header values
    #[error("Header values must be set before requesting a per-column summary")]
    MissingHeader,

    /// Serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = ParseError::malformed("1,2,3", "invalid digit grouping");
        assert_eq!(
            err.to_string(),
            "Malformed number '1,2,3': invalid digit grouping"
        );

        let err = ConfigurationError::InvalidDigits { digits: -1, max: 15 };
        assert_eq!(
            err.to_string(),
            "Rounding digits must be between 0 and 15, got -1"
        );
    }

    #[test]
    fn test_compare_error_from() {
        let err: CompareError = ConfigurationError::UnknownLocale("klingon".into()).into();
        assert!(matches!(err, CompareError::Configuration(_)));
        assert_eq!(err.to_string(), "Unknown locale profile 'klingon'");
    }
}
