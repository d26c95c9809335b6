//! Locale-aware parsing of numbers and boolean tokens.
//!
//! A [`LocaleProfile`] is an explicit value passed to every parse call. There is
//! no process-wide locale, so comparisons stay reproducible and can run in
//! parallel with different profiles.
//!
//! ## Example
//!
//! ```rust
//! use cellcheck_core::{parse_number, LocaleProfile};
//!
//! let german = LocaleProfile::german();
//! assert_eq!(parse_number("1.234,56", &german).unwrap().as_f64(), 1234.56);
//!
//! let default = LocaleProfile::default();
//! assert_eq!(parse_number("1,234.56", &default).unwrap().as_f64(), 1234.56);
//! assert!(parse_number("12x34", &default).is_err());
//! ```

use crate::{ConfigurationError, Number, ParseError};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::sync::LazyLock;

const TRUE_TOKENS: [&str; 6] = ["true", "=true()", "wahr", "1", "yes", "ja"];
const FALSE_TOKENS: [&str; 6] = ["false", "=false()", "falsch", "0", "no", "nein"];
const CURRENCY_TOKENS: [&str; 4] = ["euro", "€", "$", "£"];

/// Grammar of a number after the profile's separators were mapped to
/// canonical roles: `.` is the decimal separator, `_` the thousands separator.
static NUMBER_GRAMMAR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^(?P<sign>[+-])?(?P<int>\d{1,3}(?:_\d{3})+|\d*)(?:\.(?P<frac>\d*))?(?:[eE](?P<exp>[+-]?\d+))?$",
    )
    .expect("number grammar is a valid regex")
});

/// Number, boolean and date conventions of a region.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LocaleProfile {
    /// Character separating the integer part from the fraction
    pub decimal_separator: char,

    /// Character grouping integer digits in threes
    pub thousands_separator: char,

    /// Lower-case tokens that read as `true`
    pub true_tokens: BTreeSet<String>,

    /// Lower-case tokens that read as `false`
    pub false_tokens: BTreeSet<String>,

    /// Lower-case currency symbols and words stripped before parsing numbers
    pub currency_tokens: Vec<String>,

    /// Additional `chrono` date formats tried after ISO 8601
    pub date_formats: Vec<String>,
}

impl Default for LocaleProfile {
    fn default() -> Self {
        Self {
            decimal_separator: '.',
            thousands_separator: ',',
            true_tokens: TRUE_TOKENS.iter().map(|t| t.to_string()).collect(),
            false_tokens: FALSE_TOKENS.iter().map(|t| t.to_string()).collect(),
            currency_tokens: CURRENCY_TOKENS.iter().map(|t| t.to_string()).collect(),
            date_formats: Vec::new(),
        }
    }
}

impl LocaleProfile {
    /// German conventions: `1.234,56` and `31.12.2024`.
    pub fn german() -> Self {
        Self {
            decimal_separator: ',',
            thousands_separator: '.',
            date_formats: vec![
                "%d.%m.%Y".to_string(),
                "%d.%m.%Y %H:%M".to_string(),
                "%d.%m.%Y %H:%M:%S".to_string(),
            ],
            ..Self::default()
        }
    }

    /// Looks up a built-in profile by name.
    pub fn named(name: &str) -> Result<Self, ConfigurationError> {
        match name.trim().to_lowercase().as_str() {
            "default" | "en" | "english" => Ok(Self::default()),
            "de" | "german" | "deutsch" => Ok(Self::german()),
            other => Err(ConfigurationError::UnknownLocale(other.to_string())),
        }
    }

    /// Replaces the boolean token sets. Tokens are matched case-insensitively.
    pub fn with_boolean_tokens<T, F>(mut self, true_tokens: T, false_tokens: F) -> Self
    where
        T: IntoIterator,
        T::Item: AsRef<str>,
        F: IntoIterator,
        F::Item: AsRef<str>,
    {
        self.true_tokens = normalize_tokens(true_tokens);
        self.false_tokens = normalize_tokens(false_tokens);
        self
    }

    /// Lower-cases all tokens and validates the profile.
    pub fn normalized(mut self) -> Result<Self, ConfigurationError> {
        self.true_tokens = normalize_tokens(&self.true_tokens);
        self.false_tokens = normalize_tokens(&self.false_tokens);
        self.currency_tokens = self
            .currency_tokens
            .iter()
            .map(|t| t.trim().to_lowercase())
            .filter(|t| !t.is_empty())
            .collect();
        self.validate()?;
        Ok(self)
    }

    /// Checks that separators and token sets are consistent.
    pub fn validate(&self) -> Result<(), ConfigurationError> {
        let invalid = |message: String| Err(ConfigurationError::InvalidLocale(message));

        if self.decimal_separator == self.thousands_separator {
            return invalid(format!(
                "decimal and thousands separator are both '{}'",
                self.decimal_separator
            ));
        }
        for sep in [self.decimal_separator, self.thousands_separator] {
            if sep.is_ascii_digit() || matches!(sep, '+' | '-' | 'e' | 'E') {
                return invalid(format!("'{}' cannot be used as a separator", sep));
            }
        }
        if self.decimal_separator.is_whitespace() {
            return invalid("the decimal separator cannot be whitespace".to_string());
        }
        if self.true_tokens.is_empty() || self.false_tokens.is_empty() {
            return invalid("boolean token sets must not be empty".to_string());
        }
        if let Some(token) = self.true_tokens.intersection(&self.false_tokens).next() {
            return invalid(format!("token '{}' is both true and false", token));
        }
        Ok(())
    }

    /// Returns true if `raw` is one of the boolean tokens.
    pub fn is_bool_token(&self, raw: &str) -> bool {
        parse_bool(raw, self).is_ok()
    }
}

fn normalize_tokens<I>(tokens: I) -> BTreeSet<String>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    tokens
        .into_iter()
        .map(|t| t.as_ref().trim().to_lowercase())
        .filter(|t| !t.is_empty())
        .collect()
}

/// Parses a boolean token (case-insensitive, surrounding whitespace ignored).
pub fn parse_bool(raw: &str, profile: &LocaleProfile) -> Result<bool, ParseError> {
    let token = raw.trim().to_lowercase();
    if profile.true_tokens.contains(&token) {
        Ok(true)
    } else if profile.false_tokens.contains(&token) {
        Ok(false)
    } else {
        Err(ParseError::UnknownBoolean(raw.to_string()))
    }
}

/// Parses a locale-formatted number.
///
/// Currency tokens and whitespace are stripped first. The profile decides
/// which separator is the decimal and which the thousands separator; a string
/// that does not fit those roles (two decimal separators, a thousands
/// separator after the decimal one, groups that are not three digits wide) is
/// rejected instead of guessed.
pub fn parse_number(raw: &str, profile: &LocaleProfile) -> Result<Number, ParseError> {
    let mut cleaned = raw.trim().to_lowercase();
    if cleaned.is_empty() {
        return Err(ParseError::NoNumericToken(raw.to_string()));
    }

    for token in &profile.currency_tokens {
        if !token.is_empty() {
            cleaned = cleaned.replace(token.as_str(), "");
        }
    }

    let thousands = profile.thousands_separator;
    let cleaned: String = cleaned
        .trim()
        .chars()
        .filter(|c| !c.is_whitespace() || *c == thousands)
        .collect();

    if !cleaned.chars().any(|c| c.is_ascii_digit()) {
        return Err(ParseError::NoNumericToken(raw.to_string()));
    }

    let canonical: String = cleaned
        .chars()
        .map(|c| {
            if c == profile.decimal_separator {
                '.'
            } else if c == thousands {
                '_'
            } else if c == '.' || c == '_' {
                // a separator character the profile does not assign a role to
                '?'
            } else {
                c
            }
        })
        .collect();

    let caps = NUMBER_GRAMMAR.captures(&canonical).ok_or_else(|| {
        ParseError::malformed(raw, "does not match the number format of the locale")
    })?;

    let sign = caps.name("sign").map_or("", |m| m.as_str());
    let int_part = caps.name("int").map_or("", |m| m.as_str());
    let frac = caps.name("frac").map(|m| m.as_str());
    let exp = caps.name("exp").map(|m| m.as_str());

    if int_part.is_empty() && frac.is_none_or(str::is_empty) {
        return Err(ParseError::malformed(raw, "no digits"));
    }
    let grouped = int_part.contains('_');
    if grouped && exp.is_some() {
        return Err(ParseError::malformed(
            raw,
            "exponent cannot be combined with digit grouping",
        ));
    }

    let digits = int_part.replace('_', "");
    if frac.is_none() && exp.is_none() {
        if let Ok(value) = format!("{}{}", sign, digits).parse::<i64>() {
            return Ok(Number::Int(value));
        }
    }

    let mut literal = format!(
        "{}{}",
        sign,
        if digits.is_empty() { "0" } else { digits.as_str() }
    );
    if let Some(frac) = frac.filter(|f| !f.is_empty()) {
        literal.push('.');
        literal.push_str(frac);
    }
    if let Some(exp) = exp {
        literal.push('e');
        literal.push_str(exp);
    }

    match literal.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(Number::Float(value)),
        _ => Err(ParseError::malformed(raw, "value is out of range")),
    }
}
