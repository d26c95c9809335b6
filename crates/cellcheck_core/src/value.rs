//! Cell values as delivered by a table engine.
//!
//! The core only reasons about the closed set of Excel-native value kinds, so
//! [`CellValue`] is a plain enum rather than a general type system.

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A raw cell value.
///
/// Deserializes from JSON scalars: `null` becomes [`CellValue::Empty`],
/// integers [`CellValue::Int`], other numbers [`CellValue::Float`] and strings
/// [`CellValue::Text`]. Dates arrive as text and are recognized by the
/// classifier.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CellValue {
    /// Missing or blank cell
    #[default]
    Empty,
    /// Boolean cell
    Bool(bool),
    /// Integer cell
    Int(i64),
    /// Floating point cell
    Float(f64),
    /// Text cell
    Text(String),
    /// Date cell without time of day
    Date(NaiveDate),
    /// Date/time cell
    DateTime(NaiveDateTime),
}

impl CellValue {
    /// Returns true for empty cells and blank text.
    pub fn is_empty(&self) -> bool {
        match self {
            CellValue::Empty => true,
            CellValue::Text(s) => s.trim().is_empty(),
            _ => false,
        }
    }

    /// Returns the type name of this value.
    pub fn type_name(&self) -> &'static str {
        match self {
            CellValue::Empty => "empty",
            CellValue::Bool(_) => "boolean",
            CellValue::Int(_) => "integer",
            CellValue::Float(_) => "float",
            CellValue::Text(_) => "string",
            CellValue::Date(_) => "date",
            CellValue::DateTime(_) => "datetime",
        }
    }

    /// Attempts to get this value as a string slice.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            CellValue::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Returns the value as a column name, if it can serve as one.
    pub fn as_header_name(&self) -> Option<String> {
        match self {
            CellValue::Empty => None,
            CellValue::Text(s) => {
                let name = s.trim();
                (!name.is_empty()).then(|| name.to_string())
            }
            other => Some(other.to_string()),
        }
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::Empty => Ok(()),
            CellValue::Bool(b) => write!(f, "{}", b),
            CellValue::Int(i) => write!(f, "{}", i),
            CellValue::Float(x) => write!(f, "{}", x),
            CellValue::Text(s) => f.write_str(s),
            CellValue::Date(d) => write!(f, "{}", d.format("%Y-%m-%d")),
            CellValue::DateTime(dt) => write!(f, "{}", dt.format("%Y-%m-%dT%H:%M:%S%.f")),
        }
    }
}

impl From<&str> for CellValue {
    fn from(s: &str) -> Self {
        CellValue::Text(s.to_string())
    }
}

impl From<String> for CellValue {
    fn from(s: String) -> Self {
        CellValue::Text(s)
    }
}

impl From<i64> for CellValue {
    fn from(i: i64) -> Self {
        CellValue::Int(i)
    }
}

impl From<i32> for CellValue {
    fn from(i: i32) -> Self {
        CellValue::Int(i64::from(i))
    }
}

impl From<f64> for CellValue {
    fn from(x: f64) -> Self {
        CellValue::Float(x)
    }
}

impl From<bool> for CellValue {
    fn from(b: bool) -> Self {
        CellValue::Bool(b)
    }
}

impl From<NaiveDate> for CellValue {
    fn from(d: NaiveDate) -> Self {
        CellValue::Date(d)
    }
}

impl From<NaiveDateTime> for CellValue {
    fn from(dt: NaiveDateTime) -> Self {
        CellValue::DateTime(dt)
    }
}

impl<T: Into<CellValue>> From<Option<T>> for CellValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(CellValue::Empty, Into::into)
    }
}

/// Semantic kind detected by the value classifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ValueKind {
    /// Non-integral number
    Number,
    /// Integral number
    Integer,
    /// Boolean or boolean token
    Boolean,
    /// Date or date/time
    DateTime,
    /// Anything else
    String,
    /// Missing or blank
    Empty,
}

/// A canonical numeric value produced by the locale parser.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Number {
    /// Integer without decimal part or exponent
    Int(i64),
    /// Any other number
    Float(f64),
}

impl Number {
    /// Returns the value as `f64`.
    pub fn as_f64(self) -> f64 {
        match self {
            Number::Int(i) => i as f64,
            Number::Float(x) => x,
        }
    }

    /// Returns true if the value has no fractional part.
    pub fn is_integral(self) -> bool {
        match self {
            Number::Int(_) => true,
            Number::Float(x) => x.is_finite() && x.fract() == 0.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_is_empty() {
        assert!(CellValue::Empty.is_empty());
        assert!(CellValue::from("   ").is_empty());
        assert!(!CellValue::from("x").is_empty());
        assert!(!CellValue::Int(0).is_empty());
    }

    #[test]
    fn test_deserialize_json_scalars() {
        let values: Vec<CellValue> =
            serde_json::from_str(r#"[null, true, 42, 1.5, "text"]"#).unwrap();
        assert_eq!(
            values,
            vec![
                CellValue::Empty,
                CellValue::Bool(true),
                CellValue::Int(42),
                CellValue::Float(1.5),
                CellValue::Text("text".into()),
            ]
        );
    }

    #[test]
    fn test_header_names() {
        assert_eq!(CellValue::from(" amount ").as_header_name(), Some("amount".into()));
        assert_eq!(CellValue::Int(3).as_header_name(), Some("3".into()));
        assert_eq!(CellValue::Empty.as_header_name(), None);
        assert_eq!(CellValue::from("").as_header_name(), None);
    }

    #[test]
    fn test_display() {
        let dt = NaiveDate::from_ymd_opt(2024, 1, 1)
            .unwrap()
            .and_hms_opt(10, 0, 0)
            .unwrap();
        assert_eq!(CellValue::DateTime(dt).to_string(), "2024-01-01T10:00:00");
        assert_eq!(CellValue::Float(2.5).to_string(), "2.5");
        assert_eq!(CellValue::Empty.to_string(), "");
    }

    #[test]
    fn test_number_integral() {
        assert!(Number::Int(3).is_integral());
        assert!(Number::Float(3.0).is_integral());
        assert!(!Number::Float(3.5).is_integral());
        assert_eq!(Number::Int(3).as_f64(), 3.0);
    }
}
