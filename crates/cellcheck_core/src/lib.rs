//! # cellcheck core
//!
//! Core data structures and types for comparing a measured table against a
//! reference table cell by cell.
//!
//! ## Key Concepts
//!
//! - **CellValue**: a raw cell value of one of the Excel-native kinds
//! - **ComparisonResult**: outcome of comparing one cell pair
//! - **LocaleProfile**: decimal/thousands separators and boolean tokens used
//!   when values arrive as text
//! - **ValueClassifier**: detects the semantic kind of a value from its shape
//! - **TableValidator**: the capability every cell validator implements
//! - **ComparisonSummary**: per-cell entries and counts of a comparison run
//!
//! ## Example
//!
//! ```rust
//! use cellcheck_core::{classify, CellValue, LocaleProfile, ValueKind};
//!
//! let profile = LocaleProfile::german();
//! assert_eq!(classify(&CellValue::from("1.234,56"), &profile), ValueKind::Number);
//! assert_eq!(classify(&CellValue::from("WAHR"), &profile), ValueKind::Boolean);
//! assert_eq!(classify(&CellValue::Int(7), &profile), ValueKind::Integer);
//! ```

pub mod classify;
pub mod datetime;
pub mod error;
pub mod locale;
pub mod result;
pub mod summary;
pub mod table;
pub mod validator;
pub mod value;

pub use classify::*;
pub use datetime::*;
pub use error::*;
pub use locale::*;
pub use result::*;
pub use summary::*;
pub use table::*;
pub use validator::*;
pub use value::*;
