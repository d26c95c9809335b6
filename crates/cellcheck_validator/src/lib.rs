//! # cellcheck validator
//!
//! Cell validators and the comparison engine. This crate provides:
//!
//! - Built-in validators (equality, booleans, dates, integers, rounded and
//!   tolerant numbers, automatic detection for spreadsheet values)
//! - A column-to-validator registry with a default fallback
//! - Row and sheet comparison producing highlights and a summary
//!
//! ## Example
//!
//! ```rust
//! use cellcheck_core::{ComparisonResult, ComparisonSummary};
//! use cellcheck_validator::{
//!     DiffOptions, MemoryTable, OmittedValidator, SheetDifferentiator, ValidatorRegistryBuilder,
//! };
//!
//! let registry = ValidatorRegistryBuilder::new()
//!     .column("comment", OmittedValidator)
//!     .build();
//!
//! let measured = MemoryTable::from_rows([vec!["id", "comment"], vec!["1", "late"]]);
//! let mut reference = MemoryTable::from_rows([vec!["id", "comment"], vec!["1", "on time"]]);
//!
//! let mut summary = ComparisonSummary::new();
//! SheetDifferentiator::new(&registry, DiffOptions::new())
//!     .differentiate(&measured, &mut reference, &mut summary);
//!
//! if summary.passed() {
//!     println!("{}", summary);
//! }
//! assert_eq!(summary.count(ComparisonResult::Omitted), 1);
//! ```

mod basic;
mod boolean;
mod config;
mod date;
mod engine;
mod excel;
mod kind;
mod number;
mod numeric;
mod registry;
mod row;
mod table;

pub use basic::*;
pub use boolean::*;
pub use config::*;
pub use date::*;
pub use engine::*;
pub use excel::*;
pub use kind::*;
pub use number::*;
pub use numeric::*;
pub use registry::*;
pub use row::*;
pub use table::*;
