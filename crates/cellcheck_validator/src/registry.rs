//! Column to validator mapping.
//!
//! A [`ValidatorRegistry`] is built once per run and read-only afterwards.
//! Lookups never fail: a column without an explicit rule gets the default
//! validator.
//!
//! ## Example
//!
//! ```rust
//! use cellcheck_core::TableValidator;
//! use cellcheck_validator::{
//!     ColumnId, OmittedValidator, TolerantFloatValidator, ValidatorRegistryBuilder,
//! };
//!
//! let registry = ValidatorRegistryBuilder::new()
//!     .column("amount", TolerantFloatValidator::new(0.05, 0.05).unwrap())
//!     .index(0, OmittedValidator)
//!     .build();
//!
//! assert_eq!(registry.resolve_column(Some("amount"), 3).name(), "tolerant_float");
//! assert_eq!(registry.resolve(&ColumnId::Index(0)).name(), "omitted");
//! assert_eq!(registry.resolve_column(None, 7).name(), "excel_value");
//! ```

use crate::Validator;
use cellcheck_core::TableValidator;
use std::collections::{BTreeMap, HashMap};
use std::fmt;
use tracing::debug;

/// Identifies a column by header name or by 0-based position.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ColumnId {
    /// Header name
    Name(String),
    /// 0-based column index
    Index(usize),
}

impl fmt::Display for ColumnId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ColumnId::Name(name) => write!(f, "'{}'", name),
            ColumnId::Index(index) => write!(f, "#{}", index),
        }
    }
}

impl From<&str> for ColumnId {
    fn from(name: &str) -> Self {
        ColumnId::Name(name.to_string())
    }
}

impl From<String> for ColumnId {
    fn from(name: String) -> Self {
        ColumnId::Name(name)
    }
}

impl From<usize> for ColumnId {
    fn from(index: usize) -> Self {
        ColumnId::Index(index)
    }
}

/// Immutable mapping from columns to validators.
#[derive(Debug, Clone, Default)]
pub struct ValidatorRegistry {
    by_name: HashMap<String, Validator>,
    by_index: BTreeMap<usize, Validator>,
    default: Validator,
}

impl ValidatorRegistry {
    /// Starts building a registry.
    pub fn builder() -> ValidatorRegistryBuilder {
        ValidatorRegistryBuilder::new()
    }

    /// Validator for a single column identifier, falling back to the default.
    pub fn resolve(&self, column: &ColumnId) -> &Validator {
        let found = match column {
            ColumnId::Name(name) => self.by_name.get(name),
            ColumnId::Index(index) => self.by_index.get(index),
        };
        found.unwrap_or(&self.default)
    }

    /// Validator for a column known by position and optionally by header name.
    ///
    /// The name mapping takes precedence over the index mapping.
    pub fn resolve_column(&self, name: Option<&str>, index: usize) -> &Validator {
        name.and_then(|name| self.by_name.get(name))
            .or_else(|| self.by_index.get(&index))
            .unwrap_or(&self.default)
    }

    /// Validators for `column_count` columns, in column order.
    pub fn resolve_columns<'a>(&'a self, header: &[String], column_count: usize) -> Vec<&'a Validator> {
        (0..column_count)
            .map(|index| self.resolve_column(header.get(index).map(String::as_str), index))
            .collect()
    }

    /// The fallback validator.
    pub fn default_validator(&self) -> &Validator {
        &self.default
    }

    /// Explicit rules, names first (sorted) then indices.
    pub fn rules(&self) -> Vec<(ColumnId, &Validator)> {
        let mut names: Vec<_> = self.by_name.iter().collect();
        names.sort_by(|a, b| a.0.cmp(b.0));

        names
            .into_iter()
            .map(|(name, v)| (ColumnId::Name(name.clone()), v))
            .chain(self.by_index.iter().map(|(i, v)| (ColumnId::Index(*i), v)))
            .collect()
    }

    /// Number of explicit rules.
    pub fn len(&self) -> usize {
        self.by_name.len() + self.by_index.len()
    }

    /// Returns true if only the default validator is configured.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Builder for [`ValidatorRegistry`].
///
/// Later rules for the same column replace earlier ones.
#[derive(Debug, Default)]
pub struct ValidatorRegistryBuilder {
    registry: ValidatorRegistry,
}

impl ValidatorRegistryBuilder {
    /// Creates a builder with the [`crate::ExcelValueValidator`] as default.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the validator for a header name.
    pub fn column(mut self, name: impl Into<String>, validator: impl Into<Validator>) -> Self {
        self.registry.by_name.insert(name.into(), validator.into());
        self
    }

    /// Sets the validator for a column position.
    pub fn index(mut self, index: usize, validator: impl Into<Validator>) -> Self {
        self.registry.by_index.insert(index, validator.into());
        self
    }

    /// Sets the validator for a column identifier.
    pub fn rule(self, column: ColumnId, validator: impl Into<Validator>) -> Self {
        match column {
            ColumnId::Name(name) => self.column(name, validator),
            ColumnId::Index(index) => self.index(index, validator),
        }
    }

    /// Sets the fallback validator.
    pub fn default_validator(mut self, validator: impl Into<Validator>) -> Self {
        self.registry.default = validator.into();
        self
    }

    /// Builds the registry.
    pub fn build(self) -> ValidatorRegistry {
        debug!(
            "Built validator registry: {} named, {} indexed, default {}",
            self.registry.by_name.len(),
            self.registry.by_index.len(),
            self.registry.default.name()
        );
        self.registry
    }
}

/// Registries per sheet, with a fallback registry.
#[derive(Debug, Clone, Default)]
pub struct RegistryStore {
    sheets: HashMap<String, ValidatorRegistry>,
    default: ValidatorRegistry,
}

impl RegistryStore {
    /// Creates a store whose unknown sheets use `default`.
    pub fn new(default: ValidatorRegistry) -> Self {
        Self {
            sheets: HashMap::new(),
            default,
        }
    }

    /// Registers the registry of a sheet.
    pub fn insert(&mut self, sheet: impl Into<String>, registry: ValidatorRegistry) {
        self.sheets.insert(sheet.into(), registry);
    }

    /// Registry for `sheet`, or the fallback.
    pub fn get(&self, sheet: &str) -> &ValidatorRegistry {
        self.sheets.get(sheet).unwrap_or(&self.default)
    }

    /// Names of sheets with their own registry, sorted.
    pub fn sheet_names(&self) -> Vec<&str> {
        let mut names: Vec<_> = self.sheets.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// The fallback registry.
    pub fn default_registry(&self) -> &ValidatorRegistry {
        &self.default
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{EqualValidator, IgnoreValidator, OmittedValidator};
    use pretty_assertions::assert_eq;

    #[test]
    fn test_name_beats_index() {
        let registry = ValidatorRegistryBuilder::new()
            .column("id", OmittedValidator)
            .index(0, IgnoreValidator)
            .build();

        assert_eq!(registry.resolve_column(Some("id"), 0).name(), "omitted");
        assert_eq!(registry.resolve_column(Some("other"), 0).name(), "ignore");
        assert_eq!(registry.resolve_column(None, 0).name(), "ignore");
        assert_eq!(registry.resolve_column(None, 1).name(), "excel_value");
    }

    #[test]
    fn test_resolve_by_id() {
        let registry = ValidatorRegistry::builder()
            .rule(ColumnId::from("name"), EqualValidator)
            .rule(ColumnId::from(2), OmittedValidator)
            .default_validator(IgnoreValidator)
            .build();

        assert_eq!(registry.resolve(&"name".into()).name(), "equal");
        assert_eq!(registry.resolve(&ColumnId::Index(2)).name(), "omitted");
        assert_eq!(registry.resolve(&ColumnId::Index(3)).name(), "ignore");
        assert_eq!(registry.len(), 2);
    }

    #[test]
    fn test_resolve_columns_uses_header() {
        let registry = ValidatorRegistryBuilder::new()
            .column("b", OmittedValidator)
            .build();
        let header = vec!["a".to_string(), "b".to_string()];

        let names: Vec<_> = registry
            .resolve_columns(&header, 3)
            .into_iter()
            .map(|v| v.name().to_string())
            .collect();
        assert_eq!(names, vec!["excel_value", "omitted", "excel_value"]);
    }

    #[test]
    fn test_rules_are_ordered() {
        let registry = ValidatorRegistryBuilder::new()
            .index(4, EqualValidator)
            .column("z", EqualValidator)
            .column("a", EqualValidator)
            .build();
        let ids: Vec<_> = registry.rules().into_iter().map(|(id, _)| id).collect();
        assert_eq!(
            ids,
            vec![ColumnId::from("a"), ColumnId::from("z"), ColumnId::Index(4)]
        );
    }

    #[test]
    fn test_store_falls_back() {
        let mut store = RegistryStore::new(
            ValidatorRegistryBuilder::new()
                .default_validator(EqualValidator)
                .build(),
        );
        store.insert(
            "Tabelle1",
            ValidatorRegistryBuilder::new()
                .default_validator(IgnoreValidator)
                .build(),
        );

        assert_eq!(store.get("Tabelle1").default_validator().name(), "ignore");
        assert_eq!(store.get("Other").default_validator().name(), "equal");
        assert_eq!(store.sheet_names(), vec!["Tabelle1"]);
    }
}
