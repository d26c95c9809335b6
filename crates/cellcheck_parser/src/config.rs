//! Comparison configuration.
//!
//! The configuration names the locale, the header handling, how missing rows
//! are reported, and which validator applies to which column, optionally per
//! sheet. It is plain data; [`CompareConfig::build_store`] turns it into the
//! runtime registries and checks every parameter on the way.

use cellcheck_core::{ConfigurationError, LocaleProfile};
use cellcheck_validator::{
    ColumnId, DiffOptions, MissingRowPolicy, RegistryStore, ValidatorConfig, ValidatorRegistry,
    ValidatorRegistryBuilder,
};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::debug;

fn default_true() -> bool {
    true
}

/// Complete configuration of a comparison run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompareConfig {
    /// Row 0 of the reference table holds column names
    #[serde(default = "default_true")]
    pub has_header: bool,

    /// Locale used to read numbers, booleans and dates from text
    #[serde(default)]
    pub locale: LocaleSetting,

    /// How rows present in only one table are reported
    #[serde(default)]
    pub missing_rows: MissingRowPolicy,

    /// Validator for columns without a rule
    #[serde(default)]
    pub default_validator: ValidatorConfig,

    /// Column rules applied to every sheet
    #[serde(default)]
    pub columns: Vec<ColumnRule>,

    /// Sheet specific overrides
    #[serde(default)]
    pub sheets: BTreeMap<String, SheetConfig>,
}

impl Default for CompareConfig {
    fn default() -> Self {
        Self {
            has_header: true,
            locale: LocaleSetting::default(),
            missing_rows: MissingRowPolicy::default(),
            default_validator: ValidatorConfig::default(),
            columns: Vec::new(),
            sheets: BTreeMap::new(),
        }
    }
}

/// A built-in locale by name or an inline profile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum LocaleSetting {
    /// Name of a built-in profile (`default`, `german`, ...)
    Named(String),
    /// Explicit profile
    Profile(LocaleProfile),
}

impl Default for LocaleSetting {
    fn default() -> Self {
        LocaleSetting::Named("default".to_string())
    }
}

/// Validator assignment for one column.
///
/// Exactly one of `name` and `index` must be set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColumnRule {
    /// Header name of the column
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// 0-based column index
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub index: Option<usize>,

    /// Validator settings
    pub validator: ValidatorConfig,
}

impl ColumnRule {
    /// The column this rule applies to.
    pub fn column_id(&self) -> Result<ColumnId, ConfigurationError> {
        match (&self.name, self.index) {
            (Some(name), None) => Ok(ColumnId::Name(name.clone())),
            (None, Some(index)) => Ok(ColumnId::Index(index)),
            (Some(name), Some(index)) => Err(ConfigurationError::InvalidColumnRule(format!(
                "rule names both column '{}' and index {}",
                name, index
            ))),
            (None, None) => Err(ConfigurationError::InvalidColumnRule(
                "rule needs either a column name or an index".to_string(),
            )),
        }
    }
}

/// Overrides for one sheet.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SheetConfig {
    /// Replaces the global default validator
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_validator: Option<ValidatorConfig>,

    /// Rules applied after the global ones
    #[serde(default)]
    pub columns: Vec<ColumnRule>,
}

impl CompareConfig {
    /// Resolves and validates the locale profile.
    pub fn locale_profile(&self) -> Result<LocaleProfile, ConfigurationError> {
        match &self.locale {
            LocaleSetting::Named(name) => LocaleProfile::named(name),
            LocaleSetting::Profile(profile) => profile.clone().normalized(),
        }
    }

    /// Builds the registry used for sheets without overrides.
    pub fn build_registry(&self) -> Result<ValidatorRegistry, ConfigurationError> {
        let profile = self.locale_profile()?;
        build_registry(&profile, &self.default_validator, &self.columns)
    }

    /// Builds the registry of one sheet: global rules, then sheet rules.
    pub fn build_sheet_registry(&self, sheet: &str) -> Result<ValidatorRegistry, ConfigurationError> {
        let Some(sheet_config) = self.sheets.get(sheet) else {
            return self.build_registry();
        };

        let profile = self.locale_profile()?;
        let default = sheet_config
            .default_validator
            .as_ref()
            .unwrap_or(&self.default_validator);
        let rules: Vec<ColumnRule> = self
            .columns
            .iter()
            .chain(&sheet_config.columns)
            .cloned()
            .collect();
        build_registry(&profile, default, &rules)
    }

    /// Builds the registries of all sheets.
    pub fn build_store(&self) -> Result<RegistryStore, ConfigurationError> {
        let mut store = RegistryStore::new(self.build_registry()?);
        for sheet in self.sheets.keys() {
            store.insert(sheet.clone(), self.build_sheet_registry(sheet)?);
        }
        debug!("Built registries for {} sheets", self.sheets.len());
        Ok(store)
    }

    /// Run options described by this configuration.
    pub fn diff_options(&self) -> DiffOptions {
        DiffOptions::new()
            .with_header(self.has_header)
            .with_missing_rows(self.missing_rows)
    }
}

fn build_registry(
    profile: &LocaleProfile,
    default: &ValidatorConfig,
    rules: &[ColumnRule],
) -> Result<ValidatorRegistry, ConfigurationError> {
    let mut builder = ValidatorRegistryBuilder::new().default_validator(default.build(profile)?);
    for rule in rules {
        builder = builder.rule(rule.column_id()?, rule.validator.build(profile)?);
    }
    Ok(builder.build())
}
