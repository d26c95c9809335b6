//! Parser for cellcheck comparison configurations (YAML/TOML formats).
//!
//! This module provides functionality to parse comparison configurations from
//! YAML and TOML files into the strongly-typed [`CompareConfig`] structure.
//!
//! # Example
//!
//! ```rust
//! use cellcheck_parser::parse_yaml;
//!
//! let yaml = r#"
//! has_header: true
//! locale: german
//! columns:
//!   - name: amount
//!     validator: { type: tolerant_float, delta_up: 0.05, delta_down: 0.05, precision: 2 }
//!   - index: 0
//!     validator: { type: omitted }
//! "#;
//!
//! let config = parse_yaml(yaml).expect("Failed to parse configuration");
//! assert_eq!(config.columns.len(), 2);
//!
//! let registry = config.build_registry().expect("Invalid configuration");
//! assert_eq!(registry.len(), 2);
//! ```

mod config;

pub use config::*;

use cellcheck_core::ConfigurationError;
use std::path::Path;
use thiserror::Error;

/// Errors that can occur while loading a configuration.
#[derive(Debug, Error)]
pub enum ParserError {
    /// YAML parsing or deserialization failed
    #[error("Failed to parse YAML: {0}")]
    YamlError(#[from] serde_yaml_ng::Error),

    /// TOML parsing or deserialization failed
    #[error("Failed to parse TOML: {0}")]
    TomlError(String),

    /// File I/O error
    #[error("File I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// Unsupported file format
    #[error("Unsupported file format: {0}")]
    UnsupportedFormat(String),

    /// Invalid file extension
    #[error("Invalid or missing file extension")]
    InvalidExtension,

    /// The configuration parsed but holds invalid values
    #[error(transparent)]
    Configuration(#[from] ConfigurationError),
}

/// Result type alias for parser operations.
pub type Result<T> = std::result::Result<T, ParserError>;

/// Supported configuration file formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    /// YAML format (.yml, .yaml)
    Yaml,
    /// TOML format (.toml)
    Toml,
}

/// Parse a configuration from a YAML string.
pub fn parse_yaml(content: &str) -> Result<CompareConfig> {
    let config: CompareConfig = serde_yaml_ng::from_str(content)?;
    Ok(config)
}

/// Parse a configuration from a TOML string.
///
/// # Example
///
/// ```rust
/// use cellcheck_parser::parse_toml;
///
/// let toml = r#"
/// has_header = false
/// missing_rows = "error"
///
/// [default_validator]
/// type = "number"
/// digits = 2
///
/// [[columns]]
/// name = "comment"
/// validator = { type = "ignore" }
/// "#;
///
/// let config = parse_toml(toml).unwrap();
/// assert!(!config.has_header);
/// assert_eq!(config.columns[0].name.as_deref(), Some("comment"));
/// ```
pub fn parse_toml(content: &str) -> Result<CompareConfig> {
    let config: CompareConfig =
        toml::from_str(content).map_err(|e| ParserError::TomlError(e.to_string()))?;
    Ok(config)
}

/// Detect the configuration format from a file path based on its extension.
///
/// # Supported Extensions
///
/// * `.yaml`, `.yml` → `ConfigFormat::Yaml`
/// * `.toml` → `ConfigFormat::Toml`
///
/// # Errors
///
/// Returns `ParserError::InvalidExtension` if the file has no extension.
/// Returns `ParserError::UnsupportedFormat` if the extension is not recognized.
pub fn detect_format(path: &Path) -> Result<ConfigFormat> {
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .ok_or(ParserError::InvalidExtension)?;

    match extension.to_lowercase().as_str() {
        "yaml" | "yml" => Ok(ConfigFormat::Yaml),
        "toml" => Ok(ConfigFormat::Toml),
        other => Err(ParserError::UnsupportedFormat(other.to_string())),
    }
}

/// Parse a configuration from a file with automatic format detection.
///
/// ```no_run
/// use cellcheck_parser::parse_file;
/// use std::path::Path;
///
/// let config = parse_file(Path::new("compare.yml")).unwrap();
/// println!("Loaded {} column rules", config.columns.len());
/// ```
pub fn parse_file(path: &Path) -> Result<CompareConfig> {
    let format = detect_format(path)?;
    let content = std::fs::read_to_string(path)?;

    match format {
        ConfigFormat::Yaml => parse_yaml(&content),
        ConfigFormat::Toml => parse_toml(&content),
    }
}

/// Parse a configuration file and check that all values are valid.
pub fn load_config(path: &Path) -> Result<CompareConfig> {
    let config = parse_file(path)?;
    config.build_store()?;
    Ok(config)
}
