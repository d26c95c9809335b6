use anyhow::{Context, Result};
use cellcheck_core::TableValidator;
use cellcheck_parser::{CompareConfig, LocaleSetting, parse_file};
use serde_json::json;
use std::path::Path;
use tracing::info;

use crate::output;

pub fn execute(config_path: &str, format: &str) -> Result<()> {
    info!("Checking configuration: {}", config_path);

    let path = Path::new(config_path);
    let config = parse_file(path)
        .with_context(|| format!("Failed to parse configuration file: {}", config_path))?;
    let store = config
        .build_store()
        .with_context(|| format!("Invalid configuration: {}", config_path))?;

    if format == "json" {
        let output = json!({
            "valid": true,
            "config": config,
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    output::print_success("Configuration is valid");

    println!("\nConfiguration Summary:");
    println!("  Header row:        {}", if config.has_header { "yes" } else { "no" });
    println!("  Locale:            {}", locale_label(&config));
    println!("  Missing rows:      {:?}", config.missing_rows);
    println!("  Default validator: {}", config.default_validator);
    println!(
        "  Column rules:      {}",
        store.default_registry().len()
    );

    if !config.columns.is_empty() {
        println!("\nColumns:");
        for rule in &config.columns {
            let column = rule.column_id()?;
            println!("  {:<20} {}", column.to_string(), rule.validator);
        }
    }

    for name in store.sheet_names() {
        let registry = store.get(name);
        println!("\nSheet {}:", name);
        println!(
            "  Default validator: {}",
            registry.default_validator().name()
        );
        for (column, validator) in registry.rules() {
            println!("  {:<20} {}", column.to_string(), validator.name());
        }
    }

    Ok(())
}

fn locale_label(config: &CompareConfig) -> String {
    match &config.locale {
        LocaleSetting::Named(name) => name.clone(),
        LocaleSetting::Profile(profile) => format!(
            "custom (decimal '{}', thousands '{}')",
            profile.decimal_separator, profile.thousands_separator
        ),
    }
}
