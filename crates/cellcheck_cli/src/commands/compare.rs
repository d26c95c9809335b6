use anyhow::{Context, Result};
use cellcheck_core::ComparisonSummary;
use cellcheck_parser::{CompareConfig, parse_file};
use cellcheck_validator::{MemoryTable, SheetDifferentiator};
use std::path::Path;
use tracing::info;

use crate::output;

pub fn execute(
    measured_path: &str,
    reference_path: &str,
    config_path: Option<&str>,
    sheet: Option<&str>,
    no_header: bool,
    format: &str,
    output_path: Option<&str>,
) -> Result<()> {
    info!("Comparing {} against {}", measured_path, reference_path);

    let mut config = match config_path {
        Some(path) => parse_file(Path::new(path))
            .with_context(|| format!("Failed to parse configuration file: {}", path))?,
        None => CompareConfig::default(),
    };
    if no_header {
        config.has_header = false;
    }

    let store = config
        .build_store()
        .context("Invalid comparison configuration")?;
    let registry = match sheet {
        Some(name) => {
            info!("Using column rules of sheet: {}", name);
            store.get(name)
        }
        None => store.default_registry(),
    };

    let measured = load_table(measured_path)?;
    let mut reference = load_table(reference_path)?;

    let differ = SheetDifferentiator::new(registry, config.diff_options());
    let mut summary = ComparisonSummary::new();

    #[cfg(feature = "parallel")]
    let outcome = differ.differentiate_parallel(&measured, &mut reference, &mut summary);
    #[cfg(not(feature = "parallel"))]
    let outcome = differ.differentiate(&measured, &mut reference, &mut summary);

    output::print_comparison_report(&summary, &outcome, format);

    if let Some(path) = output_path {
        let content = output::highlighted_table_json(&reference)?;
        std::fs::write(path, content)
            .with_context(|| format!("Failed to write highlighted table: {}", path))?;
        if format != "json" {
            output::print_success(&format!("Highlighted reference written to {}", path));
        }
    }

    if !summary.passed() {
        std::process::exit(1);
    }

    Ok(())
}

/// Reads a table stored as a JSON array of rows.
fn load_table(path: &str) -> Result<MemoryTable> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read table file: {}", path))?;
    let table = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse table file: {}", path))?;
    Ok(table)
}
