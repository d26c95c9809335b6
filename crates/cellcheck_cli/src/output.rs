use anyhow::Result;
use cellcheck_core::{ComparisonResult, ComparisonSummary, SummaryEntry};
use cellcheck_validator::{DiffOutcome, MemoryTable};
use colored::*;
use serde_json::json;

/// Number of foul cells listed in the text report.
const MAX_LISTED_CELLS: usize = 10;

pub fn print_comparison_report(summary: &ComparisonSummary, outcome: &DiffOutcome, format: &str) {
    match format {
        "json" => print_json_report(summary, outcome),
        _ => print_text_report(summary, outcome),
    }
}

fn paint(kind: ComparisonResult, text: &str) -> ColoredString {
    match kind {
        ComparisonResult::Equals | ComparisonResult::Matching => text.green(),
        ComparisonResult::Almost => text.cyan(),
        ComparisonResult::Omitted => text.dimmed(),
        ComparisonResult::Different => text.yellow(),
        ComparisonResult::Error => text.red(),
    }
}

fn print_text_report(summary: &ComparisonSummary, outcome: &DiffOutcome) {
    println!("\n{}", "═".repeat(60));
    println!("{}", "  COMPARISON REPORT".bold());
    println!("{}", "═".repeat(60));

    if summary.passed() {
        println!(
            "\n{} {}",
            "✓".green().bold(),
            "Comparison PASSED".green().bold()
        );
    } else {
        println!(
            "\n{} {}",
            "✗".red().bold(),
            "Comparison FAILED".red().bold()
        );
    }
    if outcome.interrupted {
        println!("{}", "Comparison was interrupted".yellow());
    }

    println!("\n{}", "Results:".bold());
    for (kind, count) in summary.counts() {
        println!("  {:<10} {}", paint(kind, kind.name()), count);
    }

    if let Ok(columns) = summary.summary_by_column() {
        println!("\n{}", "Columns:".bold());
        for (name, counts) in summary.header_values().iter().zip(&columns) {
            let parts: Vec<String> = counts
                .iter()
                .map(|(kind, count)| format!("{}={}", kind, count))
                .collect();
            println!("  {:<20} {}", name, parts.join(", "));
        }
    }

    let foul: Vec<&SummaryEntry> = summary.foul_entries().collect();
    if !foul.is_empty() {
        println!("\n{}", "Differences:".red().bold());
        for entry in foul.iter().take(MAX_LISTED_CELLS) {
            println!(
                "  {} [{}] expected {:?}, got {:?} → {}",
                entry.coordinate,
                entry.validator,
                entry.expected.to_string(),
                entry.actual.to_string(),
                paint(entry.result, entry.result.name())
            );
        }
        if foul.len() > MAX_LISTED_CELLS {
            println!("  ... and {} more", foul.len() - MAX_LISTED_CELLS);
        }
    }

    println!("\n{}", "Summary:".bold());
    println!("  Rows compared:  {}", outcome.rows_compared);
    println!("  Cells compared: {}", outcome.cells_compared);
    println!("  Missing rows:   {}", outcome.missing_rows);
    println!("  Inserted rows:  {}", outcome.inserted_rows);
    println!("{}", "═".repeat(60));
}

fn print_json_report(summary: &ComparisonSummary, outcome: &DiffOutcome) {
    let columns = summary.summary_by_column().unwrap_or_default();
    let output = json!({
        "passed": summary.passed(),
        "counts": summary.counts(),
        "total": summary.total(),
        "columns": summary
            .header_values()
            .iter()
            .zip(&columns)
            .map(|(name, counts)| json!({ "name": name, "counts": counts }))
            .collect::<Vec<_>>(),
        "foul_cells": summary.foul_entries().collect::<Vec<_>>(),
        "outcome": outcome,
    });

    println!("{}", serde_json::to_string_pretty(&output).unwrap_or_default());
}

/// Serializes the reference table with the fill color of every highlighted
/// cell and the differing measured rows with their measured fill colors.
pub fn highlighted_table_json(table: &MemoryTable) -> Result<String> {
    let highlights: Vec<_> = table
        .highlights()
        .iter()
        .map(|(coordinate, result)| {
            json!({
                "row": coordinate.row,
                "column": coordinate.column,
                "result": result,
                "fill": result.cell_colors().1,
            })
        })
        .collect();

    let inserted_rows: Vec<_> = table
        .inserted_rows()
        .iter()
        .map(|(after_row, measured)| {
            let fills: Vec<_> = measured
                .results
                .iter()
                .map(|result| result.cell_colors().0)
                .collect();
            json!({
                "after_row": after_row,
                "values": measured.values,
                "results": measured.results,
                "fills": fills,
            })
        })
        .collect();

    let output = json!({
        "rows": table.rows(),
        "highlights": highlights,
        "inserted_rows": inserted_rows,
    });
    Ok(serde_json::to_string_pretty(&output)?)
}

pub fn print_success(message: &str) {
    println!("{} {}", "✓".green().bold(), message.green());
}
