mod commands;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "cellcheck")]
#[command(version, about = "Cell-by-cell table comparison CLI", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Compare a measured table against a reference table
    Compare {
        /// Path to the measured table (JSON array of rows)
        measured: String,

        /// Path to the reference table (JSON array of rows)
        reference: String,

        /// Comparison configuration (YAML or TOML)
        #[arg(short, long)]
        config: Option<String>,

        /// Sheet whose column rules apply
        #[arg(short, long)]
        sheet: Option<String>,

        /// Treat row 0 as data instead of a header
        #[arg(long)]
        no_header: bool,

        /// Output format: text, json
        #[arg(short, long, default_value = "text")]
        format: String,

        /// Write the highlighted reference table to this file
        #[arg(short, long)]
        output: Option<String>,
    },

    /// Check a comparison configuration without comparing data
    Check {
        /// Path to the configuration file (YAML or TOML)
        config: String,

        /// Output format: text, json
        #[arg(short, long, default_value = "text")]
        format: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing
    let log_level = if cli.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };

    // Logs go to stderr so JSON reports on stdout stay parseable
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_level(true)
                .compact(),
        )
        .with(tracing_subscriber::filter::LevelFilter::from_level(
            log_level,
        ))
        .init();

    match cli.command {
        Commands::Compare {
            measured,
            reference,
            config,
            sheet,
            no_header,
            format,
            output,
        } => commands::compare::execute(
            &measured,
            &reference,
            config.as_deref(),
            sheet.as_deref(),
            no_header,
            &format,
            output.as_deref(),
        ),

        Commands::Check { config, format } => commands::check::execute(&config, &format),
    }
}
