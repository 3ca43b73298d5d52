//! Tally CLI - Expense insights and budget advice
//!
//! Usage:
//!   tally categorize "lunch at cafe"      Suggest a category
//!   tally insights --file expenses.csv    Generate an insight report
//!   tally budget --file expenses.csv      Recommend a budget
//!   tally status --file expenses.csv -b 5000

mod cli;
mod commands;


use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use cli::*;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set up logging
    // Priority: RUST_LOG env var > --verbose flag > default (info)
    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(false).compact().with_writer(std::io::stderr))
        .init();

    let engine = commands::build_engine(
        cli.config.as_deref(),
        cli.now.as_deref(),
        cli.currency.as_deref(),
    )?;

    match cli.command {
        Commands::Categorize { description } => commands::cmd_categorize(&engine, &description),
        Commands::Insights {
            file,
            profile,
            json,
        } => commands::cmd_insights(&engine, &file, profile.as_deref(), json),
        Commands::Preview { file, json } => commands::cmd_preview(&engine, &file, json),
        Commands::Budget { file, json } => commands::cmd_budget(&engine, &file, json),
        Commands::Status { file, budget, json } => {
            commands::cmd_status(&engine, &file, budget, json)
        }
        Commands::Trend { file, json } => commands::cmd_trend(&engine, &file, json),
        Commands::Stats {
            file,
            category,
            from,
            to,
            json,
        } => commands::cmd_stats(
            &engine,
            &file,
            category.as_deref(),
            from.as_deref(),
            to.as_deref(),
            json,
        ),
    }
}
