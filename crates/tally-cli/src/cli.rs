//! CLI argument definitions using clap
//!
//! This module contains all the clap structs and enums for parsing CLI arguments.
//! The actual command implementations are in the `commands` module.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Tally - Expense insights and budget advice
#[derive(Parser)]
#[command(name = "tally")]
#[command(about = "Personal expense analytics: categorize, analyze, budget", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Config file (defaults to ~/.config/tally/tally.toml, then built-in defaults)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Pin "now" for trend windows (RFC 3339 or YYYY-MM-DD)
    #[arg(long, global = true)]
    pub now: Option<String>,

    /// Currency symbol for messages (overrides config)
    #[arg(long, global = true)]
    pub currency: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Suggest a category for an expense description
    Categorize {
        /// Free-text description
        description: String,
    },

    /// Generate an insight report
    Insights {
        /// Expense file (.csv or .json)
        #[arg(short, long)]
        file: PathBuf,

        /// Recommendation profile: formal, conversational (defaults to config)
        #[arg(short, long)]
        profile: Option<String>,

        /// Output JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Conversational summary with the 7-day trend
    Preview {
        /// Expense file (.csv or .json)
        #[arg(short, long)]
        file: PathBuf,

        /// Output JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Recommend a budget from recent spending
    Budget {
        /// Expense file (.csv or .json)
        #[arg(short, long)]
        file: PathBuf,

        /// Output JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Show spending progress against a budget
    Status {
        /// Expense file (.csv or .json)
        #[arg(short, long)]
        file: PathBuf,

        /// Budget amount
        #[arg(short, long)]
        budget: f64,

        /// Output JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Compare the last 7 days with the 7 days before
    Trend {
        /// Expense file (.csv or .json)
        #[arg(short, long)]
        file: PathBuf,

        /// Output JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Per-category totals, counts and averages
    Stats {
        /// Expense file (.csv or .json)
        #[arg(short, long)]
        file: PathBuf,

        /// Only this category
        #[arg(short, long)]
        category: Option<String>,

        /// Start date (YYYY-MM-DD, inclusive)
        #[arg(long, requires = "to")]
        from: Option<String>,

        /// End date (YYYY-MM-DD, inclusive)
        #[arg(long, requires = "from")]
        to: Option<String>,

        /// Output JSON instead of a table
        #[arg(long)]
        json: bool,
    },
}
