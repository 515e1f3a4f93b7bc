pub mod analyze;
pub mod config;
pub mod cost;
pub mod revenue;
pub mod show;

use clap::{Parser, Subcommand};

use crate::error::Result;
use crate::table::Table;

/// Read a ledger file as UTF-8 and parse it. The only fatal path in the
/// tool: everything past a successful parse degrades instead of failing.
pub(crate) fn load_table(path: &str) -> Result<Table> {
    let text = std::fs::read_to_string(path)?;
    Table::parse(&text)
}

#[derive(Parser)]
#[command(
    name = "closeout",
    about = "Settlement-closing CLI for Amazon.ca seller ledgers."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Preview a ledger file: headers, first rows, counts.
    Show {
        /// Path to the CSV export
        file: String,
        /// Number of data rows to display
        #[arg(long, default_value = "10")]
        rows: usize,
    },
    /// Profile every column: numeric or text, with summary statistics.
    Analyze {
        /// Path to the CSV export
        file: String,
    },
    /// Cost closing: categorized fee summary and detail rows.
    Cost {
        /// Path to the CSV export
        file: String,
        /// Category to detail: all, coupon-fee, advertising-fee,
        /// storage-fee, disposal-fee, other-fee
        #[arg(long, default_value = "all")]
        category: String,
        /// CAD to KRW rate override (not persisted)
        #[arg(long)]
        rate: Option<f64>,
    },
    /// Revenue closing: per-SKU and per-region revenue summaries.
    Revenue {
        /// Path to the CSV export
        file: String,
        /// CAD to KRW rate override (not persisted)
        #[arg(long)]
        rate: Option<f64>,
    },
    /// View or change the CAD to KRW presentation rates.
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Print the active settings.
    Show,
    /// Persist the rate used by cost closing.
    SetCostRate { rate: f64 },
    /// Persist the rate used by revenue closing.
    SetRevenueRate { rate: f64 },
}
