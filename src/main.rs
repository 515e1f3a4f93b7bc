mod cli;
mod cost;
mod error;
mod fmt;
mod ledger;
mod profile;
mod revenue;
mod settings;
mod table;

use clap::Parser;

use cli::{Cli, Commands, ConfigCommands};

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Show { file, rows } => cli::show::run(&file, rows),
        Commands::Analyze { file } => cli::analyze::run(&file),
        Commands::Cost {
            file,
            category,
            rate,
        } => cli::cost::run(&file, &category, rate),
        Commands::Revenue { file, rate } => cli::revenue::run(&file, rate),
        Commands::Config { command } => match command {
            ConfigCommands::Show => cli::config::show(),
            ConfigCommands::SetCostRate { rate } => cli::config::set_cost_rate(rate),
            ConfigCommands::SetRevenueRate { rate } => cli::config::set_revenue_rate(rate),
        },
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
