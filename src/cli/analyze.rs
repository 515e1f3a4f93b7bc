use colored::Colorize;
use comfy_table::{Cell, Table};

use crate::cli::load_table;
use crate::error::Result;
use crate::profile::{profile_columns, ColumnKind};

pub fn run(file: &str) -> Result<()> {
    let data = load_table(file)?;
    let profiles = profile_columns(&data);

    let mut table = Table::new();
    table.set_header(vec!["Column", "Kind", "Unique", "Summary"]);
    for profile in &profiles {
        let kind = match &profile.kind {
            ColumnKind::Numeric(_) => "numeric".cyan().to_string(),
            ColumnKind::Text(_) => "text".yellow().to_string(),
            ColumnKind::Empty => "empty".dimmed().to_string(),
        };
        let summary = match &profile.kind {
            ColumnKind::Numeric(stats) => format!(
                "min {:.2}  max {:.2}  mean {:.2}  sum {:.2}  n={}",
                stats.min, stats.max, stats.mean, stats.sum, stats.count
            ),
            ColumnKind::Text(Some(mc)) => {
                format!("most frequent: {} ({}x)", mc.value, mc.count)
            }
            ColumnKind::Text(None) => String::new(),
            ColumnKind::Empty => "no values".to_string(),
        };
        table.add_row(vec![
            Cell::new(&profile.header),
            Cell::new(kind),
            Cell::new(profile.unique_values),
            Cell::new(summary),
        ]);
    }

    println!("Column Analysis ({} columns)\n{table}", profiles.len());
    Ok(())
}
