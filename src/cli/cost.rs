use colored::Colorize;
use comfy_table::{Cell, Table};

use crate::cli::load_table;
use crate::cost::{cost_report, CostSelection, ALL_CATEGORIES};
use crate::error::{CloseoutError, Result};
use crate::fmt;
use crate::ledger::parse_decimal;
use crate::settings::load_settings;

// Fees run negative in the ledger, so a negative bucket is money out
// (red) and a positive one is money back (green).
fn styled_cad(value: f64) -> String {
    if value > 0.0 {
        fmt::cad_number(value).green().to_string()
    } else {
        fmt::cad_number(value).red().to_string()
    }
}

fn styled_krw(value: f64, rate: f64) -> String {
    if value > 0.0 {
        fmt::krw(value, rate).green().to_string()
    } else {
        fmt::krw(value, rate).red().to_string()
    }
}

pub fn run(file: &str, category: &str, rate: Option<f64>) -> Result<()> {
    let selection = CostSelection::from_key(category)
        .ok_or_else(|| CloseoutError::UnknownCategory(category.to_string()))?;
    let rate = rate.unwrap_or_else(|| load_settings().cad_to_krw_cost);

    let data = load_table(file)?;
    let report = cost_report(&data, selection);

    // Category summary, CAD and KRW rows
    let mut summary = Table::new();
    let mut header: Vec<Cell> = vec![Cell::new("")];
    header.extend(ALL_CATEGORIES.iter().map(|c| Cell::new(c.label())));
    header.push(Cell::new("Total".bold()));
    summary.set_header(header);

    let mut cad_row: Vec<Cell> = vec![Cell::new("CAD".bold())];
    cad_row.extend(
        report
            .summary
            .iter()
            .map(|s| Cell::new(styled_cad(s.total_cad))),
    );
    cad_row.push(Cell::new(styled_cad(report.grand_total)));
    summary.add_row(cad_row);

    let mut krw_row: Vec<Cell> = vec![Cell::new("KRW".bold())];
    krw_row.extend(
        report
            .summary
            .iter()
            .map(|s| Cell::new(styled_krw(s.total_cad, rate))),
    );
    krw_row.push(Cell::new(styled_krw(report.grand_total, rate)));
    summary.add_row(krw_row);

    println!("Cost Closing\n{summary}");

    println!(
        "\nAll records: {}  ->  {}: {}",
        report.record_count,
        report.selection.label(),
        report.detail.len()
    );

    if report.detail.is_empty() {
        println!("No records in this category.");
        return Ok(());
    }

    let mut detail = Table::new();
    detail.set_header(vec!["No.", "Date/Time", "Description", "Total"]);
    for record in &report.detail {
        let total = match parse_decimal(&record.total) {
            Some(value) => {
                if value < 0.0 {
                    fmt::cad(value).red().to_string()
                } else {
                    fmt::cad(value).green().to_string()
                }
            }
            None => record.total.clone(),
        };
        detail.add_row(vec![
            Cell::new(record.row_index),
            Cell::new(&record.date_time),
            Cell::new(&record.description),
            Cell::new(total),
        ]);
    }
    println!(
        "\n{} Detail ({} records, total {})\n{detail}",
        report.selection.label(),
        report.detail.len(),
        fmt::cad(report.selected_total)
    );

    if report.coerced_to_zero > 0 {
        eprintln!(
            "{}",
            format!(
                "Warning: {} total value(s) could not be parsed and were counted as 0.00",
                report.coerced_to_zero
            )
            .yellow()
        );
    }
    Ok(())
}
