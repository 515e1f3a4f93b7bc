use colored::Colorize;
use comfy_table::{Cell, Table};

use crate::cli::load_table;
use crate::error::Result;
use crate::fmt;
use crate::revenue::revenue_report;
use crate::settings::load_settings;

// Revenue runs positive, so positive is green and negative (refunds) red.
fn styled_cad(value: f64) -> String {
    if value < 0.0 {
        fmt::cad_number(value).red().to_string()
    } else {
        fmt::cad_number(value).green().to_string()
    }
}

fn styled_krw(value: f64, rate: f64) -> String {
    if value < 0.0 {
        fmt::krw(value, rate).red().to_string()
    } else {
        fmt::krw(value, rate).green().to_string()
    }
}

pub fn run(file: &str, rate: Option<f64>) -> Result<()> {
    let rate = rate.unwrap_or_else(|| load_settings().cad_to_krw_revenue);

    let data = load_table(file)?;
    let report = revenue_report(&data);

    // Per-SKU summary
    if report.sku_rows.is_empty() {
        println!("Revenue Closing\nNo SKU revenue records (order, refund, adjustment).");
    } else {
        let mut sku_table = Table::new();
        sku_table.set_header(vec!["SKU", "Qty", "Revenue (CAD)", "Revenue (KRW)"]);
        for row in &report.sku_rows {
            sku_table.add_row(vec![
                Cell::new(&row.sku),
                Cell::new(row.count),
                Cell::new(styled_cad(row.total_cad)),
                Cell::new(styled_krw(row.total_cad, rate)),
            ]);
        }
        sku_table.add_row(vec![
            Cell::new("Total".bold()),
            Cell::new(report.sku_total_count),
            Cell::new(styled_cad(report.sku_total_cad)),
            Cell::new(styled_krw(report.sku_total_cad, rate)),
        ]);
        println!("Revenue Closing: by SKU\n{sku_table}");
    }

    // Per-region summary
    if !report.region_rows.is_empty() {
        let mut region_table = Table::new();
        region_table.set_header(vec!["Region", "Count", "Revenue (CAD)", "Revenue (KRW)", "%"]);
        for row in &report.region_rows {
            region_table.add_row(vec![
                Cell::new(row.region.label()),
                Cell::new(row.count),
                Cell::new(styled_cad(row.total_cad)),
                Cell::new(styled_krw(row.total_cad, rate)),
                Cell::new(format!("{:.1}%", row.percentage)),
            ]);
        }
        println!("\nBy Region\n{region_table}");
    }

    println!(
        "\nRevenue records: {} (order, refund, adjustment), total {}",
        report.record_count,
        fmt::cad(report.sku_total_cad)
    );

    if report.detail.is_empty() {
        return Ok(());
    }

    let mut detail = Table::new();
    detail.set_header(vec!["Date/Time", "Type", "Order ID", "SKU", "Qty"]);
    for record in &report.detail {
        detail.add_row(vec![
            Cell::new(&record.date_time),
            Cell::new(&record.txn_type),
            Cell::new(&record.order_id),
            Cell::new(&record.sku),
            Cell::new(record.quantity),
        ]);
    }
    println!("\nDetail ({} records)\n{detail}", report.detail.len());
    Ok(())
}
