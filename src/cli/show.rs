use comfy_table::{Cell, Table};

use crate::cli::load_table;
use crate::error::Result;

pub fn run(file: &str, rows: usize) -> Result<()> {
    let data = load_table(file)?;

    println!(
        "Loaded {file}: {} rows, {} columns ({} cells)",
        data.row_count(),
        data.column_count(),
        data.cell_count()
    );

    let mut preview = Table::new();
    preview.set_header(
        data.headers
            .iter()
            .enumerate()
            .map(|(i, h)| Cell::new(format!("{h} [{}]", i + 1)))
            .collect::<Vec<_>>(),
    );
    for row in data.rows.iter().take(rows) {
        preview.add_row(
            row.iter()
                .map(|cell| {
                    if cell.is_empty() {
                        Cell::new("-")
                    } else {
                        Cell::new(cell)
                    }
                })
                .collect::<Vec<_>>(),
        );
    }
    println!("{preview}");

    if data.row_count() > rows {
        println!("Showing {rows} of {} rows.", data.row_count());
    }
    Ok(())
}
