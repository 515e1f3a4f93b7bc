use crate::table::Table;

/// Substituted for any field whose source column could not be resolved.
pub const PLACEHOLDER: &str = "-";

// Keyword sets used to locate semantic fields in an arbitrary export header.
// Matching is case-insensitive substring containment, first header wins, so
// "Order Date/Time" resolves for "date".
pub const DATE_TIME_KEYWORDS: &[&str] = &["date/time", "datetime", "date"];
pub const TYPE_KEYWORDS: &[&str] = &["type"];
pub const DESCRIPTION_KEYWORDS: &[&str] = &["description"];
pub const TOTAL_KEYWORDS: &[&str] = &["total"];
pub const SKU_KEYWORDS: &[&str] = &["sku"];
pub const ORDER_ID_KEYWORDS: &[&str] = &["order id", "order-id", "orderid", "order_id"];

/// Index of the first header containing any of the keywords, or `None`.
/// `None` means "field unavailable", never an error.
pub fn resolve_column(headers: &[String], keywords: &[&str]) -> Option<usize> {
    headers.iter().position(|header| {
        let header = header.to_lowercase();
        keywords
            .iter()
            .any(|keyword| header.contains(&keyword.to_lowercase()))
    })
}

fn field(row: &[String], index: Option<usize>) -> String {
    index
        .and_then(|i| row.get(i))
        .cloned()
        .unwrap_or_else(|| PLACEHOLDER.to_string())
}

/// Lenient ledger-amount parser. Strips thousands separators, stray quotes
/// and currency signs; `(12.50)` reads as -12.50. `None` on anything else,
/// so callers can apply the documented coerce-to-zero policy.
pub fn parse_decimal(raw: &str) -> Option<f64> {
    let s = raw.replace(',', "").replace('"', "").replace('$', "");
    let s = s.trim();
    if let Some(inner) = s.strip_prefix('(').and_then(|v| v.strip_suffix(')')) {
        return parse_finite(inner.trim()).map(|v| -v);
    }
    parse_finite(s)
}

// f64::from_str accepts "NaN" and "inf" literals; those are not amounts,
// and one NaN would poison every downstream sum.
fn parse_finite(s: &str) -> Option<f64> {
    s.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// One ledger row projected into the fields the cost closing needs.
#[derive(Debug, Clone)]
pub struct CostRecord {
    pub row_index: usize,
    pub date_time: String,
    pub txn_type: String,
    pub description: String,
    pub total: String,
}

/// One ledger row projected into the fields the revenue closing needs.
#[derive(Debug, Clone)]
pub struct RevenueRecord {
    pub date_time: String,
    pub txn_type: String,
    pub description: String,
    pub total: String,
    pub sku: String,
    pub order_id: String,
    /// Each row is one fulfilled unit; quantity is not a source column.
    pub quantity: u32,
}

/// Project every data row into a cost record, in row order. Columns are
/// resolved once up front; unresolved fields become `-`.
pub fn extract_cost_records(table: &Table) -> Vec<CostRecord> {
    let date_time = resolve_column(&table.headers, DATE_TIME_KEYWORDS);
    let txn_type = resolve_column(&table.headers, TYPE_KEYWORDS);
    let description = resolve_column(&table.headers, DESCRIPTION_KEYWORDS);
    let total = resolve_column(&table.headers, TOTAL_KEYWORDS);

    table
        .rows
        .iter()
        .enumerate()
        .map(|(i, row)| CostRecord {
            row_index: i + 1,
            date_time: field(row, date_time),
            txn_type: field(row, txn_type),
            description: field(row, description),
            total: field(row, total),
        })
        .collect()
}

/// Project every data row into a revenue record, in row order.
pub fn extract_revenue_records(table: &Table) -> Vec<RevenueRecord> {
    let date_time = resolve_column(&table.headers, DATE_TIME_KEYWORDS);
    let txn_type = resolve_column(&table.headers, TYPE_KEYWORDS);
    let description = resolve_column(&table.headers, DESCRIPTION_KEYWORDS);
    let total = resolve_column(&table.headers, TOTAL_KEYWORDS);
    let sku = resolve_column(&table.headers, SKU_KEYWORDS);
    let order_id = resolve_column(&table.headers, ORDER_ID_KEYWORDS);

    table
        .rows
        .iter()
        .map(|row| RevenueRecord {
            date_time: field(row, date_time),
            txn_type: field(row, txn_type),
            description: field(row, description),
            total: field(row, total),
            sku: field(row, sku),
            order_id: field(row, order_id),
            quantity: 1,
        })
        .collect()
}
