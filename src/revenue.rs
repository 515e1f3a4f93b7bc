use std::cmp::Ordering;
use std::collections::HashMap;

use crate::ledger::{extract_revenue_records, parse_decimal, RevenueRecord, PLACEHOLDER};
use crate::table::Table;

// ---------------------------------------------------------------------------
// Region inference
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Region {
    Canada,
    Usa,
    Europe,
    Asia,
    Australia,
    Other,
}

impl Region {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Canada => "Canada",
            Self::Usa => "USA",
            Self::Europe => "Europe",
            Self::Asia => "Asia",
            Self::Australia => "Australia",
            Self::Other => "Other",
        }
    }
}

// Ordered keyword families; the first family with a hit decides the region.
// Korean aliases appear in real settlement descriptions alongside English.
const REGION_RULES: &[(Region, &[&str])] = &[
    (Region::Canada, &["canada", "캐나다", "ca"]),
    (Region::Usa, &["usa", "us", "미국", "america"]),
    (Region::Europe, &["europe", "유럽", "eu"]),
    (Region::Asia, &["asia", "아시아", "korea", "한국"]),
    (Region::Australia, &["australia", "호주", "au"]),
];

/// Infer a region from a transaction description, `Other` when nothing hits.
pub fn infer_region(description: &str) -> Region {
    let description = description.to_lowercase();
    REGION_RULES
        .iter()
        .find(|(_, tokens)| tokens.iter().any(|t| description.contains(t)))
        .map(|(region, _)| *region)
        .unwrap_or(Region::Other)
}

// ---------------------------------------------------------------------------
// Report
// ---------------------------------------------------------------------------

#[derive(Debug)]
pub struct SkuSummary {
    pub sku: String,
    pub count: usize,
    pub total_cad: f64,
}

#[derive(Debug)]
pub struct RegionSummary {
    pub region: Region,
    pub count: usize,
    pub total_cad: f64,
    /// Share of the SKU grand total, in percent. 0 when that total is 0.
    pub percentage: f64,
}

#[derive(Debug)]
pub struct RevenueReport {
    /// Records kept by the revenue type filter (order/refund/adjustment).
    pub record_count: usize,
    /// Per-SKU buckets in first-seen order.
    pub sku_rows: Vec<SkuSummary>,
    pub sku_total_count: usize,
    pub sku_total_cad: f64,
    /// Per-region buckets sorted by CAD total, descending.
    pub region_rows: Vec<RegionSummary>,
    pub detail: Vec<RevenueRecord>,
}

const REVENUE_TYPES: &[&str] = &["order", "refund", "adjustment"];

/// Run the full revenue closing over a loaded table.
///
/// Only order/refund/adjustment rows participate. SKU buckets skip rows with
/// a placeholder SKU or an unparseable total entirely; region buckets only
/// need a parseable total.
pub fn revenue_report(table: &Table) -> RevenueReport {
    let detail: Vec<RevenueRecord> = extract_revenue_records(table)
        .into_iter()
        .filter(|r| REVENUE_TYPES.contains(&r.txn_type.to_lowercase().as_str()))
        .collect();

    // SKU buckets, preserving first-seen order.
    let mut sku_rows: Vec<SkuSummary> = Vec::new();
    let mut sku_index: HashMap<String, usize> = HashMap::new();
    for record in &detail {
        let Some(total) = parse_decimal(&record.total) else {
            continue;
        };
        if record.sku == PLACEHOLDER {
            continue;
        }
        match sku_index.get(&record.sku) {
            Some(&i) => {
                sku_rows[i].count += 1;
                sku_rows[i].total_cad += total;
            }
            None => {
                sku_index.insert(record.sku.clone(), sku_rows.len());
                sku_rows.push(SkuSummary {
                    sku: record.sku.clone(),
                    count: 1,
                    total_cad: total,
                });
            }
        }
    }
    let sku_total_count: usize = sku_rows.iter().map(|s| s.count).sum();
    let sku_total_cad: f64 = sku_rows.iter().map(|s| s.total_cad).sum();

    // Region buckets.
    let mut region_acc: Vec<(Region, usize, f64)> = Vec::new();
    for record in &detail {
        let Some(total) = parse_decimal(&record.total) else {
            continue;
        };
        let region = infer_region(&record.description);
        match region_acc.iter_mut().find(|(r, _, _)| *r == region) {
            Some(entry) => {
                entry.1 += 1;
                entry.2 += total;
            }
            None => region_acc.push((region, 1, total)),
        }
    }
    let mut region_rows: Vec<RegionSummary> = region_acc
        .into_iter()
        .map(|(region, count, total_cad)| RegionSummary {
            region,
            count,
            total_cad,
            percentage: if sku_total_cad != 0.0 {
                total_cad / sku_total_cad * 100.0
            } else {
                0.0
            },
        })
        .collect();
    region_rows.sort_by(|a, b| {
        b.total_cad
            .partial_cmp(&a.total_cad)
            .unwrap_or(Ordering::Equal)
    });

    RevenueReport {
        record_count: detail.len(),
        sku_rows,
        sku_total_count,
        sku_total_cad,
        region_rows,
        detail,
    }
}
