use crate::ledger::{extract_cost_records, parse_decimal, CostRecord};
use crate::table::Table;

// ---------------------------------------------------------------------------
// Categories and rules
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CostCategory {
    CouponFee,
    AdvertisingFee,
    StorageFee,
    DisposalFee,
    OtherFee,
}

pub const ALL_CATEGORIES: &[CostCategory] = &[
    CostCategory::CouponFee,
    CostCategory::AdvertisingFee,
    CostCategory::StorageFee,
    CostCategory::DisposalFee,
    CostCategory::OtherFee,
];

impl CostCategory {
    pub fn key(&self) -> &'static str {
        match self {
            Self::CouponFee => "coupon-fee",
            Self::AdvertisingFee => "advertising-fee",
            Self::StorageFee => "storage-fee",
            Self::DisposalFee => "disposal-fee",
            Self::OtherFee => "other-fee",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::CouponFee => "Coupon Fees",
            Self::AdvertisingFee => "Advertising",
            Self::StorageFee => "Storage",
            Self::DisposalFee => "Disposal",
            Self::OtherFee => "Other Fees",
        }
    }
}

struct CostRule {
    category: CostCategory,
    type_is: &'static str,
    description_has: &'static [&'static str],
}

// Ordered rule table over lower-cased (type, description). The combinations
// are disjoint, so at most one rule can match a record; records outside all
// five categories exist in real ledgers and belong to no bucket.
const COST_RULES: &[CostRule] = &[
    CostRule {
        category: CostCategory::CouponFee,
        type_is: "service fee",
        description_has: &["coupon redemption"],
    },
    CostRule {
        category: CostCategory::AdvertisingFee,
        type_is: "service fee",
        description_has: &["cost of advertising"],
    },
    CostRule {
        category: CostCategory::StorageFee,
        type_is: "fba inventory fee",
        description_has: &["fba storage fee", "fba long-term storage fee"],
    },
    CostRule {
        category: CostCategory::DisposalFee,
        type_is: "fba inventory fee",
        description_has: &["fulfilment by amazon removal order: disposal fee"],
    },
    CostRule {
        category: CostCategory::OtherFee,
        type_is: "service fee",
        description_has: &["subscription"],
    },
];

/// First matching rule wins; `None` when the record fits no fee category.
pub fn classify(record: &CostRecord) -> Option<CostCategory> {
    let txn_type = record.txn_type.to_lowercase();
    let description = record.description.to_lowercase();
    COST_RULES
        .iter()
        .find(|rule| {
            rule.type_is == txn_type
                && rule
                    .description_has
                    .iter()
                    .any(|needle| description.contains(needle))
        })
        .map(|rule| rule.category)
}

/// What the detail view is filtered to: one category, or every record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CostSelection {
    All,
    One(CostCategory),
}

impl CostSelection {
    pub fn from_key(key: &str) -> Option<Self> {
        if key == "all" {
            return Some(Self::All);
        }
        ALL_CATEGORIES
            .iter()
            .find(|c| c.key() == key)
            .map(|c| Self::One(*c))
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::All => "All",
            Self::One(category) => category.label(),
        }
    }

    fn matches(&self, record: &CostRecord) -> bool {
        match self {
            Self::All => true,
            Self::One(category) => classify(record) == Some(*category),
        }
    }
}

// ---------------------------------------------------------------------------
// Report
// ---------------------------------------------------------------------------

#[derive(Debug)]
pub struct CategorySummary {
    pub category: CostCategory,
    pub count: usize,
    pub total_cad: f64,
}

#[derive(Debug)]
pub struct CostReport {
    /// Number of extracted records before any category filtering.
    pub record_count: usize,
    /// One bucket per category, in rule order, regardless of the selection.
    pub summary: Vec<CategorySummary>,
    /// Sum of the five category totals. May legitimately differ from the
    /// sum over all records, since uncategorized fees exist.
    pub grand_total: f64,
    pub selection: CostSelection,
    pub detail: Vec<CostRecord>,
    pub selected_total: f64,
    /// Diagnostic only: totals among the detail rows that failed to parse
    /// and therefore contributed 0 to the sum.
    pub coerced_to_zero: usize,
}

/// Unparseable totals count toward `count` but add 0 to the sum.
fn bucket_total(records: &[&CostRecord]) -> (f64, usize) {
    let mut total = 0.0;
    let mut coerced = 0usize;
    for record in records {
        match parse_decimal(&record.total) {
            Some(value) => total += value,
            None => coerced += 1,
        }
    }
    (total, coerced)
}

/// Run the full cost closing over a loaded table: five-category summary,
/// grand total, and detail rows for the selection.
pub fn cost_report(table: &Table, selection: CostSelection) -> CostReport {
    let records = extract_cost_records(table);

    let mut summary = Vec::with_capacity(ALL_CATEGORIES.len());
    for &category in ALL_CATEGORIES {
        let matching: Vec<&CostRecord> = records
            .iter()
            .filter(|r| classify(r) == Some(category))
            .collect();
        let (total_cad, _) = bucket_total(&matching);
        summary.push(CategorySummary {
            category,
            count: matching.len(),
            total_cad,
        });
    }
    let grand_total = summary.iter().map(|s| s.total_cad).sum();

    let detail: Vec<CostRecord> = records
        .iter()
        .filter(|r| selection.matches(r))
        .cloned()
        .collect();
    let refs: Vec<&CostRecord> = detail.iter().collect();
    let (selected_total, coerced_to_zero) = bucket_total(&refs);

    CostReport {
        record_count: records.len(),
        summary,
        grand_total,
        selection,
        detail,
        selected_total,
        coerced_to_zero,
    }
}
