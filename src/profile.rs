use std::collections::HashSet;

use crate::ledger::parse_decimal;
use crate::table::Table;

#[derive(Debug, Clone, PartialEq)]
pub struct NumericStats {
    pub min: f64,
    pub max: f64,
    pub mean: f64,
    pub sum: f64,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MostCommon {
    pub value: String,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ColumnKind {
    Numeric(NumericStats),
    Text(Option<MostCommon>),
    Empty,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ColumnProfile {
    pub header: String,
    pub unique_values: usize,
    pub kind: ColumnKind,
}

// A column is numeric when at least 80% of its non-empty cells parse.
const NUMERIC_NUM: usize = 8;
const NUMERIC_DEN: usize = 10;

fn profile_column(header: &str, values: &[String]) -> ColumnProfile {
    let non_empty: Vec<&str> = values
        .iter()
        .map(|v| v.trim())
        .filter(|v| !v.is_empty())
        .collect();

    if non_empty.is_empty() {
        return ColumnProfile {
            header: header.to_string(),
            unique_values: 0,
            kind: ColumnKind::Empty,
        };
    }

    let numeric: Vec<(&str, f64)> = non_empty
        .iter()
        .filter_map(|v| parse_decimal(v).map(|n| (*v, n)))
        .collect();

    if numeric.len() * NUMERIC_DEN >= non_empty.len() * NUMERIC_NUM {
        let mut min = f64::INFINITY;
        let mut max = f64::NEG_INFINITY;
        let mut sum = 0.0;
        for &(_, n) in &numeric {
            min = min.min(n);
            max = max.max(n);
            sum += n;
        }
        let count = numeric.len();
        let unique: HashSet<&str> = numeric.iter().map(|(raw, _)| *raw).collect();
        return ColumnProfile {
            header: header.to_string(),
            unique_values: unique.len(),
            kind: ColumnKind::Numeric(NumericStats {
                min,
                max,
                mean: sum / count as f64,
                sum,
                count,
            }),
        };
    }

    // Frequency table in first-seen order; ties on count keep the earlier
    // value, which makes the winner input-order dependent by design.
    let mut freq: Vec<(&str, usize)> = Vec::new();
    for value in &non_empty {
        match freq.iter_mut().find(|(v, _)| v == value) {
            Some(entry) => entry.1 += 1,
            None => freq.push((value, 1)),
        }
    }
    // Strictly-greater comparison so ties keep the first-seen value.
    let mut most_common: Option<MostCommon> = None;
    for (value, count) in &freq {
        if most_common.as_ref().map_or(true, |mc| *count > mc.count) {
            most_common = Some(MostCommon {
                value: value.to_string(),
                count: *count,
            });
        }
    }

    ColumnProfile {
        header: header.to_string(),
        unique_values: freq.len(),
        kind: ColumnKind::Text(most_common),
    }
}

/// Profile every column of the table independently, in header order.
pub fn profile_columns(table: &Table) -> Vec<ColumnProfile> {
    table
        .headers
        .iter()
        .enumerate()
        .map(|(i, header)| profile_column(header, &table.column(i)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    // A pad column keeps rows two fields wide even when the cell under test
    // is blank (a bare blank line would otherwise produce no row at all).
    fn column_table(cells: &[&str]) -> Table {
        let mut text = String::from("col,pad\n");
        for cell in cells {
            text.push_str(&format!("{cell},x\n"));
        }
        Table::parse(&text).unwrap()
    }

    #[test]
    fn test_numeric_at_exactly_80_percent() {
        let cells = ["1", "2", "3", "4", "5", "6", "7", "8", "a", "b"];
        let profiles = profile_columns(&column_table(&cells));
        match &profiles[0].kind {
            ColumnKind::Numeric(stats) => {
                assert_eq!(stats.count, 8);
                assert_eq!(stats.min, 1.0);
                assert_eq!(stats.max, 8.0);
                assert_eq!(stats.sum, 36.0);
                assert_eq!(stats.mean, 4.5);
            }
            other => panic!("expected numeric, got {other:?}"),
        }
        assert_eq!(profiles[0].unique_values, 8);
    }

    #[test]
    fn test_text_below_80_percent() {
        let cells = ["1", "2", "3", "4", "5", "6", "7", "a", "b", "c"];
        let profiles = profile_columns(&column_table(&cells));
        assert!(matches!(profiles[0].kind, ColumnKind::Text(_)));
    }

    #[test]
    fn test_text_most_common_and_unique() {
        let cells = ["order", "refund", "order", "order", "adjustment"];
        let profiles = profile_columns(&column_table(&cells));
        assert_eq!(profiles[0].unique_values, 3);
        match &profiles[0].kind {
            ColumnKind::Text(Some(mc)) => {
                assert_eq!(mc.value, "order");
                assert_eq!(mc.count, 3);
            }
            other => panic!("expected text with a mode, got {other:?}"),
        }
    }

    #[test]
    fn test_text_tie_breaks_on_first_encounter() {
        let cells = ["refund", "order", "order", "refund"];
        let profiles = profile_columns(&column_table(&cells));
        match &profiles[0].kind {
            ColumnKind::Text(Some(mc)) => assert_eq!(mc.value, "refund"),
            other => panic!("expected text, got {other:?}"),
        }
    }

    #[test]
    fn test_empty_column() {
        let cells = ["", "", ""];
        let profiles = profile_columns(&column_table(&cells));
        assert_eq!(profiles[0].kind, ColumnKind::Empty);
        assert_eq!(profiles[0].unique_values, 0);
        // The pad column is plain text.
        assert!(matches!(profiles[1].kind, ColumnKind::Text(_)));
    }

    #[test]
    fn test_whitespace_only_cells_are_empty() {
        let table = Table::parse("a,b\n ,1\n  ,2\n").unwrap();
        let profiles = profile_columns(&table);
        assert_eq!(profiles[0].kind, ColumnKind::Empty);
    }

    #[test]
    fn test_profiles_cover_every_header_in_order() {
        let table = Table::parse("x,y,z\n1,a,\n2,b,\n").unwrap();
        let profiles = profile_columns(&table);
        let names: Vec<&str> = profiles.iter().map(|p| p.header.as_str()).collect();
        assert_eq!(names, vec!["x", "y", "z"]);
    }
}
