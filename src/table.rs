use crate::error::{CloseoutError, Result};

/// A settlement ledger materialized as a rectangular header + rows table.
///
/// Every row holds exactly `headers.len()` fields; rows that came out of the
/// file with a different field count are dropped at parse time.
#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl Table {
    /// Parse raw CSV text into a table.
    ///
    /// Single left-to-right scan. A `"` toggles quoted mode; `""` inside a
    /// quoted field collapses to one literal quote. Commas and line breaks
    /// inside quotes are field content. Fields are trimmed. Runs of blank
    /// lines produce no rows, and a missing trailing newline still yields
    /// the final row. The first row becomes the header; every later row is
    /// kept only when its field count matches the header exactly.
    pub fn parse(text: &str) -> Result<Table> {
        let mut rows: Vec<Vec<String>> = Vec::new();
        let mut row: Vec<String> = Vec::new();
        let mut cell = String::new();
        let mut in_quotes = false;

        let mut chars = text.chars().peekable();
        while let Some(c) = chars.next() {
            match c {
                '"' => {
                    if in_quotes && chars.peek() == Some(&'"') {
                        cell.push('"');
                        chars.next();
                    } else {
                        in_quotes = !in_quotes;
                    }
                }
                ',' if !in_quotes => {
                    row.push(cell.trim().to_string());
                    cell.clear();
                }
                '\n' | '\r' if !in_quotes => {
                    if !cell.is_empty() || !row.is_empty() {
                        row.push(cell.trim().to_string());
                        rows.push(std::mem::take(&mut row));
                        cell.clear();
                    }
                    // CRLF is one row terminator, not two
                    if c == '\r' && chars.peek() == Some(&'\n') {
                        chars.next();
                    }
                }
                _ => cell.push(c),
            }
        }
        if !cell.is_empty() || !row.is_empty() {
            row.push(cell.trim().to_string());
            rows.push(row);
        }

        let mut rows = rows.into_iter();
        let Some(headers) = rows.next() else {
            return Err(CloseoutError::EmptyInput);
        };
        let data = rows.filter(|r| r.len() == headers.len()).collect();

        Ok(Table {
            headers,
            rows: data,
        })
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn column_count(&self) -> usize {
        self.headers.len()
    }

    pub fn cell_count(&self) -> usize {
        self.row_count() * self.column_count()
    }

    /// All values of one column, top to bottom. Positions a row does not
    /// cover come back as empty strings.
    pub fn column(&self, index: usize) -> Vec<String> {
        if index >= self.headers.len() {
            return Vec::new();
        }
        self.rows
            .iter()
            .map(|row| row.get(index).cloned().unwrap_or_default())
            .collect()
    }

    /// Column lookup by exact header name, case-insensitive.
    #[allow(dead_code)]
    pub fn column_by_name(&self, name: &str) -> Vec<String> {
        match self
            .headers
            .iter()
            .position(|h| h.eq_ignore_ascii_case(name))
        {
            Some(index) => self.column(index),
            None => Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn serialize(table: &Table) -> String {
        let mut out = table.headers.join(",");
        out.push('\n');
        for row in &table.rows {
            out.push_str(&row.join(","));
            out.push('\n');
        }
        out
    }

    #[test]
    fn test_basic_parse() {
        let t = Table::parse("a,b,c\n1,2,3\n4,5,6\n").unwrap();
        assert_eq!(t.headers, vec!["a", "b", "c"]);
        assert_eq!(t.rows, vec![vec!["1", "2", "3"], vec!["4", "5", "6"]]);
    }

    #[test]
    fn test_round_trip() {
        let t = Table::parse("date,type,total\nx,order,10\ny,refund,-5\n").unwrap();
        let again = Table::parse(&serialize(&t)).unwrap();
        assert_eq!(t, again);
    }

    #[test]
    fn test_quoted_field_with_comma() {
        let t = Table::parse("a,\"b,c\",d\n1,2,3").unwrap();
        assert_eq!(t.headers, vec!["a", "b,c", "d"]);
        assert_eq!(t.rows, vec![vec!["1", "2", "3"]]);
    }

    #[test]
    fn test_escaped_quote() {
        let t = Table::parse("a\n\"he said \"\"hi\"\"\"").unwrap();
        assert_eq!(t.rows[0][0], "he said \"hi\"");
    }

    #[test]
    fn test_newline_inside_quotes() {
        let t = Table::parse("a,b\n\"line one\nline two\",x\n").unwrap();
        assert_eq!(t.rows, vec![vec!["line one\nline two", "x"]]);
    }

    #[test]
    fn test_line_ending_invariance() {
        let lf = Table::parse("a,b\n1,2\n3,4\n").unwrap();
        let crlf = Table::parse("a,b\r\n1,2\r\n3,4\r\n").unwrap();
        let cr = Table::parse("a,b\r1,2\r3,4\r").unwrap();
        assert_eq!(lf, crlf);
        assert_eq!(lf, cr);
    }

    #[test]
    fn test_blank_lines_produce_no_rows() {
        let t = Table::parse("a,b\n\n\n1,2\n\n3,4\n\n").unwrap();
        assert_eq!(t.rows, vec![vec!["1", "2"], vec!["3", "4"]]);
    }

    #[test]
    fn test_fields_are_trimmed() {
        let t = Table::parse(" a , b \n 1 ,  2  \n").unwrap();
        assert_eq!(t.headers, vec!["a", "b"]);
        assert_eq!(t.rows, vec![vec!["1", "2"]]);
    }

    #[test]
    fn test_missing_trailing_newline_keeps_last_row() {
        let t = Table::parse("a,b\n1,2").unwrap();
        assert_eq!(t.rows, vec![vec!["1", "2"]]);
    }

    #[test]
    fn test_short_and_long_rows_are_dropped() {
        let t = Table::parse("a,b,c,d\n1,2,3\n1,2,3,4\n1,2,3,4,5\n").unwrap();
        assert_eq!(t.rows, vec![vec!["1", "2", "3", "4"]]);
    }

    #[test]
    fn test_trailing_comma_makes_empty_field() {
        let t = Table::parse("a,b\n1,\n").unwrap();
        assert_eq!(t.rows, vec![vec!["1", ""]]);
    }

    #[test]
    fn test_empty_input_is_an_error() {
        assert!(matches!(
            Table::parse(""),
            Err(CloseoutError::EmptyInput)
        ));
        assert!(matches!(
            Table::parse("\n\n\n"),
            Err(CloseoutError::EmptyInput)
        ));
    }

    #[test]
    fn test_header_only_file_has_zero_rows() {
        let t = Table::parse("a,b,c\n").unwrap();
        assert_eq!(t.row_count(), 0);
        assert_eq!(t.column_count(), 3);
        assert_eq!(t.cell_count(), 0);
    }

    #[test]
    fn test_column_accessors() {
        let t = Table::parse("Name,Total\nwidget,10\ngadget,20\n").unwrap();
        assert_eq!(t.column(1), vec!["10", "20"]);
        assert_eq!(t.column(5), Vec::<String>::new());
        assert_eq!(t.column_by_name("total"), vec!["10", "20"]);
        assert_eq!(t.column_by_name("missing"), Vec::<String>::new());
    }
}
