fn group_thousands(digits: &str) -> String {
    let mut grouped = String::new();
    for (i, c) in digits.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    grouped.chars().rev().collect()
}

/// Bare CAD amount with thousands separators and 2 fraction digits: -1,234.56
pub fn cad_number(value: f64) -> String {
    let cents = format!("{:.2}", value.abs());
    let (int_part, dec_part) = cents.split_once('.').unwrap_or((cents.as_str(), "00"));
    let sign = if value < 0.0 { "-" } else { "" };
    format!("{sign}{}.{dec_part}", group_thousands(int_part))
}

/// Prefixed CAD amount: CAD$ 1,234.56 / -CAD$ 1,234.56
pub fn cad(value: f64) -> String {
    let sign = if value < 0.0 { "-" } else { "" };
    format!("{sign}CAD$ {}", cad_number(value.abs()))
}

/// CAD amount converted at `rate` and rendered as whole KRW: -1,234,567
/// Half-away-from-zero rounding, not the formatter's half-even.
pub fn krw(cad_value: f64, rate: f64) -> String {
    let value = cad_value * rate;
    let sign = if value < 0.0 { "-" } else { "" };
    let whole = value.abs().round() as i64;
    format!("{sign}{}", group_thousands(&whole.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cad_number() {
        assert_eq!(cad_number(1234.56), "1,234.56");
        assert_eq!(cad_number(-500.0), "-500.00");
        assert_eq!(cad_number(0.0), "0.00");
        assert_eq!(cad_number(1000000.991), "1,000,000.99");
    }

    #[test]
    fn test_cad_prefix() {
        assert_eq!(cad(42.1), "CAD$ 42.10");
        assert_eq!(cad(-3.5), "-CAD$ 3.50");
    }

    #[test]
    fn test_krw_rounds_to_whole_units() {
        assert_eq!(krw(1.0, 1006.51), "1,007");
        assert_eq!(krw(-1.0, 1006.51), "-1,007");
        assert_eq!(krw(0.0, 1006.51), "0");
        assert_eq!(krw(1000.0, 1006.11), "1,006,110");
        // Exact halves round away from zero.
        assert_eq!(krw(0.5, 1.0), "1");
        assert_eq!(krw(-0.5, 1.0), "-1");
    }
}
