use once_cell::sync::Lazy;
use regex::Regex;
use crate::models::{CellValue, Row};

/// Plain or thousands-grouped decimal text with the sign already stripped:
/// "42", "25.5", "1,000", "2,500.75". Grouped digits must come in full
/// triples, so "1,00" and "12,3456" are rejected.
static NUMBER_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(\d{1,3}(?:,\d{3})+|\d+)(?:\.\d+)?$").expect("number pattern is valid")
});

const CURRENCY_SYMBOLS: &[char] = &['$', '€', '£', '¥'];

/// Converts one raw cell into a number when it is written in a recognized
/// notation. `None` is not an error; unrecognized cells simply contribute
/// nothing to aggregation.
pub fn normalize(cell: &CellValue) -> Option<f64> {
    match cell {
        CellValue::Number(n) => Some(*n),
        CellValue::Text(text) => normalize_text(text),
        CellValue::Empty => None,
    }
}

/// Percentages keep their literal magnitude: "10%" is 10.0, not 0.10, so
/// percent cells and plain counts aggregate uniformly.
fn normalize_text(text: &str) -> Option<f64> {
    let mut rest = text.trim();
    if rest.is_empty() {
        return None;
    }

    if let Some(stripped) = rest.strip_suffix('%') {
        rest = stripped.trim_end();
    }

    let mut negative = false;
    if let Some(stripped) = rest.strip_prefix('-') {
        negative = true;
        rest = stripped;
    }
    if let Some(stripped) = rest.strip_prefix(CURRENCY_SYMBOLS) {
        rest = stripped.trim_start();
    }
    // The minus may sit on either side of the currency symbol.
    if !negative {
        if let Some(stripped) = rest.strip_prefix('-') {
            negative = true;
            rest = stripped;
        }
    }

    if !NUMBER_RE.is_match(rest) {
        return None;
    }

    let value: f64 = rest.replace(',', "").parse().ok()?;
    Some(if negative { -value } else { value })
}

/// Sums every recognized cell after the label. A row with zero recognized
/// cells reports 0.0, not an error.
pub fn sum_row(row: &Row) -> f64 {
    row.cells.iter().filter_map(normalize).sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(s: &str) -> CellValue {
        CellValue::Text(s.to_string())
    }

    #[test]
    fn test_native_numbers_pass_through() {
        assert_eq!(normalize(&CellValue::Number(2.5)), Some(2.5));
        assert_eq!(normalize(&CellValue::Number(-4.0)), Some(-4.0));
    }

    #[test]
    fn test_plain_and_signed_text() {
        assert_eq!(normalize(&text("100")), Some(100.0));
        assert_eq!(normalize(&text("-25.5")), Some(-25.5));
        assert_eq!(normalize(&text(" 7 ")), Some(7.0));
    }

    #[test]
    fn test_currency_forms() {
        assert_eq!(normalize(&text("$10")), Some(10.0));
        assert_eq!(normalize(&text("$1,000.00")), Some(1000.0));
        assert_eq!(normalize(&text("€250")), Some(250.0));
        assert_eq!(normalize(&text("-$5")), Some(-5.0));
        assert_eq!(normalize(&text("$-5")), Some(-5.0));
    }

    #[test]
    fn test_percent_keeps_literal_digits() {
        assert_eq!(normalize(&text("10%")), Some(10.0));
        assert_eq!(normalize(&text("5%")), Some(5.0));
        assert_eq!(normalize(&text("-2.5%")), Some(-2.5));
    }

    #[test]
    fn test_thousands_grouping() {
        assert_eq!(normalize(&text("1,000")), Some(1000.0));
        assert_eq!(normalize(&text("2,500.75")), Some(2500.75));
        assert_eq!(normalize(&text("12,345,678")), Some(12345678.0));
    }

    #[test]
    fn test_unrecognized_forms() {
        assert_eq!(normalize(&CellValue::Empty), None);
        assert_eq!(normalize(&text("")), None);
        assert_eq!(normalize(&text("   ")), None);
        assert_eq!(normalize(&text("N/A")), None);
        assert_eq!(normalize(&text("true")), None);
        assert_eq!(normalize(&text("10 years")), None);
        assert_eq!(normalize(&text("1.2.3")), None);
        assert_eq!(normalize(&text("1,00")), None);
        assert_eq!(normalize(&text("12,3456")), None);
        assert_eq!(normalize(&text("--5")), None);
        assert_eq!(normalize(&text("%")), None);
        assert_eq!(normalize(&text("$")), None);
    }

    #[test]
    fn test_sum_row_mixes_notations() {
        let row = Row {
            label: "Tax Credit (if any)=".to_string(),
            cells: vec![text("$10"), text("5%")],
        };
        assert_eq!(sum_row(&row), 15.0);
    }

    #[test]
    fn test_sum_row_skips_unrecognized_cells() {
        let row = Row {
            label: "Mixed=".to_string(),
            cells: vec![
                text("N/A"),
                CellValue::Number(3.0),
                CellValue::Empty,
                text("1,000"),
            ],
        };
        assert_eq!(sum_row(&row), 1003.0);
    }

    #[test]
    fn test_sum_row_with_nothing_recognized_is_zero() {
        let row = Row {
            label: "Notes=".to_string(),
            cells: vec![text("see appendix"), text("tbd"), CellValue::Empty],
        };
        assert_eq!(sum_row(&row), 0.0);
    }

    #[test]
    fn test_sum_row_with_no_cells_is_zero() {
        let row = Row {
            label: "Lonely=".to_string(),
            cells: Vec::new(),
        };
        assert_eq!(sum_row(&row), 0.0);
    }
}
