//! Price-ladder lookup and per-currency number formatting.

use std::collections::HashMap;

use crate::error::PriceError;
use crate::tables::PriceLadder;

/// Currencies rendered with two decimals and a comma separator; everything
/// else is rendered as a whole number.
const DECIMAL_CURRENCIES: [&str; 5] = ["EUR", "BGN", "BAM", "RON", "PLN"];

/// Renders a raw table cell (or operator-entered value) for a currency.
/// Comma decimals are accepted on input; non-numeric input is returned
/// unchanged rather than failing the pass.
pub fn format_number(value: &str, currency: &str) -> String {
    let normalized = value.trim().replace(',', ".");
    match normalized.parse::<f64>() {
        Ok(number) => {
            if DECIMAL_CURRENCIES.contains(&currency) {
                format!("{:.2}", number).replace('.', ",")
            } else {
                format!("{}", number.trunc() as i64)
            }
        }
        Err(_) => value.to_string(),
    }
}

/// Finds the row whose anchor-column value equals `anchor_value` exactly
/// (no nearest-match fallback) and returns every other column's value at
/// that row, formatted for its currency.
pub fn lookup(
    anchor_currency: &str,
    anchor_value: f64,
    ladder: &PriceLadder,
) -> Result<HashMap<String, String>, PriceError> {
    let anchor_column = ladder
        .column(anchor_currency)
        .ok_or_else(|| PriceError::MissingCurrency(anchor_currency.to_string()))?;

    let row = anchor_column
        .iter()
        .position(|cell| {
            cell.trim()
                .replace(',', ".")
                .parse::<f64>()
                .map(|value| value == anchor_value)
                .unwrap_or(false)
        })
        .ok_or_else(|| PriceError::PriceNotFound {
            currency: anchor_currency.to_string(),
            value: anchor_value.to_string(),
        })?;

    let mut prices = HashMap::new();
    for (currency, cells) in ladder.columns() {
        if currency == anchor_currency {
            continue;
        }
        let cell = cells.get(row).map(String::as_str).unwrap_or("");
        prices.insert(currency.to_string(), format_number(cell, currency));
    }
    Ok(prices)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ladder() -> PriceLadder {
        PriceLadder::new(vec![
            (
                "PLN".to_string(),
                vec!["9.99".to_string(), "14.99".to_string(), "24.99".to_string()],
            ),
            (
                "EUR".to_string(),
                vec!["2.5".to_string(), "3.5".to_string(), "5.5".to_string()],
            ),
            (
                "CZK".to_string(),
                vec!["55".to_string(), "85.5".to_string(), "135".to_string()],
            ),
        ])
    }

    #[test]
    fn test_format_decimal_currencies() {
        assert_eq!(format_number("1234.5", "EUR"), "1234,50");
        assert_eq!(format_number("2.5", "PLN"), "2,50");
        assert_eq!(format_number("12,5", "BGN"), "12,50");
        assert_eq!(format_number("7", "BAM"), "7,00");
    }

    #[test]
    fn test_format_integer_currencies() {
        assert_eq!(format_number("1234.5", "CZK"), "1234");
        assert_eq!(format_number("269.9", "MKD"), "269");
        assert_eq!(format_number("1690", "HUF"), "1690");
    }

    #[test]
    fn test_format_non_numeric_passes_through() {
        assert_eq!(format_number("n/a", "EUR"), "n/a");
        assert_eq!(format_number("", "CZK"), "");
    }

    #[test]
    fn test_lookup_returns_same_row_for_other_currencies() {
        let prices = lookup("PLN", 14.99, &ladder()).unwrap();
        assert_eq!(prices.get("EUR").map(String::as_str), Some("3,50"));
        assert_eq!(prices.get("CZK").map(String::as_str), Some("85"));
        assert!(!prices.contains_key("PLN"));
    }

    #[test]
    fn test_lookup_is_exact_match_only() {
        let result = lookup("PLN", 19.99, &ladder());
        assert!(matches!(result, Err(PriceError::PriceNotFound { .. })));
    }

    #[test]
    fn test_lookup_accepts_comma_cells() {
        let ladder = PriceLadder::new(vec![
            ("PLN".to_string(), vec!["19,99".to_string()]),
            ("EUR".to_string(), vec!["4,5".to_string()]),
        ]);
        let prices = lookup("PLN", 19.99, &ladder).unwrap();
        assert_eq!(prices.get("EUR").map(String::as_str), Some("4,50"));
    }

    #[test]
    fn test_lookup_missing_anchor_column() {
        let result = lookup("USD", 9.99, &ladder());
        assert!(matches!(result, Err(PriceError::MissingCurrency(_))));
    }

    #[test]
    fn test_lookup_blank_cell_formats_to_empty() {
        let ladder = PriceLadder::new(vec![
            ("PLN".to_string(), vec!["9.99".to_string()]),
            ("EUR".to_string(), vec!["".to_string()]),
        ]);
        let prices = lookup("PLN", 9.99, &ladder).unwrap();
        assert_eq!(prices.get("EUR").map(String::as_str), Some(""));
    }
}
