use std::collections::HashSet;

use regex::Regex;

/// SKU and barcode token lists scanned from page 3, in encounter order.
#[derive(Debug, Clone, Default)]
pub struct ItemCodes {
    /// Every standalone 8-digit token.
    pub skus: Vec<String>,
    /// Every standalone 13-digit token, minus excluded annotation values.
    pub barcodes: Vec<String>,
}

pub struct ItemParser {
    sku: Regex,
    barcode: Regex,
    excluded: Regex,
}

impl ItemParser {
    pub fn new() -> Self {
        Self {
            sku: Regex::new(r"\b\d{8}\b").expect("hard-coded pattern"),
            barcode: Regex::new(r"\b\d{13}\b").expect("hard-coded pattern"),
            excluded: Regex::new(r"barcode:\s*(\d{13});").expect("hard-coded pattern"),
        }
    }

    /// A 13-digit value captured anywhere by a `barcode: <digits>;`
    /// annotation is excluded from the valid list, even where it also
    /// appears as a bare token. Order is preserved, duplicates allowed.
    pub fn parse(&self, text: &str) -> ItemCodes {
        let skus = self
            .sku
            .find_iter(text)
            .map(|m| m.as_str().to_string())
            .collect();

        let excluded: HashSet<&str> = self
            .excluded
            .captures_iter(text)
            .filter_map(|c| c.get(1))
            .map(|m| m.as_str())
            .collect();

        let barcodes = self
            .barcode
            .find_iter(text)
            .map(|m| m.as_str())
            .filter(|value| !excluded.contains(value))
            .map(str::to_string)
            .collect();

        ItemCodes { skus, barcodes }
    }
}

impl Default for ItemParser {
    fn default() -> Self {
        Self::new()
    }
}
