//! Immutable snapshots of the external reference tables. The core only
//! ever consumes these; fetching and caching live behind [`TableProvider`].

pub mod csv;
pub mod http;

use std::collections::HashMap;

pub use http::{TableLocation, TableProvider, TableSources};

/// A table of synchronized price points: one column per currency code,
/// one row per price tier, all columns the same length.
#[derive(Debug, Clone, Default)]
pub struct PriceLadder {
    columns: Vec<(String, Vec<String>)>,
}

impl PriceLadder {
    pub fn new(columns: Vec<(String, Vec<String>)>) -> Self {
        Self { columns }
    }

    pub fn column(&self, code: &str) -> Option<&[String]> {
        self.columns
            .iter()
            .find(|(name, _)| name == code)
            .map(|(_, cells)| cells.as_slice())
    }

    pub fn columns(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.columns
            .iter()
            .map(|(name, cells)| (name.as_str(), cells.as_slice()))
    }

    pub fn currencies(&self) -> Vec<&str> {
        self.columns.iter().map(|(name, _)| name.as_str()).collect()
    }
}

/// One product-translation row: a product within a department plus one
/// text per language code.
#[derive(Debug, Clone, Default)]
pub struct TranslationRow {
    pub department: String,
    pub product_name: String,
    texts: HashMap<String, String>,
}

impl TranslationRow {
    pub fn new(department: String, product_name: String, texts: HashMap<String, String>) -> Self {
        Self {
            department,
            product_name,
            texts,
        }
    }

    pub fn text(&self, language: &str) -> Option<&str> {
        self.texts.get(language).map(String::as_str)
    }
}

#[derive(Debug, Clone, Default)]
pub struct TranslationTable {
    rows: Vec<TranslationRow>,
}

impl TranslationTable {
    pub fn new(rows: Vec<TranslationRow>) -> Self {
        Self { rows }
    }

    pub fn row(&self, department: &str, product_name: &str) -> Option<&TranslationRow> {
        self.rows
            .iter()
            .find(|row| row.department == department && row.product_name == product_name)
    }

    pub fn departments(&self) -> Vec<&str> {
        let mut seen = Vec::new();
        for row in &self.rows {
            if !seen.contains(&row.department.as_str()) {
                seen.push(row.department.as_str());
            }
        }
        seen
    }

    pub fn products(&self, department: &str) -> Vec<&str> {
        let mut seen = Vec::new();
        for row in &self.rows {
            if row.department == department && !seen.contains(&row.product_name.as_str()) {
                seen.push(row.product_name.as_str());
            }
        }
        seen
    }
}

/// Material translations collapsed to (material, language, translation)
/// rows for the label languages that carry composition text.
#[derive(Debug, Clone, Default)]
pub struct MaterialTable {
    rows: Vec<MaterialRow>,
}

#[derive(Debug, Clone)]
pub struct MaterialRow {
    pub material: String,
    pub language: String,
    pub translation: String,
}

impl MaterialTable {
    pub fn new(rows: Vec<MaterialRow>) -> Self {
        Self { rows }
    }

    pub fn translation(&self, material: &str, language: &str) -> Option<&str> {
        self.rows
            .iter()
            .find(|row| row.material == material && row.language == language)
            .map(|row| row.translation.as_str())
    }

    pub fn materials(&self) -> Vec<&str> {
        let mut seen = Vec::new();
        for row in &self.rows {
            if !seen.contains(&row.material.as_str()) {
                seen.push(row.material.as_str());
            }
        }
        seen
    }
}

/// The three reference tables one processing pass works against.
#[derive(Debug, Clone, Default)]
pub struct TableSet {
    pub prices: PriceLadder,
    pub translations: TranslationTable,
    pub materials: MaterialTable,
}
