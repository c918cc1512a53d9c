//! CSV parsing for the published reference sheets (comma-delimited,
//! quote-aware) into the typed table snapshots.

use std::collections::HashMap;

use crate::error::TableError;
use crate::label::MATERIAL_LANGUAGES;

use super::{MaterialRow, MaterialTable, PriceLadder, TranslationRow, TranslationTable};

/// Splits CSV text into rows of fields. Handles quoted fields, doubled
/// quotes and both newline conventions. Fully blank lines are dropped.
pub fn parse_rows(text: &str) -> Vec<Vec<String>> {
    let mut rows = Vec::new();
    let mut row: Vec<String> = Vec::new();
    let mut field = String::new();
    let mut in_quotes = false;

    let mut chars = text.chars().peekable();
    while let Some(c) = chars.next() {
        if in_quotes {
            if c == '"' {
                if chars.peek() == Some(&'"') {
                    chars.next();
                    field.push('"');
                } else {
                    in_quotes = false;
                }
            } else {
                field.push(c);
            }
        } else {
            match c {
                '"' => in_quotes = true,
                ',' => row.push(std::mem::take(&mut field)),
                '\r' => {}
                '\n' => {
                    row.push(std::mem::take(&mut field));
                    rows.push(std::mem::take(&mut row));
                }
                _ => field.push(c),
            }
        }
    }
    if !field.is_empty() || !row.is_empty() {
        row.push(field);
        rows.push(row);
    }

    rows.retain(|r| r.iter().any(|cell| !cell.trim().is_empty()));
    rows
}

/// Header row = currency codes; every later row is one synchronized price
/// point. Short rows are padded so column indexes stay aligned.
pub fn price_ladder(text: &str) -> Result<PriceLadder, TableError> {
    let rows = parse_rows(text);
    let (header, body) = rows.split_first().ok_or(TableError::Empty)?;

    let mut columns: Vec<(String, Vec<String>)> = header
        .iter()
        .map(|code| (code.trim().to_string(), Vec::with_capacity(body.len())))
        .collect();

    for row in body {
        for (index, (_, cells)) in columns.iter_mut().enumerate() {
            cells.push(row.get(index).map(|c| c.trim().to_string()).unwrap_or_default());
        }
    }

    Ok(PriceLadder::new(columns))
}

/// DEPARTMENT + PRODUCT_NAME plus one column per language code. Empty
/// cells are treated as missing translations; rows without a product name
/// are dropped.
pub fn translation_table(text: &str) -> Result<TranslationTable, TableError> {
    let rows = parse_rows(text);
    let (header, body) = rows.split_first().ok_or(TableError::Empty)?;

    let header: Vec<String> = header.iter().map(|c| c.trim().to_string()).collect();
    let column = |name: &str| {
        header
            .iter()
            .position(|c| c == name)
            .ok_or_else(|| TableError::MissingColumn(name.to_string()))
    };
    let department_col = column("DEPARTMENT")?;
    let product_col = column("PRODUCT_NAME")?;

    let mut parsed = Vec::new();
    for row in body {
        let cell = |index: usize| row.get(index).map(|c| c.trim()).unwrap_or_default();
        let product_name = cell(product_col);
        if product_name.is_empty() {
            continue;
        }

        let mut texts = HashMap::new();
        for (index, name) in header.iter().enumerate() {
            if index == department_col || index == product_col {
                continue;
            }
            let value = cell(index);
            if !value.is_empty() {
                texts.insert(name.clone(), value.to_string());
            }
        }

        parsed.push(TranslationRow::new(
            cell(department_col).to_string(),
            product_name.to_string(),
            texts,
        ));
    }

    Ok(TranslationTable::new(parsed))
}

/// The source sheet has one row per material with one column per label
/// language; collapse it to (material, language, translation) rows.
pub fn material_table(text: &str) -> Result<MaterialTable, TableError> {
    let rows = parse_rows(text);
    let (header, body) = rows.split_first().ok_or(TableError::Empty)?;

    let header: Vec<String> = header.iter().map(|c| c.trim().to_string()).collect();
    let name_col = header
        .iter()
        .position(|c| c == "Name")
        .ok_or_else(|| TableError::MissingColumn("Name".to_string()))?;

    let mut language_cols = Vec::new();
    for language in MATERIAL_LANGUAGES {
        let index = header
            .iter()
            .position(|c| c == language)
            .ok_or_else(|| TableError::MissingColumn(language.to_string()))?;
        language_cols.push((language, index));
    }

    let mut parsed = Vec::new();
    for row in body {
        let cell = |index: usize| row.get(index).map(|c| c.trim()).unwrap_or_default();
        let material = cell(name_col);
        if material.is_empty() {
            continue;
        }
        for (language, index) in &language_cols {
            let translation = cell(*index);
            if !translation.is_empty() {
                parsed.push(MaterialRow {
                    material: material.to_string(),
                    language: language.to_string(),
                    translation: translation.to_string(),
                });
            }
        }
    }

    Ok(MaterialTable::new(parsed))
}
