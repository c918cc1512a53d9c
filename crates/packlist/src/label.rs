//! Assembly of the pipe-delimited multilingual product label.

use std::collections::HashMap;

use crate::tables::{MaterialTable, TranslationRow};

/// Fixed language order after the leading EN segment.
pub const LANGUAGE_ORDER: [&str; 20] = [
    "AL", "BG", "BiH", "CZ", "DE", "EE", "ES", "GR", "HR", "HU", "IT", "LT", "LV", "MK", "PL",
    "PT", "RO", "RS", "SI", "SK",
];

/// Languages whose segment carries the material composition.
pub const MATERIAL_LANGUAGES: [&str; 4] = ["AL", "BG", "MK", "RS"];

const BIH_SUFFIX: &str = " Sastav materijala na ušivenoj etiketi.";
const RS_SUFFIX: &str = " Sastav materijala nalazi se na ušivenoj etiketi.";

/// One material the operator selected, with its optional composition
/// percentage as typed (e.g. "95" or "90 cotton 10 elastane").
#[derive(Debug, Clone)]
pub struct MaterialSpec {
    pub name: String,
    pub composition: Option<String>,
}

/// Per-language material strings derived from the operator's selection:
/// plain translated names, and composition strings with the percentage
/// leading each name.
#[derive(Debug, Clone, Default)]
pub struct MaterialText {
    pub names: HashMap<String, String>,
    pub compositions: HashMap<String, String>,
}

/// Builds [`MaterialText`] for the label languages. Materials without a
/// translation in a language are skipped for that language; a percent sign
/// is appended to bare numeric compositions.
pub fn material_text(materials: &[MaterialSpec], table: &MaterialTable) -> MaterialText {
    let mut out = MaterialText::default();
    for language in MATERIAL_LANGUAGES {
        let mut names = Vec::new();
        let mut compositions = Vec::new();
        for spec in materials {
            let Some(translation) = table.translation(&spec.name, language) else {
                continue;
            };
            names.push(translation.to_string());

            let composition = spec
                .composition
                .as_deref()
                .map(str::trim)
                .filter(|c| !c.is_empty());
            if let Some(composition) = composition {
                let composition = if composition.contains('%') {
                    composition.to_string()
                } else {
                    format!("{}%", composition)
                };
                compositions.push(format!("{} {}", composition, translation));
            }
        }
        if !names.is_empty() {
            out.names.insert(language.to_string(), names.join(", "));
        }
        if !compositions.is_empty() {
            out.compositions
                .insert(language.to_string(), compositions.join(", "));
        }
    }
    out
}

/// Builds the full `|EN| ... |SK| ...` label: 21 segments joined with
/// single spaces, every missing translation falling back to the raw
/// product name.
pub fn assemble(
    product_name: &str,
    row: &TranslationRow,
    materials: Option<&MaterialText>,
) -> String {
    let mut segments = Vec::with_capacity(1 + LANGUAGE_ORDER.len());

    let en = row.text("EN").unwrap_or(product_name);
    segments.push(format!("|EN| {}", en));

    for language in LANGUAGE_ORDER {
        let mut text = if language == "ES" {
            let es = row.text("ES").unwrap_or(product_name);
            match row.text("ES_CA") {
                Some(catalan) => format!("{} / {}", es, catalan),
                None => es.to_string(),
            }
        } else {
            row.text(language).unwrap_or(product_name).to_string()
        };

        if let Some(materials) = materials {
            if MATERIAL_LANGUAGES.contains(&language) {
                if let Some(composition) = materials.compositions.get(language) {
                    text = format!("{}: {}", text, composition);
                } else if let Some(names) = materials.names.get(language) {
                    text = format!("{}: {}", text, names);
                }
            }
        }

        if language == "BiH" || language == "RS" {
            if !text.ends_with('.') {
                text.push('.');
            }
            text.push_str(if language == "BiH" { BIH_SUFFIX } else { RS_SUFFIX });
        }

        segments.push(format!("|{}| {}", language, text));
    }

    segments.join(" ")
}
