use crate::error::InputError;
use crate::label::MaterialSpec;

/// Everything the operator resolved through the form, handed to the core
/// already validated so the pipeline itself stays stateless.
#[derive(Debug, Clone)]
pub struct OperatorInput {
    /// Department name as it appears in the translation table.
    pub department: String,
    /// Product name as it appears in the translation table.
    pub product_name: String,
    pub materials: Vec<MaterialSpec>,
    /// Washing-code selection ("1".."15").
    pub washing_code: String,
    /// Anchor price in PLN as typed, comma or dot decimals.
    pub pln_price: String,
    /// Colour to use when the document requires manual input.
    pub colour_override: Option<String>,
}

/// Validates the operator's PLN price. Comma decimals are accepted;
/// malformed or negative input is a user-facing validation error, never a
/// crash.
pub fn parse_price(raw: &str) -> Result<f64, InputError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(InputError::InvalidPrice(raw.to_string()));
    }
    let value: f64 = trimmed
        .replace(',', ".")
        .parse()
        .map_err(|_| InputError::InvalidPrice(raw.to_string()))?;
    if value < 0.0 {
        return Err(InputError::NegativePrice(raw.to_string()));
    }
    Ok(value)
}

/// Parses a CLI material argument: `NAME` or `NAME=COMPOSITION`.
pub fn parse_material_arg(raw: &str) -> MaterialSpec {
    match raw.split_once('=') {
        Some((name, composition)) => MaterialSpec {
            name: name.trim().to_string(),
            composition: Some(composition.trim().to_string()),
        },
        None => MaterialSpec {
            name: raw.trim().to_string(),
            composition: None,
        },
    }
}
