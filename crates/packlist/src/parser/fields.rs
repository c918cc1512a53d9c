use chrono::NaiveDate;
use regex::Regex;

/// Fields pulled from the first page of a packing list.
///
/// Every field is independently optional: a label that does not match
/// degrades the corresponding output column to "UNKNOWN", it never aborts
/// the run.
#[derive(Debug, Clone, Default)]
pub struct ExtractedFields {
    pub order_id: Option<String>,
    pub merch_code: Option<String>,
    pub season_digits: Option<String>,
    pub style_code: Option<String>,
    pub collection: Option<String>,
    pub handover_date: Option<NaiveDate>,
    pub item_classification: Option<String>,
    pub supplier_product_code: Option<String>,
    pub supplier_name: Option<String>,
}

/// Applies the page-1 label patterns. Patterns are compiled once at
/// construction and reused for every document.
///
/// All labels are separated from their value by a run of two or more dots,
/// with whitespace tolerated on either side.
pub struct FieldParser {
    order_id: Regex,
    merch_code: Regex,
    season: Regex,
    style_code: Regex,
    collection: Regex,
    handover_date: Regex,
    item_classification: Regex,
    supplier_product_code: Regex,
    supplier_name: Regex,
}

impl FieldParser {
    pub fn new() -> Self {
        let compile = |pattern: &str| Regex::new(pattern).expect("hard-coded pattern");
        Self {
            order_id: compile(r"(?i)Order\s*-\s*ID\s*\.{2,}\s*(.+)"),
            merch_code: compile(r"Merch\s*code\s*\.{2,}\s*([\w/]+)"),
            season: compile(r"Season\s*\.{2,}\s*(\w+)?\s*(\d{2})"),
            style_code: compile(r"\b\d{6}\b"),
            collection: compile(r"Collection\s*\.{2,}\s*(.+)"),
            handover_date: compile(r"Handover\s*date\s*\.{2,}\s*(\d{2}/\d{2}/\d{4})"),
            item_classification: compile(r"Item classification\s*\.{2,}\s*(.+)"),
            supplier_product_code: compile(r"Supplier product code\s*\.{2,}\s*(.+)"),
            supplier_name: compile(r"Supplier name\s*\.{2,}\s*(.+)"),
        }
    }

    pub fn parse_page1(&self, text: &str) -> ExtractedFields {
        let capture = |re: &Regex| {
            re.captures(text)
                .and_then(|c| c.get(1))
                .map(|m| m.as_str().trim().to_string())
        };

        // Only the two-digit group of the season is kept; the leading word
        // token (e.g. "SPRING") is matched but discarded.
        let season_digits = self
            .season
            .captures(text)
            .and_then(|c| c.get(2))
            .map(|m| m.as_str().to_string());

        // The portion before the first literal "-" is the collection name;
        // anything after it is line noise on this document family.
        let collection = capture(&self.collection).map(|value| {
            value.split('-').next().unwrap_or("").trim().to_string()
        });

        let handover_date = capture(&self.handover_date)
            .and_then(|value| NaiveDate::parse_from_str(&value, "%d/%m/%Y").ok());

        ExtractedFields {
            order_id: capture(&self.order_id),
            merch_code: capture(&self.merch_code),
            season_digits,
            style_code: self.style_code.find(text).map(|m| m.as_str().to_string()),
            collection,
            handover_date,
            item_classification: capture(&self.item_classification),
            supplier_product_code: capture(&self.supplier_product_code),
            supplier_name: capture(&self.supplier_name),
        }
    }

    /// Order id alone, for secondary documents that contribute nothing else.
    pub fn parse_order_id(&self, text: &str) -> Option<String> {
        self.order_id
            .captures(text)
            .and_then(|c| c.get(1))
            .map(|m| m.as_str().trim().to_string())
    }
}

impl Default for FieldParser {
    fn default() -> Self {
        Self::new()
    }
}
