use chrono::NaiveDate;

use crate::parser::{ExtractedFields, ItemCodes};
use crate::record::Record;

use super::error::PipelineWarning;
use super::input::OperatorInput;

/// State threaded through one processing pass. Step results are `Option`
/// until their step has run; records are mutated in place by the
/// enrichment steps and dropped with the context after export.
pub struct PipelineContext {
    // Inputs
    pub pdf: Vec<u8>,
    /// Secondary documents contributing only their order id.
    pub extra_pdfs: Vec<Vec<u8>>,
    pub input: OperatorInput,
    pub today: NaiveDate,

    // Step results
    pub pages: Option<Vec<String>>,
    pub fields: Option<ExtractedFields>,
    pub colour: Option<String>,
    pub items: Option<ItemCodes>,
    pub records: Vec<Record>,
    pub csv: Option<Vec<u8>>,

    // Non-fatal findings
    pub warnings: Vec<PipelineWarning>,
}

impl PipelineContext {
    pub fn new(
        pdf: Vec<u8>,
        extra_pdfs: Vec<Vec<u8>>,
        input: OperatorInput,
        today: NaiveDate,
    ) -> Self {
        Self {
            pdf,
            extra_pdfs,
            input,
            today,
            pages: None,
            fields: None,
            colour: None,
            items: None,
            records: Vec::new(),
            csv: None,
            warnings: Vec::new(),
        }
    }
}
