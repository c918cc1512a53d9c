use thiserror::Error;

#[derive(Error, Debug)]
pub enum PipelineError {
    #[error("Document extraction failed: {0}")]
    Extract(#[from] crate::error::ExtractError),

    /// Fatal to record construction; the pass produces no records.
    #[error("PDF must have at least 3 pages (found {pages})")]
    InsufficientPages { pages: usize },

    #[error("Invalid operator input: {0}")]
    Input(#[from] crate::error::InputError),

    /// Export is gated on a successful lookup; the price-dependent columns
    /// are never left blank silently.
    #[error("Price lookup failed: {0}")]
    Price(#[from] crate::error::PriceError),
}

/// Non-fatal conditions surfaced to the operator alongside the result.
#[derive(Debug, Clone, PartialEq)]
pub enum PipelineWarning {
    /// The colour needs an operator-supplied value; until one is given the
    /// records carry "UNKNOWN".
    ColourRequiresManualInput,
    /// SKU and barcode counts differ; the longer tail was dropped by the
    /// positional-pairing policy.
    UnpairedItems { skus: usize, barcodes: usize },
    /// The selected product has no row in the translation table; the label
    /// column stays empty.
    ProductNotInTranslations {
        department: String,
        product_name: String,
    },
    /// Material composition percentages add up past 100.
    CompositionOver100 { total: f64 },
}
