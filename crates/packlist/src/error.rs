use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PacklistError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Extraction error: {0}")]
    Extract(#[from] ExtractError),

    #[error("Reference table error: {0}")]
    Table(#[from] TableError),

    #[error("Input error: {0}")]
    Input(#[from] InputError),

    #[error("Pipeline error: {0}")]
    Pipeline(#[from] crate::pipeline::PipelineError),

    #[error("Failed to read '{path}': {source}")]
    ReadFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write '{path}': {source}")]
    WriteFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {source}")]
    ReadFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config JSON: {0}")]
    ParseJson(#[from] serde_json::Error),

    #[error("Config validation failed: {message}")]
    Validation { message: String },

    #[error("Schema validation failed: {errors}")]
    SchemaValidation { errors: String },
}

#[derive(Error, Debug)]
pub enum ExtractError {
    /// The byte stream cannot be parsed as a PDF at all.
    #[error("Unreadable PDF: {0}")]
    UnreadablePdf(String),
}

#[derive(Error, Debug)]
pub enum TableError {
    #[error("Failed to fetch table from '{location}': {reason}")]
    Fetch { location: String, reason: String },

    #[error("Failed to parse table CSV: {0}")]
    Parse(String),

    #[error("Table is missing required column '{0}'")]
    MissingColumn(String),

    #[error("Table is empty")]
    Empty,
}

#[derive(Error, Debug)]
pub enum PriceError {
    /// The anchor value is not present verbatim in the anchor column.
    /// Exact match only; there is no nearest-neighbour fallback.
    #[error("Price {value} not found in the {currency} column of the price ladder")]
    PriceNotFound { currency: String, value: String },

    #[error("Price ladder has no '{0}' column")]
    MissingCurrency(String),
}

#[derive(Error, Debug)]
pub enum InputError {
    #[error("Invalid price '{0}': enter a number like 12.50 or 12,50")]
    InvalidPrice(String),

    #[error("Price can't be negative: {0}")]
    NegativePrice(String),

    #[error("Unknown washing code '{0}' (expected 1..15)")]
    UnknownWashingCode(String),
}

pub type Result<T> = std::result::Result<T, PacklistError>;
