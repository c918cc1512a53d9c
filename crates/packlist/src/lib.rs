pub mod classify;
pub mod config;
pub mod error;
pub mod export;
pub mod label;
pub mod parser;
pub mod pipeline;
pub mod price;
pub mod processor;
pub mod record;
pub mod tables;

pub use classify::{Category, CollectionMap};
pub use config::{load_config, Config};
pub use error::{ConfigError, ExtractError, InputError, PacklistError, PriceError, Result, TableError};
pub use pipeline::{OperatorInput, Pipeline, PipelineContext, PipelineError, PipelineWarning};
pub use record::Record;
pub use tables::{MaterialTable, PriceLadder, TableProvider, TableSet, TranslationTable};
