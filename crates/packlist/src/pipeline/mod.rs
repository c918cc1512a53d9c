pub mod context;
pub mod error;
pub mod input;
pub mod runner;

pub use context::PipelineContext;
pub use error::{PipelineError, PipelineWarning};
pub use input::OperatorInput;
pub use runner::Pipeline;
