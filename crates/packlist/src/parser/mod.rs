pub mod colour;
pub mod fields;
pub mod items;

pub use colour::{ColourExtractor, ColourOutcome};
pub use fields::{ExtractedFields, FieldParser};
pub use items::{ItemCodes, ItemParser};
