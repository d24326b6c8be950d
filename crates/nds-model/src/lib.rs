#![deny(unsafe_code)]

pub mod error;
pub mod overlay;
pub mod range;
pub mod report;
pub mod schema;
pub mod table;

pub use error::{Result, TemplateError};
pub use overlay::MappingOverlay;
pub use range::ValueRange;
pub use report::{
    FieldSuggestion, TransformationCounts, ValidationReport, ValueErrorRecord,
};
pub use schema::{RequirementLevel, SchemaField};
pub use table::RawTable;
