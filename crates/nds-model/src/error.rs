use thiserror::Error;

/// Terminal errors for a validation attempt.
///
/// Any of these replaces the report entirely; no partial report is emitted.
/// Per-cell range failures are not errors, they accumulate as
/// [`crate::ValueErrorRecord`]s inside the report.
#[derive(Debug, Error)]
pub enum TemplateError {
    /// File content was empty or could not be parsed into rows.
    #[error("malformed input: {0}")]
    MalformedInput(String),
    /// Template shortname/version did not match the expected structure.
    #[error("template mismatch: expected structure '{expected}', found '{found}'")]
    SchemaMismatch { expected: String, found: String },
    /// File content could not be read, or a stale read was discarded.
    #[error("file acquisition failed: {0}")]
    Acquisition(String),
}

pub type Result<T> = std::result::Result<T, TemplateError>;
