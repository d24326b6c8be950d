//! Aggregate validation report and its record types.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Counts of cells actually changed by each standardization rule.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransformationCounts {
    /// Cells rewritten by the handedness rule.
    pub handedness: usize,
    /// Cells rewritten by the binary-flag rule.
    pub binary: usize,
}

/// One data cell found outside its resolved field's allowed range.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValueErrorRecord {
    /// 1-based file row number; the header is row 1, so the first data row
    /// reports as row 2.
    pub row_number: usize,
    /// Header text as it appears in the file.
    pub column_header: String,
    /// Field name after mapping resolution.
    pub field_name: String,
    /// Cell value after standardization.
    pub raw_value: String,
    /// Original range descriptor text.
    pub expected_range: String,
}

/// A candidate canonical field name for an unrecognized header.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldSuggestion {
    pub field_name: String,
    pub similarity: f64,
}

/// Aggregate outcome of validating one submission file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidationReport {
    /// Number of columns observed in the file.
    pub total_fields: usize,
    /// Columns that resolved to a known schema field.
    pub valid_fields: usize,
    /// Required schema fields absent from the file.
    pub missing_required: Vec<String>,
    /// Recommended schema fields absent from the file.
    pub missing_recommended: Vec<String>,
    /// Headers that resolved to no schema field. Membership is unaffected
    /// by ignore status; ignoring only changes validity accounting.
    pub unknown_fields: Vec<String>,
    /// Up to three candidates per unknown header.
    pub suggestions: BTreeMap<String, Vec<FieldSuggestion>>,
    /// Per-cell range failures, in row order.
    pub value_errors: Vec<ValueErrorRecord>,
    /// Standardization counts from the first pass.
    pub transformations: TransformationCounts,
    /// True when the file carried submission-template framing.
    pub is_template: bool,
    /// Detected template shortname, if any.
    pub short_name: Option<String>,
    /// Holds iff missing_required is empty, every unknown field is ignored,
    /// and value_errors is empty.
    pub is_valid: bool,
}

impl ValidationReport {
    /// Recomputes the validity flag from the report body and the ignore set.
    pub fn compute_validity(&mut self, ignored: &std::collections::BTreeSet<String>) {
        let unresolved_unknown = self
            .unknown_fields
            .iter()
            .any(|header| !ignored.contains(header));
        self.is_valid = self.missing_required.is_empty()
            && !unresolved_unknown
            && self.value_errors.is_empty();
    }
}
