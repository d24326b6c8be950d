//! Full validation pipeline: standardize, classify, range-check, suggest.
//!
//! Recomputation is always from the original table; no incremental
//! updates. The report is a pure function of table + overlay + schema.

use std::collections::BTreeMap;

use nds_map::suggest_candidates;
use nds_model::{
    FieldSuggestion, MappingOverlay, RawTable, SchemaField, ValidationReport,
};
use nds_normalize::standardize_rows;

use crate::classify::classify;
use crate::values::validate_values;

/// Runs the full pipeline and assembles the aggregate report.
pub fn run_validation(
    table: &RawTable,
    overlay: &MappingOverlay,
    schema: &[SchemaField],
) -> ValidationReport {
    let mut rows = table.rows.clone();
    let transformations = standardize_rows(&table.header, &mut rows);

    let classification = classify(&table.header, overlay, schema);
    let value_errors = validate_values(&table.header, &rows, overlay, schema);

    let suggestions: BTreeMap<String, Vec<FieldSuggestion>> = classification
        .unknown_fields
        .iter()
        .map(|header| (header.clone(), suggest_candidates(header, schema)))
        .collect();

    let mut report = ValidationReport {
        total_fields: table.header.len(),
        valid_fields: classification.valid_fields,
        missing_required: classification.missing_required,
        missing_recommended: classification.missing_recommended,
        unknown_fields: classification.unknown_fields,
        suggestions,
        value_errors,
        transformations,
        is_template: table.is_template,
        short_name: table.short_name().map(str::to_string),
        is_valid: false,
    };
    report.compute_validity(&overlay.ignored);

    tracing::info!(
        total = report.total_fields,
        valid = report.valid_fields,
        missing_required = report.missing_required.len(),
        unknown = report.unknown_fields.len(),
        value_errors = report.value_errors.len(),
        is_valid = report.is_valid,
        "validation complete"
    );
    report
}
