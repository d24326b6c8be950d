//! Per-cell range validation.
//!
//! Each schema field's range descriptor is parsed once and cached. Before
//! membership testing, every cell gets a second, range-aware
//! standardization pass keyed on the shape of the effective field's range
//! rather than the header text; both standardization functions are
//! idempotent, so cells already rewritten by the header-keyed first pass
//! are untouched.

use std::collections::BTreeMap;

use nds_model::{MappingOverlay, SchemaField, ValueErrorRecord, ValueRange};
use nds_normalize::{standardize_binary, standardize_handedness};

/// Validates all data cells against their resolved fields' ranges.
///
/// Range failures accumulate; they never stop processing of later cells
/// or rows. Ignored headers are skipped. Row numbers are 1-based counting
/// the header as row 1, so the first data row reports as row 2.
pub fn validate_values(
    header: &[String],
    rows: &[Vec<String>],
    overlay: &MappingOverlay,
    schema: &[SchemaField],
) -> Vec<ValueErrorRecord> {
    let ranges: BTreeMap<&str, ValueRange> = schema
        .iter()
        .filter_map(|field| {
            let descriptor = field.value_range.as_deref()?;
            Some((field.name.as_str(), ValueRange::parse(descriptor)))
        })
        .collect();

    let mut errors = Vec::new();
    for (row_idx, row) in rows.iter().enumerate() {
        for (col_idx, cell) in row.iter().enumerate() {
            let Some(column_header) = header.get(col_idx) else {
                continue;
            };
            if overlay.is_ignored(column_header) {
                continue;
            }
            let field_name = overlay.resolve(column_header);
            let Some(range) = ranges.get(field_name) else {
                continue;
            };
            if range.is_unconstrained() {
                continue;
            }
            let value = restandardize_for_range(cell, range);
            if !range.contains(&value) {
                errors.push(ValueErrorRecord {
                    row_number: row_idx + 2,
                    column_header: column_header.clone(),
                    field_name: field_name.to_string(),
                    raw_value: value,
                    expected_range: range.descriptor.clone(),
                });
            }
        }
    }
    if !errors.is_empty() {
        tracing::debug!(count = errors.len(), "range validation found value errors");
    }
    errors
}

/// Range-shape-keyed standardization: an enumeration of exactly {L, R}
/// gets the handedness rule, exactly {0, 1} the binary rule.
fn restandardize_for_range(cell: &str, range: &ValueRange) -> String {
    if range.enumerates_exactly(&["L", "R"]) {
        standardize_handedness(cell)
    } else if range.enumerates_exactly(&["0", "1"]) {
        standardize_binary(cell)
    } else {
        cell.to_string()
    }
}
