#![deny(unsafe_code)]

//! Cell value standardization.
//!
//! Certain semantically-typed columns carry free-form spellings that must
//! be normalized before range checking: handedness codes and boolean-style
//! flags. Both standardization functions are idempotent, so the
//! range-aware second pass applied during validation is a no-op for cells
//! already rewritten here.

use nds_model::TransformationCounts;

/// Canonicalizes a handedness value.
///
/// Case-insensitive after trimming: right/R -> "R", left/L -> "L",
/// both/ambidextrous/B -> "B". Anything else passes through unchanged.
pub fn standardize_handedness(raw: &str) -> String {
    let trimmed = raw.trim();
    match trimmed.to_uppercase().as_str() {
        "RIGHT" | "R" => "R".to_string(),
        "LEFT" | "L" => "L".to_string(),
        "BOTH" | "AMBIDEXTROUS" | "B" => "B".to_string(),
        _ => raw.to_string(),
    }
}

/// Canonicalizes a boolean-style flag to "0"/"1".
///
/// true/t/yes/y -> "1", false/f/no/n -> "0"; "0" and "1" are already
/// canonical. Anything else passes through unchanged.
pub fn standardize_binary(raw: &str) -> String {
    let trimmed = raw.trim();
    match trimmed.to_uppercase().as_str() {
        "TRUE" | "T" | "YES" | "Y" | "1" => "1".to_string(),
        "FALSE" | "F" | "NO" | "N" | "0" => "0".to_string(),
        _ => raw.to_string(),
    }
}

/// Which standardization rule a column header selects, if any.
///
/// Rules are evaluated in order against the original header text; the
/// first match wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StandardizationRule {
    Handedness,
    Binary,
}

/// Selects the standardization rule for a header, if one applies.
pub fn rule_for_header(header: &str) -> Option<StandardizationRule> {
    if header == "handedness" {
        Some(StandardizationRule::Handedness)
    } else if header.ends_with("_flag") || header.contains("boolean") {
        Some(StandardizationRule::Binary)
    } else {
        None
    }
}

/// Standardizes data rows in place, keyed by the original header text.
///
/// Only cells whose text actually changed count toward the totals.
pub fn standardize_rows(
    header: &[String],
    rows: &mut [Vec<String>],
) -> TransformationCounts {
    let rules: Vec<Option<StandardizationRule>> =
        header.iter().map(|name| rule_for_header(name)).collect();
    let mut counts = TransformationCounts::default();

    for row in rows.iter_mut() {
        for (idx, cell) in row.iter_mut().enumerate() {
            let Some(Some(rule)) = rules.get(idx) else {
                continue;
            };
            let replacement = match rule {
                StandardizationRule::Handedness => standardize_handedness(cell),
                StandardizationRule::Binary => standardize_binary(cell),
            };
            if replacement != *cell {
                match rule {
                    StandardizationRule::Handedness => counts.handedness += 1,
                    StandardizationRule::Binary => counts.binary += 1,
                }
                *cell = replacement;
            }
        }
    }

    if counts.handedness > 0 || counts.binary > 0 {
        tracing::debug!(
            handedness = counts.handedness,
            binary = counts.binary,
            "standardized cell values"
        );
    }
    counts
}
