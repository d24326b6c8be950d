//! Header classification against the schema.
//!
//! Partitions observed headers into required / recommended / unknown
//! relative to the schema. Headers are resolved through the mapping
//! overlay first, so a header mapped onto a required field satisfies that
//! field. Ignore status never affects membership here; it only changes
//! validity accounting.

use std::collections::BTreeSet;

use nds_model::{MappingOverlay, SchemaField};

/// Outcome of classifying one file's headers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Classification {
    /// Required schema fields absent from the resolved headers.
    pub missing_required: Vec<String>,
    /// Recommended schema fields absent from the resolved headers.
    pub missing_recommended: Vec<String>,
    /// Headers (original text) resolving to no required or recommended
    /// field.
    pub unknown_fields: Vec<String>,
    /// Count of headers that resolved to a known field.
    pub valid_fields: usize,
}

/// Classifies headers relative to the schema's requirement levels.
pub fn classify(
    headers: &[String],
    overlay: &MappingOverlay,
    schema: &[SchemaField],
) -> Classification {
    let required: Vec<&str> = schema
        .iter()
        .filter(|field| field.requirement.is_required())
        .map(|field| field.name.as_str())
        .collect();
    let recommended: Vec<&str> = schema
        .iter()
        .filter(|field| field.requirement == nds_model::RequirementLevel::Recommended)
        .map(|field| field.name.as_str())
        .collect();

    let resolved: BTreeSet<&str> = headers
        .iter()
        .map(|header| overlay.resolve(header))
        .collect();
    let known: BTreeSet<&str> = required.iter().chain(recommended.iter()).copied().collect();

    let missing_required = required
        .iter()
        .filter(|name| !resolved.contains(**name))
        .map(|name| (*name).to_string())
        .collect();
    let missing_recommended = recommended
        .iter()
        .filter(|name| !resolved.contains(**name))
        .map(|name| (*name).to_string())
        .collect();

    let mut unknown_fields = Vec::new();
    let mut valid_fields = 0;
    for header in headers {
        if known.contains(overlay.resolve(header)) {
            valid_fields += 1;
        } else {
            unknown_fields.push(header.clone());
        }
    }

    Classification {
        missing_required,
        missing_recommended,
        unknown_fields,
        valid_fields,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nds_model::RequirementLevel;

    fn schema() -> Vec<SchemaField> {
        vec![
            SchemaField::new("subjectkey", RequirementLevel::Required),
            SchemaField::new("interview_date", RequirementLevel::Required),
            SchemaField::new("handedness", RequirementLevel::Recommended),
        ]
    }

    fn headers(names: &[&str]) -> Vec<String> {
        names.iter().map(|name| (*name).to_string()).collect()
    }

    #[test]
    fn reports_missing_and_unknown() {
        let classification = classify(
            &headers(&["subjectkey", "notes"]),
            &MappingOverlay::new(),
            &schema(),
        );
        assert_eq!(
            classification.missing_required,
            vec!["interview_date".to_string()]
        );
        assert_eq!(
            classification.missing_recommended,
            vec!["handedness".to_string()]
        );
        assert_eq!(classification.unknown_fields, vec!["notes".to_string()]);
        assert_eq!(classification.valid_fields, 1);
    }

    #[test]
    fn mapping_satisfies_required_field() {
        let mut overlay = MappingOverlay::new();
        overlay.set_mapping("date_of_interview", Some("interview_date"));
        let classification = classify(
            &headers(&["subjectkey", "date_of_interview"]),
            &overlay,
            &schema(),
        );
        assert!(classification.missing_required.is_empty());
        assert!(classification.unknown_fields.is_empty());
        assert_eq!(classification.valid_fields, 2);
    }

    #[test]
    fn ignore_does_not_change_membership() {
        let mut overlay = MappingOverlay::new();
        overlay.toggle_ignored("notes");
        let classification = classify(
            &headers(&["subjectkey", "interview_date", "notes"]),
            &overlay,
            &schema(),
        );
        assert_eq!(classification.unknown_fields, vec!["notes".to_string()]);
    }
}
