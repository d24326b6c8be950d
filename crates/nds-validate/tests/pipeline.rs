use nds_ingest::ingest;
use nds_model::{MappingOverlay, RequirementLevel, SchemaField};
use nds_validate::run_validation;

fn schema() -> Vec<SchemaField> {
    vec![
        SchemaField::new("subjectkey", RequirementLevel::Required),
        SchemaField::new("interview_date", RequirementLevel::Required),
        SchemaField::new("handedness", RequirementLevel::Recommended).with_range("L;R"),
        SchemaField::new("consent_flag", RequirementLevel::Recommended).with_range("0;1"),
    ]
}

#[test]
fn template_file_validates_end_to_end() {
    let text = "demographics,02\n\
                subjectkey,interview_date,handedness,consent_flag\n\
                NDAR_1,2024-01-01,right,yes\n\
                NDAR_2,2024-01-02,L,0\n";
    let table = ingest(text, Some("demographics02")).expect("ingest");
    let report = run_validation(&table, &MappingOverlay::new(), &schema());

    assert!(report.is_template);
    assert_eq!(report.short_name.as_deref(), Some("demographics"));
    assert_eq!(report.total_fields, 4);
    assert_eq!(report.valid_fields, 4);
    assert!(report.missing_required.is_empty());
    assert!(report.value_errors.is_empty());
    assert_eq!(report.transformations.handedness, 1);
    assert_eq!(report.transformations.binary, 1);
    assert!(report.is_valid);
}

#[test]
fn unknown_header_gets_suggestions_and_blocks_validity() {
    let text = "subjectkey,interview_date,handedness_\nNDAR_1,2024-01-01,R\n";
    let table = ingest(text, None).expect("ingest");
    let report = run_validation(&table, &MappingOverlay::new(), &schema());

    assert_eq!(report.unknown_fields, vec!["handedness_".to_string()]);
    let candidates = &report.suggestions["handedness_"];
    assert_eq!(candidates.len(), 1);
    assert_eq!(candidates[0].field_name, "handedness");
    assert_eq!(candidates[0].similarity, 1.0);
    assert!(!report.is_valid);
}

#[test]
fn ignoring_last_unknown_restores_validity_but_not_membership() {
    let text = "subjectkey,interview_date,notes\nNDAR_1,2024-01-01,hello\n";
    let table = ingest(text, None).expect("ingest");

    let mut overlay = MappingOverlay::new();
    let before = run_validation(&table, &overlay, &schema());
    assert!(!before.is_valid);

    overlay.toggle_ignored("notes");
    let after = run_validation(&table, &overlay, &schema());
    assert_eq!(after.unknown_fields, vec!["notes".to_string()]);
    assert!(after.is_valid);
}

#[test]
fn value_errors_alone_invalidate() {
    let text = "subjectkey,interview_date,handedness\nNDAR_1,2024-01-01,Q\n";
    let table = ingest(text, None).expect("ingest");
    let report = run_validation(&table, &MappingOverlay::new(), &schema());

    assert!(report.missing_required.is_empty());
    assert!(report.unknown_fields.is_empty());
    assert_eq!(report.value_errors.len(), 1);
    assert_eq!(report.value_errors[0].row_number, 2);
    assert!(!report.is_valid);
}
