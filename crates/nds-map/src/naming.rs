//! Duplicate detection for user-coined canonical field names.

use nds_model::SchemaField;

/// Checks a proposed new canonical field name against the schema.
///
/// Returns the existing field's name when the proposal collides with it
/// directly or under a trailing-"s" plural/singular variant. This is a
/// recoverable validation outcome, not an error: the caller surfaces the
/// matching field for selection and keeps operating.
pub fn check_new_field_name(proposed: &str, schema: &[SchemaField]) -> Option<String> {
    let proposed = proposed.trim();
    if proposed.is_empty() {
        return None;
    }
    let variants = name_variants(proposed);
    schema
        .iter()
        .find(|field| {
            let existing = name_variants(&field.name);
            variants.iter().any(|v| existing.contains(v))
        })
        .map(|field| field.name.clone())
}

fn name_variants(name: &str) -> Vec<String> {
    let lower = name.to_lowercase();
    let mut variants = vec![lower.clone(), format!("{lower}s")];
    if let Some(singular) = lower.strip_suffix('s') {
        variants.push(singular.to_string());
    }
    variants
}

#[cfg(test)]
mod tests {
    use super::*;
    use nds_model::RequirementLevel;

    fn schema() -> Vec<SchemaField> {
        vec![SchemaField::new("comments", RequirementLevel::Other)]
    }

    #[test]
    fn plural_variant_collides() {
        assert_eq!(
            check_new_field_name("comment", &schema()),
            Some("comments".to_string())
        );
        assert_eq!(
            check_new_field_name("Comments", &schema()),
            Some("comments".to_string())
        );
    }

    #[test]
    fn fresh_name_passes() {
        assert_eq!(check_new_field_name("biomarker", &schema()), None);
        assert_eq!(check_new_field_name("  ", &schema()), None);
    }
}
