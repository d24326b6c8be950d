//! Template framing detection and shortname validation.
//!
//! A submission file either starts with a plain header row, or with a
//! template metadata row carrying a shortname/version pair followed by the
//! header. The metadata row is recognized heuristically: at most two cells,
//! all non-blank after trimming.

use nds_model::{RawTable, Result, TemplateError};

use crate::parser::parse_table;

/// Result of framing detection over parsed rows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Framing {
    pub header: Vec<String>,
    pub data_rows: Vec<Vec<String>>,
    pub is_template: bool,
    pub template_row: Option<Vec<String>>,
}

/// Splits parsed rows into template metadata, header, and data rows.
///
/// The first row is treated as template metadata iff it has at most two
/// cells and every cell is non-blank after trimming. A framing that leaves
/// no header row is malformed.
pub fn detect_framing(rows: Vec<Vec<String>>) -> Result<Framing> {
    let first = rows.first().ok_or_else(|| {
        TemplateError::MalformedInput("file contains no rows".to_string())
    })?;
    let is_template =
        first.len() <= 2 && first.iter().all(|cell| !cell.trim().is_empty());

    let mut rows = rows;
    let (template_row, header) = if is_template {
        if rows.len() < 2 {
            return Err(TemplateError::MalformedInput(
                "template file has no header row".to_string(),
            ));
        }
        let template_row = rows.remove(0);
        let header = rows.remove(0);
        (Some(template_row), header)
    } else {
        (None, rows.remove(0))
    };

    tracing::debug!(
        is_template,
        columns = header.len(),
        data_rows = rows.len(),
        "detected submission framing"
    );
    Ok(Framing {
        header,
        data_rows: rows,
        is_template,
        template_row,
    })
}

/// Checks a template metadata row against the expected shortname.
///
/// The expected base is the shortname with its trailing digit run stripped.
/// The row passes iff the base is a string prefix of the first cell and the
/// second cell is a non-empty digit run. Failure is terminal and
/// short-circuits all downstream validation.
pub fn validate_template_shortname(
    template_row: &[String],
    expected_short_name: &str,
) -> Result<()> {
    let expected_base = strip_trailing_digits(expected_short_name);
    let actual_base = template_row.first().map_or("", |cell| cell.trim());
    let actual_version = template_row.get(1).map_or("", |cell| cell.trim());

    let version_ok =
        !actual_version.is_empty() && actual_version.chars().all(|ch| ch.is_ascii_digit());
    if actual_base.starts_with(expected_base) && version_ok {
        return Ok(());
    }
    Err(TemplateError::SchemaMismatch {
        expected: expected_short_name.to_string(),
        found: format!("{actual_base},{actual_version}"),
    })
}

/// Parses text and detects framing, checking the shortname when the file is
/// template-framed and an expectation was supplied.
pub fn ingest(text: &str, expected_short_name: Option<&str>) -> Result<RawTable> {
    let rows = parse_table(text)?;
    let framing = detect_framing(rows)?;
    if let (Some(template_row), Some(expected)) =
        (framing.template_row.as_ref(), expected_short_name)
    {
        validate_template_shortname(template_row, expected)?;
    }
    Ok(RawTable {
        header: framing.header,
        rows: framing.data_rows,
        is_template: framing.is_template,
        template_row: framing.template_row,
    })
}

fn strip_trailing_digits(short_name: &str) -> &str {
    short_name.trim_end_matches(|ch: char| ch.is_ascii_digit())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rows(lines: &[&[&str]]) -> Vec<Vec<String>> {
        lines
            .iter()
            .map(|row| row.iter().map(|cell| (*cell).to_string()).collect())
            .collect()
    }

    #[test]
    fn two_cell_first_row_is_template() {
        let framing =
            detect_framing(rows(&[&["demographics0", "02"], &["a", "b", "c"], &["1", "2", "3"]]))
                .unwrap();
        assert!(framing.is_template);
        assert_eq!(framing.header, vec!["a", "b", "c"]);
        assert_eq!(framing.data_rows.len(), 1);
    }

    #[test]
    fn blank_cell_disables_template_framing() {
        let framing = detect_framing(rows(&[&["demographics0", " "], &["1", "2"]])).unwrap();
        assert!(!framing.is_template);
        assert_eq!(framing.header, vec!["demographics0", " "]);
    }

    #[test]
    fn wide_first_row_is_plain_header() {
        let framing = detect_framing(rows(&[&["a", "b", "c"], &["1", "2", "3"]])).unwrap();
        assert!(!framing.is_template);
        assert_eq!(framing.header, vec!["a", "b", "c"]);
    }

    #[test]
    fn shortname_prefix_and_numeric_version_pass() {
        let row = vec!["demographics01".to_string(), "2".to_string()];
        assert!(validate_template_shortname(&row, "demographics02").is_ok());
    }

    #[test]
    fn non_numeric_version_fails() {
        let row = vec!["demographics".to_string(), "v2".to_string()];
        assert!(matches!(
            validate_template_shortname(&row, "demographics02"),
            Err(TemplateError::SchemaMismatch { .. })
        ));
    }

    #[test]
    fn wrong_base_fails() {
        let row = vec!["imaging".to_string(), "02".to_string()];
        assert!(validate_template_shortname(&row, "demographics02").is_err());
    }

    #[test]
    fn ingest_checks_shortname_only_for_templates() {
        let plain = "subjectkey,notes\nA,B\n";
        let table = ingest(plain, Some("demographics02")).unwrap();
        assert!(!table.is_template);

        let templated = "demographics,02\nsubjectkey,notes\nA,B\n";
        let table = ingest(templated, Some("demographics02")).unwrap();
        assert!(table.is_template);
        assert_eq!(table.short_name(), Some("demographics"));

        let mismatched = "imaging,02\nsubjectkey,notes\nA,B\n";
        assert!(ingest(mismatched, Some("demographics02")).is_err());
    }
}
