//! Schema loading from data-dictionary CSV files.
//!
//! Expected columns: `name`, `aliases` (pipe-separated), `requirement`,
//! `value_range`. Column order is free; lookup is by header name,
//! case-insensitive. Parsing reuses the submission-file line parser so
//! quoted range descriptors containing `;` or `,` survive.

use std::path::Path;

use anyhow::{Context, Result, anyhow};

use nds_ingest::parse_table;
use nds_model::{RequirementLevel, SchemaField};

/// Loads a schema definition from a CSV file.
pub fn load_schema(path: &Path) -> Result<Vec<SchemaField>> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("read schema file: {}", path.display()))?;
    let rows = parse_table(&text)
        .with_context(|| format!("parse schema file: {}", path.display()))?;

    let header = &rows[0];
    let name_idx = column_index(header, "name")?;
    let aliases_idx = column_index(header, "aliases").ok();
    let requirement_idx = column_index(header, "requirement")?;
    let range_idx = column_index(header, "value_range").ok();

    let mut fields = Vec::new();
    for row in &rows[1..] {
        let name = cell(row, name_idx);
        if name.is_empty() {
            continue;
        }
        let requirement: RequirementLevel = cell(row, requirement_idx)
            .parse()
            .unwrap_or(RequirementLevel::Other);
        let aliases = aliases_idx
            .map(|idx| {
                cell(row, idx)
                    .split('|')
                    .map(str::trim)
                    .filter(|alias| !alias.is_empty())
                    .map(str::to_string)
                    .collect()
            })
            .unwrap_or_default();
        let value_range = range_idx
            .map(|idx| cell(row, idx))
            .filter(|descriptor| !descriptor.is_empty());

        fields.push(SchemaField {
            name: name.to_string(),
            aliases,
            requirement,
            value_range: value_range.map(str::to_string),
        });
    }
    tracing::debug!(fields = fields.len(), "loaded schema");
    Ok(fields)
}

fn column_index(header: &[String], name: &str) -> Result<usize> {
    header
        .iter()
        .position(|column| column.trim().eq_ignore_ascii_case(name))
        .ok_or_else(|| anyhow!("schema file is missing a '{name}' column"))
}

fn cell(row: &[String], idx: usize) -> &str {
    row.get(idx).map_or("", |value| value.trim())
}
