//! Subcommand implementations.

use std::path::Path;

use anyhow::{Context, Result, bail};

use nds_cli::schema::load_schema;
use nds_model::MappingOverlay;
use nds_report::render_summary;
use nds_session::ValidationSession;

use crate::cli::{ExportArgs, SuggestArgs, ValidateArgs};

/// Runs `validate`. Returns true when the file is schema-conformant.
pub fn run_validate(args: &ValidateArgs) -> Result<bool> {
    let schema = load_schema(&args.schema)?;
    let short_name = args.short_name.clone().unwrap_or_default();
    let mut session = ValidationSession::new(schema, short_name);

    let text = read_input(&args.input)?;
    let report = session.load_text(&text)?;
    println_report(report, args.json)?;
    Ok(report.is_valid)
}

/// Runs `suggest`: prints candidates for every unrecognized header.
pub fn run_suggest(args: &SuggestArgs) -> Result<()> {
    let schema = load_schema(&args.schema)?;

    if let Some(proposed) = &args.propose {
        // Recoverable outcome, not an error: surface the existing field.
        match nds_map::check_new_field_name(proposed, &schema) {
            Some(existing) => {
                println!("'{proposed}' conflicts with existing field '{existing}'");
            }
            None => println!("'{proposed}' is available"),
        }
    }

    let text = read_input(&args.input)?;
    let table = nds_ingest::ingest(&text, None)?;
    let report = nds_validate::run_validation(&table, &MappingOverlay::new(), &schema);

    if report.unknown_fields.is_empty() {
        println!("All headers resolved to schema fields.");
        return Ok(());
    }
    for header in &report.unknown_fields {
        let candidates = report
            .suggestions
            .get(header)
            .map_or(&[][..], Vec::as_slice);
        if candidates.is_empty() {
            println!("{header}: no candidates");
        } else {
            let names: Vec<&str> = candidates
                .iter()
                .map(|candidate| candidate.field_name.as_str())
                .collect();
            println!("{header}: {}", names.join(", "));
        }
    }
    Ok(())
}

/// Runs `export`: applies mapping/ignore decisions and writes the
/// corrected template.
pub fn run_export(args: &ExportArgs) -> Result<()> {
    let schema = load_schema(&args.schema)?;
    let mut session = ValidationSession::new(schema, args.short_name.clone());
    let text = read_input(&args.input)?;
    session.load_text(&text)?;

    for pair in &args.map {
        let Some((header, field)) = pair.split_once('=') else {
            bail!("invalid --map value '{pair}', expected HEADER=FIELD");
        };
        session.set_mapping(header.trim(), Some(field.trim()));
    }
    for header in &args.ignore {
        session.toggle_ignored(header.trim());
    }

    let exported = session.export()?;

    match &args.output {
        Some(path) => {
            std::fs::write(path, exported)
                .with_context(|| format!("write template: {}", path.display()))?;
            tracing::info!(path = %path.display(), "wrote corrected template");
        }
        None => println!("{exported}"),
    }
    Ok(())
}

fn read_input(path: &Path) -> Result<String> {
    std::fs::read_to_string(path)
        .with_context(|| format!("read submission file: {}", path.display()))
}

fn println_report(report: &nds_model::ValidationReport, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(report)?);
    } else {
        println!("{}", render_summary(report));
    }
    Ok(())
}
