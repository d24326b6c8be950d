//! Human-readable report rendering for the CLI.

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use nds_model::ValidationReport;

/// Renders the aggregate counts of a report as a bordered table.
pub fn render_summary(report: &ValidationReport) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec![header_cell("Check"), header_cell("Result")]);

    table.add_row(vec![
        Cell::new("Columns observed"),
        Cell::new(report.total_fields).set_alignment(CellAlignment::Right),
    ]);
    table.add_row(vec![
        Cell::new("Recognized fields"),
        Cell::new(report.valid_fields).set_alignment(CellAlignment::Right),
    ]);
    table.add_row(vec![
        Cell::new("Missing required"),
        list_cell(&report.missing_required, Color::Red),
    ]);
    table.add_row(vec![
        Cell::new("Missing recommended"),
        list_cell(&report.missing_recommended, Color::Yellow),
    ]);
    table.add_row(vec![
        Cell::new("Unknown fields"),
        list_cell(&report.unknown_fields, Color::Yellow),
    ]);
    table.add_row(vec![
        Cell::new("Value errors"),
        count_cell(report.value_errors.len(), Color::Red),
    ]);
    table.add_row(vec![
        Cell::new("Cells standardized"),
        Cell::new(format!(
            "{} handedness, {} binary",
            report.transformations.handedness, report.transformations.binary
        )),
    ]);
    if report.is_template {
        table.add_row(vec![
            Cell::new("Template"),
            Cell::new(report.short_name.as_deref().unwrap_or("(unnamed)")),
        ]);
    }
    table.add_row(vec![
        Cell::new("Valid").add_attribute(Attribute::Bold),
        verdict_cell(report.is_valid),
    ]);
    table
}

fn header_cell(text: &str) -> Cell {
    Cell::new(text).add_attribute(Attribute::Bold)
}

fn list_cell(items: &[String], color: Color) -> Cell {
    if items.is_empty() {
        Cell::new("none").fg(Color::Green)
    } else {
        Cell::new(items.join(", ")).fg(color)
    }
}

fn count_cell(count: usize, color: Color) -> Cell {
    if count == 0 {
        Cell::new("0").fg(Color::Green)
    } else {
        Cell::new(count).fg(color)
    }
}

fn verdict_cell(is_valid: bool) -> Cell {
    if is_valid {
        Cell::new("YES").fg(Color::Green).add_attribute(Attribute::Bold)
    } else {
        Cell::new("NO").fg(Color::Red).add_attribute(Attribute::Bold)
    }
}
