//! Line-level parsing of comma-delimited submission text.
//!
//! The parser handles double-quote-enclosed fields and doubled-quote
//! escapes within a quoted field. A quoted field may not span multiple
//! physical lines; rows are split on line breaks before field parsing.

use nds_model::{Result, TemplateError};

/// Splits one physical line into cell strings.
///
/// Commas inside a double-quoted field do not separate cells, and a
/// doubled quote inside a quoted field decodes to one literal quote.
pub fn parse_line(line: &str) -> Vec<String> {
    let mut cells = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;
    let mut chars = line.chars().peekable();

    while let Some(ch) = chars.next() {
        match ch {
            '"' if in_quotes => {
                if chars.peek() == Some(&'"') {
                    chars.next();
                    current.push('"');
                } else {
                    in_quotes = false;
                }
            }
            '"' => in_quotes = true,
            ',' if !in_quotes => {
                cells.push(std::mem::take(&mut current));
            }
            _ => current.push(ch),
        }
    }
    cells.push(current);
    cells
}

/// Parses full file text into rows of cells.
///
/// Blank and whitespace-only lines are discarded. An input with no
/// surviving lines is malformed.
pub fn parse_table(text: &str) -> Result<Vec<Vec<String>>> {
    let rows: Vec<Vec<String>> = text
        .lines()
        .filter(|line| !line.trim().is_empty())
        .map(parse_line)
        .collect();
    if rows.is_empty() {
        return Err(TemplateError::MalformedInput(
            "file contains no data lines".to_string(),
        ));
    }
    tracing::debug!(rows = rows.len(), "parsed submission text");
    Ok(rows)
}
