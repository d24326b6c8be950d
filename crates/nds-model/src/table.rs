//! Raw submission table produced by ingestion.

use serde::{Deserialize, Serialize};

/// An ingested submission file: one header row plus data rows.
///
/// Produced wholesale by ingestion and replaced wholesale when a new file
/// is loaded; never partially mutated.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawTable {
    /// Column headers, in file order.
    pub header: Vec<String>,
    /// Data rows, each an ordered sequence of cells.
    pub rows: Vec<Vec<String>>,
    /// True if the first file row encoded a shortname/version pair.
    pub is_template: bool,
    /// The template metadata row, when `is_template` is set.
    pub template_row: Option<Vec<String>>,
}

impl RawTable {
    /// Detected template shortname, when the file carried template framing.
    pub fn short_name(&self) -> Option<&str> {
        self.template_row
            .as_ref()
            .and_then(|row| row.first())
            .map(|cell| cell.trim())
    }
}
