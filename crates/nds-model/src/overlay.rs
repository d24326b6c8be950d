//! User mapping and ignore decisions layered over a submission file.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

/// A partial header-to-field mapping plus a set of ignored headers.
///
/// Owned by exactly one validation session. The overlay persists across
/// re-validations of the same file; on file replacement the caller decides
/// whether to reset it.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MappingOverlay {
    /// Observed header -> canonical schema field name.
    pub mapping: BTreeMap<String, String>,
    /// Headers excluded from validity accounting and from export.
    pub ignored: BTreeSet<String>,
}

impl MappingOverlay {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets or clears the mapping for a header. `None` clears.
    pub fn set_mapping(&mut self, header: &str, field: Option<&str>) {
        match field {
            Some(field) => {
                self.mapping.insert(header.to_string(), field.to_string());
            }
            None => {
                self.mapping.remove(header);
            }
        }
    }

    /// Flips the ignore flag for a header.
    pub fn toggle_ignored(&mut self, header: &str) {
        if !self.ignored.remove(header) {
            self.ignored.insert(header.to_string());
        }
    }

    /// Resolves a header to its effective field name: the mapped name when
    /// a mapping exists, otherwise the header itself.
    pub fn resolve<'a>(&'a self, header: &'a str) -> &'a str {
        self.mapping.get(header).map_or(header, String::as_str)
    }

    pub fn is_ignored(&self, header: &str) -> bool {
        self.ignored.contains(header)
    }
}
