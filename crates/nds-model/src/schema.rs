//! Schema field definitions.
//!
//! A schema is an ordered sequence of named fields, each carrying a
//! requirement level and an optional raw value-range descriptor.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Requirement level of a schema field.
///
/// Data dictionaries mark each field as required, recommended, or something
/// looser (conditional, optional). Anything that is not required or
/// recommended collapses to `Other` for classification purposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RequirementLevel {
    /// Must be present in every submission.
    Required,
    /// Should be present when the data was collected.
    Recommended,
    /// Conditional, optional, or otherwise unconstrained.
    Other,
}

impl RequirementLevel {
    /// Returns the canonical name as it appears in data dictionaries.
    pub fn as_str(&self) -> &'static str {
        match self {
            RequirementLevel::Required => "Required",
            RequirementLevel::Recommended => "Recommended",
            RequirementLevel::Other => "Other",
        }
    }

    /// Returns true if a submission without this field is invalid.
    pub fn is_required(&self) -> bool {
        matches!(self, RequirementLevel::Required)
    }
}

impl fmt::Display for RequirementLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for RequirementLevel {
    type Err = String;

    /// Parse a requirement string (case-insensitive). Unrecognized levels
    /// map to `Other` rather than failing, matching dictionary files that
    /// carry values like "Conditional".
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_uppercase();
        match normalized.as_str() {
            "REQUIRED" => Ok(RequirementLevel::Required),
            "RECOMMENDED" => Ok(RequirementLevel::Recommended),
            _ => Ok(RequirementLevel::Other),
        }
    }
}

/// A single named column definition within a schema.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SchemaField {
    /// Canonical field name, unique within the schema.
    pub name: String,
    /// Alternative names this field is known by.
    #[serde(default)]
    pub aliases: Vec<String>,
    /// Requirement level for submission validity.
    pub requirement: RequirementLevel,
    /// Raw value-range descriptor (e.g. "M;F" or "0 :: 1200"), if any.
    pub value_range: Option<String>,
}

impl SchemaField {
    /// Creates a field with no aliases and no range constraint.
    pub fn new(name: impl Into<String>, requirement: RequirementLevel) -> Self {
        Self {
            name: name.into(),
            aliases: Vec::new(),
            requirement,
            value_range: None,
        }
    }

    /// Sets the raw value-range descriptor.
    #[must_use]
    pub fn with_range(mut self, descriptor: impl Into<String>) -> Self {
        self.value_range = Some(descriptor.into());
        self
    }

    /// Sets the alias list.
    #[must_use]
    pub fn with_aliases(mut self, aliases: Vec<String>) -> Self {
        self.aliases = aliases;
        self
    }

    /// Returns true if `name` matches this field's canonical name or one of
    /// its aliases.
    pub fn answers_to(&self, name: &str) -> bool {
        self.name == name || self.aliases.iter().any(|alias| alias == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn requirement_from_str() {
        assert_eq!(
            "required".parse::<RequirementLevel>().unwrap(),
            RequirementLevel::Required
        );
        assert_eq!(
            "RECOMMENDED".parse::<RequirementLevel>().unwrap(),
            RequirementLevel::Recommended
        );
        assert_eq!(
            "Conditional".parse::<RequirementLevel>().unwrap(),
            RequirementLevel::Other
        );
    }

    #[test]
    fn answers_to_aliases() {
        let field = SchemaField::new("subjectkey", RequirementLevel::Required)
            .with_aliases(vec!["guid".to_string()]);
        assert!(field.answers_to("subjectkey"));
        assert!(field.answers_to("guid"));
        assert!(!field.answers_to("subject"));
    }
}
