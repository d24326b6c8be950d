//! Value-range descriptors and their parsed form.
//!
//! A descriptor is a raw string from the data dictionary, either an
//! enumeration of allowed tokens ("M;F"), one or more numeric intervals
//! ("0 :: 1200"), a mixture of both, or blank for an unconstrained field.
//! Parsing is pure: the same descriptor always yields the same structure,
//! and the original text is retained for error messages.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Parsed form of a value-range descriptor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValueRange {
    /// Original descriptor text, used verbatim in error records.
    pub descriptor: String,
    /// Allowed literal tokens.
    pub allowed: BTreeSet<String>,
    /// Closed numeric intervals `(low, high)`.
    pub intervals: Vec<(f64, f64)>,
}

impl ValueRange {
    /// Parses a raw descriptor.
    ///
    /// Parts are split on `;` and trimmed. A part of the form
    /// `<num> :: <num>` becomes a closed interval; every other non-empty
    /// part is an enumerated token. A blank descriptor is unconstrained.
    pub fn parse(descriptor: &str) -> Self {
        let mut allowed = BTreeSet::new();
        let mut intervals = Vec::new();
        for part in descriptor.split(';') {
            let part = part.trim();
            if part.is_empty() {
                continue;
            }
            if let Some(interval) = parse_interval(part) {
                intervals.push(interval);
            } else {
                allowed.insert(part.to_string());
            }
        }
        Self {
            descriptor: descriptor.to_string(),
            allowed,
            intervals,
        }
    }

    /// An unconstrained range accepting every value.
    pub fn unconstrained() -> Self {
        Self {
            descriptor: String::new(),
            allowed: BTreeSet::new(),
            intervals: Vec::new(),
        }
    }

    /// Returns true if no constraint was declared.
    pub fn is_unconstrained(&self) -> bool {
        self.allowed.is_empty() && self.intervals.is_empty()
    }

    /// Returns true if the enumerated set is exactly `tokens`.
    pub fn enumerates_exactly(&self, tokens: &[&str]) -> bool {
        self.intervals.is_empty()
            && self.allowed.len() == tokens.len()
            && tokens.iter().all(|token| self.allowed.contains(*token))
    }

    /// Tests membership of a cell value.
    ///
    /// Unconstrained ranges accept everything, including blank cells.
    /// Constrained ranges reject a blank cell unless the enumeration
    /// explicitly contains the empty token.
    pub fn contains(&self, value: &str) -> bool {
        if self.is_unconstrained() {
            return true;
        }
        if self.allowed.contains(value) {
            return true;
        }
        if let Ok(number) = value.trim().parse::<f64>() {
            return self
                .intervals
                .iter()
                .any(|(low, high)| number >= *low && number <= *high);
        }
        false
    }
}

fn parse_interval(part: &str) -> Option<(f64, f64)> {
    let (left, right) = part.split_once("::")?;
    let low = left.trim().parse::<f64>().ok()?;
    let high = right.trim().parse::<f64>().ok()?;
    Some((low, high))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_enumeration() {
        let range = ValueRange::parse("M;F");
        assert!(range.contains("M"));
        assert!(range.contains("F"));
        assert!(!range.contains("X"));
        assert!(!range.contains(""));
        assert!(range.enumerates_exactly(&["M", "F"]));
    }

    #[test]
    fn parses_interval() {
        let range = ValueRange::parse("0 :: 1200");
        assert!(range.contains("0"));
        assert!(range.contains("1200"));
        assert!(range.contains("600.5"));
        assert!(!range.contains("1201"));
        assert!(!range.contains("abc"));
    }

    #[test]
    fn mixed_descriptor_keeps_both() {
        let range = ValueRange::parse("1 :: 10; 999");
        assert!(range.contains("5"));
        assert!(range.contains("999"));
        assert!(!range.contains("11"));
    }

    #[test]
    fn blank_descriptor_is_unconstrained() {
        let range = ValueRange::parse("   ");
        assert!(range.is_unconstrained());
        assert!(range.contains(""));
        assert!(range.contains("anything"));
    }

    #[test]
    fn parse_is_deterministic() {
        assert_eq!(ValueRange::parse("L;R"), ValueRange::parse("L;R"));
    }
}
