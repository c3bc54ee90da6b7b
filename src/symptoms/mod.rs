//! Symptom selection state
//!
//! Maintains the set of selected symptom keys with per-symptom severity.
//! Membership is a set with insertion order preserved for display; severity
//! defaults to moderate and cycles on request.

pub mod sections;

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Reported severity of a selected symptom
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Barely noticeable
    Mild,
    /// Noticeable but manageable
    #[default]
    Moderate,
    /// Significantly impairing
    Severe,
}

impl Severity {
    /// Advance to the next severity in the cycle
    ///
    /// The cycle is moderate → severe → mild → moderate, so three calls
    /// return to the starting value.
    ///
    /// # Examples
    ///
    /// ```
    /// use healthmate::symptoms::Severity;
    ///
    /// assert_eq!(Severity::Moderate.next(), Severity::Severe);
    /// assert_eq!(Severity::Severe.next(), Severity::Mild);
    /// assert_eq!(Severity::Mild.next(), Severity::Moderate);
    /// ```
    pub fn next(self) -> Self {
        match self {
            Self::Mild => Self::Moderate,
            Self::Moderate => Self::Severe,
            Self::Severe => Self::Mild,
        }
    }

    /// Parse a severity from a string
    pub fn parse_str(s: &str) -> Result<Self, String> {
        match s.to_lowercase().as_str() {
            "mild" => Ok(Self::Mild),
            "moderate" => Ok(Self::Moderate),
            "severe" => Ok(Self::Severe),
            other => Err(format!("Unknown severity: {}", other)),
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Mild => write!(f, "Mild"),
            Self::Moderate => write!(f, "Moderate"),
            Self::Severe => write!(f, "Severe"),
        }
    }
}

/// Set of selected symptoms with per-symptom severity
///
/// Keys are normalized symptom strings. Toggling a symptom on inserts it
/// with the default severity; toggling it off removes both the membership
/// and the severity entry.
#[derive(Debug, Clone, Default)]
pub struct SymptomSelection {
    order: Vec<String>,
    severity: HashMap<String, Severity>,
}

impl SymptomSelection {
    /// Creates an empty selection
    pub fn new() -> Self {
        Self::default()
    }

    /// Toggle a symptom's membership
    ///
    /// Returns true when the symptom is selected after the call.
    pub fn toggle(&mut self, symptom: &str) -> bool {
        if let Some(pos) = self.order.iter().position(|s| s == symptom) {
            self.order.remove(pos);
            self.severity.remove(symptom);
            false
        } else {
            self.order.push(symptom.to_string());
            self.severity.entry(symptom.to_string()).or_default();
            true
        }
    }

    /// True if the symptom is currently selected
    pub fn contains(&self, symptom: &str) -> bool {
        self.severity.contains_key(symptom)
    }

    /// Severity of a symptom, defaulting to moderate for unknown keys
    pub fn severity(&self, symptom: &str) -> Severity {
        self.severity.get(symptom).copied().unwrap_or_default()
    }

    /// Cycle the severity of a selected symptom
    ///
    /// Cycling an unselected symptom is a no-op.
    pub fn cycle_severity(&mut self, symptom: &str) {
        if let Some(entry) = self.severity.get_mut(symptom) {
            *entry = entry.next();
        }
    }

    /// Selected symptoms in insertion order
    pub fn names(&self) -> &[String] {
        &self.order
    }

    /// Number of selected symptoms
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// True when nothing is selected
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Remove all selections and severity entries
    pub fn clear(&mut self) {
        self.order.clear();
        self.severity.clear();
    }

    /// Merge the selection with comma-separated free-text symptoms
    ///
    /// Free-text entries are normalized; the result is deduplicated while
    /// preserving order (selected symptoms first).
    pub fn with_other(&self, other: &str) -> Vec<String> {
        let mut out = self.order.clone();
        for entry in other.split(',') {
            let key = sections::normalize(entry);
            if !key.is_empty() && !out.contains(&key) {
                out.push(key);
            }
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_severity_default_is_moderate() {
        assert_eq!(Severity::default(), Severity::Moderate);
    }

    #[test]
    fn test_severity_three_cycle() {
        for start in [Severity::Mild, Severity::Moderate, Severity::Severe] {
            assert_eq!(start.next().next().next(), start);
        }
        assert_eq!(Severity::Moderate.next(), Severity::Severe);
        assert_eq!(Severity::Severe.next(), Severity::Mild);
        assert_eq!(Severity::Mild.next(), Severity::Moderate);
    }

    #[test]
    fn test_severity_parse_str() {
        assert_eq!(Severity::parse_str("MILD").unwrap(), Severity::Mild);
        assert!(Severity::parse_str("critical").is_err());
    }

    #[test]
    fn test_toggle_on_inserts_with_default_severity() {
        let mut selection = SymptomSelection::new();
        assert!(selection.toggle("fever"));
        assert!(selection.contains("fever"));
        assert_eq!(selection.severity("fever"), Severity::Moderate);
    }

    #[test]
    fn test_toggle_round_trip_restores_prior_state() {
        let mut selection = SymptomSelection::new();
        selection.toggle("fever");
        selection.cycle_severity("fever");

        selection.toggle("cough");
        selection.toggle("cough");

        assert_eq!(selection.names(), &["fever".to_string()]);
        assert!(!selection.contains("cough"));
        // Severity mapping entry removed on toggle-off.
        assert_eq!(selection.severity("cough"), Severity::Moderate);
    }

    #[test]
    fn test_toggle_off_removes_severity_entry() {
        let mut selection = SymptomSelection::new();
        selection.toggle("fever");
        selection.cycle_severity("fever");
        assert_eq!(selection.severity("fever"), Severity::Severe);

        selection.toggle("fever");
        // A fresh toggle-on starts back at the default.
        selection.toggle("fever");
        assert_eq!(selection.severity("fever"), Severity::Moderate);
    }

    #[test]
    fn test_cycle_severity_on_unselected_is_noop() {
        let mut selection = SymptomSelection::new();
        selection.cycle_severity("fever");
        assert!(!selection.contains("fever"));
    }

    #[test]
    fn test_names_preserve_insertion_order() {
        let mut selection = SymptomSelection::new();
        selection.toggle("fever");
        selection.toggle("cough");
        selection.toggle("chills");
        assert_eq!(
            selection.names(),
            &["fever".to_string(), "cough".to_string(), "chills".to_string()]
        );
    }

    #[test]
    fn test_clear_empties_selection() {
        let mut selection = SymptomSelection::new();
        selection.toggle("fever");
        selection.clear();
        assert!(selection.is_empty());
        assert_eq!(selection.len(), 0);
    }

    #[test]
    fn test_with_other_normalizes_and_dedupes() {
        let mut selection = SymptomSelection::new();
        selection.toggle("fever");

        let merged = selection.with_other("Body Ache, chills, fever, ");
        assert_eq!(
            merged,
            vec![
                "fever".to_string(),
                "body_ache".to_string(),
                "chills".to_string()
            ]
        );
    }
}
