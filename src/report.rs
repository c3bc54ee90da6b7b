//! Triage report types and rendering helpers
//!
//! The prediction backend owns all inference; the client treats its reply as
//! opaque data to render. Absent fields default rather than failing, so a
//! sparse payload still produces a usable report.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Triage level assigned by the backend
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TriageLevel {
    /// Self-care is sufficient
    Green,
    /// See a clinician soon
    Amber,
    /// Emergency signs present
    Red,
}

impl TriageLevel {
    /// Fixed advisory text for this level
    ///
    /// # Examples
    ///
    /// ```
    /// use healthmate::report::TriageLevel;
    ///
    /// assert!(TriageLevel::Amber.advisory().contains("24–48 hours"));
    /// ```
    pub fn advisory(&self) -> &'static str {
        match self {
            Self::Green => "Monitor symptoms and follow self-care advice.",
            Self::Amber => "Book an appointment with a clinician within 24–48 hours.",
            Self::Red => {
                "Emergency signs present. Go to the ER immediately or call local emergency services."
            }
        }
    }
}

impl fmt::Display for TriageLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Green => write!(f, "Green"),
            Self::Amber => write!(f, "Amber"),
            Self::Red => write!(f, "Red"),
        }
    }
}

/// Triage block of a prediction response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Triage {
    /// Assigned level
    pub level: TriageLevel,
    /// Human-readable contributing symptoms, most severe first
    #[serde(default)]
    pub reasons: Vec<String>,
}

/// A candidate condition returned by the backend
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Condition {
    /// Condition name
    #[serde(default)]
    pub disease: String,
    /// Probability as a percentage (e.g. 72.3)
    #[serde(default)]
    pub probability: f64,
    /// Short description
    #[serde(default)]
    pub description: String,
    /// Suggested precautions
    #[serde(default)]
    pub precautions: Vec<String>,
}

/// Full prediction response body
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TriageReport {
    /// Candidate conditions, most probable first
    #[serde(default)]
    pub results: Vec<Condition>,
    /// Triage assessment, when present
    #[serde(default)]
    pub triage: Option<Triage>,
}

impl TriageReport {
    /// The top `n` candidate conditions
    pub fn top(&self, n: usize) -> &[Condition] {
        &self.results[..self.results.len().min(n)]
    }
}

/// Format a percentage probability to one decimal place
///
/// # Examples
///
/// ```
/// use healthmate::report::format_probability;
///
/// assert_eq!(format_probability(72.3), "72.3%");
/// assert_eq!(format_probability(96.0), "96.0%");
/// ```
pub fn format_probability(probability: f64) -> String {
    format!("{:.1}%", probability)
}

/// Guided message for an unknown-symptoms rejection
///
/// Joins the unrecognized terms verbatim; falls back to "your inputs" when
/// the backend did not name any.
///
/// # Examples
///
/// ```
/// use healthmate::report::unknown_symptoms_message;
///
/// let msg = unknown_symptoms_message(&["foo".to_string(), "bar".to_string()]);
/// assert_eq!(
///     msg,
///     "Sorry, I don't have information on foo, bar in the provided context."
/// );
/// ```
pub fn unknown_symptoms_message(unknown: &[String]) -> String {
    let listed = if unknown.is_empty() {
        "your inputs".to_string()
    } else {
        unknown.join(", ")
    };
    format!(
        "Sorry, I don't have information on {} in the provided context.",
        listed
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_triage_level_parses_from_backend_strings() {
        let level: TriageLevel = serde_json::from_str("\"Amber\"").unwrap();
        assert_eq!(level, TriageLevel::Amber);
        let level: TriageLevel = serde_json::from_str("\"Red\"").unwrap();
        assert_eq!(level, TriageLevel::Red);
    }

    #[test]
    fn test_advisory_texts_are_fixed() {
        assert_eq!(
            TriageLevel::Green.advisory(),
            "Monitor symptoms and follow self-care advice."
        );
        assert_eq!(
            TriageLevel::Amber.advisory(),
            "Book an appointment with a clinician within 24–48 hours."
        );
        assert!(TriageLevel::Red.advisory().starts_with("Emergency signs present."));
    }

    #[test]
    fn test_probability_formats_to_one_decimal() {
        assert_eq!(format_probability(72.3), "72.3%");
        assert_eq!(format_probability(5.0), "5.0%");
        assert_eq!(format_probability(99.95), "100.0%");
    }

    #[test]
    fn test_report_parses_backend_payload() {
        let json = r#"{
            "results": [
                {"disease": "Flu", "probability": 72.3,
                 "description": "Viral infection", "precautions": ["rest", "fluids"]}
            ],
            "triage": {"level": "Amber", "reasons": ["High Fever"]}
        }"#;
        let report: TriageReport = serde_json::from_str(json).unwrap();

        assert_eq!(report.results.len(), 1);
        assert_eq!(report.results[0].disease, "Flu");
        assert_eq!(format_probability(report.results[0].probability), "72.3%");
        let triage = report.triage.expect("triage present");
        assert_eq!(triage.level, TriageLevel::Amber);
        assert_eq!(triage.level.advisory(),
            "Book an appointment with a clinician within 24–48 hours.");
    }

    #[test]
    fn test_report_defaults_absent_fields() {
        let report: TriageReport = serde_json::from_str("{}").unwrap();
        assert!(report.results.is_empty());
        assert!(report.triage.is_none());

        let json = r#"{"results": [{"disease": "Flu"}]}"#;
        let report: TriageReport = serde_json::from_str(json).unwrap();
        assert_eq!(report.results[0].probability, 0.0);
        assert!(report.results[0].description.is_empty());
        assert!(report.results[0].precautions.is_empty());
    }

    #[test]
    fn test_result_entry_without_disease_still_decodes() {
        let json = r#"{"results": [{"probability": 12.5}], "triage": {"level": "Green"}}"#;
        let report: TriageReport = serde_json::from_str(json).unwrap();
        assert_eq!(report.results.len(), 1);
        assert_eq!(report.results[0].disease, "");
        assert_eq!(format_probability(report.results[0].probability), "12.5%");
        assert!(report.triage.is_some());
    }

    #[test]
    fn test_top_caps_at_available_results() {
        let report: TriageReport = serde_json::from_str(
            r#"{"results": [{"disease": "A"}, {"disease": "B"}]}"#,
        )
        .unwrap();
        assert_eq!(report.top(3).len(), 2);
        assert_eq!(report.top(1).len(), 1);
        assert_eq!(report.top(1)[0].disease, "A");
    }

    #[test]
    fn test_unknown_symptoms_message_exact() {
        let msg = unknown_symptoms_message(&["foo".to_string(), "bar".to_string()]);
        assert_eq!(
            msg,
            "Sorry, I don't have information on foo, bar in the provided context."
        );
    }

    #[test]
    fn test_unknown_symptoms_message_fallback() {
        let msg = unknown_symptoms_message(&[]);
        assert_eq!(
            msg,
            "Sorry, I don't have information on your inputs in the provided context."
        );
    }
}
