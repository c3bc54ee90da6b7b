//! Triage backend client
//!
//! Fetches the symptom vocabulary and submits prediction requests. Each
//! endpoint's responses are validated into a discriminated outcome at this
//! boundary; callers never poke at loosely typed JSON.

use crate::config::BackendConfig;
use crate::error::{HealthMateError, Result};
use crate::report::TriageReport;
use crate::store::{KvStore, SYMPTOM_VOCAB_KEY};
use crate::symptoms::sections::normalize;

use reqwest::{Client, StatusCode};
use serde::Deserialize;
use std::time::Duration;

/// Error code the backend uses when no input symptom is recognized
const NO_KNOWN_SYMPTOMS: &str = "no_known_symptoms";

/// Message shown when the vocabulary is unavailable from both cache and network
pub const VOCAB_UNAVAILABLE: &str = "Failed to load symptoms. Check your API URL / network.";

/// Outcome of a prediction request
#[derive(Debug)]
pub enum PredictOutcome {
    /// The backend produced a report
    Report(TriageReport),
    /// None of the submitted symptoms were recognized; carries the
    /// unrecognized terms verbatim
    UnknownSymptoms(Vec<String>),
}

/// Response body from the vocabulary endpoint
#[derive(Debug, Deserialize)]
struct SymptomsResponse {
    #[serde(default)]
    symptoms: Vec<String>,
}

/// Error body for unresolvable prediction input
#[derive(Debug, Deserialize)]
struct PredictErrorBody {
    #[serde(default)]
    code: Option<String>,
    #[serde(default)]
    unknown_symptoms: Vec<String>,
}

/// Client for the symptom-prediction backend
pub struct TriageClient {
    client: Client,
    base: String,
}

impl TriageClient {
    /// Create a new triage client from configuration
    ///
    /// # Errors
    ///
    /// Returns error if HTTP client initialization fails
    pub fn new(config: &BackendConfig) -> Result<Self> {
        let mut builder = Client::builder().user_agent("healthmate/0.2.0");
        if let Some(seconds) = config.timeout_seconds {
            builder = builder.timeout(Duration::from_secs(seconds));
        }
        let client = builder.build().map_err(|e| {
            HealthMateError::Backend(format!("Failed to create HTTP client: {}", e))
        })?;

        tracing::info!("Initialized triage client: base={}", config.triage_url);

        Ok(Self {
            client,
            base: config.triage_url.trim_end_matches('/').to_string(),
        })
    }

    /// Fetch the symptom vocabulary, normalized to snake_case keys
    ///
    /// A malformed payload degrades to an empty vocabulary rather than an
    /// error.
    pub async fn symptoms(&self) -> Result<Vec<String>> {
        let url = format!("{}/symptoms", self.base);
        let response = self.client.get(&url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(
                HealthMateError::Backend(format!("Symptom service returned {}", status)).into(),
            );
        }

        let body: SymptomsResponse = response.json().await.unwrap_or(SymptomsResponse {
            symptoms: Vec::new(),
        });
        Ok(body.symptoms.iter().map(|s| normalize(s)).collect())
    }

    /// Submit symptoms for prediction
    ///
    /// A `422` carrying the `no_known_symptoms` code becomes
    /// [`PredictOutcome::UnknownSymptoms`]; any other non-success status is
    /// an error. A success body that fails to decode degrades to an empty
    /// report.
    pub async fn predict(&self, symptoms: &[String], topk: usize) -> Result<PredictOutcome> {
        let url = format!("{}/predict", self.base);
        let response = self
            .client
            .post(&url)
            .json(&serde_json::json!({ "symptoms": symptoms, "topk": topk }))
            .send()
            .await?;

        let status = response.status();
        let raw = response.text().await?;

        if status == StatusCode::UNPROCESSABLE_ENTITY {
            let body: PredictErrorBody = serde_json::from_str(&raw).unwrap_or(PredictErrorBody {
                code: None,
                unknown_symptoms: Vec::new(),
            });
            if body.code.as_deref() == Some(NO_KNOWN_SYMPTOMS) {
                return Ok(PredictOutcome::UnknownSymptoms(body.unknown_symptoms));
            }
        }

        if !status.is_success() {
            return Err(HealthMateError::Backend(format!(
                "Prediction service returned {}: {}",
                status, raw
            ))
            .into());
        }

        let report = match serde_json::from_str(&raw) {
            Ok(report) => report,
            Err(e) => {
                tracing::warn!("Malformed prediction payload, rendering empty report: {}", e);
                TriageReport {
                    results: Vec::new(),
                    triage: None,
                }
            }
        };
        Ok(PredictOutcome::Report(report))
    }
}

/// Load the symptom vocabulary, preferring the network and falling back to
/// the local cache
///
/// A successful fetch rewrites the cache. When the network is unreachable
/// the cached vocabulary keeps the checker usable; with no cache either,
/// this surfaces [`VOCAB_UNAVAILABLE`].
pub async fn load_vocabulary(store: &KvStore, client: &TriageClient) -> Result<Vec<String>> {
    match client.symptoms().await {
        Ok(vocab) if !vocab.is_empty() => {
            store.write(SYMPTOM_VOCAB_KEY, &vocab)?;
            Ok(vocab)
        }
        Ok(_) | Err(_) => {
            let cached: Option<Vec<String>> = store.read(SYMPTOM_VOCAB_KEY)?;
            match cached {
                Some(vocab) if !vocab.is_empty() => {
                    tracing::debug!("Serving {} cached symptoms", vocab.len());
                    Ok(vocab)
                }
                _ => Err(HealthMateError::Backend(VOCAB_UNAVAILABLE.to_string()).into()),
            }
        }
    }
}
