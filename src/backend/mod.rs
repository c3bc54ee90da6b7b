//! HTTP clients for the external HealthMate services
//!
//! The chat and triage backends are separate services; each gets its own
//! client with responses validated into typed outcomes at the boundary.

pub mod chat;
pub mod triage;

pub use chat::{ChatClient, ERROR_REPLY, FALLBACK_REPLY, HISTORY_TURNS};
pub use triage::{load_vocabulary, PredictOutcome, TriageClient, VOCAB_UNAVAILABLE};
