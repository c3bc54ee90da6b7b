//! HealthMate - Terminal health assistant
//!
//! A CLI companion for everyday health questions. It talks to two external
//! services: a conversational backend for free-form chat and a prediction
//! backend for the symptom checker. Chat sessions and the symptom
//! vocabulary are persisted locally in an embedded key-value store, so
//! history survives restarts and the checker keeps working offline once the
//! vocabulary has been cached.
//!
//! The first-aid library and emergency contact list ship with the binary
//! and need no network at all.

pub mod backend;
pub mod cli;
pub mod commands;
pub mod config;
pub mod emergency;
pub mod error;
pub mod firstaid;
pub mod report;
pub mod session;
pub mod store;
pub mod symptoms;

pub use error::{HealthMateError, Result};
