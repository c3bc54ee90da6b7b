//! Session model and persistence synchronization
//!
//! This module contains the chat data model and the repository that keeps
//! the in-memory conversation converged with the on-device store after
//! every mutation.

pub mod model;
pub mod repository;

pub use model::{ChatMessage, ChatSession, Sender};
pub use repository::SessionRepository;
