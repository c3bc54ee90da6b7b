//! Chat session data model
//!
//! Messages are immutable once created and ordered by insertion. Identity is
//! a timestamp-derived string (millisecond clock), which is not guaranteed
//! globally unique under rapid sends; nothing in the crate relies on
//! uniqueness.

use chrono::Utc;
use serde::{Deserialize, Serialize};

/// Maximum length of a session title derived from its first message
const TITLE_MAX_LEN: usize = 40;

/// Author of a chat message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    /// Message typed by the user
    User,
    /// Message authored by the assistant (including synthesized error replies)
    Bot,
}

/// A single message in a chat session
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    /// Timestamp-derived identifier
    pub id: String,
    /// Message text
    pub text: String,
    /// Who authored the message
    pub sender: Sender,
}

impl ChatMessage {
    /// Creates a new user message
    ///
    /// # Examples
    ///
    /// ```
    /// use healthmate::session::{ChatMessage, Sender};
    ///
    /// let msg = ChatMessage::user("I have a headache");
    /// assert_eq!(msg.sender, Sender::User);
    /// ```
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            id: now_id(),
            text: text.into(),
            sender: Sender::User,
        }
    }

    /// Creates a new bot message
    ///
    /// # Examples
    ///
    /// ```
    /// use healthmate::session::{ChatMessage, Sender};
    ///
    /// let msg = ChatMessage::bot("Drink plenty of fluids.");
    /// assert_eq!(msg.sender, Sender::Bot);
    /// ```
    pub fn bot(text: impl Into<String>) -> Self {
        Self {
            id: now_id(),
            text: text.into(),
            sender: Sender::Bot,
        }
    }

    /// Creates a message with an explicit id (used by tests and fixtures)
    pub fn with_id(id: impl Into<String>, text: impl Into<String>, sender: Sender) -> Self {
        Self {
            id: id.into(),
            text: text.into(),
            sender,
        }
    }
}

/// An ordered list of messages with a timestamp-derived identity
///
/// Sessions move through three states: empty (hero banner shown), active
/// (messages present), and archived (a new session has replaced them as the
/// active handle). The state is implicit in where the session sits in the
/// repository; the struct itself is just data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatSession {
    /// Timestamp-derived identifier
    pub id: String,
    /// Messages in insertion order
    pub messages: Vec<ChatMessage>,
}

impl ChatSession {
    /// Creates a new empty session
    pub fn new() -> Self {
        Self {
            id: now_id(),
            messages: Vec::new(),
        }
    }

    /// Returns true if the session has no messages
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// Returns the number of messages in the session
    pub fn len(&self) -> usize {
        self.messages.len()
    }

    /// Title for history listings: the first message truncated to 40 chars
    ///
    /// # Examples
    ///
    /// ```
    /// use healthmate::session::ChatSession;
    ///
    /// let session = ChatSession::new();
    /// assert_eq!(session.title(), "Untitled Chat");
    /// ```
    pub fn title(&self) -> String {
        match self.messages.first() {
            Some(first) if !first.text.is_empty() => {
                first.text.chars().take(TITLE_MAX_LEN).collect()
            }
            _ => "Untitled Chat".to_string(),
        }
    }
}

impl Default for ChatSession {
    fn default() -> Self {
        Self::new()
    }
}

/// Millisecond-clock identifier for messages and sessions
fn now_id() -> String {
    Utc::now().timestamp_millis().to_string()
}
