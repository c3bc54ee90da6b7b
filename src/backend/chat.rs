//! Chat backend client
//!
//! Bridges the local conversation to the external `/chat` service. The
//! contract is deliberately fail-soft: the user always receives a
//! turn-taking bot message, never a raw transport or parse error.

use crate::config::BackendConfig;
use crate::error::{HealthMateError, Result};
use crate::session::{ChatMessage, Sender};

use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Maximum number of conversation turns sent as context
pub const HISTORY_TURNS: usize = 10;

/// Reply substituted when the backend answers without a usable reply field
pub const FALLBACK_REPLY: &str = "Sorry, I couldn’t find an answer.";

/// Reply synthesized on any transport or parse failure
pub const ERROR_REPLY: &str = "An error occurred while contacting HealthMate.";

/// A role-tagged turn in the request transcript
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Turn {
    /// "user" or "assistant"
    pub role: String,
    /// Turn text
    pub content: String,
}

/// Request body for the chat endpoint
#[derive(Debug, Serialize)]
struct ChatRequest {
    message: String,
    history: Vec<Turn>,
}

/// Response body from the chat endpoint
#[derive(Debug, Deserialize)]
struct ChatResponse {
    #[serde(default)]
    reply: Option<String>,
}

/// Client for the conversational backend
pub struct ChatClient {
    client: Client,
    base: String,
    history_turns: usize,
}

impl ChatClient {
    /// Create a new chat client from configuration
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

        tracing::info!("Initialized chat client: base={}", config.chat_url);

        Ok(Self {
            client,
            base: config.chat_url.trim_end_matches('/').to_string(),
            history_turns: HISTORY_TURNS,
        })
    }

    /// Override the number of turns sent as context
    pub fn with_history_turns(mut self, turns: usize) -> Self {
        self.history_turns = turns;
        self
    }

    /// Send the conversation and await exactly one reply
    ///
    /// `conversation` is the active session's messages including the user
    /// message just appended; the most recent turns ([`HISTORY_TURNS`] by
    /// default) are sent as role-tagged context. Any failure is folded into
    /// a synthesized bot-authored error message.
    pub async fn reply(&self, conversation: &[ChatMessage]) -> ChatMessage {
        let message = match conversation.last() {
            Some(last) => last.text.clone(),
            None => return ChatMessage::bot(ERROR_REPLY),
        };

        let request = ChatRequest {
            message,
            history: history_window(conversation, self.history_turns),
        };

        match self.request(&request).await {
            Ok(reply) => ChatMessage::bot(reply),
            Err(e) => {
                tracing::warn!("Chat request failed: {}", e);
                ChatMessage::bot(ERROR_REPLY)
            }
        }
    }

    async fn request(&self, request: &ChatRequest) -> Result<String> {
        let url = format!("{}/chat", self.base);
        let response = self.client.post(&url).json(request).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(
                HealthMateError::Backend(format!("Chat service returned {}", status)).into(),
            );
        }

        let body: ChatResponse = response.json().await?;
        Ok(body
            .reply
            .filter(|r| !r.is_empty())
            .unwrap_or_else(|| FALLBACK_REPLY.to_string()))
    }
}

/// Project the last `limit` messages into role-tagged turns
///
/// Users map to "user" and the bot to "assistant", preserving order.
pub fn history_window(conversation: &[ChatMessage], limit: usize) -> Vec<Turn> {
    let start = conversation.len().saturating_sub(limit);
    conversation[start..]
        .iter()
        .map(|m| Turn {
            role: match m.sender {
                Sender::User => "user".to_string(),
                Sender::Bot => "assistant".to_string(),
            },
            content: m.text.clone(),
        })
        .collect()
}
