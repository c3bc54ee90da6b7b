//! Session repository: keeps the in-memory conversation synchronized with
//! the persistent store
//!
//! The persisted document under [`CHAT_SESSIONS_KEY`](crate::store::CHAT_SESSIONS_KEY)
//! is the full ordered collection of sessions; new sessions are appended,
//! never inserted. The repository holds a mirror of that collection plus an
//! explicit active-session handle: the working copy and, once committed, its
//! position in the collection. Tracking the position (not the id) keeps the
//! handle unambiguous even when timestamp-derived session ids collide under
//! rapid session turnover.
//!
//! Every mutation is applied to the in-memory model first (so callers can
//! render it immediately) and then committed as a whole-document write. The
//! commit is awaited: mutation methods return the write result instead of
//! firing and forgetting.

use crate::error::Result;
use crate::session::model::{ChatMessage, ChatSession};
use crate::store::{KvStore, CHAT_SESSIONS_KEY};

/// Synchronizes an active chat session with the persisted session collection
pub struct SessionRepository {
    store: KvStore,
    /// Mirror of the persisted collection, insertion-ordered
    sessions: Vec<ChatSession>,
    /// Working copy of the active session; enters `sessions` on its first
    /// committed message
    active: ChatSession,
    /// Position of the active session within `sessions`, `None` until its
    /// first commit
    active_index: Option<usize>,
}

impl SessionRepository {
    /// Open the repository, hydrating from the store
    ///
    /// An absent or undecodable session collection is treated as empty. The
    /// active handle starts at the last persisted session, or a fresh empty
    /// session when none exist.
    pub fn open(store: KvStore) -> Result<Self> {
        let sessions: Vec<ChatSession> = store.read(CHAT_SESSIONS_KEY)?.unwrap_or_default();
        let active = sessions.last().cloned().unwrap_or_default();
        let active_index = sessions.len().checked_sub(1);

        tracing::debug!(
            "Hydrated {} stored sessions, active session {}",
            sessions.len(),
            active.id
        );

        Ok(Self {
            store,
            sessions,
            active,
            active_index,
        })
    }

    /// The active session
    pub fn active(&self) -> &ChatSession {
        &self.active
    }

    /// Messages of the active session, in insertion order
    pub fn messages(&self) -> &[ChatMessage] {
        &self.active.messages
    }

    /// The persisted session collection, oldest first
    pub fn sessions(&self) -> &[ChatSession] {
        &self.sessions
    }

    /// Append a message to the active session and commit
    ///
    /// The in-memory model is updated before the store write, so the caller
    /// sees the message even if the commit fails.
    pub fn append(&mut self, message: ChatMessage) -> Result<()> {
        self.active.messages.push(message);
        self.commit()
    }

    /// Archive a non-empty active session and start a fresh one
    ///
    /// A still-empty active session is simply given a fresh identity; empty
    /// sessions are never persisted.
    pub fn start_new(&mut self) -> Result<()> {
        if !self.active.is_empty() {
            self.commit()?;
        }
        self.active = ChatSession::new();
        self.active_index = None;
        Ok(())
    }

    /// Delete the entire persisted collection and reset in-memory state
    pub fn clear_all(&mut self) -> Result<()> {
        self.store.remove(CHAT_SESSIONS_KEY)?;
        self.sessions.clear();
        self.active = ChatSession::new();
        self.active_index = None;
        Ok(())
    }

    /// Make the stored session with the given id the active handle
    ///
    /// Returns false when no such session exists. Messages appended after a
    /// resume update that exact session in place; the collection's order is
    /// unchanged.
    pub fn resume(&mut self, id: &str) -> bool {
        match self.sessions.iter().position(|s| s.id == id) {
            Some(pos) => {
                self.active = self.sessions[pos].clone();
                self.active_index = Some(pos);
                true
            }
            None => false,
        }
    }

    /// Write the whole collection, folding the active session in at its
    /// tracked position
    ///
    /// A not-yet-committed active session is appended and its position
    /// recorded; an empty one is never persisted.
    fn commit(&mut self) -> Result<()> {
        match self.active_index {
            Some(pos) => self.sessions[pos] = self.active.clone(),
            None if !self.active.is_empty() => {
                self.sessions.push(self.active.clone());
                self.active_index = Some(self.sessions.len() - 1);
            }
            None => {}
        }
        self.store.write(CHAT_SESSIONS_KEY, &self.sessions)
    }
}
