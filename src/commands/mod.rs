/*!
Command handlers for the CLI

This module provides command handlers invoked by the CLI entrypoint.

It exposes five top-level command modules:

- `chat`      — Interactive chat session backed by the conversation service
- `check`     — Symptom checker backed by the prediction service
- `firstaid`  — Offline first-aid guide browser
- `emergency` — Emergency contact list and dialer
- `history`   — Saved session management

These handlers are intentionally small and use the library components:
the backend clients, the session repository, and the key-value store.
*/

pub mod chat;
pub mod check;
pub mod emergency;
pub mod firstaid;
pub mod history;
