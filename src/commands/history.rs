//! Saved session management

use crate::cli::HistoryCommand;
use crate::error::Result;
use crate::session::{ChatSession, Sender};
use crate::store::{KvStore, CHAT_SESSIONS_KEY};
use chrono::{TimeZone, Utc};
use colored::Colorize;
use prettytable::{format, Table};

/// Handle history commands
pub fn handle_history(command: HistoryCommand) -> Result<()> {
    let store = KvStore::open()?;

    match command {
        HistoryCommand::List => {
            let sessions: Vec<ChatSession> = store.read(CHAT_SESSIONS_KEY)?.unwrap_or_default();

            if sessions.is_empty() {
                println!("{}", "No saved sessions.".yellow());
                return Ok(());
            }

            let mut table = Table::new();
            table.set_format(*format::consts::FORMAT_BORDERS_ONLY);

            table.add_row(prettytable::row![
                "ID".bold(),
                "Title".bold(),
                "Messages".bold(),
                "Last Updated".bold()
            ]);

            for session in &sessions {
                table.add_row(prettytable::row![
                    session.id.cyan(),
                    session.title(),
                    session.len(),
                    last_updated(session)
                ]);
            }

            println!("\nSaved Sessions:");
            table.printstd();
            println!();
            println!(
                "Use {} to resume a session.",
                "healthmate chat --resume <ID>".cyan()
            );
            println!();
        }
        HistoryCommand::Show { id } => {
            let sessions: Vec<ChatSession> = store.read(CHAT_SESSIONS_KEY)?.unwrap_or_default();

            match sessions.iter().find(|s| s.id == id) {
                Some(session) => {
                    println!("\n{}\n", session.title().bold());
                    for message in &session.messages {
                        match message.sender {
                            Sender::User => {
                                println!("{} {}", "You:".cyan().bold(), message.text)
                            }
                            Sender::Bot => {
                                println!("{} {}", "HealthMate:".green().bold(), message.text)
                            }
                        }
                    }
                    println!();
                }
                None => {
                    println!("{}", format!("No saved session with ID {}", id).yellow());
                }
            }
        }
        HistoryCommand::Clear => {
            store.remove(CHAT_SESSIONS_KEY)?;
            println!("{}", "Deleted all saved sessions.".green());
        }
    }

    Ok(())
}

/// Timestamp of the most recent message, recovered from its millisecond id
fn last_updated(session: &ChatSession) -> String {
    session
        .messages
        .last()
        .and_then(|m| m.id.parse::<i64>().ok())
        .and_then(|ms| Utc.timestamp_millis_opt(ms).single())
        .map(|t| t.format("%Y-%m-%d %H:%M").to_string())
        .unwrap_or_else(|| "-".to_string())
}
