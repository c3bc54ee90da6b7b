//! Interactive chat session handler
//!
//! Runs a readline-based loop against the conversation service. User input
//! is appended to the active session before the request is sent, so the
//! transcript and the store always agree on what was said; replies arrive
//! as bot messages even when the backend fails.

use crate::backend::ChatClient;
use crate::config::Config;
use crate::error::Result;
use crate::session::{ChatMessage, Sender, SessionRepository};
use crate::store::KvStore;

use colored::Colorize;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;

/// Banner title shown at the start of an empty session
pub const HERO_TITLE: &str = "HealthMate Chat";

/// Banner subtitle shown at the start of an empty session
pub const HERO_SUBTITLE: &str = "Ask anything about your health.";

/// Progress line shown while a reply is pending
pub const TYPING_INDICATOR: &str = "HealthMate is typing...";

/// Special commands available inside the chat loop
///
/// These commands modify the session state or provide information,
/// rather than being sent to the backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChatCommand {
    /// Archive the current session and start a fresh one
    NewSession,

    /// List saved sessions
    ListSessions,

    /// Resume a saved session by ID
    Resume(String),

    /// Delete all saved sessions
    ClearAll,

    /// Display help information
    Help,

    /// Exit the chat session
    Quit,

    /// A slash command that could not be understood; carries the message
    /// to show the user
    Unknown(String),

    /// Not a special command; send the input to the backend
    None,
}

/// Parse a line of chat input for special commands
///
/// Commands are prefixed with `/` and are case-insensitive. Anything else
/// is a regular message.
pub fn parse_chat_command(input: &str) -> ChatCommand {
    if !input.starts_with('/') {
        return ChatCommand::None;
    }

    let mut parts = input.splitn(2, char::is_whitespace);
    let command = parts.next().unwrap_or("").to_lowercase();
    let arg = parts
        .next()
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty());

    match command.as_str() {
        "/new" => ChatCommand::NewSession,
        "/history" | "/sessions" => ChatCommand::ListSessions,
        "/resume" => match arg {
            Some(id) => ChatCommand::Resume(id),
            None => ChatCommand::Unknown(
                "Command /resume requires a session ID\n\nUsage: /resume <ID>".to_string(),
            ),
        },
        "/clear" => ChatCommand::ClearAll,
        "/help" => ChatCommand::Help,
        "/quit" | "/exit" => ChatCommand::Quit,
        other => ChatCommand::Unknown(format!(
            "Unknown command: {}\n\nType '/help' to see available commands",
            other
        )),
    }
}

/// Start an interactive chat session
///
/// # Arguments
///
/// * `config` - Global configuration (consumed)
/// * `resume` - Optional session ID to resume instead of the most recent one
///
/// # Errors
///
/// Returns error if the store cannot be opened or a session write fails;
/// backend failures surface as bot messages, not errors
pub async fn run_chat(config: Config, resume: Option<String>) -> Result<()> {
    tracing::info!("Starting interactive chat session");

    let store = KvStore::open()?;
    let mut repo = SessionRepository::open(store)?;

    if let Some(id) = resume {
        if !repo.resume(&id) {
            println!("{}", format!("No saved session with ID {}", id).yellow());
        }
    }

    let client = ChatClient::new(&config.backend)?.with_history_turns(config.chat.history_turns);

    let mut rl = DefaultEditor::new()?;

    print_banner(&repo);

    loop {
        match rl.readline(&format!("{} ", "you>".cyan().bold())) {
            Ok(line) => {
                let trimmed = line.trim();
                if trimmed.is_empty() {
                    continue;
                }
                let _ = rl.add_history_entry(trimmed);

                match parse_chat_command(trimmed) {
                    ChatCommand::NewSession => {
                        repo.start_new()?;
                        println!("{}\n", "Started a new session.".green());
                        print_hero();
                    }
                    ChatCommand::ListSessions => {
                        print_sessions(&repo);
                    }
                    ChatCommand::Resume(id) => {
                        if repo.resume(&id) {
                            println!("{}\n", format!("Resumed session {}.", id).green());
                            print_transcript(repo.messages());
                        } else {
                            println!("{}\n", format!("No saved session with ID {}", id).yellow());
                        }
                    }
                    ChatCommand::ClearAll => {
                        repo.clear_all()?;
                        println!("{}\n", "Deleted all saved sessions.".green());
                    }
                    ChatCommand::Help => {
                        print_help();
                    }
                    ChatCommand::Quit => {
                        println!("Goodbye!");
                        break;
                    }
                    ChatCommand::Unknown(message) => {
                        println!("{}\n", message.yellow());
                    }
                    ChatCommand::None => {
                        repo.append(ChatMessage::user(trimmed))?;
                        println!("{}", TYPING_INDICATOR.dimmed());

                        let reply = client.reply(repo.messages()).await;
                        println!("{} {}\n", "HealthMate:".green().bold(), reply.text);
                        repo.append(reply)?;
                    }
                }
            }
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => {
                println!("Goodbye!");
                break;
            }
            Err(e) => return Err(e.into()),
        }
    }

    Ok(())
}

fn print_banner(repo: &SessionRepository) {
    if repo.active().is_empty() {
        print_hero();
    } else {
        println!(
            "\n{}",
            format!(
                "Resuming session {} ({} messages). Type /new for a fresh session.",
                repo.active().id,
                repo.active().len()
            )
            .dimmed()
        );
        println!();
        print_transcript(repo.messages());
    }
}

fn print_hero() {
    println!("\n{}", HERO_TITLE.bold());
    println!("{}", HERO_SUBTITLE.dimmed());
    println!("{}\n", "Type /help for commands, /quit to exit.".dimmed());
}

fn print_transcript(messages: &[ChatMessage]) {
    for message in messages {
        match message.sender {
            Sender::User => println!("{} {}", "You:".cyan().bold(), message.text),
            Sender::Bot => println!("{} {}", "HealthMate:".green().bold(), message.text),
        }
    }
    println!();
}

fn print_sessions(repo: &SessionRepository) {
    if repo.sessions().is_empty() {
        println!("{}\n", "No saved sessions.".yellow());
        return;
    }

    println!();
    for session in repo.sessions() {
        let marker = if session.id == repo.active().id {
            "*"
        } else {
            " "
        };
        println!(
            "{} {}  {}  ({} messages)",
            marker,
            session.id.cyan(),
            session.title(),
            session.len()
        );
    }
    println!("\nUse {} to switch sessions.\n", "/resume <ID>".cyan());
}

fn print_help() {
    println!("\n{}", "Available commands:".bold());
    println!("  {}            Start a fresh session", "/new".cyan());
    println!("  {}        List saved sessions", "/history".cyan());
    println!("  {}    Resume a saved session", "/resume <ID>".cyan());
    println!("  {}          Delete all saved sessions", "/clear".cyan());
    println!("  {}           Show this help", "/help".cyan());
    println!("  {}           Exit the chat", "/quit".cyan());
    println!();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_regular_message_is_none() {
        assert_eq!(parse_chat_command("I have a headache"), ChatCommand::None);
    }

    #[test]
    fn test_parse_new_session() {
        assert_eq!(parse_chat_command("/new"), ChatCommand::NewSession);
        assert_eq!(parse_chat_command("/NEW"), ChatCommand::NewSession);
    }

    #[test]
    fn test_parse_list_sessions_aliases() {
        assert_eq!(parse_chat_command("/history"), ChatCommand::ListSessions);
        assert_eq!(parse_chat_command("/sessions"), ChatCommand::ListSessions);
    }

    #[test]
    fn test_parse_resume_with_id() {
        assert_eq!(
            parse_chat_command("/resume 1718000000000"),
            ChatCommand::Resume("1718000000000".to_string())
        );
    }

    #[test]
    fn test_parse_resume_without_id_is_unknown() {
        assert!(matches!(
            parse_chat_command("/resume"),
            ChatCommand::Unknown(_)
        ));
    }

    #[test]
    fn test_parse_quit_aliases() {
        assert_eq!(parse_chat_command("/quit"), ChatCommand::Quit);
        assert_eq!(parse_chat_command("/exit"), ChatCommand::Quit);
    }

    #[test]
    fn test_parse_unknown_command() {
        assert!(matches!(
            parse_chat_command("/frobnicate"),
            ChatCommand::Unknown(_)
        ));
    }

    #[test]
    fn test_slash_in_middle_of_message_is_not_a_command() {
        assert_eq!(parse_chat_command("24/7 pharmacy"), ChatCommand::None);
    }
}
