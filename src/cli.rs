//! Command-line interface definition for HealthMate
//!
//! This module defines the CLI structure using clap's derive API,
//! providing commands for chat, the symptom checker, first-aid lookup,
//! emergency contacts, and conversation history.

use clap::{Parser, Subcommand};

/// HealthMate - Terminal health assistant
///
/// Chat with the HealthMate backend, check symptoms against the
/// prediction service, browse first-aid guides, and dial emergency
/// contacts.
#[derive(Parser, Debug, Clone)]
#[command(name = "healthmate")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, default_value = "config/config.yaml")]
    pub config: Option<String>,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,

    /// Command to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands for HealthMate
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Start an interactive chat session
    Chat {
        /// Resume a saved session by its ID
        #[arg(short, long)]
        resume: Option<String>,
    },

    /// Check symptoms against the prediction service
    Check {
        /// Comma-separated symptoms to check non-interactively
        #[arg(short, long)]
        symptoms: Option<String>,

        /// Number of candidate conditions to show
        #[arg(short, long)]
        topk: Option<usize>,
    },

    /// Browse offline first-aid guides
    Firstaid {
        /// Filter topics by title (case-insensitive)
        query: Option<String>,
    },

    /// List emergency contacts or dial a number
    Emergency {
        /// Dial this number through the platform opener
        #[arg(short, long)]
        dial: Option<String>,
    },

    /// Manage saved chat sessions
    History {
        /// History subcommand
        #[command(subcommand)]
        command: HistoryCommand,
    },
}

/// History management subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum HistoryCommand {
    /// List saved sessions
    List,

    /// Print the transcript of a session
    Show {
        /// Session ID
        id: String,
    },

    /// Delete all saved sessions
    Clear,
}

impl Cli {
    /// Parse command line arguments
    ///
    /// # Returns
    ///
    /// Returns the parsed CLI structure
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

impl Default for Cli {
    fn default() -> Self {
        Self {
            config: Some("config/config.yaml".to_string()),
            verbose: false,
            command: Commands::Chat { resume: None },
        }
    }
}
