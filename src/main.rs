//! HealthMate - Terminal health assistant
//!
#![doc = "HealthMate - Terminal health assistant"]
#![doc = "Main entry point for the HealthMate application."]

use anyhow::Result;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use healthmate::cli::{Cli, Commands};
use healthmate::commands;
use healthmate::config::Config;

#[tokio::main]
async fn main() -> Result<()> {
    // Parse command line arguments
    let cli = Cli::parse_args();

    // Initialize tracing
    init_tracing(cli.verbose);

    // Load configuration
    let config_path = cli.config.as_deref().unwrap_or("config/config.yaml");
    let config = Config::load(config_path)?;

    // Validate configuration
    config.validate()?;

    // Execute command
    match cli.command {
        Commands::Chat { resume } => {
            if let Some(id) = &resume {
                tracing::debug!("Resuming session: {}", id);
            }
            commands::chat::run_chat(config, resume).await?;
            Ok(())
        }
        Commands::Check { symptoms, topk } => {
            commands::check::run_check(config, symptoms, topk).await?;
            Ok(())
        }
        Commands::Firstaid { query } => {
            commands::firstaid::handle_firstaid(query)?;
            Ok(())
        }
        Commands::Emergency { dial } => {
            commands::emergency::handle_emergency(dial)?;
            Ok(())
        }
        Commands::History { command } => {
            tracing::info!("Starting history command");
            commands::history::handle_history(command)?;
            Ok(())
        }
    }
}

/// Initialize tracing subscriber with environment filter
fn init_tracing(verbose: bool) {
    let default_filter = if verbose {
        "healthmate=debug"
    } else {
        "healthmate=info"
    };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}
