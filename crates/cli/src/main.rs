//! Rulefit CLI — the main entry point.
//!
//! Commands:
//! - `generate`     — Assemble a rules document for a destination
//! - `destinations` — List known destinations and their constraints
//! - `config`       — Validate / show / locate the configuration
//! - `onboard`      — Write a default configuration file
//! - `completions`  — Emit shell completions

use clap::{CommandFactory, Parser, Subcommand};

mod commands;
mod content;
mod detect;

#[derive(Parser)]
#[command(
    name = "rulefit",
    about = "rulefit — per-assistant rules-document generator",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Assemble a rules document for a destination
    Generate(commands::generate::GenerateArgs),

    /// List known destinations and their constraints
    Destinations,

    /// Configuration management
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },

    /// Write a default configuration file
    Onboard,

    /// Emit shell completions
    Completions {
        /// Target shell
        shell: clap_complete::Shell,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Check the configuration for problems
    Validate,
    /// Print the effective configuration as TOML
    Show,
    /// Print the configuration file path
    Path,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // Initialize tracing
    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(filter)),
        )
        .with_target(false)
        .init();

    match cli.command {
        Commands::Generate(args) => commands::generate::run(args)?,
        Commands::Destinations => commands::destinations::run()?,
        Commands::Config { action } => match action {
            ConfigAction::Validate => commands::config_cmd::validate()?,
            ConfigAction::Show => commands::config_cmd::show()?,
            ConfigAction::Path => commands::config_cmd::path()?,
        },
        Commands::Onboard => commands::onboard::run()?,
        Commands::Completions { shell } => {
            let mut cmd = Cli::command();
            let name = cmd.get_name().to_string();
            clap_complete::generate(shell, &mut cmd, name, &mut std::io::stdout());
        }
    }

    Ok(())
}
