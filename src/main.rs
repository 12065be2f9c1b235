//! Alakai - Main entrypoint.
//!
//! Initializes logging, loads configuration, and runs one of the
//! line-oriented front ends over standard input and output.

use alakai_lib::app::{PathSession, TreeSession};
use alakai_lib::config::{self, AlakaiConfig, LogConfig};
use alakai_lib::error::{AlakaiError, AlakaiResult};
use clap::{Parser, Subcommand};
use std::io;
use std::path::PathBuf;
use std::process;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Command line arguments for Alakai.
#[derive(Parser, Debug)]
#[clap(name = "alakai", version, author, about)]
struct Args {
    /// Path to configuration file
    #[clap(short, long, value_parser)]
    config: Option<PathBuf>,

    /// Command to execute
    #[clap(subcommand)]
    command: Option<Command>,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
enum Command {
    /// Run red-black tree commands read from standard input
    Tree,

    /// Read a graph from standard input and answer shortest-path queries
    Paths,

    /// Validate the configuration file
    Validate,

    /// Generate a default configuration file
    GenConfig {
        /// Path to output configuration file
        #[clap(short, long, value_parser)]
        output: PathBuf,
    },
}

/// Initialize the logging system.
///
/// `RUST_LOG` takes precedence over the configured level. Logs go to
/// standard error so they never mix with session output.
fn init_logging(log: &LogConfig) -> AlakaiResult<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&log.level));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_line_number(log.source_location)
        .with_file(log.source_location);

    let result = if log.json {
        tracing::subscriber::set_global_default(builder.json().finish())
    } else {
        tracing::subscriber::set_global_default(builder.finish())
    };

    result.map_err(|e| AlakaiError::Custom(format!("Failed to set global tracing subscriber: {e}")))
}

/// Loads the configuration or exits with a message on standard error.
fn load_config(loader: &config::ConfigLoader) -> AlakaiConfig {
    match loader.load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Configuration error: {e}");
            process::exit(1);
        }
    }
}

/// Main entry point for the application.
fn main() -> AlakaiResult<()> {
    let args = Args::parse();

    let config_loader = config::ConfigLoader::new(args.config.as_deref(), config::ENV_PREFIX);
    let config = match args.command {
        // Generating defaults must not depend on a readable config file.
        Some(Command::GenConfig { .. }) => AlakaiConfig::default(),
        _ => load_config(&config_loader),
    };

    init_logging(&config.log)?;
    alakai_lib::init();

    match args.command.unwrap_or(Command::Tree) {
        Command::Tree => {
            info!("Starting tree session");
            let mut session = TreeSession::new(&config.tree);
            session.run(io::stdin().lock(), io::stdout().lock())
        }
        Command::Paths => {
            info!("Starting shortest-path session");
            let mut session = PathSession::new(&config.graph);
            session.run(io::stdin().lock(), io::stdout().lock())
        }
        Command::Validate => {
            info!("Configuration validated successfully");
            println!("Configuration is valid");
            Ok(())
        }
        Command::GenConfig { output } => {
            info!("Generating default configuration");

            // Create parent directories if they don't exist
            if let Some(parent) = output.parent() {
                std::fs::create_dir_all(parent)?;
            }

            std::fs::write(&output, config.to_toml()?)?;

            info!("Default configuration written to {:?}", output);
            Ok(())
        }
    }
}
