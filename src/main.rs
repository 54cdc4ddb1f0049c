use std::io::Read;

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use mcpconf::config::{ConfigStore, CONFIG_KEY};
use mcpconf::storage::FileStorage;

/// Manage the persisted MCP server configuration.
#[derive(Parser)]
#[command(name = "mcpconf", version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print the current configuration
    Show,
    /// Replace the configuration with the given JSON (`-` reads stdin)
    Set { json: String },
    /// Reset the configuration to the defaults
    Reset,
    /// Print the path of the file backing the configuration
    Path,
}

fn main() -> anyhow::Result<()> {
    init_tracing();
    let cli = Cli::parse();
    let storage = FileStorage::in_config_dir();

    match cli.command {
        Command::Show => {
            let store = ConfigStore::new(storage);
            println!("{}", store.load().to_json_pretty());
        }
        Command::Set { json } => {
            let text = if json == "-" {
                let mut buffer = String::new();
                std::io::stdin()
                    .read_to_string(&mut buffer)
                    .context("Failed to read configuration from stdin")?;
                buffer
            } else {
                json
            };
            let mut store = ConfigStore::new(storage);
            let config = store.save(&text)?;
            println!("{}", config.to_json_pretty());
        }
        Command::Reset => {
            let mut store = ConfigStore::new(storage);
            let config = store.reset()?;
            println!("{}", config.to_json_pretty());
        }
        Command::Path => {
            println!("{}", storage.path_for(CONFIG_KEY).display());
        }
    }

    Ok(())
}

/// Log to stderr, filtered by `RUST_LOG` (default `warn`).
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
