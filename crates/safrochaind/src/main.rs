//! # Safrochain Node Daemon
//!
//! ```text
//! safrochaind default-genesis
//! safrochaind validate-genesis genesis.json
//! safrochaind init genesis.json [--force]
//! safrochaind export [--out exported.json]
//! safrochaind query params
//! safrochaind update-params --authority gov --params '{}'
//! ```

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::info;

use safrochaind::logging::init_logging;
use safrochaind::{load_config, Node, StorageBackend};
use x_safrochain::{default_genesis_json, validate_genesis_json};

/// Safrochain node daemon
#[derive(Parser, Debug)]
#[command(name = "safrochaind")]
#[command(about = "Genesis and params tooling for the safrochain module")]
struct Cli {
    /// Node home directory (overrides SAFRO_HOME)
    #[arg(long, global = true)]
    home: Option<PathBuf>,

    /// Storage backend: file or rocksdb (overrides SAFRO_BACKEND)
    #[arg(long, global = true)]
    backend: Option<String>,

    /// Log filter, e.g. info or x_safrochain=debug (overrides SAFRO_LOG)
    #[arg(long, global = true)]
    log_level: Option<String>,

    /// Emit JSON log lines
    #[arg(long, global = true)]
    json_logs: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the default genesis section
    DefaultGenesis,

    /// Parse and validate a genesis section without touching the store
    ValidateGenesis {
        /// Path to the module's genesis JSON
        file: PathBuf,
    },

    /// Initialize module state from a genesis section
    Init {
        /// Path to the module's genesis JSON
        file: PathBuf,

        /// Overwrite an already initialized store
        #[arg(long)]
        force: bool,
    },

    /// Export module state as canonical genesis JSON
    Export {
        /// Write to a file instead of stdout
        #[arg(long)]
        out: Option<PathBuf>,
    },

    /// Read-only queries
    Query {
        #[command(subcommand)]
        query: QueryCommand,
    },

    /// Replace params (governance authority only)
    UpdateParams {
        /// Signer of the update
        #[arg(long)]
        authority: String,

        /// New params as a JSON object
        #[arg(long)]
        params: String,
    },
}

#[derive(Subcommand, Debug)]
enum QueryCommand {
    /// Current module params
    Params,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = load_config()?;
    if let Some(home) = cli.home {
        config.home = home;
    }
    if let Some(backend) = cli.backend {
        config.backend = backend.parse::<StorageBackend>()?;
    }
    if let Some(level) = cli.log_level {
        config.log_level = level;
    }
    config.json_logs |= cli.json_logs;

    init_logging(&config.log_level, config.json_logs)?;

    match cli.command {
        Command::DefaultGenesis => {
            println!("{}", String::from_utf8_lossy(&default_genesis_json()?));
        }
        Command::ValidateGenesis { file } => {
            let bytes =
                std::fs::read(&file).with_context(|| format!("reading {}", file.display()))?;
            let genesis = validate_genesis_json(&bytes)?;
            println!("genesis valid, digest {}", genesis.digest_hex()?);
        }
        Command::Init { file, force } => {
            let bytes =
                std::fs::read(&file).with_context(|| format!("reading {}", file.display()))?;
            let mut node = Node::open(config)?;
            let genesis = node.init_genesis(&bytes, force)?;
            info!(
                "[safrochaind] Genesis applied, digest {}",
                genesis.digest_hex()?
            );
        }
        Command::Export { out } => {
            let mut node = Node::open(config)?;
            let bytes = node.export_genesis()?;
            match out {
                Some(path) => {
                    std::fs::write(&path, &bytes)
                        .with_context(|| format!("writing {}", path.display()))?;
                    info!("[safrochaind] Genesis exported to {}", path.display());
                }
                None => println!("{}", String::from_utf8_lossy(&bytes)),
            }
        }
        Command::Query {
            query: QueryCommand::Params,
        } => {
            let mut node = Node::open(config)?;
            let response = node.query_params()?;
            println!("{}", serde_json::to_string_pretty(&response)?);
        }
        Command::UpdateParams { authority, params } => {
            let mut node = Node::open(config)?;
            let applied = node.update_params(&authority, &params)?;
            println!("{}", serde_json::to_string(&applied)?);
        }
    }

    Ok(())
}
