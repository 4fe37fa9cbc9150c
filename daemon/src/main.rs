//! stakecast daemon — entry point for running a stakecast node.

use clap::Parser;
use stakecast_node::{init_logging, LogFormat, Node, NodeConfig};
use stakecast_rpc::RpcServer;
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Parser)]
#[command(name = "stakecast-daemon", about = "stakecast proof-of-stake node daemon")]
struct Cli {
    /// Port for the HTTP surface.
    #[arg(long, env = "PORT")]
    port: Option<u16>,

    /// Peer addresses to broadcast blocks to (comma-separated:
    /// "3002,3003" for local peers, or "host:port,host:port").
    #[arg(long, env = "PEERS", value_delimiter = ',')]
    peers: Vec<String>,

    /// Validator identity used while the staking pool is empty.
    /// Defaults to "Validator-{port}".
    #[arg(long, env = "VALIDATOR")]
    validator: Option<String>,

    /// Log level: "trace", "debug", "info", "warn", "error".
    #[arg(long, env = "STAKECAST_LOG_LEVEL")]
    log_level: Option<String>,

    /// Log format: "human" or "json".
    #[arg(long, env = "STAKECAST_LOG_FORMAT")]
    log_format: Option<String>,

    /// Path to a TOML configuration file. If provided, file settings
    /// are used as the base; CLI flags and env vars override them.
    #[arg(long)]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => NodeConfig::from_toml_file(&path.display().to_string())?,
        None => NodeConfig::default(),
    };
    if let Some(port) = cli.port {
        config.port = port;
    }
    if !cli.peers.is_empty() {
        config.peers = cli.peers;
    }
    if cli.validator.is_some() {
        config.validator = cli.validator;
    }
    if let Some(level) = cli.log_level {
        config.log_level = level;
    }
    if let Some(format) = cli.log_format {
        config.log_format = format;
    }

    init_logging(
        LogFormat::from_config(&config.log_format),
        &config.log_level,
    );
    tracing::info!(
        port = config.port,
        peers = config.peers.len(),
        validator = %config.fallback_validator(),
        "starting stakecast node"
    );

    let port = config.port;
    let node = Arc::new(Node::new(config));
    RpcServer::new(port).start(node).await?;
    Ok(())
}
