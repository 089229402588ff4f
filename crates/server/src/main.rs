//! `cubbyd`: the Cubby key-value store daemon.

use std::net::SocketAddr;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use cubby_server::{AppState, Server};

#[derive(Debug, Parser)]
#[command(name = "cubbyd", about = "HTTP key-value store with a fixed capacity quota")]
struct Cli {
    /// Address to listen on.
    #[arg(long, default_value = "127.0.0.1:8080")]
    listen: SocketAddr,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    let state = AppState::new();
    Server::new(state, cli.listen).run().await
}
