//! HTTP server lifecycle.

use std::net::SocketAddr;

use anyhow::Result;
use tokio::net::TcpListener;
use tracing::info;

use crate::router::build_router;
use crate::state::AppState;

/// The Cubby HTTP server.
pub struct Server {
    state: AppState,
    addr: SocketAddr,
}

impl Server {
    /// Create a server that will serve `state` on `addr`.
    pub fn new(state: AppState, addr: SocketAddr) -> Self {
        Self { state, addr }
    }

    /// Bind the listener and serve until the process exits.
    pub async fn run(self) -> Result<()> {
        let router = build_router(self.state);

        let listener = TcpListener::bind(self.addr).await?;
        info!("cubby listening on {}", listener.local_addr()?);

        axum::serve(listener, router).await?;

        Ok(())
    }
}
