//! Axum-based HTTP server.

use std::sync::Arc;

use axum::routing::{get, post};
use axum::Router;
use stakecast_node::Node;
use tracing::info;

use crate::error::RpcError;
use crate::handlers;

pub struct RpcServer {
    pub port: u16,
}

impl RpcServer {
    pub fn new(port: u16) -> Self {
        Self { port }
    }

    /// The node's full route table.
    pub fn router(node: Arc<Node>) -> Router {
        Router::new()
            .route("/chain", get(handlers::get_chain))
            .route("/staking-pool", get(handlers::get_staking_pool))
            .route("/stake", post(handlers::post_stake))
            .route("/block", post(handlers::post_block))
            .route("/create-block", post(handlers::post_create_block))
            .with_state(node)
    }

    /// Bind and serve until the process exits.
    pub async fn start(&self, node: Arc<Node>) -> Result<(), RpcError> {
        let listener = tokio::net::TcpListener::bind(("0.0.0.0", self.port))
            .await
            .map_err(|e| RpcError::Server(format!("bind failed on port {}: {e}", self.port)))?;
        info!(port = self.port, "node listening");

        axum::serve(listener, Self::router(node))
            .await
            .map_err(|e| RpcError::Server(e.to_string()))
    }
}
