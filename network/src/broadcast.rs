//! Block fan-out to the configured peer set.
//!
//! Each peer gets its own detached delivery task: one slow or dead peer
//! neither blocks nor cancels the others, and no delivery outcome flows back
//! to the request that created the block. Failures are logged and dropped —
//! at-most-once, no retry.

use crate::error::NetworkError;
use stakecast_types::Block;
use std::time::Duration;
use tracing::{debug, warn};

/// Per-request timeout for a single peer delivery.
const DELIVERY_TIMEOUT: Duration = Duration::from_secs(5);
/// Connect timeout for a single peer delivery.
const CONNECT_TIMEOUT: Duration = Duration::from_secs(2);

/// Build the block-receipt URL for a configured peer entry.
///
/// Peers are listed either as `host:port` or as a bare port, in which case
/// the peer is assumed to live on the local host (the convention for running
/// a multi-node demo on one machine).
pub fn peer_url(peer: &str) -> String {
    if peer.contains(':') {
        format!("http://{peer}/block")
    } else {
        format!("http://127.0.0.1:{peer}/block")
    }
}

/// HTTP fan-out for newly created blocks.
#[derive(Clone)]
pub struct PeerBroadcaster {
    /// Reusable connection pool.
    client: reqwest::Client,
}

impl PeerBroadcaster {
    /// Create a broadcaster with default timeouts.
    pub fn new() -> Self {
        let client = reqwest::Client::builder()
            .timeout(DELIVERY_TIMEOUT)
            .connect_timeout(CONNECT_TIMEOUT)
            .build()
            .unwrap_or_default();
        Self { client }
    }

    /// Propagate `block` to every peer, each on its own detached task.
    ///
    /// Returns as soon as the tasks are spawned; must be called from within
    /// a tokio runtime. The number returned is how many deliveries were
    /// dispatched, not how many succeeded.
    pub fn broadcast(&self, block: &Block, peers: &[String]) -> usize {
        for peer in peers {
            let client = self.client.clone();
            let block = block.clone();
            let peer = peer.clone();
            tokio::spawn(async move {
                match deliver(&client, &peer, &block).await {
                    Ok(()) => {
                        debug!(%peer, index = block.index, "broadcasted block to peer");
                    }
                    Err(e) => {
                        warn!(%peer, error = %e, "block broadcast failed");
                    }
                }
            });
        }
        peers.len()
    }
}

impl Default for PeerBroadcaster {
    fn default() -> Self {
        Self::new()
    }
}

/// POST the block to one peer's `/block` endpoint.
async fn deliver(
    client: &reqwest::Client,
    peer: &str,
    block: &Block,
) -> Result<(), NetworkError> {
    let response = client
        .post(peer_url(peer))
        .json(block)
        .send()
        .await
        .map_err(|e| NetworkError::Delivery {
            peer: peer.to_string(),
            reason: e.to_string(),
        })?;

    response
        .error_for_status()
        .map_err(|e| NetworkError::Delivery {
            peer: peer.to_string(),
            reason: e.to_string(),
        })?;
    Ok(())
}
