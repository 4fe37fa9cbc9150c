//! The node — owner of the chain and staking pool.
//!
//! Both structures sit behind their own `tokio::sync::RwLock`; every request
//! handler mutates through these single-writer guards, which is what keeps
//! the append-only and additive-deposit invariants intact under parallel
//! request handling. Neither lock is held across a network call: the peer
//! broadcast fires only after the chain lock is released.

use std::collections::BTreeMap;

use stakecast_consensus::next_block;
use stakecast_ledger::Chain;
use stakecast_network::PeerBroadcaster;
use stakecast_staking::StakingPool;
use stakecast_types::Block;
use tokio::sync::RwLock;
use tracing::info;

use crate::config::NodeConfig;
use crate::error::NodeError;

/// A single stakecast node: chain, staking pool, and peer fan-out.
pub struct Node {
    config: NodeConfig,
    chain: RwLock<Chain>,
    pool: RwLock<StakingPool>,
    broadcaster: PeerBroadcaster,
}

impl Node {
    /// Create a node with a genesis-seeded chain and an empty staking pool.
    pub fn new(config: NodeConfig) -> Self {
        Self {
            config,
            chain: RwLock::new(Chain::new()),
            pool: RwLock::new(StakingPool::new()),
            broadcaster: PeerBroadcaster::new(),
        }
    }

    pub fn config(&self) -> &NodeConfig {
        &self.config
    }

    /// The full ordered chain, genesis first.
    pub async fn chain(&self) -> Vec<Block> {
        self.chain.read().await.all().to_vec()
    }

    /// Snapshot of the staking pool mapping.
    pub async fn staking_pool(&self) -> BTreeMap<String, f64> {
        self.pool.read().await.snapshot().clone()
    }

    /// Add stake for a validator; returns the updated mapping.
    ///
    /// Invalid input is rejected before any mutation.
    pub async fn deposit_stake(
        &self,
        validator: &str,
        amount: f64,
    ) -> Result<BTreeMap<String, f64>, NodeError> {
        let mut pool = self.pool.write().await;
        pool.deposit(validator, amount)?;
        info!(validator, amount, "stake deposited");
        Ok(pool.snapshot().clone())
    }

    /// Accept a block from a peer and append it as-is.
    ///
    /// No linkage, continuity, or validator checks happen here; unvalidated
    /// acceptance is the protocol's documented contract.
    pub async fn receive_block(&self, block: Block) {
        let index = block.index;
        self.chain.write().await.append(block);
        info!(index, "block received from peer");
    }

    /// Produce the next block: weighted validator selection over the current
    /// pool, append to the chain, then fan out to peers.
    ///
    /// The block is returned as soon as it is appended locally — peer
    /// deliveries run on detached tasks and their outcomes never surface
    /// here.
    pub async fn create_block(
        &self,
        transactions: Option<Vec<String>>,
    ) -> Result<Block, NodeError> {
        let pool_snapshot = self.pool.read().await.snapshot().clone();

        let mut chain = self.chain.write().await;
        let latest = chain.latest()?.clone();
        let block = next_block(
            &latest,
            &pool_snapshot,
            transactions,
            &self.config.fallback_validator(),
            &mut rand::thread_rng(),
        );
        chain.append(block.clone());
        drop(chain);

        info!(
            index = block.index,
            validator = %block.validator,
            peers = self.config.peers.len(),
            "created block"
        );
        self.broadcaster.broadcast(&block, &self.config.peers);
        Ok(block)
    }
}
