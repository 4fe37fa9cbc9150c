//! stakecast full node — owns the chain and staking pool and coordinates
//! validator selection, block production, and peer propagation.

pub mod config;
pub mod error;
pub mod logging;
pub mod node;

pub use config::NodeConfig;
pub use error::NodeError;
pub use logging::{init_logging, LogFormat};
pub use node::Node;
