//! Append-only in-memory block chain, seeded with the genesis block.

pub mod chain;
pub mod error;

pub use chain::Chain;
pub use error::ChainError;
