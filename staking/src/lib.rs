//! Staked balances per validator identity.

pub mod error;
pub mod pool;

pub use error::StakeError;
pub use pool::StakingPool;
