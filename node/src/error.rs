use thiserror::Error;

#[derive(Debug, Error)]
pub enum NodeError {
    #[error("config error: {0}")]
    Config(String),

    #[error(transparent)]
    Stake(#[from] stakecast_staking::StakeError),

    #[error(transparent)]
    Chain(#[from] stakecast_ledger::ChainError),
}
