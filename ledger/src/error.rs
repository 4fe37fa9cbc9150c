use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum ChainError {
    /// Guard for the non-empty invariant. Cannot trigger on a chain built
    /// through [`crate::Chain::new`], which seeds genesis.
    #[error("chain is empty")]
    EmptyChain,
}
