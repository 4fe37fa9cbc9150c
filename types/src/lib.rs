//! Fundamental types for the stakecast node.
//!
//! This crate defines the block type shared across every other crate in the
//! workspace, plus the wire-level constants (genesis values, placeholder
//! hash, default transaction payload) the protocol depends on.

pub mod block;

pub use block::{
    Block, DEFAULT_TRANSACTION, GENESIS_PREVIOUS_HASH, GENESIS_VALIDATOR, PLACEHOLDER_HASH,
};
