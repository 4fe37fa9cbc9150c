//! The staking pool — validator identity mapped to accumulated stake.
//!
//! Deposits are additive only: staking again under the same identity grows
//! the existing entry, and nothing ever decrements or removes one. Entries
//! live in a `BTreeMap` so iteration order is stable, which the weighted
//! selector relies on.

use crate::error::StakeError;
use std::collections::BTreeMap;

/// validator identity → accumulated stake.
///
/// Invariant: every stored stake is finite and strictly positive.
#[derive(Clone, Debug, Default)]
pub struct StakingPool {
    stakes: BTreeMap<String, f64>,
}

impl StakingPool {
    /// Create an empty pool.
    pub fn new() -> Self {
        Self {
            stakes: BTreeMap::new(),
        }
    }

    /// Add `amount` to `validator`'s stake, creating the entry if absent.
    ///
    /// Rejects an empty identity and any amount that is not a finite number
    /// greater than zero; the pool is untouched on rejection.
    pub fn deposit(&mut self, validator: &str, amount: f64) -> Result<(), StakeError> {
        if validator.is_empty() {
            return Err(StakeError::EmptyValidator);
        }
        if !amount.is_finite() || amount <= 0.0 {
            return Err(StakeError::InvalidAmount { amount });
        }
        *self.stakes.entry(validator.to_string()).or_insert(0.0) += amount;
        Ok(())
    }

    /// A validator's current stake. Returns 0 if not found.
    pub fn stake_of(&self, validator: &str) -> f64 {
        self.stakes.get(validator).copied().unwrap_or(0.0)
    }

    /// Sum of all stakes.
    pub fn total_stake(&self) -> f64 {
        self.stakes.values().sum()
    }

    /// Read-only view of the full mapping.
    pub fn snapshot(&self) -> &BTreeMap<String, f64> {
        &self.stakes
    }

    /// Number of validators holding stake.
    pub fn len(&self) -> usize {
        self.stakes.len()
    }

    /// Whether no validator has staked yet.
    pub fn is_empty(&self) -> bool {
        self.stakes.is_empty()
    }
}
