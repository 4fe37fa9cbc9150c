//! Stake-weighted random validator selection.
//!
//! The draw walks the pool in its stable key order, subtracting each stake
//! from a value drawn uniformly from `[0, total)`; the first identity at
//! which the running value drops to zero or below wins. Each identity's
//! selection probability is therefore `stake / total`.
//!
//! The RNG is a caller-supplied `rand::Rng` so tests can seed the draw.

use rand::Rng;
use std::collections::BTreeMap;

/// Pick a validator with probability proportional to its stake.
///
/// Returns `None` when no validator has staked yet (the caller falls back to
/// a configured identity). Pool values are assumed strictly positive; the
/// staking pool enforces that at the deposit boundary.
pub fn select_weighted<R: Rng>(pool: &BTreeMap<String, f64>, rng: &mut R) -> Option<String> {
    if pool.is_empty() {
        return None;
    }
    let total: f64 = pool.values().sum();
    if total <= 0.0 {
        return None;
    }

    let mut remaining = rng.gen_range(0.0..total);
    for (validator, stake) in pool {
        remaining -= stake;
        if remaining <= 0.0 {
            return Some(validator.clone());
        }
    }
    // Float rounding can leave a sliver of `remaining`; the last entry wins.
    pool.keys().next_back().cloned()
}
