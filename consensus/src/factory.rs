//! Block production — building the next block from the chain tail.
//!
//! Pure construction: the factory reads the latest block and a pool
//! snapshot, runs the weighted selection, and returns the new block. The
//! caller owns appending it to the chain and broadcasting it.

use crate::selector::select_weighted;
use rand::Rng;
use stakecast_types::{Block, DEFAULT_TRANSACTION};
use std::collections::BTreeMap;

/// Build the block that follows `latest`.
///
/// The validator is chosen by stake-weighted draw over `pool`; when the pool
/// is empty, `fallback_validator` produces the block instead. A missing
/// transaction payload becomes the single-element default placeholder.
pub fn next_block<R: Rng>(
    latest: &Block,
    pool: &BTreeMap<String, f64>,
    transactions: Option<Vec<String>>,
    fallback_validator: &str,
    rng: &mut R,
) -> Block {
    let validator =
        select_weighted(pool, rng).unwrap_or_else(|| fallback_validator.to_string());

    Block {
        index: latest.index + 1,
        previous_hash: latest.link(),
        transactions: transactions
            .unwrap_or_else(|| vec![DEFAULT_TRANSACTION.to_string()]),
        validator,
        hash: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use stakecast_types::PLACEHOLDER_HASH;

    fn staked(entries: &[(&str, f64)]) -> BTreeMap<String, f64> {
        entries
            .iter()
            .map(|(validator, stake)| (validator.to_string(), *stake))
            .collect()
    }

    #[test]
    fn index_increments_from_latest() {
        let latest = Block {
            index: 41,
            previous_hash: PLACEHOLDER_HASH.to_string(),
            transactions: vec![],
            validator: "Validator-1".to_string(),
            hash: None,
        };
        let mut rng = StdRng::seed_from_u64(1);

        let block = next_block(&latest, &staked(&[("A", 1.0)]), None, "fallback", &mut rng);
        assert_eq!(block.index, 42);
    }

    #[test]
    fn empty_pool_uses_fallback_validator() {
        let mut rng = StdRng::seed_from_u64(1);
        let block = next_block(
            &Block::genesis(),
            &BTreeMap::new(),
            None,
            "Validator-3000",
            &mut rng,
        );
        assert_eq!(block.validator, "Validator-3000");
    }

    #[test]
    fn staked_pool_overrides_fallback() {
        let mut rng = StdRng::seed_from_u64(1);
        let block = next_block(
            &Block::genesis(),
            &staked(&[("A", 100.0)]),
            None,
            "fallback",
            &mut rng,
        );
        assert_eq!(block.validator, "A");
    }

    #[test]
    fn missing_payload_becomes_placeholder() {
        let mut rng = StdRng::seed_from_u64(1);
        let block = next_block(&Block::genesis(), &BTreeMap::new(), None, "V", &mut rng);
        assert_eq!(block.transactions, vec![DEFAULT_TRANSACTION]);
    }

    #[test]
    fn supplied_payload_carried_verbatim() {
        let mut rng = StdRng::seed_from_u64(1);
        let txs = vec!["alice->bob:5".to_string(), "bob->carol:2".to_string()];
        let block = next_block(
            &Block::genesis(),
            &BTreeMap::new(),
            Some(txs.clone()),
            "V",
            &mut rng,
        );
        assert_eq!(block.transactions, txs);
    }

    #[test]
    fn previous_hash_is_placeholder_when_latest_has_none() {
        let mut rng = StdRng::seed_from_u64(1);
        // Genesis carries no hash, so linkage falls back to the placeholder.
        let block = next_block(&Block::genesis(), &BTreeMap::new(), None, "V", &mut rng);
        assert_eq!(block.previous_hash, PLACEHOLDER_HASH);
    }

    #[test]
    fn previous_hash_copied_from_latest_hash_when_present() {
        let mut latest = Block::genesis();
        latest.hash = Some("peer-supplied".to_string());
        let mut rng = StdRng::seed_from_u64(1);

        let block = next_block(&latest, &BTreeMap::new(), None, "V", &mut rng);
        assert_eq!(block.previous_hash, "peer-supplied");
    }

    #[test]
    fn new_block_never_carries_a_hash() {
        let mut rng = StdRng::seed_from_u64(1);
        let block = next_block(&Block::genesis(), &BTreeMap::new(), None, "V", &mut rng);
        assert_eq!(block.hash, None);
    }
}
