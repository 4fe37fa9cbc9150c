//! The block type shared by the ledger, consensus, and network layers.

use serde::{Deserialize, Serialize};
use std::fmt;

/// `previous_hash` of the genesis block.
pub const GENESIS_PREVIOUS_HASH: &str = "0";
/// Validator identity recorded on the genesis block.
pub const GENESIS_VALIDATOR: &str = "Network";
/// Stand-in linkage value used when the previous block carries no hash.
///
/// The protocol never computes real hashes; this fixed string is the
/// documented placeholder, not an abbreviation of a hashing scheme.
pub const PLACEHOLDER_HASH: &str = "dummy-hash";
/// Payload used when a create-block request supplies no transactions.
pub const DEFAULT_TRANSACTION: &str = "Dummy Transaction";

/// A single block in the chain.
///
/// Immutable once appended. Field names on the wire are camelCase to match
/// the JSON shape peers exchange.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Block {
    /// Position in the chain; strictly increases by 1 per append.
    pub index: u64,
    /// Placeholder linkage to the preceding block (see [`PLACEHOLDER_HASH`]).
    pub previous_hash: String,
    /// Opaque transaction payload, carried as-is.
    pub transactions: Vec<String>,
    /// Identity of the validator that produced this block.
    pub validator: String,
    /// Never populated locally; kept so blocks received from peers that do
    /// carry one round-trip without loss.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hash: Option<String>,
}

impl Block {
    /// The genesis block every chain is seeded with.
    pub fn genesis() -> Self {
        Self {
            index: 0,
            previous_hash: GENESIS_PREVIOUS_HASH.to_string(),
            transactions: vec!["Genesis Block".to_string()],
            validator: GENESIS_VALIDATOR.to_string(),
            hash: None,
        }
    }

    /// Linkage value the next block should record as its `previous_hash`.
    pub fn link(&self) -> String {
        self.hash
            .clone()
            .unwrap_or_else(|| PLACEHOLDER_HASH.to_string())
    }
}

impl fmt::Display for Block {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "block #{} by {}", self.index, self.validator)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn genesis_shape() {
        let genesis = Block::genesis();
        assert_eq!(genesis.index, 0);
        assert_eq!(genesis.previous_hash, "0");
        assert_eq!(genesis.transactions, vec!["Genesis Block"]);
        assert_eq!(genesis.validator, "Network");
        assert_eq!(genesis.hash, None);
    }

    #[test]
    fn link_falls_back_to_placeholder() {
        let genesis = Block::genesis();
        assert_eq!(genesis.link(), PLACEHOLDER_HASH);
    }

    #[test]
    fn link_uses_hash_when_present() {
        let mut block = Block::genesis();
        block.hash = Some("abc123".to_string());
        assert_eq!(block.link(), "abc123");
    }

    #[test]
    fn serializes_camel_case_without_empty_hash() {
        let json = serde_json::to_value(Block::genesis()).unwrap();
        assert_eq!(json["previousHash"], "0");
        assert!(json.get("hash").is_none());
    }

    #[test]
    fn deserializes_peer_block_with_hash() {
        let json = r#"{
            "index": 7,
            "previousHash": "dummy-hash",
            "transactions": ["tx-1"],
            "validator": "Validator-3002",
            "hash": "deadbeef"
        }"#;
        let block: Block = serde_json::from_str(json).unwrap();
        assert_eq!(block.index, 7);
        assert_eq!(block.hash.as_deref(), Some("deadbeef"));
    }
}
