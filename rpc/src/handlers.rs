//! RPC request handlers.
//!
//! Request/response bodies mirror the JSON the original network speaks:
//! camelCase fields, `{"error": ...}` rejections, and a stake `amount` that
//! may arrive as a JSON number or a numeric string.

use std::collections::BTreeMap;
use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::{Deserialize, Serialize};
use stakecast_node::Node;
use stakecast_types::Block;

use crate::error::RpcError;

// ── Stake ────────────────────────────────────────────────────────────────

/// A stake amount as it appears on the wire: number or numeric string.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum Amount {
    Number(f64),
    Text(String),
}

impl Amount {
    /// The numeric value, if the wire form parses as one.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Amount::Number(n) => Some(*n),
            Amount::Text(s) => s.trim().parse().ok(),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct StakeRequest {
    pub validator: Option<String>,
    pub amount: Option<Amount>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StakeResponse {
    pub message: String,
    pub staking_pool: BTreeMap<String, f64>,
}

// ── Create block ─────────────────────────────────────────────────────────

#[derive(Debug, Default, Deserialize)]
pub struct CreateBlockRequest {
    pub transactions: Option<Vec<String>>,
}

// ── Handlers ─────────────────────────────────────────────────────────────

/// `GET /chain` — the full ordered block sequence.
pub async fn get_chain(State(node): State<Arc<Node>>) -> Json<Vec<Block>> {
    Json(node.chain().await)
}

/// `GET /staking-pool` — the identity → stake mapping.
pub async fn get_staking_pool(State(node): State<Arc<Node>>) -> Json<BTreeMap<String, f64>> {
    Json(node.staking_pool().await)
}

/// `POST /stake` — add stake for a validator.
pub async fn post_stake(
    State(node): State<Arc<Node>>,
    Json(request): Json<StakeRequest>,
) -> Result<Json<StakeResponse>, RpcError> {
    let validator = request.validator.unwrap_or_default();
    let amount = match (&validator, request.amount) {
        (v, Some(amount)) if !v.is_empty() => amount,
        _ => {
            return Err(RpcError::InvalidRequest(
                "Validator and amount are required".to_string(),
            ))
        }
    };
    let amount = amount.as_f64().ok_or_else(|| {
        RpcError::InvalidRequest("Amount must be a positive number".to_string())
    })?;

    let staking_pool = node.deposit_stake(&validator, amount).await?;
    Ok(Json(StakeResponse {
        message: format!("Validator {validator} staked {amount} tokens"),
        staking_pool,
    }))
}

/// `POST /block` — accept a block from a peer, no validation.
pub async fn post_block(State(node): State<Arc<Node>>, Json(block): Json<Block>) -> StatusCode {
    node.receive_block(block).await;
    StatusCode::OK
}

/// `POST /create-block` — produce, append, and broadcast the next block.
///
/// The body is optional; an absent or empty payload falls back to the
/// default placeholder transaction.
pub async fn post_create_block(
    State(node): State<Arc<Node>>,
    request: Option<Json<CreateBlockRequest>>,
) -> Result<Json<Block>, RpcError> {
    let transactions = request.and_then(|Json(r)| r.transactions);
    let block = node.create_block(transactions).await?;
    Ok(Json(block))
}

#[cfg(test)]
mod tests {
    use super::*;
    use stakecast_node::NodeConfig;

    fn node() -> Arc<Node> {
        Arc::new(Node::new(NodeConfig::default()))
    }

    #[tokio::test]
    async fn chain_starts_with_genesis() {
        let Json(chain) = get_chain(State(node())).await;
        assert_eq!(chain.len(), 1);
        assert_eq!(chain[0].index, 0);
    }

    #[tokio::test]
    async fn stake_with_numeric_amount() {
        let node = node();
        let request = StakeRequest {
            validator: Some("Validator-1".to_string()),
            amount: Some(Amount::Number(50.0)),
        };

        let Json(response) = post_stake(State(node.clone()), Json(request)).await.unwrap();
        assert_eq!(response.message, "Validator Validator-1 staked 50 tokens");
        assert_eq!(response.staking_pool.get("Validator-1"), Some(&50.0));
        assert_eq!(node.staking_pool().await.get("Validator-1"), Some(&50.0));
    }

    #[tokio::test]
    async fn stake_with_string_amount() {
        let request = StakeRequest {
            validator: Some("A".to_string()),
            amount: Some(Amount::Text("25.5".to_string())),
        };

        let Json(response) = post_stake(State(node()), Json(request)).await.unwrap();
        assert_eq!(response.staking_pool.get("A"), Some(&25.5));
    }

    #[tokio::test]
    async fn stake_missing_fields_rejected() {
        let node = node();
        let request = StakeRequest {
            validator: None,
            amount: Some(Amount::Number(50.0)),
        };
        let err = post_stake(State(node.clone()), Json(request)).await.unwrap_err();
        assert!(matches!(err, RpcError::InvalidRequest(_)));

        let request = StakeRequest {
            validator: Some("A".to_string()),
            amount: None,
        };
        let err = post_stake(State(node.clone()), Json(request)).await.unwrap_err();
        assert!(matches!(err, RpcError::InvalidRequest(_)));

        assert!(node.staking_pool().await.is_empty());
    }

    #[tokio::test]
    async fn stake_non_numeric_amount_rejected() {
        let node = node();
        let request = StakeRequest {
            validator: Some("A".to_string()),
            amount: Some(Amount::Text("lots".to_string())),
        };

        let err = post_stake(State(node.clone()), Json(request)).await.unwrap_err();
        assert!(matches!(err, RpcError::InvalidRequest(_)));
        assert!(node.staking_pool().await.is_empty());
    }

    #[tokio::test]
    async fn stake_non_positive_amount_rejected() {
        let node = node();
        let request = StakeRequest {
            validator: Some("A".to_string()),
            amount: Some(Amount::Number(0.0)),
        };

        let err = post_stake(State(node.clone()), Json(request)).await.unwrap_err();
        assert!(matches!(err, RpcError::InvalidRequest(_)));
        assert!(node.staking_pool().await.is_empty());
    }

    #[tokio::test]
    async fn peer_block_is_appended_as_is() {
        let node = node();
        let rogue = Block {
            index: 7,
            previous_hash: "whatever".to_string(),
            transactions: vec!["tx".to_string()],
            validator: "peer".to_string(),
            hash: None,
        };

        let status = post_block(State(node.clone()), Json(rogue.clone())).await;
        assert_eq!(status, StatusCode::OK);

        let chain = node.chain().await;
        assert_eq!(chain.len(), 2);
        assert_eq!(chain[1], rogue);
    }

    #[tokio::test]
    async fn create_block_without_body_uses_placeholder_payload() {
        let node = node();
        let Json(block) = post_create_block(State(node.clone()), None).await.unwrap();

        assert_eq!(block.index, 1);
        assert_eq!(block.transactions, vec!["Dummy Transaction"]);
        assert_eq!(node.chain().await.len(), 2);
    }

    #[tokio::test]
    async fn create_block_with_payload() {
        let node = node();
        let request = CreateBlockRequest {
            transactions: Some(vec!["alice->bob:5".to_string()]),
        };

        let Json(block) = post_create_block(State(node), Some(Json(request)))
            .await
            .unwrap();
        assert_eq!(block.transactions, vec!["alice->bob:5"]);
    }

    #[test]
    fn amount_wire_forms() {
        let n: Amount = serde_json::from_str("42.5").unwrap();
        assert_eq!(n.as_f64(), Some(42.5));

        let s: Amount = serde_json::from_str("\"42.5\"").unwrap();
        assert_eq!(s.as_f64(), Some(42.5));

        let bad: Amount = serde_json::from_str("\"not-a-number\"").unwrap();
        assert_eq!(bad.as_f64(), None);
    }
}
