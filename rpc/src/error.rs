//! RPC error types.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RpcError {
    #[error("{0}")]
    InvalidRequest(String),

    #[error("server error: {0}")]
    Server(String),
}

impl From<stakecast_node::NodeError> for RpcError {
    fn from(e: stakecast_node::NodeError) -> Self {
        match e {
            stakecast_node::NodeError::Stake(inner) => RpcError::InvalidRequest(inner.to_string()),
            other => RpcError::Server(other.to_string()),
        }
    }
}

impl RpcError {
    fn status(&self) -> StatusCode {
        match self {
            RpcError::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            RpcError::Server(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for RpcError {
    fn into_response(self) -> Response {
        let body = Json(serde_json::json!({ "error": self.to_string() }));
        (self.status(), body).into_response()
    }
}
