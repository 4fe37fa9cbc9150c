//! HTTP surface for the stakecast node.
//!
//! Five routes, matching the wire contract peers speak:
//! `GET /chain`, `GET /staking-pool`, `POST /stake`, `POST /block`
//! (peer block receipt), `POST /create-block`.

pub mod error;
pub mod handlers;
pub mod server;

pub use error::RpcError;
pub use server::RpcServer;
