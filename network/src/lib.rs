//! Fire-and-forget block propagation to peer nodes.

pub mod broadcast;
pub mod error;

pub use broadcast::{peer_url, PeerBroadcaster};
pub use error::NetworkError;
