use thiserror::Error;

#[derive(Debug, Error)]
pub enum NetworkError {
    /// Delivery to a single peer failed. Reported per peer and swallowed by
    /// the broadcaster; it never reaches the caller that created the block.
    #[error("delivery to {peer} failed: {reason}")]
    Delivery { peer: String, reason: String },
}
