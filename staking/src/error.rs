use thiserror::Error;

/// Rejections for malformed stake deposits. No state changes on error.
#[derive(Debug, Error, PartialEq)]
pub enum StakeError {
    #[error("validator identity is required")]
    EmptyValidator,

    #[error("amount must be a positive number, got {amount}")]
    InvalidAmount { amount: f64 },
}
