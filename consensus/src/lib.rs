//! Stake-weighted validator selection and block production.

pub mod factory;
pub mod selector;

pub use factory::next_block;
pub use selector::select_weighted;
