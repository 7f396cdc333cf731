//! Foundation types for SMX, the Spacemesh coinbase reward exporter.
//!
//! Shared by the store, export, and CLI crates.
//!
//! # Key Types
//!
//! - [`LayerClock`] -- Genesis instant plus layer duration; maps instants to layers and back
//! - [`LayerRange`] -- Optional inclusive bounds on layer indices
//! - [`RewardRecord`] -- One reward row as stored by the node
//! - [`RewardAmount`] -- Reward in smidge, rendered as SMH

pub mod error;
pub mod layer;
pub mod reward;

pub use error::TypeError;
pub use layer::{
    layer_of, parse_date, utc_midnight, LayerClock, LayerRange, GENESIS_UNIX, LAYER_DURATION_SECS,
};
pub use reward::{RewardAmount, RewardRecord, SMIDGE_PER_SMH};
