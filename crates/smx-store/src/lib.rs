//! Reward record lookup for SMX.
//!
//! Rewards are keyed by the coinbase payload (lowercase hex) and optionally
//! bounded by an inclusive layer range.
//!
//! # Backends
//!
//! All backends implement the [`RewardSource`] trait:
//!
//! - [`InMemoryRewardSource`] -- `Vec`-backed source for tests and embedding
//! - [`SqliteRewardSource`] -- the node's `state.sql`, opened read-only
//!
//! # Design Rules
//!
//! 1. Sources never write. The node owns its database.
//! 2. Records come back ordered by layer.
//! 3. All database errors are propagated, never silently ignored.

pub mod error;
pub mod memory;
pub mod query;
pub mod sqlite;
pub mod traits;

pub use error::{StoreError, StoreResult};
pub use memory::InMemoryRewardSource;
pub use query::RewardQuery;
pub use sqlite::SqliteRewardSource;
pub use traits::RewardSource;
