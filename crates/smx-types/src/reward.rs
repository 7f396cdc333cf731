use std::fmt;

use serde::{Deserialize, Serialize};

/// Smidge per SMH.
pub const SMIDGE_PER_SMH: u64 = 1_000_000_000;

/// A reward row as read from the node's state database.
///
/// `total_reward` includes fees and is carried through untouched; exports
/// only report `layer_reward`. It is `None` where the node stored NULL.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RewardRecord {
    pub layer: i64,
    pub total_reward: Option<i64>,
    pub layer_reward: i64,
    pub layer_id: i64,
}

impl RewardRecord {
    pub fn new(layer: i64, total_reward: i64, layer_reward: i64, layer_id: i64) -> Self {
        Self {
            layer,
            total_reward: Some(total_reward),
            layer_reward,
            layer_id,
        }
    }

    /// The per-layer reward as an amount.
    pub fn amount(&self) -> RewardAmount {
        RewardAmount::from_smidge(self.layer_reward)
    }
}

/// A reward expressed in smidge.
///
/// `Display` renders the exact SMH value: trailing fractional zeros are
/// trimmed but at least one fractional digit is kept (`10.0`, `1.5`).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct RewardAmount(i64);

impl RewardAmount {
    pub const fn from_smidge(smidge: i64) -> Self {
        Self(smidge)
    }

    pub const fn smidge(&self) -> i64 {
        self.0
    }
}

impl fmt::Display for RewardAmount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        let abs = self.0.unsigned_abs();
        let whole = abs / SMIDGE_PER_SMH;
        let frac = abs % SMIDGE_PER_SMH;
        if frac == 0 {
            return write!(f, "{sign}{whole}.0");
        }
        let digits = format!("{frac:09}");
        write!(f, "{sign}{whole}.{}", digits.trim_end_matches('0'))
    }
}
