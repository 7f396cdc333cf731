use std::sync::RwLock;

use smx_types::RewardRecord;

use crate::error::StoreResult;
use crate::query::RewardQuery;
use crate::traits::RewardSource;

/// In-memory reward source.
///
/// Holds `(coinbase, record)` pairs behind a `RwLock`. Intended for tests
/// and embedding; it applies the same filtering as the SQLite backend
/// without the join against the layers table.
pub struct InMemoryRewardSource {
    rewards: RwLock<Vec<(Vec<u8>, RewardRecord)>>,
}

impl InMemoryRewardSource {
    /// Create an empty source.
    pub fn new() -> Self {
        Self {
            rewards: RwLock::new(Vec::new()),
        }
    }

    /// Add a record paid to `coinbase`.
    pub fn insert(&self, coinbase: &[u8], record: RewardRecord) {
        self.rewards
            .write()
            .expect("lock poisoned")
            .push((coinbase.to_vec(), record));
    }

    /// Number of records held, across all coinbases.
    pub fn len(&self) -> usize {
        self.rewards.read().expect("lock poisoned").len()
    }

    /// Returns `true` if no records are held.
    pub fn is_empty(&self) -> bool {
        self.rewards.read().expect("lock poisoned").is_empty()
    }
}

impl Default for InMemoryRewardSource {
    fn default() -> Self {
        Self::new()
    }
}

impl RewardSource for InMemoryRewardSource {
    fn rewards(&self, query: &RewardQuery) -> StoreResult<Vec<RewardRecord>> {
        let range = query.range();
        let rewards = self.rewards.read().expect("lock poisoned");
        let mut matched: Vec<RewardRecord> = rewards
            .iter()
            .filter(|(coinbase, record)| {
                hex::encode(coinbase) == query.coinbase_hex() && range.contains(record.layer)
            })
            .map(|(_, record)| *record)
            .collect();
        matched.sort_by_key(|r| r.layer);
        Ok(matched)
    }
}

impl std::fmt::Debug for InMemoryRewardSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InMemoryRewardSource")
            .field("record_count", &self.len())
            .finish()
    }
}
