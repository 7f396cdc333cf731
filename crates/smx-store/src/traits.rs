use smx_types::RewardRecord;

use crate::error::StoreResult;
use crate::query::RewardQuery;

/// A source of reward records.
///
/// Implementations must satisfy these invariants:
/// - Only records whose coinbase hex equals `query.coinbase_hex()` are returned.
/// - Only records whose `layer` lies within `query.range()` are returned.
/// - Records are ordered by ascending `layer`.
/// - Lookups never modify the underlying data.
pub trait RewardSource: Send + Sync {
    /// Fetch every record matching `query`.
    fn rewards(&self, query: &RewardQuery) -> StoreResult<Vec<RewardRecord>>;
}
