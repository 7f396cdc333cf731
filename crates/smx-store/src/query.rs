use smx_address::CoinbaseAddress;
use smx_types::LayerRange;

/// Lookup key and layer bounds for a reward query.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RewardQuery {
    coinbase_hex: String,
    range: LayerRange,
}

impl RewardQuery {
    /// Query by coinbase payload hex. The hex is lowercased.
    pub fn new(coinbase_hex: impl Into<String>, range: LayerRange) -> Self {
        Self {
            coinbase_hex: coinbase_hex.into().to_lowercase(),
            range,
        }
    }

    /// Query for a decoded address.
    pub fn for_address(address: &CoinbaseAddress, range: LayerRange) -> Self {
        Self::new(address.to_hex(), range)
    }

    pub fn coinbase_hex(&self) -> &str {
        &self.coinbase_hex
    }

    pub fn range(&self) -> LayerRange {
        self.range
    }
}
