use std::fmt;
use std::str::FromStr;

use crate::convert::convert_bits;
use crate::decode::decode;
use crate::error::{DecodeError, InvalidAddress};

/// The only accepted human-readable part.
pub const SPACEMESH_HRP: &str = "sm";

/// Number of trailing checksum symbols stripped before conversion.
pub const CHECKSUM_LEN: usize = 6;

/// Decode a coinbase address into its payload bytes.
///
/// The address is case-insensitive. The last six data symbols are dropped
/// as checksum without being verified.
pub fn address_to_bytes(address: &str) -> Result<Vec<u8>, InvalidAddress> {
    let decoded = decode(address)?;
    if decoded.hrp != SPACEMESH_HRP {
        return Err(DecodeError::WrongNetwork {
            expected: SPACEMESH_HRP,
            found: decoded.hrp,
        }
        .into());
    }

    // A data part no longer than the checksum leaves an empty payload.
    let payload_len = decoded.values.len().saturating_sub(CHECKSUM_LEN);
    Ok(convert_bits(&decoded.values[..payload_len], 5, 8, false)?)
}

/// Decode a coinbase address into lowercase hex, the database lookup key.
pub fn address_to_hex(address: &str) -> Result<String, InvalidAddress> {
    address_to_bytes(address).map(hex::encode)
}

/// A decoded coinbase address.
///
/// Displays as the lowercase hex of its payload.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CoinbaseAddress {
    bytes: Vec<u8>,
}

impl CoinbaseAddress {
    pub fn parse(address: &str) -> Result<Self, InvalidAddress> {
        address_to_bytes(address).map(|bytes| Self { bytes })
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn to_hex(&self) -> String {
        hex::encode(&self.bytes)
    }
}

impl FromStr for CoinbaseAddress {
    type Err = InvalidAddress;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Debug for CoinbaseAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CoinbaseAddress({})", self.to_hex())
    }
}

impl fmt::Display for CoinbaseAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}
