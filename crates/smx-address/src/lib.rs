//! Coinbase address decoding for SMX.
//!
//! Spacemesh coinbase addresses are bech32 strings with the `sm` prefix.
//! This crate turns them into the raw payload bytes the node stores, which
//! is the key rewards are looked up by.
//!
//! The trailing six checksum symbols are stripped by length and are not
//! verified. Any address whose payload regroups cleanly into bytes is
//! accepted, even if its checksum is wrong.
//!
//! # Key Items
//!
//! - [`address_to_bytes`] / [`address_to_hex`] -- Decode an address string
//! - [`CoinbaseAddress`] -- Decoded payload with hex rendering
//! - [`convert_bits`] -- General bit regrouping between group widths
//! - [`InvalidAddress`] -- The single error callers need to handle

pub mod address;
pub mod alphabet;
pub mod convert;
mod decode;
pub mod error;

pub use address::{address_to_bytes, address_to_hex, CoinbaseAddress, CHECKSUM_LEN, SPACEMESH_HRP};
pub use alphabet::{symbol_value, CHARSET};
pub use convert::convert_bits;
pub use error::{ConvertBitsError, DecodeError, InvalidAddress};
