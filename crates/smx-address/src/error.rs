use thiserror::Error;

/// Why [`convert_bits`](crate::convert_bits) rejected its input.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConvertBitsError {
    #[error("unsupported group widths: {from_bits} -> {to_bits} bits")]
    UnsupportedWidth { from_bits: u32, to_bits: u32 },

    #[error("value {value} at index {index} does not fit in {from_bits} bits")]
    ValueOutOfRange {
        index: usize,
        value: u32,
        from_bits: u32,
    },

    #[error("{bits} leftover bits make up a whole input group")]
    ExcessPadding { bits: u32 },

    #[error("leftover padding bits are not zero")]
    NonZeroPadding,
}

/// The specific reason an address failed to decode.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DecodeError {
    #[error("malformed address: {0}")]
    MalformedAddress(&'static str),

    #[error("invalid character {character:?} at data position {position}")]
    InvalidCharacter { character: char, position: usize },

    #[error("wrong network prefix: expected {expected:?}, found {found:?}")]
    WrongNetwork {
        expected: &'static str,
        found: String,
    },

    #[error("payload conversion failed: {0}")]
    ChecksumConversionFailed(#[from] ConvertBitsError),
}

/// An address could not be decoded.
///
/// Every decode failure surfaces as this one type. The underlying
/// [`DecodeError`] is available through [`InvalidAddress::reason`] for
/// diagnostics, but callers are not expected to branch on it.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("invalid address: {reason}")]
pub struct InvalidAddress {
    reason: DecodeError,
}

impl InvalidAddress {
    pub fn reason(&self) -> &DecodeError {
        &self.reason
    }
}

impl From<DecodeError> for InvalidAddress {
    fn from(reason: DecodeError) -> Self {
        Self { reason }
    }
}

impl From<ConvertBitsError> for InvalidAddress {
    fn from(err: ConvertBitsError) -> Self {
        DecodeError::from(err).into()
    }
}
