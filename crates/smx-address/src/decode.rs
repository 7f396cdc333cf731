use crate::alphabet::symbol_value;
use crate::error::DecodeError;

const SEPARATOR: char = '1';

/// A bech32 string split into its prefix and symbol values.
///
/// `values` still ends with the checksum symbols.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Decoded {
    pub hrp: String,
    pub values: Vec<u8>,
}

/// Lowercase `address`, split it at the last separator, and map the data
/// part to symbol values.
pub(crate) fn decode(address: &str) -> Result<Decoded, DecodeError> {
    let lowered = address.to_lowercase();
    let (hrp, data) = lowered
        .rsplit_once(SEPARATOR)
        .ok_or(DecodeError::MalformedAddress("missing '1' separator"))?;

    let values = data
        .chars()
        .enumerate()
        .map(|(position, character)| {
            symbol_value(character).ok_or(DecodeError::InvalidCharacter {
                character,
                position,
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(Decoded {
        hrp: hrp.to_string(),
        values,
    })
}
