use crate::error::ConvertBitsError;

/// Regroup a bit stream from `from_bits`-wide groups into `to_bits`-wide groups.
///
/// Both widths must be in `1..=8`. Each input value must fit in `from_bits`
/// bits.
///
/// With `pad`, a trailing partial group is zero-extended and emitted. Without
/// it, the leftover bits must be fewer than `from_bits` and all zero, so no
/// information-carrying bit is ever dropped.
pub fn convert_bits(
    data: &[u8],
    from_bits: u32,
    to_bits: u32,
    pad: bool,
) -> Result<Vec<u8>, ConvertBitsError> {
    if !(1..=8).contains(&from_bits) || !(1..=8).contains(&to_bits) {
        return Err(ConvertBitsError::UnsupportedWidth { from_bits, to_bits });
    }

    let max_value: u32 = (1 << to_bits) - 1;
    // Wide enough that a valid accumulation is never truncated.
    let max_acc: u32 = (1 << (from_bits + to_bits - 1)) - 1;

    let mut acc: u32 = 0;
    let mut bits: u32 = 0;
    let mut out = Vec::with_capacity(data.len() * from_bits as usize / to_bits as usize + 1);

    for (index, &value) in data.iter().enumerate() {
        let value = u32::from(value);
        if value >> from_bits != 0 {
            return Err(ConvertBitsError::ValueOutOfRange {
                index,
                value,
                from_bits,
            });
        }
        acc = ((acc << from_bits) | value) & max_acc;
        bits += from_bits;
        while bits >= to_bits {
            bits -= to_bits;
            out.push(((acc >> bits) & max_value) as u8);
        }
    }

    if pad {
        if bits > 0 {
            out.push(((acc << (to_bits - bits)) & max_value) as u8);
        }
    } else if bits >= from_bits {
        return Err(ConvertBitsError::ExcessPadding { bits });
    } else if (acc << (to_bits - bits)) & max_value != 0 {
        return Err(ConvertBitsError::NonZeroPadding);
    }

    Ok(out)
}
