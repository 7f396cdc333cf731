/// The bech32 alphabet. A character's index is its 5-bit symbol value.
pub const CHARSET: [u8; 32] = *b"qpzry9x8gf2tvdw0s3jn54khce6mua7l";

const NOT_IN_CHARSET: u8 = 0xff;

const CHARSET_REV: [u8; 128] = {
    let mut table = [NOT_IN_CHARSET; 128];
    let mut i = 0;
    while i < CHARSET.len() {
        table[CHARSET[i] as usize] = i as u8;
        i += 1;
    }
    table
};

/// Symbol value of `c`, or `None` if it is not in [`CHARSET`].
///
/// Lookup is case-sensitive: callers lowercase first.
pub fn symbol_value(c: char) -> Option<u8> {
    if !c.is_ascii() {
        return None;
    }
    match CHARSET_REV[c as usize] {
        NOT_IN_CHARSET => None,
        value => Some(value),
    }
}
