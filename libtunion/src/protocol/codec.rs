// tunion-rs/libtunion/src/protocol/codec.rs

//! Integer and string conversions for the card's binary record layouts.

use crate::{Error, Result};

/// Widest big-endian run that fits a u64.
pub const BE_MAX_LEN: usize = 8;

/// Widest BCD run that fits a u64 (18 decimal digits).
pub const BCD_MAX_LEN: usize = 9;

/// Decode a big-endian unsigned integer of up to 8 bytes.
pub fn bytes_to_num_be(src: &[u8]) -> Result<u64> {
    if src.len() > BE_MAX_LEN {
        return Err(Error::InvalidLength {
            expected: BE_MAX_LEN,
            actual: src.len(),
        });
    }
    Ok(src.iter().fold(0u64, |acc, &b| (acc << 8) | u64::from(b)))
}

/// Decode packed BCD, high nibble first, of up to 9 bytes.
///
/// Nibbles above 9 are not rejected; they are accumulated as-is. Use
/// [`is_valid_bcd`] to check input first.
pub fn bytes_to_num_bcd(src: &[u8]) -> Result<u64> {
    if src.len() > BCD_MAX_LEN {
        return Err(Error::InvalidLength {
            expected: BCD_MAX_LEN,
            actual: src.len(),
        });
    }
    Ok(src.iter().fold(0u64, |acc, &b| {
        let acc = acc * 10 + u64::from(b >> 4);
        acc * 10 + u64::from(b & 0x0F)
    }))
}

/// True when every nibble is a decimal digit.
pub fn is_valid_bcd(src: &[u8]) -> bool {
    src.iter().all(|&b| (b >> 4) < 10 && (b & 0x0F) < 10)
}

/// Render bytes as uppercase hex without separators.
pub fn bytes_to_str_hex(src: &[u8]) -> String {
    const DIGITS: &[u8; 16] = b"0123456789ABCDEF";
    let mut s = String::with_capacity(src.len() * 2);
    for &b in src {
        s.push(DIGITS[(b >> 4) as usize] as char);
        s.push(DIGITS[(b & 0x0F) as usize] as char);
    }
    s
}
