// tunion-rs/libtunion/src/protocol/parser.rs

use crate::{Error, Result};

/// Ensure the slice has at least `min` bytes.
pub fn ensure_len(data: &[u8], min: usize) -> Result<()> {
    if data.len() < min {
        return Err(Error::InvalidLength {
            expected: min,
            actual: data.len(),
        });
    }
    Ok(())
}

/// Ensure the slice has exactly `len` bytes.
pub fn expect_len(data: &[u8], len: usize) -> Result<()> {
    if data.len() != len {
        return Err(Error::InvalidLength {
            expected: len,
            actual: data.len(),
        });
    }
    Ok(())
}

/// Return a subslice with bounds checking.
pub fn slice_at(data: &[u8], idx: usize, len: usize) -> Result<&[u8]> {
    let end = idx.checked_add(len).ok_or(Error::InvalidLength {
        expected: usize::MAX,
        actual: data.len(),
    })?;
    ensure_len(data, end)?;
    Ok(&data[idx..end])
}

/// Read a single byte at `idx` with bounds checking.
pub fn byte_at(data: &[u8], idx: usize) -> Result<u8> {
    ensure_len(data, idx + 1)?;
    Ok(data[idx])
}

/// Big-endian unsigned integer of `len` bytes at `idx`.
pub fn be_at(data: &[u8], idx: usize, len: usize) -> Result<u64> {
    super::codec::bytes_to_num_be(slice_at(data, idx, len)?)
}

/// Packed BCD integer of `len` bytes at `idx`.
pub fn bcd_at(data: &[u8], idx: usize, len: usize) -> Result<u64> {
    super::codec::bytes_to_num_bcd(slice_at(data, idx, len)?)
}

/// Uppercase hex rendering of `len` bytes at `idx`.
pub fn hex_at(data: &[u8], idx: usize, len: usize) -> Result<String> {
    Ok(super::codec::bytes_to_str_hex(slice_at(data, idx, len)?))
}

/// A whole response of exactly two bytes whose first nibble is 6 is an
/// EMV error/warning status word.
pub fn status_word(data: &[u8]) -> Option<(u8, u8)> {
    match data {
        [sw1, sw2] if sw1 >> 4 == 6 => Some((*sw1, *sw2)),
        _ => None,
    }
}

/// Fail with `CardStatus` when the response is a bare error status word.
pub fn check_status(data: &[u8]) -> Result<()> {
    match status_word(data) {
        Some((sw1, sw2)) => {
            log::trace!(" Error/warning code: {:02X} {:02X}", sw1, sw2);
            Err(Error::CardStatus { sw1, sw2 })
        }
        None => Ok(()),
    }
}
