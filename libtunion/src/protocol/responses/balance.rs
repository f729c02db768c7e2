// tunion-rs/libtunion/src/protocol/responses/balance.rs

use crate::Result;
use crate::constants::BALANCE_RESP_LEN;
use crate::protocol::{codec, parser};

/// Decode a read-balance response.
/// Layout: the whole 6-byte frame is one big-endian unsigned integer in minor units.
pub fn decode_balance(data: &[u8]) -> Result<u64> {
    parser::check_status(data)?;
    parser::expect_len(data, BALANCE_RESP_LEN)?;
    codec::bytes_to_num_be(data)
}
