// tunion-rs/libtunion/src/protocol/responses/travel.rs

use crate::Result;
use crate::card::Travel;
use crate::constants::TRAVEL_RESP_LEN;
use crate::protocol::parser;

use super::timestamp_at;

/// Decode one travel-log record (50 bytes).
/// Layout: type(1) + terminal(8) + sub_type(1) + station(7) + amount(4) +
/// balance(4) + time(7) + area(2) + institution(8) + reserved(6) + trailer(2)
pub fn decode_travel(data: &[u8]) -> Result<Travel> {
    parser::check_status(data)?;
    parser::expect_len(data, TRAVEL_RESP_LEN)?;

    Ok(Travel {
        travel_type: parser::byte_at(data, 0x00)?,
        terminal_id: parser::hex_at(data, 0x01, 8)?,
        sub_type: parser::byte_at(data, 0x09)?,
        station_id: parser::hex_at(data, 0x0A, 7)?,
        amount: parser::be_at(data, 0x11, 4)? as u32,
        balance: parser::be_at(data, 0x15, 4)? as u32,
        timestamp: timestamp_at(data, 0x19)?,
        area_id: parser::hex_at(data, 0x20, 2)?,
        institution_id: parser::hex_at(data, 0x22, 8)?,
    })
}
