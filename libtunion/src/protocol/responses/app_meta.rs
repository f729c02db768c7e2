// tunion-rs/libtunion/src/protocol/responses/app_meta.rs

use crate::Result;
use crate::card::Message;
use crate::constants::APP_META_MIN_LEN;
use crate::protocol::parser;
use crate::types::CardType;

use super::date_at;

/// Decode the value of tag 9F0C straight into the message.
/// Layout: type(1) + rfu(1) + area(2) + rfu(6) + card_number(10) + issued(4) + expires(4)
pub fn decode_app_meta(data: &[u8], msg: &mut Message) -> Result<()> {
    parser::ensure_len(data, APP_META_MIN_LEN)?;

    msg.card_type = CardType::new(parser::bcd_at(data, 0x00, 1)? as u8);
    msg.area_id = parser::hex_at(data, 0x02, 2)?;

    // The 20-digit rendering carries one leading pad nibble; keep the last 19.
    let number = parser::hex_at(data, 0x0A, 10)?;
    msg.card_number = number[1..].to_string();

    msg.issue_date = date_at(data, 0x14)?;
    msg.expiry_date = date_at(data, 0x18)?;
    Ok(())
}
