// tunion-rs/libtunion/src/protocol/responses/mod.rs

//! Fixed-offset decoders for the card's binary records. Balance and record
//! reads are plain binary frames; the application metadata arrives as the
//! value of tag 9F0C inside a select response.

pub mod app_meta;
pub mod balance;
pub mod transaction;
pub mod travel;

pub use app_meta::decode_app_meta;
pub use balance::decode_balance;
pub use transaction::decode_transaction;
pub use travel::decode_travel;

use crate::Result;
use crate::protocol::parser;
use crate::types::{CardDate, Timestamp};

/// `YYYY MM DD` as four BCD bytes at `idx`.
pub(crate) fn date_at(data: &[u8], idx: usize) -> Result<CardDate> {
    Ok(CardDate {
        year: parser::bcd_at(data, idx, 2)? as u16,
        month: parser::bcd_at(data, idx + 2, 1)? as u8,
        day: parser::bcd_at(data, idx + 3, 1)? as u8,
    })
}

/// `YYYY MM DD hh mm ss` as seven BCD bytes at `idx`.
pub(crate) fn timestamp_at(data: &[u8], idx: usize) -> Result<Timestamp> {
    Ok(Timestamp {
        date: date_at(data, idx)?,
        hour: parser::bcd_at(data, idx + 4, 1)? as u8,
        minute: parser::bcd_at(data, idx + 5, 1)? as u8,
        second: parser::bcd_at(data, idx + 6, 1)? as u8,
    })
}
