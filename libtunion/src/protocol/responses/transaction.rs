// tunion-rs/libtunion/src/protocol/responses/transaction.rs

use crate::Result;
use crate::card::Transaction;
use crate::constants::TRANSACTION_RESP_LEN;
use crate::protocol::parser;

use super::timestamp_at;

/// Decode one transaction-log record (25 bytes).
/// Layout: seq(2) + reserved(3) + amount(4) + type(1) + terminal(6) + time(7) + trailer(2)
pub fn decode_transaction(data: &[u8]) -> Result<Transaction> {
    parser::check_status(data)?;
    parser::expect_len(data, TRANSACTION_RESP_LEN)?;

    Ok(Transaction {
        sequence: parser::be_at(data, 0x00, 2)? as u16,
        amount: parser::be_at(data, 0x05, 4)? as u32,
        transaction_type: parser::byte_at(data, 0x09)?,
        terminal_id: parser::hex_at(data, 0x0A, 6)?,
        timestamp: timestamp_at(data, 0x10)?,
    })
}
