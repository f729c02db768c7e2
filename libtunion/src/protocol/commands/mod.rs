// tunion-rs/libtunion/src/protocol/commands/mod.rs

pub mod balance;
pub mod read_record;
pub mod select;

pub use balance::encode_read_balance;
pub use read_record::encode_read_record;
pub use select::encode_select;

use crate::types::Aid;

/// High-level Command enum. Each command's wire layout lives in its own
/// `protocol::commands::<name>.rs` encoder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// SELECT by name (PPSE or application AID)
    Select { aid: Aid },
    /// Proprietary GET BALANCE
    ReadBalance,
    /// READ RECORD from a short file identifier
    ReadRecord { sfi: u8, record: u8 },
}

impl Command {
    /// Append the command bytes to `buf` without clearing it.
    pub fn encode_into(&self, buf: &mut Vec<u8>) {
        match self {
            Command::Select { aid } => encode_select(buf, aid.as_bytes()),
            Command::ReadBalance => encode_read_balance(buf),
            Command::ReadRecord { sfi, record } => encode_read_record(buf, *sfi, *record),
        }
    }

    pub fn encode(&self) -> Vec<u8> {
        let mut buf = Vec::new();
        self.encode_into(&mut buf);
        buf
    }

    /// Instruction byte (INS)
    pub fn instruction(&self) -> u8 {
        match self {
            Command::Select { .. } => select::INS_SELECT,
            Command::ReadBalance => balance::INS_GET_BALANCE,
            Command::ReadRecord { .. } => read_record::INS_READ_RECORD,
        }
    }
}
