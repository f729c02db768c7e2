// tunion-rs/libtunion/src/protocol/mod.rs

pub mod codec;
pub mod commands;
pub mod parser;
pub mod responses;
pub mod tlv;

pub use codec::{bytes_to_num_bcd, bytes_to_num_be, bytes_to_str_hex};
pub use commands::Command;
pub use responses::*;
pub use tlv::{DecodeTarget, decode_tlv};
