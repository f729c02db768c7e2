// tunion-rs/libtunion/src/protocol/commands/balance.rs

pub const CLA_PROPRIETARY: u8 = 0x80;
pub const INS_GET_BALANCE: u8 = 0x5C;

/// Encode GET BALANCE: `80 5C 00 02 04`
pub fn encode_read_balance(buf: &mut Vec<u8>) {
    buf.extend_from_slice(&[
        CLA_PROPRIETARY,
        INS_GET_BALANCE,
        0x00, // P1
        0x02, // P2: electronic purse
        0x04, // Le
    ]);
}
