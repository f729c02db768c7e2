// tunion-rs/libtunion/src/protocol/commands/read_record.rs

pub const INS_READ_RECORD: u8 = 0xB2;

/// P2 low bits: P1 is a record number
const P2_RECORD_NUMBER: u8 = 0x04;

/// Encode READ RECORD: `00 B2 <record> <(sfi << 3) | 4> 00`
pub fn encode_read_record(buf: &mut Vec<u8>, sfi: u8, record: u8) {
    buf.extend_from_slice(&[
        0x00,
        INS_READ_RECORD,
        record,
        (sfi << 3) | P2_RECORD_NUMBER,
        0x00, // Le
    ]);
}
