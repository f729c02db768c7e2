// tunion-rs/libtunion/src/protocol/commands/select.rs

pub const CLA_ISO: u8 = 0x00;
pub const INS_SELECT: u8 = 0xA4;
/// P1: select by name
pub const P1_BY_NAME: u8 = 0x04;
/// P2: first or only occurrence
pub const P2_FIRST: u8 = 0x00;

/// Encode SELECT: `00 A4 04 00 <Lc> <AID> 00`
pub fn encode_select(buf: &mut Vec<u8>, aid: &[u8]) {
    buf.extend_from_slice(&[CLA_ISO, INS_SELECT, P1_BY_NAME, P2_FIRST]);
    buf.push(aid.len() as u8);
    buf.extend_from_slice(aid);
    buf.push(0x00); // Le
}
