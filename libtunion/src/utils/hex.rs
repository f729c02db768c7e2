//! Hex helpers used for trace dumps and for feeding captured card dumps into
//! tests and demos.

use std::fmt::Write;

/// Format bytes as uppercase hex pairs separated by single spaces, the layout
/// used for TX/RX trace lines.
///
/// Example: `&[0x00, 0xA4]` -> `"00 A4"`
pub fn bytes_to_hex_spaced(bytes: &[u8]) -> String {
    let mut s = String::with_capacity(bytes.len() * 3);
    for (i, b) in bytes.iter().enumerate() {
        if i != 0 {
            s.push(' ');
        }
        let _ = write!(&mut s, "{:02X}", b);
    }
    s
}

/// Parse a hex dump into bytes. ASCII whitespace between digits is ignored so
/// dumps copied from trace output parse unchanged.
pub fn parse_hex(s: &str) -> Result<Vec<u8>, String> {
    let digits: Vec<u8> = s.bytes().filter(|c| !c.is_ascii_whitespace()).collect();

    if digits.len() % 2 != 0 {
        return Err("hex string has odd length".to_string());
    }

    digits
        .chunks(2)
        .map(|pair| {
            let text = std::str::from_utf8(pair).map_err(|e| e.to_string())?;
            u8::from_str_radix(text, 16).map_err(|e| format!("invalid hex pair '{}': {}", text, e))
        })
        .collect()
}
