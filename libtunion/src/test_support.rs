//! Test support helpers intended for use by unit and integration tests.
//!
//! These build card responses in the exact layouts a T-Union card returns so
//! tests across the crate and the tests/ directory share one source of truth.
#![allow(dead_code)]

use crate::transport::mock::MockTransport;

/// T-Union application identifier
pub const T_UNION_AID: &[u8] = &[0xA0, 0x00, 0x00, 0x06, 0x32, 0x01, 0x01, 0x05];

/// Success status trailer
pub const SW_OK: [u8; 2] = [0x90, 0x00];

/// Encode one TLV record, using the two-byte length form above 127.
#[doc(hidden)]
pub fn tlv(tag: u16, value: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(value.len() + 4);
    if tag > 0xFF {
        out.extend_from_slice(&tag.to_be_bytes());
    } else {
        out.push(tag as u8);
    }
    if value.len() > 0x7F {
        out.push(0x81);
    }
    out.push(value.len() as u8);
    out.extend_from_slice(value);
    out
}

/// PPSE select response advertising one application.
#[doc(hidden)]
pub fn ppse_response(label: &str, aid: &[u8]) -> Vec<u8> {
    let mut entry = tlv(0x4F, aid);
    entry.extend(tlv(0x50, label.as_bytes()));
    entry.extend(tlv(0x87, &[0x01]));

    let directory = tlv(0xBF0C, &tlv(0x61, &entry));
    let mut fci = tlv(0x84, crate::constants::PPSE_AID);
    fci.extend(tlv(0xA5, &directory));

    let mut out = tlv(0x6F, &fci);
    out.extend_from_slice(&SW_OK);
    out
}

/// Application metadata (tag 9F0C value), 30 bytes.
#[doc(hidden)]
pub fn app_meta_value() -> Vec<u8> {
    let mut d = vec![0x01, 0x00];
    d.extend_from_slice(&[0x31, 0x00]); // area
    d.extend_from_slice(&[0x00; 6]);
    d.extend_from_slice(&[0x03, 0x10, 0x44, 0x90, 0x00, 0x12, 0x34, 0x56, 0x78, 0x90]);
    d.extend_from_slice(&[0x20, 0x19, 0x05, 0x20]); // issued
    d.extend_from_slice(&[0x20, 0x29, 0x05, 0x19]); // expires
    d.extend_from_slice(&[0x00, 0x00]);
    d
}

/// Application select response with version and metadata.
#[doc(hidden)]
pub fn application_response(aid: &[u8]) -> Vec<u8> {
    let mut proprietary = tlv(0x9F08, &[0x02]);
    proprietary.extend(tlv(0x9F0C, &app_meta_value()));

    let mut fci = tlv(0x84, aid);
    fci.extend(tlv(0xA5, &proprietary));

    let mut out = tlv(0x6F, &fci);
    out.extend_from_slice(&SW_OK);
    out
}

/// 6-byte balance response.
#[doc(hidden)]
pub fn balance_response(minor_units: u64) -> Vec<u8> {
    minor_units.to_be_bytes()[2..].to_vec()
}

/// 25-byte transaction-log record.
#[doc(hidden)]
pub fn transaction_record(sequence: u16, transaction_type: u8, amount: u32) -> Vec<u8> {
    let mut d = sequence.to_be_bytes().to_vec();
    d.extend_from_slice(&[0x00, 0x00, 0x00]);
    d.extend_from_slice(&amount.to_be_bytes());
    d.push(transaction_type);
    d.extend_from_slice(&[0x11, 0x22, 0x33, 0x44, 0x55, 0x66]);
    d.extend_from_slice(&[0x20, 0x25, 0x03, 0x14, 0x07, 0x45, 0x09]);
    d.extend_from_slice(&SW_OK);
    d
}

/// 50-byte travel-log record.
#[doc(hidden)]
pub fn travel_record(travel_type: u8, amount: u32) -> Vec<u8> {
    let mut d = vec![travel_type];
    d.extend_from_slice(&[0xA1, 0xA2, 0xA3, 0xA4, 0xA5, 0xA6, 0xA7, 0xA8]);
    d.push(0x01);
    d.extend_from_slice(&[0x01, 0x02, 0x03, 0x04, 0x05, 0x06, 0x07]);
    d.extend_from_slice(&amount.to_be_bytes());
    d.extend_from_slice(&9800u32.to_be_bytes());
    d.extend_from_slice(&[0x20, 0x24, 0x06, 0x01, 0x18, 0x00, 0x30]);
    d.extend_from_slice(&[0x31, 0x00]);
    d.extend_from_slice(&[0x10, 0x20, 0x30, 0x40, 0x50, 0x60, 0x70, 0x80]);
    d.extend_from_slice(&[0x00; 6]);
    d.extend_from_slice(&SW_OK);
    d
}

/// Seed a mock with a complete successful session: PPSE, application,
/// balance, then `transactions` and `travels` records.
#[doc(hidden)]
pub fn seed_card_session(mock: &mut MockTransport, transactions: usize, travels: usize) {
    mock.push_response(ppse_response(crate::constants::T_UNION_APPL_LABEL, T_UNION_AID));
    mock.push_response(application_response(T_UNION_AID));
    mock.push_response(balance_response(10000));
    for i in 0..transactions {
        mock.push_response(transaction_record(i as u16 + 1, 9, 200));
    }
    for i in 0..travels {
        mock.push_response(travel_record(if i % 2 == 0 { 3 } else { 4 }, 200));
    }
}

/// Mock pre-seeded by [`seed_card_session`].
#[doc(hidden)]
pub fn card_session_mock(transactions: usize, travels: usize) -> MockTransport {
    let mut mock = MockTransport::new();
    seed_card_session(&mut mock, transactions, travels);
    mock
}
