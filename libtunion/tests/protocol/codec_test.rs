use libtunion::Error;
use libtunion::protocol::codec::{
    bytes_to_num_bcd, bytes_to_num_be, bytes_to_str_hex, is_valid_bcd,
};
use proptest::prelude::*;

#[test]
fn big_endian_widths() {
    assert_eq!(bytes_to_num_be(&[]).unwrap(), 0);
    assert_eq!(bytes_to_num_be(&[0x01, 0xF4]).unwrap(), 500);
    assert_eq!(bytes_to_num_be(&[0xFF; 8]).unwrap(), u64::MAX);
    assert!(matches!(
        bytes_to_num_be(&[0x00; 9]),
        Err(Error::InvalidLength {
            expected: 8,
            actual: 9
        })
    ));
}

#[test]
fn bcd_dates_and_limits() {
    assert_eq!(bytes_to_num_bcd(&[0x20, 0x25]).unwrap(), 2025);
    assert_eq!(bytes_to_num_bcd(&[0x09]).unwrap(), 9);
    assert_eq!(
        bytes_to_num_bcd(&[0x99; 9]).unwrap(),
        999_999_999_999_999_999
    );
    assert!(bytes_to_num_bcd(&[0x00; 10]).is_err());
}

#[test]
fn bcd_accepts_non_decimal_nibbles() {
    // 0x1A decodes as 1*10 + 10
    assert_eq!(bytes_to_num_bcd(&[0x1A]).unwrap(), 20);
    assert!(!is_valid_bcd(&[0x1A]));
    assert!(is_valid_bcd(&[0x20, 0x25, 0x12, 0x31]));
}

#[test]
fn hex_rendering_matches_hex_crate() {
    let raw = [0x00, 0x9A, 0xBC, 0xFF];
    assert_eq!(bytes_to_str_hex(&raw), hex::encode_upper(raw));
    assert_eq!(bytes_to_str_hex(&[]), "");
}

proptest! {
    #[test]
    fn hex_is_two_digits_per_byte(bytes in proptest::collection::vec(any::<u8>(), 0..64)) {
        let s = bytes_to_str_hex(&bytes);
        prop_assert_eq!(s.len(), bytes.len() * 2);
        prop_assert_eq!(hex::decode(&s).unwrap(), bytes);
    }

    #[test]
    fn be_matches_u32_from_be_bytes(v in any::<u32>()) {
        prop_assert_eq!(bytes_to_num_be(&v.to_be_bytes()).unwrap(), u64::from(v));
    }
}

#[test]
fn trace_dump_parses_back() {
    let raw = hex::decode("00A404000E325041592E5359532E444446303100").unwrap();
    let dump = libtunion::bytes_to_hex_spaced(&raw);
    assert_eq!(libtunion::parse_hex(&dump).unwrap(), raw);
    assert_eq!(libtunion::parse_hex("6a 82").unwrap(), vec![0x6A, 0x82]);
}
