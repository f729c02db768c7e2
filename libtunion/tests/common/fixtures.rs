// fixtures.rs: card responses captured from a T-Union card, identifiers altered

pub const T_UNION_AID_HEX: &str = "A000000632010105";

const PPSE_RESPONSE: &str = "6F31840E325041592E5359532E4444463031A51FBF0C1C611A4F08A000000632010105\
                             500B4D4F542E542E554E494F4E8701019000";

const APPLICATION_RESPONSE: &str = "6F318408A000000632010105A5259F0801029F0C1E02005300000000000000\
                                    02150000987654321012202001102030010900009000";

/// seq 7, top-up of 5.00 at terminal 010203040506
const TRANSACTION_RECORD: &str = "0007000000000001F402010203040506202503140745099000";

/// single-swipe fare of 1.00, 100.00 left
const TRAVEL_RECORD: &str = "06112233445566778800 0A0B0C0D0E0F10 00000064 00002710 \
                             20240601180030 1000 0102030405060708 000000000000 9000";

fn decode(s: &str) -> Vec<u8> {
    libtunion::parse_hex(s).unwrap()
}

pub fn t_union_aid() -> Vec<u8> {
    decode(T_UNION_AID_HEX)
}

pub fn ppse_response() -> Vec<u8> {
    decode(PPSE_RESPONSE)
}

pub fn application_response() -> Vec<u8> {
    decode(APPLICATION_RESPONSE)
}

/// 88.88 in minor units
pub fn balance_response() -> Vec<u8> {
    decode("0000000022B8")
}

pub fn transaction_record() -> Vec<u8> {
    decode(TRANSACTION_RECORD)
}

pub fn travel_record() -> Vec<u8> {
    decode(TRAVEL_RECORD)
}

/// Status words a card answers with instead of data.
pub fn file_not_found() -> Vec<u8> {
    vec![0x6A, 0x82]
}

pub fn record_not_found() -> Vec<u8> {
    vec![0x6A, 0x83]
}
