use libtunion::Aid;
use libtunion::constants::{PPSE_AID, TRANSACTIONS_SFI, TRAVELS_SFI};
use libtunion::protocol::Command;

#[test]
fn select_ppse_bytes() {
    let cmd = Command::Select {
        aid: Aid::try_from(PPSE_AID).unwrap(),
    };
    assert_eq!(
        hex::encode_upper(cmd.encode()),
        "00A404000E325041592E5359532E444446303100"
    );
    assert_eq!(cmd.instruction(), 0xA4);
}

#[test]
fn select_application_bytes() {
    let aid = Aid::try_from(&hex::decode("A000000632010105").unwrap()[..]).unwrap();
    assert_eq!(
        Command::Select { aid }.encode(),
        hex::decode("00A4040008A00000063201010500").unwrap()
    );
}

#[test]
fn read_balance_bytes() {
    assert_eq!(Command::ReadBalance.encode(), vec![0x80, 0x5C, 0x00, 0x02, 0x04]);
}

#[test]
fn read_record_p2_carries_sfi() {
    let tx = Command::ReadRecord {
        sfi: TRANSACTIONS_SFI,
        record: 1,
    };
    assert_eq!(tx.encode(), vec![0x00, 0xB2, 0x01, 0xC4, 0x00]);

    let travel = Command::ReadRecord {
        sfi: TRAVELS_SFI,
        record: 30,
    };
    assert_eq!(travel.encode(), vec![0x00, 0xB2, 0x1E, 0xF4, 0x00]);
}

#[test]
fn encode_into_reuses_buffer() {
    let mut buf = Vec::with_capacity(64);
    Command::ReadBalance.encode_into(&mut buf);
    buf.clear();
    Command::ReadRecord { sfi: 0x18, record: 2 }.encode_into(&mut buf);
    assert_eq!(buf, vec![0x00, 0xB2, 0x02, 0xC4, 0x00]);
}
