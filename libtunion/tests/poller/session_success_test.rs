#[path = "../common/mod.rs"]
mod common;

use libtunion::card::{Message, TransactionKind, TravelKind};
use libtunion::poller::{PollerBuilder, PollerConfig, PollerState};
use libtunion::{ErrorKind, Poller};

fn captured_session(transactions: usize, travels: usize) -> libtunion::transport::MockTransport {
    let mut script = vec![
        common::fixtures::ppse_response(),
        common::fixtures::application_response(),
        common::fixtures::balance_response(),
    ];
    script.extend(std::iter::repeat_n(common::fixtures::transaction_record(), transactions));
    script.extend(std::iter::repeat_n(common::fixtures::travel_record(), travels));
    common::scripted_mock(&script)
}

#[test]
fn full_card_read() {
    common::init_logger();
    let mut poller = Poller::new(captured_session(10, 30), PollerConfig::immediate());
    let mut msg = Message::new();

    poller.read_card(&mut msg).unwrap();

    assert_eq!(poller.state(), PollerState::Success);
    assert_eq!(poller.last_error(), ErrorKind::None);
    assert_eq!(msg.app_version, 2);
    assert_eq!(msg.card_number, "2150000987654321012");
    assert_eq!(msg.area_id, "5300");
    assert_eq!(msg.balance, 8888);
    assert_eq!(msg.transaction_count(), 10);
    assert_eq!(msg.travel_count(), 30);
    assert!(msg.transactions().all(|t| t.kind() == TransactionKind::TopUp));
    assert!(msg.travels().all(|t| t.kind() == TravelKind::SingleSwipe));
}

#[test]
fn command_sequence_on_the_wire() {
    let mut poller = Poller::new(captured_session(10, 30), PollerConfig::immediate());
    let mut msg = Message::new();
    poller.read_card(&mut msg).unwrap();

    let sent = &poller.transport().sent;
    assert_eq!(sent.len(), 3 + 10 + 30);
    assert_eq!(
        hex::encode_upper(&sent[0]),
        "00A404000E325041592E5359532E444446303100"
    );
    assert_eq!(hex::encode_upper(&sent[1]), "00A4040008A00000063201010500");
    assert_eq!(sent[2], vec![0x80, 0x5C, 0x00, 0x02, 0x04]);
    // transaction records 1..=10 from SFI 0x18, then travel records 1..=30 from SFI 0x1E
    for (i, cmd) in sent[3..13].iter().enumerate() {
        assert_eq!(cmd, &vec![0x00, 0xB2, i as u8 + 1, 0xC4, 0x00]);
    }
    for (i, cmd) in sent[13..].iter().enumerate() {
        assert_eq!(cmd, &vec![0x00, 0xB2, i as u8 + 1, 0xF4, 0x00]);
    }
}

#[test]
fn empty_slots_are_not_counted() {
    let mut empty_tx = vec![0u8; 23];
    empty_tx.extend_from_slice(&libtunion::test_support::SW_OK);

    let mut script = vec![
        common::fixtures::ppse_response(),
        common::fixtures::application_response(),
        common::fixtures::balance_response(),
    ];
    script.push(common::fixtures::transaction_record());
    script.push(empty_tx);
    script.push(common::fixtures::travel_record());

    let mut poller = PollerBuilder::new()
        .with_transport(common::scripted_mock(&script))
        .with_config(PollerConfig::immediate())
        .record_limits(2, 1)
        .build()
        .unwrap();
    let mut msg = Message::new();
    poller.read_card(&mut msg).unwrap();

    assert_eq!(msg.transaction_count(), 1);
    assert_eq!(msg.transactions().count(), 1);
    assert_eq!(msg.travel_count(), 1);
}

#[test]
fn record_limits_are_clamped_to_capacity() {
    let mut poller = PollerBuilder::new()
        .with_transport(captured_session(10, 30))
        .with_config(PollerConfig::immediate())
        .record_limits(50, 100)
        .build()
        .unwrap();
    let mut msg = Message::new();
    poller.read_card(&mut msg).unwrap();

    assert_eq!(poller.transport().count_instruction(0xB2), 40);
}

#[test]
fn second_card_replaces_first() {
    let mut mock = captured_session(1, 1);
    libtunion::test_support::seed_card_session(&mut mock, 1, 1);
    let config = PollerConfig {
        transactions_max: 1,
        travels_max: 1,
        ..PollerConfig::immediate()
    };
    let mut poller = Poller::new(mock, config);
    let mut msg = Message::new();

    poller.read_card(&mut msg).unwrap();
    assert_eq!(msg.balance, 8888);

    poller.read_card(&mut msg).unwrap();
    assert_eq!(msg.balance, 10000);
    assert_eq!(msg.card_number, "3104490001234567890");
    assert_eq!(msg.transaction_count(), 1);
}
