#[path = "../common/mod.rs"]
mod common;

use libtunion::card::Message;
use libtunion::poller::{PollerCommand, PollerConfig, PollerEvent, PollerState};
use libtunion::test_support;
use libtunion::transport::MockTransport;
use libtunion::{ErrorKind, LinkError, Poller};

fn poller(mock: MockTransport) -> Poller<MockTransport> {
    Poller::new(
        mock,
        PollerConfig {
            transactions_max: 2,
            travels_max: 2,
            ..PollerConfig::immediate()
        },
    )
}

#[test]
fn states_visited_in_order() {
    common::init_logger();
    let mut p = poller(test_support::card_session_mock(2, 2));
    let mut msg = Message::new();

    let mut visited = vec![p.state()];
    while !p.state().is_terminal() {
        p.step(&mut msg, |_, _| PollerCommand::Continue);
        visited.push(p.state());
    }
    assert_eq!(
        visited,
        vec![
            PollerState::Idle,
            PollerState::SelectPpse,
            PollerState::SelectApplication,
            PollerState::ReadBalance,
            PollerState::ReadTransactions,
            PollerState::ReadTravels,
            PollerState::Success,
        ]
    );
}

#[test]
fn success_callback_sees_filled_message() {
    let mut p = poller(test_support::card_session_mock(2, 2));
    let mut msg = Message::new();
    let mut seen = None;

    let parked = p.run(&mut msg, |event, m| {
        if event == PollerEvent::Success {
            seen = Some((m.balance, m.transaction_count(), m.travel_count()));
            return PollerCommand::Stop;
        }
        PollerCommand::Continue
    });

    assert_eq!(parked, PollerState::Success);
    assert_eq!(seen, Some((10000, 2, 2)));
}

#[test]
fn detected_callback_sees_reset_message() {
    let mut p = poller(test_support::card_session_mock(0, 0));
    let mut msg = Message::new();
    msg.balance = 42;
    msg.card_number = "stale".to_string();

    p.step(&mut msg, |event, m| {
        assert_eq!(event, PollerEvent::Detected);
        assert_eq!(m, &Message::default());
        PollerCommand::Continue
    });
    assert_eq!(p.state(), PollerState::SelectPpse);
}

#[test]
fn stop_on_detected_parks_at_idle() {
    let mut p = poller(test_support::card_session_mock(0, 0));
    let mut msg = Message::new();

    let parked = p.run(&mut msg, |_, _| PollerCommand::Stop);
    assert_eq!(parked, PollerState::Idle);
    assert!(p.transport().sent.is_empty());
}

#[test]
fn fail_event_carries_kind_then_rearms() {
    let mut mock = MockTransport::new();
    mock.push_error(LinkError::Timeout);
    test_support::seed_card_session(&mut mock, 2, 2);
    let mut p = poller(mock);
    let mut msg = Message::new();
    let mut events = Vec::new();

    // keep polling through the failure until the second card succeeds
    p.run(&mut msg, |event, _| {
        events.push(event);
        match event {
            PollerEvent::Success => PollerCommand::Stop,
            _ => PollerCommand::Continue,
        }
    });

    assert_eq!(
        events,
        vec![
            PollerEvent::Detected,
            PollerEvent::Fail(ErrorKind::Timeout),
            PollerEvent::Detected,
            PollerEvent::Success,
        ]
    );
    assert_eq!(p.state(), PollerState::Success);
    assert_eq!(msg.transaction_count(), 2);
}

#[test]
fn stop_on_fail_keeps_error() {
    let mut mock = MockTransport::new();
    mock.push_error(LinkError::NotPresent);
    let mut p = poller(mock);
    let mut msg = Message::new();

    let parked = p.run(&mut msg, |event, _| match event {
        PollerEvent::Fail(_) => PollerCommand::Stop,
        _ => PollerCommand::Continue,
    });
    assert_eq!(parked, PollerState::Fail);
    assert_eq!(p.last_error(), ErrorKind::NotPresent);

    // stepping again re-reports the same failure
    let mut again = None;
    p.step(&mut msg, |event, _| {
        again = Some(event);
        PollerCommand::Stop
    });
    assert_eq!(again, Some(PollerEvent::Fail(ErrorKind::NotPresent)));
}

#[test]
fn every_exchange_uses_configured_timeout() {
    let mut p = Poller::new(
        test_support::card_session_mock(1, 1),
        PollerConfig {
            exchange_timeout: libtunion::ms(250),
            transactions_max: 1,
            travels_max: 1,
            ..PollerConfig::immediate()
        },
    );
    let mut msg = Message::new();
    p.read_card(&mut msg).unwrap();

    let timeouts = &p.transport().timeouts;
    assert_eq!(timeouts.len(), 5);
    assert!(timeouts.iter().all(|t| *t == libtunion::ms(250)));
}
