#[path = "../common/mod.rs"]
mod common;

use std::time::Duration;

use libtunion::card::Message;
use libtunion::poller::PollerConfig;
use libtunion::transport::{MockTransport, Transport};
use libtunion::{LinkError, Poller};

#[test]
fn mock_transport_appends_response() {
    let mut m = common::scripted_mock(&[vec![0x27, 0x10]]);
    let mut rx = Vec::with_capacity(16);
    m.exchange(&[0x80, 0x5C, 0x00, 0x02, 0x04], &mut rx, Duration::from_millis(100))
        .unwrap();
    assert_eq!(rx, vec![0x27, 0x10]);
    assert_eq!(m.pop_sent(), Some(vec![0x80, 0x5C, 0x00, 0x02, 0x04]));
    assert!(m.sent.is_empty());
}

#[test]
fn exhausted_script_is_timeout() {
    let mut m = MockTransport::new();
    let mut rx = Vec::new();
    assert_eq!(
        m.exchange(&[0x00], &mut rx, Duration::ZERO),
        Err(LinkError::Timeout)
    );
    assert_eq!(m.sent.len(), 1);
}

#[test]
fn poller_over_borrowed_transport() {
    let mut mock = libtunion::test_support::card_session_mock(0, 0);
    {
        let config = PollerConfig {
            transactions_max: 0,
            travels_max: 0,
            ..PollerConfig::immediate()
        };
        let mut p = Poller::new(&mut mock, config);
        let mut msg = Message::new();
        p.read_card(&mut msg).unwrap();
    }
    // the borrow has ended; the mock still holds the history
    assert_eq!(mock.sent.len(), 3);
    assert!(mock.responses.is_empty());
}

#[test]
fn poller_over_boxed_transport() {
    let boxed: Box<dyn Transport> = Box::new(libtunion::test_support::card_session_mock(1, 1));
    let config = PollerConfig {
        transactions_max: 1,
        travels_max: 1,
        ..PollerConfig::immediate()
    };
    let mut p = Poller::new(boxed, config);
    let mut msg = Message::new();
    p.read_card(&mut msg).unwrap();
    assert_eq!(msg.travel_count(), 1);
}
