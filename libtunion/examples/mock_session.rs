//! Walk the poller through a scripted card session without hardware,
//! printing every state change and TX/RX frame.
//!
//! Usage:
//!   RUST_LOG=trace cargo run -p libtunion --example mock_session

use libtunion::prelude::*;
use libtunion::test_support;

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();

    let mock = test_support::card_session_mock(3, 4);
    let mut poller = PollerBuilder::new()
        .with_transport(mock)
        .with_config(PollerConfig::immediate())
        .record_limits(3, 4)
        .build()?;
    let mut msg = Message::new();

    loop {
        let before = poller.state();
        let cmd = poller.step(&mut msg, |event, _| {
            println!("event: {:?}", event);
            match event {
                PollerEvent::Detected => PollerCommand::Continue,
                _ => PollerCommand::Stop,
            }
        });
        println!("{} -> {}", before, poller.state());
        if cmd == PollerCommand::Stop {
            break;
        }
    }

    println!(
        "balance {}, {} transactions, {} travels",
        Amount::new(msg.balance as i64),
        msg.transaction_count(),
        msg.travel_count()
    );
    for sent in &poller.transport().sent {
        println!("sent {}", bytes_to_hex_spaced(sent));
    }
    Ok(())
}
