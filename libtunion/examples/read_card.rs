//! Read a T-Union card resting on a PC/SC reader and print its contents.
//!
//! Usage:
//!   RUST_LOG=debug cargo run -p libtunion --example read_card --features pcsc

use anyhow::Context;
use libtunion::prelude::*;
use libtunion::transport::PcscTransport;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let transport = PcscTransport::open().context("no card on any PC/SC reader")?;
    let mut poller = PollerBuilder::new().with_transport(transport).build()?;
    let mut msg = Message::new();

    let state = poller.run(&mut msg, |event, msg| match event {
        PollerEvent::Detected => {
            println!("Card detected");
            PollerCommand::Continue
        }
        PollerEvent::Success => {
            print_message(msg);
            PollerCommand::Stop
        }
        PollerEvent::Fail(kind) => {
            eprintln!("Read failed: {}", kind);
            PollerCommand::Stop
        }
    });

    if state == PollerState::Fail {
        if let Some(e) = poller.session().last_failure() {
            anyhow::bail!("session ended in {}: {}", state, e);
        }
    }
    Ok(())
}

fn print_message(msg: &Message) {
    println!("Card number : {}", msg.card_number);
    println!("Card type   : {}", msg.card_type.code());
    println!("Area        : {}", msg.area_id);
    println!("Valid       : {} .. {}", msg.issue_date, msg.expiry_date);
    println!("App version : {}", msg.app_version);
    println!("Balance     : {}", Amount::new(msg.balance as i64));

    println!("\n{} transactions", msg.transaction_count());
    for t in msg.transactions() {
        println!(
            "  #{:<5} {} {:>10} type {:02} @ {}",
            t.sequence,
            t.timestamp,
            t.signed_amount(),
            t.transaction_type,
            t.terminal_id
        );
    }

    println!("\n{} travels", msg.travel_count());
    for t in msg.travels() {
        println!(
            "  {} {:?} station {} area {} fare {} left {}",
            t.timestamp,
            t.kind(),
            t.station_id,
            t.area_id,
            t.fare(),
            Amount::new(i64::from(t.balance))
        );
    }
}
