#![cfg(feature = "pcsc")]

use libtunion::card::Message;
use libtunion::poller::PollerBuilder;
use libtunion::Result;

use super::common;

// Needs a T-Union card resting on a PC/SC reader. Marked `#[ignore]` so CI
// does not attempt it. Run manually with:
//
// cargo test -p libtunion --test hardware --features pcsc -- --ignored

#[test]
#[ignore]
fn read_card_on_reader() -> Result<()> {
    let _ = env_logger::builder().is_test(true).try_init();

    let Some(transport) = common::open_card()? else {
        return Ok(());
    };
    let mut poller = PollerBuilder::new().with_transport(transport).build()?;
    let mut msg = Message::new();
    poller.read_card(&mut msg)?;

    assert_eq!(msg.card_number.len(), 19);
    assert!(msg.transaction_count() <= 10);
    assert!(msg.travel_count() <= 30);
    Ok(())
}
