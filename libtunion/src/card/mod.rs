// tunion-rs/libtunion/src/card/mod.rs

use crate::constants::{TRANSACTIONS_MAX, TRAVELS_MAX};
use crate::types::{CardDate, CardType};
use crate::{Error, Result};

mod transaction;
mod travel;

pub mod operations;

pub use transaction::{Transaction, TransactionKind};
pub use travel::{Travel, TravelKind};

/// Everything read from a card in one session.
///
/// The caller owns the message and hands it to the poller by `&mut`; the
/// poller resets it when a card is detected and fills it as responses arrive.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Message {
    pub app_version: u8,
    pub card_type: CardType,
    /// Issuing area code, 4 hex digits
    pub area_id: String,
    /// 19 hex digits
    pub card_number: String,
    pub issue_date: CardDate,
    pub expiry_date: CardDate,
    /// Minor currency units
    pub balance: u64,
    transactions: [Transaction; TRANSACTIONS_MAX],
    transaction_cnt: usize,
    travels: [Travel; TRAVELS_MAX],
    travel_cnt: usize,
}

impl Message {
    pub fn new() -> Self {
        Self::default()
    }

    /// Zero every field and count.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Store a transaction at its slot. Only records with a non-zero type
    /// raise the populated count.
    pub fn store_transaction(&mut self, index: usize, transaction: Transaction) -> Result<()> {
        let slot = self
            .transactions
            .get_mut(index)
            .ok_or(Error::InvalidLength {
                expected: TRANSACTIONS_MAX,
                actual: index + 1,
            })?;
        let populated = transaction.is_populated();
        *slot = transaction;
        if populated && self.transaction_cnt < TRANSACTIONS_MAX {
            self.transaction_cnt += 1;
        }
        Ok(())
    }

    pub fn store_travel(&mut self, index: usize, travel: Travel) -> Result<()> {
        let slot = self.travels.get_mut(index).ok_or(Error::InvalidLength {
            expected: TRAVELS_MAX,
            actual: index + 1,
        })?;
        let populated = travel.is_populated();
        *slot = travel;
        if populated && self.travel_cnt < TRAVELS_MAX {
            self.travel_cnt += 1;
        }
        Ok(())
    }

    pub fn transaction_count(&self) -> usize {
        self.transaction_cnt
    }

    pub fn travel_count(&self) -> usize {
        self.travel_cnt
    }

    /// All transaction slots, including empty ones.
    pub fn transaction_slots(&self) -> &[Transaction] {
        &self.transactions
    }

    pub fn travel_slots(&self) -> &[Travel] {
        &self.travels
    }

    /// Populated transactions in slot order.
    pub fn transactions(&self) -> impl Iterator<Item = &Transaction> {
        self.transactions.iter().filter(|t| t.is_populated())
    }

    /// Populated travel entries in slot order.
    pub fn travels(&self) -> impl Iterator<Item = &Travel> {
        self.travels.iter().filter(|t| t.is_populated())
    }
}
