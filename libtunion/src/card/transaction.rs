use crate::types::{Amount, Timestamp};

/// Meaning of a transaction's type byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransactionKind {
    /// 2: balance top-up
    TopUp,
    /// 9: composite (multi-leg) payment
    CompositePayment,
    Other(u8),
}

impl From<u8> for TransactionKind {
    fn from(value: u8) -> Self {
        match value {
            2 => TransactionKind::TopUp,
            9 => TransactionKind::CompositePayment,
            o => TransactionKind::Other(o),
        }
    }
}

/// One entry of the transaction log (SFI 0x18).
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Transaction {
    pub sequence: u16,
    /// Unsigned amount in minor units as stored on the card
    pub amount: u32,
    pub transaction_type: u8,
    /// 12 hex digits
    pub terminal_id: String,
    pub timestamp: Timestamp,
}

impl Transaction {
    /// Records with a zero type byte are empty slots.
    pub fn is_populated(&self) -> bool {
        self.transaction_type != 0
    }

    pub fn kind(&self) -> TransactionKind {
        TransactionKind::from(self.transaction_type)
    }

    /// Top-ups credit the card, everything else debits it.
    pub fn signed_amount(&self) -> Amount {
        let amount = i64::from(self.amount);
        match self.kind() {
            TransactionKind::TopUp => Amount::new(amount),
            _ => Amount::new(-amount),
        }
    }
}
