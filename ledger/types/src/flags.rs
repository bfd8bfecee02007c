// Copyright (c) 2018-2022 The MobileCoin Foundation

//! Named flags and their bit positions.
//!
//! Every record kind that carries flags has an enum listing them. The bit
//! positions are part of the ledger client's wire contract and must not be
//! reordered. Packing and unpacking are the only operations on a flag set.

use core::fmt::Debug;
use serde::{Deserialize, Serialize};

/// A single named flag bound to one bit position.
pub trait Flag: Copy + Debug + Eq + Sized + 'static {
    /// Every defined flag, in bit order.
    const ALL: &'static [Self];

    /// The bit position of this flag.
    fn bit(self) -> u32;

    /// The mask with only this flag's bit set.
    fn mask(self) -> u32 {
        1 << self.bit()
    }
}

/// OR together the bits of the given flags.
pub fn pack<F: Flag>(flags: impl IntoIterator<Item = F>) -> u32 {
    flags.into_iter().fold(0, |bits, flag| bits | flag.mask())
}

/// Iterate over the defined flags whose bit is set. Undefined bits are
/// ignored.
pub fn unpack<F: Flag>(bits: u32) -> impl Iterator<Item = F> {
    F::ALL
        .iter()
        .copied()
        .filter(move |flag| bits & flag.mask() != 0)
}

/// Flags on an [Account](crate::Account).
#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize)]
pub enum AccountFlag {
    /// The account is created together with the next one in the batch.
    Linked,
    /// Debits may not exceed credits.
    DebitsMustNotExceedCredits,
    /// Credits may not exceed debits.
    CreditsMustNotExceedDebits,
    /// Keep a balance history for the account.
    History,
    /// The account was imported with a user-supplied timestamp.
    Imported,
    /// The account accepts no further transfers.
    Closed,
}

impl Flag for AccountFlag {
    const ALL: &'static [Self] = &[
        Self::Linked,
        Self::DebitsMustNotExceedCredits,
        Self::CreditsMustNotExceedDebits,
        Self::History,
        Self::Imported,
        Self::Closed,
    ];

    fn bit(self) -> u32 {
        match self {
            Self::Linked => 0,
            Self::DebitsMustNotExceedCredits => 1,
            Self::CreditsMustNotExceedDebits => 2,
            Self::History => 3,
            Self::Imported => 4,
            Self::Closed => 5,
        }
    }
}

/// Flags on a [Transfer](crate::Transfer).
#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize)]
pub enum TransferFlag {
    /// The transfer is created together with the next one in the batch.
    Linked,
    /// Two-phase transfer: reserve the amount.
    Pending,
    /// Commit a pending transfer.
    PostPendingTransfer,
    /// Release a pending transfer.
    VoidPendingTransfer,
    /// Cap the amount at the debit account's available balance.
    BalancingDebit,
    /// Cap the amount at the credit account's available balance.
    BalancingCredit,
    /// Close the debit account.
    ClosingDebit,
    /// Close the credit account.
    ClosingCredit,
    /// The transfer was imported with a user-supplied timestamp.
    Imported,
}

impl Flag for TransferFlag {
    const ALL: &'static [Self] = &[
        Self::Linked,
        Self::Pending,
        Self::PostPendingTransfer,
        Self::VoidPendingTransfer,
        Self::BalancingDebit,
        Self::BalancingCredit,
        Self::ClosingDebit,
        Self::ClosingCredit,
        Self::Imported,
    ];

    fn bit(self) -> u32 {
        match self {
            Self::Linked => 0,
            Self::Pending => 1,
            Self::PostPendingTransfer => 2,
            Self::VoidPendingTransfer => 3,
            Self::BalancingDebit => 4,
            Self::BalancingCredit => 5,
            Self::ClosingDebit => 6,
            Self::ClosingCredit => 7,
            Self::Imported => 8,
        }
    }
}

/// Flags on an [AccountFilter](crate::AccountFilter).
#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize)]
pub enum AccountFilterFlag {
    /// Include transfers where the account is debited.
    Debits,
    /// Include transfers where the account is credited.
    Credits,
    /// Newest first.
    Reversed,
}

impl Flag for AccountFilterFlag {
    const ALL: &'static [Self] = &[Self::Debits, Self::Credits, Self::Reversed];

    fn bit(self) -> u32 {
        match self {
            Self::Debits => 0,
            Self::Credits => 1,
            Self::Reversed => 2,
        }
    }
}

/// Flags on a [QueryFilter](crate::QueryFilter).
#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize)]
pub enum QueryFilterFlag {
    /// Newest first.
    Reversed,
}

impl Flag for QueryFilterFlag {
    const ALL: &'static [Self] = &[Self::Reversed];

    fn bit(self) -> u32 {
        match self {
            Self::Reversed => 0,
        }
    }
}
