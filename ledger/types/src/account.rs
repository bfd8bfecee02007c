// Copyright (c) 2018-2022 The MobileCoin Foundation

//! Ledger accounts.

use crate::{flags, AccountFlag, Flag};
use serde::{Deserialize, Serialize};

/// A ledger account as the client library holds it.
#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub struct Account {
    /// Account id.
    pub id: u128,
    /// Sum of pending debits.
    pub debits_pending: u128,
    /// Sum of posted debits.
    pub debits_posted: u128,
    /// Sum of pending credits.
    pub credits_pending: u128,
    /// Sum of posted credits.
    pub credits_posted: u128,
    /// Opaque 128-bit user tag.
    pub user_data_128: u128,
    /// Opaque 64-bit user tag.
    pub user_data_64: u64,
    /// Opaque 32-bit user tag.
    pub user_data_32: u32,
    /// Ledger the account belongs to.
    pub ledger: u32,
    /// User-defined account category.
    pub code: u16,
    /// Packed [AccountFlag] bits.
    pub flags: u16,
    /// Creation timestamp, assigned by the ledger.
    pub timestamp: u64,
}

impl Account {
    /// Iterate over the flags set on this account.
    pub fn account_flags(&self) -> impl Iterator<Item = AccountFlag> {
        flags::unpack(self.flags.into())
    }

    /// Whether the given flag is set.
    pub fn has_flag(&self, flag: AccountFlag) -> bool {
        u32::from(self.flags) & flag.mask() != 0
    }
}
