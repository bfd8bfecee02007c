// Copyright (c) 2018-2022 The MobileCoin Foundation

//! Transfers between accounts.

use crate::{flags, Flag, TransferFlag};
use serde::{Deserialize, Serialize};

/// A transfer between two accounts on the same ledger.
#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub struct Transfer {
    /// Transfer id.
    pub id: u128,
    /// Account debited by the transfer.
    pub debit_account_id: u128,
    /// Account credited by the transfer.
    pub credit_account_id: u128,
    /// Amount moved.
    pub amount: u128,
    /// The pending transfer this one posts or voids. Zero when there is none.
    pub pending_id: u128,
    /// Opaque 128-bit user tag.
    pub user_data_128: u128,
    /// Opaque 64-bit user tag.
    pub user_data_64: u64,
    /// Opaque 32-bit user tag.
    pub user_data_32: u32,
    /// Seconds before a pending transfer expires. Zero never expires.
    pub timeout: u32,
    /// Ledger of both accounts.
    pub ledger: u32,
    /// User-defined reason for the transfer.
    pub code: u16,
    /// Packed [TransferFlag] bits.
    pub flags: u16,
    /// Creation timestamp, assigned by the ledger.
    pub timestamp: u64,
}

impl Transfer {
    /// Iterate over the flags set on this transfer.
    pub fn transfer_flags(&self) -> impl Iterator<Item = TransferFlag> {
        flags::unpack(self.flags.into())
    }

    /// Whether the given flag is set.
    pub fn has_flag(&self, flag: TransferFlag) -> bool {
        u32::from(self.flags) & flag.mask() != 0
    }

    /// The pending transfer id, if this transfer references one.
    pub fn pending_id(&self) -> Option<u128> {
        (self.pending_id != 0).then_some(self.pending_id)
    }
}
