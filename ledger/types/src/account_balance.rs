// Copyright (c) 2018-2022 The MobileCoin Foundation

//! Historical account balances.

use serde::{Deserialize, Serialize};

/// Balances of an account at one point in its history.
#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub struct AccountBalance {
    /// Sum of pending debits.
    pub debits_pending: u128,
    /// Sum of posted debits.
    pub debits_posted: u128,
    /// Sum of pending credits.
    pub credits_pending: u128,
    /// Sum of posted credits.
    pub credits_posted: u128,
    /// Timestamp of the transfer that produced this snapshot.
    pub timestamp: u64,
}
