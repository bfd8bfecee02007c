// Copyright (c) 2018-2022 The MobileCoin Foundation

//! Per-event outcomes of a batch submission.
//!
//! The ledger only reports events that did not succeed, so a batch of `n`
//! events yields at most `n` results, each pointing back at the event by its
//! position in the batch.

use serde::{Deserialize, Serialize};

/// Outcome of one transfer in a create-transfers batch.
#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub struct CreateTransfersResult {
    /// Position of the transfer in the submitted batch.
    pub index: u32,
    /// Result code reported by the ledger.
    pub result: u32,
}

/// Outcome of one account in a create-accounts batch.
#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub struct CreateAccountsResult {
    /// Position of the account in the submitted batch.
    pub index: u32,
    /// Result code reported by the ledger.
    pub result: u32,
}
