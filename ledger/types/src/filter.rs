// Copyright (c) 2018-2022 The MobileCoin Foundation

//! Query filters accepted by the ledger client.

use serde::{Deserialize, Serialize};

/// Selects the transfers or balance history of one account.
#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub struct AccountFilter {
    /// The account to query.
    pub account_id: u128,
    /// Lower timestamp bound, inclusive. Zero means unbounded.
    pub timestamp_min: u64,
    /// Upper timestamp bound, inclusive. Zero means unbounded.
    pub timestamp_max: u64,
    /// Maximum number of results.
    pub limit: u32,
    /// Packed [AccountFilterFlag](crate::AccountFilterFlag) bits.
    pub flags: u32,
}

/// Selects accounts or transfers by their user tags, code and ledger.
///
/// Zero-valued fields do not constrain the query.
#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub struct QueryFilter {
    /// Match on the 128-bit user tag.
    pub user_data_128: u128,
    /// Match on the 64-bit user tag.
    pub user_data_64: u64,
    /// Match on the 32-bit user tag.
    pub user_data_32: u32,
    /// Match on the ledger.
    pub ledger: u32,
    /// Match on the code.
    pub code: u16,
    /// Lower timestamp bound, inclusive.
    pub timestamp_min: u64,
    /// Upper timestamp bound, inclusive.
    pub timestamp_max: u64,
    /// Maximum number of results.
    pub limit: u32,
    /// Packed [QueryFilterFlag](crate::QueryFilterFlag) bits.
    pub flags: u32,
}
