// Copyright (c) 2018-2022 The MobileCoin Foundation

//! Ledger gateway API messages and their conversions to ledger client records.

pub mod convert;
pub mod ledger;

pub use crate::convert::{
    account_results_to_reply, hex_string_to_u128, query_filter_from_wire, results_to_reply,
    ConversionError,
};
