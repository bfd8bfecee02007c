// Copyright (c) 2018-2022 The MobileCoin Foundation

//! Ledger client record types.
//!
//! These are the in-memory shapes the ledger client reads and writes. Ids and
//! user tags are plain `u128`, flags are packed integers whose bit layout is
//! shared with the ledger service.

#![no_std]
#![deny(missing_docs)]

extern crate alloc;

pub mod account;
pub mod account_balance;
pub mod error;
pub mod filter;
pub mod flags;
pub mod result;
pub mod transfer;
pub mod uint128;

pub use crate::{
    account::Account,
    account_balance::AccountBalance,
    error::Uint128ParseError,
    filter::{AccountFilter, QueryFilter},
    flags::{pack, unpack, AccountFilterFlag, AccountFlag, Flag, QueryFilterFlag, TransferFlag},
    result::{CreateAccountsResult, CreateTransfersResult},
    transfer::Transfer,
    uint128::{parse_hex_u128, to_hex_string},
};
