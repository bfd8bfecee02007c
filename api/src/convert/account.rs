// Copyright (c) 2018-2022 The MobileCoin Foundation

//! Convert to/from ledger::Account.

use crate::{
    convert::{code_from_wire, flags, uint128::hex_string_to_u128},
    ledger, ConversionError,
};
use tb_ledger_types::{to_hex_string, Account};

/// Convert Account --> ledger::Account.
///
/// Balances are narrowed to their low 64 bits.
impl From<&Account> for ledger::Account {
    fn from(src: &Account) -> Self {
        Self {
            id: to_hex_string(src.id),
            debits_pending: src.debits_pending as u64,
            debits_posted: src.debits_posted as u64,
            credits_pending: src.credits_pending as u64,
            credits_posted: src.credits_posted as u64,
            user_data128: to_hex_string(src.user_data_128),
            user_data64: src.user_data_64,
            user_data32: src.user_data_32,
            ledger: src.ledger,
            code: src.code.into(),
            flags: Some(flags::unpack_wire(src.flags.into())),
            timestamp: src.timestamp,
        }
    }
}

/// Convert ledger::Account --> Account.
impl TryFrom<&ledger::Account> for Account {
    type Error = ConversionError;

    fn try_from(src: &ledger::Account) -> Result<Self, Self::Error> {
        Ok(Self {
            id: hex_string_to_u128(&src.id)?,
            debits_pending: src.debits_pending.into(),
            debits_posted: src.debits_posted.into(),
            credits_pending: src.credits_pending.into(),
            credits_posted: src.credits_posted.into(),
            user_data_128: hex_string_to_u128(&src.user_data128)?,
            user_data_64: src.user_data64,
            user_data_32: src.user_data32,
            ledger: src.ledger,
            code: code_from_wire("code", src.code)?,
            // Only the six defined bits can be set.
            flags: flags::pack_wire(src.flags.as_ref()) as u16,
            timestamp: src.timestamp,
        })
    }
}
