// Copyright (c) 2018-2022 The MobileCoin Foundation

//! Conversions between "API types" and "ledger client types".
//!
//! Protobuf offers a reduced selection of types, so the values the ledger
//! client holds and the values transmitted over the API differ: 128-bit ids
//! become hex strings, balances are narrowed to 64 bits and flag integers are
//! spread into one optional boolean per flag. This module provides
//! conversions between "equivalent" types, such as `tb_api::ledger::Account`
//! and `tb_ledger_types::Account`.

// records
mod account;
mod account_balance;
mod transfer;

// filters
mod account_filter;
mod query_filter;

// batch outcomes
mod reply;

// shared
mod flags;
mod uint128;

// error
mod error;

pub use self::{
    error::ConversionError,
    flags::{pack_wire, unpack_wire, WireFlags},
    query_filter::query_filter_from_wire,
    reply::{account_results_to_reply, results_to_reply},
    uint128::hex_string_to_u128,
};

/// Narrow a wire `u32` code to the ledger's 16-bit code field.
fn code_from_wire(field: &'static str, code: u32) -> Result<u16, ConversionError> {
    u16::try_from(code).map_err(|_| ConversionError::IntegerOutOfRange(field, code.into()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    #[test]
    fn test_code_from_wire() {
        assert_eq!(code_from_wire("code", 0).unwrap(), 0);
        assert_eq!(code_from_wire("code", 65535).unwrap(), u16::MAX);
        assert_matches!(
            code_from_wire("code", 65536),
            Err(ConversionError::IntegerOutOfRange("code", 65536))
        );
    }
}
