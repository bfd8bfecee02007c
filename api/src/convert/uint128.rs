// Copyright (c) 2018-2022 The MobileCoin Foundation

//! Convert hex strings from the API to 128-bit ids and user tags.

use crate::ConversionError;
use tb_common::logger::global_log;
use tb_ledger_types::parse_hex_u128;

/// Parse a hex id or user tag from a request.
///
/// An empty string is the zero value. Anything else must be valid hex of at
/// most 32 digits; a failure is logged with the offending input and returned
/// as [ConversionError::ParseError].
pub fn hex_string_to_u128(hex: &str) -> Result<u128, ConversionError> {
    if hex.is_empty() {
        return Ok(0);
    }
    parse_hex_u128(hex).map_err(|err| {
        global_log::error!("hex string to u128 failed"; "hex" => hex, "error" => %err);
        ConversionError::ParseError(hex.to_owned(), err)
    })
}

/// Parse an optional hex field. Absent and empty both map to zero.
pub(crate) fn optional_hex_string_to_u128(hex: Option<&str>) -> Result<u128, ConversionError> {
    hex.map_or(Ok(0), hex_string_to_u128)
}
