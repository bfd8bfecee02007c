// Copyright (c) 2018-2022 The MobileCoin Foundation

//! Hex rendering of 128-bit ids and user tags.
//!
//! The ledger client renders a `u128` as lowercase hex with no padding and no
//! prefix, so zero is `"0"`. Parsing accepts either case and up to 32 digits.

use crate::Uint128ParseError;
use alloc::{format, string::String};

/// Number of hex digits in a fully padded `u128`.
const MAX_HEX_DIGITS: usize = 32;

/// Render a `u128` the way the ledger client does.
pub fn to_hex_string(value: u128) -> String {
    format!("{value:x}")
}

/// Strictly parse a hex string into a `u128`.
///
/// Empty input is an error here; callers that treat an empty id as zero do
/// so explicitly.
pub fn parse_hex_u128(src: &str) -> Result<u128, Uint128ParseError> {
    if src.is_empty() {
        return Err(Uint128ParseError::Empty);
    }
    if src.len() > MAX_HEX_DIGITS {
        return Err(Uint128ParseError::TooLong(src.len()));
    }

    // Left-pad to a full 16 bytes so odd-length input decodes.
    let pad = MAX_HEX_DIGITS - src.len();
    let mut padded = [b'0'; MAX_HEX_DIGITS];
    padded[pad..].copy_from_slice(src.as_bytes());

    let mut bytes = [0u8; 16];
    hex::decode_to_slice(padded, &mut bytes).map_err(|err| match err {
        // Report positions in the caller's string, not the padded buffer.
        hex::FromHexError::InvalidHexCharacter { c, index } => {
            hex::FromHexError::InvalidHexCharacter {
                c,
                index: index - pad,
            }
        }
        err => err,
    })?;
    Ok(u128::from_be_bytes(bytes))
}
