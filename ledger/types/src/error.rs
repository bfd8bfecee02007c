// Copyright (c) 2018-2022 The MobileCoin Foundation

//! Errors.

use displaydoc::Display;

/// Errors parsing a 128-bit integer from its hex representation.
#[derive(Clone, Copy, Debug, Display, PartialEq)]
pub enum Uint128ParseError {
    /// Hex string is empty
    Empty,
    /// Hex string has {0} digits, at most 32 are allowed
    TooLong(usize),
    /// Invalid hex: {0}
    InvalidHex(hex::FromHexError),
}

impl From<hex::FromHexError> for Uint128ParseError {
    fn from(src: hex::FromHexError) -> Self {
        Self::InvalidHex(src)
    }
}
