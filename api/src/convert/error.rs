// Copyright (c) 2018-2022 The MobileCoin Foundation

use displaydoc::Display;
use tb_ledger_types::Uint128ParseError;

/// Errors converting API messages into ledger client records.
#[derive(Clone, Debug, Display, PartialEq)]
pub enum ConversionError {
    /// Invalid 128-bit hex string {0:?}: {1}
    ParseError(String, Uint128ParseError),
    /// Field {0} is out of range: {1}
    IntegerOutOfRange(&'static str, u64),
    /// Amount must not be negative: {0}
    NegativeAmount(i64),
}

impl ConversionError {
    /// Whether the RPC layer should report this as a bad request rather
    /// than a server fault.
    ///
    /// Every conversion failure is caused by the request contents, so this
    /// is true for all variants. The match is exhaustive so that a new
    /// variant has to be classified.
    pub fn is_invalid_argument(&self) -> bool {
        match self {
            Self::ParseError(..) | Self::IntegerOutOfRange(..) | Self::NegativeAmount(_) => true,
        }
    }
}

impl std::error::Error for ConversionError {}
