// Copyright (c) 2018-2022 The MobileCoin Foundation

//! Convert ledger::QueryFilter --> QueryFilter.

use crate::{
    convert::{code_from_wire, flags, uint128::optional_hex_string_to_u128},
    ledger, ConversionError,
};
use tb_ledger_types::QueryFilter;

impl TryFrom<&ledger::QueryFilter> for QueryFilter {
    type Error = ConversionError;

    fn try_from(src: &ledger::QueryFilter) -> Result<Self, Self::Error> {
        Ok(Self {
            user_data_128: optional_hex_string_to_u128(src.user_data128.as_deref())?,
            user_data_64: src.user_data64.unwrap_or(0),
            user_data_32: src.user_data32.unwrap_or(0),
            ledger: src.ledger.unwrap_or(0),
            code: code_from_wire("code", src.code.unwrap_or(0))?,
            timestamp_min: src.timestamp_min.unwrap_or(0),
            timestamp_max: src.timestamp_max.unwrap_or(0),
            limit: src.limit,
            flags: flags::pack_wire(src.flags.as_ref()),
        })
    }
}

/// Convert a query filter that the request may omit entirely. An absent
/// filter stays absent.
pub fn query_filter_from_wire(
    src: Option<&ledger::QueryFilter>,
) -> Result<Option<QueryFilter>, ConversionError> {
    src.map(QueryFilter::try_from).transpose()
}
