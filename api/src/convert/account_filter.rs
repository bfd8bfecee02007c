// Copyright (c) 2018-2022 The MobileCoin Foundation

//! Convert ledger::AccountFilter --> AccountFilter.

use crate::{
    convert::{flags, uint128::hex_string_to_u128},
    ledger, ConversionError,
};
use tb_ledger_types::AccountFilter;

impl TryFrom<&ledger::AccountFilter> for AccountFilter {
    type Error = ConversionError;

    fn try_from(src: &ledger::AccountFilter) -> Result<Self, Self::Error> {
        Ok(Self {
            account_id: hex_string_to_u128(&src.account_id)?,
            timestamp_min: src.timestamp_min.unwrap_or(0),
            timestamp_max: src.timestamp_max.unwrap_or(0),
            limit: src.limit,
            flags: flags::pack_wire(src.flags.as_ref()),
        })
    }
}
