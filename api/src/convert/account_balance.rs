// Copyright (c) 2018-2022 The MobileCoin Foundation

//! Convert to/from ledger::AccountBalance.

use crate::ledger;
use tb_ledger_types::AccountBalance;

/// Convert AccountBalance --> ledger::AccountBalance, keeping the low 64 bits
/// of each counter.
impl From<&AccountBalance> for ledger::AccountBalance {
    fn from(src: &AccountBalance) -> Self {
        Self {
            debits_pending: src.debits_pending as u64,
            debits_posted: src.debits_posted as u64,
            credits_pending: src.credits_pending as u64,
            credits_posted: src.credits_posted as u64,
            timestamp: src.timestamp,
        }
    }
}

/// Convert ledger::AccountBalance --> AccountBalance.
impl From<&ledger::AccountBalance> for AccountBalance {
    fn from(src: &ledger::AccountBalance) -> Self {
        Self {
            debits_pending: src.debits_pending.into(),
            debits_posted: src.debits_posted.into(),
            credits_pending: src.credits_pending.into(),
            credits_posted: src.credits_posted.into(),
            timestamp: src.timestamp,
        }
    }
}
