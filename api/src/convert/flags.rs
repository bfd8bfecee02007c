// Copyright (c) 2018-2022 The MobileCoin Foundation

//! Convert between packed flag integers and the API's flag messages.

use crate::ledger;
use tb_ledger_types::{
    flags, AccountFilterFlag, AccountFlag, Flag, QueryFilterFlag, TransferFlag,
};

/// A flags message carrying one optional boolean per flag of `Self::Flag`.
pub trait WireFlags: Default {
    /// The flag enumeration this message mirrors.
    type Flag: Flag;

    /// The field for `flag`.
    fn field(&self, flag: Self::Flag) -> Option<bool>;

    /// The mutable field for `flag`.
    fn field_mut(&mut self, flag: Self::Flag) -> &mut Option<bool>;
}

/// Pack a flags message into an integer. An absent message, or an absent
/// field, counts as false.
pub fn pack_wire<W: WireFlags>(src: Option<&W>) -> u32 {
    src.map_or(0, |src| {
        flags::pack(
            W::Flag::ALL
                .iter()
                .copied()
                .filter(|flag| src.field(*flag).unwrap_or(false)),
        )
    })
}

/// Unpack an integer into a flags message with every field set.
pub fn unpack_wire<W: WireFlags>(bits: u32) -> W {
    let mut dst = W::default();
    for flag in W::Flag::ALL {
        *dst.field_mut(*flag) = Some(bits & flag.mask() != 0);
    }
    dst
}

impl WireFlags for ledger::AccountFlags {
    type Flag = AccountFlag;

    fn field(&self, flag: AccountFlag) -> Option<bool> {
        match flag {
            AccountFlag::Linked => self.linked,
            AccountFlag::DebitsMustNotExceedCredits => self.debits_must_not_exceed_credits,
            AccountFlag::CreditsMustNotExceedDebits => self.credits_must_not_exceed_debits,
            AccountFlag::History => self.history,
            AccountFlag::Imported => self.imported,
            AccountFlag::Closed => self.closed,
        }
    }

    fn field_mut(&mut self, flag: AccountFlag) -> &mut Option<bool> {
        match flag {
            AccountFlag::Linked => &mut self.linked,
            AccountFlag::DebitsMustNotExceedCredits => &mut self.debits_must_not_exceed_credits,
            AccountFlag::CreditsMustNotExceedDebits => &mut self.credits_must_not_exceed_debits,
            AccountFlag::History => &mut self.history,
            AccountFlag::Imported => &mut self.imported,
            AccountFlag::Closed => &mut self.closed,
        }
    }
}

impl WireFlags for ledger::TransferFlags {
    type Flag = TransferFlag;

    fn field(&self, flag: TransferFlag) -> Option<bool> {
        match flag {
            TransferFlag::Linked => self.linked,
            TransferFlag::Pending => self.pending,
            TransferFlag::PostPendingTransfer => self.post_pending_transfer,
            TransferFlag::VoidPendingTransfer => self.void_pending_transfer,
            TransferFlag::BalancingDebit => self.balancing_debit,
            TransferFlag::BalancingCredit => self.balancing_credit,
            TransferFlag::ClosingDebit => self.closing_debit,
            TransferFlag::ClosingCredit => self.closing_credit,
            TransferFlag::Imported => self.imported,
        }
    }

    fn field_mut(&mut self, flag: TransferFlag) -> &mut Option<bool> {
        match flag {
            TransferFlag::Linked => &mut self.linked,
            TransferFlag::Pending => &mut self.pending,
            TransferFlag::PostPendingTransfer => &mut self.post_pending_transfer,
            TransferFlag::VoidPendingTransfer => &mut self.void_pending_transfer,
            TransferFlag::BalancingDebit => &mut self.balancing_debit,
            TransferFlag::BalancingCredit => &mut self.balancing_credit,
            TransferFlag::ClosingDebit => &mut self.closing_debit,
            TransferFlag::ClosingCredit => &mut self.closing_credit,
            TransferFlag::Imported => &mut self.imported,
        }
    }
}

impl WireFlags for ledger::AccountFilterFlags {
    type Flag = AccountFilterFlag;

    fn field(&self, flag: AccountFilterFlag) -> Option<bool> {
        match flag {
            AccountFilterFlag::Debits => self.debits,
            AccountFilterFlag::Credits => self.credits,
            AccountFilterFlag::Reversed => self.reversed,
        }
    }

    fn field_mut(&mut self, flag: AccountFilterFlag) -> &mut Option<bool> {
        match flag {
            AccountFilterFlag::Debits => &mut self.debits,
            AccountFilterFlag::Credits => &mut self.credits,
            AccountFilterFlag::Reversed => &mut self.reversed,
        }
    }
}

impl WireFlags for ledger::QueryFilterFlags {
    type Flag = QueryFilterFlag;

    fn field(&self, flag: QueryFilterFlag) -> Option<bool> {
        match flag {
            QueryFilterFlag::Reversed => self.reversed,
        }
    }

    fn field_mut(&mut self, flag: QueryFilterFlag) -> &mut Option<bool> {
        match flag {
            QueryFilterFlag::Reversed => &mut self.reversed,
        }
    }
}
