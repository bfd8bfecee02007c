// Copyright (c) 2018-2022 The MobileCoin Foundation

//! Messages exchanged with gateway clients.
//!
//! Fields declared `optional` in the schema are `Option` here, so "absent"
//! and "present but zero" stay distinguishable. 128-bit ids travel as hex
//! strings.

/// Account flags, one optional boolean per flag.
#[derive(Clone, Copy, Eq, Hash, PartialEq, ::prost::Message)]
pub struct AccountFlags {
    /// See `AccountFlag::Linked`.
    #[prost(bool, optional, tag = "1")]
    pub linked: Option<bool>,
    /// See `AccountFlag::DebitsMustNotExceedCredits`.
    #[prost(bool, optional, tag = "2")]
    pub debits_must_not_exceed_credits: Option<bool>,
    /// See `AccountFlag::CreditsMustNotExceedDebits`.
    #[prost(bool, optional, tag = "3")]
    pub credits_must_not_exceed_debits: Option<bool>,
    /// See `AccountFlag::History`.
    #[prost(bool, optional, tag = "4")]
    pub history: Option<bool>,
    /// See `AccountFlag::Imported`.
    #[prost(bool, optional, tag = "5")]
    pub imported: Option<bool>,
    /// See `AccountFlag::Closed`.
    #[prost(bool, optional, tag = "6")]
    pub closed: Option<bool>,
}

/// Transfer flags, one optional boolean per flag.
#[derive(Clone, Copy, Eq, Hash, PartialEq, ::prost::Message)]
pub struct TransferFlags {
    /// See `TransferFlag::Linked`.
    #[prost(bool, optional, tag = "1")]
    pub linked: Option<bool>,
    /// See `TransferFlag::Pending`.
    #[prost(bool, optional, tag = "2")]
    pub pending: Option<bool>,
    /// See `TransferFlag::PostPendingTransfer`.
    #[prost(bool, optional, tag = "3")]
    pub post_pending_transfer: Option<bool>,
    /// See `TransferFlag::VoidPendingTransfer`.
    #[prost(bool, optional, tag = "4")]
    pub void_pending_transfer: Option<bool>,
    /// See `TransferFlag::BalancingDebit`.
    #[prost(bool, optional, tag = "5")]
    pub balancing_debit: Option<bool>,
    /// See `TransferFlag::BalancingCredit`.
    #[prost(bool, optional, tag = "6")]
    pub balancing_credit: Option<bool>,
    /// See `TransferFlag::ClosingDebit`.
    #[prost(bool, optional, tag = "7")]
    pub closing_debit: Option<bool>,
    /// See `TransferFlag::ClosingCredit`.
    #[prost(bool, optional, tag = "8")]
    pub closing_credit: Option<bool>,
    /// See `TransferFlag::Imported`.
    #[prost(bool, optional, tag = "9")]
    pub imported: Option<bool>,
}

/// Account filter flags.
#[derive(Clone, Copy, Eq, Hash, PartialEq, ::prost::Message)]
pub struct AccountFilterFlags {
    /// Include debits.
    #[prost(bool, optional, tag = "1")]
    pub debits: Option<bool>,
    /// Include credits.
    #[prost(bool, optional, tag = "2")]
    pub credits: Option<bool>,
    /// Newest first.
    #[prost(bool, optional, tag = "3")]
    pub reversed: Option<bool>,
}

/// Query filter flags.
#[derive(Clone, Copy, Eq, Hash, PartialEq, ::prost::Message)]
pub struct QueryFilterFlags {
    /// Newest first.
    #[prost(bool, optional, tag = "1")]
    pub reversed: Option<bool>,
}

/// An account.
#[derive(Clone, Eq, Hash, PartialEq, ::prost::Message)]
pub struct Account {
    /// Hex id.
    #[prost(string, tag = "1")]
    pub id: String,
    /// Pending debits.
    #[prost(uint64, tag = "2")]
    pub debits_pending: u64,
    /// Posted debits.
    #[prost(uint64, tag = "3")]
    pub debits_posted: u64,
    /// Pending credits.
    #[prost(uint64, tag = "4")]
    pub credits_pending: u64,
    /// Posted credits.
    #[prost(uint64, tag = "5")]
    pub credits_posted: u64,
    /// Hex 128-bit user tag.
    #[prost(string, tag = "6")]
    pub user_data128: String,
    /// 64-bit user tag.
    #[prost(uint64, tag = "7")]
    pub user_data64: u64,
    /// 32-bit user tag.
    #[prost(uint32, tag = "8")]
    pub user_data32: u32,
    /// Ledger.
    #[prost(uint32, tag = "9")]
    pub ledger: u32,
    /// Account code. Only the low 16 bits are meaningful.
    #[prost(uint32, tag = "10")]
    pub code: u32,
    /// Flags.
    #[prost(message, optional, tag = "11")]
    pub flags: Option<AccountFlags>,
    /// Creation timestamp.
    #[prost(uint64, tag = "12")]
    pub timestamp: u64,
}

/// A transfer.
#[derive(Clone, Eq, Hash, PartialEq, ::prost::Message)]
pub struct Transfer {
    /// Hex id.
    #[prost(string, tag = "1")]
    pub id: String,
    /// Hex id of the debited account.
    #[prost(string, tag = "2")]
    pub debit_account_id: String,
    /// Hex id of the credited account.
    #[prost(string, tag = "3")]
    pub credit_account_id: String,
    /// Amount moved.
    #[prost(int64, tag = "4")]
    pub amount: i64,
    /// Hex id of the pending transfer this one posts or voids. Absent when
    /// there is none.
    #[prost(string, optional, tag = "5")]
    pub pending_id: Option<String>,
    /// Hex 128-bit user tag.
    #[prost(string, tag = "6")]
    pub user_data128: String,
    /// 64-bit user tag.
    #[prost(uint64, tag = "7")]
    pub user_data64: u64,
    /// 32-bit user tag.
    #[prost(uint32, tag = "8")]
    pub user_data32: u32,
    /// Pending timeout in seconds.
    #[prost(uint32, tag = "9")]
    pub timeout: u32,
    /// Ledger.
    #[prost(uint32, tag = "10")]
    pub ledger: u32,
    /// Transfer code. Only the low 16 bits are meaningful.
    #[prost(uint32, tag = "11")]
    pub code: u32,
    /// Flags.
    #[prost(message, optional, tag = "12")]
    pub transfer_flags: Option<TransferFlags>,
    /// Creation timestamp.
    #[prost(uint64, optional, tag = "13")]
    pub timestamp: Option<u64>,
}

/// Selects the transfers or balances of one account.
#[derive(Clone, Eq, Hash, PartialEq, ::prost::Message)]
pub struct AccountFilter {
    /// Hex id of the account.
    #[prost(string, tag = "1")]
    pub account_id: String,
    /// Lower timestamp bound.
    #[prost(uint64, optional, tag = "2")]
    pub timestamp_min: Option<u64>,
    /// Upper timestamp bound.
    #[prost(uint64, optional, tag = "3")]
    pub timestamp_max: Option<u64>,
    /// Maximum number of results.
    #[prost(uint32, tag = "4")]
    pub limit: u32,
    /// Flags.
    #[prost(message, optional, tag = "5")]
    pub flags: Option<AccountFilterFlags>,
}

/// Selects accounts or transfers by tag, code and ledger.
#[derive(Clone, Eq, Hash, PartialEq, ::prost::Message)]
pub struct QueryFilter {
    /// Hex 128-bit user tag.
    #[prost(string, optional, tag = "1")]
    pub user_data128: Option<String>,
    /// 64-bit user tag.
    #[prost(uint64, optional, tag = "2")]
    pub user_data64: Option<u64>,
    /// 32-bit user tag.
    #[prost(uint32, optional, tag = "3")]
    pub user_data32: Option<u32>,
    /// Code.
    #[prost(uint32, optional, tag = "4")]
    pub code: Option<u32>,
    /// Ledger.
    #[prost(uint32, optional, tag = "5")]
    pub ledger: Option<u32>,
    /// Lower timestamp bound.
    #[prost(uint64, optional, tag = "6")]
    pub timestamp_min: Option<u64>,
    /// Upper timestamp bound.
    #[prost(uint64, optional, tag = "7")]
    pub timestamp_max: Option<u64>,
    /// Maximum number of results.
    #[prost(uint32, tag = "8")]
    pub limit: u32,
    /// Flags.
    #[prost(message, optional, tag = "9")]
    pub flags: Option<QueryFilterFlags>,
}

/// Balances of an account at one point in time.
#[derive(Clone, Copy, Eq, Hash, PartialEq, ::prost::Message)]
pub struct AccountBalance {
    /// Pending debits.
    #[prost(uint64, tag = "1")]
    pub debits_pending: u64,
    /// Posted debits.
    #[prost(uint64, tag = "2")]
    pub debits_posted: u64,
    /// Pending credits.
    #[prost(uint64, tag = "3")]
    pub credits_pending: u64,
    /// Posted credits.
    #[prost(uint64, tag = "4")]
    pub credits_posted: u64,
    /// Snapshot timestamp.
    #[prost(uint64, tag = "5")]
    pub timestamp: u64,
}

/// Outcome of one transfer in a create-transfers call.
#[derive(Clone, Eq, Hash, PartialEq, ::prost::Message)]
pub struct CreateTransfersReplyItem {
    /// Position of the transfer in the request.
    #[prost(int32, tag = "1")]
    pub index: i32,
    /// Ledger result code.
    #[prost(uint32, tag = "2")]
    pub result: u32,
    /// Hex id of the transfer.
    #[prost(string, tag = "3")]
    pub id: String,
}

/// Outcome of one account in a create-accounts call.
#[derive(Clone, Eq, Hash, PartialEq, ::prost::Message)]
pub struct CreateAccountsReplyItem {
    /// Position of the account in the request.
    #[prost(int32, tag = "1")]
    pub index: i32,
    /// Ledger result code.
    #[prost(uint32, tag = "2")]
    pub result: u32,
    /// Hex id of the account.
    #[prost(string, tag = "3")]
    pub id: String,
}
