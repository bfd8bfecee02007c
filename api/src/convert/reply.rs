// Copyright (c) 2018-2022 The MobileCoin Foundation

//! Build create-accounts / create-transfers replies from batch outcomes.

use crate::ledger;
use tb_ledger_types::{
    to_hex_string, Account, CreateAccountsResult, CreateTransfersResult, Transfer,
};

/// Pair each transfer outcome with the id of the transfer it refers to.
///
/// Reply items follow the order of `results`, which need not be submission
/// order.
///
/// # Panics
///
/// If a result's index is not a position in `transfers`. The ledger only
/// reports indices of the batch it was given.
pub fn results_to_reply(
    results: &[CreateTransfersResult],
    transfers: &[Transfer],
) -> Vec<ledger::CreateTransfersReplyItem> {
    results
        .iter()
        .map(|r| ledger::CreateTransfersReplyItem {
            index: r.index as i32,
            result: r.result,
            id: to_hex_string(transfers[r.index as usize].id),
        })
        .collect()
}

/// Pair each account outcome with the id of the account it refers to.
///
/// # Panics
///
/// If a result's index is not a position in `accounts`.
pub fn account_results_to_reply(
    results: &[CreateAccountsResult],
    accounts: &[Account],
) -> Vec<ledger::CreateAccountsReplyItem> {
    results
        .iter()
        .map(|r| ledger::CreateAccountsReplyItem {
            index: r.index as i32,
            result: r.result,
            id: to_hex_string(accounts[r.index as usize].id),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn transfer(id: u128) -> Transfer {
        Transfer {
            id,
            ..Default::default()
        }
    }

    #[test]
    fn test_results_follow_outcome_order() {
        let transfers = [transfer(0xa0), transfer(0xa1), transfer(0xa2)];
        let results = [
            CreateTransfersResult {
                index: 1,
                result: 21,
            },
            CreateTransfersResult {
                index: 0,
                result: 46,
            },
        ];

        assert_eq!(
            results_to_reply(&results, &transfers),
            vec![
                ledger::CreateTransfersReplyItem {
                    index: 1,
                    result: 21,
                    id: "a1".to_string(),
                },
                ledger::CreateTransfersReplyItem {
                    index: 0,
                    result: 46,
                    id: "a0".to_string(),
                },
            ]
        );
    }

    #[test]
    fn test_no_results_is_empty_reply() {
        assert!(results_to_reply(&[], &[transfer(1)]).is_empty());
        assert!(account_results_to_reply(&[], &[]).is_empty());
    }

    #[test]
    fn test_account_results() {
        let accounts = [
            Account {
                id: 7,
                ..Default::default()
            },
            Account {
                id: 8,
                ..Default::default()
            },
        ];
        let results = [CreateAccountsResult {
            index: 1,
            result: 21,
        }];

        let reply = account_results_to_reply(&results, &accounts);
        assert_eq!(reply.len(), 1);
        assert_eq!(reply[0].id, "8");
        assert_eq!(reply[0].index, 1);
        assert_eq!(reply[0].result, 21);
    }

    #[test]
    #[should_panic]
    fn test_out_of_range_index_panics() {
        let results = [CreateTransfersResult {
            index: 3,
            result: 1,
        }];
        results_to_reply(&results, &[transfer(1)]);
    }
}
