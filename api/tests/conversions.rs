// Copyright (c) 2018-2022 The MobileCoin Foundation

//! End-to-end checks of a gateway request/response cycle through the public
//! conversion API.

use assert_matches::assert_matches;
use prost::Message;
use tb_api::{
    hex_string_to_u128, ledger, query_filter_from_wire, results_to_reply, ConversionError,
};
use tb_common::logger::{create_test_logger, scoped_global_logger};
use tb_ledger_types::{AccountFilter, CreateTransfersResult, Flag, Transfer, TransferFlag};
use tb_util_test_helper::{random_transfer, run_with_one_seed};

// Decode a request the way the RPC layer hands it to us.
fn decode<M: Message + Default>(msg: &M) -> M {
    M::decode(msg.encode_to_vec().as_slice()).expect("decoding a message we just encoded")
}

#[test]
fn create_transfers_request_and_reply() {
    run_with_one_seed(|mut rng| {
        let submitted: Vec<Transfer> = (0..3).map(|_| random_transfer(&mut rng)).collect();

        // Client -> gateway: the request survives the wire and converts back.
        let request: Vec<ledger::Transfer> = submitted
            .iter()
            .map(|t| decode(&ledger::Transfer::from(t)))
            .collect();
        let converted = request
            .iter()
            .map(Transfer::try_from)
            .collect::<Result<Vec<_>, _>>()
            .unwrap();
        assert_eq!(converted, submitted);

        // Ledger -> gateway -> client: only failures are reported.
        let outcomes = [
            CreateTransfersResult {
                index: 2,
                result: 29,
            },
            CreateTransfersResult {
                index: 0,
                result: 1,
            },
        ];
        let reply = results_to_reply(&outcomes, &converted);
        assert_eq!(reply.len(), 2);
        assert_eq!(reply[0].id, request[2].id);
        assert_eq!(reply[0].result, 29);
        assert_eq!(reply[1].id, request[0].id);
        assert_eq!(reply[1].result, 1);
    });
}

#[test]
fn pending_id_absence_survives_the_wire() {
    let plain = Transfer {
        id: 1,
        amount: 10,
        ..Default::default()
    };
    let post = Transfer {
        id: 2,
        pending_id: 1,
        flags: TransferFlag::PostPendingTransfer.mask() as u16,
        ..Default::default()
    };

    let plain_wire = decode(&ledger::Transfer::from(&plain));
    assert_eq!(plain_wire.pending_id, None);

    let post_wire = decode(&ledger::Transfer::from(&post));
    assert_eq!(post_wire.pending_id.as_deref(), Some("1"));
    assert_eq!(
        post_wire.transfer_flags.and_then(|f| f.post_pending_transfer),
        Some(true)
    );
}

#[test]
fn account_filter_without_flags() {
    let request = decode(&ledger::AccountFilter {
        account_id: "0A".to_string(),
        timestamp_min: None,
        timestamp_max: Some(99),
        limit: 8,
        flags: None,
    });
    assert_eq!(
        AccountFilter::try_from(&request),
        Ok(AccountFilter {
            account_id: 10,
            timestamp_min: 0,
            timestamp_max: 99,
            limit: 8,
            flags: 0,
        })
    );
}

#[test]
fn malformed_ids_are_invalid_arguments() {
    let logger = create_test_logger("malformed_ids_are_invalid_arguments".to_string());
    scoped_global_logger(&logger, |_| {
        let err = hex_string_to_u128("not-hex").unwrap_err();
        assert!(err.is_invalid_argument());
        assert!(err
            .to_string()
            .starts_with("Invalid 128-bit hex string \"not-hex\": "));

        let filter = ledger::QueryFilter {
            user_data128: Some("g".to_string()),
            ..Default::default()
        };
        assert_matches!(
            query_filter_from_wire(Some(&filter)),
            Err(ConversionError::ParseError(..))
        );
    });
}
