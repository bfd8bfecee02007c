// Copyright (c) 2018-2022 The MobileCoin Foundation

//! Convert to/from ledger::Transfer.

use crate::{
    convert::{
        code_from_wire, flags,
        uint128::{hex_string_to_u128, optional_hex_string_to_u128},
    },
    ledger, ConversionError,
};
use tb_ledger_types::{to_hex_string, Transfer};

/// Convert Transfer --> ledger::Transfer.
///
/// The amount is narrowed to its low 64 bits. `pending_id` is only set when
/// the transfer references a pending transfer.
impl From<&Transfer> for ledger::Transfer {
    fn from(src: &Transfer) -> Self {
        Self {
            id: to_hex_string(src.id),
            debit_account_id: to_hex_string(src.debit_account_id),
            credit_account_id: to_hex_string(src.credit_account_id),
            amount: src.amount as i64,
            pending_id: src.pending_id().map(to_hex_string),
            user_data128: to_hex_string(src.user_data_128),
            user_data64: src.user_data_64,
            user_data32: src.user_data_32,
            timeout: src.timeout,
            ledger: src.ledger,
            code: src.code.into(),
            transfer_flags: Some(flags::unpack_wire(src.flags.into())),
            timestamp: Some(src.timestamp),
        }
    }
}

/// Convert ledger::Transfer --> Transfer.
impl TryFrom<&ledger::Transfer> for Transfer {
    type Error = ConversionError;

    fn try_from(src: &ledger::Transfer) -> Result<Self, Self::Error> {
        let amount =
            u64::try_from(src.amount).map_err(|_| ConversionError::NegativeAmount(src.amount))?;

        Ok(Self {
            id: hex_string_to_u128(&src.id)?,
            debit_account_id: hex_string_to_u128(&src.debit_account_id)?,
            credit_account_id: hex_string_to_u128(&src.credit_account_id)?,
            amount: amount.into(),
            pending_id: optional_hex_string_to_u128(src.pending_id.as_deref())?,
            user_data_128: hex_string_to_u128(&src.user_data128)?,
            user_data_64: src.user_data64,
            user_data_32: src.user_data32,
            timeout: src.timeout,
            ledger: src.ledger,
            code: code_from_wire("code", src.code)?,
            // Only the nine defined bits can be set.
            flags: flags::pack_wire(src.transfer_flags.as_ref()) as u16,
            timestamp: src.timestamp.unwrap_or(0),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use prost::Message;
    use tb_ledger_types::TransferFlag;
    use tb_util_test_helper::{random_transfer, run_with_several_seeds};

    fn transfer_with_pending_id(pending_id: u128) -> Transfer {
        Transfer {
            id: 1,
            debit_account_id: 2,
            credit_account_id: 3,
            amount: 100,
            pending_id,
            ledger: 1,
            code: 10,
            flags: 0,
            ..Default::default()
        }
    }

    #[test]
    fn test_zero_pending_id_is_absent() {
        let wire = ledger::Transfer::from(&transfer_with_pending_id(0));
        assert_eq!(wire.pending_id, None);

        // Absent, not an empty string: the field is not encoded at all.
        let with_empty = ledger::Transfer {
            pending_id: Some(String::new()),
            ..wire.clone()
        };
        assert!(wire.encoded_len() < with_empty.encoded_len());
    }

    #[test]
    fn test_nonzero_pending_id_is_hex() {
        let wire = ledger::Transfer::from(&transfer_with_pending_id(0xfeed));
        assert_eq!(wire.pending_id.as_deref(), Some("feed"));

        let wire = ledger::Transfer::from(&transfer_with_pending_id(u128::MAX));
        assert_eq!(
            wire.pending_id.as_deref(),
            Some("ffffffffffffffffffffffffffffffff")
        );
    }

    #[test]
    fn test_transfer_to_wire() {
        let transfer = Transfer {
            id: 0x10,
            debit_account_id: 0x20,
            credit_account_id: 0x30,
            amount: 500,
            user_data_128: 0xff,
            user_data_64: 6,
            user_data_32: 7,
            timeout: 60,
            ledger: 700,
            code: 1,
            flags: 0b1_0000_0011,
            timestamp: 1234,
            ..Default::default()
        };

        let wire = ledger::Transfer::from(&transfer);
        assert_eq!(wire.id, "10");
        assert_eq!(wire.debit_account_id, "20");
        assert_eq!(wire.credit_account_id, "30");
        assert_eq!(wire.amount, 500);
        assert_eq!(wire.user_data128, "ff");
        assert_eq!((wire.user_data64, wire.user_data32), (6, 7));
        assert_eq!((wire.timeout, wire.ledger, wire.code), (60, 700, 1));
        assert_eq!(wire.timestamp, Some(1234));
        assert_eq!(
            wire.transfer_flags,
            Some(ledger::TransferFlags {
                linked: Some(true),
                pending: Some(true),
                post_pending_transfer: Some(false),
                void_pending_transfer: Some(false),
                balancing_debit: Some(false),
                balancing_credit: Some(false),
                closing_debit: Some(false),
                closing_credit: Some(false),
                imported: Some(true),
            })
        );
    }

    #[test]
    fn test_transfer_round_trip() {
        run_with_several_seeds(|mut rng| {
            for _ in 0..20 {
                let transfer = random_transfer(&mut rng);
                let wire = ledger::Transfer::from(&transfer);
                assert_eq!(wire.pending_id.is_some(), transfer.pending_id != 0);
                assert_eq!(Transfer::try_from(&wire), Ok(transfer));
            }
        });
    }

    #[test]
    fn test_wire_transfer_defaults() {
        let wire = ledger::Transfer {
            id: "a".to_string(),
            pending_id: None,
            transfer_flags: None,
            timestamp: None,
            ..Default::default()
        };
        let transfer = Transfer::try_from(&wire).unwrap();
        assert_eq!(transfer.id, 10);
        assert_eq!(transfer.pending_id, 0);
        assert_eq!(transfer.flags, 0);
        assert_eq!(transfer.timestamp, 0);
        assert!(!transfer.has_flag(TransferFlag::Pending));
    }

    #[test]
    fn test_bad_wire_transfer() {
        let wire = ledger::Transfer {
            amount: -1,
            ..Default::default()
        };
        assert_matches!(
            Transfer::try_from(&wire),
            Err(ConversionError::NegativeAmount(-1))
        );

        let wire = ledger::Transfer {
            pending_id: Some("pending".to_string()),
            ..Default::default()
        };
        assert_matches!(
            Transfer::try_from(&wire),
            Err(ConversionError::ParseError(ref hex, _)) if hex == "pending"
        );

        let wire = ledger::Transfer {
            credit_account_id: "1".repeat(40),
            ..Default::default()
        };
        assert_matches!(
            Transfer::try_from(&wire),
            Err(ConversionError::ParseError(..))
        );
    }
}
