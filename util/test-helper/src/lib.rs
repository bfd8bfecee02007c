// Copyright (c) 2018-2022 The MobileCoin Foundation

//! Testing utilities

#[macro_use]
extern crate lazy_static;

pub use rand::{seq::SliceRandom, CryptoRng, Rng, RngCore, SeedableRng};
// re-export the ledger records to save an import elsewhere
pub use tb_ledger_types::{Account, AccountBalance, Transfer};

const NUM_TRIALS: usize = 3;

use rand_hc::Hc128Rng;
pub type RngType = Hc128Rng;
type Seed = <RngType as SeedableRng>::Seed;

// Helper for running a unit test that requires randomness, but doing it
// seeded and deterministically
pub fn run_with_several_seeds<F: FnMut(RngType)>(mut f: F) {
    for seed in *SEEDS {
        f(RngType::from_seed(seed));
    }
}

pub fn run_with_one_seed<F: FnOnce(RngType)>(f: F) {
    f(get_seeded_rng());
}

lazy_static! {
    static ref SEEDS: [Seed; NUM_TRIALS] = get_seeds();
}

fn get_seeds() -> [Seed; NUM_TRIALS] {
    let mut rng = get_seeded_rng();

    let mut result = [[0u8; 32]; NUM_TRIALS];
    for val in &mut result {
        rng.fill_bytes(&mut *val)
    }
    result
}

pub fn get_seeded_rng() -> RngType {
    RngType::from_seed([7u8; 32])
}

/// A random non-zero id.
pub fn random_id<R: RngCore>(rng: &mut R) -> u128 {
    rng.gen_range(1..=u128::MAX)
}

/// A random amount that survives the 64-bit wire encoding, signed or not.
pub fn random_amount<R: RngCore>(rng: &mut R) -> u128 {
    rng.gen_range(0..=i64::MAX as u128)
}

/// An account with random ids, tags, flags and balances. Balances stay below
/// 2^63 so they are representable on the wire.
pub fn random_account<R: RngCore>(rng: &mut R) -> Account {
    Account {
        id: random_id(rng),
        debits_pending: random_amount(rng),
        debits_posted: random_amount(rng),
        credits_pending: random_amount(rng),
        credits_posted: random_amount(rng),
        user_data_128: rng.gen(),
        user_data_64: rng.gen(),
        user_data_32: rng.gen(),
        ledger: rng.gen(),
        code: rng.gen(),
        flags: rng.gen_range(0..1 << 6),
        timestamp: rng.gen(),
    }
}

/// A transfer with random fields. About half of them reference a pending
/// transfer.
pub fn random_transfer<R: RngCore>(rng: &mut R) -> Transfer {
    let pending_id = if rng.gen_bool(0.5) { random_id(rng) } else { 0 };
    Transfer {
        id: random_id(rng),
        debit_account_id: random_id(rng),
        credit_account_id: random_id(rng),
        amount: random_amount(rng),
        pending_id,
        user_data_128: rng.gen(),
        user_data_64: rng.gen(),
        user_data_32: rng.gen(),
        timeout: rng.gen(),
        ledger: rng.gen(),
        code: rng.gen(),
        flags: rng.gen_range(0..1 << 9),
        timestamp: rng.gen(),
    }
}

/// A balance snapshot with wire-representable counters.
pub fn random_balance<R: RngCore>(rng: &mut R) -> AccountBalance {
    AccountBalance {
        debits_pending: random_amount(rng),
        debits_posted: random_amount(rng),
        credits_pending: random_amount(rng),
        credits_posted: random_amount(rng),
        timestamp: rng.gen(),
    }
}
