// Copyright (c) 2018-2022 The MobileCoin Foundation

//! Common plumbing shared by the ledger gateway crates.

#![deny(missing_docs)]
#![warn(unused_extern_crates)]

pub mod logger;
