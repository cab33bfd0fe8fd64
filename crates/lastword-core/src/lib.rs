//! Mnemonic checksum recovery and multisig key derivation
//!
//! This crate implements the recovery pipeline: wordlist validation,
//! brute-force search for the missing final checksum word of a BIP39
//! mnemonic, derivation path parsing and HD key derivation, SLIP-132
//! version-byte re-encoding, and root fingerprint computation.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod error;
pub mod fingerprint;
pub mod mnemonic;
pub mod path;
pub mod slip132;

pub use error::{Error, Result};
pub use fingerprint::root_fingerprint;
pub use mnemonic::{find_checksum_words, invalid_words, to_seed, validate_words};
pub use path::{derive_path, master_key, DerivationPath, PathSegment};
pub use slip132::{reencode, reencode_xprv, reencode_xpub};

pub use bip32::{Prefix, XPrv, XPub};
