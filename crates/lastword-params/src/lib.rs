//! Network parameters and constants for lastword
//!
//! This crate provides the network-specific constants consumed by the
//! recovery pipeline: BIP-44 coin types, multisig account derivation path
//! templates, and SLIP-132 extended-key version-byte tables.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod network;

pub use network::{Network, NetworkType, Slip132Versions, VersionPrefix};

/// Error types for parameter operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Invalid network specified
    #[error("Invalid network: {0}")]
    InvalidNetwork(String),
}

/// Result type for parameter operations
pub type Result<T> = std::result::Result<T, Error>;
