//! Error types for the recovery pipeline

/// Result type
pub type Result<T> = std::result::Result<T, Error>;

/// Recovery pipeline errors
///
/// Every failure surfaces a distinguishable kind; all errors are terminal
/// for the operation that raised them.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// One or more words are absent from the BIP39 wordlist
    #[error("Invalid BIP39 mnemonic word(s): {0}")]
    InvalidMnemonicWord(String),

    /// No wordlist candidate completes the prefix to a valid mnemonic
    #[error("No valid checksum words found: {0}")]
    NoValidChecksum(String),

    /// A derivation path segment is malformed
    #[error("Invalid derivation path: {0}")]
    PathParse(String),

    /// The BIP32 primitive rejected a child derivation
    #[error("Key derivation error: {0}")]
    Derivation(String),

    /// Key material could not be read from an extended key
    #[error("Key extraction error: {0}")]
    KeyExtraction(String),

    /// Root fingerprint requested on a non-root key
    #[error("Root fingerprint requested for non-root key at depth {0}")]
    RootFingerprintMisuse(u8),

    /// Invalid mnemonic
    #[error("Invalid mnemonic: {0}")]
    InvalidMnemonic(String),

    /// Invalid seed
    #[error("Invalid seed: {0}")]
    InvalidSeed(String),
}
