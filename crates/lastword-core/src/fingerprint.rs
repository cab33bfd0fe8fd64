//! Root key fingerprint computation

use crate::{Error, Result};
use bip32::XPrv;
use ripemd::Ripemd160;
use sha2::{Digest, Sha256};

/// Compute the 4-byte root fingerprint of a master key, hex-encoded.
///
/// The fingerprint is the first four bytes of Hash160 (SHA-256 followed by
/// RIPEMD-160) of the compressed master public key, the value wallet
/// software prints ahead of a key origin (`[fingerprint/path]key`). Only a
/// depth-0 key identifies a wallet root, so any other key is rejected with
/// [`Error::RootFingerprintMisuse`].
pub fn root_fingerprint(master: &XPrv) -> Result<String> {
    let depth = master.attrs().depth;
    if depth != 0 {
        return Err(Error::RootFingerprintMisuse(depth));
    }

    let xpub = master.public_key();
    let compressed = bip32::PublicKey::to_bytes(xpub.public_key());
    let hash160 = Ripemd160::digest(Sha256::digest(compressed));
    Ok(hex::encode(&hash160[..4]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::path::{derive_path, master_key};

    #[test]
    fn test_bip32_vector_1_fingerprint() {
        // Test vector 1 seed from the BIP32 specification
        let seed = hex::decode("000102030405060708090a0b0c0d0e0f").unwrap();
        let master = master_key(&seed).unwrap();
        assert_eq!(root_fingerprint(&master).unwrap(), "3442193e");
    }

    #[test]
    fn test_non_root_key_is_rejected() {
        let seed = hex::decode("000102030405060708090a0b0c0d0e0f").unwrap();
        let master = master_key(&seed).unwrap();
        let path = "m/48'/0'".parse().unwrap();
        let child = derive_path(&master, &path).unwrap();

        let err = root_fingerprint(&child).unwrap_err();
        assert!(matches!(err, Error::RootFingerprintMisuse(2)));
    }
}
