//! SLIP-132 extended-key re-encoding
//!
//! An extended key serializes as a 78-byte payload: 4 version bytes, 1
//! depth byte, 4 parent-fingerprint bytes, 4 big-endian child-index bytes,
//! 32 chain-code bytes, and 33 bytes of key material (a 0x00-led private
//! scalar or a compressed public point). SLIP-132 re-encoding substitutes
//! the version bytes and copies everything else byte-for-byte; the
//! cryptographic material is unchanged, only the network/script-type label
//! other software decodes from the prefix.

use crate::{Error, Result};
use bip32::{ExtendedKey, ExtendedKeyAttrs, Prefix, XPrv, XPub};
use lastword_params::VersionPrefix;

/// Convert a parameter-table version prefix into a serialization prefix.
fn to_prefix(version: VersionPrefix) -> Prefix {
    Prefix::from_parts_unchecked(version.name, version.version)
}

/// Re-encode a serialized extended key under `version`.
///
/// Depth, parent fingerprint, child index, chain code, and key material
/// are copied unchanged. The key material must match the variant of the
/// target prefix: a private prefix requires a 0x00-led scalar, a public
/// prefix a compressed point. A mismatched, zeroed, or otherwise corrupt
/// key is rejected with [`Error::KeyExtraction`].
pub fn reencode(key: &ExtendedKey, version: VersionPrefix) -> Result<ExtendedKey> {
    build(to_prefix(version), &key.attrs, key.key_bytes)
}

/// Re-encode an extended private key under `version`.
pub fn reencode_xprv(xprv: &XPrv, version: VersionPrefix) -> Result<ExtendedKey> {
    let mut key_bytes = [0u8; 33];
    key_bytes[1..].copy_from_slice(&bip32::PrivateKey::to_bytes(xprv.private_key()));
    build(to_prefix(version), xprv.attrs(), key_bytes)
}

/// Re-encode an extended public key under `version`.
pub fn reencode_xpub(xpub: &XPub, version: VersionPrefix) -> Result<ExtendedKey> {
    let key_bytes = bip32::PublicKey::to_bytes(xpub.public_key());
    build(to_prefix(version), xpub.attrs(), key_bytes)
}

fn build(prefix: Prefix, attrs: &ExtendedKeyAttrs, key_bytes: [u8; 33]) -> Result<ExtendedKey> {
    check_key_material(prefix, &key_bytes)?;
    Ok(ExtendedKey {
        prefix,
        attrs: attrs.clone(),
        key_bytes,
    })
}

fn check_key_material(prefix: Prefix, key_bytes: &[u8; 33]) -> Result<()> {
    if prefix.is_private() {
        if key_bytes[0] != 0x00 {
            return Err(Error::KeyExtraction(
                "private key material must begin with 0x00".to_string(),
            ));
        }
        if key_bytes[1..].iter().all(|b| *b == 0) {
            return Err(Error::KeyExtraction(
                "private key material is zeroed".to_string(),
            ));
        }
    } else if !matches!(key_bytes[0], 0x02 | 0x03) {
        return Err(Error::KeyExtraction(
            "public key material is not a compressed point".to_string(),
        ));
    }
    Ok(())
}
