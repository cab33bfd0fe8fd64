//! Bitcoin network definitions and SLIP-132 version-byte tables

use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Network type enumeration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NetworkType {
    /// Mainnet
    Mainnet,
    /// Testnet (testnet3)
    Testnet,
}

impl FromStr for NetworkType {
    type Err = crate::Error;

    fn from_str(s: &str) -> crate::Result<Self> {
        match s {
            "mainnet" => Ok(NetworkType::Mainnet),
            "testnet" | "testnet3" => Ok(NetworkType::Testnet),
            other => Err(crate::Error::InvalidNetwork(other.to_string())),
        }
    }
}

/// A SLIP-132 extended-key version prefix.
///
/// Pairs the Base58 rendering of the prefix (the first four characters of
/// the encoded key) with the underlying 4-byte version value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VersionPrefix {
    /// Base58 rendering of the prefix (e.g. "Zpub")
    pub name: &'static str,
    /// Version value; serialized big-endian at the front of the key
    pub version: u32,
}

impl VersionPrefix {
    /// Version bytes as they appear in the serialized extended key.
    pub const fn to_bytes(self) -> [u8; 4] {
        self.version.to_be_bytes()
    }
}

/// SLIP-132 version-byte pair for one script class.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Slip132Versions {
    /// Private-key prefix (e.g. Zprv)
    pub private: VersionPrefix,
    /// Public-key prefix (e.g. Zpub)
    pub public: VersionPrefix,
}

/// Network configuration
#[derive(Debug, Clone)]
pub struct Network {
    /// Network type
    pub network_type: NetworkType,
    /// Human-readable name
    pub name: &'static str,
    /// Coin type (BIP-44 / SLIP-44)
    pub coin_type: u32,
    /// Account-level derivation path for multisig P2WSH keys (BIP-48, script type 2')
    pub multisig_path: &'static str,
    /// SLIP-132 version bytes for multisig P2WSH extended keys
    pub p2wsh_multisig: Slip132Versions,
}

impl Network {
    /// Get mainnet parameters
    pub const fn mainnet() -> Self {
        Self {
            network_type: NetworkType::Mainnet,
            name: "mainnet",
            coin_type: 0,
            multisig_path: "m/48'/0'/0'/2'",
            p2wsh_multisig: Slip132Versions {
                private: VersionPrefix {
                    name: "Zprv",
                    version: 0x02aa_7a99,
                },
                public: VersionPrefix {
                    name: "Zpub",
                    version: 0x02aa_7ed3,
                },
            },
        }
    }

    /// Get testnet parameters
    pub const fn testnet() -> Self {
        Self {
            network_type: NetworkType::Testnet,
            name: "testnet3",
            coin_type: 1,
            multisig_path: "m/48'/1'/0'/2'",
            p2wsh_multisig: Slip132Versions {
                private: VersionPrefix {
                    name: "Vprv",
                    version: 0x0257_5048,
                },
                public: VersionPrefix {
                    name: "Vpub",
                    version: 0x0257_5483,
                },
            },
        }
    }

    /// Get network by type
    pub const fn from_type(network_type: NetworkType) -> Self {
        match network_type {
            NetworkType::Mainnet => Self::mainnet(),
            NetworkType::Testnet => Self::testnet(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mainnet_params() {
        let net = Network::mainnet();
        assert_eq!(net.network_type, NetworkType::Mainnet);
        assert_eq!(net.coin_type, 0);
        assert_eq!(net.multisig_path, "m/48'/0'/0'/2'");
        assert_eq!(net.p2wsh_multisig.public.name, "Zpub");
        assert_eq!(
            net.p2wsh_multisig.public.to_bytes(),
            [0x02, 0xaa, 0x7e, 0xd3]
        );
        assert_eq!(
            net.p2wsh_multisig.private.to_bytes(),
            [0x02, 0xaa, 0x7a, 0x99]
        );
    }

    #[test]
    fn test_testnet_params() {
        let net = Network::testnet();
        assert_eq!(net.coin_type, 1);
        assert_eq!(net.multisig_path, "m/48'/1'/0'/2'");
        assert_eq!(
            net.p2wsh_multisig.public.to_bytes(),
            [0x02, 0x57, 0x54, 0x83]
        );
        assert_eq!(
            net.p2wsh_multisig.private.to_bytes(),
            [0x02, 0x57, 0x50, 0x48]
        );
    }

    #[test]
    fn test_network_from_type() {
        let net = Network::from_type(NetworkType::Testnet);
        assert_eq!(net.network_type, NetworkType::Testnet);
    }

    #[test]
    fn test_network_type_from_str() {
        assert_eq!("mainnet".parse::<NetworkType>().unwrap(), NetworkType::Mainnet);
        assert_eq!("testnet".parse::<NetworkType>().unwrap(), NetworkType::Testnet);
        assert!("signet".parse::<NetworkType>().is_err());
    }
}
