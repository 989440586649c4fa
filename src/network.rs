use crate::Error;
use serde::{Deserialize, Serialize};

/// The network a payment code is used on.
///
/// Each network carries the parameter set needed to format addresses and derive keys:
/// the P2PKH and P2SH version bytes, the bech32 human-readable prefix, and the BIP32
/// extended key versions. Signet uses the same parameters as Testnet.
#[derive(Clone, Copy, Debug, Default, Hash, PartialEq, Eq, Deserialize, Serialize)]
pub enum Network {
    #[default]
    Mainnet,
    Testnet,
    Regtest,
}

/// BIP32 extended key version bytes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Bip32Versions {
    pub public: u32,
    pub private: u32,
}

impl Network {
    pub fn p2pkh_version(&self) -> u8 {
        match self {
            Network::Mainnet => 0x00,
            Network::Testnet | Network::Regtest => 0x6f,
        }
    }

    pub fn p2sh_version(&self) -> u8 {
        match self {
            Network::Mainnet => 0x05,
            Network::Testnet | Network::Regtest => 0xc4,
        }
    }

    pub fn bech32_hrp(&self) -> &'static str {
        match self {
            Network::Mainnet => "bc",
            Network::Testnet => "tb",
            Network::Regtest => "bcrt",
        }
    }

    pub fn bip32_versions(&self) -> Bip32Versions {
        match self {
            Network::Mainnet => Bip32Versions {
                public: 0x0488b21e,
                private: 0x0488ade4,
            },
            Network::Testnet | Network::Regtest => Bip32Versions {
                public: 0x043587cf,
                private: 0x04358394,
            },
        }
    }

    /// Coin type used in the `m/47'/coin_type'/account'` derivation path.
    pub fn coin_type(&self) -> u32 {
        match self {
            Network::Mainnet => 0,
            Network::Testnet | Network::Regtest => 1,
        }
    }

    pub fn to_bitcoin_network(self) -> bitcoin::Network {
        match self {
            Network::Mainnet => bitcoin::Network::Bitcoin,
            Network::Testnet => bitcoin::Network::Testnet,
            Network::Regtest => bitcoin::Network::Regtest,
        }
    }
}

impl From<Network> for &str {
    fn from(value: Network) -> Self {
        match value {
            Network::Mainnet => "bitcoin", // we use the same string as rust-bitcoin for compatibility
            Network::Regtest => "regtest",
            Network::Testnet => "testnet",
        }
    }
}

impl TryFrom<&str> for Network {
    type Error = crate::Error;

    fn try_from(value: &str) -> std::result::Result<Self, Self::Error> {
        let res = match value {
            "bitcoin" | "mainnet" | "main" => Self::Mainnet, // We also take the core style argument
            "regtest" => Self::Regtest,
            "testnet" | "signet" | "test" => Self::Testnet, // core arg
            _ => return Err(Error::InvalidNetwork(value.to_string())),
        };
        Ok(res)
    }
}

#[cfg(test)]
mod tests {
    use super::Network;

    #[test]
    fn network_from_str() {
        assert_eq!(Network::try_from("bitcoin").unwrap(), Network::Mainnet);
        assert_eq!(Network::try_from("main").unwrap(), Network::Mainnet);
        assert_eq!(Network::try_from("signet").unwrap(), Network::Testnet);
        assert_eq!(Network::try_from("regtest").unwrap(), Network::Regtest);
        Network::try_from("litecoin").unwrap_err();
    }

    #[test]
    fn testnet_and_regtest_share_versions() {
        assert_eq!(
            Network::Testnet.bip32_versions(),
            Network::Regtest.bip32_versions()
        );
        assert_eq!(Network::Testnet.p2pkh_version(), 0x6f);
        assert_ne!(Network::Testnet.bech32_hrp(), Network::Regtest.bech32_hrp());
        assert_eq!(Network::Mainnet.coin_type(), 0);
        assert_eq!(Network::Regtest.coin_type(), 1);
    }
}
