//! Address formatting for derived payment keys.
use core::fmt;
use std::str::FromStr;

use bitcoin::Address;
use secp256k1::PublicKey;
use serde::{Deserialize, Serialize};

use crate::{Error, Network, Result};

/// The output type used to turn a payment public key into an address.
#[derive(Clone, Copy, Debug, Default, Hash, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AddressType {
    /// Pay to public key hash, base58 encoded.
    #[default]
    P2pkh,
    /// Pay to witness public key hash nested in pay to script hash, base58 encoded.
    P2sh,
    /// Native segwit v0 pay to witness public key hash, bech32 encoded.
    P2wpkh,
}

impl AddressType {
    pub fn format(&self, pubkey: &PublicKey, network: Network) -> Result<String> {
        match self {
            AddressType::P2pkh => Ok(p2pkh_address(pubkey, network)),
            AddressType::P2sh => p2sh_address(pubkey, network),
            AddressType::P2wpkh => p2wpkh_address(pubkey, network),
        }
    }
}

impl fmt::Display for AddressType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let s = match self {
            AddressType::P2pkh => "p2pkh",
            AddressType::P2sh => "p2sh",
            AddressType::P2wpkh => "p2wpkh",
        };
        write!(f, "{}", s)
    }
}

impl FromStr for AddressType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "p2pkh" => Ok(AddressType::P2pkh),
            "p2sh" => Ok(AddressType::P2sh),
            "p2wpkh" => Ok(AddressType::P2wpkh),
            _ => Err(Error::UnknownAddressType(s.to_owned())),
        }
    }
}

impl TryFrom<&str> for AddressType {
    type Error = Error;

    fn try_from(s: &str) -> Result<Self> {
        s.parse()
    }
}

/// Legacy pay to public key hash address.
pub fn p2pkh_address(pubkey: &PublicKey, network: Network) -> String {
    Address::p2pkh(&bitcoin::PublicKey::new(*pubkey), network.to_bitcoin_network()).to_string()
}

/// P2SH-wrapped P2WPKH address.
pub fn p2sh_address(pubkey: &PublicKey, network: Network) -> Result<String> {
    let address =
        Address::p2shwpkh(&bitcoin::PublicKey::new(*pubkey), network.to_bitcoin_network())?;

    Ok(address.to_string())
}

/// Native segwit v0 address.
pub fn p2wpkh_address(pubkey: &PublicKey, network: Network) -> Result<String> {
    let address =
        Address::p2wpkh(&bitcoin::PublicKey::new(*pubkey), network.to_bitcoin_network())?;

    Ok(address.to_string())
}
