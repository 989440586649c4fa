//! The payment code value.
//!
//! A payment code is an 80-byte payload:
//!
//! | offset | size | field |
//! |---|---|---|
//! | 0 | 1 | version, always `0x01` |
//! | 1 | 1 | features |
//! | 2 | 33 | compressed public key |
//! | 35 | 32 | chain code |
//! | 67 | 13 | reserved, the last byte flags segwit support |
//!
//! Its text form is the base58check encoding of `0x47 || payload`.
use core::fmt;
use std::str::FromStr;

use log::{debug, trace};
use secp256k1::{PublicKey, SecretKey};
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

use crate::key_tree::{DerivedChild, KeyTree, Private, Public};
use crate::utils::address::p2pkh_address;
use crate::utils::common::{base58_decode_check, base58_encode_check};
use crate::{Error, Network, Result};

/// Length of a serialized payment code.
pub const PAYMENT_CODE_LEN: usize = 80;

/// Prefix of the base58 text form, distinct from the in-payload version.
const BASE58_PREFIX: u8 = 0x47;

const VERSION_1: u8 = 0x01;
const SEGWIT_FLAG_OFFSET: usize = 79;
const SEGWIT_FLAG: u8 = 0x01;

/// A BIP47 payment code.
///
/// The key tree type `K` fixes what the code can do. [`PaymentCodePublic`] is what you get
/// from parsing someone's code and can only derive public keys. [`PaymentCodePrivate`] is
/// derived from your own wallet seed and also unlocks the notification private key, payment
/// private keys and notification decoding.
#[derive(Clone, PartialEq, Eq)]
pub struct PaymentCode<K: KeyTree = Public> {
    payload: [u8; PAYMENT_CODE_LEN],
    network: Network,
    keys: K,
}

/// A payment code that only knows its public key tree.
pub type PaymentCodePublic = PaymentCode<Public>;

/// A payment code that holds the private root of its key tree.
pub type PaymentCodePrivate = PaymentCode<Private>;

impl PaymentCode<Public> {
    /// Parse a serialized 80-byte payment code.
    ///
    /// # Errors
    ///
    /// This function will return an error if:
    ///
    /// * `bytes` is not exactly 80 bytes long.
    /// * The version byte is not `0x01`.
    /// * The embedded public key is not a valid curve point.
    pub fn from_bytes(bytes: &[u8], network: Network) -> Result<Self> {
        let payload: [u8; PAYMENT_CODE_LEN] = bytes
            .try_into()
            .map_err(|_| Error::InvalidLength(bytes.len()))?;

        if payload[0] != VERSION_1 {
            trace!("rejecting payment code version {:#04x}", payload[0]);
            return Err(Error::InvalidVersion(payload[0]));
        }

        let public_key = PublicKey::from_slice(&payload[2..35])?;
        let mut chain_code = [0u8; 32];
        chain_code.copy_from_slice(&payload[35..67]);

        Ok(PaymentCode {
            payload,
            network,
            keys: Public::new(&public_key, &chain_code, network)?,
        })
    }

    /// Parse the base58 text form of a payment code.
    pub fn from_base58(s: &str, network: Network) -> Result<Self> {
        let data = base58_decode_check(s)?;

        match data.split_first() {
            Some((&BASE58_PREFIX, payload)) => PaymentCode::from_bytes(payload, network),
            Some((&prefix, _)) => Err(Error::InvalidVersion(prefix)),
            None => Err(Error::InvalidLength(0)),
        }
    }
}

impl PaymentCode<Private> {
    /// Derive the payment code of a wallet seed at `m/47'/coin_type'/account'`.
    ///
    /// The coin type is `0` on mainnet and `1` on the test networks. If `segwit` is set, the
    /// code advertises that its owner accepts segwit payment addresses.
    pub fn from_seed(seed: &[u8], account: u32, network: Network, segwit: bool) -> Result<Self> {
        let keys = Private::from_seed(seed, account, network)?;

        let public_key = keys.public_key().serialize();
        let chain_code = keys.chain_code()?;

        let mut payload = [0u8; PAYMENT_CODE_LEN];
        payload[0] = VERSION_1;
        payload[2..35].copy_from_slice(&public_key);
        payload[35..67].copy_from_slice(&chain_code);
        if segwit {
            payload[SEGWIT_FLAG_OFFSET] = SEGWIT_FLAG;
        }

        debug!(
            "derived payment code for account {} on {:?} (segwit: {})",
            account, network, segwit
        );

        Ok(PaymentCode {
            payload,
            network,
            keys,
        })
    }

    /// Drop the private key tree.
    pub fn to_payment_code_public(&self) -> Result<PaymentCodePublic> {
        PaymentCode::from_bytes(&self.payload, self.network)
    }

    /// Derive the hardened child at `index` of this code's key tree.
    ///
    /// Hardened children cannot be derived from the public code, so only the owner can
    /// reach them.
    pub fn derive_hardened(&self, index: u32) -> Result<DerivedChild> {
        self.keys.derive_hardened(index)
    }

    /// Private key of the notification address, child 0 of the key tree.
    pub fn notification_private_key(&self) -> Result<SecretKey> {
        self.derive(0)?.private_key()
    }
}

impl<K: KeyTree> PaymentCode<K> {
    pub fn version(&self) -> u8 {
        self.payload[0]
    }

    pub fn features(&self) -> u8 {
        self.payload[1]
    }

    pub fn segwit(&self) -> bool {
        self.payload[SEGWIT_FLAG_OFFSET] & SEGWIT_FLAG == SEGWIT_FLAG
    }

    pub fn public_key(&self) -> Result<PublicKey> {
        Ok(PublicKey::from_slice(&self.payload[2..35])?)
    }

    pub fn chain_code(&self) -> [u8; 32] {
        let mut chain_code = [0u8; 32];
        chain_code.copy_from_slice(&self.payload[35..67]);
        chain_code
    }

    pub fn network(&self) -> Network {
        self.network
    }

    pub fn as_bytes(&self) -> &[u8; PAYMENT_CODE_LEN] {
        &self.payload
    }

    pub fn to_bytes(&self) -> [u8; PAYMENT_CODE_LEN] {
        self.payload
    }

    pub fn to_base58(&self) -> String {
        let mut prefixed = [0u8; PAYMENT_CODE_LEN + 1];
        prefixed[0] = BASE58_PREFIX;
        prefixed[1..].copy_from_slice(&self.payload);
        base58_encode_check(&prefixed)
    }

    /// Derive the non-hardened child at `index` of this code's key tree.
    pub fn derive(&self, index: u32) -> Result<DerivedChild> {
        self.keys.derive(index)
    }

    pub fn notification_public_key(&self) -> Result<PublicKey> {
        Ok(self.derive(0)?.public_key())
    }

    /// The P2PKH notification address, whatever address type the code's owner prefers.
    pub fn notification_address(&self) -> Result<String> {
        Ok(p2pkh_address(
            &self.notification_public_key()?,
            self.network,
        ))
    }
}

impl<K: KeyTree> fmt::Display for PaymentCode<K> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.to_base58())
    }
}

impl<K: KeyTree> fmt::Debug for PaymentCode<K> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("PaymentCode")
            .field("code", &self.to_base58())
            .field("network", &self.network)
            .field("keys", &self.keys)
            .finish()
    }
}

/// Parses a mainnet payment code. Use [`PaymentCode::from_base58`] for other networks.
impl FromStr for PaymentCode<Public> {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        PaymentCode::from_base58(s, Network::Mainnet)
    }
}

impl TryFrom<&str> for PaymentCode<Public> {
    type Error = Error;

    fn try_from(s: &str) -> Result<Self> {
        s.parse()
    }
}

impl Serialize for PaymentCode<Public> {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_base58())
    }
}

impl<'de> Deserialize<'de> for PaymentCode<Public> {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let code_str: String = Deserialize::deserialize(deserializer)?;

        PaymentCode::from_base58(&code_str, Network::Mainnet).map_err(de::Error::custom)
    }
}
