//! The hierarchical key tree behind a payment code.
//!
//! A payment code is the root of a BIP32 tree. Anyone holding the code can derive the
//! public children, but only the owner, who derived the code from a wallet seed, holds
//! the private root and can derive private children.
use core::fmt;

use bitcoin::bip32::{ChildNumber, Xpriv, Xpub};
use secp256k1::{PublicKey, Secp256k1, SecretKey};

use crate::{Error, Network, Result};

// Offsets inside a BIP32 serialized extended key
const CHAIN_CODE_RANGE: core::ops::Range<usize> = 13..45;
const KEY_RANGE: core::ops::Range<usize> = 45..78;

/// A child of a payment code's key tree.
///
/// The public key is always available. The private key is only present when the child was
/// derived from a private root.
#[derive(Clone, PartialEq, Eq)]
pub struct DerivedChild {
    public_key: PublicKey,
    private_key: Option<SecretKey>,
}

impl DerivedChild {
    pub fn public_key(&self) -> PublicKey {
        self.public_key
    }

    pub fn private_key(&self) -> Result<SecretKey> {
        self.private_key.ok_or(Error::MissingPrivateKey)
    }

    pub fn has_private_key(&self) -> bool {
        self.private_key.is_some()
    }
}

impl fmt::Debug for DerivedChild {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("DerivedChild")
            .field("public_key", &self.public_key)
            .field("has_private_key", &self.has_private_key())
            .finish()
    }
}

/// Capability of a payment code's key tree.
///
/// Implemented by [`Public`] for codes parsed from their serialized form, and by [`Private`]
/// for codes derived from a wallet seed.
pub trait KeyTree: Clone + fmt::Debug {
    /// Non-hardened child derivation at `index`.
    fn derive(&self, index: u32) -> Result<DerivedChild>;
}

/// A public key tree, rebuilt from the public key and chain code embedded in a payment code.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Public {
    root: Xpub,
}

impl Public {
    pub(crate) fn new(public_key: &PublicKey, chain_code: &[u8; 32], network: Network) -> Result<Self> {
        let mut encoded = [0u8; 78];
        encoded[..4].copy_from_slice(&network.bip32_versions().public.to_be_bytes());
        // depth, parent fingerprint and child number stay zeroed for a root key
        encoded[CHAIN_CODE_RANGE].copy_from_slice(chain_code);
        encoded[KEY_RANGE].copy_from_slice(&public_key.serialize());

        Ok(Public {
            root: Xpub::decode(&encoded)?,
        })
    }
}

impl KeyTree for Public {
    fn derive(&self, index: u32) -> Result<DerivedChild> {
        let secp = Secp256k1::verification_only();

        let child = self
            .root
            .derive_pub(&secp, &[ChildNumber::from_normal_idx(index)?])?;

        Ok(DerivedChild {
            public_key: child.public_key,
            private_key: None,
        })
    }
}

/// A private key tree rooted at `m/47'/coin_type'/account'` of a wallet seed.
///
/// Never serialized; it lives only as long as the payment code that owns it.
#[derive(Clone, PartialEq, Eq)]
pub struct Private {
    root: Xpriv,
}

impl Private {
    pub(crate) fn from_seed(seed: &[u8], account: u32, network: Network) -> Result<Self> {
        let secp = Secp256k1::signing_only();

        let master_key = Xpriv::new_master(network.to_bitcoin_network(), seed)?;
        let path = [
            ChildNumber::from_hardened_idx(47)?,
            ChildNumber::from_hardened_idx(network.coin_type())?,
            ChildNumber::from_hardened_idx(account)?,
        ];

        Ok(Private {
            root: master_key.derive_priv(&secp, &path)?,
        })
    }

    pub(crate) fn public_key(&self) -> PublicKey {
        let secp = Secp256k1::signing_only();

        self.root.private_key.public_key(&secp)
    }

    pub(crate) fn chain_code(&self) -> Result<[u8; 32]> {
        <[u8; 32]>::try_from(&self.root.encode()[CHAIN_CODE_RANGE]).map_err(|_| {
            Error::MalformedDerivedKey("Derived chain code must be 32 bytes".to_owned())
        })
    }

    /// Hardened child derivation at `index`, only possible from a private root.
    pub(crate) fn derive_hardened(&self, index: u32) -> Result<DerivedChild> {
        self.derive_child(ChildNumber::from_hardened_idx(index)?)
    }

    fn derive_child(&self, child_number: ChildNumber) -> Result<DerivedChild> {
        let secp = Secp256k1::signing_only();

        let child = self.root.derive_priv(&secp, &[child_number])?;

        Ok(DerivedChild {
            public_key: child.private_key.public_key(&secp),
            private_key: Some(child.private_key),
        })
    }
}

impl KeyTree for Private {
    fn derive(&self, index: u32) -> Result<DerivedChild> {
        self.derive_child(ChildNumber::from_normal_idx(index)?)
    }
}

impl fmt::Debug for Private {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("Private")
            .field("public_key", &self.public_key())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BOB_SEED: &str = "87eaaac5a539ab028df44d9110defbef3797ddb805ca309f61a69ff96dbaa7ab5b24038cf029edec5235d933110f0aea8aeecf939ed14fc20730bba71e4b1110";

    #[test]
    fn public_and_private_trees_agree() {
        let seed = hex::decode(BOB_SEED).unwrap();
        let private = Private::from_seed(&seed, 0, Network::Mainnet).unwrap();
        let public = Public::new(
            &private.public_key(),
            &private.chain_code().unwrap(),
            Network::Mainnet,
        )
        .unwrap();

        for i in 0..5 {
            let private_child = private.derive(i).unwrap();
            let public_child = public.derive(i).unwrap();

            assert_eq!(private_child.public_key(), public_child.public_key());
            assert!(private_child.has_private_key());
            assert!(matches!(
                public_child.private_key(),
                Err(Error::MissingPrivateKey)
            ));
        }
    }

    #[test]
    fn derivation_is_deterministic() {
        let seed = hex::decode(BOB_SEED).unwrap();
        let first = Private::from_seed(&seed, 0, Network::Mainnet).unwrap();
        let second = Private::from_seed(&seed, 0, Network::Mainnet).unwrap();

        assert_eq!(first.derive(3).unwrap(), second.derive(3).unwrap());
        assert_ne!(first.derive(3).unwrap(), first.derive(4).unwrap());
    }

    #[test]
    fn bob_notification_private_key() {
        let seed = hex::decode(BOB_SEED).unwrap();
        let private = Private::from_seed(&seed, 0, Network::Mainnet).unwrap();

        assert_eq!(
            hex::encode(private.derive(0).unwrap().private_key().unwrap().secret_bytes()),
            "04448fd1be0c9c13a5ca0b530e464b619dc091b299b98c5cab9978b32b4a1b8b"
        );
    }

    #[test]
    fn hardened_child_differs_from_normal_child() {
        let seed = hex::decode(BOB_SEED).unwrap();
        let private = Private::from_seed(&seed, 0, Network::Mainnet).unwrap();

        let hardened = private.derive_hardened(0).unwrap();
        assert!(hardened.has_private_key());
        assert_ne!(hardened.public_key(), private.derive(0).unwrap().public_key());
        assert_eq!(hardened, private.derive_hardened(0).unwrap());

        assert!(matches!(
            private.derive_hardened(1 << 31),
            Err(Error::Bip32Error(_))
        ));
    }

    #[test]
    fn hardened_index_is_rejected() {
        let seed = hex::decode(BOB_SEED).unwrap();
        let private = Private::from_seed(&seed, 0, Network::Mainnet).unwrap();

        assert!(matches!(
            private.derive(1 << 31),
            Err(Error::Bip32Error(_))
        ));
    }
}
