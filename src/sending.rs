//! The sending side of payment codes.
//!
//! Before paying someone through their payment code for the first time, a sender publishes
//! a notification transaction. It pays the recipient's notification address and carries the
//! sender's own payment code, blinded with a key only the recipient can recompute, in an
//! OP_RETURN output. Use [`PaymentCode::get_blinded_payment_code`] and
//! [`crate::utils::sending::build_notification_script`] to build that output.
//!
//! After that, each payment goes to a fresh address obtained with
//! [`PaymentCode::get_payment_address_for`], incrementing the index every time.
//!
//! See `tests/vector_tests.rs` for a concrete example.
use log::{debug, trace};
use secp256k1::{PublicKey, SecretKey};

use crate::common::{calculate_payment_public_key, SharedSecret};
use crate::key_tree::{KeyTree, Private};
use crate::payment_code::{PaymentCode, PAYMENT_CODE_LEN};
use crate::structs::Outpoint;
use crate::utils::address::AddressType;
use crate::utils::hash::BlindingMask;
use crate::utils::sending::build_notification_script;
use crate::utils::NOTIFICATION_SCRIPT_LEN;
use crate::Result;

impl<K: KeyTree> PaymentCode<K> {
    /// Payment public key `B + s*G` for the payment at `index`, as seen by a sender.
    ///
    /// `self` is the recipient's code. `B` is its child at `index`, and `s` is derived from
    /// the ECDH between `sender_notification_key` and `B`.
    ///
    /// # Errors
    ///
    /// This function will return an error if:
    ///
    /// * `index` is a hardened index.
    /// * The shared secret is not a valid scalar, in which case the next index should be used.
    pub fn derive_payment_public_key(
        &self,
        sender_notification_key: &SecretKey,
        index: u32,
    ) -> Result<PublicKey> {
        let B = self.derive(index)?.public_key();
        let shared = SharedSecret::new(sender_notification_key, &B)?;

        trace!("derived payment public key at index {}", index);

        calculate_payment_public_key(&B, &shared)
    }

    /// Address of the payment at `index`, see [`PaymentCode::derive_payment_public_key`].
    pub fn get_payment_address(
        &self,
        sender_notification_key: &SecretKey,
        index: u32,
        address_type: AddressType,
    ) -> Result<String> {
        let P = self.derive_payment_public_key(sender_notification_key, index)?;

        address_type.format(&P, self.network())
    }
}

impl PaymentCode<Private> {
    /// Payment public key for the payment to `recipient` at `index`, using our own
    /// notification private key as the sender key.
    pub fn derive_payment_public_key_for<K: KeyTree>(
        &self,
        recipient: &PaymentCode<K>,
        index: u32,
    ) -> Result<PublicKey> {
        recipient.derive_payment_public_key(&self.notification_private_key()?, index)
    }

    /// Address of the payment to `recipient` at `index`, formatted for `recipient`'s network.
    pub fn get_payment_address_for<K: KeyTree>(
        &self,
        recipient: &PaymentCode<K>,
        index: u32,
        address_type: AddressType,
    ) -> Result<String> {
        recipient.get_payment_address(&self.notification_private_key()?, index, address_type)
    }

    /// Blind our payment code for a notification transaction to `destination`.
    ///
    /// # Arguments
    ///
    /// * `destination` - The payment code being notified.
    /// * `outpoint` - The first outpoint spent by the notification transaction.
    /// * `designated_key` - The private key of the input spending `outpoint`. Its public
    /// key is what the recipient will read back from that input.
    ///
    /// # Returns
    ///
    /// Our payload with the public key and chain code XOR-ed with
    /// `HMAC-SHA512(outpoint, Sx)`, where `Sx` is the x-coordinate of the ECDH between
    /// `designated_key` and `destination`'s notification public key. The version, features
    /// and reserved bytes are left as is.
    ///
    /// # Errors
    ///
    /// This function will return an error if:
    ///
    /// * The shared secret between `designated_key` and the notification key is invalid.
    pub fn get_blinded_payment_code<K: KeyTree>(
        &self,
        destination: &PaymentCode<K>,
        outpoint: &Outpoint,
        designated_key: &SecretKey,
    ) -> Result<[u8; PAYMENT_CODE_LEN]> {
        let notification_key = destination.notification_public_key()?;
        let shared = SharedSecret::new(designated_key, &notification_key)?;

        let mask = BlindingMask::from_outpoint_and_secret(&outpoint.to_bytes(), shared.x_coordinate());
        let mut payload = self.to_bytes();
        mask.apply(&mut payload);

        debug!("blinded payment code for notification spending {}", outpoint);

        Ok(payload)
    }

    /// The OP_RETURN script of a notification transaction to `destination`.
    ///
    /// Same as [`PaymentCode::get_blinded_payment_code`], wrapped with
    /// [`build_notification_script`].
    pub fn get_notification_script<K: KeyTree>(
        &self,
        destination: &PaymentCode<K>,
        outpoint: &Outpoint,
        designated_key: &SecretKey,
    ) -> Result<[u8; NOTIFICATION_SCRIPT_LEN]> {
        let blinded = self.get_blinded_payment_code(destination, outpoint, designated_key)?;

        Ok(build_notification_script(&blinded))
    }
}
