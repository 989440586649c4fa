//! The receiving side of payment codes.
//!
//! A recipient first learns about a new sender by decoding a notification transaction with
//! [`PaymentCode::get_payment_code_from_notification_transaction_data`]. The designated
//! public key it needs can be read from the transaction's first input with
//! [`crate::utils::receiving::get_designated_pubkey`].
//!
//! Once the sender's payment code is known, the recipient can watch the addresses returned by
//! [`PaymentCode::get_receiving_address`] and spend them with the keys returned by
//! [`PaymentCode::derive_payment_private_key`].
use log::{debug, trace};
use secp256k1::{PublicKey, SecretKey};

use crate::common::{calculate_payment_private_key, calculate_payment_public_key, SharedSecret};
use crate::key_tree::{KeyTree, Private};
use crate::payment_code::{PaymentCode, PaymentCodePublic};
use crate::structs::Outpoint;
use crate::utils::address::AddressType;
use crate::utils::hash::BlindingMask;
use crate::utils::receiving::extract_notification_payload;
use crate::Result;

impl PaymentCode<Private> {
    /// Private key `(b + s) mod n` of the payment received from `sender` at `index`.
    ///
    /// `b` is our child at `index` and `s` is derived from the ECDH between `b` and the
    /// sender's notification public key. Its public key is exactly what the sender computes
    /// with [`PaymentCode::derive_payment_public_key_for`].
    ///
    /// # Errors
    ///
    /// This function will return an error if:
    ///
    /// * `index` is a hardened index.
    /// * The shared secret is not a valid scalar.
    /// * The tweaked key is zero.
    pub fn derive_payment_private_key<K: KeyTree>(
        &self,
        sender: &PaymentCode<K>,
        index: u32,
    ) -> Result<SecretKey> {
        let b = self.derive(index)?.private_key()?;
        let A = sender.notification_public_key()?;
        let shared = SharedSecret::new(&b, &A)?;

        trace!("derived payment private key at index {}", index);

        calculate_payment_private_key(&b, &shared)
    }

    /// Public key of the payment received from `sender` at `index`, without touching the
    /// payment private key.
    pub fn derive_receiving_public_key<K: KeyTree>(
        &self,
        sender: &PaymentCode<K>,
        index: u32,
    ) -> Result<PublicKey> {
        let child = self.derive(index)?;
        let A = sender.notification_public_key()?;
        let shared = SharedSecret::new(&child.private_key()?, &A)?;

        calculate_payment_public_key(&child.public_key(), &shared)
    }

    /// Address to watch for the payment from `sender` at `index`.
    pub fn get_receiving_address<K: KeyTree>(
        &self,
        sender: &PaymentCode<K>,
        index: u32,
        address_type: AddressType,
    ) -> Result<String> {
        let P = self.derive_receiving_public_key(sender, index)?;

        address_type.format(&P, self.network())
    }

    /// Recover the sender's payment code from a notification transaction sent to us.
    ///
    /// # Arguments
    ///
    /// * `script_pub_key` - The OP_RETURN output script, `OP_RETURN OP_PUSHDATA1 0x50 <80 bytes>`.
    /// * `outpoint` - The outpoint spent by the transaction's first input.
    /// * `designated_pubkey` - The public key exposed by that input.
    ///
    /// # Returns
    ///
    /// The sender's payment code, on our network.
    ///
    /// # Errors
    ///
    /// This function will return an error if:
    ///
    /// * `script_pub_key` is not a notification script.
    /// * The shared secret with `designated_pubkey` is invalid.
    /// * The unblinded payload is not a valid payment code, which is what happens when the
    /// notification was meant for someone else.
    pub fn get_payment_code_from_notification_transaction_data(
        &self,
        script_pub_key: &[u8],
        outpoint: &Outpoint,
        designated_pubkey: &PublicKey,
    ) -> Result<PaymentCodePublic> {
        let mut payload = extract_notification_payload(script_pub_key)?;

        let shared = SharedSecret::new(&self.notification_private_key()?, designated_pubkey)?;
        BlindingMask::from_outpoint_and_secret(&outpoint.to_bytes(), shared.x_coordinate())
            .apply(&mut payload);

        let sender = PaymentCode::from_bytes(&payload, self.network()).map_err(|e| {
            trace!("notification spending {} did not decode: {}", outpoint, e);
            e
        })?;

        debug!("decoded notification from {} spending {}", sender, outpoint);

        Ok(sender)
    }
}
