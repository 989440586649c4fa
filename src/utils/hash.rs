use bitcoin_hashes::{sha256, Hash};
#[cfg(any(feature = "sending", feature = "receiving"))]
use bitcoin_hashes::{sha512, HashEngine, Hmac, HmacEngine};

#[cfg(any(feature = "sending", feature = "receiving"))]
use crate::payment_code::PAYMENT_CODE_LEN;

pub(crate) fn sha256(data: &[u8]) -> [u8; 32] {
    sha256::Hash::hash(data).to_byte_array()
}

#[cfg(feature = "receiving")]
pub(crate) fn hash160(data: &[u8]) -> [u8; 20] {
    bitcoin_hashes::hash160::Hash::hash(data).to_byte_array()
}

/// The 64-byte pad used to blind a payment code inside a notification transaction.
///
/// Computed as `HMAC-SHA512(key = outpoint, message = Sx)`, where `Sx` is the x-coordinate
/// of the ECDH shared point between the designated input key and the recipient's
/// notification key.
#[cfg(any(feature = "sending", feature = "receiving"))]
#[derive(Clone)]
pub(crate) struct BlindingMask([u8; 64]);

#[cfg(any(feature = "sending", feature = "receiving"))]
impl BlindingMask {
    pub(crate) fn from_outpoint_and_secret(outpoint: &[u8], shared_x: &[u8; 32]) -> BlindingMask {
        let mut eng = HmacEngine::<sha512::Hash>::new(outpoint);
        eng.input(shared_x);
        BlindingMask(Hmac::<sha512::Hash>::from_engine(eng).to_byte_array())
    }

    /// XOR the mask into the x-coordinate and chain code of a serialized payment code.
    ///
    /// Bytes `[0, 3)` (version, features, pubkey sign) and the reserved tail are left as is.
    /// Applying the same mask twice restores the input.
    pub(crate) fn apply(&self, payload: &mut [u8; PAYMENT_CODE_LEN]) {
        for (byte, mask) in payload[3..67].iter_mut().zip(self.0.iter()) {
            *byte ^= mask;
        }
    }
}
