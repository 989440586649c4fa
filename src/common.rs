use crate::utils::hash::sha256;
use crate::{Error, Result};
use secp256k1::{ecdh::shared_secret_point, PublicKey, SecretKey};
#[cfg(any(feature = "sending", feature = "receiving"))]
use secp256k1::{Scalar, Secp256k1};

/// The ECDH shared secret between a private scalar and a public point.
///
/// Holds the shared point `S = x*P`, its x-coordinate `Sx`, and `s = SHA256(Sx)`.
/// Both parties of a payment code pair compute the same value: `a*B == b*A`.
#[derive(Clone, PartialEq, Eq)]
pub struct SharedSecret {
    point: PublicKey,
    x: [u8; 32],
    s: SecretKey,
}

impl SharedSecret {
    /// # Errors
    ///
    /// This function will return an error if:
    ///
    /// * The multiplication does not result in a valid point.
    /// * `SHA256(Sx)` is not a valid private key (zero or not below the curve order).
    pub fn new(secret: &SecretKey, point: &PublicKey) -> Result<Self> {
        // Since PublicKey::from_slice expects an uncompressed public key (0x04<64 bytes>),
        // we first initialize a 65 byte array and add 0x04 as the first byte
        let mut ss_bytes = [0u8; 65];
        ss_bytes[0] = 0x04;

        // Using `shared_secret_point` to ensure the multiplication is constant time
        ss_bytes[1..].copy_from_slice(&shared_secret_point(point, secret));
        let S = PublicKey::from_slice(&ss_bytes).map_err(|_| Error::InvalidPublicKey)?;

        let mut x = [0u8; 32];
        x.copy_from_slice(&ss_bytes[1..33]);

        let s = SecretKey::from_slice(&sha256(&x)).map_err(|_| Error::InvalidSharedSecret)?;

        Ok(SharedSecret { point: S, x, s })
    }

    pub fn point(&self) -> PublicKey {
        self.point
    }

    pub fn x_coordinate(&self) -> &[u8; 32] {
        &self.x
    }

    pub fn secret(&self) -> SecretKey {
        self.s
    }
}

// Never print the shared secret
impl core::fmt::Debug for SharedSecret {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        f.write_str("SharedSecret(..)")
    }
}

/// `B + s*G`
#[cfg(any(feature = "sending", feature = "receiving"))]
pub(crate) fn calculate_payment_public_key(B: &PublicKey, shared: &SharedSecret) -> Result<PublicKey> {
    let secp = Secp256k1::verification_only();

    let P = B
        .add_exp_tweak(&secp, &Scalar::from(shared.secret()))
        .map_err(|_| Error::InvalidDerivedPublicKey)?;

    Ok(P)
}

/// `(b + s) mod n`
#[cfg(feature = "receiving")]
pub(crate) fn calculate_payment_private_key(b: &SecretKey, shared: &SharedSecret) -> Result<SecretKey> {
    let p = b.add_tweak(&Scalar::from(shared.secret()))?;

    Ok(p)
}
