use core::fmt;
use std::str::FromStr;

use bitcoin_hashes::Hash;

use crate::{Error, Result};

/// Serialized size of an outpoint: 32-byte txid followed by a little endian vout.
pub const OUTPOINT_LEN: usize = 36;

/// A reference to a transaction output, used to key the blinding of a payment code.
///
/// The txid is stored in internal byte order, i.e. reversed from its usual hex display.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Outpoint {
    pub txid: [u8; 32],
    pub vout: u32,
}

impl Outpoint {
    pub fn new(txid: [u8; 32], vout: u32) -> Self {
        Outpoint { txid, vout }
    }

    pub fn to_bytes(&self) -> [u8; OUTPOINT_LEN] {
        let mut buffer = [0u8; OUTPOINT_LEN];
        buffer[..32].copy_from_slice(&self.txid);
        buffer[32..].copy_from_slice(&self.vout.to_le_bytes());
        buffer
    }
}

impl TryFrom<&[u8]> for Outpoint {
    type Error = Error;

    fn try_from(bytes: &[u8]) -> Result<Self> {
        if bytes.len() != OUTPOINT_LEN {
            return Err(Error::InvalidOutpoint(format!(
                "expected {} bytes, got {}",
                OUTPOINT_LEN,
                bytes.len()
            )));
        }

        let mut txid = [0u8; 32];
        txid.copy_from_slice(&bytes[..32]);
        let mut vout = [0u8; 4];
        vout.copy_from_slice(&bytes[32..]);

        Ok(Outpoint::new(txid, u32::from_le_bytes(vout)))
    }
}

impl FromStr for Outpoint {
    type Err = Error;

    /// Parses `<txid>:<vout>`, with the txid in its usual (reversed) hex display.
    fn from_str(s: &str) -> Result<Self> {
        let (txid_str, vout_str) = s
            .split_once(':')
            .ok_or_else(|| Error::InvalidOutpoint(format!("missing vout in {}", s)))?;

        let mut bytes: Vec<u8> = hex::decode(txid_str)?;
        if bytes.len() != 32 {
            return Err(Error::InvalidOutpoint(format!(
                "Invalid txid hex representation: {}",
                txid_str
            )));
        }
        // txid in string format is big endian and we need little endian
        bytes.reverse();

        let vout = vout_str
            .parse::<u32>()
            .map_err(|e| Error::InvalidOutpoint(e.to_string()))?;

        let mut txid = [0u8; 32];
        txid.copy_from_slice(&bytes);
        Ok(Outpoint::new(txid, vout))
    }
}

impl fmt::Display for Outpoint {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let mut txid = self.txid;
        txid.reverse();
        write!(f, "{}:{}", hex::encode(txid), self.vout)
    }
}

impl From<bitcoin::OutPoint> for Outpoint {
    fn from(outpoint: bitcoin::OutPoint) -> Self {
        Outpoint::new(outpoint.txid.to_byte_array(), outpoint.vout)
    }
}
