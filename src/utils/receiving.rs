//! Receiving utility functions.
use crate::{
    payment_code::PAYMENT_CODE_LEN,
    utils::{
        hash::hash160, COMPRESSED_PUBKEY_SIZE, NOTIFICATION_SCRIPT_LEN, OP_0, OP_CHECKSIG,
        OP_DUP, OP_EQUAL, OP_EQUALVERIFY, OP_HASH160, OP_PUSHBYTES_20, OP_PUSHBYTES_33,
        OP_PUSHDATA1, OP_RETURN,
    },
    Error, Result,
};
use bitcoin::{Script, TxIn};
use secp256k1::PublicKey;

/// Check if a script_pub_key has the exact shape of a notification OP_RETURN output.
pub fn is_notification_script(spk: &[u8]) -> bool {
    matches!(spk, [OP_RETURN, OP_PUSHDATA1, len, ..] if *len as usize == PAYMENT_CODE_LEN && spk.len() == NOTIFICATION_SCRIPT_LEN)
}

/// Get the blinded payment code pushed by a notification OP_RETURN output.
///
/// # Errors
///
/// Returns `InvalidOpReturnPayload` if the script is not `OP_RETURN OP_PUSHDATA1 0x50 <80 bytes>`.
pub fn extract_notification_payload(spk: &[u8]) -> Result<[u8; PAYMENT_CODE_LEN]> {
    if !is_notification_script(spk) {
        return Err(Error::InvalidOpReturnPayload);
    }

    let mut payload = [0u8; PAYMENT_CODE_LEN];
    payload.copy_from_slice(&spk[NOTIFICATION_SCRIPT_LEN - PAYMENT_CODE_LEN..]);
    Ok(payload)
}

// script templates for inputs that expose the designated public key
fn is_p2pk(spk: &[u8]) -> bool {
    matches!(spk, [OP_PUSHBYTES_33, .., OP_CHECKSIG] if spk.len() == 35)
}

fn is_p2wpkh(spk: &[u8]) -> bool {
    matches!(spk, [OP_0, OP_PUSHBYTES_20, ..] if spk.len() == 22)
}

fn is_p2sh(spk: &[u8]) -> bool {
    matches!(spk, [OP_HASH160, OP_PUSHBYTES_20, .., OP_EQUAL] if spk.len() == 23)
}

fn is_p2pkh(spk: &[u8]) -> bool {
    matches!(spk, [OP_DUP, OP_HASH160, OP_PUSHBYTES_20, .., OP_EQUALVERIFY, OP_CHECKSIG] if spk.len() == 25)
}

fn pubkey_from_witness(txinwitness: &[Vec<u8>]) -> Option<PublicKey> {
    match txinwitness.last() {
        Some(value) if value.len() == COMPRESSED_PUBKEY_SIZE => PublicKey::from_slice(value).ok(),
        _ => None,
    }
}

/// Get the designated public key of a notification transaction from its first input.
///
/// # Arguments
///
/// * `script_sig` - The script signature as a byte array.
/// * `txinwitness` - The witness data.
/// * `script_pub_key` - The scriptpubkey from the output spent. This requires looking up the previous output.
///
/// # Returns
///
/// The public key exposed by the input, or `None` if the input is of a type that does not expose one.
///
/// # Errors
///
/// This function will error if:
///
/// * The script_sig or witness is inconsistent with the type of the output spent.
pub fn get_designated_pubkey(
    script_sig: &[u8],
    txinwitness: &[Vec<u8>],
    script_pub_key: &[u8],
) -> Result<Option<PublicKey>> {
    if is_p2pk(script_pub_key) {
        return Ok(Some(PublicKey::from_slice(
            &script_pub_key[1..1 + COMPRESSED_PUBKEY_SIZE],
        )?));
    } else if is_p2pkh(script_pub_key) {
        match (txinwitness.is_empty(), script_sig.is_empty()) {
            (true, false) => {
                let spk_hash = &script_pub_key[3..23];
                for i in (COMPRESSED_PUBKEY_SIZE..=script_sig.len()).rev() {
                    if let Some(pubkey_bytes) = script_sig.get(i - COMPRESSED_PUBKEY_SIZE..i) {
                        if hash160(pubkey_bytes) == spk_hash {
                            return Ok(Some(PublicKey::from_slice(pubkey_bytes)?));
                        }
                    } else {
                        return Ok(None);
                    }
                }
            }
            (_, true) => {
                return Err(Error::InvalidDesignatedInput(
                    "Empty script_sig for spending a p2pkh".to_owned(),
                ))
            }
            (false, _) => {
                return Err(Error::InvalidDesignatedInput(
                    "non empty witness for spending a p2pkh".to_owned(),
                ))
            }
        }
    } else if is_p2sh(script_pub_key) {
        match (txinwitness.is_empty(), script_sig.is_empty()) {
            (false, false) => {
                let redeem_script = &script_sig[1..];
                if is_p2wpkh(redeem_script) {
                    return Ok(pubkey_from_witness(txinwitness));
                }
            }
            (_, true) => {
                return Err(Error::InvalidDesignatedInput(
                    "Empty script_sig for spending a p2sh".to_owned(),
                ))
            }
            (true, false) => return Ok(None),
        }
    } else if is_p2wpkh(script_pub_key) {
        match (txinwitness.is_empty(), script_sig.is_empty()) {
            (false, true) => return Ok(pubkey_from_witness(txinwitness)),
            (_, false) => {
                return Err(Error::InvalidDesignatedInput(
                    "Non empty script sig for spending a segwit output".to_owned(),
                ))
            }
            (true, _) => {
                return Err(Error::InvalidDesignatedInput(
                    "Empty witness for spending a segwit output".to_owned(),
                ))
            }
        }
    }
    Ok(None)
}

/// Get the designated public key from a rust-bitcoin input and the script it spends.
pub fn get_designated_pubkey_from_txin(
    txin: &TxIn,
    prevout_script_pub_key: &Script,
) -> Result<Option<PublicKey>> {
    let witness = txin.witness.to_vec();

    get_designated_pubkey(
        txin.script_sig.as_bytes(),
        &witness,
        prevout_script_pub_key.as_bytes(),
    )
}
