//! Utility functions for both sending and receiving.
//!
//! This module contains the hashing, address formatting and script template
//! helpers that sit around the payment code derivation logic.
pub mod address;
pub(crate) mod common;
pub(crate) mod hash;
#[cfg(feature = "receiving")]
pub mod receiving;
#[cfg(feature = "sending")]
pub mod sending;

// Define OP_CODES used in script template matching for readability
#[cfg(any(feature = "sending", feature = "receiving"))]
const OP_PUSHDATA1: u8 = 0x4c;
#[cfg(any(feature = "sending", feature = "receiving"))]
const OP_RETURN: u8 = 0x6a;
#[cfg(feature = "receiving")]
const OP_0: u8 = 0x00;
#[cfg(feature = "receiving")]
const OP_PUSHBYTES_20: u8 = 0x14;
#[cfg(feature = "receiving")]
const OP_PUSHBYTES_33: u8 = 0x21;
#[cfg(feature = "receiving")]
const OP_HASH160: u8 = 0xA9;
#[cfg(feature = "receiving")]
const OP_EQUAL: u8 = 0x87;
#[cfg(feature = "receiving")]
const OP_DUP: u8 = 0x76;
#[cfg(feature = "receiving")]
const OP_EQUALVERIFY: u8 = 0x88;
#[cfg(feature = "receiving")]
const OP_CHECKSIG: u8 = 0xAC;

// Only compressed pubkeys are supported for payment codes
#[cfg(feature = "receiving")]
const COMPRESSED_PUBKEY_SIZE: usize = 33;

/// Length of a notification transaction OP_RETURN script: `OP_RETURN OP_PUSHDATA1 0x50 <80 bytes>`.
pub const NOTIFICATION_SCRIPT_LEN: usize = 83;
