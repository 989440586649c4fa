//! BIP47 reusable payment codes.
//!
//! A [`PaymentCode`] is a public identifier from which a sender and a recipient each derive
//! the same sequence of one-time payment addresses, using ECDH between their key trees.
//! The recipient learns about a new sender from a notification transaction that carries the
//! sender's blinded payment code.
//!
//! Sending functionality lives behind the `sending` feature and receiving functionality
//! behind the `receiving` feature. Both are enabled by default.
#![allow(non_snake_case)]
mod common;
mod error;
mod key_tree;
mod network;
mod payment_code;

#[cfg(feature = "receiving")]
pub mod receiving;
#[cfg(feature = "sending")]
pub mod sending;
pub mod structs;
pub mod utils;

pub use bitcoin;
pub use bitcoin_hashes;
pub use secp256k1;

pub use crate::common::SharedSecret;
pub use crate::error::Error;
pub use crate::key_tree::{DerivedChild, KeyTree, Private, Public};
pub use crate::network::{Bip32Versions, Network};
pub use crate::payment_code::{
    PaymentCode, PaymentCodePrivate, PaymentCodePublic, PAYMENT_CODE_LEN,
};
pub use crate::structs::Outpoint;
pub use crate::utils::address::AddressType;

pub type Result<T> = std::result::Result<T, Error>;
