use std::fmt;

#[derive(Debug)]
pub enum Error {
    InvalidLength(usize),
    InvalidVersion(u8),
    ChecksumMismatch,
    InvalidPrivateKey,
    InvalidPublicKey,
    InvalidDerivedPublicKey,
    InvalidSharedSecret,
    MissingPrivateKey,
    UnknownAddressType(String),
    InvalidOpReturnPayload,
    MalformedDerivedKey(String),
    InvalidDesignatedInput(String),
    InvalidOutpoint(String),
    InvalidNetwork(String),
    Secp256k1Error(secp256k1::Error),
    Bip32Error(bitcoin::bip32::Error),
    Base58Error(bitcoin::base58::Error),
    AddressError(bitcoin::address::Error),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::InvalidLength(len) => write!(f, "Invalid payment code length: {}", len),
            Error::InvalidVersion(v) => write!(f, "Unsupported payment code version: {:#04x}", v),
            Error::ChecksumMismatch => write!(f, "Invalid base58 checksum"),
            Error::InvalidPrivateKey => write!(f, "Invalid private key"),
            Error::InvalidPublicKey => write!(f, "Invalid public key"),
            Error::InvalidDerivedPublicKey => write!(f, "Invalid derived public key"),
            Error::InvalidSharedSecret => write!(f, "Invalid shared secret"),
            Error::MissingPrivateKey => write!(f, "Payment code has no private key"),
            Error::UnknownAddressType(t) => write!(f, "Unknown address type: {}", t),
            Error::InvalidOpReturnPayload => write!(f, "Invalid OP_RETURN payload"),
            Error::MalformedDerivedKey(msg) => write!(f, "{}", msg),
            Error::InvalidDesignatedInput(msg) => write!(f, "{}", msg),
            Error::InvalidOutpoint(msg) => write!(f, "Invalid outpoint: {}", msg),
            Error::InvalidNetwork(msg) => write!(f, "Invalid network: {}", msg),
            Error::Secp256k1Error(e) => e.fmt(f),
            Error::Bip32Error(e) => e.fmt(f),
            Error::Base58Error(e) => e.fmt(f),
            Error::AddressError(e) => e.fmt(f),
        }
    }
}

impl std::error::Error for Error {}

impl From<hex::FromHexError> for Error {
    fn from(e: hex::FromHexError) -> Self {
        Error::InvalidOutpoint(e.to_string())
    }
}

impl From<secp256k1::Error> for Error {
    fn from(e: secp256k1::Error) -> Self {
        match e {
            secp256k1::Error::InvalidPublicKey => Error::InvalidPublicKey,
            secp256k1::Error::InvalidSecretKey => Error::InvalidPrivateKey,
            e => Error::Secp256k1Error(e),
        }
    }
}

impl From<bitcoin::bip32::Error> for Error {
    fn from(e: bitcoin::bip32::Error) -> Self {
        Error::Bip32Error(e)
    }
}

impl From<bitcoin::base58::Error> for Error {
    fn from(e: bitcoin::base58::Error) -> Self {
        match e {
            bitcoin::base58::Error::BadChecksum(..) => Error::ChecksumMismatch,
            bitcoin::base58::Error::TooShort(len) => Error::InvalidLength(len),
            e => Error::Base58Error(e),
        }
    }
}

impl From<bitcoin::address::Error> for Error {
    fn from(e: bitcoin::address::Error) -> Self {
        Error::AddressError(e)
    }
}
