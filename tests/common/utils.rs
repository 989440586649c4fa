use std::{fs::File, io::Read};

use bip47::{Network, Outpoint, PaymentCodePrivate};
use serde_json::from_str;

use super::structs::TestData;

pub fn read_file() -> TestData {
    let mut file = File::open("tests/resources/bip47_test_vectors.json").unwrap();
    let mut contents = String::new();
    file.read_to_string(&mut contents).unwrap();
    from_str(&contents).unwrap()
}

pub fn payment_code_from_seed(seed: &str) -> PaymentCodePrivate {
    let seed = hex::decode(seed).unwrap();
    PaymentCodePrivate::from_seed(&seed, 0, Network::Mainnet, false).unwrap()
}

pub fn decode_outpoint(outpoint: &str) -> Outpoint {
    Outpoint::try_from(&hex::decode(outpoint).unwrap()[..]).unwrap()
}
