#![cfg(all(feature = "sending", feature = "receiving"))]
#![allow(non_snake_case)]
mod common;

use std::str::FromStr;

use bip39::Mnemonic;
use bip47::{
    bitcoin_hashes::{hash160, Hash},
    utils::receiving::{extract_notification_payload, get_designated_pubkey},
    AddressType, Network, Outpoint, PaymentCodePrivate, PaymentCodePublic,
};
use secp256k1::{rand, Secp256k1};

use crate::common::utils::payment_code_from_seed;

const ALICE_MNEMONIC: &str =
    "response seminar brave tip suit recall often sound stick owner lottery motion";
const BOB_MNEMONIC: &str =
    "reward upper indicate eight swift arch injury crystal super wrestle already dentist";

fn from_mnemonic(words: &str, network: Network) -> PaymentCodePrivate {
    let seed = Mnemonic::parse(words).unwrap().to_seed("");
    PaymentCodePrivate::from_seed(&seed, 0, network, false).unwrap()
}

fn random_wallet(network: Network, segwit: bool) -> PaymentCodePrivate {
    let mnemonic = Mnemonic::generate(12).unwrap();
    PaymentCodePrivate::from_seed(&mnemonic.to_seed(""), 0, network, segwit).unwrap()
}

#[test]
fn mnemonic_wallets_agree_on_payment_keys() {
    let secp = Secp256k1::new();

    for network in [Network::Mainnet, Network::Testnet, Network::Regtest] {
        let alice = from_mnemonic(ALICE_MNEMONIC, network);
        let bob = from_mnemonic(BOB_MNEMONIC, network);

        let alice_public = PaymentCodePublic::from_base58(&alice.to_base58(), network).unwrap();
        let bob_public = PaymentCodePublic::from_base58(&bob.to_base58(), network).unwrap();

        for i in 0..10 {
            let P = alice.derive_payment_public_key_for(&bob_public, i).unwrap();
            let p = bob.derive_payment_private_key(&alice_public, i).unwrap();
            assert_eq!(p.public_key(&secp), P);

            for address_type in [AddressType::P2pkh, AddressType::P2sh, AddressType::P2wpkh] {
                assert_eq!(
                    alice
                        .get_payment_address_for(&bob_public, i, address_type)
                        .unwrap(),
                    bob.get_receiving_address(&alice_public, i, address_type)
                        .unwrap()
                );
            }
        }
    }
}

#[test]
fn both_directions_are_independent() {
    let alice = from_mnemonic(ALICE_MNEMONIC, Network::Mainnet);
    let bob = from_mnemonic(BOB_MNEMONIC, Network::Mainnet);
    let alice_public = alice.to_payment_code_public().unwrap();
    let bob_public = bob.to_payment_code_public().unwrap();

    let alice_to_bob = alice.derive_payment_public_key_for(&bob_public, 0).unwrap();
    let bob_to_alice = bob.derive_payment_public_key_for(&alice_public, 0).unwrap();

    assert_ne!(alice_to_bob, bob_to_alice);
}

#[test]
fn notification_roundtrip_with_random_keys() {
    let secp = Secp256k1::new();

    for _ in 0..8 {
        let sender = random_wallet(Network::Mainnet, rand::random());
        let recipient = random_wallet(Network::Mainnet, false);
        let recipient_public = recipient.to_payment_code_public().unwrap();

        let (designated_key, designated_pubkey) = secp.generate_keypair(&mut rand::thread_rng());
        let outpoint = Outpoint::new(rand::random(), rand::random());

        let script = sender
            .get_notification_script(&recipient_public, &outpoint, &designated_key)
            .unwrap();
        assert_eq!(
            extract_notification_payload(&script).unwrap(),
            sender
                .get_blinded_payment_code(&recipient_public, &outpoint, &designated_key)
                .unwrap()
        );

        let decoded = recipient
            .get_payment_code_from_notification_transaction_data(
                &script,
                &outpoint,
                &designated_pubkey,
            )
            .unwrap();

        assert_eq!(decoded.as_bytes(), sender.as_bytes());
        assert_eq!(decoded.segwit(), sender.segwit());
    }
}

#[test]
fn notification_roundtrip_through_designated_input() {
    let secp = Secp256k1::new();
    let sender = payment_code_from_seed("64dca76abc9c6f0cf3d212d248c380c4622c8f93b2c425ec6a5567fd5db57e10d3e6f94a2f6af4ac2edb8998072aad92098db73558c323777abf5bd1082d970a");
    let recipient = payment_code_from_seed("87eaaac5a539ab028df44d9110defbef3797ddb805ca309f61a69ff96dbaa7ab5b24038cf029edec5235d933110f0aea8aeecf939ed14fc20730bba71e4b1110");

    let (designated_key, designated_pubkey) = secp.generate_keypair(&mut rand::thread_rng());
    let outpoint = Outpoint::from_str(
        "9c6000d597c5008f7bfc2618aed5e4a6ae57677aab95078aae708e1cab11f486:1",
    )
    .unwrap();

    // the notification spends a p2wpkh output of the designated key
    let mut prevout = vec![0x00, 0x14];
    prevout.extend_from_slice(
        &hash160::Hash::hash(&designated_pubkey.serialize()).to_byte_array(),
    );
    let witness = vec![vec![0x30; 71], designated_pubkey.serialize().to_vec()];

    let script = sender
        .get_notification_script(
            &recipient.to_payment_code_public().unwrap(),
            &outpoint,
            &designated_key,
        )
        .unwrap();

    let found = get_designated_pubkey(&[], &witness, &prevout)
        .unwrap()
        .unwrap();
    let decoded = recipient
        .get_payment_code_from_notification_transaction_data(&script, &outpoint, &found)
        .unwrap();

    assert_eq!(decoded.to_base58(), sender.to_base58());
}

#[test]
fn notification_for_someone_else_is_not_recovered() {
    let secp = Secp256k1::new();
    let sender = random_wallet(Network::Mainnet, false);
    let recipient = random_wallet(Network::Mainnet, false);
    let bystander = random_wallet(Network::Mainnet, false);

    let (designated_key, designated_pubkey) = secp.generate_keypair(&mut rand::thread_rng());
    let outpoint = Outpoint::new([1u8; 32], 0);

    let script = sender
        .get_notification_script(
            &recipient.to_payment_code_public().unwrap(),
            &outpoint,
            &designated_key,
        )
        .unwrap();

    if let Ok(decoded) = bystander.get_payment_code_from_notification_transaction_data(
        &script,
        &outpoint,
        &designated_pubkey,
    ) {
        assert_ne!(decoded.as_bytes(), sender.as_bytes());
    }
}
