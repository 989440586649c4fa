use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct TestData {
    pub wallets: Vec<WalletData>,
    pub payments: Vec<PaymentData>,
    pub notifications: Vec<NotificationData>,
    pub invalid_payment_codes: Vec<InvalidPaymentCode>,
}

#[derive(Debug, Deserialize)]
pub struct WalletData {
    pub comment: String,
    pub seed: String,
    pub account: u32,
    pub network: String,
    pub segwit: bool,
    pub expected: WalletDataExpected,
}

#[derive(Debug, Deserialize)]
pub struct WalletDataExpected {
    pub payment_code: String,
    pub payment_code_hex: Option<String>,
    pub notification_address: Option<String>,
    pub notification_privkey: Option<String>,
    pub notification_pubkey: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct PaymentData {
    pub comment: String,
    pub sender_seed: String,
    pub sender_payment_code: String,
    pub recipient_seed: String,
    pub recipient_payment_code: String,
    pub expected: PaymentDataExpected,
}

#[derive(Debug, Deserialize)]
pub struct PaymentDataExpected {
    pub first_payment_pubkey: String,
    pub p2pkh: Vec<String>,
    pub p2sh: Vec<String>,
    pub p2wpkh: Vec<String>,
}

#[derive(Debug, Deserialize)]
pub struct NotificationData {
    pub comment: String,
    pub sender_seed: String,
    pub recipient_seed: String,
    pub outpoint: String,
    pub designated_privkey: String,
    pub expected: NotificationDataExpected,
}

#[derive(Debug, Deserialize)]
pub struct NotificationDataExpected {
    pub designated_pubkey: String,
    pub script_pub_key: String,
    pub sender_payment_code: String,
}

#[derive(Debug, Deserialize)]
pub struct InvalidPaymentCode {
    pub comment: String,
    pub payment_code: Option<String>,
    pub payment_code_hex: Option<String>,
}
