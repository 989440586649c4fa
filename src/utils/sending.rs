//! Sending utility functions.
use crate::payment_code::PAYMENT_CODE_LEN;
use crate::utils::{NOTIFICATION_SCRIPT_LEN, OP_PUSHDATA1, OP_RETURN};

/// Wrap a blinded payment code in the OP_RETURN script of a notification transaction.
///
/// The result is `OP_RETURN OP_PUSHDATA1 0x50 <blinded payload>`.
pub fn build_notification_script(
    blinded_payment_code: &[u8; PAYMENT_CODE_LEN],
) -> [u8; NOTIFICATION_SCRIPT_LEN] {
    let mut script = [0u8; NOTIFICATION_SCRIPT_LEN];
    script[0] = OP_RETURN;
    script[1] = OP_PUSHDATA1;
    script[2] = PAYMENT_CODE_LEN as u8;
    script[3..].copy_from_slice(blinded_payment_code);
    script
}
