//! Payment signature verification.
//!
//! The provider signs `"{order_id}|{payment_id}"` with HMAC-SHA256 keyed by
//! the key secret and ships the hex digest in the confirmation. The secret
//! never leaves the server side; this verifier is the only place it is used.

use hmac::{Hmac, Mac};
use secrecy::{ExposeSecret, SecretString};
use sha2::Sha256;
use subtle::ConstantTimeEq;

use super::confirmation::PaymentConfirmation;

type HmacSha256 = Hmac<Sha256>;

/// Verifier for provider payment signatures.
pub struct SignatureVerifier {
    key_secret: SecretString,
}

impl SignatureVerifier {
    /// Creates a verifier with the provider key secret.
    pub fn new(key_secret: SecretString) -> Self {
        Self { key_secret }
    }

    /// Checks the confirmation's signature against its order and payment
    /// ids.
    ///
    /// Returns false for malformed hex as well as digest mismatch; there is
    /// no error channel here, an unverifiable signature is simply invalid.
    pub fn is_valid(&self, confirmation: &PaymentConfirmation) -> bool {
        let provided = match hex::decode(&confirmation.signature) {
            Ok(bytes) => bytes,
            Err(_) => return false,
        };

        let mut mac = HmacSha256::new_from_slice(self.key_secret.expose_secret().as_bytes())
            .expect("HMAC accepts any key size");
        mac.update(confirmation.signed_payload().as_bytes());
        let expected = mac.finalize().into_bytes();

        constant_time_compare(expected.as_slice(), &provided)
    }
}

/// Constant-time comparison, length leak aside.
fn constant_time_compare(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    a.ct_eq(b).into()
}

/// Computes the hex signature the provider would produce, for test
/// fixtures.
#[cfg(test)]
pub fn compute_test_signature(secret: &str, order_id: &str, payment_id: &str) -> String {
    let mut mac =
        HmacSha256::new_from_slice(secret.as_bytes()).expect("HMAC accepts any key size");
    mac.update(format!("{}|{}", order_id, payment_id).as_bytes());
    hex::encode(mac.finalize().into_bytes())
}
