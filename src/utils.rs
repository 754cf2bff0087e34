//! GitHub webhook signature verification

use hex::decode as hex_decode;
use hmac::{Hmac, Mac};
use sha2::Sha256;
type HmacSha256 = Hmac<Sha256>;

/// Helper function for verifying GitHub webhook signature.
/// Expected header format: "sha256=<hex digest of HMAC-SHA256(body)>".
pub fn verify_github_signature(secret: &str, payload: &[u8], signature_header: &str) -> bool {
    let Some(hex_signature) = signature_header.strip_prefix("sha256=") else {
        return false;
    };

    let mut mac = match HmacSha256::new_from_slice(secret.as_bytes()) {
        Ok(mac) => mac,
        Err(_) => return false,
    };
    mac.update(payload);
    let expected = mac.finalize().into_bytes();

    // GitHub provides the signature as hex
    match hex_decode(hex_signature) {
        Ok(received) => expected.as_slice() == received.as_slice(),
        Err(_) => false,
    }
}
