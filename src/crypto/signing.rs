//! # Digital Signatures
//!
//! Ed25519 sign/verify, the two primitives every outbound frame and the
//! intro's ephemeral-key binding rest on.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         SIGNING FLOW                                    │
//! ├─────────────────────────────────────────────────────────────────────────┤
//! │                                                                         │
//! │   seed ──► SigningKeyPair ──► sign(keypair, body) ──► 64-byte sig       │
//! │                                                                         │
//! │   signing_pub, body, sig ──► verify(...) ──► Ok(()) | Err(BadSignature) │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Signature coverage is the caller's responsibility: `sign`/`verify` only
//! ever see the exact bytes that are supposed to be covered (see
//! `frame` for what that means per frame type).

use ed25519_dalek::{Signature as Ed25519Signature, Signer, Verifier};

use super::keys::{verifying_key_from_bytes, SigningKeyPair};
use crate::error::Result;

/// Size of an Ed25519 signature in bytes.
pub const SIGNATURE_SIZE: usize = 64;

/// Sign `message` with the participant's long-term signing key.
///
/// Ed25519 signatures are deterministic: the same keypair and message
/// always produce the same 64 bytes.
pub fn sign(keypair: &SigningKeyPair, message: &[u8]) -> [u8; SIGNATURE_SIZE] {
    keypair.signing_key().sign(message).to_bytes()
}

/// Verify a detached Ed25519 signature.
///
/// Delegates to `ed25519_dalek`'s verification, which runs in constant
/// time with respect to the signature bytes.
pub fn verify(
    signing_public: &[u8; 32],
    message: &[u8],
    signature: &[u8; SIGNATURE_SIZE],
) -> Result<()> {
    let verifying_key = verifying_key_from_bytes(signing_public)?;
    let sig = Ed25519Signature::from_bytes(signature);
    verifying_key
        .verify(message, &sig)
        .map_err(|_| crate::error::Error::BadSignature)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sign_then_verify_succeeds() {
        let kp = SigningKeyPair::from_seed(&[1u8; 32]);
        let msg = b"hello topic";
        let sig = sign(&kp, msg);
        assert!(verify(&kp.public_bytes(), msg, &sig).is_ok());
    }

    #[test]
    fn verify_rejects_tampered_message() {
        let kp = SigningKeyPair::from_seed(&[1u8; 32]);
        let sig = sign(&kp, b"hello topic");
        assert!(verify(&kp.public_bytes(), b"hello TOPIC", &sig).is_err());
    }

    #[test]
    fn verify_rejects_tampered_signature() {
        let kp = SigningKeyPair::from_seed(&[1u8; 32]);
        let msg = b"hello topic";
        let mut sig = sign(&kp, msg);
        sig[0] ^= 0xFF;
        assert!(verify(&kp.public_bytes(), msg, &sig).is_err());
    }

    #[test]
    fn verify_rejects_wrong_key() {
        let a = SigningKeyPair::from_seed(&[1u8; 32]);
        let b = SigningKeyPair::from_seed(&[2u8; 32]);
        let msg = b"hello topic";
        let sig = sign(&a, msg);
        assert!(verify(&b.public_bytes(), msg, &sig).is_err());
    }

    #[test]
    fn signatures_are_deterministic() {
        let kp = SigningKeyPair::from_seed(&[1u8; 32]);
        let msg = b"hello topic";
        assert_eq!(sign(&kp, msg), sign(&kp, msg));
    }
}
