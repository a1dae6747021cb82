//! # Ed25519 → Curve25519 conversion
//!
//! The handshake's asymmetric box is keyed by Curve25519 (Montgomery-form)
//! points, but participants only ever hold an Ed25519 (twisted-Edwards)
//! signing identity. This module implements the standard birational map
//! between the two forms, so a participant's long-term signing key can
//! double as its box key without maintaining a second keypair.
//!
//! Both directions are deterministic: the same signing key always produces
//! the same Curve25519 key, in either direction, on any compliant
//! implementation.

use curve25519_dalek::edwards::CompressedEdwardsY;
use sha2::{Digest, Sha512};
use x25519_dalek::{PublicKey as X25519PublicKey, StaticSecret};
use zeroize::Zeroize;

use crate::error::{Error, Result};

/// Convert an Ed25519 public key to its Curve25519 (Montgomery) equivalent.
///
/// Decompresses the compressed Edwards point and maps it via
/// `EdwardsPoint::to_montgomery`.
pub fn public_to_x25519(signing_public: &[u8; 32]) -> Result<X25519PublicKey> {
    let compressed = CompressedEdwardsY(*signing_public);
    let point = compressed
        .decompress()
        .ok_or_else(|| Error::Malformed("signing public key is not a valid curve point".into()))?;
    Ok(X25519PublicKey::from(point.to_montgomery().to_bytes()))
}

/// Convert an Ed25519 seed to the Curve25519 secret it implies.
///
/// Ed25519 derives its signing scalar as the clamped low 32 bytes of
/// `SHA-512(seed)`; `x25519_dalek::StaticSecret` performs the same
/// clamping internally, so feeding it that same hash prefix yields the
/// Curve25519 secret that corresponds to this signing identity.
pub fn secret_to_x25519(seed: &[u8; 32]) -> StaticSecret {
    let mut hash = Sha512::digest(seed);
    let mut scalar_bytes = [0u8; 32];
    scalar_bytes.copy_from_slice(&hash[..32]);

    let secret = StaticSecret::from(scalar_bytes);

    scalar_bytes.zeroize();
    hash.zeroize();

    secret
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::crypto::keys::SigningKeyPair;

    #[test]
    fn public_conversion_is_deterministic() {
        let kp = SigningKeyPair::from_seed(&[3u8; 32]);
        let a = public_to_x25519(&kp.public_bytes()).unwrap();
        let b = public_to_x25519(&kp.public_bytes()).unwrap();
        assert_eq!(a.as_bytes(), b.as_bytes());
    }

    #[test]
    fn secret_and_public_conversions_agree() {
        let seed = [9u8; 32];
        let kp = SigningKeyPair::from_seed(&seed);

        let x25519_secret = secret_to_x25519(&seed);
        let derived_public = X25519PublicKey::from(&x25519_secret);

        let converted_public = public_to_x25519(&kp.public_bytes()).unwrap();

        assert_eq!(derived_public.as_bytes(), converted_public.as_bytes());
    }

    #[test]
    fn different_keys_convert_to_different_points() {
        let a = SigningKeyPair::from_seed(&[11u8; 32]);
        let b = SigningKeyPair::from_seed(&[12u8; 32]);
        let pa = public_to_x25519(&a.public_bytes()).unwrap();
        let pb = public_to_x25519(&b.public_bytes()).unwrap();
        assert_ne!(pa.as_bytes(), pb.as_bytes());
    }
}
