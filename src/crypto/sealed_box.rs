//! # Sealed box (asymmetric authenticated encryption)
//!
//! NaCl-compatible `crypto_box`: X25519 Diffie-Hellman between an ephemeral
//! keypair and a long-term Curve25519 public key (itself derived from an
//! Ed25519 signing key via `crypto::convert`), feeding XSalsa20-Poly1305.
//! This is what carries the topic key to a newcomer inside a `Reply` frame.
//!
//! ```text
//! box_seal(my_secret, their_public, plaintext) = nonce(24) ∥ ciphertext ∥ tag(16)
//! ```

use crypto_box::aead::generic_array::GenericArray;
use crypto_box::{aead::Aead, PublicKey as BoxPublicKey, SalsaBox, SecretKey as BoxSecretKey};
use rand::RngCore;
use x25519_dalek::StaticSecret;

use crate::error::{Error, Result};

const NONCE_SIZE: usize = 24;
const TAG_SIZE: usize = 16;

/// Minimum size of a `box_seal` output: an empty plaintext still
/// produces nonce ∥ tag.
pub const MIN_SEALED_SIZE: usize = NONCE_SIZE + TAG_SIZE;

fn salsa_box(my_secret: &StaticSecret, their_public: &[u8; 32]) -> SalsaBox {
    let secret = BoxSecretKey::from(my_secret.to_bytes());
    let public = BoxPublicKey::from(*their_public);
    SalsaBox::new(&public, &secret)
}

/// Encrypt `plaintext` from `my_secret` to `their_public`, returning
/// `nonce ∥ ciphertext ∥ tag`.
pub fn box_seal(
    my_secret: &StaticSecret,
    their_public: &[u8; 32],
    plaintext: &[u8],
) -> Result<Vec<u8>> {
    let cipher = salsa_box(my_secret, their_public);

    let mut nonce_bytes = [0u8; NONCE_SIZE];
    rand::rngs::OsRng.fill_bytes(&mut nonce_bytes);

    let ciphertext = cipher
        .encrypt(GenericArray::from_slice(&nonce_bytes), plaintext)
        .map_err(|_| Error::BadCiphertext)?;

    let mut out = Vec::with_capacity(NONCE_SIZE + ciphertext.len());
    out.extend_from_slice(&nonce_bytes);
    out.extend_from_slice(&ciphertext);
    Ok(out)
}

/// Decrypt and authenticate a `box_seal` output.
pub fn box_open(my_secret: &StaticSecret, their_public: &[u8; 32], sealed: &[u8]) -> Result<Vec<u8>> {
    if sealed.len() < MIN_SEALED_SIZE {
        return Err(Error::BadCiphertext);
    }

    let (nonce_bytes, ciphertext) = sealed.split_at(NONCE_SIZE);
    let cipher = salsa_box(my_secret, their_public);

    cipher
        .decrypt(GenericArray::from_slice(nonce_bytes), ciphertext)
        .map_err(|_| Error::BadCiphertext)
}
