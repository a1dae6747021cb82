//! # Secret box (symmetric authenticated encryption)
//!
//! NaCl-compatible `secretbox`: XSalsa20-Poly1305 keyed directly by the
//! 32-byte topic key, with a fresh random 24-byte nonce per call. This is
//! what every `Message` frame's ciphertext is built from.
//!
//! ```text
//! secret_box(topic_key, plaintext) = nonce(24) ∥ ciphertext(len(plaintext)) ∥ tag(16)
//! ```
//!
//! The nonce is prepended and the tag appended, matching the wire
//! convention peers expect (see `frame`).

use rand::RngCore;
use xsalsa20poly1305::{aead::Aead, KeyInit, Nonce, XSalsa20Poly1305};

use crate::error::{Error, Result};

const NONCE_SIZE: usize = 24;
const TAG_SIZE: usize = 16;

/// Minimum size of a `secret_box` output: an empty plaintext still
/// produces nonce ∥ tag.
pub const MIN_SEALED_SIZE: usize = NONCE_SIZE + TAG_SIZE;

/// Encrypt `plaintext` under `topic_key`, returning `nonce ∥ ciphertext ∥ tag`.
pub fn secret_box(topic_key: &[u8; 32], plaintext: &[u8]) -> Result<Vec<u8>> {
    let cipher = XSalsa20Poly1305::new(topic_key.into());

    let mut nonce_bytes = [0u8; NONCE_SIZE];
    rand::rngs::OsRng.fill_bytes(&mut nonce_bytes);
    let nonce = Nonce::from(nonce_bytes);

    let ciphertext = cipher
        .encrypt(&nonce, plaintext)
        .map_err(|_| Error::BadCiphertext)?;

    let mut out = Vec::with_capacity(NONCE_SIZE + ciphertext.len());
    out.extend_from_slice(&nonce_bytes);
    out.extend_from_slice(&ciphertext);
    Ok(out)
}

/// Decrypt and authenticate a `secret_box` output.
pub fn secret_box_open(topic_key: &[u8; 32], sealed: &[u8]) -> Result<Vec<u8>> {
    if sealed.len() < MIN_SEALED_SIZE {
        return Err(Error::BadCiphertext);
    }

    let (nonce_bytes, ciphertext) = sealed.split_at(NONCE_SIZE);
    let nonce = Nonce::from_slice(nonce_bytes);

    let cipher = XSalsa20Poly1305::new(topic_key.into());
    cipher
        .decrypt(nonce, ciphertext)
        .map_err(|_| Error::BadCiphertext)
}
