//! # Key Management
//!
//! This module owns the two keypair shapes the core ever holds in memory:
//! a participant's long-term Ed25519 signing identity, and the short-lived
//! Curve25519 keypair generated per introduction.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                          KEY TYPES                                      │
//! ├─────────────────────────────────────────────────────────────────────────┤
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │  SigningKeyPair (Ed25519)                                       │   │
//! │  │  ─────────────────────────                                       │   │
//! │  │                                                                  │   │
//! │  │  Purpose:                                                       │   │
//! │  │  • Proving participant identity (signing outbound frames)       │   │
//! │  │  • Deriving the Curve25519 key used by the handshake box        │   │
//! │  │                                                                  │   │
//! │  │  Format:                                                        │   │
//! │  │  • Seed / private key: 32 bytes (zeroized on drop)              │   │
//! │  │  • Public key: 32 bytes (shared freely, becomes the ParticipantId) │ │
//! │  │                                                                  │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │  EphemeralKeyPair (Curve25519)                                  │   │
//! │  │  ──────────────────────────────                                  │   │
//! │  │                                                                  │   │
//! │  │  Purpose:                                                       │   │
//! │  │  • Generated fresh by construct_intro                          │   │
//! │  │  • Lets a newcomer receive exactly one topic key via the box    │   │
//! │  │                                                                  │   │
//! │  │  Format:                                                        │   │
//! │  │  • Private key: 32 bytes (zeroized on drop)                    │   │
//! │  │  • Public key: 32 bytes (travels in the Introduction frame)    │   │
//! │  │                                                                  │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use ed25519_dalek::{SigningKey, VerifyingKey};
use rand::rngs::OsRng;
use x25519_dalek::{PublicKey as X25519PublicKey, StaticSecret};
use zeroize::ZeroizeOnDrop;

use crate::error::{Error, Result};

/// A participant's long-term Ed25519 signing keypair.
///
/// Deterministic: the same 32-byte seed always reproduces the same keys,
/// so the seed is the participant's entire recoverable identity.
#[derive(ZeroizeOnDrop)]
pub struct SigningKeyPair {
    #[zeroize(skip)] // ed25519_dalek::SigningKey zeroizes itself on drop
    secret: SigningKey,
}

impl SigningKeyPair {
    /// Derive a signing keypair from a 32-byte seed.
    pub fn from_seed(seed: &[u8; 32]) -> Self {
        Self {
            secret: SigningKey::from_bytes(seed),
        }
    }

    /// Generate a fresh signing keypair from the OS CSPRNG.
    pub fn generate() -> Self {
        Self {
            secret: SigningKey::generate(&mut OsRng),
        }
    }

    /// The 32-byte seed this keypair was derived from.
    pub fn seed(&self) -> [u8; 32] {
        self.secret.to_bytes()
    }

    /// The 32-byte Ed25519 public (verification) key.
    pub fn public_bytes(&self) -> [u8; 32] {
        self.secret.verifying_key().to_bytes()
    }

    pub(crate) fn signing_key(&self) -> &SigningKey {
        &self.secret
    }
}

/// Parse a raw 32-byte Ed25519 public key into a `VerifyingKey`.
pub fn verifying_key_from_bytes(bytes: &[u8; 32]) -> Result<VerifyingKey> {
    VerifyingKey::from_bytes(bytes).map_err(|_| Error::BadSignature)
}

/// An ephemeral Curve25519 keypair, generated fresh for each introduction.
///
/// A participant retains at most one of these at a time (see
/// `Topic::construct_intro`); the private half never leaves the participant.
#[derive(ZeroizeOnDrop)]
pub struct EphemeralKeyPair {
    #[zeroize(skip)] // x25519_dalek::StaticSecret zeroizes itself on drop
    secret: StaticSecret,
    public: X25519PublicKey,
}

impl EphemeralKeyPair {
    /// Generate a fresh ephemeral keypair from the OS CSPRNG.
    pub fn generate() -> Self {
        let secret = StaticSecret::random_from_rng(OsRng);
        let public = X25519PublicKey::from(&secret);
        Self { secret, public }
    }

    pub fn public_bytes(&self) -> [u8; 32] {
        self.public.to_bytes()
    }

    pub(crate) fn secret(&self) -> &StaticSecret {
        &self.secret
    }
}
