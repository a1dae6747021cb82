//! # Cryptography
//!
//! Thin adapters over audited primitives, providing exactly the four
//! operations the topic state machine needs.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    CRYPTOGRAPHIC ARCHITECTURE                           │
//! ├─────────────────────────────────────────────────────────────────────────┤
//! │                                                                         │
//! │  Seed (32 bytes) ──► SigningKeyPair (Ed25519)                          │
//! │                         │                                              │
//! │                         ├──► sign / verify            (signing.rs)     │
//! │                         │                                              │
//! │                         └──► convert::secret_to_x25519 /               │
//! │                              convert::public_to_x25519  (convert.rs)   │
//! │                                         │                               │
//! │                                         ▼                               │
//! │                              box_seal / box_open       (sealed_box.rs) │
//! │                                                                         │
//! │  Topic key (32 bytes) ──► secret_box / secret_box_open (secret_box.rs) │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! | Algorithm         | Purpose                      | Why chosen                        |
//! |--------------------|-------------------------------|------------------------------------|
//! | Ed25519            | Participant identity, signing | Fast, small keys, widely audited   |
//! | Curve25519/X25519  | Handshake key agreement       | Same curve as Ed25519, no 2nd key  |
//! | XSalsa20-Poly1305  | Message & handshake AEAD      | NaCl `secretbox`/`box` convention  |
//! | BLAKE2b-128         | Participant ID derivation     | Fast, short, collision-resistant   |

pub mod convert;
pub mod keys;
pub mod sealed_box;
pub mod secret_box;
pub mod signing;

pub use keys::{verifying_key_from_bytes, EphemeralKeyPair, SigningKeyPair};
pub use sealed_box::{box_open, box_seal};
pub use secret_box::{secret_box, secret_box_open};
pub use signing::{sign, verify, SIGNATURE_SIZE};
