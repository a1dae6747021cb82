//! # Participant identity
//!
//! A participant's on-wire identity is a 16-byte `ParticipantId`: a
//! BLAKE2b-128 digest of its 32-byte Ed25519 public key. The ID is never
//! stored independently of the key it was derived from — see `ParticipantId::derive`.
//!
//! ```text
//! signing_pub (32 bytes) ──► BLAKE2b-128 ──► ParticipantId (16 bytes)
//! ```

use std::fmt;

/// Length in bytes of a participant ID.
pub const PARTICIPANT_ID_SIZE: usize = 16;

/// A stable, short identifier for a participant, derived from its
/// long-term signing public key.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct ParticipantId([u8; PARTICIPANT_ID_SIZE]);

impl ParticipantId {
    /// Derive the participant ID for a 32-byte Ed25519 public key.
    pub fn derive(signing_public: &[u8; 32]) -> Self {
        let digest = blake2b_simd::Params::new()
            .hash_length(PARTICIPANT_ID_SIZE)
            .hash(signing_public);

        let mut bytes = [0u8; PARTICIPANT_ID_SIZE];
        bytes.copy_from_slice(digest.as_bytes());
        Self(bytes)
    }

    /// Build a `ParticipantId` from raw bytes already known to be an ID
    /// (e.g. parsed off the wire). Does not verify the ID derives from
    /// any particular key.
    pub fn from_bytes(bytes: [u8; PARTICIPANT_ID_SIZE]) -> Self {
        Self(bytes)
    }

    pub fn as_bytes(&self) -> &[u8; PARTICIPANT_ID_SIZE] {
        &self.0
    }
}

impl fmt::Debug for ParticipantId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ParticipantId({})", hex::encode(self.0))
    }
}
