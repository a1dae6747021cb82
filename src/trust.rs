//! # Trust set
//!
//! A flat mapping from participant ID to the signing public key it
//! verifies against. Ordering, expiry, and revocation are out of scope;
//! a caller that needs to persist trust across process restarts can do
//! so with `iter()`.

use std::collections::HashMap;

use crate::identity::ParticipantId;

/// The local set of participants this `Topic` will accept signed
/// messages from.
#[derive(Default)]
pub struct TrustSet {
    keys: HashMap<ParticipantId, [u8; 32]>,
}

impl TrustSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add (or re-add) a trusted signing public key. Idempotent: adding
    /// an already-present key has the same effect as adding it once.
    pub fn add(&mut self, signing_public: [u8; 32]) {
        let id = ParticipantId::derive(&signing_public);
        self.keys.insert(id, signing_public);
    }

    /// Remove a participant by ID. No-op if absent.
    pub fn remove(&mut self, id: &ParticipantId) {
        self.keys.remove(id);
    }

    /// Look up the signing public key for a participant ID.
    pub fn lookup(&self, id: &ParticipantId) -> Option<&[u8; 32]> {
        self.keys.get(id)
    }

    /// Number of trusted participants.
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Iterate over the trusted (ID, signing public key) pairs, e.g. to
    /// persist the set across process restarts.
    pub fn iter(&self) -> impl Iterator<Item = (&ParticipantId, &[u8; 32])> {
        self.keys.iter()
    }
}
