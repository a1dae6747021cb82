//! # Topic state machine
//!
//! `Topic` is the one stateful type in this crate: it owns a participant's
//! signing identity, the shared topic key (once known), the local trust
//! set, and at most one pending ephemeral keypair from an in-flight
//! introduction.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                              Topic                                      │
//! ├─────────────────────────────────────────────────────────────────────────┤
//! │  signing: SigningKeyPair        (long-term Ed25519 identity)           │
//! │  topic_key: Option<Zeroizing<[u8;32]>> (set at construction/discovery) │
//! │  trust: TrustSet                (sender_id -> signing_pub)             │
//! │  pending_intro: Option<EphemeralKeyPair>  (at most one in flight)      │
//! └─────────────────────────────────────────────────────────────────────────┘
//!
//!          encode ──► secret_box ──► sign ──► "m" frame
//!          decode ◄── verify ◄── trust lookup ◄── "m" frame
//!
//!          construct_intro ──► "i" frame (ephemeral_pub signed by identity)
//!          construct_reply ──► verify intro sig ──► box_seal topic_key ──► "r" frame
//!          parse_reply     ──► box_open w/ pending ephemeral ──► topic_key
//! ```
//!
//! All operations are synchronous and side-effect-free apart from the
//! `Topic`'s own fields; there is no I/O, no background task, and no
//! internal timer. Concurrent use of a single `Topic` requires external
//! mutual exclusion.

use rand::RngCore;
use tracing::{debug, trace};
use zeroize::Zeroizing;

use crate::crypto::{self, convert, EphemeralKeyPair, SigningKeyPair};
use crate::error::{Error, Result};
use crate::frame::{self, Frame, IntroductionFrame, MessageFrame, ReplyFrame};
use crate::identity::ParticipantId;
use crate::trust::TrustSet;

/// Generate a fresh 32-byte signing key seed from the OS CSPRNG.
pub fn generate_signing_key_seed() -> [u8; 32] {
    let mut seed = [0u8; 32];
    rand::rngs::OsRng.fill_bytes(&mut seed);
    seed
}

/// Generate a fresh 32-byte topic key from the OS CSPRNG.
pub fn generate_topic_key() -> [u8; 32] {
    let mut key = [0u8; 32];
    rand::rngs::OsRng.fill_bytes(&mut key);
    key
}

/// A participant in a topic: signing identity, trust set, and (once
/// known) the shared topic key.
pub struct Topic {
    signing: SigningKeyPair,
    topic_key: Option<Zeroizing<[u8; 32]>>,
    trust: TrustSet,
    pending_intro: Option<EphemeralKeyPair>,
}

impl Topic {
    /// Construct a participant. A missing seed is freshly generated; a
    /// missing topic key leaves the participant in the discovery-eligible
    /// state (use `construct_intro` / `parse_reply` to obtain one).
    pub fn new(seed: Option<[u8; 32]>, topic_key: Option<[u8; 32]>) -> Self {
        let signing = match seed {
            Some(seed) => SigningKeyPair::from_seed(&seed),
            None => SigningKeyPair::generate(),
        };

        Self {
            signing,
            topic_key: topic_key.map(Zeroizing::new),
            trust: TrustSet::new(),
            pending_intro: None,
        }
    }

    /// This participant's 32-byte Ed25519 public (verification) key.
    pub fn public_key(&self) -> [u8; 32] {
        self.signing.public_bytes()
    }

    /// This participant's 16-byte participant ID.
    pub fn id(&self) -> ParticipantId {
        ParticipantId::derive(&self.public_key())
    }

    /// Trust a peer's signing public key for future `decode` calls.
    pub fn add_participant(&mut self, signing_public: [u8; 32]) {
        self.trust.add(signing_public);
    }

    /// Stop trusting a peer. No-op if the ID was never trusted.
    pub fn remove_participant(&mut self, id: &ParticipantId) {
        self.trust.remove(id);
    }

    /// Number of signing keys currently trusted.
    pub fn trusted_count(&self) -> usize {
        self.trust.len()
    }

    /// Iterate over the trusted (ID, signing public key) pairs, e.g. to
    /// persist the trust set across process restarts.
    pub fn trusted_iter(&self) -> impl Iterator<Item = (&ParticipantId, &[u8; 32])> {
        self.trust.iter()
    }

    /// Encrypt and sign `plaintext` into a Message frame.
    ///
    /// Fails with `NoKey` if the topic key has not been set yet.
    pub fn encode(&self, plaintext: &[u8]) -> Result<Vec<u8>> {
        let topic_key = self.topic_key.as_deref().ok_or(Error::NoKey)?;

        let ciphertext = crypto::secret_box(topic_key, plaintext)?;
        let frame = MessageFrame {
            signature: [0u8; crypto::SIGNATURE_SIZE],
            sender_id: *self.id().as_bytes(),
            ciphertext,
        };

        let signature = crypto::sign(&self.signing, &frame.signed_body());
        let frame = MessageFrame { signature, ..frame };

        debug!(plaintext_len = plaintext.len(), "encoded message frame");
        Ok(frame.encode())
    }

    /// Decode an inbound frame.
    ///
    /// `"i"` and `"r"` frames never produce plaintext: they fail with the
    /// advisory `IntroductionReceived` / `ReplyReceived` errors, signalling
    /// the caller to invoke `construct_reply` / `parse_reply` instead.
    ///
    /// For `"m"` frames: with `naive` set, trust and signature checks are
    /// skipped entirely (decryption only). Otherwise the sender must be
    /// trusted — on a miss, `ignore_untrusted` turns the failure into
    /// `Ok(None)` instead of `Err(UntrustedKey)`. A bad signature is always
    /// fatal, even under `ignore_untrusted`, since it implies a trusted ID
    /// was impersonated rather than merely unknown.
    pub fn decode(
        &self,
        frame_bytes: &[u8],
        naive: bool,
        ignore_untrusted: bool,
    ) -> Result<Option<Vec<u8>>> {
        let frame = match frame::decode(frame_bytes)? {
            Frame::Introduction(_) => return Err(Error::IntroductionReceived),
            Frame::Reply(_) => return Err(Error::ReplyReceived),
            Frame::Message(message) => message,
        };

        if !naive {
            let sender_id = ParticipantId::from_bytes(frame.sender_id);
            let signing_public = match self.trust.lookup(&sender_id) {
                Some(key) => *key,
                None => {
                    if ignore_untrusted {
                        trace!("dropping message from untrusted sender");
                        return Ok(None);
                    }
                    return Err(Error::UntrustedKey);
                }
            };

            crypto::verify(&signing_public, &frame.signed_body(), &frame.signature)?;
        }

        let topic_key = self.topic_key.as_deref().ok_or(Error::NoKey)?;
        let plaintext = crypto::secret_box_open(topic_key, &frame.ciphertext)?;

        debug!(plaintext_len = plaintext.len(), naive, "decoded message frame");
        Ok(Some(plaintext))
    }

    /// Generate a fresh ephemeral keypair and emit an Introduction frame,
    /// replacing any previously pending ephemeral.
    pub fn construct_intro(&mut self) -> Vec<u8> {
        let ephemeral = EphemeralKeyPair::generate();
        let ephemeral_pub = ephemeral.public_bytes();
        let signature = crypto::sign(&self.signing, &ephemeral_pub);

        self.pending_intro = Some(ephemeral);

        let frame = IntroductionFrame {
            signing_pub: self.public_key(),
            signature,
            ephemeral_pub,
        };

        debug!("constructed introduction frame");
        frame.encode()
    }

    /// Reply to a newcomer's Introduction frame with the topic key,
    /// encrypted to their ephemeral public key.
    ///
    /// Fails with `NoKey` if this participant has no topic key to share.
    /// The intro's signature over its own ephemeral key is verified
    /// unconditionally, since it is the only barrier against a spoofed
    /// ephemeral key.
    pub fn construct_reply(&self, intro_frame_bytes: &[u8]) -> Result<Vec<u8>> {
        let topic_key = self.topic_key.as_deref().ok_or(Error::NoKey)?;

        let intro = match frame::decode(intro_frame_bytes)? {
            Frame::Introduction(intro) => intro,
            _ => return Err(Error::Malformed("expected an introduction frame".into())),
        };

        crypto::verify(&intro.signing_pub, &intro.ephemeral_pub, &intro.signature)?;

        let recipient_id = ParticipantId::derive(&intro.signing_pub);

        let replier_curve_secret = convert::secret_to_x25519(&self.signing.seed());
        let replier_curve_public = convert::public_to_x25519(&self.public_key())?;

        let sealed = crypto::box_seal(&replier_curve_secret, &intro.ephemeral_pub, topic_key)?;
        let mut encrypted_topic_key = [0u8; frame::ENCRYPTED_TOPIC_KEY_SIZE];
        encrypted_topic_key.copy_from_slice(&sealed);

        let reply = ReplyFrame {
            recipient_id: *recipient_id.as_bytes(),
            encrypted_topic_key,
            encryption_key: replier_curve_public.to_bytes(),
            signing_key: self.public_key(),
        };

        debug!(?recipient_id, "constructed reply frame");
        Ok(reply.encode())
    }

    /// Parse a Reply frame addressed to a pending introduction.
    ///
    /// Returns `Ok(false)` — not an error — if the topic key is already
    /// set (frozen) or the reply targets a different participant. Returns
    /// `Ok(true)` and stores the topic key on success.
    pub fn parse_reply(&mut self, reply_frame_bytes: &[u8]) -> Result<bool> {
        let reply = match frame::decode(reply_frame_bytes)? {
            Frame::Reply(reply) => reply,
            _ => return Err(Error::Malformed("expected a reply frame".into())),
        };

        if self.topic_key.is_some() {
            trace!("ignoring reply: topic key already set");
            return Ok(false);
        }

        let ephemeral = self.pending_intro.as_ref().ok_or(Error::NoPendingIntro)?;

        if reply.recipient_id != *self.id().as_bytes() {
            trace!("ignoring reply: addressed to a different recipient");
            return Ok(false);
        }

        let replier_curve_public = convert::public_to_x25519(&reply.signing_key)?;
        if replier_curve_public.to_bytes() != reply.encryption_key {
            return Err(Error::BadSignature);
        }

        let topic_key_bytes = crypto::box_open(
            ephemeral.secret(),
            &reply.encryption_key,
            &reply.encrypted_topic_key,
        )?;

        let mut topic_key = [0u8; 32];
        topic_key.copy_from_slice(&topic_key_bytes);

        self.topic_key = Some(Zeroizing::new(topic_key));
        self.pending_intro = None;

        debug!("topic key established via discovery");
        Ok(true)
    }
}

impl std::fmt::Debug for Topic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Topic")
            .field("id", &self.id())
            .field("topic_key_set", &self.topic_key.is_some())
            .field("trusted_count", &self.trust.len())
            .field("pending_intro", &self.pending_intro.is_some())
            .finish()
    }
}
