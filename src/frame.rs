//! # Frame codec
//!
//! Bit-exact encode/decode for the three wire frames. Frames are
//! length-delimited by the transport; this module never inserts or
//! expects a length prefix of its own, only the one-byte type tag at
//! the front of every frame.
//!
//! ```text
//! ┌──────┬──────────────────────────────────────────────────────┬────────────┐
//! │ Tag  │ Layout                                                │ Total size │
//! ├──────┼──────────────────────────────────────────────────────┼────────────┤
//! │ 'm'  │ sig(64) ∥ sender_id(16) ∥ ciphertext(≥40)             │ 81 + ct    │
//! │ 'i'  │ signing_pub(32) ∥ sig(64) ∥ ephemeral_pub(32)         │ 129        │
//! │ 'r'  │ recipient_id(16) ∥ enc_topic_key(72) ∥ enc_key(32) ∥  │ 153        │
//! │      │   signing_key(32)                                     │            │
//! └──────┴──────────────────────────────────────────────────────┴────────────┘
//! ```
//!
//! Signature coverage: a Message's signature covers `sender_id ∥
//! ciphertext`; an Introduction's signature covers `ephemeral_pub` only.
//! A Reply carries no top-level signature — its authenticity comes from
//! the sealed box's own AEAD tag.
//!
//! Decoding rejects short frames, unknown tags, and length-mismatched
//! frames with `Error::Malformed` before any cryptographic work runs.

use crate::crypto::secret_box::MIN_SEALED_SIZE as MIN_MESSAGE_CIPHERTEXT;
use crate::crypto::SIGNATURE_SIZE;
use crate::error::{Error, Result};
use crate::identity::PARTICIPANT_ID_SIZE;

const TAG_MESSAGE: u8 = b'm';
const TAG_INTRODUCTION: u8 = b'i';
const TAG_REPLY: u8 = b'r';

/// Size of the encrypted topic key blob inside a `Reply`: a `box_seal`
/// output for a 32-byte plaintext (nonce(24) ∥ ciphertext(32) ∥ tag(16)).
pub const ENCRYPTED_TOPIC_KEY_SIZE: usize = 72;

const MESSAGE_HEADER_SIZE: usize = 1 + SIGNATURE_SIZE + PARTICIPANT_ID_SIZE;
const INTRODUCTION_SIZE: usize = 1 + 32 + SIGNATURE_SIZE + 32;
const REPLY_SIZE: usize = 1 + PARTICIPANT_ID_SIZE + ENCRYPTED_TOPIC_KEY_SIZE + 32 + 32;

/// A parsed Message frame.
pub struct MessageFrame {
    pub signature: [u8; SIGNATURE_SIZE],
    pub sender_id: [u8; PARTICIPANT_ID_SIZE],
    pub ciphertext: Vec<u8>,
}

impl MessageFrame {
    /// The bytes the signature covers: `sender_id ∥ ciphertext`.
    pub fn signed_body(&self) -> Vec<u8> {
        let mut body = Vec::with_capacity(self.sender_id.len() + self.ciphertext.len());
        body.extend_from_slice(&self.sender_id);
        body.extend_from_slice(&self.ciphertext);
        body
    }

    pub fn encode(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(MESSAGE_HEADER_SIZE + self.ciphertext.len());
        out.push(TAG_MESSAGE);
        out.extend_from_slice(&self.signature);
        out.extend_from_slice(&self.sender_id);
        out.extend_from_slice(&self.ciphertext);
        out
    }
}

/// A parsed Introduction frame.
pub struct IntroductionFrame {
    pub signing_pub: [u8; 32],
    pub signature: [u8; SIGNATURE_SIZE],
    pub ephemeral_pub: [u8; 32],
}

impl IntroductionFrame {
    pub fn encode(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(INTRODUCTION_SIZE);
        out.push(TAG_INTRODUCTION);
        out.extend_from_slice(&self.signing_pub);
        out.extend_from_slice(&self.signature);
        out.extend_from_slice(&self.ephemeral_pub);
        out
    }
}

/// A parsed Reply frame.
pub struct ReplyFrame {
    pub recipient_id: [u8; PARTICIPANT_ID_SIZE],
    pub encrypted_topic_key: [u8; ENCRYPTED_TOPIC_KEY_SIZE],
    pub encryption_key: [u8; 32],
    pub signing_key: [u8; 32],
}

impl ReplyFrame {
    pub fn encode(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(REPLY_SIZE);
        out.push(TAG_REPLY);
        out.extend_from_slice(&self.recipient_id);
        out.extend_from_slice(&self.encrypted_topic_key);
        out.extend_from_slice(&self.encryption_key);
        out.extend_from_slice(&self.signing_key);
        out
    }
}

/// Any one of the three wire frames, after type-tag dispatch.
pub enum Frame {
    Message(MessageFrame),
    Introduction(IntroductionFrame),
    Reply(ReplyFrame),
}

/// Parse a frame, dispatching on its leading type tag.
///
/// Rejects frames that are too short, carry an unknown tag, or whose
/// length does not match their tag's expected layout.
pub fn decode(bytes: &[u8]) -> Result<Frame> {
    let tag = *bytes
        .first()
        .ok_or_else(|| Error::Malformed("empty frame".into()))?;

    match tag {
        TAG_MESSAGE => decode_message(bytes).map(Frame::Message),
        TAG_INTRODUCTION => decode_introduction(bytes).map(Frame::Introduction),
        TAG_REPLY => decode_reply(bytes).map(Frame::Reply),
        other => Err(Error::Malformed(format!("unknown frame tag {:#04x}", other))),
    }
}

fn decode_message(bytes: &[u8]) -> Result<MessageFrame> {
    if bytes.len() < MESSAGE_HEADER_SIZE + MIN_MESSAGE_CIPHERTEXT {
        return Err(Error::Malformed("message frame too short".into()));
    }

    let mut signature = [0u8; SIGNATURE_SIZE];
    signature.copy_from_slice(&bytes[1..1 + SIGNATURE_SIZE]);

    let mut sender_id = [0u8; PARTICIPANT_ID_SIZE];
    let id_start = 1 + SIGNATURE_SIZE;
    sender_id.copy_from_slice(&bytes[id_start..id_start + PARTICIPANT_ID_SIZE]);

    let ciphertext = bytes[MESSAGE_HEADER_SIZE..].to_vec();

    Ok(MessageFrame {
        signature,
        sender_id,
        ciphertext,
    })
}

fn decode_introduction(bytes: &[u8]) -> Result<IntroductionFrame> {
    if bytes.len() != INTRODUCTION_SIZE {
        return Err(Error::Malformed(format!(
            "introduction frame must be {} bytes, got {}",
            INTRODUCTION_SIZE,
            bytes.len()
        )));
    }

    let mut signing_pub = [0u8; 32];
    signing_pub.copy_from_slice(&bytes[1..33]);

    let mut signature = [0u8; SIGNATURE_SIZE];
    signature.copy_from_slice(&bytes[33..33 + SIGNATURE_SIZE]);

    let mut ephemeral_pub = [0u8; 32];
    let ephemeral_start = 33 + SIGNATURE_SIZE;
    ephemeral_pub.copy_from_slice(&bytes[ephemeral_start..ephemeral_start + 32]);

    Ok(IntroductionFrame {
        signing_pub,
        signature,
        ephemeral_pub,
    })
}

fn decode_reply(bytes: &[u8]) -> Result<ReplyFrame> {
    if bytes.len() != REPLY_SIZE {
        return Err(Error::Malformed(format!(
            "reply frame must be {} bytes, got {}",
            REPLY_SIZE,
            bytes.len()
        )));
    }

    let mut recipient_id = [0u8; PARTICIPANT_ID_SIZE];
    recipient_id.copy_from_slice(&bytes[1..1 + PARTICIPANT_ID_SIZE]);

    let mut encrypted_topic_key = [0u8; ENCRYPTED_TOPIC_KEY_SIZE];
    let etk_start = 1 + PARTICIPANT_ID_SIZE;
    encrypted_topic_key.copy_from_slice(&bytes[etk_start..etk_start + ENCRYPTED_TOPIC_KEY_SIZE]);

    let mut encryption_key = [0u8; 32];
    let ek_start = etk_start + ENCRYPTED_TOPIC_KEY_SIZE;
    encryption_key.copy_from_slice(&bytes[ek_start..ek_start + 32]);

    let mut signing_key = [0u8; 32];
    let sk_start = ek_start + 32;
    signing_key.copy_from_slice(&bytes[sk_start..sk_start + 32]);

    Ok(ReplyFrame {
        recipient_id,
        encrypted_topic_key,
        encryption_key,
        signing_key,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn message_round_trips() {
        let frame = MessageFrame {
            signature: [1u8; SIGNATURE_SIZE],
            sender_id: [2u8; PARTICIPANT_ID_SIZE],
            ciphertext: vec![3u8; MIN_MESSAGE_CIPHERTEXT],
        };
        let encoded = frame.encode();
        match decode(&encoded).unwrap() {
            Frame::Message(parsed) => {
                assert_eq!(parsed.signature, frame.signature);
                assert_eq!(parsed.sender_id, frame.sender_id);
                assert_eq!(parsed.ciphertext, frame.ciphertext);
            }
            _ => panic!("expected Message frame"),
        }
    }

    #[test]
    fn introduction_round_trips() {
        let frame = IntroductionFrame {
            signing_pub: [1u8; 32],
            signature: [2u8; SIGNATURE_SIZE],
            ephemeral_pub: [3u8; 32],
        };
        let encoded = frame.encode();
        assert_eq!(encoded.len(), INTRODUCTION_SIZE);
        match decode(&encoded).unwrap() {
            Frame::Introduction(parsed) => {
                assert_eq!(parsed.signing_pub, frame.signing_pub);
                assert_eq!(parsed.signature, frame.signature);
                assert_eq!(parsed.ephemeral_pub, frame.ephemeral_pub);
            }
            _ => panic!("expected Introduction frame"),
        }
    }

    #[test]
    fn reply_round_trips() {
        let frame = ReplyFrame {
            recipient_id: [1u8; PARTICIPANT_ID_SIZE],
            encrypted_topic_key: [2u8; ENCRYPTED_TOPIC_KEY_SIZE],
            encryption_key: [3u8; 32],
            signing_key: [4u8; 32],
        };
        let encoded = frame.encode();
        assert_eq!(encoded.len(), REPLY_SIZE);
        match decode(&encoded).unwrap() {
            Frame::Reply(parsed) => {
                assert_eq!(parsed.recipient_id, frame.recipient_id);
                assert_eq!(parsed.encrypted_topic_key, frame.encrypted_topic_key);
                assert_eq!(parsed.encryption_key, frame.encryption_key);
                assert_eq!(parsed.signing_key, frame.signing_key);
            }
            _ => panic!("expected Reply frame"),
        }
    }

    #[test]
    fn unknown_tag_is_malformed() {
        let bytes = vec![b'x'; 200];
        assert!(matches!(decode(&bytes), Err(Error::Malformed(_))));
    }

    #[test]
    fn short_message_is_malformed() {
        let bytes = vec![b'm'; 10];
        assert!(matches!(decode(&bytes), Err(Error::Malformed(_))));
    }

    #[test]
    fn wrong_length_introduction_is_malformed() {
        let bytes = vec![b'i'; INTRODUCTION_SIZE - 1];
        assert!(matches!(decode(&bytes), Err(Error::Malformed(_))));
    }

    #[test]
    fn wrong_length_reply_is_malformed() {
        let bytes = vec![b'r'; REPLY_SIZE + 1];
        assert!(matches!(decode(&bytes), Err(Error::Malformed(_))));
    }

    #[test]
    fn empty_frame_is_malformed() {
        assert!(matches!(decode(&[]), Err(Error::Malformed(_))));
    }
}
