//! # Topical
//!
//! A lightweight end-to-end secure messaging primitive for a single logical
//! topic sitting above an untrusted many-to-many transport (pub/sub bus,
//! broadcast socket, MQTT topic, IRC channel). Each participant holds a
//! persistent Ed25519 signing identity; all participants of a topic share a
//! symmetric topic key.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                          TOPICAL MODULES                                 │
//! ├─────────────────────────────────────────────────────────────────────────┤
//! │                                                                         │
//! │  ┌─────────────┐  ┌─────────────┐  ┌─────────────┐  ┌──────────────┐   │
//! │  │   crypto    │  │  identity   │  │    trust    │  │    frame     │   │
//! │  │             │  │             │  │             │  │              │   │
//! │  │ - sign/vrfy │  │ - participant│ │ - id -> key │  │ - encode     │   │
//! │  │ - box/secbox│  │   id deriv. │  │   mapping   │  │ - decode     │   │
//! │  │ - Ed->X25519│  │             │  │             │  │ - type tags  │   │
//! │  └──────┬──────┘  └──────┬──────┘  └──────┬──────┘  └──────┬───────┘   │
//! │         └────────────────┴────────────────┴────────────────┘           │
//! │                                   │                                     │
//! │                          ┌────────────────┐                            │
//! │                          │     topic      │                            │
//! │                          │ (state machine)│                            │
//! │                          └────────────────┘                            │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Hierarchy
//!
//! - [`error`] - error taxonomy for the topic messaging core
//! - [`crypto`] - signing, sealed box, secret box, Ed25519 -> Curve25519 conversion
//! - [`identity`] - participant ID derivation
//! - [`trust`] - the local trust set (participant ID -> signing public key)
//! - [`frame`] - wire codec for the three frame types
//! - [`topic`] - the `Topic` state machine: the library's public surface
//!
//! ## What this crate does not do
//!
//! No replay protection, no forward secrecy, no group-key rotation or
//! revocation, no rate limiting, no persistence. A `Topic` holds its key
//! material and trust set only in memory; saving and restoring either is
//! the caller's responsibility (see [`trust::TrustSet::iter`]).
//!
//! No transport bindings, no CLI, no on-disk state: callers hand this
//! crate opaque byte frames and receive opaque byte frames back.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod crypto;
pub mod error;
pub mod frame;
pub mod identity;
pub mod topic;
pub mod trust;

pub use error::{Error, Result};
pub use identity::ParticipantId;
pub use topic::{generate_signing_key_seed, generate_topic_key, Topic};
pub use trust::TrustSet;
