//! # Error Handling
//!
//! Error taxonomy for the topic messaging core.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                           ERROR HIERARCHY                                │
//! ├─────────────────────────────────────────────────────────────────────────┤
//! │                                                                         │
//! │  Error (top-level)                                                     │
//! │  │                                                                      │
//! │  ├── Frame Errors                                                      │
//! │  │   ├── Malformed             - bad tag, length, or truncated frame   │
//! │  │   ├── IntroductionReceived  - advisory: decode() saw an "i" frame   │
//! │  │   └── ReplyReceived         - advisory: decode() saw an "r" frame   │
//! │  │                                                                      │
//! │  ├── Trust Errors                                                      │
//! │  │   └── UntrustedKey          - sender not in the trust set           │
//! │  │                                                                      │
//! │  ├── Crypto Errors                                                     │
//! │  │   ├── BadSignature          - signature verification failed        │
//! │  │   ├── NoKey                 - topic key required but unset         │
//! │  │   └── BadCiphertext         - authenticated decryption failed       │
//! │  │                                                                      │
//! │  └── Handshake Errors                                                  │
//! │      └── NoPendingIntro        - reply arrived with no pending intro   │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! `IntroductionReceived` and `ReplyReceived` are advisory, not fatal: they
//! tell the caller which follow-up operation (`construct_reply` /
//! `parse_reply`) to invoke. Everything else is a genuine failure.

use thiserror::Error;

/// Result type alias for topic core operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors produced by the topic messaging core.
#[derive(Error, Debug)]
pub enum Error {
    // ========================================================================
    // Frame Errors (100-199)
    // ========================================================================
    /// Frame too short, wrong type tag, or wrong field lengths.
    #[error("malformed frame: {0}")]
    Malformed(String),

    /// `decode` was handed an Introduction frame.
    #[error("introduction frame received; call construct_reply if desired")]
    IntroductionReceived,

    /// `decode` was handed a Reply frame.
    #[error("reply frame received; call parse_reply if desired")]
    ReplyReceived,

    // ========================================================================
    // Trust Errors (200-299)
    // ========================================================================
    /// Sender's participant ID is absent from the trust set.
    #[error("sender is not in the trust set")]
    UntrustedKey,

    // ========================================================================
    // Crypto Errors (300-399)
    // ========================================================================
    /// A signature check failed against a key we trust, or a key the frame
    /// itself binds (e.g. an intro's ephemeral-key signature).
    #[error("signature verification failed")]
    BadSignature,

    /// Operation requires the topic key and it has not been set.
    #[error("topic key is not set")]
    NoKey,

    /// Authenticated decryption (box or secretbox) failed.
    #[error("ciphertext authentication failed")]
    BadCiphertext,

    // ========================================================================
    // Handshake Errors (400-499)
    // ========================================================================
    /// A reply arrived but no ephemeral keypair is pending.
    #[error("no introduction is pending")]
    NoPendingIntro,
}

impl Error {
    /// Numeric error code, stable across releases.
    ///
    /// - 100-199: Frame
    /// - 200-299: Trust
    /// - 300-399: Crypto
    /// - 400-499: Handshake
    pub fn code(&self) -> i32 {
        match self {
            Error::Malformed(_) => 100,
            Error::IntroductionReceived => 101,
            Error::ReplyReceived => 102,

            Error::UntrustedKey => 200,

            Error::BadSignature => 300,
            Error::NoKey => 301,
            Error::BadCiphertext => 302,

            Error::NoPendingIntro => 400,
        }
    }

    /// True for the two advisory variants that signal a follow-up
    /// operation rather than a genuine failure.
    pub fn is_advisory(&self) -> bool {
        matches!(self, Error::IntroductionReceived | Error::ReplyReceived)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_codes() {
        assert_eq!(Error::Malformed("short".into()).code(), 100);
        assert_eq!(Error::IntroductionReceived.code(), 101);
        assert_eq!(Error::ReplyReceived.code(), 102);
        assert_eq!(Error::UntrustedKey.code(), 200);
        assert_eq!(Error::BadSignature.code(), 300);
        assert_eq!(Error::NoKey.code(), 301);
        assert_eq!(Error::BadCiphertext.code(), 302);
        assert_eq!(Error::NoPendingIntro.code(), 400);
    }

    #[test]
    fn advisory_variants() {
        assert!(Error::IntroductionReceived.is_advisory());
        assert!(Error::ReplyReceived.is_advisory());
        assert!(!Error::BadSignature.is_advisory());
        assert!(!Error::Malformed("x".into()).is_advisory());
    }
}
