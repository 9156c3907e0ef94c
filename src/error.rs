//! # Error Types
//!
//! Error handling for the identifier codec.
//!
//! This module defines the error variants raised by the codec plus the
//! parse-failure type used by propagation layers above it.
//!
//! ## Error Categories
//! - **Size Errors**: a byte or character region cannot hold a full value
//!   at the requested offset
//! - **Character Errors**: a non-lowercase-hex character encountered while
//!   decoding base16 text
//! - **Parse Errors**: higher-level propagation-context parse failures
//!   wrapping a message and an optional cause
//!
//! The codec never logs, retries, or substitutes defaults; every failure is
//! reported synchronously to the immediate caller.
//!
//! ## Message Compatibility
//! The `Display` text of [`CodecError`] is a stable contract: dependent
//! error-matching code relies on the literal strings, so they must not be
//! reworded. The literals live in [`constants`].

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error message constants to keep the literal codec diagnostics in one place.
/// These strings are matched by dependent code and must stay byte-identical.
pub mod constants {
    /// Byte region shorter than 8 bytes past the requested offset
    pub const ERR_ARRAY_TOO_SMALL: &str = "array too small";

    /// Character region shorter than 16 characters past the requested offset
    pub const ERR_CHARS_TOO_SMALL: &str = "chars too small";

    /// Prefix for the invalid-character diagnostic; the offending character
    /// is appended verbatim
    pub const ERR_INVALID_CHARACTER: &str = "invalid character ";
}

// CodecError is the primary error type for all codec operations
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CodecError {
    #[error("{}", constants::ERR_ARRAY_TOO_SMALL)]
    ArrayTooSmall,

    #[error("{}", constants::ERR_CHARS_TOO_SMALL)]
    CharsTooSmall,

    #[error("{}{0}", constants::ERR_INVALID_CHARACTER)]
    InvalidCharacter(char),
}

/// Type alias for Results using CodecError
pub type Result<T> = std::result::Result<T, CodecError>;

/// Parse failure raised by propagation layers when a serialized span
/// context cannot be decoded.
///
/// Carries a human-readable message and, optionally, the lower-level error
/// that triggered it (typically a [`CodecError`] or an I/O error). The
/// cause is exposed through [`std::error::Error::source`].
#[derive(Error, Debug)]
#[error("{message}")]
pub struct SpanContextParseError {
    message: String,
    #[source]
    cause: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl SpanContextParseError {
    /// Create a parse error with a message only
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            cause: None,
        }
    }

    /// Create a parse error wrapping an underlying cause
    pub fn with_cause(
        message: impl Into<String>,
        cause: impl Into<Box<dyn std::error::Error + Send + Sync>>,
    ) -> Self {
        Self {
            message: message.into(),
            cause: Some(cause.into()),
        }
    }

    /// The human-readable failure message
    pub fn message(&self) -> &str {
        &self.message
    }
}
