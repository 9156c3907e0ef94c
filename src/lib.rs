//! # Trace Codec
//!
//! Allocation-free big-endian and base16 transcoding for 64-bit tracing
//! identifiers.
//!
//! Distributed-tracing systems build their trace and span IDs from one or
//! two 64-bit fields, carried on the wire as raw big-endian bytes and in
//! text headers as lowercase hex. This crate provides the codec for exactly
//! that shape: 8 big-endian bytes or 16 lowercase base16 characters, read
//! and written at caller-supplied offsets into caller-owned buffers.
//!
//! ## Components
//! - **Core**: the `core::bigendian` codec (bytes and base16, both directions)
//! - **Errors**: size and character diagnostics with stable message text
//!
//! ## Guarantees
//! - Big-endian byte order, most significant byte first
//! - Lowercase-only hex; uppercase input is rejected, never coerced
//! - Size checks run before any buffer mutation or read
//! - Pure synchronous functions; safe for concurrent use on disjoint regions
//!
//! ## Example
//! ```rust
//! use trace_codec::core::bigendian;
//!
//! let mut bytes = [0u8; bigendian::LONG_BYTES];
//! bigendian::encode_to_bytes(0x1213141516171819, &mut bytes, 0)?;
//! assert_eq!(bytes, [0x12, 0x13, 0x14, 0x15, 0x16, 0x17, 0x18, 0x19]);
//!
//! let mut hex = String::with_capacity(bigendian::LONG_BASE16);
//! bigendian::encode_to_base16(0x1213141516171819, &mut hex);
//! assert_eq!(hex, "1213141516171819");
//!
//! assert_eq!(bigendian::decode_from_base16(&hex, 0)?, 0x1213141516171819);
//! # Ok::<(), trace_codec::error::CodecError>(())
//! ```

pub mod core;
pub mod error;

// Re-export the common entry points at the crate root
pub use crate::core::bigendian;
pub use crate::error::{CodecError, Result, SpanContextParseError};
