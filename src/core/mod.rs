//! # Core Codec Components
//!
//! Low-level big-endian and base16 transcoding for 64-bit identifiers.
//!
//! This module provides the foundation for identifier formatting: writing
//! and reading fixed-width values into caller-owned buffer regions.
//!
//! ## Components
//! - **Bigendian**: 8-byte and 16-hex-character codec with offset-based access
//!
//! ## Wire Format
//! ```text
//! bytes:  [MSB] [..] [..] [..] [..] [..] [..] [LSB]           (8 bytes)
//! base16: two lowercase hex digits per byte, MSB first        (16 chars)
//! ```
//!
//! ## Safety
//! - Bounds validated before any mutation (no partial writes on failure)
//! - No allocation beyond the caller's own sink
//! - Lowercase-only decode; uppercase hex is rejected

pub mod bigendian;
