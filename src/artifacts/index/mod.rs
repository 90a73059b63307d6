//! Staging index file format
//!
//! The index persists the two pending-change sets that sit on top of HEAD's
//! tracked files.
//!
//! ## File Format
//!
//! ```text
//! Header (16 bytes):
//!   - Signature: "TWIX" (4 bytes)
//!   - Version: 1 (4 bytes)
//!   - Staged additions count (4 bytes)
//!   - Staged removals count (4 bytes)
//!
//! Staged additions (variable length):
//!   - Blob id (20 bytes)
//!   - Name length (2 bytes)
//!   - Name (UTF-8)
//!
//! Staged removals (variable length):
//!   - Name length (2 bytes)
//!   - Name (UTF-8)
//!
//! Checksum (20 bytes):
//!   - SHA-1 hash of all preceding bytes
//! ```
//!
//! All integers are big-endian.

pub mod checksum;
pub mod index_header;

/// Size of SHA-1 checksum in bytes
pub const CHECKSUM_SIZE: usize = 20;

/// Size of index header in bytes
pub const HEADER_SIZE: usize = 16;

/// Magic signature identifying index files
pub const SIGNATURE: &str = "TWIX";

/// Index file format version
pub const VERSION: u32 = 1;

/// Longest file name an index entry can hold
pub const MAX_NAME_SIZE: usize = u16::MAX as usize;
