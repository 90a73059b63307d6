//! Stored object types
//!
//! Everything the engine persists is an object identified by the SHA-1 hash of
//! its serialized form. There are two kinds:
//!
//! - **Blob**: one file's path and contents at the moment it was staged
//! - **Commit**: a snapshot of every tracked file plus metadata and parent links
//!
//! Both share the on-disk framing `<type> <size>\0<body>`.

pub mod blob;
pub mod commit;
pub mod object;
pub mod object_id;
pub mod object_type;

/// Length of a SHA-1 hash in hexadecimal format
pub const OBJECT_ID_LENGTH: usize = 40;
