//! Working tree status
//!
//! - `file_change`: kinds of unstaged change to a file
//! - `status_info`: status snapshot of branches, index and working tree

pub mod file_change;
pub mod status_info;
