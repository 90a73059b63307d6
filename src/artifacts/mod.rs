//! Data structures and algorithms
//!
//! - `branch`: Branch names and their validation
//! - `checkout`: Working-tree migrations with obstruction checks
//! - `index`: Staging index file format
//! - `log`: Commit history traversal
//! - `merge`: Split point search and three-way resolution
//! - `objects`: Object types (blob, commit)
//! - `status`: Working tree status inspection

pub mod branch;
pub mod checkout;
pub mod index;
pub mod log;
pub mod merge;
pub mod objects;
pub mod status;
