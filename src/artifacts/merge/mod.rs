//! Merge algorithms
//!
//! - `bca_finder`: split point (best common ancestor) of two commits
//! - `resolution`: per-file three-way classification and conflict blocks

pub mod bca_finder;
pub mod resolution;
