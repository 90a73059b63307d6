//! Working-tree reconciliation
//!
//! Moving the working directory from one tracked-file mapping to another is
//! planned up front. The plan is checked for untracked files that would be
//! overwritten before anything on disk is touched.

pub mod migration;
