//! Commit history traversal
//!
//! - `rev_list`: ancestor walks over the commit DAG, both the breadth-first walk
//!   that follows every parent and the first-parent chain printed by `log`

pub mod rev_list;
