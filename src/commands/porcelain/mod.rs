//! Porcelain commands (user-facing operations)
//!
//! ## Commands
//!
//! - `init`: Initialize a new repository with its root commit
//! - `add`: Stage a file
//! - `rm`: Unstage a file or schedule it for removal
//! - `commit`: Fold the staging index into a new commit
//! - `checkout`: Switch branches or restore single files
//! - `branch`: Create or delete branches
//! - `reset`: Move the current branch to an arbitrary commit
//! - `merge`: Merge another branch into the current one
//! - `log`: Show first-parent history, every commit, or commits by message
//! - `status`: Show branches, staged changes and working tree changes

pub mod add;
pub mod branch;
pub mod checkout;
pub mod commit;
pub mod init;
pub mod log;
pub mod merge;
pub mod reset;
pub mod rm;
pub mod status;
