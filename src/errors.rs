//! Engine error types
//!
//! Every precondition the engine enforces has its own variant. Errors travel
//! through `anyhow` like everything else in the crate, so callers that need to
//! branch on the cause use `err.downcast_ref::<TwigError>()`.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TwigError {
    /// a commit id or id prefix did not resolve to exactly one commit
    #[error("No commit with that id exists.")]
    CommitNotFound(String),

    /// checkout of a branch that has no ref
    #[error("No such branch exists.")]
    BranchNotFound(String),

    /// merge or rm-branch of a branch that has no ref
    #[error("A branch with that name does not exist.")]
    UnknownBranch(String),

    /// removing a file that is neither tracked nor staged
    #[error("No reason to remove the file.")]
    NoOp(String),

    /// committing with both staging sets empty
    #[error("No changes added to the commit.")]
    EmptyCommit,

    /// merging while the staging index holds pending changes
    #[error("You have uncommitted changes.")]
    UncommittedChanges,

    #[error("Cannot merge a branch with itself.")]
    SelfMerge,

    /// a destructive operation would overwrite files that are not tracked
    #[error("There is an untracked file in the way; delete it, or add and commit it first.")]
    UntrackedObstruction(Vec<String>),

    #[error("File does not exist in that commit.")]
    FileNotInCommit(String),

    #[error("A twig version-control system already exists in the current directory.")]
    AlreadyInitialized,

    #[error("Not in an initialized twig directory.")]
    NotInitialized,

    #[error("Please enter a commit message.")]
    EmptyMessage,

    #[error("A branch with that name already exists.")]
    BranchExists(String),

    #[error("Cannot remove the current branch.")]
    CurrentBranchRemoval(String),

    #[error("No need to checkout the current branch.")]
    AlreadyOnBranch(String),

    /// staging a file that is missing from the working directory
    #[error("File does not exist.")]
    NoSuchFile(String),

    #[error("Found no commit with that message.")]
    NoMatchingCommit(String),

    #[error("invalid branch name: {0}")]
    InvalidBranchName(String),
}

/// Recover the engine error behind an `anyhow::Error`, if there is one
pub fn twig_error(err: &anyhow::Error) -> Option<&TwigError> {
    err.downcast_ref::<TwigError>()
}
