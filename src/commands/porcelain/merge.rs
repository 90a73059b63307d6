use crate::areas::repository::Repository;
use crate::artifacts::branch::branch_name::BranchName;
use crate::artifacts::checkout::migration::Migration;
use crate::artifacts::merge::bca_finder::BCAFinder;
use crate::artifacts::merge::resolution::{MergeAction, conflict_block, resolve};
use crate::artifacts::objects::blob::Blob;
use crate::artifacts::objects::commit::FileMap;
use crate::artifacts::objects::object::Object;
use crate::artifacts::objects::object_id::ObjectId;
use crate::errors::TwigError;
use bytes::Bytes;
use log::debug;
use std::io::Write;

/// How a merge ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MergeOutcome {
    /// The other branch is already part of the current history
    UpToDate,
    /// The current branch moved to the other tip without a new commit
    FastForward(ObjectId),
    /// A merge commit was created
    Merged { commit: ObjectId, conflicted: bool },
}

impl Repository {
    /// Merge the tip of `branch` into the current branch
    pub fn merge(&mut self, branch: &str) -> anyhow::Result<MergeOutcome> {
        self.load()?;

        if !self.index().is_empty() {
            return Err(TwigError::UncommittedChanges.into());
        }

        let other_branch = BranchName::try_parse(branch.to_string())
            .ok()
            .filter(|branch_name| self.refs().branch_exists(branch_name))
            .ok_or_else(|| TwigError::UnknownBranch(branch.to_string()))?;
        let current_branch = self.refs().current_branch()?;
        if other_branch == current_branch {
            return Err(TwigError::SelfMerge.into());
        }

        let (head_oid, head) = self.head_commit()?;
        let other_oid = self
            .refs()
            .read_branch(&other_branch)?
            .ok_or_else(|| TwigError::UnknownBranch(branch.to_string()))?;
        let other = self.load_commit(&other_oid)?;

        Migration::new(self, head.files(), other.files()).check_obstructions()?;

        let split_oid = BCAFinder::new(|commit_id: &ObjectId| -> anyhow::Result<Vec<ObjectId>> {
            Ok(self.load_commit(commit_id)?.parents().cloned().collect())
        })
        .find_split_point(&head_oid, &other_oid)?;
        debug!("split point of {head_oid} and {other_oid}: {split_oid:?}");

        if split_oid.as_ref() == Some(&other_oid) {
            writeln!(self.writer(), "Given branch is an ancestor of the current branch.")?;
            return Ok(MergeOutcome::UpToDate);
        }

        if split_oid.as_ref() == Some(&head_oid) {
            self.migrate_workspace(head.files(), other.files())?;
            self.refs().update_head(&other_oid)?;
            writeln!(self.writer(), "Current branch fast-forwarded.")?;
            return Ok(MergeOutcome::FastForward(other_oid));
        }

        let split_files = match &split_oid {
            Some(split_oid) => self.load_commit(split_oid)?.files().clone(),
            None => FileMap::new(),
        };

        let mut conflicted = false;
        for (name, action) in resolve(&split_files, head.files(), other.files()) {
            match action {
                MergeAction::Keep => {}
                MergeAction::TakeOther(blob_id) => {
                    let blob = self.blobs().parse_object_as_blob(&blob_id)?;
                    self.workspace().write_file(&name, blob.content())?;
                    self.index().stage(&name, blob_id);
                }
                MergeAction::RemoveOther => {
                    self.workspace().remove_file(&name)?;
                    self.index().mark_removed(&name);
                }
                MergeAction::Conflict { head, other } => {
                    debug!("conflict in {name}");
                    let content = conflict_block(
                        &self.blob_content(head.as_ref())?,
                        &self.blob_content(other.as_ref())?,
                    );
                    self.workspace().write_file(&name, &content)?;

                    let blob = Blob::new(name.clone(), content);
                    let blob_id = self.staging().store(&blob)?;
                    self.index().stage(&name, blob_id);
                    conflicted = true;
                }
            }
        }

        let message = format!("Merged {other_branch} into {current_branch}.");
        let commit = self.commit_index(&message, Some(other_oid))?;

        if conflicted {
            writeln!(self.writer(), "Encountered a merge conflict.")?;
        }

        Ok(MergeOutcome::Merged { commit, conflicted })
    }

    fn blob_content(&self, blob_id: Option<&ObjectId>) -> anyhow::Result<Bytes> {
        match blob_id {
            Some(blob_id) => Ok(self.blobs().parse_object_as_blob(blob_id)?.content().clone()),
            None => Ok(Bytes::new()),
        }
    }
}
