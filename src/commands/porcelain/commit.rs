use crate::areas::repository::Repository;
use crate::artifacts::objects::commit::{Commit, FileMap};
use crate::artifacts::objects::object_id::ObjectId;
use crate::errors::TwigError;
use log::debug;

impl Repository {
    /// Fold the staging index into a new commit on the current branch
    pub fn commit(&mut self, message: &str) -> anyhow::Result<ObjectId> {
        self.load()?;

        if message.trim().is_empty() {
            return Err(TwigError::EmptyMessage.into());
        }
        if self.index().is_empty() {
            return Err(TwigError::EmptyCommit.into());
        }

        self.commit_index(message, None)
    }

    /// Build a commit from HEAD's files plus the pending changes
    ///
    /// Staged blobs move to the permanent keyspace, the branch tip moves to
    /// the new commit and the index is emptied.
    pub(crate) fn commit_index(
        &self,
        message: &str,
        merge_parent: Option<ObjectId>,
    ) -> anyhow::Result<ObjectId> {
        let (head_oid, head) = self.head_commit()?;
        let files = self.index().apply_to(head.files());

        self.promote_staged_blobs()?;

        let branch = self.refs().current_branch()?;
        let commit = Commit::new(
            Commit::timestamp_from_env(),
            message.to_string(),
            branch.to_string(),
            files,
            Some(head_oid),
            merge_parent,
        );

        let commit_oid = self.create_commit(&commit)?;
        self.clear_pending_changes()?;

        Ok(commit_oid)
    }

    /// Persist `commit` and point the current branch at it
    pub(crate) fn create_commit(&self, commit: &Commit) -> anyhow::Result<ObjectId> {
        let commit_oid = self.commits().store(commit)?;
        self.refs().update_head(&commit_oid)?;
        debug!("created commit {commit_oid} on {}", commit.branch());

        Ok(commit_oid)
    }

    fn promote_staged_blobs(&self) -> anyhow::Result<()> {
        for blob_id in self.index().staged_add().values() {
            if self.staging().contains(blob_id) {
                let blob = self.staging().parse_object_as_blob(blob_id)?;
                self.blobs().store(&blob)?;
            } else if !self.blobs().contains(blob_id) {
                anyhow::bail!("Staged blob {blob_id} is missing from the object store");
            }
        }

        Ok(())
    }

    /// Empty the index and the staged-blob keyspace
    pub(crate) fn clear_pending_changes(&self) -> anyhow::Result<()> {
        let mut index = self.index();
        index.clear();
        index.write_updates()?;

        self.staging().clear()
    }

    /// Files the next commit would track
    pub fn pending_files(&self) -> anyhow::Result<FileMap> {
        Ok(self.index().apply_to(&self.tracked_files()?))
    }
}
