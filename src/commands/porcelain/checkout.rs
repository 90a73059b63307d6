use crate::areas::repository::Repository;
use crate::areas::workspace::Workspace;
use crate::artifacts::branch::branch_name::BranchName;
use crate::artifacts::checkout::migration::Migration;
use crate::artifacts::objects::commit::FileMap;
use crate::errors::TwigError;

impl Repository {
    /// Switch to `branch`, replacing the working tree with its tip's files
    pub fn checkout_branch(&mut self, branch: &str) -> anyhow::Result<()> {
        self.load()?;

        let branch_name = BranchName::try_parse(branch.to_string())
            .ok()
            .filter(|branch_name| self.refs().branch_exists(branch_name))
            .ok_or_else(|| TwigError::BranchNotFound(branch.to_string()))?;

        if self.refs().is_current_branch(&branch_name)? {
            return Err(TwigError::AlreadyOnBranch(branch.to_string()).into());
        }

        let target_oid = self
            .refs()
            .read_branch(&branch_name)?
            .ok_or_else(|| TwigError::BranchNotFound(branch.to_string()))?;
        let target = self.load_commit(&target_oid)?;

        self.migrate_workspace(&self.tracked_files()?, target.files())?;
        self.refs().set_head(&branch_name)?;

        Ok(())
    }

    /// Restore one file from HEAD, or from the commit `commit_id` resolves to
    ///
    /// Only the file itself is written. The index and HEAD are left alone.
    pub fn checkout_file(&mut self, commit_id: Option<&str>, file: &str) -> anyhow::Result<()> {
        self.load()?;

        let (_, commit) = match commit_id {
            Some(commit_id) => self.lookup_commit(commit_id)?,
            None => self.head_commit()?,
        };

        let name = Workspace::normalize_name(file)
            .map_err(|_| TwigError::FileNotInCommit(file.to_string()))?;
        let blob_id = commit
            .file(&name)
            .ok_or_else(|| TwigError::FileNotInCommit(file.to_string()))?;
        let blob = self.blobs().parse_object_as_blob(blob_id)?;

        self.workspace().write_file(&name, blob.content())
    }

    /// Move the working tree from `current` to `target` and drop pending changes
    ///
    /// Nothing on disk changes if an untracked file is in the way.
    pub(crate) fn migrate_workspace(&self, current: &FileMap, target: &FileMap) -> anyhow::Result<()> {
        let mut migration = Migration::new(self, current, target);
        migration.apply_changes()?;

        self.clear_pending_changes()
    }
}
