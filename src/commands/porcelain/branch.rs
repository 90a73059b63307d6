use crate::areas::repository::Repository;
use crate::artifacts::branch::branch_name::BranchName;
use crate::errors::TwigError;

impl Repository {
    /// Create `branch` at the current HEAD commit
    pub fn branch(&mut self, branch: &str) -> anyhow::Result<()> {
        self.load()?;

        let branch_name = BranchName::try_parse(branch.to_string())?;
        let head_oid = self.head_oid()?;

        self.refs().create_branch(&branch_name, &head_oid)
    }

    /// Delete the pointer `branch`; its commits stay in the store
    pub fn rm_branch(&mut self, branch: &str) -> anyhow::Result<()> {
        self.load()?;

        let branch_name = BranchName::try_parse(branch.to_string())
            .map_err(|_| TwigError::UnknownBranch(branch.to_string()))?;

        if self.refs().is_current_branch(&branch_name)? {
            return Err(TwigError::CurrentBranchRemoval(branch.to_string()).into());
        }

        self.refs().delete_branch(&branch_name)?;

        Ok(())
    }
}
