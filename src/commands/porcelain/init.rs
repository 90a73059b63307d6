use crate::areas::repository::Repository;
use crate::artifacts::branch::branch_name::BranchName;
use crate::artifacts::objects::commit::Commit;
use crate::artifacts::objects::object_id::ObjectId;
use crate::errors::TwigError;
use anyhow::Context;
use std::fs;
use std::io::Write;

impl Repository {
    /// Create the repository layout and the shared root commit on `master`
    pub fn init(&mut self) -> anyhow::Result<ObjectId> {
        if self.is_initialized() {
            return Err(TwigError::AlreadyInitialized.into());
        }

        fs::create_dir_all(self.blobs().objects_path())
            .context("Failed to create .twig/objects/blobs directory")?;
        fs::create_dir_all(self.commits().objects_path())
            .context("Failed to create .twig/objects/commits directory")?;
        fs::create_dir_all(self.staging().objects_path())
            .context("Failed to create .twig/staging directory")?;
        fs::create_dir_all(self.refs().heads_path())
            .context("Failed to create .twig/refs/heads directory")?;

        let default_branch = BranchName::default_branch();
        let root = Commit::root(default_branch.to_string());
        let root_oid = self.commits().store(&root)?;

        self.refs()
            .update_branch(&default_branch, &root_oid)
            .context("Failed to create the default branch")?;
        self.refs()
            .set_head(&default_branch)
            .context("Failed to create initial HEAD reference")?;

        self.index().write_updates()?;

        writeln!(
            self.writer(),
            "Initialized empty twig repository in {}",
            self.twig_path().display()
        )?;

        Ok(root_oid)
    }
}
