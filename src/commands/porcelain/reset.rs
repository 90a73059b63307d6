use crate::areas::repository::Repository;
use crate::artifacts::objects::object_id::ObjectId;

impl Repository {
    /// Point the current branch at `commit_id` and check out its files
    pub fn reset(&mut self, commit_id: &str) -> anyhow::Result<ObjectId> {
        self.load()?;

        let (target_oid, target) = self.lookup_commit(commit_id)?;

        self.migrate_workspace(&self.tracked_files()?, target.files())?;
        self.refs().update_head(&target_oid)?;

        Ok(target_oid)
    }
}
