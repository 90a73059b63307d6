use crate::areas::repository::Repository;
use crate::areas::workspace::Workspace;
use crate::artifacts::objects::object::Object;
use crate::errors::TwigError;
use log::debug;

impl Repository {
    /// Stage the working tree contents of `file`
    ///
    /// Staging a file whose contents match what HEAD tracks cancels any
    /// pending change for it instead.
    pub fn add(&mut self, file: &str) -> anyhow::Result<()> {
        self.load()?;

        let name = Workspace::normalize_name(file)?;
        if name.is_empty() || !self.workspace().file_exists(&name) {
            return Err(TwigError::NoSuchFile(file.to_string()).into());
        }

        let blob = self.workspace().parse_blob(&name)?;
        let blob_id = blob.object_id()?;
        let tracked = self.tracked_files()?;

        let mut index = self.index();
        if tracked.get(&name) == Some(&blob_id) {
            debug!("{name} matches HEAD, nothing to stage");
            if let Some(previous) = index.unstage(&name) {
                self.staging().remove(&previous)?;
            }
        } else {
            self.staging().store(&blob)?;
            if let Some(previous) = index.stage(&name, blob_id.clone())
                && previous != blob_id
            {
                self.staging().remove(&previous)?;
            }
        }

        index.write_updates()
    }
}
