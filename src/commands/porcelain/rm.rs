use crate::areas::repository::Repository;
use crate::areas::workspace::Workspace;
use crate::errors::TwigError;

impl Repository {
    /// Unstage `file`, and if HEAD tracks it, schedule its removal and delete it
    pub fn rm(&mut self, file: &str) -> anyhow::Result<()> {
        self.load()?;

        let name = Workspace::normalize_name(file)
            .map_err(|_| TwigError::NoOp(file.to_string()))?;
        let is_tracked = self.tracked_files()?.contains_key(&name);

        let mut index = self.index();
        let is_staged = index.staged_oid(&name).is_some();
        if !is_tracked && !is_staged {
            return Err(TwigError::NoOp(file.to_string()).into());
        }

        let staged = if is_tracked {
            self.workspace().remove_file(&name)?;
            index.mark_removed(&name)
        } else {
            index.unstage(&name)
        };
        if let Some(staged) = staged {
            self.staging().remove(&staged)?;
        }

        index.write_updates()
    }
}
