use crate::areas::repository::Repository;
use crate::artifacts::log::rev_list::{AncestorWalk, RevList};
use crate::artifacts::objects::commit::Commit;
use crate::artifacts::objects::object_id::ObjectId;
use crate::errors::TwigError;
use std::io::Write;

impl Repository {
    /// Print the first-parent history of HEAD, newest first
    pub fn log(&self) -> anyhow::Result<()> {
        self.load()?;

        for entry in RevList::new(self, self.head_oid()?) {
            let (oid, commit) = entry?;
            self.show_commit(&oid, &commit)?;
        }

        Ok(())
    }

    /// Print every commit in the store, in id order
    pub fn global_log(&self) -> anyhow::Result<()> {
        self.load()?;

        for oid in self.commits().list_objects()? {
            let commit = self.load_commit(&oid)?;
            self.show_commit(&oid, &commit)?;
        }

        Ok(())
    }

    /// Print the ids of all commits whose message is exactly `message`
    pub fn find(&self, message: &str) -> anyhow::Result<Vec<ObjectId>> {
        self.load()?;

        let mut matches = Vec::new();
        for oid in self.commits().list_objects()? {
            if self.load_commit(&oid)?.message() == message {
                matches.push(oid);
            }
        }

        if matches.is_empty() {
            return Err(TwigError::NoMatchingCommit(message.to_string()).into());
        }

        let mut writer = self.writer();
        for oid in &matches {
            writeln!(writer, "{oid}")?;
        }

        Ok(matches)
    }

    /// Ids of every ancestor of `oid` through both parents, nearest first
    ///
    /// The list starts with `oid` itself.
    pub fn ancestor_chain(&self, oid: &ObjectId) -> anyhow::Result<Vec<ObjectId>> {
        AncestorWalk::new(|commit_id: &ObjectId| -> anyhow::Result<Vec<ObjectId>> {
            Ok(self.load_commit(commit_id)?.parents().cloned().collect())
        })
        .chain(oid)
    }

    fn show_commit(&self, oid: &ObjectId, commit: &Commit) -> anyhow::Result<()> {
        let mut writer = self.writer();

        writeln!(writer, "===")?;
        writeln!(writer, "commit {oid}")?;
        if let (Some(parent), Some(merge_parent)) = (commit.parent(), commit.merge_parent()) {
            writeln!(
                writer,
                "Merge: {} {}",
                parent.to_short_oid(),
                merge_parent.to_short_oid()
            )?;
        }
        writeln!(writer, "Date: {}", commit.readable_timestamp())?;
        writeln!(writer, "{}", commit.message())?;
        writeln!(writer)?;

        Ok(())
    }
}
