use crate::areas::repository::Repository;
use crate::artifacts::branch::branch_name::BranchName;
use crate::artifacts::objects::object::Object;
use crate::artifacts::objects::object_id::ObjectId;
use crate::artifacts::status::file_change::WorkspaceChangeType;
use derive_new::new;
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

pub type FileSet = BTreeSet<String>;
pub type ChangeSet = BTreeMap<String, WorkspaceChangeType>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusInfo {
    pub(crate) current_branch: BranchName,
    pub(crate) branches: Vec<BranchName>,
    pub(crate) staged_files: FileSet,
    pub(crate) removed_files: FileSet,
    pub(crate) workspace_changeset: ChangeSet,
    pub(crate) untracked_files: FileSet,
}

#[derive(new)]
pub struct Status<'r> {
    repository: &'r Repository,
}

impl<'r> Status<'r> {
    pub fn initialize(&self) -> anyhow::Result<StatusInfo> {
        let refs = self.repository.refs();
        let tracked = self.repository.tracked_files()?;
        let workspace_files = self.repository.workspace().list_files()?;
        let index = self.repository.index();

        let mut workspace_changeset = ChangeSet::new();

        // tracked files the index says nothing about
        for (name, oid) in &tracked {
            if index.staged_oid(name).is_some() || index.is_marked_removed(name) {
                continue;
            }
            if let Some(change) = self.compare_with_workspace(name, oid, &workspace_files)? {
                workspace_changeset.insert(name.clone(), change);
            }
        }

        // staged files edited or deleted after staging
        for (name, oid) in index.staged_add() {
            if let Some(change) = self.compare_with_workspace(name, oid, &workspace_files)? {
                workspace_changeset.insert(name.clone(), change);
            }
        }

        // a file scheduled for removal but recreated counts as untracked
        let untracked_files = workspace_files
            .iter()
            .filter(|name| index.staged_oid(name).is_none())
            .filter(|name| !tracked.contains_key(*name) || index.is_marked_removed(name))
            .cloned()
            .collect();

        Ok(StatusInfo {
            current_branch: refs.current_branch()?,
            branches: refs.list_branches()?,
            staged_files: index.staged_add().keys().cloned().collect(),
            removed_files: index.staged_remove().clone(),
            workspace_changeset,
            untracked_files,
        })
    }

    fn compare_with_workspace(
        &self,
        name: &str,
        oid: &ObjectId,
        workspace_files: &FileSet,
    ) -> anyhow::Result<Option<WorkspaceChangeType>> {
        if !workspace_files.contains(name) {
            return Ok(Some(WorkspaceChangeType::Deleted));
        }

        let blob = self.repository.workspace().parse_blob(name)?;
        if &blob.object_id()? != oid {
            Ok(Some(WorkspaceChangeType::Modified))
        } else {
            Ok(None)
        }
    }
}

impl StatusInfo {
    pub fn is_clean(&self) -> bool {
        self.staged_files.is_empty()
            && self.removed_files.is_empty()
            && self.workspace_changeset.is_empty()
            && self.untracked_files.is_empty()
    }
}

impl fmt::Display for StatusInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "=== Branches ===")?;
        for branch in &self.branches {
            let marker = if branch == &self.current_branch { "*" } else { "" };
            writeln!(f, "{marker}{branch}")?;
        }

        writeln!(f, "\n=== Staged Files ===")?;
        for name in &self.staged_files {
            writeln!(f, "{name}")?;
        }

        writeln!(f, "\n=== Removed Files ===")?;
        for name in &self.removed_files {
            writeln!(f, "{name}")?;
        }

        writeln!(f, "\n=== Modifications Not Staged For Commit ===")?;
        for (name, change) in &self.workspace_changeset {
            writeln!(f, "{name} {change}")?;
        }

        writeln!(f, "\n=== Untracked Files ===")?;
        for name in &self.untracked_files {
            writeln!(f, "{name}")?;
        }

        writeln!(f)
    }
}
