//! Checkout migration
//!
//! A migration takes the working tree from the `current` mapping (what HEAD
//! tracks) to a `target` mapping:
//!
//! 1. Nothing untracked may sit where a target file or one of its parent
//!    directories has to go. Any such path is an obstruction and aborts the
//!    whole migration before the disk is touched.
//! 2. Files tracked by the current mapping but not by the target are deleted.
//! 3. Every file of the target is written out from its blob.

use crate::areas::repository::Repository;
use crate::artifacts::objects::commit::FileMap;
use crate::artifacts::objects::object_id::ObjectId;
use crate::errors::TwigError;
use bytes::Bytes;
use log::debug;
use std::collections::{BTreeMap, BTreeSet};

pub struct Migration<'r> {
    repository: &'r Repository,
    current: &'r FileMap,
    target: &'r FileMap,
    deletions: BTreeSet<String>,
    writes: BTreeMap<String, ObjectId>,
}

impl<'r> Migration<'r> {
    pub fn new(repository: &'r Repository, current: &'r FileMap, target: &'r FileMap) -> Self {
        Self {
            repository,
            current,
            target,
            deletions: BTreeSet::new(),
            writes: BTreeMap::new(),
        }
    }

    pub fn deletions(&self) -> &BTreeSet<String> {
        &self.deletions
    }

    pub fn writes(&self) -> &BTreeMap<String, ObjectId> {
        &self.writes
    }

    /// Untracked paths in the working tree that the target would overwrite
    ///
    /// What blocks a target file:
    ///
    /// - anything untracked at its own path
    /// - a directory at its path that holds untracked files
    /// - an untracked non-directory where one of its parent directories goes
    pub fn obstructions(&self) -> Vec<String> {
        let workspace = self.repository.workspace();
        let is_untracked = |name: &str| !self.current.contains_key(name);
        let mut obstructions = BTreeSet::new();

        for name in self.target.keys() {
            if workspace.dir_exists(name) {
                obstructions.extend(
                    workspace
                        .list_files_in(name)
                        .into_iter()
                        .filter(|inner| is_untracked(inner)),
                );
            } else if is_untracked(name) && workspace.path_exists(name) {
                obstructions.insert(name.clone());
            }

            obstructions.extend(
                parent_dirs(name)
                    .filter(|parent| is_untracked(parent))
                    .filter(|parent| workspace.path_exists(parent) && !workspace.dir_exists(parent))
                    .map(str::to_string),
            );
        }

        obstructions.into_iter().collect()
    }

    /// Fail with `UntrackedObstruction` if any untracked file is in the way
    pub fn check_obstructions(&self) -> anyhow::Result<()> {
        let obstructions = self.obstructions();

        if obstructions.is_empty() {
            Ok(())
        } else {
            debug!("migration blocked by {obstructions:?}");
            Err(TwigError::UntrackedObstruction(obstructions).into())
        }
    }

    pub fn apply_changes(&mut self) -> anyhow::Result<()> {
        self.plan_changes()?;
        self.repository.workspace().apply_migration(self)
    }

    fn plan_changes(&mut self) -> anyhow::Result<()> {
        self.check_obstructions()?;

        self.deletions = self
            .current
            .keys()
            .filter(|name| !self.target.contains_key(*name))
            .cloned()
            .collect();
        self.writes = self.target.clone();

        Ok(())
    }

    pub fn load_blob_content(&self, oid: &ObjectId) -> anyhow::Result<Bytes> {
        Ok(self
            .repository
            .blobs()
            .parse_object_as_blob(oid)?
            .content()
            .clone())
    }
}

/// `a` and `a/b` for `a/b/c.txt`
fn parent_dirs(name: &str) -> impl Iterator<Item = &str> {
    name.match_indices('/').map(move |(at, _)| &name[..at])
}
