//! Staging index
//!
//! The index holds the changes waiting for the next commit, layered on top of
//! the files HEAD tracks:
//!
//! - `staged_add`: file name mapped to the blob id of its staged contents
//! - `staged_remove`: file names that will stop being tracked
//!
//! A name is never in both sets at once. The index is persisted to disk with a
//! trailing checksum (see `artifacts::index` for the layout).

use crate::artifacts::index::checksum::IndexStream;
use crate::artifacts::index::index_header::IndexHeader;
use crate::artifacts::index::{HEADER_SIZE, SIGNATURE, VERSION};
use crate::artifacts::objects::commit::FileMap;
use crate::artifacts::objects::object::{Packable, Unpackable};
use crate::artifacts::objects::object_id::ObjectId;
use anyhow::anyhow;
use log::debug;
use std::collections::{BTreeMap, BTreeSet};
use std::io::Read;
use std::ops::DerefMut;
use std::path::Path;

#[derive(Debug, Clone)]
pub struct Index {
    /// Path to the index file (typically `.twig/index`)
    path: Box<Path>,
    staged_add: BTreeMap<String, ObjectId>,
    staged_remove: BTreeSet<String>,
    header: IndexHeader,
    /// Set when the in-memory state differs from what was last loaded or written
    changed: bool,
}

impl Index {
    pub fn new(path: Box<Path>) -> Self {
        Index {
            path,
            staged_add: BTreeMap::new(),
            staged_remove: BTreeSet::new(),
            header: IndexHeader::empty(),
            changed: false,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn staged_add(&self) -> &BTreeMap<String, ObjectId> {
        &self.staged_add
    }

    pub fn staged_remove(&self) -> &BTreeSet<String> {
        &self.staged_remove
    }

    pub fn staged_oid(&self, name: &str) -> Option<&ObjectId> {
        self.staged_add.get(name)
    }

    pub fn is_marked_removed(&self, name: &str) -> bool {
        self.staged_remove.contains(name)
    }

    pub fn is_empty(&self) -> bool {
        self.staged_add.is_empty() && self.staged_remove.is_empty()
    }

    pub fn is_changed(&self) -> bool {
        self.changed
    }

    /// Record staged contents for `name`, cancelling a pending removal
    ///
    /// Returns the blob id that was staged before, if any.
    pub fn stage(&mut self, name: &str, oid: ObjectId) -> Option<ObjectId> {
        self.staged_remove.remove(name);
        self.changed = true;
        self.staged_add.insert(name.to_string(), oid)
    }

    /// Forget any pending change for `name`
    ///
    /// Returns the blob id that was staged for it, if any.
    pub fn unstage(&mut self, name: &str) -> Option<ObjectId> {
        let removed = self.staged_remove.remove(name);
        let staged = self.staged_add.remove(name);
        self.changed |= removed || staged.is_some();
        staged
    }

    /// Schedule `name` to stop being tracked, dropping its staged contents
    pub fn mark_removed(&mut self, name: &str) -> Option<ObjectId> {
        let staged = self.staged_add.remove(name);
        self.staged_remove.insert(name.to_string());
        self.changed = true;
        staged
    }

    pub fn clear(&mut self) {
        self.changed |= !self.is_empty();
        self.staged_add.clear();
        self.staged_remove.clear();
        self.header = IndexHeader::empty();
    }

    /// Fold the pending changes into a tracked-file mapping
    pub fn apply_to(&self, tracked: &FileMap) -> FileMap {
        let mut files = tracked.clone();
        files.extend(
            self.staged_add
                .iter()
                .map(|(name, oid)| (name.clone(), oid.clone())),
        );
        files.retain(|name, _| !self.staged_remove.contains(name));
        files
    }

    /// Load the index from disk
    ///
    /// A missing or empty file is an empty index. The checksum trailer is
    /// verified after all entries are read.
    pub fn rehydrate(&mut self) -> anyhow::Result<()> {
        self.staged_add.clear();
        self.staged_remove.clear();
        self.header = IndexHeader::empty();
        self.changed = false;

        if !self.path().exists() {
            return Ok(());
        }

        let mut index_file = std::fs::OpenOptions::new().read(true).open(self.path())?;
        let mut lock = file_guard::lock(&mut index_file, file_guard::Lock::Shared, 0, 1)?;

        if lock.deref_mut().metadata()?.len() == 0 {
            return Ok(());
        }

        let mut reader = IndexStream::new(lock.deref_mut());
        let header = Self::parse_header(&mut reader)?;

        for _ in 0..header.additions_count {
            let oid = reader.read_oid()?;
            let name = reader.read_name()?;
            self.staged_add.insert(name, oid);
        }
        for _ in 0..header.removals_count {
            self.staged_remove.insert(reader.read_name()?);
        }

        reader.verify()?;
        self.header = header;

        Ok(())
    }

    fn parse_header(reader: &mut IndexStream<impl Read>) -> anyhow::Result<IndexHeader> {
        let header_bytes = reader.read(HEADER_SIZE)?;
        let header = IndexHeader::deserialize(std::io::Cursor::new(header_bytes))?;

        if header.marker != SIGNATURE {
            return Err(anyhow!("Invalid index file signature"));
        }

        if header.version != VERSION {
            return Err(anyhow!(
                "Unsupported index file version: {}",
                header.version
            ));
        }

        Ok(header)
    }

    /// Persist the index, replacing what is on disk
    pub fn write_updates(&mut self) -> anyhow::Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let mut index_file = std::fs::OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(self.path())?;
        let mut lock = file_guard::lock(&mut index_file, file_guard::Lock::Exclusive, 0, 1)?;

        let mut writer = IndexStream::new(lock.deref_mut());

        self.header = IndexHeader {
            additions_count: self.staged_add.len() as u32,
            removals_count: self.staged_remove.len() as u32,
            ..self.header.clone()
        };
        writer.write(&self.header.serialize()?)?;

        for (name, oid) in &self.staged_add {
            writer.write_oid(oid)?;
            writer.write_name(name)?;
        }
        for name in &self.staged_remove {
            writer.write_name(name)?;
        }

        writer.finish()?;
        self.changed = false;
        debug!(
            "wrote index with {} staged and {} removed",
            self.staged_add.len(),
            self.staged_remove.len()
        );

        Ok(())
    }
}
