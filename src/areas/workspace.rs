use crate::areas::repository::REPOSITORY_DIR;
use crate::artifacts::checkout::migration::Migration;
use crate::artifacts::objects::blob::Blob;
use crate::errors::TwigError;
use anyhow::Context;
use bytes::Bytes;
use log::debug;
use std::collections::BTreeSet;
use std::io::Write;
use std::path::{Component, Path};
use walkdir::WalkDir;

#[derive(Debug)]
pub struct Workspace {
    path: Box<Path>,
}

impl Workspace {
    pub fn new(path: Box<Path>) -> Self {
        Workspace { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Turn a user-supplied path into the name the repository tracks it by
    ///
    /// Names are relative to the working root and always use `/`. Paths that
    /// climb out of the working root or start at the filesystem root are
    /// rejected with `NoSuchFile`.
    pub fn normalize_name(name: &str) -> anyhow::Result<String> {
        let mut parts = Vec::new();
        for component in Path::new(name).components() {
            match component {
                Component::Normal(part) => parts.push(part.to_string_lossy().into_owned()),
                Component::CurDir => {}
                Component::ParentDir | Component::RootDir | Component::Prefix(_) => {
                    return Err(TwigError::NoSuchFile(name.to_string()).into());
                }
            }
        }

        Ok(parts.join("/"))
    }

    fn relative_name(&self, path: &Path) -> Option<String> {
        let relative_path = path.strip_prefix(&self.path).ok()?;

        Some(
            relative_path
                .components()
                .map(|component| component.as_os_str().to_string_lossy())
                .collect::<Vec<_>>()
                .join("/"),
        )
    }

    pub fn file_exists(&self, name: &str) -> bool {
        self.path.join(name).is_file()
    }

    /// Whether anything (file, directory or link) sits at `name`
    pub fn path_exists(&self, name: &str) -> bool {
        self.path.join(name).symlink_metadata().is_ok()
    }

    pub fn dir_exists(&self, name: &str) -> bool {
        self.path
            .join(name)
            .symlink_metadata()
            .is_ok_and(|metadata| metadata.is_dir())
    }

    pub fn read_file(&self, name: &str) -> anyhow::Result<Bytes> {
        let file_path = self.path.join(name);

        let content = std::fs::read(&file_path)
            .with_context(|| format!("Failed to read file: {file_path:?}"))?;

        Ok(content.into())
    }

    /// Snapshot the current contents of `name`
    pub fn parse_blob(&self, name: &str) -> anyhow::Result<Blob> {
        Ok(Blob::new(name.to_string(), self.read_file(name)?))
    }

    pub fn write_file(&self, name: &str, content: &[u8]) -> anyhow::Result<()> {
        let file_path = self.path.join(name);

        if let Some(parent) = file_path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory: {parent:?}"))?;
        }
        if self.dir_exists(name) {
            self.remove_empty_dirs(&file_path)?;
        }

        let mut file = std::fs::OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(&file_path)
            .with_context(|| format!("Failed to open file: {name}"))?;

        file.write_all(content)
            .with_context(|| format!("Failed to write to file: {name}"))?;

        Ok(())
    }

    /// Delete `name` if present, along with directories it leaves empty
    pub fn remove_file(&self, name: &str) -> anyhow::Result<()> {
        let file_path = self.path.join(name);

        if file_path.is_file() {
            std::fs::remove_file(&file_path)
                .with_context(|| format!("Failed to remove file: {name}"))?;
        }

        let mut parent = file_path.parent();
        while let Some(dir) = parent
            && dir != self.path.as_ref()
            && dir.is_dir()
            && dir.read_dir()?.next().is_none()
        {
            std::fs::remove_dir(dir)?;
            parent = dir.parent();
        }

        Ok(())
    }

    /// Delete a directory tree that holds nothing but directories
    ///
    /// Fails on the first non-directory entry, so no file content is lost.
    fn remove_empty_dirs(&self, dir: &Path) -> anyhow::Result<()> {
        for entry in WalkDir::new(dir).contents_first(true) {
            let entry = entry?;
            if !entry.file_type().is_dir() {
                anyhow::bail!("Refusing to replace non-empty directory: {dir:?}");
            }
            std::fs::remove_dir(entry.path())
                .with_context(|| format!("Failed to remove directory: {:?}", entry.path()))?;
        }

        Ok(())
    }

    /// Names of every file in the working tree outside the repository directory
    pub fn list_files(&self) -> anyhow::Result<BTreeSet<String>> {
        Ok(self
            .files_under(&self.path)
            .into_iter()
            .filter(|name| self.file_exists(name))
            .collect())
    }

    /// Names of every non-directory entry below `name`
    pub fn list_files_in(&self, name: &str) -> BTreeSet<String> {
        self.files_under(&self.path.join(name))
    }

    fn files_under(&self, root: &Path) -> BTreeSet<String> {
        WalkDir::new(root)
            .min_depth(1)
            .into_iter()
            .filter_entry(|entry| entry.file_name() != REPOSITORY_DIR)
            .filter_map(|entry| entry.ok())
            .filter(|entry| !entry.file_type().is_dir())
            .filter_map(|entry| self.relative_name(entry.path()))
            .collect()
    }

    // Deletions go first so a file can be replaced by a directory of the same name.
    pub fn apply_migration(&self, migration: &Migration) -> anyhow::Result<()> {
        for name in migration.deletions() {
            self.remove_file(name)?;
        }

        for (name, oid) in migration.writes() {
            let content = migration.load_blob_content(oid)?;
            self.write_file(name, &content)?;
        }

        debug!(
            "migrated workspace: {} deleted, {} written",
            migration.deletions().len(),
            migration.writes().len()
        );

        Ok(())
    }
}
