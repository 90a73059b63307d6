use crate::areas::database::Database;
use crate::areas::index::Index;
use crate::areas::refs::Refs;
use crate::areas::workspace::Workspace;
use crate::artifacts::objects::OBJECT_ID_LENGTH;
use crate::artifacts::objects::commit::{Commit, FileMap};
use crate::artifacts::objects::object_id::ObjectId;
use crate::errors::TwigError;
use anyhow::Context;
use std::cell::{RefCell, RefMut};
use std::path::Path;

/// Name of the metadata directory at the working root
pub const REPOSITORY_DIR: &str = ".twig";

/// Handle on one repository: its keyspaces, refs, index and working tree
pub struct Repository {
    path: Box<Path>,
    writer: RefCell<Box<dyn std::io::Write>>,
    index: RefCell<Index>,
    blobs: Database,
    commits: Database,
    staging: Database,
    workspace: Workspace,
    refs: Refs,
}

impl Repository {
    pub fn new(path: &str, writer: Box<dyn std::io::Write>) -> anyhow::Result<Self> {
        let path = Path::new(path)
            .canonicalize()
            .with_context(|| format!("Unable to resolve working directory {path}"))?;
        let twig_path = path.join(REPOSITORY_DIR);
        let objects_path = twig_path.join("objects");

        Ok(Repository {
            writer: RefCell::new(writer),
            index: RefCell::new(Index::new(twig_path.join("index").into_boxed_path())),
            blobs: Database::new(objects_path.join("blobs").into_boxed_path()),
            commits: Database::new(objects_path.join("commits").into_boxed_path()),
            staging: Database::new(twig_path.join("staging").into_boxed_path()),
            workspace: Workspace::new(path.clone().into_boxed_path()),
            refs: Refs::new(twig_path.into_boxed_path()),
            path: path.into_boxed_path(),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn twig_path(&self) -> Box<Path> {
        self.path.join(REPOSITORY_DIR).into_boxed_path()
    }

    pub fn is_initialized(&self) -> bool {
        self.twig_path().is_dir()
    }

    pub fn writer(&'_ self) -> RefMut<'_, Box<dyn std::io::Write>> {
        self.writer.borrow_mut()
    }

    pub fn index(&'_ self) -> RefMut<'_, Index> {
        self.index.borrow_mut()
    }

    /// Permanent blobs referenced by commits
    pub fn blobs(&self) -> &Database {
        &self.blobs
    }

    pub fn commits(&self) -> &Database {
        &self.commits
    }

    /// Blobs staged since the last commit
    pub fn staging(&self) -> &Database {
        &self.staging
    }

    pub fn workspace(&self) -> &Workspace {
        &self.workspace
    }

    pub fn refs(&self) -> &Refs {
        &self.refs
    }

    /// Fail unless `init` has run, then load the staging index from disk
    pub fn load(&self) -> anyhow::Result<()> {
        if !self.is_initialized() {
            return Err(TwigError::NotInitialized.into());
        }

        self.index().rehydrate()
    }

    pub fn load_commit(&self, oid: &ObjectId) -> anyhow::Result<Commit> {
        if !self.commits.contains(oid) {
            return Err(TwigError::CommitNotFound(oid.to_string()).into());
        }

        self.commits.parse_object_as_commit(oid)
    }

    /// Resolve a full or abbreviated commit id
    ///
    /// Abbreviations must match exactly one stored commit.
    pub fn resolve_commit_id(&self, id_or_prefix: &str) -> anyhow::Result<ObjectId> {
        let not_found = || TwigError::CommitNotFound(id_or_prefix.to_string());

        if id_or_prefix.len() == OBJECT_ID_LENGTH {
            let oid = ObjectId::try_parse(id_or_prefix.to_string()).map_err(|_| not_found())?;
            return if self.commits.contains(&oid) {
                Ok(oid)
            } else {
                Err(not_found().into())
            };
        }

        if id_or_prefix.is_empty() {
            return Err(not_found().into());
        }

        match self.commits.find_objects_by_prefix(id_or_prefix)?.as_slice() {
            [oid] => Ok(oid.clone()),
            _ => Err(not_found().into()),
        }
    }

    pub fn lookup_commit(&self, id_or_prefix: &str) -> anyhow::Result<(ObjectId, Commit)> {
        let oid = self.resolve_commit_id(id_or_prefix)?;
        let commit = self.load_commit(&oid)?;

        Ok((oid, commit))
    }

    pub fn head_oid(&self) -> anyhow::Result<ObjectId> {
        let branch = self.refs.current_branch()?;

        self.refs
            .read_branch(&branch)?
            .ok_or_else(|| TwigError::BranchNotFound(branch.to_string()).into())
    }

    pub fn head_commit(&self) -> anyhow::Result<(ObjectId, Commit)> {
        let oid = self.head_oid()?;
        let commit = self.load_commit(&oid)?;

        Ok((oid, commit))
    }

    /// Files tracked as of HEAD
    pub fn tracked_files(&self) -> anyhow::Result<FileMap> {
        Ok(self.head_commit()?.1.files().clone())
    }
}
