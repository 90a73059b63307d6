use crate::areas::repository::Repository;
use crate::artifacts::objects::commit::Commit;
use crate::artifacts::objects::object_id::ObjectId;
use std::collections::{HashSet, VecDeque};

/// Breadth-first walk over every ancestor of a commit
///
/// Both the primary parent and the merge parent are followed, so lineage that
/// is only reachable through a merge is part of the walk. Each commit is
/// visited once, which keeps reconverging histories bounded.
pub struct AncestorWalk<ParentsLoaderFn>
where
    ParentsLoaderFn: Fn(&ObjectId) -> anyhow::Result<Vec<ObjectId>>,
{
    parents_loader: ParentsLoaderFn,
}

impl<ParentsLoaderFn> AncestorWalk<ParentsLoaderFn>
where
    ParentsLoaderFn: Fn(&ObjectId) -> anyhow::Result<Vec<ObjectId>>,
{
    pub fn new(parents_loader: ParentsLoaderFn) -> Self {
        Self { parents_loader }
    }

    /// Every ancestor of `start` with its distance in parent steps
    ///
    /// `start` itself comes first at distance 0. Since the walk is
    /// breadth-first, the recorded distance is the shortest one.
    pub fn distances(&self, start: &ObjectId) -> anyhow::Result<Vec<(ObjectId, usize)>> {
        let mut visited = HashSet::from([start.clone()]);
        let mut queue = VecDeque::from([(start.clone(), 0)]);
        let mut ancestors = Vec::new();

        while let Some((oid, distance)) = queue.pop_front() {
            for parent in (self.parents_loader)(&oid)? {
                if visited.insert(parent.clone()) {
                    queue.push_back((parent, distance + 1));
                }
            }
            ancestors.push((oid, distance));
        }

        Ok(ancestors)
    }

    /// Ancestor ids of `start`, nearest first
    pub fn chain(&self, start: &ObjectId) -> anyhow::Result<Vec<ObjectId>> {
        Ok(self
            .distances(start)?
            .into_iter()
            .map(|(oid, _)| oid)
            .collect())
    }
}

/// First-parent history, newest first
pub struct RevList<'r> {
    repository: &'r Repository,
    current_commit_oid: Option<ObjectId>,
}

impl<'r> RevList<'r> {
    pub fn new(repository: &'r Repository, start: ObjectId) -> Self {
        Self {
            repository,
            current_commit_oid: Some(start),
        }
    }
}

impl Iterator for RevList<'_> {
    type Item = anyhow::Result<(ObjectId, Commit)>;

    fn next(&mut self) -> Option<Self::Item> {
        let commit_oid = self.current_commit_oid.take()?;

        match self.repository.load_commit(&commit_oid) {
            Ok(commit) => {
                self.current_commit_oid = commit.parent().cloned();
                Some(Ok((commit_oid, commit)))
            }
            Err(err) => Some(Err(err)),
        }
    }
}
