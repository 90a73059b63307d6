//! Split point finder for merges
//!
//! The split point of two commits is the common ancestor that is the fewest
//! parent steps away from both of them.
//!
//! ## Algorithm
//!
//! 1. Walk every ancestor of the HEAD commit breadth-first, following both the
//!    primary and the merge parent, and record its shortest distance.
//! 2. Do the same for the other commit.
//! 3. Among the commits visited from both sides pick the one with the smallest
//!    total distance. Ties go to the commit nearer to HEAD, then to the one the
//!    HEAD walk discovered first.
//!
//! In a history without criss-cross merges this is the nearest commit present in
//! both ancestor lists. With criss-cross merges several common ancestors can be
//! equally near, and the tie-break keeps the result deterministic.
//!
//! ## Debug Logging
//!
//! Build with `--features debug_merge` to trace the visit states through
//! `log::trace!`.

use crate::artifacts::log::rev_list::AncestorWalk;
use crate::artifacts::objects::object_id::ObjectId;
use bitflags::bitflags;
use std::collections::HashMap;
use std::fmt;

/// Macro for trace logging that is compiled in with the debug_merge feature flag
macro_rules! debug_log {
    ($($arg:tt)*) => {
        #[cfg(feature = "debug_merge")]
        {
            log::trace!($($arg)*);
        }
    };
}

bitflags! {
    #[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
    struct VisitState: u8 {
        const NONE = 0b00;
        const VISITED_FROM_HEAD = 0b01;
        const VISITED_FROM_OTHER = 0b10;
        const VISITED_FROM_BOTH = Self::VISITED_FROM_HEAD.bits() | Self::VISITED_FROM_OTHER.bits();
    }
}

impl fmt::Debug for VisitState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut flags = Vec::new();
        if self.contains(VisitState::VISITED_FROM_HEAD) {
            flags.push("HEAD");
        }
        if self.contains(VisitState::VISITED_FROM_OTHER) {
            flags.push("OTHER");
        }
        if flags.is_empty() {
            write!(f, "NONE")
        } else {
            write!(f, "{}", flags.join("|"))
        }
    }
}

/// Distances of one ancestor from both tips
#[derive(Debug, Clone, Copy, Default)]
struct Reach {
    state: VisitState,
    from_head: usize,
    from_other: usize,
}

impl Reach {
    fn total(&self) -> usize {
        self.from_head + self.from_other
    }
}

/// Finds the split point of two commits
///
/// Takes a function returning the parents of a commit, so it works against
/// the on-disk commit keyspace as well as an in-memory graph.
pub struct BCAFinder<ParentsLoaderFn>
where
    ParentsLoaderFn: Fn(&ObjectId) -> anyhow::Result<Vec<ObjectId>>,
{
    walk: AncestorWalk<ParentsLoaderFn>,
}

impl<ParentsLoaderFn> BCAFinder<ParentsLoaderFn>
where
    ParentsLoaderFn: Fn(&ObjectId) -> anyhow::Result<Vec<ObjectId>>,
{
    pub fn new(parents_loader: ParentsLoaderFn) -> Self {
        Self {
            walk: AncestorWalk::new(parents_loader),
        }
    }

    /// Split point of `head` and `other`, or `None` if they share no history
    pub fn find_split_point(
        &self,
        head: &ObjectId,
        other: &ObjectId,
    ) -> anyhow::Result<Option<ObjectId>> {
        if head == other {
            return Ok(Some(head.clone()));
        }

        let head_ancestors = self.walk.distances(head)?;
        let other_ancestors = self.walk.distances(other)?;

        let mut reaches = HashMap::<ObjectId, Reach>::new();
        for (oid, distance) in &head_ancestors {
            let reach = reaches.entry(oid.clone()).or_default();
            reach.state |= VisitState::VISITED_FROM_HEAD;
            reach.from_head = *distance;
        }
        for (oid, distance) in &other_ancestors {
            let reach = reaches.entry(oid.clone()).or_default();
            reach.state |= VisitState::VISITED_FROM_OTHER;
            reach.from_other = *distance;
        }

        debug_log!("=== split point of {head} and {other} ===");

        // head order keeps "first discovered" as the last tie-break
        let split_point = head_ancestors
            .iter()
            .filter_map(|(oid, _)| {
                let reach = reaches.get(oid)?;
                reach
                    .state
                    .contains(VisitState::VISITED_FROM_BOTH)
                    .then_some((oid, *reach))
            })
            .inspect(|(_oid, _reach)| {
                debug_log!(
                    "  common ancestor {} [{:?}] head={} other={}",
                    _oid.to_short_oid(),
                    _reach.state,
                    _reach.from_head,
                    _reach.from_other
                );
            })
            .min_by_key(|(_, reach)| (reach.total(), reach.from_head))
            .map(|(oid, _)| oid.clone());

        debug_log!("  split point: {split_point:?}");

        Ok(split_point)
    }
}
