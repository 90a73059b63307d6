//! Three-way file resolution
//!
//! Every file name present in the split point, HEAD or the other commit is
//! classified by comparing its blob id in the three snapshots. Absence counts
//! as a state of its own, so a deletion is a modification.
//!
//! | split vs HEAD | split vs other | HEAD vs other | result        |
//! |---------------|----------------|---------------|---------------|
//! | same          | different      |               | take other    |
//! | different     | same           |               | keep HEAD     |
//! | different     | different      | same          | keep HEAD     |
//! | different     | different      | different     | conflict      |

use crate::artifacts::objects::commit::FileMap;
use crate::artifacts::objects::object_id::ObjectId;
use bytes::Bytes;
use std::collections::BTreeSet;

pub const CONFLICT_HEAD_MARKER: &str = "<<<<<<< HEAD\n";
pub const CONFLICT_SEPARATOR: &str = "=======\n";
pub const CONFLICT_END_MARKER: &str = ">>>>>>>\n";

/// What a merge does with one file name
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MergeAction {
    /// HEAD's state already is the merged state
    Keep,
    /// Check out and stage the other side's blob
    TakeOther(ObjectId),
    /// Delete the file and stage the removal
    RemoveOther,
    /// Both sides changed the file differently
    Conflict {
        head: Option<ObjectId>,
        other: Option<ObjectId>,
    },
}

pub fn classify(
    split: Option<&ObjectId>,
    head: Option<&ObjectId>,
    other: Option<&ObjectId>,
) -> MergeAction {
    if head == other || split == other {
        return MergeAction::Keep;
    }

    if split == head {
        return match other {
            Some(oid) => MergeAction::TakeOther(oid.clone()),
            None => MergeAction::RemoveOther,
        };
    }

    MergeAction::Conflict {
        head: head.cloned(),
        other: other.cloned(),
    }
}

/// Classify every file name of the three snapshots, in name order
pub fn resolve(split: &FileMap, head: &FileMap, other: &FileMap) -> Vec<(String, MergeAction)> {
    split
        .keys()
        .chain(head.keys())
        .chain(other.keys())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .map(|name| {
            let action = classify(split.get(name), head.get(name), other.get(name));
            (name.clone(), action)
        })
        .collect()
}

/// Contents written for a conflicted file; an absent side contributes nothing
pub fn conflict_block(head: &[u8], other: &[u8]) -> Bytes {
    let mut block = Vec::with_capacity(
        CONFLICT_HEAD_MARKER.len()
            + head.len()
            + CONFLICT_SEPARATOR.len()
            + other.len()
            + CONFLICT_END_MARKER.len(),
    );
    block.extend_from_slice(CONFLICT_HEAD_MARKER.as_bytes());
    block.extend_from_slice(head);
    block.extend_from_slice(CONFLICT_SEPARATOR.as_bytes());
    block.extend_from_slice(other);
    block.extend_from_slice(CONFLICT_END_MARKER.as_bytes());

    Bytes::from(block)
}
