//! Commit object
//!
//! A commit is an immutable node of the history DAG. It records the full set of
//! tracked files (name → blob id) rather than a tree, the branch it was created
//! on, and up to two parents: the primary `parent` chain and, for merge
//! commits, a separately recorded `merge` parent.
//!
//! ## Format
//!
//! On disk:
//! ```text
//! commit <size>\0
//! timestamp <unix-seconds> <+hhmm>
//! branch <name>
//! parent <parent-sha>            (absent for the root commit)
//! merge <merge-parent-sha>       (merge commits only)
//! file <blob-sha> <file-name>    (one per tracked file, sorted by name)
//!
//! <commit message>
//! ```

use crate::artifacts::objects::object::{Object, Packable, Unpackable, frame_object};
use crate::artifacts::objects::object_id::ObjectId;
use crate::artifacts::objects::object_type::ObjectType;
use anyhow::Context;
use bytes::Bytes;
use chrono::{DateTime, FixedOffset, Timelike};
use std::collections::BTreeMap;
use std::io::BufRead;

/// Environment variable used to pin commit timestamps
pub const COMMIT_DATE_ENV: &str = "TWIG_COMMIT_DATE";

/// Message of the commit created by `init`
pub const ROOT_COMMIT_MESSAGE: &str = "initial commit";

/// Mapping from tracked file name to the blob holding its contents
pub type FileMap = BTreeMap<String, ObjectId>;

/// Immutable snapshot of the tracked file set plus history metadata
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Commit {
    timestamp: DateTime<FixedOffset>,
    message: String,
    /// Branch that was checked out when the commit was made
    branch: String,
    files: FileMap,
    parent: Option<ObjectId>,
    merge_parent: Option<ObjectId>,
}

impl Commit {
    pub fn new(
        timestamp: DateTime<FixedOffset>,
        message: String,
        branch: String,
        files: FileMap,
        parent: Option<ObjectId>,
        merge_parent: Option<ObjectId>,
    ) -> Self {
        Commit {
            // only whole seconds survive serialization
            timestamp: timestamp.with_nanosecond(0).unwrap_or(timestamp),
            message,
            branch,
            files,
            parent,
            merge_parent,
        }
    }

    /// The parentless commit every repository starts from
    ///
    /// It is stamped with the Unix epoch, so every repository shares the same root.
    pub fn root(branch: String) -> Self {
        Self::new(
            DateTime::UNIX_EPOCH.fixed_offset(),
            ROOT_COMMIT_MESSAGE.to_string(),
            branch,
            FileMap::new(),
            None,
            None,
        )
    }

    /// Resolve the timestamp for a new commit
    ///
    /// Reads `TWIG_COMMIT_DATE` (`%Y-%m-%d %H:%M:%S %z` or RFC 2822) and falls
    /// back to the local clock when it is unset or unparsable.
    pub fn timestamp_from_env() -> DateTime<FixedOffset> {
        let pinned = std::env::var(COMMIT_DATE_ENV).ok().and_then(|date_str| {
            let parsed = DateTime::parse_from_rfc2822(&date_str)
                .or_else(|_| DateTime::parse_from_str(&date_str, "%Y-%m-%d %H:%M:%S %z"))
                .ok();
            if parsed.is_none() {
                log::warn!("ignoring unparsable {COMMIT_DATE_ENV}={date_str:?}");
            }
            parsed
        });

        pinned.unwrap_or_else(|| chrono::Local::now().fixed_offset())
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn branch(&self) -> &str {
        &self.branch
    }

    pub fn files(&self) -> &FileMap {
        &self.files
    }

    pub fn file(&self, name: &str) -> Option<&ObjectId> {
        self.files.get(name)
    }

    pub fn parent(&self) -> Option<&ObjectId> {
        self.parent.as_ref()
    }

    pub fn merge_parent(&self) -> Option<&ObjectId> {
        self.merge_parent.as_ref()
    }

    /// Primary parent first, then the merge parent
    pub fn parents(&self) -> impl Iterator<Item = &ObjectId> {
        self.parent.iter().chain(self.merge_parent.iter())
    }

    pub fn timestamp(&self) -> DateTime<FixedOffset> {
        self.timestamp
    }

    /// Format timestamp in human-readable form
    ///
    /// # Returns
    ///
    /// String like "Mon Jan 1 12:34:56 2024 +0000"
    pub fn readable_timestamp(&self) -> String {
        self.timestamp
            .format("%a %b %-d %H:%M:%S %Y %z")
            .to_string()
    }
}

impl Packable for Commit {
    fn serialize(&self) -> anyhow::Result<Bytes> {
        let mut object_content = vec![];

        object_content.push(format!(
            "timestamp {} {}",
            self.timestamp.timestamp(),
            self.timestamp.format("%z")
        ));
        object_content.push(format!("branch {}", self.branch));
        if let Some(parent) = &self.parent {
            object_content.push(format!("parent {parent}"));
        }
        if let Some(merge_parent) = &self.merge_parent {
            object_content.push(format!("merge {merge_parent}"));
        }
        for (name, oid) in &self.files {
            object_content.push(format!("file {oid} {name}"));
        }
        object_content.push(String::new());
        object_content.push(self.message.to_string());

        frame_object(&self.object_type(), object_content.join("\n").as_bytes())
    }
}

impl Unpackable for Commit {
    fn deserialize(mut reader: impl BufRead) -> anyhow::Result<Self> {
        let mut content = String::new();
        reader
            .read_to_string(&mut content)
            .context("Invalid commit object: content is not utf-8")?;

        let (headers, message) = content
            .split_once("\n\n")
            .context("Invalid commit object: missing message separator")?;

        let mut timestamp = None;
        let mut branch = None;
        let mut parent = None;
        let mut merge_parent = None;
        let mut files = FileMap::new();

        for line in headers.lines() {
            let (key, value) = line
                .split_once(' ')
                .with_context(|| format!("Invalid commit object: malformed line {line:?}"))?;

            match key {
                "timestamp" => timestamp = Some(parse_timestamp(value)?),
                "branch" => branch = Some(value.to_string()),
                "parent" => parent = Some(ObjectId::try_parse(value.to_string())?),
                "merge" => merge_parent = Some(ObjectId::try_parse(value.to_string())?),
                "file" => {
                    let (oid, name) = value
                        .split_once(' ')
                        .context("Invalid commit object: invalid file line")?;
                    files.insert(name.to_string(), ObjectId::try_parse(oid.to_string())?);
                }
                _ => anyhow::bail!("Invalid commit object: unknown header {key:?}"),
            }
        }

        Ok(Self::new(
            timestamp.context("Invalid commit object: missing timestamp line")?,
            message.to_string(),
            branch.context("Invalid commit object: missing branch line")?,
            files,
            parent,
            merge_parent,
        ))
    }
}

impl Object for Commit {
    fn object_type(&self) -> ObjectType {
        ObjectType::Commit
    }
}

/// Parse `<unix-seconds> <+hhmm>` back into a zoned timestamp
fn parse_timestamp(value: &str) -> anyhow::Result<DateTime<FixedOffset>> {
    let (seconds, offset) = value
        .split_once(' ')
        .context("Invalid commit object: invalid timestamp line")?;

    let seconds = seconds
        .parse::<i64>()
        .context("Invalid commit object: invalid timestamp")?;

    let (sign, digits) = match offset.split_at_checked(1) {
        Some(("+", digits)) => (1, digits),
        Some(("-", digits)) => (-1, digits),
        _ => anyhow::bail!("Invalid commit object: invalid timezone {offset:?}"),
    };
    if digits.len() != 4 {
        anyhow::bail!("Invalid commit object: invalid timezone {offset:?}");
    }
    let hours = digits[..2].parse::<i32>()?;
    let minutes = digits[2..].parse::<i32>()?;
    let offset = FixedOffset::east_opt(sign * (hours * 3600 + minutes * 60))
        .context("Invalid commit object: timezone out of range")?;

    let utc = DateTime::from_timestamp(seconds, 0)
        .context("Invalid commit object: timestamp out of range")?;

    Ok(utc.with_timezone(&offset))
}
