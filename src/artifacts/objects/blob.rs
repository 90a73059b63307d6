//! Blob object
//!
//! A blob is the snapshot of a single file taken when it is staged. Unlike git,
//! the file name is part of the blob, so two files with identical contents but
//! different names are different objects.
//!
//! ## Format
//!
//! On disk: `blob <size>\0<path>\0<content>`

use crate::artifacts::objects::object::{Object, Packable, Unpackable, frame_object};
use crate::artifacts::objects::object_type::ObjectType;
use anyhow::Context;
use bytes::Bytes;
use derive_new::new;
use std::io::{BufRead, Write};

/// Snapshot of one file's name and contents
#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct Blob {
    /// Name of the file relative to the repository root
    path: String,
    /// Raw file contents
    content: Bytes,
}

impl Blob {
    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn content(&self) -> &Bytes {
        &self.content
    }
}

impl Packable for Blob {
    fn serialize(&self) -> anyhow::Result<Bytes> {
        let mut body = Vec::with_capacity(self.path.len() + 1 + self.content.len());
        body.write_all(self.path.as_bytes())?;
        body.write_all(b"\0")?;
        body.write_all(&self.content)?;

        frame_object(&self.object_type(), &body)
    }
}

impl Unpackable for Blob {
    fn deserialize(mut reader: impl BufRead) -> anyhow::Result<Self> {
        // the header has already been read
        let mut path = Vec::new();
        reader.read_until(b'\0', &mut path)?;
        if path.pop() != Some(b'\0') {
            anyhow::bail!("Invalid blob object: missing path terminator");
        }
        let path = String::from_utf8(path).context("Invalid blob object: path is not utf-8")?;

        let mut content = Vec::new();
        reader.read_to_end(&mut content)?;

        Ok(Self::new(path, Bytes::from(content)))
    }
}

impl Object for Blob {
    fn object_type(&self) -> ObjectType {
        ObjectType::Blob
    }
}
