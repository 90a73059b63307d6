//! Checksummed access to the index file
//!
//! Every byte that goes through an `IndexStream` is fed into a running SHA-1,
//! so the trailer can be written or checked once the entries are done.

use crate::artifacts::index::{CHECKSUM_SIZE, MAX_NAME_SIZE};
use crate::artifacts::objects::object_id::ObjectId;
use anyhow::{Context, anyhow};
use byteorder::{ByteOrder, NetworkEndian, WriteBytesExt};
use bytes::Bytes;
use sha1::{Digest, Sha1};
use std::io::{Read, Write};

/// Size of a binary object id in an index entry
pub const OID_SIZE: usize = 20;

#[derive(Debug)]
pub struct IndexStream<S> {
    inner: S,
    digest: Sha1,
}

impl<S> IndexStream<S> {
    pub fn new(inner: S) -> Self {
        IndexStream {
            inner,
            digest: Sha1::new(),
        }
    }
}

impl<S: Read> IndexStream<S> {
    pub fn read(&mut self, size: usize) -> anyhow::Result<Bytes> {
        let mut buffer = vec![0; size];
        self.inner
            .read_exact(&mut buffer)
            .context("index ended in the middle of an entry")?;

        self.digest.update(&buffer);
        Ok(Bytes::from(buffer))
    }

    pub fn read_oid(&mut self) -> anyhow::Result<ObjectId> {
        let oid_bytes = self.read(OID_SIZE)?;
        ObjectId::read_h40_from(&mut &oid_bytes[..])
    }

    /// A `u16` length followed by that many bytes of UTF-8
    pub fn read_name(&mut self) -> anyhow::Result<String> {
        let name_size = NetworkEndian::read_u16(&self.read(2)?) as usize;
        let name = self.read(name_size)?;

        String::from_utf8(name.to_vec()).map_err(|_| anyhow!("Invalid file name in index"))
    }

    /// Compare the stored trailer with the digest of everything read so far
    pub fn verify(&mut self) -> anyhow::Result<()> {
        let mut stored = [0u8; CHECKSUM_SIZE];
        self.inner
            .read_exact(&mut stored)
            .context("index is missing its checksum")?;

        if stored != self.digest.clone().finalize().as_slice() {
            return Err(anyhow!("Index checksum does not match its contents"));
        }

        Ok(())
    }
}

impl<S: Write> IndexStream<S> {
    pub fn write(&mut self, data: &[u8]) -> anyhow::Result<()> {
        self.inner.write_all(data)?;
        self.digest.update(data);
        Ok(())
    }

    pub fn write_oid(&mut self, oid: &ObjectId) -> anyhow::Result<()> {
        let mut oid_bytes = Vec::with_capacity(OID_SIZE);
        oid.write_h40_to(&mut oid_bytes)?;
        self.write(&oid_bytes)
    }

    pub fn write_name(&mut self, name: &str) -> anyhow::Result<()> {
        if name.len() > MAX_NAME_SIZE {
            return Err(anyhow!("File name too long for the index: {name}"));
        }

        let mut name_bytes = Vec::with_capacity(2 + name.len());
        name_bytes.write_u16::<NetworkEndian>(name.len() as u16)?;
        name_bytes.extend_from_slice(name.as_bytes());
        self.write(&name_bytes)
    }

    /// Append the SHA-1 of everything written so far
    pub fn finish(mut self) -> anyhow::Result<()> {
        let checksum = self.digest.clone().finalize();
        self.inner
            .write_all(checksum.as_slice())
            .context("Failed to write the index checksum")?;

        Ok(())
    }
}
