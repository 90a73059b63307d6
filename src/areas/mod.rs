//! Core repository components
//!
//! - `database`: content-addressed keyspaces for blobs, commits and staged blobs
//! - `index`: staging area of pending additions and removals
//! - `refs`: branch references and HEAD
//! - `repository`: the handle tying everything together
//! - `workspace`: working directory file system operations

pub mod database;
pub mod index;
pub mod refs;
pub mod repository;
pub mod workspace;
