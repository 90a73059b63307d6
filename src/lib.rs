//! twig: a local, single-user version-control engine
//!
//! - `areas`: on-disk state (object keyspaces, index, refs, working tree) and
//!   the `Repository` handle that owns it
//! - `artifacts`: object formats and the algorithms built on them
//! - `commands`: one `impl Repository` block per user-facing command
//! - `errors`: the precondition failures commands report

pub mod areas;
pub mod artifacts;
pub mod commands;
pub mod errors;
