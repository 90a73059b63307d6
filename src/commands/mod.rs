//! Command implementations
//!
//! Every command is an `impl Repository` block in `porcelain`, so the CLI in
//! `main.rs` only parses arguments and forwards them.

pub mod porcelain;
