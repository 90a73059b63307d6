#![allow(dead_code)]

pub mod command;
pub mod file;

/// Content of a file as stored in the working tree, for comparisons
pub fn read_file(path: &std::path::Path) -> String {
    std::fs::read_to_string(path)
        .unwrap_or_else(|e| panic!("Failed to read file {:?}: {}", path, e))
}
