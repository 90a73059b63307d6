use crate::common::command::{init_repository_dir, twig_add};
use assert_fs::TempDir;
use predicates::prelude::*;
use rstest::rstest;

#[rstest]
fn add_missing_file(init_repository_dir: TempDir) {
    twig_add(init_repository_dir.path(), "missing.txt")
        .assert()
        .failure()
        .stderr(predicate::str::contains("File does not exist."));
}
