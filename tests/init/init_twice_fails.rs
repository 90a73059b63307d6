use crate::common::command::{init_repository_dir, repository_dir, run_twig_command};
use assert_fs::TempDir;
use predicates::prelude::*;
use rstest::rstest;

#[rstest]
fn init_twice_fails(init_repository_dir: TempDir) {
    run_twig_command(init_repository_dir.path(), &["init"])
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "A twig version-control system already exists in the current directory.",
        ));
}

#[rstest]
fn commands_outside_a_repository_fail(repository_dir: TempDir) {
    run_twig_command(repository_dir.path(), &["status"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Not in an initialized twig directory."));
}
