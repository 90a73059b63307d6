use crate::common::command::{commit_file, head_commit_id, init_repository_dir, run_twig_command};
use assert_fs::TempDir;
use predicates::prelude::*;
use rstest::rstest;

#[rstest]
fn find_prints_every_commit_with_the_message(init_repository_dir: TempDir) {
    let dir = init_repository_dir.path();
    commit_file(dir, "1.txt", "v2\n", "tweak");
    let first_tweak = head_commit_id(dir);
    commit_file(dir, "1.txt", "v3\n", "tweak");
    let second_tweak = head_commit_id(dir);

    run_twig_command(dir, &["find", "tweak"])
        .assert()
        .success()
        .stdout(predicate::str::contains(format!("{first_tweak}\n")))
        .stdout(predicate::str::contains(format!("{second_tweak}\n")));
}

#[rstest]
fn find_without_matches_fails(init_repository_dir: TempDir) {
    run_twig_command(init_repository_dir.path(), &["find", "no such message"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Found no commit with that message."));
}
