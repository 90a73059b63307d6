use crate::common::command::{
    commit_file, head_commit_id, init_repository_dir, run_twig_command, twig_commit,
};
use assert_fs::TempDir;
use assert_fs::prelude::*;
use predicates::prelude::*;
use rstest::rstest;

#[rstest]
fn commit_advances_the_current_branch(init_repository_dir: TempDir) {
    let dir = init_repository_dir.path();
    let head_before = head_commit_id(dir);

    commit_file(dir, "3.txt", "three\n", "add three");

    let head_after = head_commit_id(dir);
    assert_ne!(head_after, head_before);
    assert_eq!(head_after.len(), 40);

    run_twig_command(dir, &["log"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with(format!(
            "===\ncommit {head_after}\nDate: Mon Jan 1 12:00:00 2024 +0000\nadd three\n"
        )));
}

#[rstest]
fn removed_files_are_dropped_from_the_next_commit(init_repository_dir: TempDir) {
    let dir = init_repository_dir.path();

    run_twig_command(dir, &["rm", "1.txt"]).assert().success();
    init_repository_dir
        .child("1.txt")
        .assert(predicate::path::missing());

    twig_commit(dir, "remove one").assert().success();

    run_twig_command(dir, &["checkout", "--", "1.txt"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("File does not exist in that commit."));
}

#[rstest]
fn commit_clears_the_staging_area(init_repository_dir: TempDir) {
    let dir = init_repository_dir.path();
    commit_file(dir, "3.txt", "three\n", "add three");

    run_twig_command(dir, &["status"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "=== Staged Files ===\n\n=== Removed Files ===\n\n",
        ));
}

#[rstest]
fn rm_of_an_unknown_file_fails(init_repository_dir: TempDir) {
    run_twig_command(init_repository_dir.path(), &["rm", "ghost.txt"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("No reason to remove the file."));
}
