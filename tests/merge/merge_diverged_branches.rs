use crate::common::command::{commit_file, head_commit_id, init_repository_dir, run_twig_command};
use crate::common::read_file;
use assert_fs::TempDir;
use assert_fs::prelude::*;
use predicates::prelude::*;
use rstest::rstest;
use std::path::Path;

/// Split at the fixture commit; both sides edit 1.txt, only other edits a/2.txt
fn diverge(dir: &Path) {
    run_twig_command(dir, &["branch", "other"])
        .assert()
        .success();
    commit_file(dir, "1.txt", "one on master\n", "master edits one");

    run_twig_command(dir, &["checkout", "other"])
        .assert()
        .success();
    commit_file(dir, "1.txt", "one on other\n", "other edits one");
    commit_file(dir, "a/2.txt", "two on other\n", "other edits two");
    commit_file(dir, "o.txt", "new on other\n", "other adds o");

    run_twig_command(dir, &["checkout", "master"])
        .assert()
        .success();
}

#[rstest]
fn conflicting_edits_are_recorded_in_a_merge_commit(init_repository_dir: TempDir) {
    let dir = init_repository_dir.path();
    diverge(dir);
    let master_tip = head_commit_id(dir);

    run_twig_command(dir, &["merge", "other"])
        .assert()
        .success()
        .stdout("Encountered a merge conflict.\n");

    assert_eq!(
        read_file(&dir.join("1.txt")),
        "<<<<<<< HEAD\none on master\n=======\none on other\n>>>>>>>\n"
    );
    assert_eq!(read_file(&dir.join("a/2.txt")), "two on other\n");
    assert_eq!(read_file(&dir.join("o.txt")), "new on other\n");

    let merge_commit = head_commit_id(dir);
    assert_ne!(merge_commit, master_tip);
    run_twig_command(dir, &["log"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with(format!(
            "===\ncommit {merge_commit}\nMerge: {} ",
            &master_tip[..7]
        )))
        .stdout(predicate::str::contains("Merged other into master.\n"));

    run_twig_command(dir, &["status"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "=== Staged Files ===\n\n=== Removed Files ===\n\n=== Modifications Not Staged For Commit ===\n\n=== Untracked Files ===\n\n",
        ));
}

#[rstest]
fn files_deleted_on_the_other_branch_are_removed(init_repository_dir: TempDir) {
    let dir = init_repository_dir.path();
    run_twig_command(dir, &["branch", "other"])
        .assert()
        .success();
    commit_file(dir, "m.txt", "master only\n", "master adds m");

    run_twig_command(dir, &["checkout", "other"])
        .assert()
        .success();
    run_twig_command(dir, &["rm", "a/2.txt"]).assert().success();
    run_twig_command(dir, &["commit", "-m", "other drops two"])
        .assert()
        .success();

    run_twig_command(dir, &["checkout", "master"])
        .assert()
        .success();
    run_twig_command(dir, &["merge", "other"])
        .assert()
        .success()
        .stdout("");

    init_repository_dir
        .child("a/2.txt")
        .assert(predicate::path::missing());
    assert_eq!(read_file(&dir.join("m.txt")), "master only\n");
    assert_eq!(read_file(&dir.join("1.txt")), "one\n");
}
