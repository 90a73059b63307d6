use crate::common::command::{commit_file, head_commit_id, init_repository_dir, run_twig_command};
use crate::common::file::{FileSpec, write_file};
use crate::common::read_file;
use assert_fs::TempDir;
use assert_fs::prelude::*;
use predicates::prelude::*;
use rstest::rstest;

#[rstest]
fn reset_moves_the_current_branch(init_repository_dir: TempDir) {
    let dir = init_repository_dir.path();
    let first = head_commit_id(dir);
    commit_file(dir, "1.txt", "one, revised\n", "revise one");
    commit_file(dir, "3.txt", "three\n", "add three");

    run_twig_command(dir, &["reset", &first[..10]])
        .assert()
        .success();

    assert_eq!(head_commit_id(dir), first);
    assert_eq!(read_file(&dir.join("1.txt")), "one\n");
    init_repository_dir
        .child("3.txt")
        .assert(predicate::path::missing());
    init_repository_dir
        .child(".twig/HEAD")
        .assert(predicate::str::contains("refs/heads/master"));
}

#[rstest]
fn reset_discards_staged_changes(init_repository_dir: TempDir) {
    let dir = init_repository_dir.path();
    let first = head_commit_id(dir);
    write_file(FileSpec::new(dir.join("1.txt"), "pending\n".to_string()));
    run_twig_command(dir, &["add", "1.txt"]).assert().success();

    run_twig_command(dir, &["reset", &first]).assert().success();

    assert_eq!(read_file(&dir.join("1.txt")), "one\n");
    run_twig_command(dir, &["status"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "=== Staged Files ===\n\n=== Removed Files ===\n\n",
        ));
}

#[rstest]
fn reset_is_blocked_by_untracked_files(init_repository_dir: TempDir) {
    let dir = init_repository_dir.path();
    let first = head_commit_id(dir);
    run_twig_command(dir, &["rm", "1.txt"]).assert().success();
    run_twig_command(dir, &["commit", "-m", "drop one"])
        .assert()
        .success();
    let dropped = head_commit_id(dir);

    // the first commit tracks 1.txt, so resetting would clobber it
    write_file(FileSpec::new(dir.join("1.txt"), "local\n".to_string()));

    run_twig_command(dir, &["reset", &first])
        .assert()
        .failure()
        .stderr(predicate::str::contains("There is an untracked file in the way"));

    assert_eq!(head_commit_id(dir), dropped);
    assert_eq!(read_file(&dir.join("1.txt")), "local\n");
}

#[rstest]
fn reset_to_an_unknown_commit_fails(init_repository_dir: TempDir) {
    run_twig_command(init_repository_dir.path(), &["reset", "0000000"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("No commit with that id exists."));
}
