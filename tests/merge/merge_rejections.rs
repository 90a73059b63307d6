use crate::common::command::{commit_file, init_repository_dir, run_twig_command, twig_add};
use crate::common::file::{FileSpec, write_file};
use crate::common::read_file;
use assert_fs::TempDir;
use predicates::prelude::*;
use rstest::rstest;

#[rstest]
#[case("master", "Cannot merge a branch with itself.")]
#[case("ghost", "A branch with that name does not exist.")]
fn merge_rejects_bad_branches(
    init_repository_dir: TempDir,
    #[case] branch: &str,
    #[case] message: &str,
) {
    run_twig_command(init_repository_dir.path(), &["merge", branch])
        .assert()
        .failure()
        .stderr(predicate::str::contains(message));
}

#[rstest]
fn merge_with_staged_changes_fails(init_repository_dir: TempDir) {
    let dir = init_repository_dir.path();
    run_twig_command(dir, &["branch", "other"])
        .assert()
        .success();
    write_file(FileSpec::new(dir.join("1.txt"), "pending\n".to_string()));
    twig_add(dir, "1.txt").assert().success();

    run_twig_command(dir, &["merge", "other"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("You have uncommitted changes."));
}

#[rstest]
fn untracked_file_in_the_way_blocks_merge(init_repository_dir: TempDir) {
    let dir = init_repository_dir.path();
    run_twig_command(dir, &["branch", "other"])
        .assert()
        .success();
    commit_file(dir, "m.txt", "master\n", "master adds m");
    run_twig_command(dir, &["checkout", "other"])
        .assert()
        .success();
    commit_file(dir, "o.txt", "other\n", "other adds o");
    run_twig_command(dir, &["checkout", "master"])
        .assert()
        .success();

    write_file(FileSpec::new(dir.join("o.txt"), "mine\n".to_string()));

    run_twig_command(dir, &["merge", "other"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("There is an untracked file in the way"));

    assert_eq!(read_file(&dir.join("o.txt")), "mine\n");
}
