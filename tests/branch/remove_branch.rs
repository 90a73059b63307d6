use crate::common::command::{init_repository_dir, run_twig_command};
use assert_fs::TempDir;
use assert_fs::prelude::*;
use predicates::prelude::*;
use rstest::rstest;

#[rstest]
fn rm_branch_deletes_only_the_pointer(init_repository_dir: TempDir) {
    let dir = init_repository_dir.path();
    run_twig_command(dir, &["branch", "feature"])
        .assert()
        .success();

    run_twig_command(dir, &["rm-branch", "feature"])
        .assert()
        .success();

    init_repository_dir
        .child(".twig/refs/heads/feature")
        .assert(predicate::path::missing());
    // history stays reachable from master
    run_twig_command(dir, &["find", "first commit"])
        .assert()
        .success();
}

#[rstest]
#[case("master", "Cannot remove the current branch.")]
#[case("ghost", "A branch with that name does not exist.")]
fn rm_branch_rejections(
    init_repository_dir: TempDir,
    #[case] branch: &str,
    #[case] message: &str,
) {
    run_twig_command(init_repository_dir.path(), &["rm-branch", branch])
        .assert()
        .failure()
        .stderr(predicate::str::contains(message));
}
