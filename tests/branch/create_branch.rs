use crate::common::command::{head_commit_id, init_repository_dir, run_twig_command};
use assert_fs::TempDir;
use assert_fs::prelude::*;
use predicates::prelude::*;
use rstest::rstest;

#[rstest]
fn new_branch_points_at_head_without_switching(init_repository_dir: TempDir) {
    let dir = init_repository_dir.path();

    run_twig_command(dir, &["branch", "feature"])
        .assert()
        .success();

    init_repository_dir
        .child(".twig/refs/heads/feature")
        .assert(predicate::str::contains(head_commit_id(dir)));
    run_twig_command(dir, &["status"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with(
            "=== Branches ===\nfeature\n*master\n",
        ));
}

#[rstest]
fn existing_branch_cannot_be_created_again(init_repository_dir: TempDir) {
    run_twig_command(init_repository_dir.path(), &["branch", "master"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("A branch with that name already exists."));
}

#[rstest]
#[case("has space")]
#[case("double..dot")]
#[case("ends.lock")]
fn invalid_branch_names_are_rejected(init_repository_dir: TempDir, #[case] name: &str) {
    run_twig_command(init_repository_dir.path(), &["branch", name])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid branch name"));
}
