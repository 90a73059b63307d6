use crate::common::command::{commit_file, head_commit_id, init_repository_dir, run_twig_command};
use assert_fs::TempDir;
use predicates::prelude::*;
use rstest::rstest;

#[rstest]
fn log_walks_first_parents_to_the_root(init_repository_dir: TempDir) {
    let dir = init_repository_dir.path();
    commit_file(dir, "3.txt", "three\n", "add three");
    let tip = head_commit_id(dir);

    let output = run_twig_command(dir, &["log"]).output().unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();

    let messages = stdout
        .split("===\n")
        .filter(|entry| !entry.is_empty())
        .map(|entry| entry.lines().nth(2).unwrap().to_string())
        .collect::<Vec<_>>();
    assert_eq!(messages, vec!["add three", "first commit", "initial commit"]);
    assert!(stdout.starts_with(&format!("===\ncommit {tip}\n")));
}

#[rstest]
fn global_log_includes_other_branches(init_repository_dir: TempDir) {
    let dir = init_repository_dir.path();
    run_twig_command(dir, &["branch", "side"])
        .assert()
        .success();
    run_twig_command(dir, &["checkout", "side"])
        .assert()
        .success();
    commit_file(dir, "side.txt", "side\n", "side work");
    run_twig_command(dir, &["checkout", "master"])
        .assert()
        .success();

    run_twig_command(dir, &["log"])
        .assert()
        .success()
        .stdout(predicate::str::contains("side work").not());
    run_twig_command(dir, &["global-log"])
        .assert()
        .success()
        .stdout(predicate::str::contains("side work\n"))
        .stdout(predicate::str::contains("first commit\n"))
        .stdout(predicate::str::contains("initial commit\n"));
}
