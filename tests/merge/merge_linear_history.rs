use crate::common::command::{commit_file, head_commit_id, init_repository_dir, run_twig_command};
use crate::common::read_file;
use assert_fs::TempDir;
use rstest::rstest;

#[rstest]
fn merging_a_descendant_fast_forwards(init_repository_dir: TempDir) {
    let dir = init_repository_dir.path();
    run_twig_command(dir, &["branch", "feature"])
        .assert()
        .success();
    run_twig_command(dir, &["checkout", "feature"])
        .assert()
        .success();
    commit_file(dir, "1.txt", "one on feature\n", "edit one");
    let feature_tip = head_commit_id(dir);

    run_twig_command(dir, &["checkout", "master"])
        .assert()
        .success();
    run_twig_command(dir, &["merge", "feature"])
        .assert()
        .success()
        .stdout("Current branch fast-forwarded.\n");

    assert_eq!(head_commit_id(dir), feature_tip);
    assert_eq!(read_file(&dir.join("1.txt")), "one on feature\n");
}

#[rstest]
fn merging_an_ancestor_changes_nothing(init_repository_dir: TempDir) {
    let dir = init_repository_dir.path();
    run_twig_command(dir, &["branch", "old"])
        .assert()
        .success();
    commit_file(dir, "1.txt", "one, later\n", "edit one");
    let master_tip = head_commit_id(dir);

    run_twig_command(dir, &["merge", "old"])
        .assert()
        .success()
        .stdout("Given branch is an ancestor of the current branch.\n");

    assert_eq!(head_commit_id(dir), master_tip);
    assert_eq!(read_file(&dir.join("1.txt")), "one, later\n");
}
