use crate::common::file::{FileSpec, write_file};
use assert_cmd::Command;
use assert_fs::TempDir;
use rstest::fixture;
use std::path::Path;

pub const COMMIT_DATE: &str = "2024-01-01 12:00:00 +0000";

#[fixture]
pub fn repository_dir() -> TempDir {
    TempDir::new().expect("Failed to create temp dir")
}

/// A repository with `1.txt` and `a/2.txt` committed on master
#[fixture]
pub fn init_repository_dir(repository_dir: TempDir) -> TempDir {
    run_twig_command(repository_dir.path(), &["init"])
        .assert()
        .success();

    write_file(FileSpec::new(
        repository_dir.path().join("1.txt"),
        "one\n".to_string(),
    ));
    write_file(FileSpec::new(
        repository_dir.path().join("a").join("2.txt"),
        "two\n".to_string(),
    ));

    twig_add(repository_dir.path(), "1.txt").assert().success();
    twig_add(repository_dir.path(), "a/2.txt").assert().success();
    twig_commit(repository_dir.path(), "first commit")
        .assert()
        .success();

    repository_dir
}

pub fn run_twig_command(dir: &Path, args: &[&str]) -> Command {
    let mut cmd = Command::cargo_bin("twig").expect("Failed to find twig binary");
    cmd.current_dir(dir)
        .args(args)
        .env("TWIG_COMMIT_DATE", COMMIT_DATE);
    cmd
}

pub fn twig_add(dir: &Path, file: &str) -> Command {
    run_twig_command(dir, &["add", file])
}

pub fn twig_commit(dir: &Path, message: &str) -> Command {
    run_twig_command(dir, &["commit", "-m", message])
}

/// Write `content` to `name`, stage it and commit it
pub fn commit_file(dir: &Path, name: &str, content: &str, message: &str) {
    write_file(FileSpec::new(dir.join(name), content.to_string()));
    twig_add(dir, name).assert().success();
    twig_commit(dir, message).assert().success();
}

/// Id of the commit the current branch points at
pub fn head_commit_id(dir: &Path) -> String {
    let twig_dir = dir.join(".twig");
    let head = std::fs::read_to_string(twig_dir.join("HEAD")).expect("Failed to read HEAD");
    let branch_ref = head
        .trim()
        .strip_prefix("ref: ")
        .expect("HEAD is not symbolic");

    std::fs::read_to_string(twig_dir.join(branch_ref))
        .expect("Failed to read branch ref")
        .trim()
        .to_string()
}
