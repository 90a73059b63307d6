use crate::common::command::{init_repository_dir, run_twig_command, twig_add};
use crate::common::file::{FileSpec, write_file, write_generated_files};
use assert_fs::TempDir;
use predicates::prelude::*;
use rstest::rstest;

#[rstest]
fn added_files_show_up_as_staged(init_repository_dir: TempDir) {
    let dir = init_repository_dir.path();
    let mut files = write_generated_files(dir, 3);
    files.sort_by(|a, b| a.path.cmp(&b.path));

    for file in &files {
        let name = file.path.file_name().unwrap().to_str().unwrap();
        twig_add(dir, name).assert().success();
    }

    let expected_staged = files
        .iter()
        .map(|file| file.path.file_name().unwrap().to_string_lossy().to_string())
        .collect::<Vec<_>>()
        .join("\n");

    run_twig_command(dir, &["status"])
        .assert()
        .success()
        .stdout(predicate::str::contains(format!(
            "=== Staged Files ===\n{expected_staged}\n\n=== Removed Files ==="
        )));
}

#[rstest]
fn adding_a_file_identical_to_head_unstages_it(init_repository_dir: TempDir) {
    let dir = init_repository_dir.path();
    write_file(FileSpec::new(dir.join("1.txt"), "changed\n".to_string()));
    twig_add(dir, "1.txt").assert().success();

    write_file(FileSpec::new(dir.join("1.txt"), "one\n".to_string()));
    twig_add(dir, "1.txt").assert().success();

    run_twig_command(dir, &["status"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "=== Staged Files ===\n\n=== Removed Files ===",
        ));
}

#[rstest]
fn adding_a_nested_file_uses_its_relative_name(init_repository_dir: TempDir) {
    let dir = init_repository_dir.path();
    write_file(FileSpec::new(
        dir.join("a").join("b").join("3.txt"),
        "three\n".to_string(),
    ));

    twig_add(dir, "a/b/3.txt").assert().success();

    run_twig_command(dir, &["status"])
        .assert()
        .success()
        .stdout(predicate::str::contains("=== Staged Files ===\na/b/3.txt\n"));
}
