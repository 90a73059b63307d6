use crate::common::command::{init_repository_dir, repository_dir, run_twig_command, twig_add};
use crate::common::file::{FileSpec, delete_file, write_file};
use assert_fs::TempDir;
use rstest::rstest;

#[rstest]
fn fresh_repository_is_clean(repository_dir: TempDir) {
    run_twig_command(repository_dir.path(), &["init"])
        .assert()
        .success();

    run_twig_command(repository_dir.path(), &["status"])
        .assert()
        .success()
        .stdout(
            "=== Branches ===\n*master\n\n=== Staged Files ===\n\n=== Removed Files ===\n\n\
             === Modifications Not Staged For Commit ===\n\n=== Untracked Files ===\n\n",
        );
}

#[rstest]
fn every_section_is_reported(init_repository_dir: TempDir) {
    let dir = init_repository_dir.path();
    run_twig_command(dir, &["branch", "other"])
        .assert()
        .success();

    // staged, then edited again
    write_file(FileSpec::new(dir.join("s.txt"), "staged\n".to_string()));
    twig_add(dir, "s.txt").assert().success();
    write_file(FileSpec::new(dir.join("s.txt"), "edited\n".to_string()));

    // tracked and deleted without rm
    delete_file(&dir.join("1.txt"));
    // tracked and modified without add
    write_file(FileSpec::new(dir.join("a/2.txt"), "two, changed\n".to_string()));
    write_file(FileSpec::new(dir.join("u.txt"), "untracked\n".to_string()));

    run_twig_command(dir, &["status"])
        .assert()
        .success()
        .stdout(
            "=== Branches ===\n*master\nother\n\n\
             === Staged Files ===\ns.txt\n\n\
             === Removed Files ===\n\n\
             === Modifications Not Staged For Commit ===\n1.txt (deleted)\na/2.txt (modified)\ns.txt (modified)\n\n\
             === Untracked Files ===\nu.txt\n\n",
        );
}

#[rstest]
fn removed_files_are_listed(init_repository_dir: TempDir) {
    let dir = init_repository_dir.path();
    run_twig_command(dir, &["rm", "1.txt"]).assert().success();

    run_twig_command(dir, &["status"])
        .assert()
        .success()
        .stdout(predicates::str::contains(
            "=== Removed Files ===\n1.txt\n\n=== Modifications Not Staged For Commit ===\n\n",
        ));
}
