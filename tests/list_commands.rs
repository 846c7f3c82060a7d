use crate::common::command::{
    FILE1_CONTENT, init_repository_dir, repository_dir, run_changes_command, run_git_command,
};
use crate::common::file::{FileSpec, delete_path, write_file};
use crate::common::{stderr_of, stdout_of};
use assert_fs::TempDir;
use predicates::prelude::predicate;
use rstest::rstest;

mod common;

#[rstest]
fn list_reports_placeholder_for_clean_working_copy(
    init_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    run_changes_command(init_repository_dir.path(), &["list"])
        .assert()
        .success()
        .stdout("No uncommitted changes\n");

    Ok(())
}

#[rstest]
fn list_staged_changes_before_unstaged_ones(
    init_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let repository_dir = init_repository_dir;

    write_file(FileSpec::new(
        repository_dir.path().join("1.txt"),
        "one\nTWO\nthree\nfour\nfive\n".to_string(),
    ));
    write_file(FileSpec::new(
        repository_dir.path().join("a").join("2.txt"),
        "ALPHA\nbeta\ngamma\n".to_string(),
    ));
    run_git_command(repository_dir.path(), &["add", "a/2.txt"])
        .assert()
        .success();
    write_file(FileSpec::new(
        repository_dir.path().join("a").join("2.txt"),
        "ALPHA\nbeta\nGAMMA\n".to_string(),
    ));

    let expected_output = "Changes staged for commit:
        a/2.txt
                line 1

Changes not staged for commit:
        1.txt
                line 2
        a/2.txt (also staged)
                line 3
";
    let assert = run_changes_command(repository_dir.path(), &["list"])
        .assert()
        .success();

    pretty_assertions::assert_eq!(stdout_of(&assert), expected_output);

    Ok(())
}

#[rstest]
fn list_multi_line_range_for_appended_block(
    init_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let repository_dir = init_repository_dir;

    write_file(FileSpec::new(
        repository_dir.path().join("1.txt"),
        format!("{FILE1_CONTENT}six\nseven\neight\n"),
    ));

    let expected_output = "Changes not staged for commit:
        1.txt
                lines 6-8
";
    let assert = run_changes_command(repository_dir.path(), &["list"])
        .assert()
        .success();

    pretty_assertions::assert_eq!(stdout_of(&assert), expected_output);

    Ok(())
}

#[rstest]
fn list_anchor_line_for_deleted_lines(
    init_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let repository_dir = init_repository_dir;

    // drop "two" and "three", then the very first line of a/2.txt
    write_file(FileSpec::new(
        repository_dir.path().join("1.txt"),
        "one\nfour\nfive\n".to_string(),
    ));
    write_file(FileSpec::new(
        repository_dir.path().join("a").join("2.txt"),
        "beta\ngamma\n".to_string(),
    ));

    let expected_output = "Changes not staged for commit:
        1.txt
                line 1
        a/2.txt
                line 1
";
    let assert = run_changes_command(repository_dir.path(), &["list"])
        .assert()
        .success();

    pretty_assertions::assert_eq!(stdout_of(&assert), expected_output);

    Ok(())
}

#[rstest]
fn list_skips_added_and_deleted_files(
    init_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let repository_dir = init_repository_dir;

    write_file(FileSpec::new(
        repository_dir.path().join("new.txt"),
        "brand new\n".to_string(),
    ));
    run_git_command(repository_dir.path(), &["add", "new.txt"])
        .assert()
        .success();
    delete_path(&repository_dir.path().join("a").join("b").join("3.txt"));

    // the deleted file keeps its "--- a/" header but has no new-side lines
    let expected_output = "Changes not staged for commit:
        a/b/3.txt
                line 1
";
    let assert = run_changes_command(repository_dir.path(), &["list"])
        .assert()
        .success();

    pretty_assertions::assert_eq!(stdout_of(&assert), expected_output);

    Ok(())
}

#[rstest]
fn list_ignores_configured_diff_prefixes(
    init_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let repository_dir = init_repository_dir;

    run_git_command(repository_dir.path(), &["config", "diff.mnemonicPrefix", "true"])
        .assert()
        .success();
    write_file(FileSpec::new(
        repository_dir.path().join("1.txt"),
        "one\nTWO\nthree\nfour\nfive\n".to_string(),
    ));
    write_file(FileSpec::new(
        repository_dir.path().join("a").join("2.txt"),
        "ALPHA\nbeta\ngamma\n".to_string(),
    ));
    run_git_command(repository_dir.path(), &["add", "a/2.txt"])
        .assert()
        .success();

    let expected_output = "Changes staged for commit:
        a/2.txt
                line 1

Changes not staged for commit:
        1.txt
                line 2
";
    let assert = run_changes_command(repository_dir.path(), &["list"])
        .assert()
        .success();

    pretty_assertions::assert_eq!(stdout_of(&assert), expected_output);

    Ok(())
}

#[rstest]
fn list_warns_outside_of_a_repository(
    repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let assert = run_changes_command(repository_dir.path(), &["list"])
        .assert()
        .success()
        .stdout("No uncommitted changes\n")
        .stderr(predicate::str::contains("failed to get unstaged changes"))
        .stderr(predicate::str::contains("failed to get staged changes"));

    let stderr = stderr_of(&assert);
    assert!(
        stderr.to_lowercase().contains("not a git repository"),
        "unexpected stderr: {stderr}"
    );

    Ok(())
}

#[rstest]
fn list_fails_for_missing_root(
    repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let missing = repository_dir.path().join("missing");

    run_changes_command(
        repository_dir.path(),
        &["--root", missing.to_str().expect("utf-8 temp path"), "list"],
    )
    .assert()
    .failure()
    .stderr(predicate::str::contains("no workspace"));

    Ok(())
}
