use crate::common::file::{FileSpec, write_file};
use assert_cmd::Command;
use assert_fs::TempDir;
use derive_new::new;
use rstest::fixture;
use std::path::{Path, PathBuf};

pub const FILE1_CONTENT: &str = "one\ntwo\nthree\nfour\nfive\n";
pub const FILE2_CONTENT: &str = "alpha\nbeta\ngamma\n";
pub const FILE3_CONTENT: &str = "x\n";

#[fixture]
pub fn repository_dir() -> TempDir {
    TempDir::new().expect("Failed to create temp dir")
}

/// A git repository with a single commit holding `1.txt`, `a/2.txt` and `a/b/3.txt`
#[fixture]
pub fn single_commit_repository_dir(repository_dir: TempDir) -> TempDir {
    run_git_command(repository_dir.path(), &["init", "-q"])
        .assert()
        .success();

    write_file(FileSpec::new(
        repository_dir.path().join("1.txt"),
        FILE1_CONTENT.to_string(),
    ));
    write_file(FileSpec::new(
        repository_dir.path().join("a").join("2.txt"),
        FILE2_CONTENT.to_string(),
    ));
    write_file(FileSpec::new(
        repository_dir.path().join("a").join("b").join("3.txt"),
        FILE3_CONTENT.to_string(),
    ));

    run_git_command(repository_dir.path(), &["add", "."])
        .assert()
        .success();
    git_commit(repository_dir.path(), "Initial commit")
        .assert()
        .success();

    repository_dir
}

/// Same as [`single_commit_repository_dir`] plus a second commit touching `a/b/3.txt`,
/// so that `HEAD~1` resolves
#[fixture]
pub fn init_repository_dir(single_commit_repository_dir: TempDir) -> TempDir {
    let repository_dir = single_commit_repository_dir;

    write_file(FileSpec::new(
        repository_dir.path().join("a").join("b").join("3.txt"),
        "x\ny\n".to_string(),
    ));
    run_git_command(repository_dir.path(), &["add", "."])
        .assert()
        .success();
    git_commit(repository_dir.path(), "Second commit")
        .assert()
        .success();

    repository_dir
}

/// Scratch files go under `.git` so parallel tests never share them and they
/// never show up as working copy changes
pub fn scratch_dir(dir: &Path) -> PathBuf {
    dir.join(".git").join("changes-scratch")
}

pub fn canonical_root(dir: &Path) -> PathBuf {
    dir.canonicalize().expect("Failed to canonicalize temp dir")
}

pub fn run_changes_command(dir: &Path, args: &[&str]) -> Command {
    let mut cmd = Command::cargo_bin("changes").expect("Failed to find changes binary");
    cmd.envs(vec![("NO_PAGER", "1")]);
    cmd.env("CHANGES_SCRATCH_DIR", scratch_dir(dir));
    cmd.env_remove("CHANGES_ROOT");
    cmd.env_remove("CHANGES_BASE");
    cmd.env_remove("RUST_LOG");
    // keep git from discovering a repository above the temp dir
    if let Some(parent) = dir.parent() {
        cmd.env("GIT_CEILING_DIRECTORIES", parent);
    }
    cmd.current_dir(dir);
    for arg in args {
        cmd.arg(arg);
    }
    cmd
}

pub fn run_git_command(dir: &Path, args: &[&str]) -> Command {
    let mut cmd = Command::new("git");
    cmd.current_dir(dir);
    for arg in args {
        cmd.arg(arg);
    }
    cmd
}

pub fn git_commit(dir: &Path, message: &str) -> Command {
    let author = generate_random_author();
    let mut cmd = run_git_command(
        dir,
        &[
            "-c",
            "commit.gpgsign=false",
            "commit",
            "-q",
            "-m",
            message,
        ],
    );
    cmd.envs(vec![
        ("GIT_AUTHOR_NAME", &author.name),
        ("GIT_AUTHOR_EMAIL", &author.email),
        ("GIT_COMMITTER_NAME", &author.name),
        ("GIT_COMMITTER_EMAIL", &author.email),
        ("GIT_AUTHOR_DATE", &"2023-01-01 12:00:00 +0000".to_string()),
    ]);
    cmd
}

#[derive(Debug, Clone, new)]
struct RandomAuthor {
    name: String,
    email: String,
}

fn generate_random_author() -> RandomAuthor {
    use fake::Fake;
    use fake::faker::internet::en::FreeEmail;
    use fake::faker::name::en::Name;

    let name = Name().fake::<String>().replace(" ", "_");
    let email = FreeEmail().fake::<String>();
    RandomAuthor::new(name, email)
}
