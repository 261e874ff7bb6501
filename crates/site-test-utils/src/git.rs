//! Git repository fixtures.
//!
//! All fixtures shell out to the `git` CLI, the same binary the pipelines
//! under test invoke, and read results back through `git2`.

use std::path::Path;
use std::process::Command;

/// Run `git <args>` in `dir`, panicking with stderr on failure.
pub fn git(dir: &Path, args: &[&str]) -> String {
    let output = Command::new("git")
        .args(args)
        .current_dir(dir)
        .output()
        .unwrap_or_else(|e| panic!("failed to run `git {args:?}`: {e}"));
    if !output.status.success() {
        panic!(
            "`git {args:?}` failed in {}:\n{}",
            dir.display(),
            String::from_utf8_lossy(&output.stderr)
        );
    }
    String::from_utf8_lossy(&output.stdout).to_string()
}

/// Initialise a git repository with a local identity and signing disabled.
///
/// No commits. `HEAD` points at `main`.
pub fn init_repo(path: &Path) {
    git(path, &["init"]);
    git(path, &["config", "user.email", "test@test.com"]);
    git(path, &["config", "user.name", "Test User"]);
    git(path, &["config", "commit.gpgsign", "false"]);
    git(path, &["symbolic-ref", "HEAD", "refs/heads/main"]);
}

/// Initialise a repository on `main` with one commit containing `README.md`.
pub fn init_repo_with_commit(path: &Path) {
    init_repo(path);
    std::fs::write(path.join("README.md"), "# Test site\n")
        .unwrap_or_else(|e| panic!("failed to write README.md: {e}"));
    git(path, &["add", "."]);
    git(path, &["commit", "-m", "Initial commit"]);
}

/// Create a bare repository at `remote`, register it as `origin` of `repo`
/// and push `main` with upstream tracking so a plain `git push` works.
pub fn attach_bare_remote(repo: &Path, remote: &Path) {
    std::fs::create_dir_all(remote)
        .unwrap_or_else(|e| panic!("failed to create {}: {e}", remote.display()));
    git(remote, &["init", "--bare"]);
    let remote_url = remote.to_string_lossy().to_string();
    git(repo, &["remote", "add", "origin", &remote_url]);
    git(repo, &["push", "-u", "origin", "main"]);
}

/// Object id of `HEAD` in `repo`.
pub fn head_id(repo: &Path) -> String {
    let repo = git2::Repository::open(repo).expect("open repository");
    let head = repo.head().expect("resolve HEAD");
    head.peel_to_commit().expect("HEAD commit").id().to_string()
}

/// Object id of `refs/heads/<branch>` in a (bare) repository.
pub fn branch_id(repo: &Path, branch: &str) -> String {
    let repo = git2::Repository::open(repo).expect("open repository");
    let reference = repo
        .find_reference(&format!("refs/heads/{branch}"))
        .expect("find branch");
    reference.peel_to_commit().expect("branch commit").id().to_string()
}

/// Number of commits reachable from `HEAD`.
pub fn commit_count(repo: &Path) -> usize {
    let repo = git2::Repository::open(repo).expect("open repository");
    let mut walk = repo.revwalk().expect("revwalk");
    walk.push_head().expect("push HEAD");
    walk.count()
}

/// Summary line of the `HEAD` commit.
pub fn head_message(repo: &Path) -> String {
    let repo = git2::Repository::open(repo).expect("open repository");
    let commit = repo
        .head()
        .expect("resolve HEAD")
        .peel_to_commit()
        .expect("HEAD commit");
    commit.summary().unwrap_or_default().to_string()
}
