use pretty_assertions::assert_eq;
use site_git::{CommitOutcome, Deployer, Git, ShellRunner};
use site_test_utils::git as fixtures;
use std::fs;
use tempfile::TempDir;

fn git_for(path: &std::path::Path) -> Git {
    Git::new(ShellRunner::new(path))
}

#[test]
fn stage_and_commit_new_file() {
    let temp = TempDir::new().unwrap();
    fixtures::init_repo_with_commit(temp.path());
    fs::write(temp.path().join("post.md"), "hello").unwrap();
    let git = git_for(temp.path());

    assert!(git.stage_all().unwrap().success());
    assert_eq!(git.staged_change_count().unwrap(), 1);

    let outcome = git.commit("feat: publish post.md").unwrap();
    assert!(outcome.is_committed(), "{}", outcome.output());
    assert_eq!(fixtures::commit_count(temp.path()), 2);
    assert_eq!(fixtures::head_message(temp.path()), "feat: publish post.md");
    assert_eq!(git.staged_change_count().unwrap(), 0);
}

#[test]
fn clean_index_is_nothing_to_commit() {
    let temp = TempDir::new().unwrap();
    fixtures::init_repo_with_commit(temp.path());
    let git = git_for(temp.path());

    git.stage_all().unwrap();
    let outcome = git.commit("feat: publish nothing").unwrap();

    assert!(matches!(outcome, CommitOutcome::NothingToCommit(_)));
    assert!(!outcome.output().success());
    assert_eq!(fixtures::commit_count(temp.path()), 1);
}

#[test]
fn staged_count_on_unborn_branch() {
    let temp = TempDir::new().unwrap();
    fixtures::init_repo(temp.path());
    fs::write(temp.path().join("a.md"), "a").unwrap();
    fs::write(temp.path().join("b.md"), "b").unwrap();
    let git = git_for(temp.path());

    assert_eq!(git.staged_change_count().unwrap(), 0);
    git.stage_all().unwrap();
    assert_eq!(git.staged_change_count().unwrap(), 2);

    let outcome = git.commit("first").unwrap();
    assert!(outcome.is_committed(), "{}", outcome.output());
}

#[test]
fn push_updates_bare_remote() {
    let sandbox = TempDir::new().unwrap();
    let repo = sandbox.path().join("site");
    let remote = sandbox.path().join("remote.git");
    fs::create_dir(&repo).unwrap();
    fixtures::init_repo_with_commit(&repo);
    fixtures::attach_bare_remote(&repo, &remote);

    fs::write(repo.join("post.md"), "hello").unwrap();
    let git = git_for(&repo);
    git.stage_all().unwrap();
    assert!(git.commit("add post").unwrap().is_committed());

    let pushed = git.push().unwrap();
    assert!(pushed.success(), "{}", pushed);
    assert_eq!(fixtures::branch_id(&remote, "main"), fixtures::head_id(&repo));
}

#[test]
fn push_without_remote_fails_softly() {
    let temp = TempDir::new().unwrap();
    fixtures::init_repo_with_commit(temp.path());

    let pushed = git_for(temp.path()).push().unwrap();
    assert!(!pushed.success());
}

#[test]
fn deployer_runs_configured_command() {
    let temp = TempDir::new().unwrap();
    let deployer = Deployer::new(
        ShellRunner::new(temp.path()),
        vec!["git".to_string(), "--version".to_string()],
    );

    let output = deployer.deploy().unwrap();
    assert!(output.success());
    assert_eq!(output.command_line, "git --version");
}
