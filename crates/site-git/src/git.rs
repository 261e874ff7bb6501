//! Git operations used by the publish and delete pipelines
//!
//! Staging, committing and pushing go through the `git` CLI so the user's
//! hooks, credentials and config apply. `git2` is only used to read the index
//! when classifying a commit that exited nonzero.

use std::path::Path;

use git2::{ErrorCode, Repository};

use crate::{CommandOutput, Result, ShellRunner};

/// Text git prints when the index matches `HEAD`.
///
/// Only consulted when the repository cannot be opened through `git2`.
const NOTHING_TO_COMMIT: &str = "nothing to commit";

/// How a `git commit` invocation ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommitOutcome {
    /// A new commit was recorded
    Committed(CommandOutput),
    /// The index had no changes relative to `HEAD`
    NothingToCommit(CommandOutput),
    /// The commit failed with changes still staged
    Failed(CommandOutput),
}

impl CommitOutcome {
    pub fn output(&self) -> &CommandOutput {
        match self {
            Self::Committed(out) | Self::NothingToCommit(out) | Self::Failed(out) => out,
        }
    }

    pub fn is_committed(&self) -> bool {
        matches!(self, Self::Committed(_))
    }
}

/// Git wrapper bound to the content root.
#[derive(Debug, Clone)]
pub struct Git {
    runner: ShellRunner,
}

impl Git {
    pub fn new(runner: ShellRunner) -> Self {
        Self { runner }
    }

    pub fn workdir(&self) -> &Path {
        self.runner.workdir()
    }

    /// `git add -A`
    pub fn stage_all(&self) -> Result<CommandOutput> {
        self.runner.run(&["git", "add", "-A"])
    }

    /// `git commit -m <message>`, classified by exit code and index state.
    pub fn commit(&self, message: &str) -> Result<CommitOutcome> {
        let output = self.runner.run(&["git", "commit", "-m", message])?;
        Ok(self.classify_commit(output))
    }

    /// `git push`
    pub fn push(&self) -> Result<CommandOutput> {
        self.runner.run(&["git", "push"])
    }

    /// Number of paths whose staged state differs from `HEAD`.
    ///
    /// An unborn branch compares against the empty tree.
    pub fn staged_change_count(&self) -> Result<usize> {
        let repo = Repository::discover(self.workdir())?;
        let index = repo.index()?;
        let head_tree = match repo.head() {
            Ok(head) => Some(head.peel_to_tree()?),
            Err(e) if e.code() == ErrorCode::UnbornBranch || e.code() == ErrorCode::NotFound => {
                None
            }
            Err(e) => return Err(e.into()),
        };
        let diff = repo.diff_tree_to_index(head_tree.as_ref(), Some(&index), None)?;
        Ok(diff.deltas().len())
    }

    fn classify_commit(&self, output: CommandOutput) -> CommitOutcome {
        if output.success() {
            return CommitOutcome::Committed(output);
        }

        match self.staged_change_count() {
            Ok(0) => CommitOutcome::NothingToCommit(output),
            Ok(staged) => {
                tracing::warn!(staged, "Commit failed with staged changes");
                CommitOutcome::Failed(output)
            }
            Err(e) => {
                tracing::warn!(error = %e, "Could not inspect index, falling back to commit output");
                if output.mentions(NOTHING_TO_COMMIT) {
                    CommitOutcome::NothingToCommit(output)
                } else {
                    CommitOutcome::Failed(output)
                }
            }
        }
    }
}
