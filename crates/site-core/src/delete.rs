//! Delete pipeline: validate, remove, then optionally commit and push

use site_fs::io;
use site_git::CommitOutcome;

use crate::report::{COMMIT_FAILED, NOTHING_TO_PUSH};
use crate::{Error, PipelineReport, Result, Site, StepKind, frontmatter};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeleteRequest {
    /// Article path relative to the content root
    pub filepath: String,
    pub commit: bool,
    pub push: bool,
}

impl DeleteRequest {
    /// Request that commits and pushes the deletion.
    pub fn new(filepath: impl Into<String>) -> Self {
        Self {
            filepath: filepath.into(),
            commit: true,
            push: true,
        }
    }

    pub fn commit(mut self, commit: bool) -> Self {
        self.commit = commit;
        self
    }

    pub fn push(mut self, push: bool) -> Self {
        self.push = push;
        self
    }
}

/// Remove a markdown article and optionally commit and push the removal.
///
/// Validation failures return `Err` without touching the filesystem.
pub fn delete(site: &Site, request: &DeleteRequest) -> Result<PipelineReport> {
    let filepath = request.filepath.as_str();
    let target = site.root().resolve(filepath);

    if !target.exists() {
        return Err(Error::ArticleNotFound {
            path: filepath.to_string(),
        });
    }

    if !frontmatter::is_markdown(filepath) {
        return Err(Error::NotMarkdown {
            path: filepath.to_string(),
        });
    }

    // Checked both lexically and against the real filesystem, so neither a
    // `..` segment nor a symlink can point the removal outside the root.
    let inside = site.root().contains(&target) && site.root().contains_existing(&target.to_native())?;
    if !inside {
        tracing::warn!(path = %filepath, "Refusing to delete outside the content root");
        return Err(Error::OutsideRoot {
            path: filepath.to_string(),
        });
    }

    io::remove_file(&target)?;
    tracing::info!(path = %filepath, "Deleted article");

    let mut report = PipelineReport::new();
    report.ok(StepKind::Delete, format!("✓ Deleted file: {filepath}"));

    if request.commit {
        let git = site.git();
        report.record(StepKind::Stage, git.stage_all());

        let file_name = target.file_name().unwrap_or(filepath);
        let message = site.config().git.remove_message_for(file_name);
        match git.commit(&message) {
            Ok(outcome) => {
                report.record_commit(&outcome);
                if request.push {
                    match outcome {
                        CommitOutcome::Committed(_) => report.record(StepKind::Push, git.push()),
                        CommitOutcome::NothingToCommit(_) => {
                            report.skip(StepKind::Push, NOTHING_TO_PUSH)
                        }
                        CommitOutcome::Failed(_) => report.skip(StepKind::Push, COMMIT_FAILED),
                    }
                }
            }
            Err(e) => {
                report.record(StepKind::Commit, Err(e));
                if request.push {
                    report.skip(StepKind::Push, COMMIT_FAILED);
                }
            }
        }
    }

    tracing::info!(succeeded = report.succeeded(), "Delete finished");
    Ok(report)
}
