//! Publish pipeline: write, stage, commit, push, deploy

use chrono::NaiveDate;
use site_git::CommitOutcome;

use crate::report::{COMMIT_FAILED, NOTHING_TO_PUSH};
use crate::{PipelineReport, Result, Site, StepKind, write_article};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublishRequest {
    /// Target directory relative to the content root
    pub directory: String,
    pub filename: String,
    pub content: String,
    /// Falls back to the configured template when `None` or empty
    pub commit_message: Option<String>,
    pub deploy: bool,
}

impl PublishRequest {
    /// Request with the default commit message and deployment enabled.
    pub fn new(
        directory: impl Into<String>,
        filename: impl Into<String>,
        content: impl Into<String>,
    ) -> Self {
        Self {
            directory: directory.into(),
            filename: filename.into(),
            content: content.into(),
            commit_message: None,
            deploy: true,
        }
    }

    pub fn commit_message(mut self, message: impl Into<String>) -> Self {
        self.commit_message = Some(message.into());
        self
    }

    pub fn deploy(mut self, deploy: bool) -> Self {
        self.deploy = deploy;
        self
    }
}

/// Write the article, then stage, commit, push and optionally deploy.
///
/// A write failure is returned as `Err` before anything else runs. After
/// that, every step is recorded in the report; a failing subprocess marks the
/// report unsuccessful without stopping later steps, except that push only
/// runs after a successful commit.
pub fn publish(site: &Site, request: &PublishRequest, today: NaiveDate) -> Result<PipelineReport> {
    tracing::info!(
        directory = %request.directory,
        filename = %request.filename,
        deploy = request.deploy,
        "Publishing article"
    );

    let written = write_article(
        site,
        &request.directory,
        &request.filename,
        &request.content,
        today,
    )?;

    let mut report = PipelineReport::new();
    report.ok(
        StepKind::Write,
        format!("✓ Saved article to: {}", written.path.display()),
    );

    let git = site.git();
    report.record(StepKind::Stage, git.stage_all());

    let message = match request.commit_message.as_deref() {
        Some(message) if !message.trim().is_empty() => message.to_string(),
        _ => site.config().git.publish_message_for(&request.filename),
    };

    match git.commit(&message) {
        Ok(outcome) => {
            report.record_commit(&outcome);
            match outcome {
                CommitOutcome::Committed(_) => report.record(StepKind::Push, git.push()),
                CommitOutcome::NothingToCommit(_) => report.skip(StepKind::Push, NOTHING_TO_PUSH),
                CommitOutcome::Failed(_) => report.skip(StepKind::Push, COMMIT_FAILED),
            }
        }
        Err(e) => {
            report.record(StepKind::Commit, Err(e));
            report.skip(StepKind::Push, COMMIT_FAILED);
        }
    }

    if request.deploy {
        report.record(StepKind::Deploy, site.deployer().deploy());
    }

    tracing::info!(succeeded = report.succeeded(), "Publish finished");
    Ok(report)
}
