//! Structured pipeline reports
//!
//! Each pipeline step is recorded with its kind, status and text output. The
//! text rendering (`Display`) is what clients see; the success flag is derived
//! from step statuses rather than parsed out of that text.

use std::fmt;

use site_git::{CommandOutput, CommitOutcome};

/// Push note when the commit had nothing to record.
pub(crate) const NOTHING_TO_PUSH: &str = "No changes to push.\n";
/// Push note when the commit did not go through.
pub(crate) const COMMIT_FAILED: &str = "Commit failed, not pushing.\n";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepKind {
    Write,
    Delete,
    Stage,
    Commit,
    Push,
    Deploy,
}

impl StepKind {
    /// Heading the step is rendered under, if any.
    fn section(self) -> Option<&'static str> {
        match self {
            Self::Write | Self::Delete => None,
            Self::Stage | Self::Commit | Self::Push => Some("=== Git Operations ==="),
            Self::Deploy => Some("=== Deployment ==="),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepStatus {
    Ok,
    /// Not attempted; the output explains why
    Skipped,
    Failed,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Step {
    pub kind: StepKind,
    pub status: StepStatus,
    pub output: String,
}

/// Ordered record of a publish or delete run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PipelineReport {
    steps: Vec<Step>,
}

impl PipelineReport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    /// First step of `kind`.
    pub fn step(&self, kind: StepKind) -> Option<&Step> {
        self.steps.iter().find(|s| s.kind == kind)
    }

    /// True when no step failed.
    pub fn succeeded(&self) -> bool {
        self.steps.iter().all(|s| s.status != StepStatus::Failed)
    }

    pub fn push(&mut self, kind: StepKind, status: StepStatus, output: impl Into<String>) {
        let output = output.into();
        if status == StepStatus::Failed {
            tracing::warn!(step = ?kind, "Pipeline step failed");
        }
        self.steps.push(Step {
            kind,
            status,
            output,
        });
    }

    pub fn ok(&mut self, kind: StepKind, output: impl Into<String>) {
        self.push(kind, StepStatus::Ok, output);
    }

    pub fn skip(&mut self, kind: StepKind, reason: impl Into<String>) {
        self.push(kind, StepStatus::Skipped, reason);
    }

    /// Record a subprocess result: exit status decides the step status, and a
    /// spawn failure becomes a failed step carrying the error text.
    pub fn record(&mut self, kind: StepKind, result: site_git::Result<CommandOutput>) {
        match result {
            Ok(output) => {
                let status = if output.success() {
                    StepStatus::Ok
                } else {
                    StepStatus::Failed
                };
                self.push(kind, status, output.render());
            }
            Err(e) => self.push(kind, StepStatus::Failed, format!("{e}\n")),
        }
    }

    /// Record a commit. An empty commit is not a failure.
    pub fn record_commit(&mut self, outcome: &CommitOutcome) {
        let status = match outcome {
            CommitOutcome::Committed(_) | CommitOutcome::NothingToCommit(_) => StepStatus::Ok,
            CommitOutcome::Failed(_) => StepStatus::Failed,
        };
        self.push(StepKind::Commit, status, outcome.output().render());
    }
}

impl fmt::Display for PipelineReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut section = None;
        let mut first = true;
        let mut line = |f: &mut fmt::Formatter<'_>, text: &str| -> fmt::Result {
            if !first {
                f.write_str("\n")?;
            }
            first = false;
            f.write_str(text)
        };

        for step in &self.steps {
            let step_section = step.kind.section();
            if step_section.is_some() && step_section != section {
                if let Some(heading) = step_section {
                    line(f, &format!("\n{heading}"))?;
                }
                section = step_section;
            }
            line(f, &step.output)?;
        }
        Ok(())
    }
}
