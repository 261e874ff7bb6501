//! Deploy command invocation

use crate::{CommandOutput, Result, ShellRunner};

/// Default deploy command for an Astro site.
pub const DEFAULT_DEPLOY_COMMAND: [&str; 3] = ["npm", "run", "deploy"];

/// Runs the configured deploy command in the content root.
#[derive(Debug, Clone)]
pub struct Deployer {
    runner: ShellRunner,
    command: Vec<String>,
}

impl Deployer {
    pub fn new(runner: ShellRunner, command: Vec<String>) -> Self {
        Self { runner, command }
    }

    pub fn command(&self) -> &[String] {
        &self.command
    }

    pub fn deploy(&self) -> Result<CommandOutput> {
        tracing::info!(command = ?self.command, "Deploying site");
        self.runner.run(self.command.as_slice())
    }
}
