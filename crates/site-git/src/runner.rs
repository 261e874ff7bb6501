//! External command execution inside the content root

use std::fmt;
use std::path::{Path, PathBuf};
use std::process::Command;

use crate::{Error, Result};

/// Captured result of one external command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandOutput {
    /// The invoked command line, tokens joined by spaces
    pub command_line: String,
    pub stdout: String,
    pub stderr: String,
    /// `None` when the process was terminated by a signal
    pub exit_code: Option<i32>,
}

impl CommandOutput {
    /// Whether the process exited with status zero.
    pub fn success(&self) -> bool {
        self.exit_code == Some(0)
    }

    /// Whether stdout or stderr contains `needle`.
    pub fn mentions(&self, needle: &str) -> bool {
        self.stdout.contains(needle) || self.stderr.contains(needle)
    }

    /// Banner line, then stdout, then stderr.
    pub fn render(&self) -> String {
        format!("$ {}\n{}{}", self.command_line, self.stdout, self.stderr)
    }
}

impl fmt::Display for CommandOutput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

/// Runs external commands with a fixed working directory.
///
/// No retries, no timeout: a hung subprocess blocks the caller until it exits.
#[derive(Debug, Clone)]
pub struct ShellRunner {
    workdir: PathBuf,
}

impl ShellRunner {
    pub fn new(workdir: impl Into<PathBuf>) -> Self {
        Self {
            workdir: workdir.into(),
        }
    }

    pub fn workdir(&self) -> &Path {
        &self.workdir
    }

    /// Run `tokens[0]` with the remaining tokens as arguments.
    ///
    /// A nonzero exit is reported through [`CommandOutput::exit_code`], never
    /// as an error. Errors are limited to an empty token list and failure to
    /// spawn the process at all.
    pub fn run<S: AsRef<str>>(&self, tokens: &[S]) -> Result<CommandOutput> {
        let (program, args) = tokens.split_first().ok_or(Error::EmptyCommand)?;
        let command_line = tokens
            .iter()
            .map(|t| t.as_ref())
            .collect::<Vec<_>>()
            .join(" ");

        tracing::debug!(command = %command_line, workdir = ?self.workdir, "Running command");

        let output = Command::new(program.as_ref())
            .args(args.iter().map(|a| a.as_ref()))
            .current_dir(&self.workdir)
            .output()
            .map_err(|source| Error::Spawn {
                command: command_line.clone(),
                source,
            })?;

        let result = CommandOutput {
            command_line,
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
            exit_code: output.status.code(),
        };

        if result.success() {
            tracing::debug!(command = %result.command_line, "Command succeeded");
        } else {
            tracing::warn!(
                command = %result.command_line,
                exit_code = ?result.exit_code,
                "Command exited unsuccessfully"
            );
        }

        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn render_puts_banner_then_stdout_then_stderr() {
        let output = CommandOutput {
            command_line: "git commit -m msg".to_string(),
            stdout: "out\n".to_string(),
            stderr: "err\n".to_string(),
            exit_code: Some(1),
        };
        assert_eq!(output.render(), "$ git commit -m msg\nout\nerr\n");
        assert!(!output.success());
        assert!(output.mentions("err"));
    }

    #[test]
    fn empty_command_is_rejected() {
        let runner = ShellRunner::new(".");
        let tokens: [&str; 0] = [];
        assert!(matches!(runner.run(&tokens), Err(Error::EmptyCommand)));
    }
}
