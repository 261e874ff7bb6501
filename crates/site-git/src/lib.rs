//! Subprocess layer for the site manager
//!
//! Every external tool (git, the deploy script) runs through [`ShellRunner`],
//! inside the content root, with combined output captured for the caller.

pub mod deploy;
pub mod error;
pub mod git;
pub mod runner;

pub use deploy::Deployer;
pub use error::{Error, Result};
pub use git::{CommitOutcome, Git};
pub use runner::{CommandOutput, ShellRunner};
