//! The immutable site context passed to every operation

use std::path::Path;

use site_fs::ContentRoot;
use site_git::{Deployer, Git, ShellRunner};

use crate::{Result, SiteConfig};

/// Content root plus configuration, built once at startup.
#[derive(Debug, Clone)]
pub struct Site {
    root: ContentRoot,
    config: SiteConfig,
    runner: ShellRunner,
}

impl Site {
    /// Validate `path` as the content root and load its configuration.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let root = ContentRoot::new(path)?;
        let config = SiteConfig::load(&root)?;
        tracing::info!(root = %root.normalized(), "Opened site");
        Ok(Self::new(root, config))
    }

    pub fn new(root: ContentRoot, config: SiteConfig) -> Self {
        let runner = ShellRunner::new(root.path());
        Self {
            root,
            config,
            runner,
        }
    }

    pub fn root(&self) -> &ContentRoot {
        &self.root
    }

    pub fn config(&self) -> &SiteConfig {
        &self.config
    }

    /// Git bound to the content root.
    pub fn git(&self) -> Git {
        Git::new(self.runner.clone())
    }

    /// Deployer running the configured deploy command in the content root.
    pub fn deployer(&self) -> Deployer {
        Deployer::new(self.runner.clone(), self.config.deploy.command.clone())
    }
}
