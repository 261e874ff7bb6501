//! Site configuration
//!
//! Read from an optional `.site-mcp.toml` at the content root. Every field
//! has a default matching a stock Astro blog, so the file is only needed to
//! override something.
//!
//! ```toml
//! content_dir = "src/content/blog"
//!
//! [git]
//! publish_message = "feat: publish {filename}"
//! remove_message = "feat: remove article {filename}"
//!
//! [deploy]
//! command = ["npm", "run", "deploy"]
//!
//! [frontmatter]
//! description = "Article published via MCP"
//! author = "AI Assistant"
//! ```

use serde::Deserialize;
use site_fs::ContentRoot;
use site_git::deploy::DEFAULT_DEPLOY_COMMAND;

use crate::{Error, Result};

/// Config file name, relative to the content root.
pub const CONFIG_FILE: &str = ".site-mcp.toml";

/// Placeholder replaced by the article file name in commit message templates.
const FILENAME_PLACEHOLDER: &str = "{filename}";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteConfig {
    /// Default directory for keyword search, relative to the root
    pub content_dir: String,
    pub git: GitConfig,
    pub deploy: DeployConfig,
    pub frontmatter: FrontmatterConfig,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            content_dir: "src/content/blog".to_string(),
            git: GitConfig::default(),
            deploy: DeployConfig::default(),
            frontmatter: FrontmatterConfig::default(),
        }
    }
}

impl SiteConfig {
    /// Load `.site-mcp.toml` from the root, or defaults if it is absent.
    pub fn load(root: &ContentRoot) -> Result<Self> {
        let path = root.resolve(CONFIG_FILE);
        let config: Self = site_fs::config::load_toml_or_default(&path)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values no operation could work with.
    pub fn validate(&self) -> Result<()> {
        if self.content_dir.trim().is_empty() {
            return Err(Error::InvalidConfig {
                message: "content_dir must not be empty".to_string(),
            });
        }
        if self.deploy.command.is_empty() || self.deploy.command[0].trim().is_empty() {
            return Err(Error::InvalidConfig {
                message: "deploy.command must name a program".to_string(),
            });
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GitConfig {
    /// Commit message used by publish when the caller gives none
    pub publish_message: String,
    /// Commit message used by delete
    pub remove_message: String,
}

impl Default for GitConfig {
    fn default() -> Self {
        Self {
            publish_message: "feat: publish {filename}".to_string(),
            remove_message: "feat: remove article {filename}".to_string(),
        }
    }
}

impl GitConfig {
    pub fn publish_message_for(&self, filename: &str) -> String {
        self.publish_message.replace(FILENAME_PLACEHOLDER, filename)
    }

    pub fn remove_message_for(&self, filename: &str) -> String {
        self.remove_message.replace(FILENAME_PLACEHOLDER, filename)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DeployConfig {
    pub command: Vec<String>,
}

impl Default for DeployConfig {
    fn default() -> Self {
        Self {
            command: DEFAULT_DEPLOY_COMMAND.iter().map(|s| s.to_string()).collect(),
        }
    }
}

/// Fixed fields written into synthesized front matter.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FrontmatterConfig {
    pub description: String,
    pub author: String,
}

impl Default for FrontmatterConfig {
    fn default() -> Self {
        Self {
            description: "Article published via MCP".to_string(),
            author: "AI Assistant".to_string(),
        }
    }
}
