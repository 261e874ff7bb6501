//! Core pipelines for managing a static-site content repository
//!
//! This crate composes the filesystem and subprocess layers into the three
//! operations exposed to clients:
//!
//! - **Publish**: write an article (injecting front matter), stage, commit,
//!   push and optionally deploy
//! - **Search**: find markdown articles whose name or content contains a keyword
//! - **Delete**: remove a markdown article, then optionally commit and push
//!
//! # Architecture
//!
//! ```text
//!                 site-mcp (tools)
//!                        |
//!                    site-core
//!                        |
//!              +---------+---------+
//!              |                   |
//!           site-fs            site-git
//!      (root, paths, I/O)  (git, deploy, runner)
//! ```
//!
//! Every operation takes a [`Site`], the immutable root + configuration value
//! built once at startup.
//!
//! # Example
//!
//! ```ignore
//! use site_core::{PublishRequest, Site, publish};
//!
//! fn example() -> site_core::Result<()> {
//!     let site = Site::open("./astro")?;
//!     let request = PublishRequest::new("src/content/blog", "hello.md", "# Hello\n");
//!     let report = publish(&site, &request, chrono::Local::now().date_naive())?;
//!     println!("{report}");
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod delete;
pub mod error;
pub mod frontmatter;
pub mod publish;
pub mod report;
pub mod search;
pub mod site;
pub mod writer;

pub use config::{CONFIG_FILE, SiteConfig};
pub use delete::{DeleteRequest, delete};
pub use error::{Error, Result};
pub use frontmatter::{derive_title, is_markdown};
pub use publish::{PublishRequest, publish};
pub use report::{PipelineReport, Step, StepKind, StepStatus};
pub use search::{SearchMatch, SearchQuery, SearchReport, find_articles};
pub use site::Site;
pub use writer::{WrittenArticle, write_article};
