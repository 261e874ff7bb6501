//! MCP Server for a static-site content repository
//!
//! This crate exposes the site-core pipelines via the Model Context Protocol
//! (MCP), so an assistant can publish, find and delete articles in an Astro
//! blog checkout.
//!
//! # Architecture
//!
//! ```text
//! [ MCP Client ]
//!        | (JSON-RPC over stdio)
//!        v
//! [ site-mcp (MCP Server) ]
//!        | (Rust API)
//!        v
//! [ site-core (Pipelines) ]
//!        |
//!        +--> [ content root (Filesystem) ]
//!        +--> [ git / deploy command (Subprocesses) ]
//! ```
//!
//! # Tools
//!
//! - `publish_blog_post` - Save an article, commit, push and optionally deploy
//! - `find_articles` - Search markdown files by keyword
//! - `delete_article` - Remove an article and optionally commit the removal

pub mod error;
pub mod handlers;
pub mod protocol;
pub mod self_test;
pub mod server;
pub mod tools;

pub use error::{Error, Result};
pub use server::SiteMcpServer;
pub use tools::{ToolContent, ToolDefinition, ToolResult, get_tool_definitions};
