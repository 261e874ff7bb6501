//! Self-test mode
//!
//! Runs publish, search and delete once against the configured root through
//! the same handlers the server uses, printing each result. The published
//! article is committed and pushed, but not deployed; the delete is not
//! committed.

use std::io::Write;

use serde_json::json;
use site_core::Site;

use crate::handlers::handle_tool_call;
use crate::{Result, get_tool_definitions};

pub const TEST_DIRECTORY: &str = "src/content/blog/test";
pub const TEST_FILENAME: &str = "mcp-test-mode.md";

const TEST_ARTICLE: &str = "# MCP Test Article

This is a test article created in self-test mode.

## Features Tested

- Article creation with front matter
- Git operations
- Search functionality

Keywords: MCP, Test, Automation";

const RULE: &str = "----------------------------------------";

/// Run the publish → search → delete sequence, writing a transcript to `out`.
pub async fn run_self_test<W: Write>(site: &Site, out: &mut W) -> Result<()> {
    tracing::info!(root = %site.root().normalized(), "Running self test");

    writeln!(out, "=== MCP Server Self Test ===")?;
    writeln!(out, "Root: {}", site.root().path().display())?;
    writeln!(out, "\nAvailable tools:")?;
    for tool in get_tool_definitions() {
        let summary = tool.description.lines().next().unwrap_or_default();
        writeln!(out, "  - {}: {summary}", tool.name)?;
    }

    let steps = [
        (
            "publish_blog_post",
            json!({
                "directory": TEST_DIRECTORY,
                "content": TEST_ARTICLE,
                "filename": TEST_FILENAME,
                "commit_message": "test: self test article",
                "deploy": false,
            }),
        ),
        (
            "find_articles",
            json!({
                "keyword": "MCP",
                "directory": TEST_DIRECTORY,
            }),
        ),
        (
            "delete_article",
            json!({
                "filepath": format!("{TEST_DIRECTORY}/{TEST_FILENAME}"),
                "commit": false,
                "push": false,
            }),
        ),
    ];

    for (index, (tool, arguments)) in steps.into_iter().enumerate() {
        writeln!(out, "\n\n{}. Testing {tool}...", index + 1)?;
        writeln!(out, "{RULE}")?;
        let result = handle_tool_call(site, tool, arguments).await?;
        writeln!(out, "Result:")?;
        writeln!(out, "{}", result.as_text())?;
    }

    writeln!(out, "\n=== Self Test Completed ===")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use site_test_utils::site::TestSite;

    #[tokio::test]
    async fn self_test_runs_all_three_tools() {
        let test = TestSite::new().with_git().with_remote();
        let site = Site::open(test.root()).unwrap();
        let mut out = Vec::new();

        run_self_test(&site, &mut out).await.unwrap();

        let transcript = String::from_utf8(out).unwrap();
        assert!(transcript.contains("  - publish_blog_post: "));
        assert!(transcript.contains("1. Testing publish_blog_post..."));
        assert!(transcript.contains("✓ Saved article to: "));
        assert!(transcript.contains(&format!(
            "✓ Found in filename: {TEST_DIRECTORY}/{TEST_FILENAME}"
        )));
        assert!(transcript.contains(&format!("✓ Deleted file: {TEST_DIRECTORY}/{TEST_FILENAME}")));
        assert!(transcript.ends_with("=== Self Test Completed ===\n"));
        test.assert_file_not_exists(&format!("{TEST_DIRECTORY}/{TEST_FILENAME}"));
    }
}
