//! MCP Tool Handlers
//!
//! Handlers deserialize tool arguments, delegate to site-core and render the
//! outcome as text. Pipeline errors become error results here; only argument
//! problems and unknown tools are returned as `Err`.
//!
//! Note: Handler functions use `async fn` for consistency with the MCP
//! server's tokio runtime, even though the pipelines perform synchronous I/O.

use serde::Deserialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use site_core::{
    DeleteRequest, PipelineReport, PublishRequest, SearchQuery, Site, delete, find_articles,
    publish,
};

use crate::{Error, Result, ToolResult};

/// Handle a tool call by dispatching to the appropriate handler
pub async fn handle_tool_call(site: &Site, tool_name: &str, arguments: Value) -> Result<ToolResult> {
    tracing::info!(tool = tool_name, "Tool call");
    match tool_name {
        "publish_blog_post" => handle_publish_blog_post(site, arguments).await,
        "find_articles" => handle_find_articles(site, arguments).await,
        "delete_article" => handle_delete_article(site, arguments).await,
        _ => Err(Error::UnknownTool(tool_name.to_string())),
    }
}

fn parse_args<T: DeserializeOwned>(arguments: Value) -> Result<T> {
    serde_json::from_value(arguments).map_err(|e| Error::InvalidArgument(e.to_string()))
}

fn default_true() -> bool {
    true
}

fn report_result(report: &PipelineReport) -> ToolResult {
    ToolResult::new(report.to_string(), !report.succeeded())
}

/// Arguments for publish_blog_post
#[derive(Debug, Deserialize)]
struct PublishArgs {
    directory: String,
    content: String,
    filename: String,
    #[serde(default)]
    commit_message: Option<String>,
    #[serde(default = "default_true")]
    deploy: bool,
}

/// Handle publish_blog_post - Save, commit, push and optionally deploy
async fn handle_publish_blog_post(site: &Site, arguments: Value) -> Result<ToolResult> {
    let args: PublishArgs = parse_args(arguments)?;

    let mut request = PublishRequest::new(args.directory, args.filename, args.content);
    request.commit_message = args.commit_message;
    request.deploy = args.deploy;

    let today = chrono::Local::now().date_naive();
    Ok(match publish(site, &request, today) {
        Ok(report) => report_result(&report),
        Err(e) => ToolResult::error(format!("Error saving article: {e}")),
    })
}

/// Arguments for find_articles
#[derive(Debug, Deserialize)]
struct FindArgs {
    keyword: String,
    #[serde(default)]
    directory: Option<String>,
    #[serde(default)]
    case_sensitive: bool,
}

/// Handle find_articles - Keyword search over markdown files
async fn handle_find_articles(site: &Site, arguments: Value) -> Result<ToolResult> {
    let args: FindArgs = parse_args(arguments)?;

    let mut query = SearchQuery::new(args.keyword).case_sensitive(args.case_sensitive);
    query.directory = args.directory;

    Ok(match find_articles(site, &query) {
        Ok(report) => ToolResult::text(report.to_string()),
        Err(e @ site_core::Error::DirectoryNotFound { .. }) => ToolResult::error(e.to_string()),
        Err(e) => ToolResult::error(format!("Error: {e}")),
    })
}

/// Arguments for delete_article
#[derive(Debug, Deserialize)]
struct DeleteArgs {
    filepath: String,
    #[serde(default = "default_true")]
    commit: bool,
    #[serde(default = "default_true")]
    push: bool,
}

/// Handle delete_article - Remove an article, then optionally commit and push
async fn handle_delete_article(site: &Site, arguments: Value) -> Result<ToolResult> {
    let args: DeleteArgs = parse_args(arguments)?;

    let request = DeleteRequest::new(args.filepath)
        .commit(args.commit)
        .push(args.push);

    Ok(match delete(site, &request) {
        Ok(report) => report_result(&report),
        Err(e) => ToolResult::error(render_delete_error(&e)),
    })
}

fn render_delete_error(error: &site_core::Error) -> String {
    use site_core::Error as CoreError;

    match error {
        CoreError::ArticleNotFound { .. } => error.to_string(),
        CoreError::OutsideRoot { .. } => "Error: File must be within the content root".to_string(),
        CoreError::Fs(_) => format!("Error deleting file: {error}"),
        _ => format!("Error: {error}"),
    }
}
