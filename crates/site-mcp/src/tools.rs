//! MCP Tool definitions
//!
//! The three tools an assistant uses to manage the site:
//!
//! - `publish_blog_post` - Save an article, then commit, push and deploy
//! - `find_articles` - Find articles containing a keyword
//! - `delete_article` - Delete an article and optionally commit the deletion

use serde::{Deserialize, Serialize};
use serde_json::json;

/// Tool definition for MCP protocol
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolDefinition {
    pub name: String,
    pub description: String,
    #[serde(rename = "inputSchema")]
    pub input_schema: serde_json::Value,
}

/// Result from a tool invocation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolResult {
    pub content: Vec<ToolContent>,
    #[serde(rename = "isError")]
    pub is_error: bool,
}

/// Content types for tool results
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum ToolContent {
    #[serde(rename = "text")]
    Text { text: String },
}

impl ToolResult {
    /// Create a successful text result
    pub fn text(content: impl Into<String>) -> Self {
        Self::new(content, false)
    }

    /// Create an error result
    pub fn error(message: impl Into<String>) -> Self {
        Self::new(message, true)
    }

    pub fn new(text: impl Into<String>, is_error: bool) -> Self {
        Self {
            content: vec![ToolContent::Text { text: text.into() }],
            is_error,
        }
    }

    /// Concatenated text of all content items.
    pub fn as_text(&self) -> String {
        self.content
            .iter()
            .map(|c| match c {
                ToolContent::Text { text } => text.as_str(),
            })
            .collect()
    }
}

/// Get all available tool definitions
pub fn get_tool_definitions() -> Vec<ToolDefinition> {
    vec![
        ToolDefinition {
            name: "publish_blog_post".to_string(),
            description: "Save article, commit changes, and optionally deploy - all in one command.\n\n\
                Markdown content without front matter gets a generated header \
                (title, publication date, description, author)."
                .to_string(),
            input_schema: json!({
                "type": "object",
                "properties": {
                    "directory": {
                        "type": "string",
                        "description": "Subdirectory of the site root to save the file in (e.g. \"src/content/blog\")"
                    },
                    "content": {
                        "type": "string",
                        "description": "The content to save to the file"
                    },
                    "filename": {
                        "type": "string",
                        "description": "The file name to use (e.g. \"my-article.md\")"
                    },
                    "commit_message": {
                        "type": "string",
                        "description": "Custom commit message (defaults to \"feat: publish <filename>\")"
                    },
                    "deploy": {
                        "type": "boolean",
                        "description": "Whether to run the deploy command after committing (default: true)"
                    }
                },
                "required": ["directory", "content", "filename"]
            }),
        },
        ToolDefinition {
            name: "find_articles".to_string(),
            description: "Find articles containing a keyword in their content or filename.".to_string(),
            input_schema: json!({
                "type": "object",
                "properties": {
                    "keyword": {
                        "type": "string",
                        "description": "The keyword to search for"
                    },
                    "directory": {
                        "type": "string",
                        "description": "Subdirectory of the site root to search (default: \"src/content/blog\")"
                    },
                    "case_sensitive": {
                        "type": "boolean",
                        "description": "Whether the search is case sensitive (default: false)"
                    }
                },
                "required": ["keyword"]
            }),
        },
        ToolDefinition {
            name: "delete_article".to_string(),
            description: "Delete an article file and optionally commit the deletion.".to_string(),
            input_schema: json!({
                "type": "object",
                "properties": {
                    "filepath": {
                        "type": "string",
                        "description": "File path relative to the site root (e.g. \"src/content/blog/my-article.md\")"
                    },
                    "commit": {
                        "type": "boolean",
                        "description": "Whether to commit the deletion (default: true)"
                    },
                    "push": {
                        "type": "boolean",
                        "description": "Whether to push after committing (default: true)"
                    }
                },
                "required": ["filepath"]
            }),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn exactly_three_tools() {
        let names: Vec<String> = get_tool_definitions().into_iter().map(|t| t.name).collect();
        assert_eq!(names, ["publish_blog_post", "find_articles", "delete_article"]);
    }

    #[test]
    fn each_tool_has_object_schema_with_required_fields() {
        for tool in get_tool_definitions() {
            assert_eq!(tool.input_schema["type"], "object", "{}", tool.name);
            let required = tool.input_schema["required"].as_array().unwrap();
            for field in required {
                let field = field.as_str().unwrap();
                assert!(
                    tool.input_schema["properties"].get(field).is_some(),
                    "{} requires undeclared field {field}",
                    tool.name
                );
            }
        }
    }

    #[test]
    fn definitions_serialize_input_schema_in_camel_case() {
        let json = serde_json::to_value(get_tool_definitions()).unwrap();
        assert!(json[0].get("inputSchema").is_some());
        assert!(json[0].get("input_schema").is_none());
    }

    #[test]
    fn result_serializes_is_error_flag() {
        let json = serde_json::to_value(ToolResult::error("boom")).unwrap();
        assert_eq!(
            json,
            json!({"content": [{"type": "text", "text": "boom"}], "isError": true})
        );

        let json = serde_json::to_value(ToolResult::text("fine")).unwrap();
        assert_eq!(json["isError"], false);
    }

    #[test]
    fn as_text_joins_content() {
        assert_eq!(ToolResult::text("hello").as_text(), "hello");
    }
}
