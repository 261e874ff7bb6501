//! Front matter synthesis for markdown articles
//!
//! A block of the form
//!
//! ```text
//! ---
//! title: "Hello World"
//! pubDate: 2026-10-19
//! description: "Article published via MCP"
//! author: "AI Assistant"
//! ---
//!
//! ```
//!
//! is prepended to markdown content that does not already start with the
//! `---` delimiter. Content that has one is never touched.

use std::borrow::Cow;

use chrono::NaiveDate;

use crate::config::FrontmatterConfig;

/// Front matter delimiter line.
pub const DELIMITER: &str = "---";

/// Extensions treated as markdown articles.
pub const MARKDOWN_EXTENSIONS: [&str; 2] = ["md", "mdx"];

/// Number of leading lines searched for a `# ` heading.
const TITLE_SCAN_LINES: usize = 5;

/// Whether the last component of `path` is a named file with a markdown
/// extension.
pub fn is_markdown(path: &str) -> bool {
    let name = path.rsplit(['/', '\\']).next().unwrap_or(path);
    name.rsplit_once('.')
        .is_some_and(|(stem, ext)| !stem.is_empty() && MARKDOWN_EXTENSIONS.contains(&ext))
}

/// Whether `content` already begins with a front matter delimiter.
pub fn has_frontmatter(content: &str) -> bool {
    content.starts_with(DELIMITER)
}

/// Title for an article.
///
/// The first `# ` heading within the first five lines wins; otherwise the file
/// name without its markdown extension, `-`/`_` replaced by spaces, title-cased.
pub fn derive_title(content: &str, filename: &str) -> String {
    content
        .lines()
        .take(TITLE_SCAN_LINES)
        .filter_map(|line| line.strip_prefix("# "))
        .map(str::trim)
        .find(|heading| !heading.is_empty())
        .map(str::to_string)
        .unwrap_or_else(|| title_from_filename(filename))
}

fn title_from_filename(filename: &str) -> String {
    let stem = MARKDOWN_EXTENSIONS
        .iter()
        .find_map(|ext| filename.strip_suffix(&format!(".{ext}")))
        .unwrap_or(filename);
    title_case(&stem.replace(['-', '_'], " "))
}

/// Uppercase every letter that follows a non-letter, lowercase the rest.
fn title_case(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    let mut previous_is_letter = false;
    for c in text.chars() {
        if previous_is_letter {
            result.extend(c.to_lowercase());
        } else {
            result.extend(c.to_uppercase());
        }
        previous_is_letter = c.is_alphabetic();
    }
    result
}

/// Render a double-quoted YAML scalar.
fn quote(value: &str) -> String {
    let mut quoted = String::with_capacity(value.len() + 2);
    quoted.push('"');
    for c in value.chars() {
        match c {
            '"' => quoted.push_str("\\\""),
            '\\' => quoted.push_str("\\\\"),
            '\n' => quoted.push_str("\\n"),
            '\r' => quoted.push_str("\\r"),
            '\t' => quoted.push_str("\\t"),
            c if c.is_control() => {}
            c => quoted.push(c),
        }
    }
    quoted.push('"');
    quoted
}

/// Metadata header fields for one article.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frontmatter {
    pub title: String,
    pub pub_date: NaiveDate,
    pub description: String,
    pub author: String,
}

impl Frontmatter {
    pub fn new(title: String, pub_date: NaiveDate, config: &FrontmatterConfig) -> Self {
        Self {
            title,
            pub_date,
            description: config.description.clone(),
            author: config.author.clone(),
        }
    }

    /// The block including both delimiters and the trailing blank line.
    pub fn render(&self) -> String {
        format!(
            "{DELIMITER}\ntitle: {}\npubDate: {}\ndescription: {}\nauthor: {}\n{DELIMITER}\n\n",
            quote(&self.title),
            self.pub_date.format("%Y-%m-%d"),
            quote(&self.description),
            quote(&self.author),
        )
    }
}

/// Prepend front matter to markdown `content` that lacks it.
///
/// Non-markdown files and content starting with the delimiter are returned
/// unchanged.
pub fn inject<'a>(
    content: &'a str,
    filename: &str,
    pub_date: NaiveDate,
    config: &FrontmatterConfig,
) -> Cow<'a, str> {
    if !is_markdown(filename) || has_frontmatter(content) {
        return Cow::Borrowed(content);
    }
    let header = Frontmatter::new(derive_title(content, filename), pub_date, config);
    Cow::Owned(header.render() + content)
}
