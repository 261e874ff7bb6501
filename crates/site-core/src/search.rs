//! Keyword search over markdown articles

use std::fmt;

use site_fs::{NormalizedPath, io};
use walkdir::WalkDir;

use crate::{Error, Result, Site};

/// Maximum preview length in characters before truncation.
const PREVIEW_CHARS: usize = 100;

/// Only plain markdown is searched; `.mdx` articles are not.
const SEARCH_EXTENSION: &str = ".md";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery {
    pub keyword: String,
    /// Directory relative to the root; the configured content directory if `None`
    pub directory: Option<String>,
    pub case_sensitive: bool,
}

impl SearchQuery {
    /// Case-insensitive query over the configured content directory.
    pub fn new(keyword: impl Into<String>) -> Self {
        Self {
            keyword: keyword.into(),
            directory: None,
            case_sensitive: false,
        }
    }

    pub fn in_directory(mut self, directory: impl Into<String>) -> Self {
        self.directory = Some(directory.into());
        self
    }

    pub fn case_sensitive(mut self, case_sensitive: bool) -> Self {
        self.case_sensitive = case_sensitive;
        self
    }
}

/// One search hit. Paths are relative to the content root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchMatch {
    /// Keyword appears in the file name; content was not inspected
    FileName { path: String },
    /// First content line containing the keyword
    Content {
        path: String,
        /// 1-based
        line: usize,
        preview: String,
    },
    /// The file or directory could not be read
    Unreadable { path: String, error: String },
}

impl fmt::Display for SearchMatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::FileName { path } => write!(f, "✓ Found in filename: {path}"),
            Self::Content {
                path,
                line,
                preview,
            } => write!(f, "✓ Found in {path} (line {line}): {preview}"),
            Self::Unreadable { path, error } => write!(f, "✗ Error reading {path}: {error}"),
        }
    }
}

/// Search results in filesystem enumeration order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchReport {
    pub keyword: String,
    pub matches: Vec<SearchMatch>,
}

impl SearchReport {
    pub fn is_empty(&self) -> bool {
        self.matches.is_empty()
    }

    pub fn len(&self) -> usize {
        self.matches.len()
    }
}

impl fmt::Display for SearchReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.matches.is_empty() {
            return write!(f, "No articles found containing '{}'", self.keyword);
        }
        writeln!(
            f,
            "Found {} matches for '{}':",
            self.matches.len(),
            self.keyword
        )?;
        for hit in &self.matches {
            write!(f, "\n{hit}")?;
        }
        Ok(())
    }
}

/// Trimmed line, cut to [`PREVIEW_CHARS`] characters with `...` when longer.
fn preview(line: &str) -> String {
    let trimmed = line.trim();
    if trimmed.chars().count() > PREVIEW_CHARS {
        let cut: String = trimmed.chars().take(PREVIEW_CHARS).collect();
        format!("{cut}...")
    } else {
        trimmed.to_string()
    }
}

fn is_searchable(file_name: &str) -> bool {
    file_name.ends_with(SEARCH_EXTENSION)
}

/// Find `.md` files under the query directory mentioning the keyword.
///
/// An empty keyword matches every file name. Unreadable entries are reported
/// per file; they never abort the search.
pub fn find_articles(site: &Site, query: &SearchQuery) -> Result<SearchReport> {
    let directory = query
        .directory
        .as_deref()
        .unwrap_or(site.config().content_dir.as_str());
    let search_dir = site.root().resolve(directory);
    if !site.root().contains(&search_dir) {
        return Err(Error::OutsideRoot {
            path: directory.to_string(),
        });
    }
    if !search_dir.is_dir() {
        return Err(Error::DirectoryNotFound {
            path: search_dir.to_string(),
        });
    }

    let fold = |text: &str| {
        if query.case_sensitive {
            text.to_string()
        } else {
            text.to_lowercase()
        }
    };
    let needle = fold(query.keyword.as_str());
    let mut matches = Vec::new();

    for entry in WalkDir::new(search_dir.to_native()) {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                let path = e
                    .path()
                    .map(|p| site.root().display_relative(p))
                    .unwrap_or_else(|| directory.to_string());
                tracing::warn!(path = %path, error = %e, "Skipping unreadable entry");
                matches.push(SearchMatch::Unreadable {
                    path,
                    error: e.to_string(),
                });
                continue;
            }
        };
        if !entry.file_type().is_file() {
            continue;
        }
        let file_name = entry.file_name().to_string_lossy().into_owned();
        if !is_searchable(&file_name) {
            continue;
        }
        let path = site.root().display_relative(entry.path());

        if fold(file_name.as_str()).contains(needle.as_str()) {
            matches.push(SearchMatch::FileName { path });
            continue;
        }

        let content = match io::read_text(&NormalizedPath::new(entry.path())) {
            Ok(content) => content,
            Err(e) => {
                tracing::warn!(path = %path, error = %e, "Skipping unreadable article");
                matches.push(SearchMatch::Unreadable {
                    path,
                    error: e.to_string(),
                });
                continue;
            }
        };

        let hit = content
            .lines()
            .enumerate()
            .find(|&(_, line)| fold(line).contains(needle.as_str()));
        if let Some((index, line)) = hit {
            matches.push(SearchMatch::Content {
                path,
                line: index + 1,
                preview: preview(line),
            });
        }
    }

    tracing::info!(keyword = %query.keyword, matches = matches.len(), "Search finished");
    Ok(SearchReport {
        keyword: query.keyword.clone(),
        matches,
    })
}
