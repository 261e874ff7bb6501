//! Article writer

use std::path::PathBuf;

use chrono::NaiveDate;
use site_fs::io;

use crate::{Error, Result, Site, frontmatter};

/// Where an article was written and whether a header was added.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WrittenArticle {
    pub path: PathBuf,
    /// Path relative to the content root, forward slashes
    pub relative: String,
    pub frontmatter_added: bool,
}

/// Reject names that are not a single, ordinary path component.
fn validate_file_name(name: &str) -> Result<()> {
    let invalid = name.trim().is_empty()
        || name == "."
        || name == ".."
        || name.contains(['/', '\\', '\0']);
    if invalid {
        return Err(Error::InvalidFileName {
            name: name.to_string(),
        });
    }
    Ok(())
}

/// Write `content` to `<root>/<directory>/<filename>`, overwriting.
///
/// Creates `directory` if needed. Markdown content without a front matter
/// delimiter gets a header dated `pub_date`.
pub fn write_article(
    site: &Site,
    directory: &str,
    filename: &str,
    content: &str,
    pub_date: NaiveDate,
) -> Result<WrittenArticle> {
    validate_file_name(filename)?;

    let target_dir = site.root().resolve(directory);
    if !site.root().contains(&target_dir) {
        return Err(Error::OutsideRoot {
            path: directory.to_string(),
        });
    }
    let target = target_dir.join(filename);

    let body = frontmatter::inject(content, filename, pub_date, &site.config().frontmatter);
    let frontmatter_added = body.len() != content.len();

    io::write_text(&target, &body)?;

    let path = target.to_native();
    let relative = site.root().display_relative(&path);
    tracing::info!(path = %relative, frontmatter_added, "Saved article");

    Ok(WrittenArticle {
        path,
        relative,
        frontmatter_added,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("")]
    #[case("  ")]
    #[case(".")]
    #[case("..")]
    #[case("nested/post.md")]
    #[case("..\\post.md")]
    fn invalid_file_names(#[case] name: &str) {
        assert!(matches!(
            validate_file_name(name),
            Err(Error::InvalidFileName { .. })
        ));
    }

    #[test]
    fn ordinary_file_name_is_accepted() {
        assert!(validate_file_name("my-post.md").is_ok());
        assert!(validate_file_name(".draft.md").is_ok());
    }
}
