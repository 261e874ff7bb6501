//! Normalized path handling for cross-platform compatibility

use std::path::{Path, PathBuf};

/// A path normalized to forward slashes with `.` and `..` resolved lexically.
///
/// All containment checks in the workspace compare `NormalizedPath` values,
/// so a `..` segment can never hide behind string concatenation. The path is
/// converted back to a platform-native `PathBuf` only at I/O boundaries.
///
/// Leading `..` segments of a relative path are dropped, and `..` never climbs
/// above the filesystem root of an absolute path.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NormalizedPath {
    /// Internal representation always uses forward slashes
    inner: String,
}

impl NormalizedPath {
    /// Create a new NormalizedPath from any path-like input.
    pub fn new(path: impl AsRef<Path>) -> Self {
        let path_str = path.as_ref().to_string_lossy();
        Self {
            inner: clean(&path_str.replace('\\', "/")),
        }
    }

    /// Get the internal normalized string representation.
    pub fn as_str(&self) -> &str {
        &self.inner
    }

    /// Convert to a platform-native PathBuf for I/O operations.
    pub fn to_native(&self) -> PathBuf {
        PathBuf::from(&self.inner)
    }

    /// Join this path with a segment and re-normalize.
    ///
    /// An absolute `segment` is nested under `self` rather than replacing it.
    pub fn join(&self, segment: &str) -> Self {
        let segment = segment.replace('\\', "/");
        let joined = if self.inner.is_empty() {
            segment
        } else if self.inner.ends_with('/') {
            format!("{}{}", self.inner, segment)
        } else {
            format!("{}/{}", self.inner, segment)
        };
        Self {
            inner: clean(&joined),
        }
    }

    /// Get the parent directory.
    pub fn parent(&self) -> Option<Self> {
        let trimmed = self.inner.trim_end_matches('/');
        match trimmed.rfind('/') {
            Some(idx) if idx > 0 => Some(Self {
                inner: trimmed[..idx].to_string(),
            }),
            Some(0) if trimmed.len() > 1 => Some(Self {
                inner: "/".to_string(),
            }),
            _ => None,
        }
    }

    /// Get the file name component.
    pub fn file_name(&self) -> Option<&str> {
        let trimmed = self.inner.trim_end_matches('/');
        trimmed.rsplit('/').next().filter(|name| !name.is_empty())
    }

    /// Get the extension if present.
    pub fn extension(&self) -> Option<&str> {
        self.file_name().and_then(|name| {
            let idx = name.rfind('.')?;
            if idx == 0 {
                None
            } else {
                Some(&name[idx + 1..])
            }
        })
    }

    /// Check if this path exists on the filesystem.
    pub fn exists(&self) -> bool {
        self.to_native().exists()
    }

    /// Check if this is a directory.
    pub fn is_dir(&self) -> bool {
        self.to_native().is_dir()
    }

    /// Check if this is a file.
    pub fn is_file(&self) -> bool {
        self.to_native().is_file()
    }

    /// Component-wise prefix check.
    ///
    /// `/site/blog` starts with `/site` but not with `/si`.
    pub fn starts_with(&self, base: &NormalizedPath) -> bool {
        if base.inner == "/" {
            return self.inner.starts_with('/');
        }
        let base = base.inner.trim_end_matches('/');
        if base.is_empty() {
            return !self.inner.starts_with('/');
        }
        self.inner == base
            || self
                .inner
                .strip_prefix(base)
                .is_some_and(|rest| rest.starts_with('/'))
    }

    /// Path of `self` relative to `base`, or `None` if `self` is not under it.
    pub fn relative_to(&self, base: &NormalizedPath) -> Option<&str> {
        if !self.starts_with(base) {
            return None;
        }
        let base = base.inner.trim_end_matches('/');
        Some(self.inner[base.len()..].trim_start_matches('/'))
    }
}

/// Resolve `.` and `..` segments and collapse repeated separators.
fn clean(path: &str) -> String {
    let network = path.starts_with("//") && !path.starts_with("///");
    let absolute = path.starts_with('/');

    let mut parts: Vec<&str> = Vec::new();
    for segment in path.split('/') {
        match segment {
            "" | "." => {}
            ".." => {
                // A drive prefix such as `C:` is never popped.
                let at_drive = parts.len() == 1 && parts[0].ends_with(':');
                if !at_drive {
                    parts.pop();
                }
            }
            other => parts.push(other),
        }
    }

    let body = parts.join("/");
    if network {
        format!("//{body}")
    } else if absolute {
        format!("/{body}")
    } else {
        body
    }
}

impl AsRef<Path> for NormalizedPath {
    fn as_ref(&self) -> &Path {
        Path::new(&self.inner)
    }
}

impl std::fmt::Display for NormalizedPath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.inner)
    }
}

impl From<&str> for NormalizedPath {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for NormalizedPath {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

impl From<PathBuf> for NormalizedPath {
    fn from(p: PathBuf) -> Self {
        Self::new(p)
    }
}

impl From<&Path> for NormalizedPath {
    fn from(p: &Path) -> Self {
        Self::new(p)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clean_collapses_separators() {
        assert_eq!(clean("/a//b///c"), "/a/b/c");
        assert_eq!(clean("a/./b/"), "a/b");
    }

    #[test]
    fn clean_keeps_drive_prefix() {
        assert_eq!(clean("C:/../x"), "C:/x");
    }

    #[test]
    fn clean_preserves_network_prefix() {
        assert_eq!(clean("//server/share/../x"), "//server/x");
    }
}
