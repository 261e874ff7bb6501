//! The validated content root

use std::path::{Path, PathBuf};

use crate::{Error, NormalizedPath, Result};

/// The single base directory every site operation is resolved against.
///
/// Constructed once at startup. The path is canonicalized (via `dunce`, so
/// Windows paths stay free of the `\\?\` prefix) and never changes afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentRoot {
    native: PathBuf,
    normalized: NormalizedPath,
}

impl ContentRoot {
    /// Validate and canonicalize `path`.
    ///
    /// Fails if the path does not exist or is not a directory.
    pub fn new(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(Error::RootNotFound {
                path: path.to_path_buf(),
            });
        }
        if !path.is_dir() {
            return Err(Error::NotADirectory {
                path: path.to_path_buf(),
            });
        }

        let native = dunce::canonicalize(path).map_err(|e| Error::io(path, e))?;
        let normalized = NormalizedPath::new(&native);
        tracing::debug!(root = %normalized, "Content root validated");

        Ok(Self { native, normalized })
    }

    /// Platform-native root path.
    pub fn path(&self) -> &Path {
        &self.native
    }

    /// Normalized root path.
    pub fn normalized(&self) -> &NormalizedPath {
        &self.normalized
    }

    /// Lexically resolve `relative` under the root.
    ///
    /// The result may still point outside the root (`../x`); callers check
    /// with [`ContentRoot::contains`].
    pub fn resolve(&self, relative: &str) -> NormalizedPath {
        self.normalized.join(relative)
    }

    /// Lexical containment check.
    pub fn contains(&self, candidate: &NormalizedPath) -> bool {
        candidate.starts_with(&self.normalized)
    }

    /// Containment check against the real filesystem.
    ///
    /// Canonicalizes `candidate`, following symlinks, and requires it to sit
    /// under the canonical root. The candidate must exist.
    pub fn contains_existing(&self, candidate: &Path) -> Result<bool> {
        let canonical = dunce::canonicalize(candidate).map_err(|e| Error::io(candidate, e))?;
        Ok(canonical.starts_with(&self.native))
    }

    /// Display form of `path` relative to the root, forward slashes.
    ///
    /// Paths outside the root are shown in full.
    pub fn display_relative(&self, path: &Path) -> String {
        let normalized = NormalizedPath::new(path);
        match normalized.relative_to(&self.normalized) {
            Some(rel) => rel.to_string(),
            None => normalized.as_str().to_string(),
        }
    }
}
