//! Filesystem layer for the site manager
//!
//! Provides the validated content root, lexically normalized paths with
//! containment checks, and atomic text I/O.

pub mod config;
pub mod error;
pub mod io;
pub mod path;
pub mod root;

pub use error::{Error, Result};
pub use path::NormalizedPath;
pub use root::ContentRoot;
