//! Shared test utilities for the site-manager workspace.
//!
//! Dev-dependency only, never published.
//!
//! # Modules
//!
//! - [`git`] - git repository fixtures, with and without a bare remote
//! - [`site`] - [`site::TestSite`] builder for a content root inside a sandbox

pub mod git;
pub mod site;
