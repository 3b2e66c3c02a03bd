//! Git abstraction for depdrift
//!
//! Exposes repository access through the [`VcsProvider`] and
//! [`VcsRepository`] traits, with a git2-backed implementation.

pub mod error;
pub mod git;
pub mod provider;

pub use error::{Error, Result};
pub use git::GitProvider;
pub use provider::{VcsProvider, VcsRepository};
