//! Manifest and lockfile handling for depdrift
//!
//! Loads the dependency manifest (`deps.yaml`) and lockfile (`deps.lock`),
//! computes the manifest content hash that ties the two together, and
//! normalizes dependency lists through deduplication.

pub mod dedupe;
pub mod error;
pub mod lockfile;
pub mod manifest;
pub mod schema;

pub use dedupe::dedupe;
pub use error::{Error, Result};
pub use lockfile::Lockfile;
pub use manifest::Manifest;
pub use schema::{LockedDependency, ManifestDependency, PinnedEntry};
