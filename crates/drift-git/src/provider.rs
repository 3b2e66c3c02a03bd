//! Version-control provider traits.
//!
//! The checking core consumes repositories through these traits so it can
//! run against fakes in tests and stays free of git-protocol logic.

use std::path::Path;

use crate::Result;

/// Trait for opening and managing repositories at filesystem locations.
pub trait VcsProvider {
    /// Open an existing repository.
    ///
    /// Returns [`crate::Error::Absent`] when nothing exists at `path`, so
    /// callers can distinguish a missing checkout from a broken one.
    fn open(&self, path: &Path) -> Result<Box<dyn VcsRepository>>;

    /// Clone `url` into `path` and return a handle to the new repository.
    fn create(&self, url: &str, path: &Path) -> Result<Box<dyn VcsRepository>>;

    /// Remove the repository contents at `path`. No-op when absent.
    fn remove(&self, path: &Path) -> Result<()>;
}

/// Trait for read and pin operations on a single repository.
pub trait VcsRepository {
    /// The full revision identifier the repository currently sits at.
    fn current_revision(&self) -> Result<String>;

    /// Fetch updates from the default remote.
    fn fetch(&self) -> Result<()>;

    /// Check out the exact revision named by `reference`.
    ///
    /// `reference` may be a commit id, a tag, or a ref name.
    fn checkout(&self, reference: &str) -> Result<()>;
}

impl std::fmt::Debug for dyn VcsRepository {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("VcsRepository")
    }
}
