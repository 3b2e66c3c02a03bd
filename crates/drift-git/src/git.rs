//! git2-backed provider implementation

use std::path::{Path, PathBuf};

use git2::build::CheckoutBuilder;
use git2::Repository;

use crate::provider::{VcsProvider, VcsRepository};
use crate::{Error, Result};

/// Opens and manages local git repositories through libgit2.
#[derive(Debug, Default)]
pub struct GitProvider;

impl GitProvider {
    /// Create a new GitProvider.
    pub fn new() -> Self {
        Self
    }
}

impl VcsProvider for GitProvider {
    fn open(&self, path: &Path) -> Result<Box<dyn VcsRepository>> {
        match Repository::open(path) {
            Ok(repo) => Ok(Box::new(GitRepository {
                repo,
                path: path.to_path_buf(),
            })),
            Err(e) if e.code() == git2::ErrorCode::NotFound => Err(Error::Absent {
                path: path.to_path_buf(),
            }),
            Err(e) => Err(Error::Git(e)),
        }
    }

    fn create(&self, url: &str, path: &Path) -> Result<Box<dyn VcsRepository>> {
        tracing::debug!(url, path = %path.display(), "cloning repository");
        let repo = Repository::clone(url, path).map_err(|e| Error::CloneFailed {
            url: url.to_string(),
            message: e.message().to_string(),
        })?;
        Ok(Box::new(GitRepository {
            repo,
            path: path.to_path_buf(),
        }))
    }

    fn remove(&self, path: &Path) -> Result<()> {
        if path.exists() {
            tracing::debug!(path = %path.display(), "removing repository contents");
            std::fs::remove_dir_all(path)?;
        }
        Ok(())
    }
}

/// A single local git repository.
pub struct GitRepository {
    repo: Repository,
    path: PathBuf,
}

impl VcsRepository for GitRepository {
    fn current_revision(&self) -> Result<String> {
        let head = self.repo.head().map_err(|e| Error::NoRevision {
            message: e.message().to_string(),
        })?;
        let commit = head.peel_to_commit().map_err(|e| Error::NoRevision {
            message: e.message().to_string(),
        })?;
        Ok(commit.id().to_string())
    }

    fn fetch(&self) -> Result<()> {
        let mut remote = self.repo.find_remote("origin").map_err(|e| Error::FetchFailed {
            message: e.message().to_string(),
        })?;
        // Empty refspec list fetches the remote's configured refspecs
        remote
            .fetch(&[] as &[&str], None, None)
            .map_err(|e| Error::FetchFailed {
                message: e.message().to_string(),
            })?;
        tracing::debug!(path = %self.path.display(), "fetched from origin");
        Ok(())
    }

    fn checkout(&self, reference: &str) -> Result<()> {
        let object = self
            .repo
            .revparse_single(reference)
            .map_err(|e| Error::CheckoutFailed {
                reference: reference.to_string(),
                message: e.message().to_string(),
            })?;
        let commit = object
            .peel(git2::ObjectType::Commit)
            .map_err(|e| Error::CheckoutFailed {
                reference: reference.to_string(),
                message: e.message().to_string(),
            })?;

        self.repo.set_head_detached(commit.id())?;
        self.repo
            .checkout_head(Some(CheckoutBuilder::default().force()))?;
        tracing::debug!(path = %self.path.display(), reference, "checked out revision");
        Ok(())
    }
}
