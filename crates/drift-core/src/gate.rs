//! Manifest/lockfile consistency gate.

use drift_manifest::{Lockfile, Manifest};

use crate::{Error, Result};

/// Validate that the lock was produced from the current manifest content.
///
/// Recomputes the manifest content hash and compares it to the hash stored
/// in the lockfile at resolution time. A mismatch means the manifest has
/// changed since the lock was generated; the lock cannot be trusted to
/// describe the current dependency set, so the whole run aborts before any
/// dependency is processed.
pub fn validate(manifest: &Manifest, lockfile: &Lockfile) -> Result<()> {
    let actual = manifest.content_hash();
    if actual != lockfile.hash {
        return Err(Error::StaleLock {
            expected: lockfile.hash.clone(),
            actual,
        });
    }
    tracing::debug!(hash = %actual, "lockfile matches manifest content");
    Ok(())
}
