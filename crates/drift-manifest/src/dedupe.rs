//! Deduplication of dependency lists.

use std::collections::HashMap;

use crate::schema::PinnedEntry;
use crate::{Error, Result};

/// Collapse a dependency list into a unique-by-name list.
///
/// First-occurrence order is preserved. Entries sharing a name with an
/// identical pin collapse to a single entry; a shared name with differing
/// pins is a hard conflict, never a silent pick. Idempotent.
pub fn dedupe<T>(entries: &[T]) -> Result<Vec<T>>
where
    T: PinnedEntry + Clone,
{
    let mut seen: HashMap<&str, &str> = HashMap::with_capacity(entries.len());
    let mut unique = Vec::with_capacity(entries.len());

    for entry in entries {
        match seen.get(entry.name()) {
            Some(pin) if *pin == entry.pin() => {
                tracing::debug!(name = entry.name(), "collapsing duplicate entry");
            }
            Some(_) => {
                return Err(Error::PinConflict {
                    name: entry.name().to_string(),
                });
            }
            None => {
                seen.insert(entry.name(), entry.pin());
                unique.push(entry.clone());
            }
        }
    }

    Ok(unique)
}
