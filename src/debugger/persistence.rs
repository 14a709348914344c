//! JSON snapshots of pending breakpoints, keyed by pending location id.

use std::collections::BTreeMap;

use serde::Deserialize;

use super::breakpoint::{AstLocation, PendingBreakpoint};
use super::identity::make_pending_location_id;
use super::location::PendingLocation;
use super::validation::{assert_pending_location, require_location};
use crate::error::Result;

/// Record as read from disk, before its locations are known to exist.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct StoredPendingBreakpoint {
    location: Option<PendingLocation>,
    generated_location: Option<PendingLocation>,
    ast_location: AstLocation,
    #[serde(default)]
    condition: Option<String>,
    #[serde(default)]
    disabled: bool,
}

pub fn pending_to_json(pending: &BTreeMap<String, PendingBreakpoint>) -> Result<String> {
    Ok(serde_json::to_string_pretty(pending)?)
}

/// Parses and validates a snapshot. Keys are recomputed from each record's
/// location, so a hand-edited key cannot go stale.
///
/// Only the primary location is checked. A generated location without a URL
/// is stored that way by `create_pending_breakpoint` and loads back as-is.
pub fn pending_from_json(json: &str) -> Result<BTreeMap<String, PendingBreakpoint>> {
    let stored: BTreeMap<String, StoredPendingBreakpoint> = serde_json::from_str(json)?;

    let mut pending = BTreeMap::new();
    for (key, record) in stored {
        let record = PendingBreakpoint {
            location: require_location(record.location)?,
            generated_location: require_location(record.generated_location)?,
            ast_location: record.ast_location,
            condition: record.condition,
            disabled: record.disabled,
        };
        assert_pending_location(&record.location)?;

        let id = make_pending_location_id(&record.location)?;
        if id != key {
            tracing::warn!("Pending breakpoint stored as {} belongs at {}", key, id);
        }
        pending.insert(id, record);
    }
    Ok(pending)
}
