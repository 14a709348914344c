use std::collections::{BTreeMap, HashMap};

use super::breakpoint::{
    create_breakpoint_from_pending, create_pending_breakpoint, Breakpoint, PendingBreakpoint,
};
use super::identity::{make_location_id, make_pending_location_id};
use super::location::{Location, SourceUrl};
use super::lookup::{breakpoint_at_location, BreakpointStore};
use super::validation::assert_breakpoint;
use crate::config::DebuggerSettings;
use crate::error::Result;

/// A source that just finished loading in the target.
#[derive(Debug, Clone)]
pub struct LoadedSource {
    pub id: String,
    pub url: SourceUrl,
}

impl LoadedSource {
    pub fn new(id: impl Into<String>, url: impl Into<SourceUrl>) -> Self {
        Self {
            id: id.into(),
            url: url.into(),
        }
    }
}

/// The session's breakpoint set, keyed by location id and kept in insertion
/// order.
pub struct Breakpoints {
    points: Vec<Breakpoint>,
    index: HashMap<String, usize>,
    column_breakpoints: bool,
}

impl Breakpoints {
    pub fn new() -> Self {
        Self::with_settings(&DebuggerSettings::default())
    }

    /// The column-breakpoints flag is read once here and used for every
    /// lookup on this set.
    pub fn with_settings(settings: &DebuggerSettings) -> Self {
        Self {
            points: Vec::new(),
            index: HashMap::new(),
            column_breakpoints: settings.features.column_breakpoints,
        }
    }

    pub fn column_breakpoints(&self) -> bool {
        self.column_breakpoints
    }

    /// Adds a validated breakpoint, replacing any at the same location.
    pub fn add(&mut self, breakpoint: Breakpoint) -> Result<()> {
        assert_breakpoint(&breakpoint)?;
        let id = make_location_id(&breakpoint.location);
        match self.index.get(&id).copied() {
            Some(slot) => self.points[slot] = breakpoint,
            None => {
                self.index.insert(id.clone(), self.points.len());
                self.points.push(breakpoint);
            }
        }
        tracing::debug!("Breakpoint set at {}", id);
        Ok(())
    }

    pub fn remove(&mut self, location: &Location) -> Option<Breakpoint> {
        let id = make_location_id(location);
        let slot = self.index.remove(&id)?;
        let removed = self.points.remove(slot);
        self.reindex();
        tracing::debug!("Breakpoint removed from {}", id);
        Some(removed)
    }

    pub fn contains(&self, location: &Location) -> bool {
        self.index.contains_key(&make_location_id(location))
    }

    /// Exact match on the location id.
    pub fn get(&self, location: &Location) -> Option<&Breakpoint> {
        self.index
            .get(&make_location_id(location))
            .map(|&slot| &self.points[slot])
    }

    /// Line-based match within the same source, honoring the
    /// column-breakpoints setting.
    pub fn at_location(&self, location: &Location) -> Option<&Breakpoint> {
        let same_source = self
            .points
            .iter()
            .filter(|breakpoint| breakpoint.location.source_id == location.source_id);
        breakpoint_at_location(same_source, location, self.column_breakpoints)
    }

    /// Returns false when no breakpoint sits at `location`.
    pub fn set_disabled(&mut self, location: &Location, disabled: bool) -> bool {
        match self.index.get(&make_location_id(location)) {
            Some(&slot) => {
                self.points[slot].disabled = disabled;
                true
            }
            None => false,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &Breakpoint> {
        self.points.iter()
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn clear(&mut self) {
        self.points.clear();
        self.index.clear();
    }

    /// Pending records keyed by pending location id. Breakpoints in sources
    /// without a URL are left out: their keys collide across sources and
    /// `restore_source` could never match them.
    pub fn to_pending(&self) -> Result<BTreeMap<String, PendingBreakpoint>> {
        let mut pending = BTreeMap::new();
        for breakpoint in &self.points {
            if breakpoint.location.source_url == SourceUrl::Absent {
                tracing::warn!(
                    "Not persisting breakpoint at {}, its source has no url",
                    make_location_id(&breakpoint.location)
                );
                continue;
            }
            let record = create_pending_breakpoint(breakpoint)?;
            pending.insert(make_pending_location_id(&record.location)?, record);
        }
        Ok(pending)
    }

    /// Re-creates the pending breakpoints that belong to a freshly loaded
    /// source. Returns how many were restored.
    pub fn restore_source<'a, I>(
        &mut self,
        pending: I,
        source: &LoadedSource,
        generated: &LoadedSource,
    ) -> Result<usize>
    where
        I: IntoIterator<Item = &'a PendingBreakpoint>,
    {
        let url = match &source.url {
            SourceUrl::Url(url) => url,
            _ => {
                tracing::warn!("Source {} has no url, nothing to restore", source.id);
                return Ok(0);
            }
        };

        let mut restored = 0;
        for record in pending {
            if record.location.source_url.as_str() != Some(url.as_str()) {
                continue;
            }
            let breakpoint = create_breakpoint_from_pending(record, &source.id, &generated.id);
            match self.add(breakpoint) {
                Ok(()) => restored += 1,
                // Persisted generated locations may be degenerate.
                Err(err) if err.is_invariant_violation() => {
                    tracing::warn!("Skipping pending breakpoint in {}: {}", url, err);
                }
                Err(err) => return Err(err),
            }
        }
        tracing::debug!("Restored {} breakpoints for {}", restored, url);
        Ok(restored)
    }

    fn reindex(&mut self) {
        self.index = self
            .points
            .iter()
            .enumerate()
            .map(|(slot, breakpoint)| (make_location_id(&breakpoint.location), slot))
            .collect();
    }
}

impl Default for Breakpoints {
    fn default() -> Self {
        Self::new()
    }
}

impl BreakpointStore for Breakpoints {
    fn get_breakpoint(&self, location: &Location) -> Option<&Breakpoint> {
        self.get(location).or_else(|| self.at_location(location))
    }
}
