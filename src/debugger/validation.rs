use super::breakpoint::{Breakpoint, PendingBreakpoint};
use super::location::{Location, SourcePosition};
use crate::error::{ensure, Error, Result};

/// Unwraps a location that may be missing from an untrusted record.
pub fn require_location<L>(location: Option<L>) -> Result<L> {
    location.ok_or_else(|| {
        tracing::error!("location must exist");
        Error::InvariantViolation {
            message: "location must exist".to_string(),
        }
    })
}

pub fn assert_pending_location<L: SourcePosition + ?Sized>(location: &L) -> Result<()> {
    // An absent URL is fine, an unresolved one is not.
    ensure(!location.source_url().is_unresolved(), "location must have a source url")?;
    ensure(location.line().is_some(), "location must have a line")?;
    // Column is optional and 0 counts as a value, so there is nothing to check.
    Ok(())
}

pub fn assert_location(location: &Location) -> Result<()> {
    assert_pending_location(location)?;
    ensure(!location.source_id.is_empty(), "location must have a source id")
}

pub fn assert_breakpoint(breakpoint: &Breakpoint) -> Result<()> {
    assert_location(&breakpoint.location)?;
    assert_location(&breakpoint.generated_location)
}

pub fn assert_pending_breakpoint(pending: &PendingBreakpoint) -> Result<()> {
    assert_pending_location(&pending.location)?;
    assert_pending_location(&pending.generated_location)
}
