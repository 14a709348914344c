use serde::{Deserialize, Serialize};

use super::location::{Location, PendingLocation};
use super::validation::assert_pending_location;
use crate::error::Result;

/// Enclosing scope of a breakpoint and the offset it was resolved against.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AstLocation {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub offset: Location,
}

impl AstLocation {
    /// No scope name yet, anchored at `offset`.
    pub fn unresolved(offset: Location) -> Self {
        Self { name: None, offset }
    }
}

/// Computes the name of the scope enclosing a location. Backed by the
/// source map / parser outside this crate.
pub trait ScopeResolver {
    fn scope_name(&self, offset: &Location) -> Option<String>;
}

/// A breakpoint in the running session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Breakpoint {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub location: Location,
    pub generated_location: Location,
    pub ast_location: AstLocation,
    pub condition: Option<String>,
    pub disabled: bool,
    pub hidden: bool,
    pub loading: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub original_text: Option<String>,
}

impl Breakpoint {
    pub fn with_resolved_scope<R: ScopeResolver + ?Sized>(mut self, resolver: &R) -> Self {
        self.ast_location.name = resolver.scope_name(&self.ast_location.offset);
        self
    }
}

/// The persisted, URL-addressed projection of a [`Breakpoint`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PendingBreakpoint {
    pub location: PendingLocation,
    pub generated_location: PendingLocation,
    pub ast_location: AstLocation,
    pub condition: Option<String>,
    pub disabled: bool,
}

/// Optional fields for [`create_breakpoint`]. Unset fields fall back to the
/// defaults of a plain, enabled, unconditional breakpoint.
#[derive(Debug, Clone, Default)]
pub struct BreakpointOverrides {
    pub condition: Option<String>,
    pub disabled: bool,
    pub hidden: bool,
    pub generated_location: Option<Location>,
    pub ast_location: Option<AstLocation>,
    pub id: Option<String>,
    pub text: Option<String>,
    pub original_text: Option<String>,
}

/// Builds a breakpoint at `location`. The result is not validated; call
/// `assert_breakpoint` when a complete record is required.
pub fn create_breakpoint(location: Location, overrides: BreakpointOverrides) -> Breakpoint {
    let BreakpointOverrides {
        condition,
        disabled,
        hidden,
        generated_location,
        ast_location,
        id,
        text,
        original_text,
    } = overrides;

    Breakpoint {
        id,
        condition: condition.filter(|c| !c.is_empty()),
        disabled,
        hidden,
        loading: false,
        ast_location: ast_location.unwrap_or_else(|| AstLocation::unresolved(location.clone())),
        generated_location: generated_location.unwrap_or_else(|| location.clone()),
        location,
        text,
        original_text,
    }
}

/// Projects a breakpoint for persistence. Only the primary location is
/// validated; the generated one is stored as-is.
pub fn create_pending_breakpoint(breakpoint: &Breakpoint) -> Result<PendingBreakpoint> {
    let location = PendingLocation::from(&breakpoint.location);
    let generated_location = PendingLocation::from(&breakpoint.generated_location);

    assert_pending_location(&location)?;

    Ok(PendingBreakpoint {
        condition: breakpoint.condition.clone(),
        disabled: breakpoint.disabled,
        location,
        ast_location: breakpoint.ast_location.clone(),
        generated_location,
    })
}

/// Like [`create_pending_breakpoint`] but also rejects a degenerate
/// generated location.
pub fn create_pending_breakpoint_strict(breakpoint: &Breakpoint) -> Result<PendingBreakpoint> {
    let pending = create_pending_breakpoint(breakpoint)?;
    assert_pending_location(&pending.generated_location)?;
    Ok(pending)
}

/// Rebuilds a live breakpoint once the sources of a pending one are loaded.
pub fn create_breakpoint_from_pending(
    pending: &PendingBreakpoint,
    source_id: &str,
    generated_source_id: &str,
) -> Breakpoint {
    let location = pending.location.resolve(source_id);
    let generated_location = pending.generated_location.resolve(generated_source_id);

    create_breakpoint(
        location,
        BreakpointOverrides {
            condition: pending.condition.clone(),
            disabled: pending.disabled,
            generated_location: Some(generated_location),
            ast_location: Some(pending.ast_location.clone()),
            ..Default::default()
        },
    )
}
