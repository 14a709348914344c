mod breakpoint;
mod breakpoints;
mod identity;
mod location;
mod lookup;
mod persistence;
mod validation;

pub use breakpoint::{
    create_breakpoint, create_breakpoint_from_pending, create_pending_breakpoint,
    create_pending_breakpoint_strict, AstLocation, Breakpoint, BreakpointOverrides,
    PendingBreakpoint, ScopeResolver,
};
pub use breakpoints::{Breakpoints, LoadedSource};
pub use identity::{
    first_string, get_location_without_column, make_location_id, make_pending_location_id,
};
pub use location::{Location, PendingLocation, SourcePosition, SourceUrl};
pub use lookup::{breakpoint_at_location, breakpoint_exists, location_moved, BreakpointStore};
pub use persistence::{pending_from_json, pending_to_json};
pub use validation::{
    assert_breakpoint, assert_location, assert_pending_breakpoint, assert_pending_location,
    require_location,
};
