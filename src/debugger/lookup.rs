use super::breakpoint::Breakpoint;
use super::location::{Location, SourcePosition};

/// Lookup of a breakpoint by location, owned by whoever stores breakpoints.
pub trait BreakpointStore {
    fn get_breakpoint(&self, location: &Location) -> Option<&Breakpoint>;
}

/// True when line or column differ. The source is not compared.
pub fn location_moved<A, B>(location: &A, new_location: &B) -> bool
where
    A: SourcePosition + ?Sized,
    B: SourcePosition + ?Sized,
{
    location.line() != new_location.line() || location.column() != new_location.column()
}

/// First breakpoint, in iteration order, on the same line as `location`.
/// With `column_granularity` off the first one on the line wins whatever its
/// column; with it on the columns must match too.
pub fn breakpoint_at_location<'a, I, L>(
    breakpoints: I,
    location: &L,
    column_granularity: bool,
) -> Option<&'a Breakpoint>
where
    I: IntoIterator<Item = &'a Breakpoint>,
    L: SourcePosition + ?Sized,
{
    breakpoints.into_iter().find(|breakpoint| {
        if breakpoint.location.line != location.line() {
            return false;
        }
        !column_granularity || breakpoint.location.column == location.column()
    })
}

/// A breakpoint exists at `location` only if the store has one and it is
/// enabled.
pub fn breakpoint_exists<S: BreakpointStore + ?Sized>(store: &S, location: &Location) -> bool {
    store
        .get_breakpoint(location)
        .is_some_and(|breakpoint| !breakpoint.disabled)
}
