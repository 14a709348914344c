//! String keys for locations.
//!
//! Live ids are keyed on `source_id`, pending ids on `source_url`. The two
//! address spaces never compare against each other.

use super::location::{Location, SourcePosition};
use super::validation::assert_pending_location;
use crate::error::Result;

fn optional(value: Option<u32>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}

/// `"{source_id}:{line}:{column}"`. A missing column leaves the last segment
/// empty, so column 0 and no column get different keys.
pub fn make_location_id(location: &Location) -> String {
    format!(
        "{}:{}:{}",
        location.source_id,
        optional(location.line),
        optional(location.column)
    )
}

/// `"{source_id}:{line}"`, for line-only matching.
pub fn get_location_without_column(location: &Location) -> String {
    format!("{}:{}", location.source_id, optional(location.line))
}

/// `"{source_url}:{line}:{column}"`, with an absent URL encoded as the empty
/// string. Validates the location first.
pub fn make_pending_location_id<L: SourcePosition>(location: &L) -> Result<String> {
    assert_pending_location(location)?;
    Ok(format!(
        "{}:{}:{}",
        location.source_url().as_str().unwrap_or_default(),
        optional(location.line()),
        optional(location.column())
    ))
}

/// First value that is a string at all, the empty string included.
pub fn first_string<'a, I>(values: I) -> Option<&'a str>
where
    I: IntoIterator<Item = Option<&'a str>>,
{
    values.into_iter().flatten().next()
}
