//! Location identity and breakpoint records for a source-level debugger.
//!
//! A breakpoint lives in three coordinate systems: the loaded source it was
//! set in, the generated code it maps to, and the URL it is persisted under.
//! [`debugger`] holds the shapes for all three and the conversions between
//! them.

pub mod config;
pub mod debugger;
pub mod error;
pub mod logging;

pub use error::{Error, Result};
