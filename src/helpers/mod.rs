//! Helper functions for presenting posts
//!
//! Date formatting plus the listing helpers used by the CLI.

mod date;
mod list;

pub use date::*;
pub use list::*;
