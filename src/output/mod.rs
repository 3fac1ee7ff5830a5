//! Output formatting for results.
//!
//! - [`json`] - JSON rendering for the command line surface

mod json;

pub use json::{to_json, to_json_pretty};
