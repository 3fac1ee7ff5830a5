//! Range computations.
//!
//! This module contains the two range algorithms:
//! - [`expander`] - CIDR block to the list of addresses it covers
//! - [`collapser`] - first/last address pair to the covering CIDR block

mod collapser;
mod expander;

// Re-export public functions
pub use collapser::{
    collapse_range, collapse_to_cidr, common_prefix_len, get_cidr_mask, MAX_LENGTH,
};
pub use expander::{cidr_range, expand_cidr, expand_cidr_limited};
