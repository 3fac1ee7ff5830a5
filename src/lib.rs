//! IPv4/IPv6 address conversions and CIDR range expansion/collapsing.
//!
//! - [`codec`] - permissive text/integer/byte conversions
//! - [`models`] - address, CIDR and range value types
//! - [`processing`] - CIDR expansion and range collapsing
//! - [`output`] - JSON rendering
//! - [`cli`], [`config`], [`logging`] - support for the command line binary

pub mod cli;
pub mod codec;
pub mod config;
pub mod error;
pub mod logging;
pub mod models;
pub mod output;
pub mod processing;

pub use error::{IpRangeError, Result};
pub use models::{Address, AddressFamily, AddressRange, Cidr};
pub use processing::{cidr_range, collapse_range, expand_cidr, expand_cidr_limited};
