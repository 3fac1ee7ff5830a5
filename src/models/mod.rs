//! Domain models for address and CIDR handling.
//!
//! This module contains the value types used throughout the crate:
//! - [`AddressFamily`] - IPv4/IPv6 group layout and formatting
//! - [`Address`] - an address as a sequence of groups
//! - [`Cidr`] and [`GroupBounds`] - a prefix block and its per-group bounds
//! - [`AddressRange`] - lazy enumeration of a block

mod address;
mod cidr;
mod family;
mod range;

// Re-export public types
pub use address::Address;
pub use cidr::{Cidr, GroupBounds};
pub use family::AddressFamily;
pub use range::{AddressIter, AddressRange};
