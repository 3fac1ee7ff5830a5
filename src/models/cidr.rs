//! CIDR block: an address as written plus a prefix length.
//!
//! Provides [`Cidr`] with strict parsing, along with [`GroupBounds`] for the
//! per-group first/last values a prefix implies.

use super::address::{groups_from_captures, groups_pattern};
use super::{Address, AddressFamily, AddressRange};
use crate::error::{IpRangeError, Result};
use regex::Regex;
use serde::{Serialize, Serializer};
use std::sync::OnceLock;

static IPV4_CIDR_REGEX: OnceLock<Regex> = OnceLock::new();
static IPV6_CIDR_REGEX: OnceLock<Regex> = OnceLock::new();

fn cidr_regex(family: AddressFamily) -> &'static Regex {
    let cell = match family {
        AddressFamily::Ipv4 => &IPV4_CIDR_REGEX,
        AddressFamily::Ipv6 => &IPV6_CIDR_REGEX,
    };
    cell.get_or_init(|| {
        Regex::new(&format!(r"^{}/(\d{{1,3}})$", groups_pattern(family)))
            .expect("Invalid Regex")
    })
}

/// Inclusive range of values one group takes inside a CIDR block.
///
/// `first <= last` and both fit the group width of the family the bounds
/// were built for.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct GroupBounds {
    first: u16,
    last: u16,
}

impl GroupBounds {
    /// Checked bounds for one group of `family`.
    pub fn new(first: u16, last: u16, family: AddressFamily) -> Result<GroupBounds> {
        let max = family.all_ones();
        if let Some(value) = [first, last].into_iter().find(|v| *v > max) {
            return Err(IpRangeError::GroupOverflow {
                value: u32::from(value),
                max,
            });
        }
        if last < first {
            return Err(IpRangeError::RangeInverted {
                first: family.format_group(first),
                last: family.format_group(last),
            });
        }
        Ok(GroupBounds { first, last })
    }

    /// Bounds for `value` under `mask`: the masked value, and the masked value
    /// with every free bit set. Both inputs must fit the family's group width.
    pub(crate) fn from_mask(value: u16, mask: u16, all_ones: u16) -> GroupBounds {
        let first = value & mask;
        GroupBounds {
            first,
            last: first | (mask ^ all_ones),
        }
    }

    pub fn first(&self) -> u16 {
        self.first
    }

    pub fn last(&self) -> u16 {
        self.last
    }

    /// Number of values in the interval.
    pub fn width(&self) -> u32 {
        u32::from(self.last - self.first) + 1
    }
}

/// CIDR block as written, e.g. `128.14.35.7/20`.
///
/// The address keeps the host bits the caller wrote; [`Cidr::first`] gives
/// the network address.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Cidr {
    address: Address,
    prefix: u8,
}

impl Cidr {
    /// Build a block from an address and prefix length.
    pub fn new(address: Address, prefix: u8) -> Result<Cidr> {
        let max = address.family().total_bits();
        if prefix > max {
            return Err(IpRangeError::PrefixTooLarge {
                prefix: u16::from(prefix),
                max,
            });
        }
        Ok(Cidr { address, prefix })
    }

    /// Strict parse of `<address>/<prefix>`.
    ///
    /// Checks run in order: grammar, prefix width, group width.
    pub fn parse(text: &str, family: AddressFamily) -> Result<Cidr> {
        let caps = cidr_regex(family)
            .captures(text)
            .ok_or_else(|| IpRangeError::Format {
                family,
                input: text.to_string(),
            })?;

        let prefix_text = caps
            .get(family.group_count() + 1)
            .map(|m| m.as_str())
            .unwrap_or_default();
        let prefix: u16 = prefix_text.parse().map_err(|_| IpRangeError::Format {
            family,
            input: text.to_string(),
        })?;
        let max = family.total_bits();
        if prefix > u16::from(max) {
            log::warn!("{text}: prefix {prefix} is wider than {family} ({max} bits)");
            return Err(IpRangeError::PrefixTooLarge { prefix, max });
        }

        let groups = groups_from_captures(family, &caps)?;
        Address::new(family, groups).and_then(|address| Cidr::new(address, prefix as u8))
    }

    pub fn family(&self) -> AddressFamily {
        self.address.family()
    }

    /// The address as written, host bits included.
    pub fn address(&self) -> &Address {
        &self.address
    }

    pub fn prefix(&self) -> u8 {
        self.prefix
    }

    /// Per-group inclusive bounds, most significant group first.
    pub fn bounds(&self) -> Vec<GroupBounds> {
        let family = self.family();
        self.address
            .groups()
            .iter()
            .zip(family.group_masks(self.prefix))
            .map(|(value, mask)| GroupBounds::from_mask(*value, mask, family.all_ones()))
            .collect()
    }

    /// Network address, the lowest address of the block.
    pub fn first(&self) -> Address {
        let groups = self.bounds().iter().map(|b| b.first).collect();
        Address::from_parts(self.family(), groups)
    }

    /// Broadcast address, the highest address of the block.
    pub fn last(&self) -> Address {
        let groups = self.bounds().iter().map(|b| b.last).collect();
        Address::from_parts(self.family(), groups)
    }

    /// Lazy sequence of every address in the block.
    pub fn range(&self, clean: bool) -> AddressRange {
        AddressRange::from_parts(self.family(), self.bounds(), clean)
    }
}

impl std::fmt::Display for Cidr {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}/{}", self.address, self.prefix)
    }
}

impl Serialize for Cidr {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}
