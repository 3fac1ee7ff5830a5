//! IPv4/IPv6 address as an ordered sequence of fixed-width groups.
//!
//! Provides [`Address`] and the strict textual grammar shared with
//! [`crate::models::Cidr`].

use super::AddressFamily;
use crate::error::{IpRangeError, Result};
use regex::{Captures, Regex};
use serde::{Serialize, Serializer};
use std::net::{Ipv4Addr, Ipv6Addr};
use std::sync::OnceLock;

const IPV4_GROUPS: &str = r"(\d{1,3})\.(\d{1,3})\.(\d{1,3})\.(\d{1,3})";
const IPV6_GROUPS: &str = concat!(
    r"([0-9a-fA-F]{1,4}):([0-9a-fA-F]{1,4}):([0-9a-fA-F]{1,4}):([0-9a-fA-F]{1,4}):",
    r"([0-9a-fA-F]{1,4}):([0-9a-fA-F]{1,4}):([0-9a-fA-F]{1,4}):([0-9a-fA-F]{1,4})"
);

static IPV4_ADDRESS_REGEX: OnceLock<Regex> = OnceLock::new();
static IPV6_ADDRESS_REGEX: OnceLock<Regex> = OnceLock::new();

fn address_regex(family: AddressFamily) -> &'static Regex {
    match family {
        AddressFamily::Ipv4 => IPV4_ADDRESS_REGEX.get_or_init(|| {
            Regex::new(&format!("^{IPV4_GROUPS}$")).expect("Invalid Regex")
        }),
        AddressFamily::Ipv6 => IPV6_ADDRESS_REGEX.get_or_init(|| {
            Regex::new(&format!("^{IPV6_GROUPS}$")).expect("Invalid Regex")
        }),
    }
}

/// Group part of the grammar, without anchors. Used to build the CIDR pattern.
pub(crate) fn groups_pattern(family: AddressFamily) -> &'static str {
    match family {
        AddressFamily::Ipv4 => IPV4_GROUPS,
        AddressFamily::Ipv6 => IPV6_GROUPS,
    }
}

/// Convert the first `group_count` captures into group values.
///
/// The grammar already guarantees digits, so only the width check can fail.
pub(crate) fn groups_from_captures(family: AddressFamily, caps: &Captures) -> Result<Vec<u16>> {
    let radix = match family {
        AddressFamily::Ipv4 => 10,
        AddressFamily::Ipv6 => 16,
    };
    let max = family.all_ones();

    (1..=family.group_count())
        .map(|i| {
            let token = caps.get(i).map(|m| m.as_str()).unwrap_or_default();
            let value = u32::from_str_radix(token, radix).map_err(|_| IpRangeError::Format {
                family,
                input: token.to_string(),
            })?;
            if value > u32::from(max) {
                log::warn!("group value {value} does not fit {family} group");
                return Err(IpRangeError::GroupOverflow { value, max });
            }
            Ok(value as u16)
        })
        .collect()
}

/// An IPv4 or IPv6 address.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Address {
    family: AddressFamily,
    groups: Vec<u16>,
}

impl Address {
    /// Build an address from group values, checking count and width.
    pub fn new(family: AddressFamily, groups: Vec<u16>) -> Result<Address> {
        if groups.len() != family.group_count() {
            return Err(IpRangeError::Format {
                family,
                input: family.render(&groups),
            });
        }
        if let Some(&g) = groups.iter().find(|g| **g > family.all_ones()) {
            return Err(IpRangeError::GroupOverflow {
                value: u32::from(g),
                max: family.all_ones(),
            });
        }
        Ok(Address { family, groups })
    }

    /// Build from groups already known to fit `family`.
    pub(crate) fn from_parts(family: AddressFamily, groups: Vec<u16>) -> Address {
        debug_assert_eq!(groups.len(), family.group_count());
        debug_assert!(groups.iter().all(|g| *g <= family.all_ones()));
        Address { family, groups }
    }

    /// Strict parse of dotted (IPv4) or colon (IPv6, all 8 groups) text.
    pub fn parse(text: &str, family: AddressFamily) -> Result<Address> {
        let caps = address_regex(family)
            .captures(text)
            .ok_or_else(|| IpRangeError::Format {
                family,
                input: text.to_string(),
            })?;
        let groups = groups_from_captures(family, &caps)?;
        Ok(Address { family, groups })
    }

    pub fn family(&self) -> AddressFamily {
        self.family
    }

    /// Group values, most significant first.
    pub fn groups(&self) -> &[u16] {
        &self.groups
    }

    /// Big-endian bytes: 4 for IPv4, 16 for IPv6.
    pub fn to_bytes(&self) -> Vec<u8> {
        match self.family {
            AddressFamily::Ipv4 => self.groups.iter().map(|g| *g as u8).collect(),
            AddressFamily::Ipv6 => self.groups.iter().flat_map(|g| g.to_be_bytes()).collect(),
        }
    }

    /// Packed 32-bit value, IPv4 only.
    pub fn to_u32(&self) -> Option<u32> {
        match self.family {
            AddressFamily::Ipv4 => Some(
                self.groups
                    .iter()
                    .fold(0u32, |acc, g| (acc << 8) | u32::from(*g)),
            ),
            AddressFamily::Ipv6 => None,
        }
    }
}

impl From<Ipv4Addr> for Address {
    fn from(addr: Ipv4Addr) -> Self {
        Address {
            family: AddressFamily::Ipv4,
            groups: addr.octets().iter().map(|o| u16::from(*o)).collect(),
        }
    }
}

impl From<Ipv6Addr> for Address {
    fn from(addr: Ipv6Addr) -> Self {
        Address {
            family: AddressFamily::Ipv6,
            groups: addr.segments().to_vec(),
        }
    }
}

impl std::fmt::Display for Address {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.family.render(&self.groups))
    }
}

impl Serialize for Address {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}
