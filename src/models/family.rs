//! Address family parameters.
//!
//! Everything the expander and the codec need to know about IPv4 vs IPv6
//! lives here: group width, group count, separator and group formatting.

use itertools::Itertools;
use serde::Serialize;

/// IP address family.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum AddressFamily {
    /// 4 groups of 8 bits, dotted decimal.
    Ipv4,
    /// 8 groups of 16 bits, colon separated lower-case hex.
    Ipv6,
}

impl AddressFamily {
    /// Bit width of one group.
    pub const fn group_bits(self) -> u8 {
        match self {
            AddressFamily::Ipv4 => 8,
            AddressFamily::Ipv6 => 16,
        }
    }

    /// Number of groups in an address.
    pub const fn group_count(self) -> usize {
        match self {
            AddressFamily::Ipv4 => 4,
            AddressFamily::Ipv6 => 8,
        }
    }

    /// Total address width, the largest valid prefix length.
    pub const fn total_bits(self) -> u8 {
        match self {
            AddressFamily::Ipv4 => 32,
            AddressFamily::Ipv6 => 128,
        }
    }

    /// Largest group value, every bit of the group set.
    pub const fn all_ones(self) -> u16 {
        match self {
            AddressFamily::Ipv4 => 0xff,
            AddressFamily::Ipv6 => 0xffff,
        }
    }

    pub const fn separator(self) -> char {
        match self {
            AddressFamily::Ipv4 => '.',
            AddressFamily::Ipv6 => ':',
        }
    }

    /// True for the all-zero and all-one group values.
    pub fn is_boundary(self, group: u16) -> bool {
        group == 0 || group == self.all_ones()
    }

    /// Render one group: decimal for IPv4, lower-case hex without padding for IPv6.
    pub fn format_group(self, group: u16) -> String {
        match self {
            AddressFamily::Ipv4 => format!("{group}"),
            AddressFamily::Ipv6 => format!("{group:x}"),
        }
    }

    /// Render a full group sequence. IPv6 is never zero-compressed.
    pub fn render(self, groups: &[u16]) -> String {
        groups
            .iter()
            .map(|g| self.format_group(*g))
            .join(&self.separator().to_string())
    }

    /// Mask covering each group for a prefix of `prefix` bits.
    ///
    /// The prefix budget is consumed left to right, a full group at a time.
    /// Once it runs out the remaining groups get an empty mask.
    pub fn group_masks(self, prefix: u8) -> Vec<u16> {
        let width = i32::from(self.group_bits());
        let all_ones = u32::from(self.all_ones());
        let mut remaining = i32::from(prefix);
        let mut masks = Vec::with_capacity(self.group_count());

        for _ in 0..self.group_count() {
            let mask = if remaining >= width {
                all_ones
            } else if remaining > 0 {
                (all_ones << (width - remaining)) & all_ones
            } else {
                0
            };
            masks.push(mask as u16);
            remaining -= width;
        }
        masks
    }
}

impl std::fmt::Display for AddressFamily {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            AddressFamily::Ipv4 => write!(f, "IPv4"),
            AddressFamily::Ipv6 => write!(f, "IPv6"),
        }
    }
}
