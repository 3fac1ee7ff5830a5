//! Range collapsing, the inverse of expansion.
//!
//! Given the first and last IPv4 address of a range, find the shortest
//! prefix whose block contains both.

use crate::error::{IpRangeError, Result};
use crate::models::{Address, AddressFamily, Cidr};
use std::net::Ipv4Addr;

/// Maximum length for an IPv4 prefix (32 bits).
pub const MAX_LENGTH: u8 = 32;

/// Convert a prefix length to a subnet mask as u32.
///
/// # Examples
/// ```
/// use ip_cidr_utils::processing::get_cidr_mask;
/// assert_eq!(get_cidr_mask(24).unwrap(), 0xFFFFFF00);
/// ```
pub fn get_cidr_mask(len: u8) -> Result<u32> {
    if len > MAX_LENGTH {
        Err(IpRangeError::PrefixTooLarge {
            prefix: u16::from(len),
            max: MAX_LENGTH,
        })
    } else {
        let right_len = MAX_LENGTH - len;
        let all_bits = u32::MAX as u64;

        let mask = (all_bits >> right_len) << right_len;

        Ok(mask as u32)
    }
}

/// Longest prefix shared by two packed addresses.
pub fn common_prefix_len(first: u32, last: u32) -> u8 {
    (first ^ last).leading_zeros() as u8
}

/// Collapse `first..=last` into the shortest covering [`Cidr`].
///
/// The prefix is computed over the whole 32-bit value, so ranges whose
/// boundary falls inside a group (e.g. a /20) come out right. The network
/// address is `first` with the host bits cleared. When the inputs sit on a
/// block boundary, expanding the result gives back exactly `first..=last`.
pub fn collapse_to_cidr(first: &str, last: &str) -> Result<Cidr> {
    log::debug!("collapse_to_cidr({first}, {last})");
    let first_addr = Address::parse(first, AddressFamily::Ipv4)?;
    let last_addr = Address::parse(last, AddressFamily::Ipv4)?;
    let (Some(lo), Some(hi)) = (first_addr.to_u32(), last_addr.to_u32()) else {
        return Err(IpRangeError::Format {
            family: AddressFamily::Ipv4,
            input: format!("{first}-{last}"),
        });
    };

    if hi < lo {
        log::warn!("collapse: {last} is below {first}");
        return Err(IpRangeError::RangeInverted {
            first: first_addr.to_string(),
            last: last_addr.to_string(),
        });
    }

    let prefix = common_prefix_len(lo, hi);
    let network = lo & get_cidr_mask(prefix)?;
    Cidr::new(Address::from(Ipv4Addr::from(network)), prefix)
}

/// Collapse `first..=last` into CIDR text, e.g. `128.14.32.0/24`.
///
/// ```
/// use ip_cidr_utils::processing::collapse_range;
/// assert_eq!(collapse_range("128.14.32.0", "128.14.47.255").unwrap(), "128.14.32.0/20");
/// ```
pub fn collapse_range(first: &str, last: &str) -> Result<String> {
    collapse_to_cidr(first, last).map(|cidr| cidr.to_string())
}
