//! CIDR expansion.
//!
//! Turns `<address>/<prefix>` into the list of every address it covers,
//! optionally dropping the all-zero/all-one values of the last group.

use crate::config::DEFAULT_MAX_ADDRESSES;
use crate::error::{IpRangeError, Result};
use crate::models::{AddressFamily, AddressRange, Cidr};

/// Parse `cidr` and return its addresses as a lazy sequence.
///
/// No limit applies; the caller decides how much of it to consume.
pub fn cidr_range(cidr: &str, family: AddressFamily, clean: bool) -> Result<AddressRange> {
    log::debug!("cidr_range({cidr}, {family}, clean={clean})");
    let block = Cidr::parse(cidr, family)?;
    Ok(block.range(clean))
}

/// Expand `cidr` into the text of every address in the block.
///
/// Fails with [`IpRangeError::TooManyAddresses`] when the block holds more
/// than [`DEFAULT_MAX_ADDRESSES`]; see [`expand_cidr_limited`].
///
/// ```
/// use ip_cidr_utils::models::AddressFamily;
/// use ip_cidr_utils::processing::expand_cidr;
/// let ips = expand_cidr("128.14.35.7/32", AddressFamily::Ipv4, false).unwrap();
/// assert_eq!(ips, vec!["128.14.35.7"]);
/// ```
pub fn expand_cidr(cidr: &str, family: AddressFamily, clean: bool) -> Result<Vec<String>> {
    expand_cidr_limited(cidr, family, clean, DEFAULT_MAX_ADDRESSES)
}

/// Same as [`expand_cidr`] with an explicit cap on the number of addresses.
pub fn expand_cidr_limited(
    cidr: &str,
    family: AddressFamily,
    clean: bool,
    limit: u128,
) -> Result<Vec<String>> {
    let range = cidr_range(cidr, family, clean)?;
    let count = range.len();
    if count > limit {
        log::warn!("{cidr} expands to {count} addresses, limit is {limit}");
        return Err(IpRangeError::TooManyAddresses { count, limit });
    }

    let ips = range.to_strings();
    log::debug!("{cidr} expanded to {} addresses", ips.len());
    Ok(ips)
}
