//! Conversions between textual, packed integer and byte forms of an address.
//!
//! These converters are best effort and never fail. A token that does not
//! parse as a number becomes `0`; missing groups are `0`, extra groups are
//! ignored. Callers that need strict validation use
//! [`crate::models::Address::parse`] or [`crate::models::Cidr::parse`].

use crate::models::AddressFamily;

/// Permissive group parse, `0` for anything unparsable.
fn parse_group(token: &str, radix: u32) -> u32 {
    u32::from_str_radix(token, radix).unwrap_or(0)
}

/// Split `text` into exactly `count` permissive group values.
fn parse_groups(text: &str, family: AddressFamily, radix: u32) -> Vec<u32> {
    let mut groups: Vec<u32> = text
        .split(family.separator())
        .take(family.group_count())
        .map(|token| parse_group(token, radix))
        .collect();
    groups.resize(family.group_count(), 0);
    groups
}

/// Packed 32-bit value to dotted decimal.
///
/// ```
/// use ip_cidr_utils::codec::int_to_ipv4;
/// assert_eq!(int_to_ipv4(2148409344), "128.14.32.0");
/// ```
pub fn int_to_ipv4(i: u32) -> String {
    bytes_to_ipv4(&i.to_be_bytes())
}

/// Dotted decimal to packed 32-bit value.
///
/// Each group is shifted into place and summed, so an out-of-range group
/// spills into its neighbour rather than being rejected.
///
/// ```
/// use ip_cidr_utils::codec::ipv4_to_int;
/// assert_eq!(ipv4_to_int("128.14.32.0"), 2148409344);
/// assert_eq!(ipv4_to_int("128.x.32.0"), 2147491840);
/// ```
pub fn ipv4_to_int(text: &str) -> u32 {
    parse_groups(text, AddressFamily::Ipv4, 10)
        .iter()
        .enumerate()
        .fold(0u32, |acc, (k, g)| {
            acc.wrapping_add(g.wrapping_shl(8 * (3 - k as u32)))
        })
}

/// One decimal group per byte, dot separated.
pub fn bytes_to_ipv4(bytes: &[u8]) -> String {
    let groups: Vec<u16> = bytes.iter().map(|b| u16::from(*b)).collect();
    AddressFamily::Ipv4.render(&groups)
}

/// Dotted decimal to 4 bytes. Groups are truncated to their low 8 bits.
pub fn ipv4_to_bytes(text: &str) -> [u8; 4] {
    let mut bytes = [0u8; 4];
    for (byte, group) in bytes
        .iter_mut()
        .zip(parse_groups(text, AddressFamily::Ipv4, 10))
    {
        *byte = group as u8;
    }
    bytes
}

/// Big-endian byte pairs to colon separated lower-case hex groups.
///
/// No `::` compression. A trailing odd byte is treated as the high byte of
/// a final group.
pub fn bytes_to_ipv6(bytes: &[u8]) -> String {
    let groups: Vec<u16> = bytes
        .chunks(2)
        .map(|pair| u16::from_be_bytes([pair[0], pair.get(1).copied().unwrap_or(0)]))
        .collect();
    AddressFamily::Ipv6.render(&groups)
}

/// Eight colon separated hex groups to 16 big-endian bytes.
///
/// `::` shorthand is not expanded; its empty group parses as `0` like any
/// other unparsable token.
pub fn ipv6_to_bytes(text: &str) -> [u8; 16] {
    let mut bytes = [0u8; 16];
    for (pair, group) in bytes
        .chunks_exact_mut(2)
        .zip(parse_groups(text, AddressFamily::Ipv6, 16))
    {
        pair.copy_from_slice(&(group as u16).to_be_bytes());
    }
    bytes
}

/// Packed 32-bit value to 4 big-endian bytes.
pub fn int_to_bytes(n: u32) -> [u8; 4] {
    n.to_be_bytes()
}

/// First 4 bytes as a big-endian 32-bit value, `0` if fewer are given.
pub fn bytes_to_int(bytes: &[u8]) -> u32 {
    bytes
        .get(..4)
        .and_then(|b| b.try_into().ok())
        .map(u32::from_be_bytes)
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_int_to_ipv4() {
        assert_eq!(int_to_ipv4(2148409344), "128.14.32.0");
        assert_eq!(int_to_ipv4(0), "0.0.0.0");
        assert_eq!(int_to_ipv4(u32::MAX), "255.255.255.255");
    }

    #[test]
    fn test_ipv4_to_int() {
        assert_eq!(ipv4_to_int("128.14.32.0"), 2148409344);
        assert_eq!(ipv4_to_int("0.0.0.1"), 1);
        assert_eq!(ipv4_to_int("255.255.255.255"), u32::MAX);
    }

    #[test]
    fn test_ipv4_to_int_permissive() {
        // Unparsable tokens count as zero.
        assert_eq!(ipv4_to_int("10.abc.0.1"), ipv4_to_int("10.0.0.1"));
        assert_eq!(ipv4_to_int(""), 0);
        assert_eq!(ipv4_to_int("10.0"), ipv4_to_int("10.0.0.0"));
        // Whitespace is not stripped, so a padded token is unparsable too.
        assert_eq!(ipv4_to_int(" 10.0.0.1"), 1);
        assert_eq!(ipv4_to_bytes("10. 1.0.1"), [10, 0, 0, 1]);
        // Oversized group spills into the next one up.
        assert_eq!(ipv4_to_int("0.0.1.256"), ipv4_to_int("0.0.2.0"));
    }

    #[test]
    fn test_bytes_to_ipv4() {
        assert_eq!(bytes_to_ipv4(&[128, 14, 32, 0]), "128.14.32.0");
    }

    #[test]
    fn test_ipv4_to_bytes() {
        assert_eq!(ipv4_to_bytes("128.14.32.0"), [128, 14, 32, 0]);
        assert_eq!(ipv4_to_bytes("128.x.32"), [128, 0, 32, 0]);
    }

    #[test]
    fn test_int_bytes() {
        assert_eq!(int_to_bytes(2148409344), [128, 14, 32, 0]);
        assert_eq!(bytes_to_int(&[128, 14, 32, 0]), 2148409344);
        assert_eq!(bytes_to_int(&[128, 14]), 0);
    }

    #[test]
    fn test_ipv6_bytes() {
        let text = "fe80:0:982:2a5c:0:0:0:ffff";
        let bytes = ipv6_to_bytes(text);
        assert_eq!(bytes[0], 0xfe);
        assert_eq!(bytes[1], 0x80);
        assert_eq!(bytes[5], 0x82);
        assert_eq!(bytes[15], 0xff);
        assert_eq!(bytes_to_ipv6(&bytes), text);
    }

    #[test]
    fn test_ipv6_no_compression() {
        assert_eq!(bytes_to_ipv6(&[0u8; 16]), "0:0:0:0:0:0:0:0");
        assert_eq!(ipv6_to_bytes("fe80::1"), {
            let mut expected = [0u8; 16];
            expected[0] = 0xfe;
            expected[1] = 0x80;
            expected[5] = 0x01;
            expected
        });
    }

    #[test]
    fn test_round_trip_ipv4() {
        for text in ["0.0.0.0", "10.1.2.3", "128.14.32.0", "255.255.255.255"] {
            assert_eq!(int_to_ipv4(ipv4_to_int(text)), text);
            assert_eq!(bytes_to_ipv4(&ipv4_to_bytes(text)), text);
        }
    }
}
