//! Integration tests for ip-cidr-utils
//!
//! These tests go through the public API the way a caller would.

use ip_cidr_utils::codec::{
    bytes_to_int, bytes_to_ipv4, bytes_to_ipv6, int_to_bytes, int_to_ipv4, ipv4_to_bytes,
    ipv4_to_int, ipv6_to_bytes,
};
use ip_cidr_utils::{cidr_range, collapse_range, expand_cidr, AddressFamily, Cidr, IpRangeError};

#[test]
fn test_codec_round_trips() {
    for text in ["0.0.0.0", "1.2.3.4", "128.14.32.0", "192.168.255.1", "255.255.255.255"] {
        assert_eq!(int_to_ipv4(ipv4_to_int(text)), text);
        assert_eq!(bytes_to_ipv4(&ipv4_to_bytes(text)), text);
        assert_eq!(bytes_to_int(&int_to_bytes(ipv4_to_int(text))), ipv4_to_int(text));
    }
    for text in [
        "0:0:0:0:0:0:0:0",
        "fe80:0:982:2a5c:0:0:0:ffff",
        "2001:db8:85a3:0:0:8a2e:370:7334",
        "ffff:ffff:ffff:ffff:ffff:ffff:ffff:ffff",
    ] {
        assert_eq!(bytes_to_ipv6(&ipv6_to_bytes(text)), text);
    }
}

#[test]
fn test_expansion_cardinality() {
    assert_eq!(
        expand_cidr("128.14.35.1/23", AddressFamily::Ipv4, false)
            .unwrap()
            .len(),
        512
    );
    assert_eq!(
        expand_cidr("128.14.35.7/32", AddressFamily::Ipv4, false).unwrap(),
        vec!["128.14.35.7"]
    );
    assert_eq!(
        expand_cidr("128.14.35.1/23", AddressFamily::Ipv4, true)
            .unwrap()
            .len(),
        508
    );
}

#[test]
fn test_ipv6_cardinality() {
    let v6 = AddressFamily::Ipv6;
    assert_eq!(
        expand_cidr("fe80:0:982:2a5c:0:0:0:ffff/120", v6, false)
            .unwrap()
            .len(),
        256
    );
    assert_eq!(
        expand_cidr("fe80:0:982:2a5c:0:0:0:ffff/127", v6, false).unwrap(),
        vec!["fe80:0:982:2a5c:0:0:0:fffe", "fe80:0:982:2a5c:0:0:0:ffff"]
    );
    assert_eq!(
        expand_cidr("fe80:0:982:2a5c:0:0:0:ffff/127", v6, true).unwrap(),
        vec!["fe80:0:982:2a5c:0:0:0:fffe"]
    );
}

#[test]
fn test_boundary_rejection() {
    assert!(matches!(
        expand_cidr("128.14.35.7/322", AddressFamily::Ipv4, false),
        Err(IpRangeError::PrefixTooLarge { .. })
    ));
    assert!(matches!(
        expand_cidr("fe80:0:982:2a5c:0:0:0:ffff/322", AddressFamily::Ipv6, false),
        Err(IpRangeError::PrefixTooLarge { .. })
    ));
    assert!(matches!(
        expand_cidr("128.14.35.337/32", AddressFamily::Ipv4, false),
        Err(IpRangeError::GroupOverflow { .. })
    ));
    assert!(matches!(
        expand_cidr("1128.14.35.7/322", AddressFamily::Ipv4, false),
        Err(IpRangeError::Format { .. })
    ));
}

#[test]
fn test_collapse_then_expand() {
    let cidr = collapse_range("128.14.32.0", "128.14.32.255").unwrap();
    let ips = expand_cidr(&cidr, AddressFamily::Ipv4, false).unwrap();
    assert_eq!(ips.len(), 256);
    assert_eq!(ips.first().unwrap(), "128.14.32.0");
    assert_eq!(ips.last().unwrap(), "128.14.32.255");
}

#[test]
fn test_expand_bounds_then_collapse() {
    for text in ["128.14.35.7/20", "192.168.1.77/26", "172.16.5.4/32"] {
        let block = Cidr::parse(text, AddressFamily::Ipv4).unwrap();
        let first = block.first().to_string();
        let last = block.last().to_string();
        let collapsed = collapse_range(&first, &last).unwrap();
        assert_eq!(collapsed, format!("{first}/{}", block.prefix()));

        let original = cidr_range(text, AddressFamily::Ipv4, false).unwrap();
        let again = cidr_range(&collapsed, AddressFamily::Ipv4, false).unwrap();
        assert_eq!(original.len(), again.len());
        assert!(original.iter().eq(again.iter()));
    }
}
