//! Error types for address parsing, expansion and collapsing.

use crate::models::AddressFamily;
use thiserror::Error;

/// Errors reported by the strict layers of the crate.
///
/// The codec functions in [`crate::codec`] never fail; everything that
/// validates input returns one of these.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IpRangeError {
    /// Input does not match the group/separator grammar of the family.
    #[error("format err: '{input}' is not a valid {family} value")]
    Format {
        family: AddressFamily,
        input: String,
    },

    /// Prefix length is wider than the address.
    #[error("prefix length {prefix} is greater than {max}")]
    PrefixTooLarge { prefix: u16, max: u8 },

    /// A group does not fit its bit width.
    #[error("group value {value} is greater than {max}")]
    GroupOverflow { value: u32, max: u16 },

    /// Collapse input where `last` sorts below `first`.
    #[error("range is inverted: last {last} is below first {first}")]
    RangeInverted { first: String, last: String },

    /// Materialising the range would exceed the configured limit.
    #[error("range of {count} addresses exceeds the limit of {limit}")]
    TooManyAddresses { count: u128, limit: u128 },
}

pub type Result<T> = std::result::Result<T, IpRangeError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = IpRangeError::PrefixTooLarge {
            prefix: 322,
            max: 32,
        };
        assert_eq!(err.to_string(), "prefix length 322 is greater than 32");

        let err = IpRangeError::Format {
            family: AddressFamily::Ipv4,
            input: "1128.14.35.7/322".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "format err: '1128.14.35.7/322' is not a valid IPv4 value"
        );

        let err = IpRangeError::GroupOverflow {
            value: 337,
            max: 255,
        };
        assert_eq!(err.to_string(), "group value 337 is greater than 255");
    }
}
