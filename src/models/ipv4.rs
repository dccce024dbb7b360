//! IPv4 validation and subnet base derivation.
//!
//! The template addresses every unit host as `<base>.<host>`, where `base`
//! is the first three octets of the unit's network address.

use std::net::Ipv4Addr;
use std::str::FromStr;

/// Base used when a record has no usable network address.
pub const PLACEHOLDER_BASE: &str = "0.0.0";

/// Check that `addr` is a plain dotted-quad IPv4 address.
///
/// IPv6 literals, including IPv4-mapped ones, are rejected.
///
/// # Examples
/// ```
/// use pingview_template::models::is_valid_ipv4;
/// assert!(is_valid_ipv4("192.168.1.1"));
/// assert!(!is_valid_ipv4("192.168.1.1."));
/// ```
pub fn is_valid_ipv4(addr: &str) -> bool {
    Ipv4Addr::from_str(addr).is_ok()
}

/// Drop the last octet of a valid IPv4 address.
///
/// Returns `None` when `network` is not a valid dotted quad.
///
/// # Examples
/// ```
/// use pingview_template::models::subnet_base;
/// assert_eq!(subnet_base("10.0.0.5").as_deref(), Some("10.0.0"));
/// assert_eq!(subnet_base(""), None);
/// ```
pub fn subnet_base(network: &str) -> Option<String> {
    let addr = Ipv4Addr::from_str(network).ok()?;
    let [a, b, c, _] = addr.octets();
    Some(format!("{a}.{b}.{c}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_valid_ipv4() {
        assert!(is_valid_ipv4("192.168.1.1"));
        assert!(is_valid_ipv4("255.255.255.255"));
        assert!(is_valid_ipv4("0.0.0.0"));

        assert!(!is_valid_ipv4("256.255.255.255"));
        assert!(!is_valid_ipv4("192.168.1.1."));
        assert!(!is_valid_ipv4("192.168.1"));
        assert!(!is_valid_ipv4("2001:db8::1"));
        assert!(!is_valid_ipv4("::ffff:192.168.1.1"));
        assert!(!is_valid_ipv4(""));
        assert!(!is_valid_ipv4(" 192.168.1.1"));
    }

    #[test]
    fn test_subnet_base() {
        assert_eq!(subnet_base("10.0.0.5").as_deref(), Some("10.0.0"));
        assert_eq!(subnet_base("192.168.3.1").as_deref(), Some("192.168.3"));
        assert_eq!(
            subnet_base("255.255.255.255").as_deref(),
            Some("255.255.255")
        );
        // multi-digit last octet is removed whole
        assert_eq!(subnet_base("10.20.30.254").as_deref(), Some("10.20.30"));
    }

    #[test]
    fn test_subnet_base_invalid() {
        assert_eq!(subnet_base(""), None);
        assert_eq!(subnet_base("256.1.1.1"), None);
        assert_eq!(subnet_base("10.0.0.5."), None);
        assert_eq!(subnet_base("fe80::1"), None);
    }
}
