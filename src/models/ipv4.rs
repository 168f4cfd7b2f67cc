//! IPv4 address and subnet mask utilities.
//!
//! Addresses and masks are plain [`Ipv4Addr`] values. Parsing is strict
//! dotted-decimal; everything after parsing is infallible bit arithmetic.

use crate::error::{AddressError, Result};
use itertools::Itertools;
use lazy_static::lazy_static;
use regex::Regex;
use std::net::Ipv4Addr;

/// Maximum length for an IPv4 subnet mask (32 bits).
pub const MAX_LENGTH: u8 = 32;

/// The fixed /24 used when enumerating subnet bases on the last octet.
pub const SUBNET_TEST_NETWORK: [u8; 3] = [192, 168, 1];

/// An IPv4 address.
pub type Address = Ipv4Addr;

/// A subnet mask. Contiguity is not enforced, see [`strict_prefix_length`].
pub type Mask = Ipv4Addr;

lazy_static! {
    static ref OCTET_RE: Regex = Regex::new(r"^[0-9]+$").expect("Invalid Regex?");
}

/// Parse a dotted-decimal address such as `"192.168.1.10"`.
///
/// Surrounding whitespace is ignored. Every octet must be plain decimal
/// digits with a value in `0..=255`.
///
/// # Examples
/// ```
/// use ipv4_subnet_quiz::models::parse_address;
/// assert_eq!(parse_address("10.0.0.1").unwrap().octets(), [10, 0, 0, 1]);
/// assert!(parse_address("256.1.1.1").is_err());
/// ```
pub fn parse_address(text: &str) -> Result<Address> {
    let text = text.trim();
    let tokens: Vec<&str> = text.split('.').collect();
    if tokens.len() != 4 {
        return Err(AddressError::InvalidFormat(format!(
            "expected 4 octets, found {} in '{}'",
            tokens.len(),
            text
        )));
    }

    let mut octets = [0u8; 4];
    for (slot, token) in octets.iter_mut().zip(tokens) {
        *slot = parse_octet(token)?;
    }
    Ok(Ipv4Addr::from(octets))
}

/// Parse a dotted-decimal subnet mask. Same rules as [`parse_address`].
pub fn parse_mask(text: &str) -> Result<Mask> {
    parse_address(text)
}

fn parse_octet(token: &str) -> Result<u8> {
    if !OCTET_RE.is_match(token) {
        return Err(AddressError::InvalidFormat(format!(
            "invalid octet '{token}'"
        )));
    }
    token
        .parse::<u8>()
        .map_err(|_| AddressError::InvalidFormat(format!("octet '{token}' out of range 0-255")))
}

/// Render each octet as 8 binary digits, most significant bit first.
pub fn to_binary_octets(addr: Address) -> [String; 4] {
    addr.octets().map(|octet| format!("{octet:08b}"))
}

/// Binary octets joined with dots, e.g. `11000000.10101000.00000001.00001010`.
pub fn to_binary_string(addr: Address) -> String {
    to_binary_octets(addr).iter().join(".")
}

/// Network address: the address ANDed with the mask.
pub fn network_address(ip: Address, mask: Mask) -> Address {
    Ipv4Addr::from(u32::from(ip) & u32::from(mask))
}

/// Broadcast address: every host bit of `network` set to 1.
pub fn broadcast_address(network: Address, mask: Mask) -> Address {
    Ipv4Addr::from(u32::from(network) | !u32::from(mask))
}

/// Count of leading 1-bits in the mask.
///
/// Bits after the first 0 are ignored, so `255.0.255.0` yields 8.
pub fn prefix_length(mask: Mask) -> u8 {
    u32::from(mask).leading_ones() as u8
}

/// Prefix length of a mask whose 1-bits form a contiguous prefix.
pub fn strict_prefix_length(mask: Mask) -> Result<u8> {
    let bits = u32::from(mask);
    if bits.leading_ones() + bits.trailing_zeros() != u32::from(MAX_LENGTH) {
        return Err(AddressError::InvalidFormat(format!(
            "mask {mask} is not contiguous"
        )));
    }
    Ok(prefix_length(mask))
}

/// Number of 0-bits anywhere in the mask.
pub fn host_bit_count(mask: Mask) -> u8 {
    u32::from(mask).count_zeros() as u8
}

/// Usable hosts per subnet: `2^host_bits - 2`, never below zero.
///
/// # Examples
/// ```
/// use ipv4_subnet_quiz::models::{parse_mask, usable_host_count};
/// assert_eq!(usable_host_count(parse_mask("255.255.255.240").unwrap()), 14);
/// assert_eq!(usable_host_count(parse_mask("255.255.255.255").unwrap()), 0);
/// ```
pub fn usable_host_count(mask: Mask) -> u64 {
    (1u64 << host_bit_count(mask)).saturating_sub(2)
}

/// True when both addresses share a network address under `mask`.
pub fn same_network(ip1: Address, ip2: Address, mask: Mask) -> bool {
    network_address(ip1, mask) == network_address(ip2, mask)
}

/// Subnet base addresses of the `192.168.1.x` network for the mask's last octet.
///
/// The block size is `256 - mask[3]`. A last octet of 255 enumerates all
/// 256 addresses; a last octet of 0 yields only `192.168.1.0`.
pub fn valid_subnet_bases(mask: Mask) -> Vec<Address> {
    let block_size = 256 - usize::from(mask.octets()[3]);
    let [a, b, c] = SUBNET_TEST_NETWORK;
    (0..256usize)
        .step_by(block_size)
        .map(|host| Ipv4Addr::new(a, b, c, host as u8))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ip(s: &str) -> Address {
        parse_address(s).unwrap()
    }

    #[test]
    fn test_parse_address() {
        assert_eq!(ip("1.2.3.4"), Ipv4Addr::new(1, 2, 3, 4));
        assert_eq!(ip("  10.0.0.255 "), Ipv4Addr::new(10, 0, 0, 255));
        assert_eq!(ip("010.001.0.0"), Ipv4Addr::new(10, 1, 0, 0));

        assert!(parse_address("256.1.1.1").is_err());
        assert!(parse_address("1.2.3").is_err());
        assert!(parse_address("1.2.3.4.5").is_err());
        assert!(parse_address("").is_err());
        assert!(parse_address("1..3.4").is_err());
        assert!(parse_address("1.2.3.x").is_err());
        assert!(parse_address("1.2.3.4a").is_err());
        assert!(parse_address("-1.2.3.4").is_err());
        assert!(parse_address("+1.2.3.4").is_err());
        assert!(parse_address("1. 2.3.4").is_err());
    }

    #[test]
    fn test_parse_address_names_token() {
        assert_eq!(
            parse_address("10.300.0.1").unwrap_err().to_string(),
            "Invalid format: octet '300' out of range 0-255"
        );
        assert_eq!(
            parse_address("10.abc.0.1").unwrap_err().to_string(),
            "Invalid format: invalid octet 'abc'"
        );
        assert_eq!(
            parse_address("1.2.3").unwrap_err().to_string(),
            "Invalid format: expected 4 octets, found 3 in '1.2.3'"
        );
    }

    #[test]
    fn test_to_binary_octets() {
        assert_eq!(
            to_binary_octets(ip("192.168.1.10")),
            ["11000000", "10101000", "00000001", "00001010"]
        );
        assert_eq!(
            to_binary_string(ip("255.255.255.0")),
            "11111111.11111111.11111111.00000000"
        );
    }

    #[test]
    fn test_network_and_broadcast() {
        let addr = ip("192.168.1.42");
        let mask = ip("255.255.255.240");
        let network = network_address(addr, mask);
        assert_eq!(network, ip("192.168.1.32"));
        assert_eq!(broadcast_address(network, mask), ip("192.168.1.47"));

        assert_eq!(network_address(addr, ip("255.255.0.0")), ip("192.168.0.0"));
        assert_eq!(
            broadcast_address(ip("10.0.0.0"), ip("255.0.0.0")),
            ip("10.255.255.255")
        );
        assert_eq!(
            broadcast_address(addr, ip("255.255.255.255")),
            ip("192.168.1.42")
        );
    }

    #[test]
    fn test_network_address_non_contiguous_mask() {
        assert_eq!(
            network_address(ip("10.20.30.40"), ip("255.0.255.0")),
            ip("10.0.30.0")
        );
    }

    #[test]
    fn test_prefix_length_catalog() {
        assert_eq!(prefix_length(ip("255.255.255.128")), 25);
        assert_eq!(prefix_length(ip("255.255.255.192")), 26);
        assert_eq!(prefix_length(ip("255.255.255.224")), 27);
        assert_eq!(prefix_length(ip("255.255.255.240")), 28);
        assert_eq!(prefix_length(ip("255.255.255.248")), 29);
        assert_eq!(prefix_length(ip("255.255.255.252")), 30);
        assert_eq!(prefix_length(ip("0.0.0.0")), 0);
        assert_eq!(prefix_length(ip("255.255.255.255")), 32);
    }

    #[test]
    fn test_prefix_length_tolerates_non_contiguous() {
        let mask = ip("255.0.255.0");
        assert_eq!(prefix_length(mask), 8);
        assert!(strict_prefix_length(mask).is_err());
        assert_eq!(strict_prefix_length(ip("255.255.252.0")).unwrap(), 22);
        assert_eq!(strict_prefix_length(ip("0.0.0.0")).unwrap(), 0);
        assert_eq!(strict_prefix_length(ip("255.255.255.255")).unwrap(), 32);
    }

    #[test]
    fn test_host_bits() {
        assert_eq!(host_bit_count(ip("255.255.255.0")), 8);
        assert_eq!(host_bit_count(ip("255.255.255.252")), 2);
        // zero count differs from 32 - prefix for a broken mask
        assert_eq!(host_bit_count(ip("255.0.255.0")), 16);
    }

    #[test]
    fn test_usable_host_count_catalog() {
        assert_eq!(usable_host_count(ip("255.255.255.128")), 126);
        assert_eq!(usable_host_count(ip("255.255.255.192")), 62);
        assert_eq!(usable_host_count(ip("255.255.255.224")), 30);
        assert_eq!(usable_host_count(ip("255.255.255.240")), 14);
        assert_eq!(usable_host_count(ip("255.255.255.248")), 6);
        assert_eq!(usable_host_count(ip("255.255.255.252")), 2);
        assert_eq!(usable_host_count(ip("255.255.255.254")), 0);
        assert_eq!(usable_host_count(ip("255.255.255.255")), 0);
        assert_eq!(usable_host_count(ip("0.0.0.0")), 4294967294);
    }

    #[test]
    fn test_same_network() {
        let mask = ip("255.255.255.0");
        assert!(same_network(ip("192.168.1.10"), ip("192.168.1.200"), mask));
        assert!(!same_network(ip("192.168.1.10"), ip("192.168.2.10"), mask));
        assert!(!same_network(
            ip("192.168.1.10"),
            ip("192.168.1.200"),
            ip("255.255.255.128")
        ));
    }

    #[test]
    fn test_valid_subnet_bases() {
        assert_eq!(
            valid_subnet_bases(ip("255.255.255.192")),
            vec![
                ip("192.168.1.0"),
                ip("192.168.1.64"),
                ip("192.168.1.128"),
                ip("192.168.1.192"),
            ]
        );
        assert_eq!(valid_subnet_bases(ip("255.255.255.252")).len(), 64);
        assert_eq!(valid_subnet_bases(ip("255.255.255.0")), vec![ip("192.168.1.0")]);
        assert_eq!(valid_subnet_bases(ip("255.255.0.0")), vec![ip("192.168.1.0")]);

        let all = valid_subnet_bases(ip("255.255.255.255"));
        assert_eq!(all.len(), 256);
        assert_eq!(all[255], ip("192.168.1.255"));
    }
}
