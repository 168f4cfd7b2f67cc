//! Network summary for an address, a mask and an optional second address.

use crate::error::Result;
use crate::models::{
    broadcast_address, class_label, classify, default_mask_for, host_bit_count, network_address,
    parse_address, parse_mask, prefix_length, same_network, to_binary_octets, usable_host_count,
    Address, IpClass, Mask,
};
use serde::Serialize;

/// Everything the visualizer displays for one address/mask pair.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct NetworkInfo {
    pub ip: Address,
    pub mask: Mask,
    pub ip_class: IpClass,
    /// `None` for classes without a conventional mask.
    pub default_mask: Option<Mask>,
    pub class_label: String,
    pub network_address: Address,
    pub broadcast_address: Address,
    pub prefix_length: u8,
    /// CIDR suffix, e.g. `/24`.
    pub cidr: String,
    /// Zero bits in the mask.
    pub host_bits: u8,
    pub usable_hosts: u64,
    pub ip_binary: [String; 4],
    pub mask_binary: [String; 4],
    pub second_ip: Option<SecondAddress>,
}

/// The optional second address. A bad second address is reported here
/// instead of failing the whole summary.
#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum SecondAddress {
    Valid {
        address: Address,
        binary: [String; 4],
        same_network: bool,
    },
    Invalid {
        text: String,
    },
}

impl NetworkInfo {
    pub fn from_addresses(ip: Address, mask: Mask, second: Option<Address>) -> NetworkInfo {
        let ip_class = classify(ip);
        let network = network_address(ip, mask);
        let prefix = prefix_length(mask);

        NetworkInfo {
            ip,
            mask,
            ip_class,
            default_mask: default_mask_for(ip_class),
            class_label: class_label(ip_class),
            network_address: network,
            broadcast_address: broadcast_address(network, mask),
            prefix_length: prefix,
            cidr: format!("/{prefix}"),
            host_bits: host_bit_count(mask),
            usable_hosts: usable_host_count(mask),
            ip_binary: to_binary_octets(ip),
            mask_binary: to_binary_octets(mask),
            second_ip: second.map(|address| SecondAddress::Valid {
                address,
                binary: to_binary_octets(address),
                same_network: same_network(ip, address, mask),
            }),
        }
    }

    /// Shorthand for the second address' same-network flag.
    pub fn same_network(&self) -> Option<bool> {
        match &self.second_ip {
            Some(SecondAddress::Valid { same_network, .. }) => Some(*same_network),
            _ => None,
        }
    }
}

/// Parse the visualizer inputs and build a [`NetworkInfo`].
///
/// `ip_text` and `mask_text` must parse. A blank `second_text` is treated as
/// absent; an unparsable one becomes [`SecondAddress::Invalid`].
pub fn analyze(ip_text: &str, mask_text: &str, second_text: Option<&str>) -> Result<NetworkInfo> {
    let ip = parse_address(ip_text)?;
    let mask = parse_mask(mask_text)?;

    let second_text = second_text.map(str::trim).filter(|s| !s.is_empty());
    let second = second_text.map(|text| (text, parse_address(text)));
    let valid_second = match &second {
        Some((_, Ok(addr))) => Some(*addr),
        _ => None,
    };

    let mut info = NetworkInfo::from_addresses(ip, mask, valid_second);
    if let Some((text, Err(_))) = second {
        info.second_ip = Some(SecondAddress::Invalid {
            text: text.to_string(),
        });
    }
    Ok(info)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::net::Ipv4Addr;

    #[test]
    fn test_analyze_class_c() {
        let info = analyze("192.168.1.10", "255.255.255.0", Some("192.168.2.1")).unwrap();
        assert_eq!(info.ip_class, IpClass::C);
        assert_eq!(info.class_label, "Class C (Default: 255.255.255.0)");
        assert_eq!(info.default_mask, Some(Ipv4Addr::new(255, 255, 255, 0)));
        assert_eq!(info.network_address, Ipv4Addr::new(192, 168, 1, 0));
        assert_eq!(info.broadcast_address, Ipv4Addr::new(192, 168, 1, 255));
        assert_eq!(info.cidr, "/24");
        assert_eq!(info.host_bits, 8);
        assert_eq!(info.usable_hosts, 254);
        assert_eq!(info.ip_binary[3], "00001010");
        assert_eq!(info.same_network(), Some(false));
    }

    #[test]
    fn test_analyze_without_second() {
        let info = analyze("10.1.2.3", "255.255.255.252", Some("   ")).unwrap();
        assert_eq!(info.second_ip, None);
        assert_eq!(info.usable_hosts, 2);
        assert_eq!(info.class_label, "Class A (Default: 255.0.0.0)");

        let info = analyze("127.0.0.1", "255.0.0.0", None).unwrap();
        assert_eq!(info.class_label, "Unknown");
        assert_eq!(info.default_mask, None);
    }

    #[test]
    fn test_analyze_invalid_second() {
        let info = analyze("192.168.1.10", "255.255.255.0", Some("192.168.1")).unwrap();
        assert_eq!(
            info.second_ip,
            Some(SecondAddress::Invalid {
                text: "192.168.1".to_string()
            })
        );
        assert_eq!(info.same_network(), None);
        assert_eq!(info.network_address, Ipv4Addr::new(192, 168, 1, 0));
    }

    #[test]
    fn test_analyze_invalid_primary() {
        assert!(analyze("192.168.1.300", "255.255.255.0", None).is_err());
        assert!(analyze("192.168.1.1", "255.255.255", None).is_err());
    }

    #[test]
    fn test_analyze_non_contiguous_mask() {
        let info = analyze("10.20.30.40", "255.0.255.0", None).unwrap();
        assert_eq!(info.prefix_length, 8);
        assert_eq!(info.host_bits, 16);
        assert_eq!(info.usable_hosts, 65534);
    }
}
