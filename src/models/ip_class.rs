//! Classful address categories.

use super::ipv4::{Address, Mask};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::net::Ipv4Addr;

/// Historical address class, decided by the first octet alone.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum IpClass {
    A,
    B,
    C,
    D,
    E,
    Unknown,
}

impl fmt::Display for IpClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            IpClass::A => "A",
            IpClass::B => "B",
            IpClass::C => "C",
            IpClass::D => "D",
            IpClass::E => "E",
            IpClass::Unknown => "Unknown",
        };
        f.write_str(s)
    }
}

/// Classify by first octet. 0 and 127 fall outside every class.
pub fn classify(ip: Address) -> IpClass {
    match ip.octets()[0] {
        1..=126 => IpClass::A,
        128..=191 => IpClass::B,
        192..=223 => IpClass::C,
        224..=239 => IpClass::D,
        240..=255 => IpClass::E,
        _ => IpClass::Unknown,
    }
}

/// Conventional mask for classes A to C. `None` is displayed as `-`.
pub fn default_mask_for(class: IpClass) -> Option<Mask> {
    match class {
        IpClass::A => Some(Ipv4Addr::new(255, 0, 0, 0)),
        IpClass::B => Some(Ipv4Addr::new(255, 255, 0, 0)),
        IpClass::C => Some(Ipv4Addr::new(255, 255, 255, 0)),
        IpClass::D | IpClass::E | IpClass::Unknown => None,
    }
}

/// Human label, e.g. `Class C (Default: 255.255.255.0)`, `Class D` or `Unknown`.
pub fn class_label(class: IpClass) -> String {
    match (class, default_mask_for(class)) {
        (IpClass::Unknown, _) => "Unknown".to_string(),
        (_, Some(mask)) => format!("Class {class} (Default: {mask})"),
        (_, None) => format!("Class {class}"),
    }
}
