//! The fixed set of masks quiz questions are drawn from.

use crate::models::Mask;
use serde::Serialize;
use std::net::Ipv4Addr;

/// A catalog mask with its precomputed answers.
#[derive(Serialize, Debug, Copy, Clone, PartialEq, Eq)]
pub struct MaskEntry {
    pub mask: Mask,
    pub prefix: u8,
    /// Usable hosts per subnet.
    pub hosts: u32,
    /// Equal subnets carved from a class C /24.
    pub subnets: u32,
}

/// /25 through /30 on the last octet.
pub const MASK_CATALOG: [MaskEntry; 6] = [
    MaskEntry {
        mask: Ipv4Addr::new(255, 255, 255, 128),
        prefix: 25,
        hosts: 126,
        subnets: 2,
    },
    MaskEntry {
        mask: Ipv4Addr::new(255, 255, 255, 192),
        prefix: 26,
        hosts: 62,
        subnets: 4,
    },
    MaskEntry {
        mask: Ipv4Addr::new(255, 255, 255, 224),
        prefix: 27,
        hosts: 30,
        subnets: 8,
    },
    MaskEntry {
        mask: Ipv4Addr::new(255, 255, 255, 240),
        prefix: 28,
        hosts: 14,
        subnets: 16,
    },
    MaskEntry {
        mask: Ipv4Addr::new(255, 255, 255, 248),
        prefix: 29,
        hosts: 6,
        subnets: 32,
    },
    MaskEntry {
        mask: Ipv4Addr::new(255, 255, 255, 252),
        prefix: 30,
        hosts: 2,
        subnets: 64,
    },
];
