//! Bit layout helpers for the binary view.
//!
//! Identifies which of the 32 mask bits belong to the network, and how many
//! values a span of bits can encode.

use crate::models::{prefix_length, Mask, MAX_LENGTH};
use serde::Serialize;
use std::fmt;

/// Weight of each bit within an octet, most significant first.
pub const POSITION_VALUES: [u8; 8] = [128, 64, 32, 16, 8, 4, 2, 1];

/// Whether a bit sits in the network part or the host part of a mask.
#[derive(Serialize, Debug, Copy, Clone, PartialEq, Eq)]
pub enum BitRole {
    Network,
    Host,
}

/// Role of every bit, using the leading-ones prefix of `mask`.
pub fn bit_roles(mask: Mask) -> [BitRole; 32] {
    let network_bits = usize::from(prefix_length(mask));
    let mut roles = [BitRole::Host; 32];
    roles[..network_bits].fill(BitRole::Network);
    roles
}

/// Network/host split of a mask.
#[derive(Serialize, Debug, Copy, Clone, PartialEq, Eq)]
pub struct NetworkDivision {
    pub network_bits: u8,
    pub host_bits: u8,
}

impl NetworkDivision {
    pub fn of(mask: Mask) -> NetworkDivision {
        let network_bits = prefix_length(mask);
        NetworkDivision {
            network_bits,
            host_bits: MAX_LENGTH - network_bits,
        }
    }
}

impl fmt::Display for NetworkDivision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Network Bits: {} bits | Host Bits: {} bits | Division: /{}",
            self.network_bits, self.host_bits, self.network_bits
        )
    }
}

/// A span of bit positions between two boundaries.
///
/// Boundaries sit between bits: 0 is before the first bit, 32 after the last.
#[derive(Serialize, Debug, Copy, Clone, PartialEq, Eq)]
pub struct BitSelection {
    pub start_bit: u8,
    pub end_bit: u8,
}

impl BitSelection {
    /// Boundaries are clamped to `0..=32` and may be given in either order.
    pub fn new(a: u8, b: u8) -> BitSelection {
        let a = a.min(MAX_LENGTH);
        let b = b.min(MAX_LENGTH);
        BitSelection {
            start_bit: a.min(b),
            end_bit: a.max(b),
        }
    }

    /// Selection running from the mask boundary to `other`.
    pub fn from_mask(mask: Mask, other: u8) -> BitSelection {
        BitSelection::new(prefix_length(mask), other)
    }

    pub fn selected_bits(&self) -> u8 {
        self.end_bit - self.start_bit
    }

    /// Distinct values the selected bits can hold.
    pub fn possible_values(&self) -> u64 {
        1u64 << self.selected_bits()
    }
}
