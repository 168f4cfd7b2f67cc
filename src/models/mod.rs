//! Address engine.
//!
//! - [`ipv4`] - parsing, binary rendering and mask arithmetic
//! - [`ip_class`] - classful categories and their default masks

mod ip_class;
mod ipv4;

// Re-export public types
pub use ip_class::{class_label, classify, default_mask_for, IpClass};
pub use ipv4::{
    broadcast_address, host_bit_count, network_address, parse_address, parse_mask,
    prefix_length, same_network, strict_prefix_length, to_binary_octets, to_binary_string,
    usable_host_count, valid_subnet_bases, Address, Mask, MAX_LENGTH, SUBNET_TEST_NETWORK,
};
