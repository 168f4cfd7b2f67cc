//! Visualizer calculations built on the address engine.
//!
//! - [`network_info`] - the per-input summary record
//! - [`bits`] - network/host bit layout and bit span sizes

mod bits;
mod network_info;

// Re-export public functions
pub use bits::{bit_roles, BitRole, BitSelection, NetworkDivision, POSITION_VALUES};
pub use network_info::{analyze, NetworkInfo, SecondAddress};
