//! Error types for address parsing.
//!
//! Only parsing can fail. Arithmetic on parsed addresses and masks is total.

/// Errors raised while turning text into an address or mask.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AddressError {
    /// Wrong octet count, non-numeric octet, or octet out of range.
    ///
    /// The message names the offending token when there is one.
    #[error("Invalid format: {0}")]
    InvalidFormat(String),
}

/// A specialized Result type for address parsing.
pub type Result<T> = std::result::Result<T, AddressError>;
