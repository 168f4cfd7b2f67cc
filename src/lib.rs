//! # ipv4-subnet-quiz
//!
//! IPv4 subnetting engine with a visualizer summary and a quiz mode.
//!
//! - [`models`] - address parsing, mask arithmetic, classful categories
//! - [`processing`] - the visualizer's summary record and bit layout
//! - [`quiz`] - question generation and scoring
//! - [`output`] - terminal and JSON rendering
//! - [`config`] - environment configuration
//! - [`cli`] - the interactive command loop
//!
//! ```
//! use ipv4_subnet_quiz::processing::analyze;
//!
//! let info = analyze("192.168.1.10", "255.255.255.192", None).unwrap();
//! assert_eq!(info.network_address.to_string(), "192.168.1.0");
//! assert_eq!(info.cidr, "/26");
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod models;
pub mod output;
pub mod processing;
pub mod quiz;

pub use config::{Config, OutputFormat};
pub use error::{AddressError, Result};
pub use processing::{analyze, NetworkInfo};
pub use quiz::{QuizSession, RngSource};

/// A session drawing from `rand`'s standard generator, seeded from config.
pub fn new_session(config: &Config) -> QuizSession<RngSource<rand::rngs::StdRng>> {
    QuizSession::new(RngSource::seeded(config.seed))
}
