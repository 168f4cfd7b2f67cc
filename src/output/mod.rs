//! Output formatting for engine and quiz results.
//!
//! - [`terminal`] - coloured text for the REPL
//! - [`json`] - pretty JSON records

mod json;
mod terminal;

pub use json::{bit_selection_json, outcome_json, question_json, subnet_bases_json, to_json};
pub use terminal::{
    format_field, render_bit_selection, render_network_info, render_outcome, render_question,
    render_score, render_subnet_bases,
};
