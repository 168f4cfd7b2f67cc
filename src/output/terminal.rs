//! Coloured terminal rendering.

use crate::models::{to_binary_octets, Address};
use crate::processing::{
    bit_roles, BitRole, BitSelection, NetworkDivision, NetworkInfo, SecondAddress,
    POSITION_VALUES,
};
use crate::quiz::{AnswerOutcome, QuizQuestion, ScoreState};
use colored::Colorize;
use itertools::Itertools;

const LABEL_WIDTH: usize = 18;

/// Format a label as a left-aligned, colon-terminated field.
///
/// # Examples
/// ```
/// use ipv4_subnet_quiz::output::format_field;
/// assert_eq!(format_field("CIDR", 8), "CIDR    : ");
/// ```
pub fn format_field<T: ToString>(label: T, width: usize) -> String {
    let label = label.to_string();
    format!("{label:<width$}: ")
}

fn line(label: &str, value: impl std::fmt::Display) -> String {
    format!("{}{}\n", format_field(label, LABEL_WIDTH), value)
}

/// Bits of an address, 1s highlighted.
fn address_bits(addr: Address) -> String {
    to_binary_octets(addr)
        .iter()
        .map(|octet| {
            octet
                .chars()
                .map(|bit| {
                    let s = bit.to_string();
                    if bit == '1' {
                        s.green()
                    } else {
                        s.normal()
                    }
                })
                .join("")
        })
        .join(".")
}

/// Bits of a mask, coloured by network or host role.
fn mask_bits(mask: Address) -> String {
    let roles = bit_roles(mask);
    to_binary_octets(mask)
        .iter()
        .enumerate()
        .map(|(i, octet)| {
            octet
                .chars()
                .enumerate()
                .map(|(j, bit)| {
                    let s = bit.to_string();
                    match roles[i * 8 + j] {
                        BitRole::Network => s.blue(),
                        BitRole::Host => s.yellow(),
                    }
                })
                .join("")
        })
        .join(".")
}

/// Weight of each bit position within an octet.
fn position_row() -> String {
    POSITION_VALUES.iter().join(" ")
}

pub fn render_network_info(info: &NetworkInfo) -> String {
    let mut out = String::new();
    out.push_str(&line("Bit weights", position_row().dimmed()));
    out.push_str(&line(&format!("IP {}", info.ip), address_bits(info.ip)));
    out.push_str(&line(&format!("Mask {}", info.mask), mask_bits(info.mask)));

    match &info.second_ip {
        Some(SecondAddress::Valid {
            address,
            same_network,
            ..
        }) => {
            let bits = address_bits(*address);
            let bits = if *same_network {
                bits.normal()
            } else {
                bits.on_red()
            };
            out.push_str(&line(&format!("IP {address}"), bits));
        }
        Some(SecondAddress::Invalid { text }) => {
            out.push_str(&line(&format!("IP {text}"), "Invalid IP".red()));
        }
        None => {}
    }

    out.push_str(&format!("{}\n", NetworkDivision::of(info.mask)));
    out.push_str(&line("IP Class", &info.class_label));
    out.push_str(&line("Network Address", info.network_address));
    out.push_str(&line("Broadcast Address", info.broadcast_address));
    out.push_str(&line("Usable Hosts", info.usable_hosts));
    out.push_str(&line("CIDR Notation", &info.cidr));
    if let Some(same) = info.same_network() {
        let value = if same { "Yes".green() } else { "No".red() };
        out.push_str(&line("Same Network", value));
    }
    out
}

pub fn render_question(question: &QuizQuestion) -> String {
    format!("{} {}\n", "Question:".bold(), question.prompt)
}

pub fn render_outcome(outcome: &AnswerOutcome, score: ScoreState) -> String {
    let feedback = if outcome.correct {
        "Correct! Well done!".green().to_string()
    } else {
        format!(
            "Incorrect. The correct answer is: {}",
            outcome.canonical_answer.to_lowercase()
        )
        .red()
        .to_string()
    };
    format!("{feedback}\n{}", render_score(score))
}

pub fn render_score(score: ScoreState) -> String {
    format!("Score: {score}\n")
}

pub fn render_subnet_bases(bases: &[Address]) -> String {
    let mut out = format!("{} valid subnets:\n", bases.len());
    for base in bases {
        out.push_str(&format!("  {base}\n"));
    }
    out
}

pub fn render_bit_selection(selection: &BitSelection) -> String {
    format!(
        "Bits {}-{}\nSelected bits: {} | Possible values: {}\n",
        selection.start_bit,
        selection.end_bit,
        selection.selected_bits().to_string().bold(),
        selection.possible_values().to_string().bold()
    )
}
