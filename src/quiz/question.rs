//! Quiz data types.

use crate::models::{Address, Mask};
use serde::Serialize;
use std::fmt;

/// The five kinds of question the generator can pose.
#[derive(Serialize, Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum QuizKind {
    SubnetCount,
    HostCount,
    SameNetwork,
    BroadcastAddress,
    ValidSubnet,
}

impl QuizKind {
    /// Every kind, in draw order.
    pub const ALL: [QuizKind; 5] = [
        QuizKind::SubnetCount,
        QuizKind::HostCount,
        QuizKind::SameNetwork,
        QuizKind::BroadcastAddress,
        QuizKind::ValidSubnet,
    ];
}

impl fmt::Display for QuizKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            QuizKind::SubnetCount => "subnet count",
            QuizKind::HostCount => "host count",
            QuizKind::SameNetwork => "same network",
            QuizKind::BroadcastAddress => "broadcast address",
            QuizKind::ValidSubnet => "valid subnet",
        };
        f.write_str(s)
    }
}

/// One generated question and its canonical answer.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct QuizQuestion {
    pub kind: QuizKind,
    pub prompt: String,
    pub answer: String,
    pub primary: Address,
    pub mask: Mask,
    pub secondary: Option<Address>,
}

impl QuizQuestion {
    /// Trimmed, case-insensitive comparison with the canonical answer.
    pub fn is_correct(&self, user_text: &str) -> bool {
        user_text.trim().to_lowercase() == self.answer.to_lowercase()
    }
}

/// Running tally for a session.
#[derive(Serialize, Debug, Copy, Clone, Default, PartialEq, Eq)]
pub struct ScoreState {
    pub correct: u32,
    pub total: u32,
}

impl fmt::Display for ScoreState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.correct, self.total)
    }
}

/// Result of checking one answer.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct AnswerOutcome {
    pub correct: bool,
    pub canonical_answer: String,
}

/// The current question's addresses, ready for the visualizer.
#[derive(Serialize, Debug, Copy, Clone, PartialEq, Eq)]
pub struct VisualizerInputs {
    pub ip: Address,
    pub mask: Mask,
    pub second_ip: Option<Address>,
}
