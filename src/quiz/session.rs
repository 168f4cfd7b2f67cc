//! Question generation and scoring for one quiz session.

use super::catalog::{MaskEntry, MASK_CATALOG};
use super::question::{AnswerOutcome, QuizKind, QuizQuestion, ScoreState, VisualizerInputs};
use super::random::RandomSource;
use crate::models::{
    broadcast_address, network_address, same_network, valid_subnet_bases, Address,
};
use std::net::Ipv4Addr;

/// Quiz state owned by one caller: the current question and the score.
///
/// States: no question, unanswered question, answered question.
/// [`QuizSession::generate`] always moves to a fresh unanswered question.
#[derive(Debug)]
pub struct QuizSession<R: RandomSource> {
    rng: R,
    current: Option<QuizQuestion>,
    answered: bool,
    score: ScoreState,
}

impl<R: RandomSource> QuizSession<R> {
    pub fn new(rng: R) -> QuizSession<R> {
        QuizSession {
            rng,
            current: None,
            answered: false,
            score: ScoreState::default(),
        }
    }

    /// Replace the current question with a new random one.
    pub fn generate(&mut self) -> &QuizQuestion {
        let question = build_question(&mut self.rng);
        log::debug!(
            "Generated {} question for {} / {}: answer={}",
            question.kind,
            question.primary,
            question.mask,
            question.answer
        );
        self.answered = false;
        self.current.insert(question)
    }

    /// Score `user_text` against the current question.
    ///
    /// Every call counts as an attempt, including repeats on the same
    /// question. Returns `None` when no question has been generated.
    pub fn check_answer(&mut self, user_text: &str) -> Option<AnswerOutcome> {
        let question = self.current.as_ref()?;
        let correct = question.is_correct(user_text);

        self.score.total += 1;
        if correct {
            self.score.correct += 1;
        }
        self.answered = true;
        log::info!(
            "Answer {:?} for {} question is {}, score {}",
            user_text.trim(),
            question.kind,
            if correct { "correct" } else { "incorrect" },
            self.score
        );

        Some(AnswerOutcome {
            correct,
            canonical_answer: question.answer.clone(),
        })
    }

    /// Addresses of the current question for the visualizer.
    pub fn current_as_visualizer_inputs(&self) -> Option<VisualizerInputs> {
        self.current.as_ref().map(|q| VisualizerInputs {
            ip: q.primary,
            mask: q.mask,
            second_ip: q.secondary,
        })
    }

    pub fn current(&self) -> Option<&QuizQuestion> {
        self.current.as_ref()
    }

    pub fn is_answered(&self) -> bool {
        self.current.is_some() && self.answered
    }

    pub fn score(&self) -> ScoreState {
        self.score
    }
}

/// Draw a question: kind, then mask, then primary address, then any
/// kind-specific picks.
pub fn build_question<R: RandomSource>(rng: &mut R) -> QuizQuestion {
    let kind = QuizKind::ALL[rng.below(QuizKind::ALL.len())];
    let entry = MASK_CATALOG[rng.below(MASK_CATALOG.len())];
    let ip = random_address(rng);
    build_question_for(kind, entry, ip, rng)
}

fn build_question_for<R: RandomSource>(
    kind: QuizKind,
    entry: MaskEntry,
    ip: Address,
    rng: &mut R,
) -> QuizQuestion {
    let MaskEntry { mask, prefix, .. } = entry;
    let question = |prompt: String, answer: String| QuizQuestion {
        kind,
        prompt,
        answer,
        primary: ip,
        mask,
        secondary: None,
    };

    match kind {
        QuizKind::SubnetCount => question(
            format!("How many subnets does the mask {mask} (/{prefix}) create for a Class C network?"),
            entry.subnets.to_string(),
        ),
        QuizKind::HostCount => question(
            format!("How many usable hosts per subnet with mask {mask} (/{prefix})?"),
            entry.hosts.to_string(),
        ),
        QuizKind::SameNetwork => {
            let second = random_address(rng);
            let answer = if same_network(ip, second, mask) {
                "yes"
            } else {
                "no"
            };
            QuizQuestion {
                secondary: Some(second),
                ..question(
                    format!(
                        "Are {ip} and {second} on the same network with mask {mask}? (yes/no)"
                    ),
                    answer.to_string(),
                )
            }
        }
        QuizKind::BroadcastAddress => {
            let broadcast = broadcast_address(network_address(ip, mask), mask);
            question(
                format!("What is the broadcast address for IP {ip} with mask {mask}?"),
                broadcast.to_string(),
            )
        }
        QuizKind::ValidSubnet => {
            // always a real base, so the answer is always yes
            let bases = valid_subnet_bases(mask);
            let base = bases[rng.below(bases.len())];
            QuizQuestion {
                primary: base,
                ..question(
                    format!("Is {base} a valid subnet address for mask {mask}? (yes/no)"),
                    "yes".to_string(),
                )
            }
        }
    }
}

/// An address in `192.168.1-254.1-250`.
fn random_address<R: RandomSource>(rng: &mut R) -> Address {
    let third = rng.below(254) as u8 + 1;
    let fourth = rng.below(250) as u8 + 1;
    Ipv4Addr::new(192, 168, third, fourth)
}
