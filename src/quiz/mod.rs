//! Quiz mode.
//!
//! - [`catalog`] - the masks questions are drawn from
//! - [`question`] - question, score and answer types
//! - [`random`] - injectable randomness
//! - [`session`] - question generation and scoring

mod catalog;
mod question;
mod random;
mod session;

pub use catalog::{MaskEntry, MASK_CATALOG};
pub use question::{AnswerOutcome, QuizKind, QuizQuestion, ScoreState, VisualizerInputs};
pub use random::{RandomSource, RngSource, ScriptedSource};
pub use session::{build_question, QuizSession};
