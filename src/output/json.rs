//! JSON rendering of engine and quiz results.

use crate::models::Address;
use crate::processing::BitSelection;
use crate::quiz::{AnswerOutcome, QuizQuestion, ScoreState};
use serde::Serialize;
use serde_json::json;

/// Pretty-print any serializable record.
pub fn to_json<T: Serialize>(value: &T) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(value)
}

/// The prompt only, so the canonical answer is not revealed.
pub fn question_json(question: &QuizQuestion) -> Result<String, serde_json::Error> {
    to_json(&json!({
        "kind": question.kind,
        "prompt": question.prompt,
    }))
}

pub fn outcome_json(outcome: &AnswerOutcome, score: ScoreState) -> Result<String, serde_json::Error> {
    to_json(&json!({
        "correct": outcome.correct,
        "canonical_answer": outcome.canonical_answer,
        "score": score,
    }))
}

pub fn subnet_bases_json(bases: &[Address]) -> Result<String, serde_json::Error> {
    to_json(&json!({ "count": bases.len(), "subnets": bases }))
}

pub fn bit_selection_json(selection: &BitSelection) -> Result<String, serde_json::Error> {
    to_json(&json!({
        "start_bit": selection.start_bit,
        "end_bit": selection.end_bit,
        "selected_bits": selection.selected_bits(),
        "possible_values": selection.possible_values(),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::processing::analyze;
    use crate::quiz::QuizKind;
    use serde_json::Value;
    use std::net::Ipv4Addr;

    #[test]
    fn test_network_info_json() {
        let info = analyze("192.168.1.10", "255.255.255.192", Some("bad")).unwrap();
        let value: Value = serde_json::from_str(&to_json(&info).unwrap()).unwrap();
        assert_eq!(value["ip_class"], "C");
        assert_eq!(value["network_address"], "192.168.1.0");
        assert_eq!(value["broadcast_address"], "192.168.1.63");
        assert_eq!(value["cidr"], "/26");
        assert_eq!(value["usable_hosts"], 62);
        assert_eq!(value["default_mask"], "255.255.255.0");
        assert_eq!(value["mask_binary"][3], "11000000");
        assert_eq!(value["second_ip"]["status"], "invalid");
        assert_eq!(value["second_ip"]["text"], "bad");
    }

    #[test]
    fn test_question_json_hides_answer() {
        let question = QuizQuestion {
            kind: QuizKind::HostCount,
            prompt: "How many?".to_string(),
            answer: "14".to_string(),
            primary: Ipv4Addr::new(192, 168, 1, 1),
            mask: Ipv4Addr::new(255, 255, 255, 240),
            secondary: None,
        };
        let value: Value = serde_json::from_str(&question_json(&question).unwrap()).unwrap();
        assert_eq!(value["kind"], "HostCount");
        assert_eq!(value["prompt"], "How many?");
        assert!(value.get("answer").is_none());
    }

    #[test]
    fn test_outcome_json() {
        let outcome = AnswerOutcome {
            correct: true,
            canonical_answer: "yes".to_string(),
        };
        let score = ScoreState {
            correct: 2,
            total: 3,
        };
        let value: Value = serde_json::from_str(&outcome_json(&outcome, score).unwrap()).unwrap();
        assert_eq!(value["correct"], true);
        assert_eq!(value["score"]["correct"], 2);
        assert_eq!(value["score"]["total"], 3);
    }

    #[test]
    fn test_subnet_bases_json() {
        let bases = vec![Ipv4Addr::new(192, 168, 1, 0), Ipv4Addr::new(192, 168, 1, 128)];
        let value: Value = serde_json::from_str(&subnet_bases_json(&bases).unwrap()).unwrap();
        assert_eq!(value["count"], 2);
        assert_eq!(value["subnets"][1], "192.168.1.128");
    }

    #[test]
    fn test_bit_selection_json() {
        let selection = BitSelection::new(0, 32);
        let value: Value = serde_json::from_str(&bit_selection_json(&selection).unwrap()).unwrap();
        assert_eq!(value["start_bit"], 0);
        assert_eq!(value["end_bit"], 32);
        assert_eq!(value["selected_bits"], 32);
        assert_eq!(value["possible_values"], 4294967296u64);
    }
}
