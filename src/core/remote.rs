//! Remote model stage: collaborator trait and output validation
//!
//! The remote model may be absent, fail, or answer with garbage. Anything
//! that does not validate becomes `None`, and the local result stands.

use lazy_static::lazy_static;
use regex::Regex;
use serde_json::Value;
use crate::ASSIST_MAX_CHARS;
use crate::types::{Category, DimensionScores, RemoteEvaluation, clamp_score};

const REMOTE_MAX_GAPS: usize = 5;
const REMOTE_MAX_ACTIONS: usize = 6;

lazy_static! {
    // First '{' to last '}' across lines
    static ref RE_JSON_BLOCK: Regex = Regex::new(r"(?s)\{.*\}").unwrap();
}

/// Optional remote model. Implementations map every failure (network,
/// status, schema) to `None`.
pub trait RemoteEvaluator: Send + Sync {
    /// Full evaluation replacing local scores and text
    fn evaluate_full(&self, text: &str, category: &Category) -> Option<RemoteEvaluation>;

    /// Free-text suggestion appended to local actions
    fn assist_suggestion(&self, text: &str, category: &Category, scores: &DimensionScores) -> Option<String>;
}

/// The remote stage when no model is configured
#[derive(Debug, Clone, Copy, Default)]
pub struct NoRemote;

impl RemoteEvaluator for NoRemote {
    fn evaluate_full(&self, _text: &str, _category: &Category) -> Option<RemoteEvaluation> {
        None
    }

    fn assist_suggestion(&self, _text: &str, _category: &Category, _scores: &DimensionScores) -> Option<String> {
        None
    }
}

/// Validate raw model output of the form
/// `{"overall", "breakdown": {clarity, ...}, "ideal", "gaps", "actions"}`.
///
/// Numbers are rounded and clamped (non-numeric → 0), gaps cut to 5,
/// actions to 6. Output with no ideal, gaps or actions is rejected.
pub fn parse_full_evaluation(content: &str) -> Option<RemoteEvaluation> {
    let block = RE_JSON_BLOCK.find(content)?.as_str();
    let obj: Value = match serde_json::from_str(block) {
        Ok(v) => v,
        Err(e) => {
            tracing::warn!(error = %e, "remote evaluation is not valid JSON");
            return None;
        }
    };

    let breakdown = &obj["breakdown"];
    let scores = DimensionScores {
        clarity: number_score(&breakdown["clarity"]),
        execution: number_score(&breakdown["execution"]),
        planning: number_score(&breakdown["planning"]),
        resources: number_score(&breakdown["resources"]),
        feedback: number_score(&breakdown["feedback"]),
        overall: number_score(&obj["overall"]),
    };

    let evaluation = RemoteEvaluation {
        scores,
        ideal: text_of(&obj["ideal"]),
        gaps: text_list(&obj["gaps"], REMOTE_MAX_GAPS),
        actions: text_list(&obj["actions"], REMOTE_MAX_ACTIONS),
    };

    if evaluation.ideal.is_empty() && evaluation.gaps.is_empty() && evaluation.actions.is_empty() {
        tracing::warn!("remote evaluation carries no text, using local result");
        return None;
    }
    Some(evaluation)
}

/// Flatten a suggestion to one line of at most 300 characters
pub fn clean_assist_suggestion(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    Some(trimmed.replace('\n', " ").chars().take(ASSIST_MAX_CHARS).collect())
}

/// Numeric coercion: numbers and numeric strings count, anything else is 0
fn number_score(v: &Value) -> u8 {
    let n = match v {
        Value::Number(n) => n.as_f64().unwrap_or(0.0),
        Value::String(s) => s.trim().parse::<f64>().unwrap_or(0.0),
        Value::Bool(b) => if *b { 1.0 } else { 0.0 },
        _ => 0.0,
    };
    if !n.is_finite() {
        return 0;
    }
    clamp_score(n.round().clamp(i32::MIN as f64, i32::MAX as f64) as i32)
}

fn text_of(v: &Value) -> String {
    match v {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

fn text_list(v: &Value, max: usize) -> Vec<String> {
    match v {
        Value::Array(items) => items.iter().take(max).map(text_of).collect(),
        _ => Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_parses_wrapped_json() {
        let content = r#"はい、評価です。
{"overall": 72.4, "breakdown": {"clarity": 80, "execution": "65", "planning": 150, "resources": -5, "feedback": null},
 "ideal": "理想", "gaps": ["a", "b"], "actions": ["x"]}
以上です。"#;
        let eval = parse_full_evaluation(content).unwrap();
        assert_eq!(
            eval.scores,
            DimensionScores {
                clarity: 80,
                execution: 65,
                planning: 100,
                resources: 0,
                feedback: 0,
                overall: 72,
            }
        );
        assert_eq!(eval.ideal, "理想");
        assert_eq!(eval.gaps, vec!["a".to_string(), "b".to_string()]);
    }

    #[test]
    fn test_truncates_lists() {
        let content = r#"{"ideal": "", "gaps": [1,2,3,4,5,6,7], "actions": ["1","2","3","4","5","6","7","8"]}"#;
        let eval = parse_full_evaluation(content).unwrap();
        assert_eq!(eval.gaps.len(), 5);
        assert_eq!(eval.gaps[0], "1");
        assert_eq!(eval.actions.len(), 6);
    }

    #[test]
    fn test_rejects_missing_json() {
        assert!(parse_full_evaluation("no json here").is_none());
        assert!(parse_full_evaluation("{not json}").is_none());
    }

    #[test]
    fn test_rejects_textless_evaluation() {
        let content = r#"{"overall": 90, "breakdown": {"clarity": 90}}"#;
        assert!(parse_full_evaluation(content).is_none());
    }

    #[test]
    fn test_clean_assist_suggestion() {
        assert_eq!(clean_assist_suggestion("a\nb\n").as_deref(), Some("a b"));
        assert_eq!(clean_assist_suggestion("   "), None);
        let long = "あ".repeat(400);
        assert_eq!(clean_assist_suggestion(&long).unwrap().chars().count(), 300);
    }

    #[test]
    fn test_no_remote_is_always_none() {
        let remote = NoRemote;
        let scores = DimensionScores::from_raw(0, 0, 0, 0, 0);
        assert!(remote.evaluate_full("text", &Category::Other).is_none());
        assert!(remote.assist_suggestion("text", &Category::Other, &scores).is_none());
    }
}
