//! Dimension scorer: flags and quantities → five clamped scores + overall
//!
//! Every dimension starts at a fixed base, takes additive bonuses and
//! penalties, and is clamped to [0,100] only at the end.

use std::sync::Arc;

use crate::{
    CLARITY_BASE, CLARITY_GOAL_BONUS, CLARITY_QUANTITY_BONUS, CLARITY_DEADLINE_BONUS, CLARITY_PLAN_BONUS,
    EXECUTION_BASE, EXECUTION_POSITIVE_BONUS, EXECUTION_NEGATIVE_PENALTY, EXECUTION_OBSTACLE_PENALTY,
    EXECUTION_CADENCE_BONUS,
    PLANNING_BASE, PLANNING_PLAN_BONUS, PLANNING_DEADLINE_BONUS, PLANNING_QUANTITY_BONUS,
    RESOURCES_BASE, RESOURCES_RESOURCE_BONUS, RESOURCES_ENVIRONMENT_BONUS,
    FEEDBACK_BASE, FEEDBACK_FEEDBACK_BONUS, FEEDBACK_WEEKLY_BONUS,
};
use crate::core::extractor::FeatureExtractor;
use crate::core::keywords::KeywordTables;
use crate::core::normalizer::normalize;
use crate::types::{DimensionScores, ScoreCard};

#[derive(Debug, Clone, Default)]
pub struct DimensionScorer {
    extractor: FeatureExtractor,
}

impl DimensionScorer {
    pub fn new(tables: Arc<KeywordTables>) -> Self {
        Self {
            extractor: FeatureExtractor::new(tables),
        }
    }

    /// Scores only
    pub fn score(&self, text: &str) -> DimensionScores {
        self.score_card(text).scores
    }

    /// Scores plus the flags and quantities behind them
    pub fn score_card(&self, text: &str) -> ScoreCard {
        let text = normalize(text);
        let flags = self.extractor.extract_flags(&text);
        let quantities = self.extractor.extract_quantities(&text);

        let has_quantity = !quantities.is_empty();
        let has_cadence = quantities.iter().any(|q| q.unit.is_cadence());

        let clarity = CLARITY_BASE
            + bonus(flags.has_goal, CLARITY_GOAL_BONUS)
            + bonus(has_quantity, CLARITY_QUANTITY_BONUS)
            + bonus(flags.has_deadline, CLARITY_DEADLINE_BONUS)
            + bonus(flags.has_plan, CLARITY_PLAN_BONUS);

        // The cadence bonus overlaps clarity's quantity bonus; both apply.
        let execution = EXECUTION_BASE
            + bonus(flags.exec_pos, EXECUTION_POSITIVE_BONUS)
            - bonus(flags.exec_neg, EXECUTION_NEGATIVE_PENALTY)
            - bonus(flags.has_obstacle, EXECUTION_OBSTACLE_PENALTY)
            + bonus(has_cadence, EXECUTION_CADENCE_BONUS);

        let planning = PLANNING_BASE
            + bonus(flags.has_plan, PLANNING_PLAN_BONUS)
            + bonus(flags.has_deadline, PLANNING_DEADLINE_BONUS)
            + bonus(has_quantity, PLANNING_QUANTITY_BONUS);

        let resources = RESOURCES_BASE
            + bonus(flags.has_resource, RESOURCES_RESOURCE_BONUS)
            + bonus(self.extractor.has_environment(&text), RESOURCES_ENVIRONMENT_BONUS);

        let feedback = FEEDBACK_BASE
            + bonus(flags.has_feedback, FEEDBACK_FEEDBACK_BONUS)
            + bonus(self.extractor.has_weekly_cadence(&text), FEEDBACK_WEEKLY_BONUS);

        let scores = DimensionScores::from_raw(clarity, execution, planning, resources, feedback);
        tracing::debug!(
            clarity = scores.clarity,
            execution = scores.execution,
            planning = scores.planning,
            resources = scores.resources,
            feedback = scores.feedback,
            overall = scores.overall,
            quantities = quantities.len(),
            "scored text"
        );

        ScoreCard { scores, flags, quantities }
    }
}

fn bonus(condition: bool, amount: i32) -> i32 {
    if condition { amount } else { 0 }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input_is_baseline() {
        let s = DimensionScorer::default().score("");
        assert_eq!(
            (s.clarity, s.execution, s.planning, s.resources, s.feedback, s.overall),
            (20, 50, 40, 35, 30, 35)
        );
    }

    #[test]
    fn test_clarity_caps_at_100() {
        // goal + quantity + deadline + plan = 20+20+30+20+10 = 100
        let s = DimensionScorer::default().score("来月までに毎日30分の計画で合格したい");
        assert_eq!(s.clarity, 100);
    }

    #[test]
    fn test_execution_floor() {
        // 50 - 25 - 10 = 15
        let s = DimensionScorer::default().score("忙しい日はサボった");
        assert_eq!(s.execution, 15);
    }

    #[test]
    fn test_execution_positive_with_cadence() {
        // 50 + 20 + 5
        let s = DimensionScorer::default().score("週2回の筋トレを続けている");
        assert_eq!(s.execution, 75);
    }

    #[test]
    fn test_kilograms_do_not_count_as_cadence() {
        let s = DimensionScorer::default().score("5kg減量");
        assert_eq!(s.execution, 50);
        assert_eq!(s.clarity, 50);
        assert_eq!(s.planning, 50);
    }

    #[test]
    fn test_resources_and_feedback_bonuses() {
        let s = DimensionScorer::default().score("自宅のデスクで作業し、毎週記録を振り返る");
        assert_eq!(s.resources, 75);
        assert_eq!(s.feedback, 80);
    }

    #[test]
    fn test_overall_matches_weighted_sum() {
        let s = DimensionScorer::default().score("毎朝ジョギングを続けている。アプリで記録。");
        let expected = (s.clarity as f64 * 0.25
            + s.execution as f64 * 0.25
            + s.planning as f64 * 0.20
            + s.resources as f64 * 0.15
            + s.feedback as f64 * 0.15)
            .round() as u8;
        assert_eq!(s.overall, expected);
    }

    #[test]
    fn test_idempotent() {
        let scorer = DimensionScorer::default();
        let text = "週3回ヨガをしたいが疲れて続かない";
        assert_eq!(scorer.score(text), scorer.score(text));
    }

    #[test]
    fn test_whitespace_is_normalized() {
        let scorer = DimensionScorer::default();
        assert_eq!(scorer.score("20 分"), scorer.score("20\u{3000}\u{3000}分"));
    }
}
