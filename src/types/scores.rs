//! Dimension scores

use serde::{Deserialize, Serialize};
use crate::{
    WEIGHT_CLARITY, WEIGHT_EXECUTION, WEIGHT_PLANNING,
    WEIGHT_RESOURCES, WEIGHT_FEEDBACK, WEIGHT_PERCENT,
};
use crate::types::{FeatureFlags, Quantity};

/// The five scored facets of goal-readiness, in their stable order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Dimension {
    Clarity,
    Execution,
    Planning,
    Resources,
    Feedback,
}

impl Dimension {
    pub const ALL: [Dimension; 5] = [
        Dimension::Clarity,
        Dimension::Execution,
        Dimension::Planning,
        Dimension::Resources,
        Dimension::Feedback,
    ];

    /// Fixed scoring weight
    pub fn weight(&self) -> f64 {
        match self {
            Self::Clarity => WEIGHT_CLARITY,
            Self::Execution => WEIGHT_EXECUTION,
            Self::Planning => WEIGHT_PLANNING,
            Self::Resources => WEIGHT_RESOURCES,
            Self::Feedback => WEIGHT_FEEDBACK,
        }
    }

    /// Position in `ALL`
    pub fn index(&self) -> usize {
        *self as usize
    }

    /// Japanese display label
    pub fn label(&self) -> &'static str {
        match self {
            Self::Clarity => "目標の明確さ",
            Self::Execution => "実行・継続",
            Self::Planning => "計画・一貫性",
            Self::Resources => "リソース整備",
            Self::Feedback => "記録・振り返り",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Clarity => "clarity",
            Self::Execution => "execution",
            Self::Planning => "planning",
            Self::Resources => "resources",
            Self::Feedback => "feedback",
        }
    }
}

impl std::fmt::Display for Dimension {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Five dimension scores in [0,100] plus the weighted overall
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DimensionScores {
    pub clarity: u8,
    pub execution: u8,
    pub planning: u8,
    pub resources: u8,
    pub feedback: u8,
    pub overall: u8,
}

impl DimensionScores {
    /// Build from raw (possibly out-of-range) dimension values.
    /// Each is clamped to [0,100]; overall is derived.
    pub fn from_raw(clarity: i32, execution: i32, planning: i32, resources: i32, feedback: i32) -> Self {
        let mut scores = Self {
            clarity: clamp_score(clarity),
            execution: clamp_score(execution),
            planning: clamp_score(planning),
            resources: clamp_score(resources),
            feedback: clamp_score(feedback),
            overall: 0,
        };
        scores.overall = scores.weighted_overall();
        scores
    }

    /// Score of one dimension
    pub fn get(&self, dim: Dimension) -> u8 {
        match dim {
            Dimension::Clarity => self.clarity,
            Dimension::Execution => self.execution,
            Dimension::Planning => self.planning,
            Dimension::Resources => self.resources,
            Dimension::Feedback => self.feedback,
        }
    }

    /// round(Σ weight_i × score_i), computed in integer percent so .5 cases
    /// round up exactly
    pub fn weighted_overall(&self) -> u8 {
        let sum: i64 = Dimension::ALL
            .iter()
            .map(|d| WEIGHT_PERCENT[d.index()] * self.get(*d) as i64)
            .sum();
        clamp_score(((sum + 50) / 100) as i32)
    }

    /// Dimensions sorted ascending by score; ties keep `Dimension::ALL` order
    pub fn ranked_ascending(&self) -> Vec<Dimension> {
        let mut dims = Dimension::ALL.to_vec();
        dims.sort_by_key(|d| self.get(*d));
        dims
    }
}

/// Scores together with the features they were derived from
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreCard {
    pub scores: DimensionScores,
    pub flags: FeatureFlags,
    pub quantities: Vec<Quantity>,
}

/// Clamp to the [0,100] score range
pub fn clamp_score(value: i32) -> u8 {
    value.clamp(0, 100) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_weights_sum_to_one() {
        let sum: f64 = Dimension::ALL.iter().map(|d| d.weight()).sum();
        assert!((sum - 1.0).abs() < 1e-12);
        assert_eq!(WEIGHT_PERCENT.iter().sum::<i64>(), 100);
    }

    #[test]
    fn test_from_raw_clamps() {
        let s = DimensionScores::from_raw(130, -20, 40, 35, 30);
        assert_eq!(s.clarity, 100);
        assert_eq!(s.execution, 0);
    }

    #[test]
    fn test_half_rounds_up() {
        // 80*.25 + 55*.25 + 75*.2 + 35*.15 + 30*.15 = 58.5
        let s = DimensionScores::from_raw(80, 55, 75, 35, 30);
        assert_eq!(s.overall, 59);
    }

    #[test]
    fn test_ranking_is_stable() {
        let s = DimensionScores::from_raw(50, 30, 50, 30, 90);
        assert_eq!(
            s.ranked_ascending(),
            vec![
                Dimension::Execution,
                Dimension::Resources,
                Dimension::Clarity,
                Dimension::Planning,
                Dimension::Feedback,
            ]
        );
    }
}
