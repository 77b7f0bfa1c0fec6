//! Analysis result and its display formats

use chrono::{DateTime, Utc};
use colored::Colorize;
use serde::{Deserialize, Serialize};
use crate::types::{
    Category, DelayAllocation, DelayLevel, DelaySet, Dimension,
    DimensionScores, FeatureFlags, Quantity,
};

/// Where the scores of a result came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScoreSource {
    Local,
    Remote,
}

/// Complete output of one analysis request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub timestamp: DateTime<Utc>,
    pub category: Category,
    pub scores: DimensionScores,
    pub delays: DelaySet,
    pub allocation: DelayAllocation,
    pub ideal: String,
    pub gaps: Vec<String>,
    pub actions: Vec<String>,
    pub source: ScoreSource,
    /// Local features (absent when the remote model scored)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub flags: Option<FeatureFlags>,
    pub quantities: Vec<Quantity>,
    /// A remote assist suggestion was appended to `actions`
    pub assisted: bool,
}

impl AnalysisResult {
    pub fn level(&self) -> DelayLevel {
        self.delays.level()
    }

    /// "学習線: 学習の実行に 49 分の遅延が発生しています。"
    pub fn status_line(&self) -> String {
        format!(
            "{}: {}の実行に {} 分の遅延が発生しています。",
            self.category.line_label(),
            self.category.label(),
            self.delays.overall
        )
    }

    /// One line per dimension: allocated delay and score
    pub fn breakdown_lines(&self) -> Vec<String> {
        Dimension::ALL
            .iter()
            .map(|d| {
                format!(
                    "{}: 遅延 {}分（スコア {}）",
                    d.label(),
                    self.allocation.get(*d),
                    self.scores.get(*d)
                )
            })
            .collect()
    }

    /// Plain, parseable one-liner
    pub fn to_parseable_string(&self) -> String {
        format!(
            "category={} | delay={} | level={} | overall={} | source={:?}",
            self.category,
            self.delays.overall,
            self.level(),
            self.scores.overall,
            self.source
        )
    }

    /// Status line colored by level
    pub fn to_terminal_string(&self) -> String {
        let line = self.status_line();
        match self.level() {
            DelayLevel::Ok => line.green().to_string(),
            DelayLevel::Warn => line.yellow().to_string(),
            DelayLevel::Alert => line.red().bold().to_string(),
        }
    }

    /// Multi-line summary for verbose output
    pub fn debug_summary(&self) -> String {
        let mut out = format!(
            "カテゴリ: {}\nスコア({}): clarity={} execution={} planning={} resources={} feedback={} overall={}",
            self.category,
            match self.source {
                ScoreSource::Local => "ローカル",
                ScoreSource::Remote => "API",
            },
            self.scores.clarity,
            self.scores.execution,
            self.scores.planning,
            self.scores.resources,
            self.scores.feedback,
            self.scores.overall,
        );
        if let Some(flags) = &self.flags {
            out.push_str(&format!("\nフラグ: {:?}", flags));
        }
        if !self.quantities.is_empty() {
            out.push_str(&format!("\n数量: {:?}", self.quantities));
        }
        out.push_str(&format!("\nAPI補足: {}", self.assisted));
        out
    }
}
