//! Analyzer: the full pipeline from raw text to `AnalysisResult`
//!
//! Two stages. The local stage always runs and always yields a complete
//! result. The remote stage is an `Option`: a validated full evaluation
//! replaces the local scores, an assist suggestion is appended to the
//! actions, and `None` leaves the local result untouched.

use std::sync::Arc;

use chrono::Utc;
use crate::core::classifier::CategoryClassifier;
use crate::core::delay::{allocate, compute_delays};
use crate::core::keywords::KeywordTables;
use crate::core::normalizer::normalize;
use crate::core::recommend::{Chooser, RecommendationGenerator};
use crate::core::remote::{clean_assist_suggestion, RemoteEvaluator};
use crate::core::scorer::DimensionScorer;
use crate::types::{
    AnalysisResult, Category, DimensionScores, FeatureFlags, Quantity,
    Recommendations, RemoteEvaluation, RemoteMode, ScoreSource,
};

/// Separator and heading placed before an assist suggestion
const ASSIST_SEPARATOR: &str = "—";
const ASSIST_HEADING: &str = "APIからの追加提案:";

#[derive(Debug, Clone, Default)]
pub struct Analyzer {
    classifier: CategoryClassifier,
    scorer: DimensionScorer,
    generator: RecommendationGenerator,
}

impl Analyzer {
    /// Build every component over the same keyword tables
    pub fn new(tables: Arc<KeywordTables>) -> Self {
        Self {
            classifier: CategoryClassifier::new(tables.clone()),
            scorer: DimensionScorer::new(tables),
            generator: RecommendationGenerator::new(),
        }
    }

    pub fn classifier(&self) -> &CategoryClassifier {
        &self.classifier
    }

    pub fn scorer(&self) -> &DimensionScorer {
        &self.scorer
    }

    pub fn generator(&self) -> &RecommendationGenerator {
        &self.generator
    }

    /// Local analysis only
    pub fn analyze(
        &self,
        text: &str,
        category_override: Option<&str>,
        chooser: &mut dyn Chooser,
    ) -> AnalysisResult {
        self.analyze_staged(text, category_override, None, None, chooser)
    }

    /// Local analysis merged with already-obtained remote output
    ///
    /// A remote evaluation wins over the local scores (and the assist
    /// suggestion is then ignored). Remote text parts that are empty are
    /// regenerated locally from the remote scores.
    pub fn analyze_staged(
        &self,
        text: &str,
        category_override: Option<&str>,
        remote: Option<RemoteEvaluation>,
        assist: Option<String>,
        chooser: &mut dyn Chooser,
    ) -> AnalysisResult {
        let text = normalize(text);
        let category = self.classifier.classify(&text, category_override);
        tracing::debug!(%category, chars = text.chars().count(), "classified");

        if let Some(remote) = remote {
            return self.from_remote(category, remote, chooser);
        }

        let card = self.scorer.score_card(&text);
        let mut rec = self.generator.generate(&category, &card.scores, &card.quantities, chooser);

        let assisted = match assist.as_deref().and_then(clean_assist_suggestion) {
            Some(suggestion) => {
                rec.actions.push(ASSIST_SEPARATOR.to_string());
                rec.actions.push(ASSIST_HEADING.to_string());
                rec.actions.push(suggestion);
                true
            }
            None => false,
        };

        build_result(
            category,
            card.scores,
            card.quantities,
            Some(card.flags),
            ScoreSource::Local,
            rec,
            assisted,
        )
    }

    /// Run the remote collaborator in the given mode, falling back to local
    pub fn analyze_with(
        &self,
        text: &str,
        category_override: Option<&str>,
        remote: &dyn RemoteEvaluator,
        mode: RemoteMode,
        chooser: &mut dyn Chooser,
    ) -> AnalysisResult {
        let normalized = normalize(text);
        let category = self.classifier.classify(&normalized, category_override);

        match mode {
            RemoteMode::Full => {
                let evaluation = remote.evaluate_full(&normalized, &category);
                if evaluation.is_none() {
                    tracing::info!("remote full evaluation unavailable, using local result");
                }
                self.analyze_staged(&normalized, Some(category.as_str()), evaluation, None, chooser)
            }
            RemoteMode::Assist => {
                let scores = self.scorer.score(&normalized);
                let suggestion = remote.assist_suggestion(&normalized, &category, &scores);
                self.analyze_staged(&normalized, Some(category.as_str()), None, suggestion, chooser)
            }
        }
    }

    /// Rebuild a full result from stored scores (recommendations regenerated)
    pub fn rebuild(
        &self,
        category: Category,
        scores: DimensionScores,
        quantities: Vec<Quantity>,
        chooser: &mut dyn Chooser,
    ) -> AnalysisResult {
        let rec = self.generator.generate(&category, &scores, &quantities, chooser);
        build_result(category, scores, quantities, None, ScoreSource::Local, rec, false)
    }

    fn from_remote(
        &self,
        category: Category,
        remote: RemoteEvaluation,
        chooser: &mut dyn Chooser,
    ) -> AnalysisResult {
        let scores = remote.scores;
        let ideal = if remote.ideal.is_empty() {
            self.generator.ideal(&category, &[])
        } else {
            remote.ideal
        };
        let gaps = if remote.gaps.is_empty() {
            self.generator.gaps(&scores)
        } else {
            remote.gaps
        };
        let actions = if remote.actions.is_empty() {
            self.generator.actions(&category, &scores, &[], chooser)
        } else {
            remote.actions
        };

        build_result(
            category,
            scores,
            Vec::new(),
            None,
            ScoreSource::Remote,
            Recommendations { ideal, gaps, actions },
            false,
        )
    }
}

fn build_result(
    category: Category,
    scores: DimensionScores,
    quantities: Vec<Quantity>,
    flags: Option<FeatureFlags>,
    source: ScoreSource,
    rec: Recommendations,
    assisted: bool,
) -> AnalysisResult {
    let delays = compute_delays(&scores);
    let allocation = allocate(delays.overall, &scores);

    AnalysisResult {
        timestamp: Utc::now(),
        category,
        scores,
        delays,
        allocation,
        ideal: rec.ideal,
        gaps: rec.gaps,
        actions: rec.actions,
        source,
        flags,
        quantities,
        assisted,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::recommend::FixedChooser;

    #[test]
    fn test_empty_input_flows_to_baseline() {
        let result = Analyzer::default().analyze("", None, &mut FixedChooser(0));
        assert_eq!(result.category, Category::Other);
        assert_eq!(result.scores.overall, 35);
        assert_eq!(result.delays.overall, 78);
        assert_eq!(result.allocation.total(), 78);
        assert_eq!(result.source, ScoreSource::Local);
    }

    #[test]
    fn test_remote_scores_replace_local() {
        let remote = RemoteEvaluation {
            scores: DimensionScores {
                clarity: 90,
                execution: 90,
                planning: 90,
                resources: 90,
                feedback: 90,
                overall: 95,
            },
            ideal: "remote ideal".to_string(),
            gaps: Vec::new(),
            actions: vec!["remote action".to_string()],
        };
        let result = Analyzer::default().analyze_staged(
            "毎日運動",
            None,
            Some(remote),
            Some("ignored".to_string()),
            &mut FixedChooser(0),
        );
        assert_eq!(result.source, ScoreSource::Remote);
        assert_eq!(result.scores.overall, 95);
        assert_eq!(result.delays.overall, 6);
        assert_eq!(result.ideal, "remote ideal");
        assert_eq!(result.gaps.len(), 3);
        assert_eq!(result.actions, vec!["remote action".to_string()]);
        assert!(result.flags.is_none());
        assert!(!result.assisted);
    }

    #[test]
    fn test_assist_appends_three_lines() {
        let result = Analyzer::default().analyze_staged(
            "週3回ヨガ",
            None,
            None,
            Some("朝に\nやる".to_string()),
            &mut FixedChooser(0),
        );
        assert!(result.assisted);
        let n = result.actions.len();
        assert_eq!(n, 8);
        assert_eq!(result.actions[n - 3], "—");
        assert_eq!(result.actions[n - 2], "APIからの追加提案:");
        assert_eq!(result.actions[n - 1], "朝に やる");
    }
}
