//! Category classifier: first keyword hit in declaration order wins

use std::sync::Arc;

use crate::core::keywords::{contains_any, KeywordTables};
use crate::types::Category;

/// Sentinel override meaning "infer from text"
pub const AUTO_CATEGORY: &str = "auto";

#[derive(Debug, Clone, Default)]
pub struct CategoryClassifier {
    tables: Arc<KeywordTables>,
}

impl CategoryClassifier {
    pub fn new(tables: Arc<KeywordTables>) -> Self {
        Self { tables }
    }

    /// Explicit override (anything but "auto") is returned as-is, unvalidated.
    /// Otherwise health, study, work, finance, relationship, habit are checked
    /// in that order; no hit gives `Other`.
    pub fn classify(&self, text: &str, override_category: Option<&str>) -> Category {
        if let Some(selected) = override_category {
            if !selected.is_empty() && selected != AUTO_CATEGORY {
                return Category::from(selected);
            }
        }

        Category::CLASSIFIED
            .iter()
            .find(|c| contains_any(text, self.tables.categories.for_category(c)))
            .cloned()
            .unwrap_or(Category::Other)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_health_beats_study() {
        let c = CategoryClassifier::default();
        assert_eq!(c.classify("毎日運動して勉強する", None), Category::Health);
    }

    #[test]
    fn test_study_beats_habit() {
        let c = CategoryClassifier::default();
        assert_eq!(c.classify("毎日20分英語を勉強したい", None), Category::Study);
    }

    #[test]
    fn test_each_category() {
        let c = CategoryClassifier::default();
        assert_eq!(c.classify("転職の準備", None), Category::Work);
        assert_eq!(c.classify("貯金を増やしたい", None), Category::Finance);
        assert_eq!(c.classify("家族との時間", None), Category::Relationship);
        assert_eq!(c.classify("三日坊主をやめる", None), Category::Habit);
        assert_eq!(c.classify("ギターを弾く", None), Category::Other);
        assert_eq!(c.classify("", None), Category::Other);
    }

    #[test]
    fn test_override_is_verbatim() {
        let c = CategoryClassifier::default();
        assert_eq!(c.classify("毎日運動", Some("finance")), Category::Finance);
        assert_eq!(
            c.classify("毎日運動", Some("hobby")),
            Category::Unrecognized("hobby".to_string())
        );
    }

    #[test]
    fn test_auto_override_infers() {
        let c = CategoryClassifier::default();
        assert_eq!(c.classify("毎日運動", Some(AUTO_CATEGORY)), Category::Health);
    }
}
