//! Keyword tables: the fixed vocabulary behind flags, categories and bonuses
//!
//! Tables are plain data, built once and never mutated. The built-in
//! vocabulary is Japanese; a JSON file may replace any subset of it.

use std::path::Path;

use serde::{Deserialize, Serialize};
use crate::error::RisouError;
use crate::types::Category;

/// Keyword sets for the six classified categories
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CategoryKeywords {
    pub health: Vec<String>,
    pub study: Vec<String>,
    pub work: Vec<String>,
    pub finance: Vec<String>,
    pub relationship: Vec<String>,
    pub habit: Vec<String>,
}

impl CategoryKeywords {
    /// Keywords of a classified category (empty for Other/unrecognized)
    pub fn for_category(&self, category: &Category) -> &[String] {
        match category {
            Category::Health => &self.health,
            Category::Study => &self.study,
            Category::Work => &self.work,
            Category::Finance => &self.finance,
            Category::Relationship => &self.relationship,
            Category::Habit => &self.habit,
            _ => &[],
        }
    }
}

impl Default for CategoryKeywords {
    fn default() -> Self {
        Self {
            health: words(&["運動", "筋トレ", "体重", "睡眠", "食事", "早起き", "ジョギング", "ヨガ", "禁煙", "禁酒", "ストレッチ"]),
            study: words(&["勉強", "学習", "英語", "TOEIC", "資格", "試験", "読書", "単語", "受験"]),
            work: words(&["仕事", "キャリア", "転職", "プロジェクト", "生産性", "会議", "タスク", "締切"]),
            finance: words(&["貯金", "節約", "投資", "家計", "収入", "支出", "予算"]),
            relationship: words(&["家族", "友達", "恋人", "同僚", "人間関係", "コミュニケーション"]),
            habit: words(&["習慣", "毎日", "ルーティン", "継続", "三日坊主"]),
        }
    }
}

/// All keyword sets used by the extractor, classifier and scorer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct KeywordTables {
    pub goal: Vec<String>,
    pub obstacle: Vec<String>,
    pub plan: Vec<String>,
    pub resource: Vec<String>,
    pub feedback: Vec<String>,
    pub exec_pos: Vec<String>,
    pub exec_neg: Vec<String>,
    pub deadline: Vec<String>,
    /// Places and times of day (resources bonus)
    pub environment: Vec<String>,
    /// Weekly cadence (feedback bonus)
    pub weekly: Vec<String>,
    pub categories: CategoryKeywords,
}

impl Default for KeywordTables {
    fn default() -> Self {
        Self {
            goal: words(&["目標", "したい", "なりたい", "達成", "上げたい", "減らしたい", "増やしたい", "合格", "伸ばしたい"]),
            obstacle: words(&["疲れ", "疲れて", "時間がない", "続かない", "難しい", "できない", "挫折", "忙しい", "眠い", "誘惑"]),
            plan: words(&["計画", "スケジュール", "毎日", "毎朝", "朝", "夜", "週", "曜日", "ルーティン", "習慣"]),
            resource: words(&["アプリ", "タイマー", "ツール", "本", "環境", "場所", "デスク", "準備", "通知"]),
            feedback: words(&["記録", "ログ", "可視化", "グラフ", "振り返り", "レビュー", "日報", "週間レビュー"]),
            exec_pos: words(&["続けている", "できている", "実践", "達成した", "継続中"]),
            exec_neg: words(&["続かない", "できていない", "サボった", "三日坊主", "未達"]),
            deadline: words(&["までに", "締切", "期限", "デッドライン", "今月", "来月", "半年", "6ヶ月", "1年"]),
            environment: words(&["朝", "夜", "通勤", "自宅", "カフェ", "図書館"]),
            weekly: words(&["毎週", "週次", "週末"]),
            categories: CategoryKeywords::default(),
        }
    }
}

impl KeywordTables {
    /// Load tables from a JSON file; missing keys keep the built-in sets
    pub fn from_json_file(path: &Path) -> Result<Self, RisouError> {
        let json = std::fs::read_to_string(path).map_err(|source| RisouError::KeywordRead {
            path: path.to_path_buf(),
            source,
        })?;
        let tables = serde_json::from_str(&json).map_err(|source| RisouError::KeywordParse {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::debug!(path = %path.display(), "loaded keyword tables");
        Ok(tables)
    }
}

/// Case-sensitive substring containment of any keyword
pub fn contains_any(text: &str, keywords: &[String]) -> bool {
    keywords.iter().any(|k| text.contains(k.as_str()))
}

fn words(list: &[&str]) -> Vec<String> {
    list.iter().map(|w| w.to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_contains_any_is_substring_match() {
        let keys = words(&["習慣"]);
        assert!(contains_any("朝の習慣化を目指す", &keys));
        assert!(!contains_any("", &keys));
    }

    #[test]
    fn test_contains_any_is_case_sensitive() {
        let keys = words(&["TOEIC"]);
        assert!(!contains_any("toeic 800", &keys));
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"goal": ["goal"], "categories": {{"study": ["study"]}}}}"#).unwrap();

        let tables = KeywordTables::from_json_file(file.path()).unwrap();
        assert_eq!(tables.goal, vec!["goal".to_string()]);
        assert_eq!(tables.categories.study, vec!["study".to_string()]);
        assert_eq!(tables.plan, KeywordTables::default().plan);
        assert_eq!(tables.categories.health, CategoryKeywords::default().health);
    }

    #[test]
    fn test_missing_file_is_read_error() {
        let err = KeywordTables::from_json_file(Path::new("/nonexistent/keywords.json")).unwrap_err();
        assert_eq!(err.code(), "E201_KEYWORD_READ");
    }

    #[test]
    fn test_malformed_file_is_parse_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "not json").unwrap();
        let err = KeywordTables::from_json_file(file.path()).unwrap_err();
        assert_eq!(err.code(), "E202_KEYWORD_PARSE");
    }
}
