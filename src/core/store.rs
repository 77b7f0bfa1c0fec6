//! Last-result store: one JSON file holding the most recent analysis
//!
//! Only the input, category, scores and quantities are kept; text is
//! regenerated on load.

use std::path::Path;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use crate::error::RisouError;
use crate::types::{AnalysisResult, Category, DimensionScores, Quantity};

/// Saved form of an analysis
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LastResult {
    pub input: String,
    pub category: Category,
    pub scores: DimensionScores,
    pub quantities: Vec<Quantity>,
    pub saved_at: DateTime<Utc>,
    /// Hex SHA-256 of `input`
    pub input_digest: String,
}

impl LastResult {
    pub fn from_result(input: &str, result: &AnalysisResult) -> Self {
        Self {
            input: input.to_string(),
            category: result.category.clone(),
            scores: result.scores,
            quantities: result.quantities.clone(),
            saved_at: Utc::now(),
            input_digest: input_digest(input),
        }
    }

    /// Stored digest still matches the stored input
    pub fn is_intact(&self) -> bool {
        self.input_digest == input_digest(&self.input)
    }
}

/// Write `record` to `path`, creating parent directories
pub fn save_last(record: &LastResult, path: &Path) -> Result<(), RisouError> {
    let json = serde_json::to_string_pretty(record)?;
    if let Some(dir) = path.parent() {
        if !dir.as_os_str().is_empty() {
            std::fs::create_dir_all(dir)?;
        }
    }
    std::fs::write(path, json)?;
    tracing::debug!(path = %path.display(), "saved last result");
    Ok(())
}

/// Read the record at `path`
pub fn load_last(path: &Path) -> Result<LastResult, RisouError> {
    if !path.exists() {
        return Err(RisouError::NoSavedResult(path.to_path_buf()));
    }
    let json = std::fs::read_to_string(path)?;
    let record: LastResult = serde_json::from_str(&json)?;
    if !record.is_intact() {
        tracing::warn!(path = %path.display(), "saved input does not match its digest");
    }
    Ok(record)
}

/// Hex SHA-256 of the input text
pub fn input_digest(input: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(input.as_bytes());
    hasher.finalize().iter().map(|b| format!("{:02x}", b)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::analyzer::Analyzer;
    use crate::core::recommend::FixedChooser;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("last.json");

        let input = "週3回30分ジョギングしたい";
        let result = Analyzer::default().analyze(input, None, &mut FixedChooser(0));
        let record = LastResult::from_result(input, &result);
        save_last(&record, &path).unwrap();

        let loaded = load_last(&path).unwrap();
        assert_eq!(loaded, record);
        assert!(loaded.is_intact());
        assert_eq!(loaded.category, Category::Health);
    }

    #[test]
    fn test_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_last(&dir.path().join("none.json")).unwrap_err();
        assert!(matches!(err, RisouError::NoSavedResult(_)));
    }

    #[test]
    fn test_corrupt_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("last.json");
        std::fs::write(&path, "{").unwrap();
        assert_eq!(load_last(&path).unwrap_err().code(), "E302_SERIALIZE");
    }

    #[test]
    fn test_digest_is_stable_hex() {
        let d = input_digest("abc");
        assert_eq!(d, "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad");
    }
}
