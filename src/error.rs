//! Error type for the outer surfaces (CLI, HTTP, storage, configuration)
//!
//! The scoring core itself never fails.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum RisouError {
    #[error("input is empty, describe your current state first")]
    EmptyInput,

    #[error("failed to read keyword tables from {path}")]
    KeywordRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("keyword tables in {path} are malformed")]
    KeywordParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("storage error: {0}")]
    Storage(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("no saved result at {0}")]
    NoSavedResult(PathBuf),
}

impl RisouError {
    /// Stable code string (for logging and API bodies)
    pub fn code(&self) -> &'static str {
        match self {
            Self::EmptyInput => "E101_EMPTY_INPUT",
            Self::KeywordRead { .. } => "E201_KEYWORD_READ",
            Self::KeywordParse { .. } => "E202_KEYWORD_PARSE",
            Self::Storage(_) => "E301_STORAGE",
            Self::Serialize(_) => "E302_SERIALIZE",
            Self::NoSavedResult(_) => "E303_NO_SAVED_RESULT",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes_are_distinct() {
        let errors = [
            RisouError::EmptyInput,
            RisouError::Storage(std::io::Error::other("disk")),
            RisouError::NoSavedResult(PathBuf::from("last.json")),
        ];
        let codes: Vec<_> = errors.iter().map(|e| e.code()).collect();
        assert_eq!(codes, ["E101_EMPTY_INPUT", "E301_STORAGE", "E303_NO_SAVED_RESULT"]);
    }

    #[test]
    fn test_display_mentions_path() {
        let err = RisouError::NoSavedResult(PathBuf::from("state/last.json"));
        assert!(err.to_string().contains("state/last.json"));
    }
}
