//! Results handed back by the optional remote model

use serde::{Deserialize, Serialize};
use crate::types::DimensionScores;

/// How the remote model takes part in an analysis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RemoteMode {
    /// Local scores stay; a free-text suggestion is appended to the actions
    #[default]
    Assist,
    /// The remote evaluation replaces local scores and text
    Full,
}

/// A validated full evaluation from the remote model
///
/// Scores are already clamped to [0,100]; `overall` is taken as reported,
/// not recomputed from the dimensions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemoteEvaluation {
    pub scores: DimensionScores,
    /// May be empty; the local template fills in
    pub ideal: String,
    /// At most 5 entries
    pub gaps: Vec<String>,
    /// At most 6 entries
    pub actions: Vec<String>,
}
