//! Core types for Risou

mod category;
mod quantity;
mod flags;
mod scores;
mod delay;
mod recommendation;
mod remote;
mod result;

pub use category::Category;
pub use quantity::{Quantity, Unit};
pub use flags::FeatureFlags;
pub use scores::{Dimension, DimensionScores, ScoreCard, clamp_score};
pub use delay::{DelaySet, DelayAllocation, DelayLevel};
pub use recommendation::{Recommendations, WorkingNumbers};
pub use remote::{RemoteEvaluation, RemoteMode};
pub use result::{AnalysisResult, ScoreSource};
