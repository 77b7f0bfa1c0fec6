//! Core modules for Risou

pub mod normalizer;
pub mod keywords;
pub mod extractor;
pub mod classifier;
pub mod scorer;
pub mod delay;
pub mod recommend;
pub mod remote;
pub mod analyzer;
pub mod certificate;
pub mod store;
pub mod api;

pub use normalizer::normalize;
pub use keywords::{KeywordTables, CategoryKeywords, contains_any};
pub use extractor::FeatureExtractor;
pub use classifier::{CategoryClassifier, AUTO_CATEGORY};
pub use scorer::DimensionScorer;
pub use delay::{to_delay, compute_delays, allocate};
pub use recommend::{RecommendationGenerator, Chooser, RandomChooser, FixedChooser, working_numbers};
pub use remote::{RemoteEvaluator, NoRemote, parse_full_evaluation, clean_assist_suggestion};
pub use analyzer::Analyzer;
pub use certificate::delay_certificate;
pub use store::{LastResult, save_last, load_last, input_digest};
pub use api::{create_router, run_server};
