//! Risou: goal-readiness analyzer
//!
//! Pipeline: text → normalizer → extractor/classifier → scorer →
//! delay converter + allocator, and scores → recommendation generator.

pub mod core;
pub mod error;
pub mod types;

pub use error::RisouError;

// =============================================================================
// DIMENSION WEIGHTS - sum = 1.0
// =============================================================================

/// Weight of clarity in the overall score
pub const WEIGHT_CLARITY: f64 = 0.25;
pub const WEIGHT_EXECUTION: f64 = 0.25;
pub const WEIGHT_PLANNING: f64 = 0.20;
pub const WEIGHT_RESOURCES: f64 = 0.15;
pub const WEIGHT_FEEDBACK: f64 = 0.15;

/// Same weights in percent, used for exact integer rounding of `overall`
pub const WEIGHT_PERCENT: [i64; 5] = [25, 25, 20, 15, 15];

// =============================================================================
// DIMENSION BASES AND ADJUSTMENTS
// =============================================================================

pub const CLARITY_BASE: i32 = 20;
pub const CLARITY_GOAL_BONUS: i32 = 20;
pub const CLARITY_QUANTITY_BONUS: i32 = 30;
pub const CLARITY_DEADLINE_BONUS: i32 = 20;
pub const CLARITY_PLAN_BONUS: i32 = 10;

pub const EXECUTION_BASE: i32 = 50;
pub const EXECUTION_POSITIVE_BONUS: i32 = 20;
pub const EXECUTION_NEGATIVE_PENALTY: i32 = 25;
pub const EXECUTION_OBSTACLE_PENALTY: i32 = 10;
pub const EXECUTION_CADENCE_BONUS: i32 = 5;

pub const PLANNING_BASE: i32 = 40;
pub const PLANNING_PLAN_BONUS: i32 = 25;
pub const PLANNING_DEADLINE_BONUS: i32 = 10;
pub const PLANNING_QUANTITY_BONUS: i32 = 10;

pub const RESOURCES_BASE: i32 = 35;
pub const RESOURCES_RESOURCE_BONUS: i32 = 30;
pub const RESOURCES_ENVIRONMENT_BONUS: i32 = 10;

pub const FEEDBACK_BASE: i32 = 30;
pub const FEEDBACK_FEEDBACK_BONUS: i32 = 40;
pub const FEEDBACK_WEEKLY_BONUS: i32 = 10;

// =============================================================================
// DELAY
// =============================================================================

/// Delay at score 0 (score 100 → 0 minutes)
pub const DELAY_MAX: u8 = 120;

/// Overall delay at or below this is "ok"
pub const DELAY_OK_MAX: u8 = 10;

/// Overall delay at or below this is "warn", above is "alert"
pub const DELAY_WARN_MAX: u8 = 30;

// =============================================================================
// RECOMMENDATION DEFAULTS
// =============================================================================

pub const DEFAULT_MINUTES: u32 = 20;
pub const DEFAULT_FREQ_PER_WEEK: u32 = 3;
pub const DEFAULT_POINTS: u32 = 700;
pub const DEFAULT_AMOUNT_YEN: u64 = 20_000;

/// Remote assist suggestions are cut to this many characters
pub const ASSIST_MAX_CHARS: usize = 300;

// =============================================================================
// VERSION
// =============================================================================

pub const VERSION: &str = "1.0.0";
