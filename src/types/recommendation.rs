//! Generated recommendation text

use serde::{Deserialize, Serialize};
use crate::{DEFAULT_MINUTES, DEFAULT_FREQ_PER_WEEK, DEFAULT_POINTS, DEFAULT_AMOUNT_YEN};

/// Ideal-state narrative, gap list and action list
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recommendations {
    pub ideal: String,
    /// At most 3 entries
    pub gaps: Vec<String>,
    /// At most 5 entries
    pub actions: Vec<String>,
}

/// Numbers interpolated into the templates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkingNumbers {
    pub minutes: u32,
    pub freq_per_week: u32,
    pub points: u32,
    pub amount: u64,
}

impl Default for WorkingNumbers {
    fn default() -> Self {
        Self {
            minutes: DEFAULT_MINUTES,
            freq_per_week: DEFAULT_FREQ_PER_WEEK,
            points: DEFAULT_POINTS,
            amount: DEFAULT_AMOUNT_YEN,
        }
    }
}
