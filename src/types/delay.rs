//! Delay values derived from scores

use serde::{Deserialize, Serialize};
use crate::{DELAY_OK_MAX, DELAY_WARN_MAX};
use crate::types::Dimension;

/// Six independently converted delays in [0,120]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DelaySet {
    pub overall: u8,
    pub clarity: u8,
    pub execution: u8,
    pub planning: u8,
    pub resources: u8,
    pub feedback: u8,
}

impl DelaySet {
    pub fn get(&self, dim: Dimension) -> u8 {
        match dim {
            Dimension::Clarity => self.clarity,
            Dimension::Execution => self.execution,
            Dimension::Planning => self.planning,
            Dimension::Resources => self.resources,
            Dimension::Feedback => self.feedback,
        }
    }

    /// Severity of the overall delay
    pub fn level(&self) -> DelayLevel {
        DelayLevel::from_delay(self.overall)
    }
}

/// Overall delay split across the five dimensions
///
/// Entries sum exactly to the overall delay they were allocated from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DelayAllocation {
    pub clarity: i32,
    pub execution: i32,
    pub planning: i32,
    pub resources: i32,
    pub feedback: i32,
}

impl DelayAllocation {
    pub fn get(&self, dim: Dimension) -> i32 {
        match dim {
            Dimension::Clarity => self.clarity,
            Dimension::Execution => self.execution,
            Dimension::Planning => self.planning,
            Dimension::Resources => self.resources,
            Dimension::Feedback => self.feedback,
        }
    }

    pub fn get_mut(&mut self, dim: Dimension) -> &mut i32 {
        match dim {
            Dimension::Clarity => &mut self.clarity,
            Dimension::Execution => &mut self.execution,
            Dimension::Planning => &mut self.planning,
            Dimension::Resources => &mut self.resources,
            Dimension::Feedback => &mut self.feedback,
        }
    }

    pub fn total(&self) -> i32 {
        Dimension::ALL.iter().map(|d| self.get(*d)).sum()
    }
}

/// Delay severity shown on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DelayLevel {
    /// ≤ 10 minutes
    Ok,
    /// ≤ 30 minutes
    Warn,
    /// > 30 minutes
    Alert,
}

impl DelayLevel {
    pub fn from_delay(minutes: u8) -> Self {
        if minutes <= DELAY_OK_MAX {
            Self::Ok
        } else if minutes <= DELAY_WARN_MAX {
            Self::Warn
        } else {
            Self::Alert
        }
    }
}

impl std::fmt::Display for DelayLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            DelayLevel::Ok => "OK",
            DelayLevel::Warn => "WARN",
            DelayLevel::Alert => "ALERT",
        };
        write!(f, "{}", name)
    }
}
