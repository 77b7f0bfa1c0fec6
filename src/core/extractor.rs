//! Feature extractor: quantities and keyword flags

use std::sync::Arc;

use lazy_static::lazy_static;
use regex::Regex;
use crate::core::keywords::{contains_any, KeywordTables};
use crate::types::{FeatureFlags, Quantity, Unit};

lazy_static! {
    // <digits>[.<digits>] [spaces] <unit>; ASCII digits only
    static ref RE_QUANTITY: Regex = Regex::new(
        r"([0-9]+\.?[0-9]*)\s*(回|分|時間|日|週|月|年|kg|キロ|点|万円|円)"
    ).unwrap();
}

/// Extracts quantities and flags from normalized text
#[derive(Debug, Clone, Default)]
pub struct FeatureExtractor {
    tables: Arc<KeywordTables>,
}

impl FeatureExtractor {
    pub fn new(tables: Arc<KeywordTables>) -> Self {
        Self { tables }
    }

    /// Every `<number><unit>` match, left to right
    pub fn extract_quantities(&self, text: &str) -> Vec<Quantity> {
        RE_QUANTITY
            .captures_iter(text)
            .filter_map(|caps| {
                let value = parse_number(caps.get(1)?.as_str())?;
                let unit = Unit::from_token(caps.get(2)?.as_str())?;
                Some(Quantity::new(value, unit))
            })
            .collect()
    }

    /// One flag per keyword category, true on any substring hit
    pub fn extract_flags(&self, text: &str) -> FeatureFlags {
        let t = &self.tables;
        FeatureFlags {
            has_goal: contains_any(text, &t.goal),
            has_obstacle: contains_any(text, &t.obstacle),
            has_plan: contains_any(text, &t.plan),
            has_resource: contains_any(text, &t.resource),
            has_feedback: contains_any(text, &t.feedback),
            exec_pos: contains_any(text, &t.exec_pos),
            exec_neg: contains_any(text, &t.exec_neg),
            has_deadline: contains_any(text, &t.deadline),
        }
    }

    /// Place/time-of-day vocabulary present
    pub fn has_environment(&self, text: &str) -> bool {
        contains_any(text, &self.tables.environment)
    }

    /// Weekly cadence vocabulary present
    pub fn has_weekly_cadence(&self, text: &str) -> bool {
        contains_any(text, &self.tables.weekly)
    }
}

/// "12", "1.5" and "3." all parse
fn parse_number(raw: &str) -> Option<f64> {
    raw.trim_end_matches('.').parse().ok()
}
