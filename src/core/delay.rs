//! Delay converter and allocator
//!
//! Score 100 → 0 minutes, score 0 → 120 minutes. The overall delay is
//! split across dimensions by weighted deficit with a single exact-sum fix.

use crate::DELAY_MAX;
use crate::types::{DelayAllocation, DelaySet, Dimension, DimensionScores};

/// round(clamp(100 − score, 0, 100) × 1.2), in [0,120]
pub fn to_delay(score: u8) -> u8 {
    let deficit = 100u32.saturating_sub(score as u32).min(100);
    // × 1.2 rounded half up, in integer tenths
    let delay = (deficit * 12 + 5) / 10;
    delay.min(DELAY_MAX as u32) as u8
}

/// Six independent conversions
pub fn compute_delays(scores: &DimensionScores) -> DelaySet {
    DelaySet {
        overall: to_delay(scores.overall),
        clarity: to_delay(scores.clarity),
        execution: to_delay(scores.execution),
        planning: to_delay(scores.planning),
        resources: to_delay(scores.resources),
        feedback: to_delay(scores.feedback),
    }
}

/// Split `overall_delay` across the five dimensions
///
/// Shares are proportional to max(0, 100 − score) × weight. After rounding,
/// the residual goes to one dimension: the largest fractional remainder when
/// short, the smallest when over.
pub fn allocate(overall_delay: u8, scores: &DimensionScores) -> DelayAllocation {
    let overall = overall_delay as f64;

    let weighted: Vec<f64> = Dimension::ALL
        .iter()
        .map(|d| (100.0 - scores.get(*d) as f64).max(0.0) * d.weight())
        .collect();
    let sum: f64 = weighted.iter().sum();
    let denominator = if sum == 0.0 { 1.0 } else { sum };

    let raw: Vec<f64> = weighted.iter().map(|w| overall * w / denominator).collect();

    let mut allocation = DelayAllocation::default();
    for (dim, share) in Dimension::ALL.iter().zip(&raw) {
        *allocation.get_mut(*dim) = share.round() as i32;
    }

    let diff = overall_delay as i32 - allocation.total();
    if diff != 0 {
        let target = if diff > 0 {
            largest_remainder(&raw)
        } else {
            smallest_remainder(&raw)
        };
        *allocation.get_mut(Dimension::ALL[target]) += diff;
        tracing::trace!(diff, dimension = %Dimension::ALL[target], "allocation residual applied");
    }

    allocation
}

fn fraction(x: f64) -> f64 {
    x - x.floor()
}

/// Index of the largest fractional part; ties go to the earliest
fn largest_remainder(raw: &[f64]) -> usize {
    let mut best = 0;
    for (i, x) in raw.iter().enumerate() {
        if fraction(*x) > fraction(raw[best]) {
            best = i;
        }
    }
    best
}

/// Index of the smallest fractional part; ties go to the latest
fn smallest_remainder(raw: &[f64]) -> usize {
    let mut best = 0;
    for (i, x) in raw.iter().enumerate() {
        if fraction(*x) <= fraction(raw[best]) {
            best = i;
        }
    }
    best
}
