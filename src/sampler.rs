//! Adaptive sample-count selection and domain generation.
//!
//! The number of samples follows a logistic curve over the visible span:
//! narrow spans (zoomed in) approach `max_points`, wide spans approach
//! `min_points`, and `base_range` is the midpoint of the transition.

use serde::{Deserialize, Serialize};

/// Floor applied to the visible span before the sigmoid.
pub const MIN_SPAN: f64 = 1e-6;

/// Tuning constants for adaptive sampling.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SamplerConfig {
    /// Span at which the count sits halfway between the limits.
    pub base_range: f64,
    /// Sample count for very wide spans.
    pub min_points: usize,
    /// Sample count for very narrow spans.
    pub max_points: usize,
    /// Slope of the logistic transition.
    pub steepness: f64,
}

impl Default for SamplerConfig {
    fn default() -> Self {
        Self {
            base_range: 20.0,
            min_points: 5_000,
            max_points: 30_000,
            steepness: 0.1,
        }
    }
}

impl SamplerConfig {
    /// Number of samples to take across `[range_min, range_max]`.
    pub fn sample_count(&self, range_min: f64, range_max: f64) -> usize {
        sample_count(
            range_min,
            range_max,
            self.base_range,
            self.min_points,
            self.max_points,
            self.steepness,
        )
    }
}

/// Number of samples to take across `[range_min, range_max]`.
///
/// The result always lies in `[min_points, max_points]` when
/// `min_points <= max_points`.
pub fn sample_count(
    range_min: f64,
    range_max: f64,
    base_range: f64,
    min_points: usize,
    max_points: usize,
    steepness: f64,
) -> usize {
    let span = (range_max - range_min).abs().max(MIN_SPAN);
    let sigmoid = 1.0 / (1.0 + (steepness * (span - base_range)).exp());
    let extra = (max_points.saturating_sub(min_points) as f64 * sigmoid).round() as usize;
    min_points + extra
}

/// Evenly spaced values from `min` to `max` inclusive.
///
/// Values are interpolated as `min * (1 - t) + max * t`, which stays finite
/// for any finite bounds, even when `max - min` exceeds `f64::MAX`.
pub fn linspace(min: f64, max: f64, count: usize) -> Vec<f64> {
    match count {
        0 => Vec::new(),
        1 => vec![min],
        _ => {
            let last = (count - 1) as f64;
            let mut values: Vec<f64> = (0..count)
                .map(|i| {
                    let t = i as f64 / last;
                    min * (1.0 - t) + max * t
                })
                .collect();
            values[0] = min;
            values[count - 1] = max;
            values
        }
    }
}
