//! Plot configuration.
//!
//! Configuration is plain data with serde support so hosts can load it from
//! JSON. Every field has a default.

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, ViewportError};
use crate::sampler::SamplerConfig;
use crate::view::Viewport;

/// Configuration for a [`Plot`](crate::plot::Plot).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlotConfig {
    /// Adaptive sampling constants.
    pub sampler: SamplerConfig,
    /// Initial viewport and target of [`Plot::home`](crate::plot::Plot::home).
    pub home: Viewport,
    /// Scale factor of one scroll step.
    pub zoom_step: f64,
}

impl Default for PlotConfig {
    fn default() -> Self {
        Self {
            sampler: SamplerConfig::default(),
            home: Viewport::default(),
            zoom_step: 1.05,
        }
    }
}

impl PlotConfig {
    /// Parse and validate a JSON configuration document.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Check the settings for internal consistency.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let sampler = &self.sampler;
        if sampler.min_points > sampler.max_points {
            return Err(ConfigError::PointBounds {
                min: sampler.min_points,
                max: sampler.max_points,
            });
        }
        for (field, value) in [
            ("zoom_step", self.zoom_step),
            ("sampler.steepness", sampler.steepness),
        ] {
            if !(value.is_finite() && value > 0.0) {
                return Err(ConfigError::NotPositive { field, value });
            }
        }
        if !sampler.base_range.is_finite() {
            return Err(ConfigError::NotPositive {
                field: "sampler.base_range",
                value: sampler.base_range,
            });
        }
        if !self.home.is_valid() {
            return Err(ViewportError::from(self.home).into());
        }
        Ok(())
    }
}
