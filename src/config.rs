//! Simulator configuration.
//!
//! Every field has a default, so a JSON document only needs the keys it
//! overrides:
//!
//! ```
//! use frontier_dist::config::SimulatorConfig;
//! let cfg = SimulatorConfig::from_json_str(r#"{ "histogram_bins": 40 }"#).unwrap();
//! assert_eq!(cfg.histogram_bins, 40);
//! assert_eq!(cfg.animated_interval_ms, 200);
//! ```

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::distributions::DEFAULT_DISPLAY_SIGMAS;
use crate::error::{Error, Result};
use crate::session::RunSpeed;

/// Tunables for sampling sessions and their plots.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulatorConfig {
    /// Tick period while running animated.
    pub animated_interval_ms: u64,
    /// Tick period while running fast.
    pub fast_interval_ms: u64,
    /// Equal-width bins for continuous histograms.
    pub histogram_bins: usize,
    /// Points per continuous curve.
    pub curve_points: usize,
    /// Minimum standard deviations above the mean covered by the display window.
    pub display_sigmas: f64,
}

impl Default for SimulatorConfig {
    fn default() -> Self {
        Self {
            animated_interval_ms: 200,
            fast_interval_ms: 10,
            histogram_bins: 30,
            curve_points: 200,
            display_sigmas: DEFAULT_DISPLAY_SIGMAS,
        }
    }
}

impl SimulatorConfig {
    /// Parses and validates a JSON document.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self =
            serde_json::from_str(json).map_err(|e| Error::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json_string(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(|e| Error::Config(e.to_string()))
    }

    /// Rejects zero intervals, bin counts and point counts, and
    /// non-positive sigma reach.
    pub fn validate(&self) -> Result<()> {
        if self.animated_interval_ms == 0 || self.fast_interval_ms == 0 {
            return Err(Error::Config("tick intervals must be positive".into()));
        }
        if self.histogram_bins == 0 {
            return Err(Error::Config("histogram_bins must be positive".into()));
        }
        if self.curve_points < 2 {
            return Err(Error::Config("curve_points must be at least 2".into()));
        }
        if !(self.display_sigmas.is_finite() && self.display_sigmas > 0.0) {
            return Err(Error::Config(format!(
                "display_sigmas must be positive and finite, got {}",
                self.display_sigmas
            )));
        }
        Ok(())
    }

    /// Tick period for a running speed.
    pub fn interval(&self, speed: RunSpeed) -> Duration {
        match speed {
            RunSpeed::Animated => Duration::from_millis(self.animated_interval_ms),
            RunSpeed::Fast => Duration::from_millis(self.fast_interval_ms),
        }
    }
}
