use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::{OutlineError, Result};

pub const DUPLICATE_TOLERANCE: f64 = 1e-4;
pub const COLLINEAR_TOLERANCE: f64 = 1e-3;
pub const SIMPLIFY_TOLERANCE: f64 = 1e-3;
pub const RAY_COUNT: usize = 360;
pub const RAY_REACH: f64 = 1.5;
/// Fewest rays that can outline an area
pub const MIN_RAY_COUNT: usize = 3;

/// How the seam between the last and first point is treated.
///
/// The collinearity filter and Douglas-Peucker both walk the loop as an open
/// path, so a trace that starts mid-edge keeps a redundant vertex at the seam.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum SeamPolicy {
    /// Leave the seam where the trace put it
    #[default]
    Open,
    /// Drop a repeated closing point and start the loop at a corner
    RotateToCorner,
}

/// Tolerances and knobs for the cleanup pipeline
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct CleanupConfig {
    /// Points closer than this to the last kept point are dropped
    pub duplicate_tolerance: f64,
    /// Cross products at or below this magnitude count as collinear
    pub collinear_tolerance: f64,
    /// Douglas-Peucker distance tolerance
    pub simplify_tolerance: f64,
    /// Number of rays cast by the contour extractor
    #[schemars(range(min = 3))]
    pub ray_count: usize,
    /// Ray start distance as a multiple of the outline's max radius
    pub ray_reach: f64,
    /// Seam handling for the closed loop
    pub seam: SeamPolicy,
}

impl Default for CleanupConfig {
    fn default() -> Self {
        Self {
            duplicate_tolerance: DUPLICATE_TOLERANCE,
            collinear_tolerance: COLLINEAR_TOLERANCE,
            simplify_tolerance: SIMPLIFY_TOLERANCE,
            ray_count: RAY_COUNT,
            ray_reach: RAY_REACH,
            seam: SeamPolicy::Open,
        }
    }
}

impl CleanupConfig {
    pub fn with_seam(mut self, seam: SeamPolicy) -> Self {
        self.seam = seam;
        self
    }

    /// Check the knobs before they reach the pipeline.
    ///
    /// Tolerances are absolute distances in input units, so they must be
    /// finite and non-negative. The extractor needs at least three rays and a
    /// positive reach.
    pub fn validate(&self) -> Result<()> {
        let tolerances = [
            ("duplicate_tolerance", self.duplicate_tolerance),
            ("collinear_tolerance", self.collinear_tolerance),
            ("simplify_tolerance", self.simplify_tolerance),
        ];
        for (name, value) in tolerances {
            if !value.is_finite() || value < 0.0 {
                return Err(OutlineError::InvalidConfig(format!(
                    "{name} must be finite and non-negative, got {value}"
                )));
            }
        }

        if self.ray_count < MIN_RAY_COUNT {
            return Err(OutlineError::InvalidConfig(format!(
                "ray_count must be at least {MIN_RAY_COUNT}, got {}",
                self.ray_count
            )));
        }

        if !self.ray_reach.is_finite() || self.ray_reach <= 0.0 {
            return Err(OutlineError::InvalidConfig(format!(
                "ray_reach must be finite and positive, got {}",
                self.ray_reach
            )));
        }

        Ok(())
    }
}
