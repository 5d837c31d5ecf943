pub mod builder;

use crate::{
    config::CleanupConfig,
    manager::CleanupMode,
    traits::OutlineStage,
    types::Outline,
};

/// An ordered chain of outline stages
pub struct Pipeline {
    stages: Vec<Box<dyn OutlineStage>>,
}

impl Pipeline {
    /// Create a new pipeline builder
    pub fn builder() -> builder::PipelineBuilder {
        builder::PipelineBuilder::new()
    }

    /// Create a new pipeline with the given stages
    pub fn new(stages: Vec<Box<dyn OutlineStage>>) -> Self {
        Self { stages }
    }

    /// Run every stage in sequence. The input outline is never modified.
    pub fn run(&self, outline: &Outline) -> Outline {
        let mut points = outline.points().to_vec();

        for stage in &self.stages {
            let before = points.len();
            points = stage.apply(&points);
            tracing::debug!(stage = stage.name(), before, after = points.len(), "applied stage");
        }

        Outline::new(points)
    }

    /// Names of the stages, in run order
    pub fn stage_names(&self) -> Vec<&'static str> {
        self.stages.iter().map(|stage| stage.name()).collect()
    }

    /// Get information about the pipeline configuration
    pub fn info(&self) -> String {
        format!("Pipeline: {} stages [{}]", self.stages.len(), self.stage_names().join(" -> "))
    }
}

/// Dedup, collinearity filter and Douglas-Peucker
pub fn normal_cleanup(raw: &Outline, config: &CleanupConfig) -> Outline {
    builder::PipelineBuilder::build_normal(config).run(raw)
}

/// Normal cleanup, ray contour extraction, then normal cleanup again
pub fn aggressive_cleanup(raw: &Outline, config: &CleanupConfig) -> Outline {
    builder::PipelineBuilder::build_aggressive(config).run(raw)
}

/// Clean up a raw traced outline with the default tolerances.
///
/// Scaling is left to the caller (see [`crate::auto_scale_shape`]) so the
/// pre-scale shape stays inspectable.
pub fn cleanup_shape(raw: &Outline, mode: CleanupMode) -> Outline {
    cleanup_shape_with(raw, mode, &CleanupConfig::default())
}

/// Clean up a raw traced outline with explicit tolerances
pub fn cleanup_shape_with(raw: &Outline, mode: CleanupMode, config: &CleanupConfig) -> Outline {
    tracing::debug!(%mode, points = raw.len(), "cleaning outline");

    match mode {
        CleanupMode::None => raw.clone(),
        CleanupMode::Normal => normal_cleanup(raw, config),
        CleanupMode::Aggressive => aggressive_cleanup(raw, config),
    }
}
