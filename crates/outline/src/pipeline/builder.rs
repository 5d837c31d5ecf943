use crate::{
    algorithms::{
        CollinearityFilter, Deduplicator, DouglasPeuckerSimplifier, RayContourExtractor, SeamRotation,
    },
    config::{CleanupConfig, SeamPolicy},
    pipeline::Pipeline,
    traits::OutlineStage,
};

/// Builder for creating cleanup pipelines with a fluent API
pub struct PipelineBuilder {
    stages: Vec<Box<dyn OutlineStage>>,
}

impl PipelineBuilder {
    /// Create a new, empty pipeline builder
    pub fn new() -> Self {
        Self { stages: Vec::new() }
    }

    /// Append a stage to the pipeline
    pub fn add_stage<S>(mut self, stage: S) -> Self
    where
        S: OutlineStage + 'static,
    {
        self.stages.push(Box::new(stage));
        self
    }

    /// Remove near-duplicate consecutive points
    pub fn with_deduplication(self, tolerance: f64) -> Self {
        self.add_stage(Deduplicator { tolerance })
    }

    /// Move the loop's seam onto a corner
    pub fn with_seam_rotation(self, collinear_tolerance: f64, duplicate_tolerance: f64) -> Self {
        self.add_stage(SeamRotation {
            collinear_tolerance,
            duplicate_tolerance,
        })
    }

    /// Remove interior points collinear with their neighbours
    pub fn with_collinearity_filter(self, tolerance: f64) -> Self {
        self.add_stage(CollinearityFilter { tolerance })
    }

    /// Add Douglas-Peucker simplification
    pub fn with_simplification(self, tolerance: f64) -> Self {
        self.add_stage(DouglasPeuckerSimplifier { tolerance })
    }

    /// Add ray-sampled outer contour extraction
    pub fn with_contour_extraction(self, config: &CleanupConfig) -> Self {
        self.add_stage(RayContourExtractor::new(config.clone()))
    }

    /// Dedup, optional seam rotation, collinearity filter, Douglas-Peucker
    pub fn with_normal_stages(self, config: &CleanupConfig) -> Self {
        let builder = self.with_deduplication(config.duplicate_tolerance);
        let builder = match config.seam {
            SeamPolicy::Open => builder,
            SeamPolicy::RotateToCorner => {
                builder.with_seam_rotation(config.collinear_tolerance, config.duplicate_tolerance)
            }
        };
        builder
            .with_collinearity_filter(config.collinear_tolerance)
            .with_simplification(config.simplify_tolerance)
    }

    pub fn build(self) -> Pipeline {
        Pipeline::new(self.stages)
    }

    /// Build the "normal" cleanup pipeline
    pub fn build_normal(config: &CleanupConfig) -> Pipeline {
        Self::new().with_normal_stages(config).build()
    }

    /// Build the "aggressive" cleanup pipeline
    pub fn build_aggressive(config: &CleanupConfig) -> Pipeline {
        Self::new()
            .with_normal_stages(config)
            .with_contour_extraction(config)
            .with_normal_stages(config)
            .build()
    }
}

impl Default for PipelineBuilder {
    fn default() -> Self {
        Self::new()
    }
}
