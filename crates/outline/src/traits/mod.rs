use crate::types::Point;

/// A single step of the outline cleanup pipeline.
///
/// Stages are pure: they read a point sequence and return a new one, never
/// reordering points, only removing or replacing them.
pub trait OutlineStage: Send + Sync {
    /// Run the stage over an ordered point sequence
    fn apply(&self, points: &[Point]) -> Vec<Point>;

    /// Short name used in logs
    fn name(&self) -> &'static str;
}
