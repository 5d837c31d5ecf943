pub mod preprocessing;
pub mod simplification;
pub mod extraction;
pub mod normalization;

pub use preprocessing::*;
pub use simplification::*;
pub use extraction::*;
pub use normalization::*;

use crate::{
    config::{CleanupConfig, SeamPolicy},
    types::Point,
};

/// Deduplicate, filter collinear points and simplify, in that order.
///
/// With [`SeamPolicy::RotateToCorner`] the loop is rotated onto a corner
/// right after deduplication.
pub fn normal_pass(points: &[Point], config: &CleanupConfig) -> Vec<Point> {
    let mut current = deduplicate(points, config.duplicate_tolerance);
    if config.seam == SeamPolicy::RotateToCorner {
        current = rotate_to_corner(&current, config.collinear_tolerance, config.duplicate_tolerance);
    }
    let current = remove_collinear(&current, config.collinear_tolerance);
    douglas_peucker(&current, config.simplify_tolerance)
}
