use crate::{
    config::SIMPLIFY_TOLERANCE,
    geometry::point_to_segment_distance,
    traits::OutlineStage,
    types::Point,
};

/// Douglas-Peucker simplification of an open polyline.
///
/// The literal first and last points are always preserved. Among interior
/// points at the same maximum distance the earliest one splits the span.
pub fn douglas_peucker(points: &[Point], tolerance: f64) -> Vec<Point> {
    if points.len() <= 2 {
        return points.to_vec();
    }

    let first = points[0];
    let last = points[points.len() - 1];

    let mut max_dist = 0.0;
    let mut split = 0;
    for (i, &p) in points.iter().enumerate().take(points.len() - 1).skip(1) {
        let d = point_to_segment_distance(p, first, last);
        if d > max_dist {
            max_dist = d;
            split = i;
        }
    }

    if max_dist > tolerance {
        let mut left = douglas_peucker(&points[..=split], tolerance);
        let right = douglas_peucker(&points[split..], tolerance);
        // Both halves share the split point
        left.pop();
        left.extend(right);
        left
    } else {
        vec![first, last]
    }
}

/// Douglas-Peucker simplifier
#[derive(Debug, Clone)]
pub struct DouglasPeuckerSimplifier {
    pub tolerance: f64,
}

impl Default for DouglasPeuckerSimplifier {
    fn default() -> Self {
        Self { tolerance: SIMPLIFY_TOLERANCE }
    }
}

impl OutlineStage for DouglasPeuckerSimplifier {
    fn apply(&self, points: &[Point]) -> Vec<Point> {
        douglas_peucker(points, self.tolerance)
    }

    fn name(&self) -> &'static str {
        "douglas_peucker"
    }
}
