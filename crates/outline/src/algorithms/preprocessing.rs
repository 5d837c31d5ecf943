use crate::{
    config::{COLLINEAR_TOLERANCE, DUPLICATE_TOLERANCE},
    geometry::{cross, distance},
    traits::OutlineStage,
    types::Point,
};

/// Drop points that sit within `tolerance` of the most recently kept point.
///
/// The first point is always kept.
pub fn deduplicate(points: &[Point], tolerance: f64) -> Vec<Point> {
    let Some(&first) = points.first() else {
        return Vec::new();
    };

    let mut kept = Vec::with_capacity(points.len());
    kept.push(first);
    let mut last = first;

    for &p in &points[1..] {
        if distance(p, last) > tolerance {
            kept.push(p);
            last = p;
        }
    }

    kept
}

/// Drop interior points lying on the line through their input neighbours.
///
/// The endpoints are always kept; the wrap-around edge is not examined.
pub fn remove_collinear(points: &[Point], tolerance: f64) -> Vec<Point> {
    if points.len() <= 2 {
        return points.to_vec();
    }

    let mut kept = Vec::with_capacity(points.len());
    kept.push(points[0]);

    for window in points.windows(3) {
        let [prev, curr, next] = [window[0], window[1], window[2]];
        if cross(prev, curr, next).abs() > tolerance {
            kept.push(curr);
        }
    }

    kept.push(points[points.len() - 1]);
    kept
}

/// Rotate a closed loop so it starts at a corner.
///
/// A trailing point within `duplicate_tolerance` of the first is treated as a
/// materialized closing point and dropped. The loop then starts at the first
/// vertex that is not collinear with its cyclic neighbours, and trailing
/// vertices lying on the wrap edge are dropped. Loops with fewer than three
/// points, or with no corner at all, are otherwise left alone.
pub fn rotate_to_corner(points: &[Point], collinear_tolerance: f64, duplicate_tolerance: f64) -> Vec<Point> {
    let mut loop_points = points.to_vec();
    if loop_points.len() < 3 {
        return loop_points;
    }

    if distance(loop_points[loop_points.len() - 1], loop_points[0]) <= duplicate_tolerance {
        loop_points.pop();
    }

    let n = loop_points.len();
    if n < 3 {
        return loop_points;
    }

    let corner = (0..n).find(|&i| {
        let prev = loop_points[(i + n - 1) % n];
        let next = loop_points[(i + 1) % n];
        cross(prev, loop_points[i], next).abs() > collinear_tolerance
    });

    let Some(start) = corner else {
        return loop_points;
    };
    loop_points.rotate_left(start);

    // The first point is now a corner, so the wrap edge ends on a real vertex
    while loop_points.len() >= 3 {
        let n = loop_points.len();
        if cross(loop_points[n - 2], loop_points[n - 1], loop_points[0]).abs() > collinear_tolerance {
            break;
        }
        loop_points.pop();
    }

    loop_points
}

/// Near-duplicate point remover
#[derive(Debug, Clone)]
pub struct Deduplicator {
    pub tolerance: f64,
}

impl Default for Deduplicator {
    fn default() -> Self {
        Self { tolerance: DUPLICATE_TOLERANCE }
    }
}

impl OutlineStage for Deduplicator {
    fn apply(&self, points: &[Point]) -> Vec<Point> {
        deduplicate(points, self.tolerance)
    }

    fn name(&self) -> &'static str {
        "deduplicate"
    }
}

/// Collinear interior point remover
#[derive(Debug, Clone)]
pub struct CollinearityFilter {
    pub tolerance: f64,
}

impl Default for CollinearityFilter {
    fn default() -> Self {
        Self { tolerance: COLLINEAR_TOLERANCE }
    }
}

impl OutlineStage for CollinearityFilter {
    fn apply(&self, points: &[Point]) -> Vec<Point> {
        remove_collinear(points, self.tolerance)
    }

    fn name(&self) -> &'static str {
        "collinearity_filter"
    }
}

/// Moves the loop's seam onto a corner
#[derive(Debug, Clone)]
pub struct SeamRotation {
    pub collinear_tolerance: f64,
    pub duplicate_tolerance: f64,
}

impl Default for SeamRotation {
    fn default() -> Self {
        Self {
            collinear_tolerance: COLLINEAR_TOLERANCE,
            duplicate_tolerance: DUPLICATE_TOLERANCE,
        }
    }
}

impl OutlineStage for SeamRotation {
    fn apply(&self, points: &[Point]) -> Vec<Point> {
        rotate_to_corner(points, self.collinear_tolerance, self.duplicate_tolerance)
    }

    fn name(&self) -> &'static str {
        "seam_rotation"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pts(xy: &[[f64; 2]]) -> Vec<Point> {
        xy.iter().map(|&[x, y]| Point { x, y }).collect()
    }

    #[test]
    fn test_deduplicate_compares_against_last_kept() {
        // Each step is below tolerance, but the drift from the kept point is not
        let points = pts(&[[0.0, 0.0], [0.00006, 0.0], [0.00012, 0.0], [1.0, 0.0]]);
        let result = deduplicate(&points, DUPLICATE_TOLERANCE);
        assert_eq!(result, pts(&[[0.0, 0.0], [0.00012, 0.0], [1.0, 0.0]]));
    }

    #[test]
    fn test_deduplicate_degenerate_inputs() {
        assert!(deduplicate(&[], DUPLICATE_TOLERANCE).is_empty());

        let single = pts(&[[3.0, 3.0]]);
        assert_eq!(deduplicate(&single, DUPLICATE_TOLERANCE), single);

        let repeated = pts(&[[3.0, 3.0], [3.0, 3.0], [3.0, 3.0]]);
        assert_eq!(deduplicate(&repeated, DUPLICATE_TOLERANCE), single);
    }

    #[test]
    fn test_deduplicate_drops_point_at_exact_tolerance() {
        let points = pts(&[[0.0, 0.0], [0.5, 0.0], [0.75, 0.0]]);
        assert_eq!(deduplicate(&points, 0.5), pts(&[[0.0, 0.0], [0.75, 0.0]]));
    }

    #[test]
    fn test_remove_collinear_drops_cross_at_exact_tolerance() {
        // |cross| of this corner is exactly 2
        let corner = pts(&[[0.0, 0.0], [1.0, 1.0], [2.0, 0.0]]);
        assert_eq!(remove_collinear(&corner, 2.0), pts(&[[0.0, 0.0], [2.0, 0.0]]));
        assert_eq!(remove_collinear(&corner, 1.5), corner);
    }

    #[test]
    fn test_remove_collinear_midpoint() {
        let points = pts(&[[0.0, 0.0], [1.0, 0.0], [2.0, 0.0], [1.0, 2.0]]);
        let result = remove_collinear(&points, COLLINEAR_TOLERANCE);
        assert_eq!(result, pts(&[[0.0, 0.0], [2.0, 0.0], [1.0, 2.0]]));
    }

    #[test]
    fn test_remove_collinear_keeps_endpoints() {
        let line = pts(&[[0.0, 0.0], [1.0, 0.0], [2.0, 0.0], [3.0, 0.0]]);
        assert_eq!(remove_collinear(&line, COLLINEAR_TOLERANCE), pts(&[[0.0, 0.0], [3.0, 0.0]]));

        let pair = pts(&[[0.0, 0.0], [1.0, 0.0]]);
        assert_eq!(remove_collinear(&pair, COLLINEAR_TOLERANCE), pair);
    }

    #[test]
    fn test_remove_collinear_ignores_wrap_edge() {
        // Starts mid-edge: the first point is collinear with the last and second
        let points = pts(&[[1.0, 0.0], [2.0, 0.0], [2.0, 2.0], [0.0, 2.0], [0.0, 0.0]]);
        let result = remove_collinear(&points, COLLINEAR_TOLERANCE);
        assert_eq!(result.len(), 5);
        assert_eq!(result[0], Point { x: 1.0, y: 0.0 });
    }

    #[test]
    fn test_rotate_to_corner() {
        let points = pts(&[[1.0, 0.0], [2.0, 0.0], [2.0, 2.0], [0.0, 2.0], [0.0, 0.0], [1.0, 0.0]]);
        let result = rotate_to_corner(&points, COLLINEAR_TOLERANCE, DUPLICATE_TOLERANCE);
        assert_eq!(result, pts(&[[2.0, 0.0], [2.0, 2.0], [0.0, 2.0], [0.0, 0.0]]));
    }

    #[test]
    fn test_rotate_to_corner_all_collinear() {
        let line = pts(&[[0.0, 0.0], [1.0, 0.0], [2.0, 0.0]]);
        assert_eq!(rotate_to_corner(&line, COLLINEAR_TOLERANCE, DUPLICATE_TOLERANCE), line);
    }
}
