//! Geometry primitives shared by every cleanup stage.

use crate::types::Point;

/// Determinants below this magnitude are treated as parallel lines.
pub const PARALLEL_EPSILON: f64 = 1e-10;

/// Euclidean distance between two points
pub fn distance(a: Point, b: Point) -> f64 {
    (a.x - b.x).hypot(a.y - b.y)
}

/// 2D cross product of `(b - a)` and `(c - a)`
pub fn cross(a: Point, b: Point, c: Point) -> f64 {
    (b.x - a.x) * (c.y - a.y) - (b.y - a.y) * (c.x - a.x)
}

/// Distance from `p` to the segment `a`-`b`.
///
/// The projection parameter is clamped to `[0, 1]`, so points beyond either
/// end measure to the nearest endpoint. A zero-length segment degenerates to
/// point-to-point distance.
pub fn point_to_segment_distance(p: Point, a: Point, b: Point) -> f64 {
    let dx = b.x - a.x;
    let dy = b.y - a.y;
    let length_sq = dx * dx + dy * dy;

    if length_sq == 0.0 {
        return distance(p, a);
    }

    let t = (((p.x - a.x) * dx + (p.y - a.y) * dy) / length_sq).clamp(0.0, 1.0);
    let projection = Point {
        x: a.x + t * dx,
        y: a.y + t * dy,
    };
    distance(p, projection)
}

/// Intersect the infinite line through `p1`-`p2` with the segment `p3`-`p4`.
///
/// Returns `None` for parallel (or nearly parallel) lines and when the
/// crossing falls outside the segment. The first line's parameter is unbounded.
pub fn line_intersection(p1: Point, p2: Point, p3: Point, p4: Point) -> Option<Point> {
    let denom = (p1.x - p2.x) * (p3.y - p4.y) - (p1.y - p2.y) * (p3.x - p4.x);
    if denom.abs() < PARALLEL_EPSILON {
        return None;
    }

    let t = ((p1.x - p3.x) * (p3.y - p4.y) - (p1.y - p3.y) * (p3.x - p4.x)) / denom;
    let u = -((p1.x - p2.x) * (p1.y - p3.y) - (p1.y - p2.y) * (p1.x - p3.x)) / denom;

    if !(0.0..=1.0).contains(&u) {
        return None;
    }

    Some(Point {
        x: p1.x + t * (p2.x - p1.x),
        y: p1.y + t * (p2.y - p1.y),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn pt(x: f64, y: f64) -> Point {
        Point { x, y }
    }

    #[test]
    fn test_segment_distance_perpendicular() {
        let d = point_to_segment_distance(pt(1.0, 1.0), pt(0.0, 0.0), pt(2.0, 0.0));
        assert_relative_eq!(d, 1.0);
    }

    #[test]
    fn test_segment_distance_clamps_to_endpoint() {
        let d = point_to_segment_distance(pt(5.0, 4.0), pt(0.0, 0.0), pt(2.0, 0.0));
        assert_relative_eq!(d, 5.0);

        let d = point_to_segment_distance(pt(-3.0, 0.0), pt(0.0, 0.0), pt(2.0, 0.0));
        assert_relative_eq!(d, 3.0);
    }

    #[test]
    fn test_segment_distance_zero_length() {
        let d = point_to_segment_distance(pt(3.0, 4.0), pt(0.0, 0.0), pt(0.0, 0.0));
        assert_relative_eq!(d, 5.0);
    }

    #[test]
    fn test_line_intersection_within_segment() {
        let hit = line_intersection(pt(-2.0, 0.0), pt(-1.0, 0.0), pt(1.0, -1.0), pt(1.0, 1.0))
            .expect("Lines cross inside the segment");
        assert_relative_eq!(hit.x, 1.0);
        assert_relative_eq!(hit.y, 0.0);
    }

    #[test]
    fn test_line_intersection_outside_segment() {
        let hit = line_intersection(pt(0.0, 5.0), pt(1.0, 5.0), pt(1.0, -1.0), pt(1.0, 1.0));
        assert!(hit.is_none());
    }

    #[test]
    fn test_line_intersection_parallel() {
        let hit = line_intersection(pt(0.0, 0.0), pt(1.0, 0.0), pt(0.0, 1.0), pt(1.0, 1.0));
        assert!(hit.is_none());
    }

    #[test]
    fn test_line_intersection_accepts_segment_endpoints() {
        let axis = (pt(-2.0, 0.0), pt(-1.0, 0.0));

        // u == 0: the line passes through the segment's start
        let hit = line_intersection(axis.0, axis.1, pt(1.0, 0.0), pt(1.0, 2.0))
            .expect("Segment start lies on the line");
        assert_eq!((hit.x, hit.y), (1.0, 0.0));

        // u == 1: the line passes through the segment's end
        let hit = line_intersection(axis.0, axis.1, pt(1.0, -2.0), pt(1.0, 0.0))
            .expect("Segment end lies on the line");
        assert_eq!((hit.x, hit.y), (1.0, 0.0));
    }

    #[test]
    fn test_line_intersection_near_parallel() {
        // The determinant is about 1e-11: non-zero but under the threshold
        let (p1, p2) = (pt(0.0, 0.0), pt(1.0, 0.0));
        let (p3, p4) = (pt(0.0, 1.0), pt(1.0, 1.0 + 1e-11));

        let denom = (p1.x - p2.x) * (p3.y - p4.y) - (p1.y - p2.y) * (p3.x - p4.x);
        assert!(denom != 0.0 && denom.abs() < PARALLEL_EPSILON);
        assert!(line_intersection(p1, p2, p3, p4).is_none());
    }

    #[test]
    fn test_cross_sign() {
        assert!(cross(pt(0.0, 0.0), pt(1.0, 0.0), pt(0.0, 1.0)) > 0.0);
        assert_eq!(cross(pt(0.0, 0.0), pt(1.0, 0.0), pt(2.0, 0.0)), 0.0);
    }
}
