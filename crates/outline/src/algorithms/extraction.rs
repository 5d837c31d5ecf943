use std::f64::consts::TAU;

use crate::{
    algorithms::normal_pass,
    config::CleanupConfig,
    geometry::{distance, line_intersection},
    traits::OutlineStage,
    types::Point,
};

/// Arithmetic mean of the points (not an area-weighted centroid)
fn mean_center(points: &[Point]) -> Point {
    let n = points.len() as f64;
    let (sx, sy) = points
        .iter()
        .fold((0.0, 0.0), |(sx, sy), p| (sx + p.x, sy + p.y));
    Point { x: sx / n, y: sy / n }
}

/// Sample the outer boundary of a possibly self-intersecting loop.
///
/// `ray_count` rays start `reach` times the max radius away from the mean
/// center and aim back at it. Each ray records its nearest forward hit on
/// the closed loop's edges; rays that hit nothing contribute no point, so the
/// result is in ray-angle order and may have gaps. Inputs with fewer than
/// three points are returned unchanged.
pub fn sample_outer_contour(points: &[Point], ray_count: usize, reach: f64) -> Vec<Point> {
    let n = points.len();
    if n < 3 {
        return points.to_vec();
    }

    let center = mean_center(points);
    let max_radius = points
        .iter()
        .map(|&p| distance(p, center))
        .fold(0.0, f64::max);

    let step = TAU / ray_count as f64;
    let mut contour = Vec::with_capacity(ray_count);

    for k in 0..ray_count {
        let angle = k as f64 * step;
        let start = Point {
            x: center.x + angle.cos() * reach * max_radius,
            y: center.y + angle.sin() * reach * max_radius,
        };
        let direction = center - start;

        let mut nearest: Option<(f64, Point)> = None;
        for i in 0..n {
            let Some(hit) = line_intersection(start, center, points[i], points[(i + 1) % n]) else {
                continue;
            };

            let to_hit = hit - start;
            if direction.x * to_hit.x + direction.y * to_hit.y < 0.0 {
                continue;
            }

            let d = distance(start, hit);
            if nearest.is_none_or(|(best, _)| d < best) {
                nearest = Some((d, hit));
            }
        }

        if let Some((_, hit)) = nearest {
            contour.push(hit);
        }
    }

    tracing::trace!(rays = ray_count, hits = contour.len(), "sampled outer contour");
    contour
}

/// Ray-sampling outer contour extractor.
///
/// The sampled contour is run through the normal cleanup pass to smooth
/// ray artifacts. If no ray hits the outline the input is kept; this also
/// covers a `ray_count` of zero, which `CleanupConfig::validate` rejects.
#[derive(Debug, Clone, Default)]
pub struct RayContourExtractor {
    pub config: CleanupConfig,
}

impl RayContourExtractor {
    pub fn new(config: CleanupConfig) -> Self {
        Self { config }
    }
}

impl OutlineStage for RayContourExtractor {
    fn apply(&self, points: &[Point]) -> Vec<Point> {
        if points.len() < 3 {
            return points.to_vec();
        }

        let raw = sample_outer_contour(points, self.config.ray_count, self.config.ray_reach);
        if raw.is_empty() {
            tracing::debug!(input = points.len(), "no ray hit the outline, keeping input");
            return points.to_vec();
        }

        normal_pass(&raw, &self.config)
    }

    fn name(&self) -> &'static str {
        "ray_contour"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::RAY_COUNT;

    fn pts(xy: &[[f64; 2]]) -> Vec<Point> {
        xy.iter().map(|&[x, y]| Point { x, y }).collect()
    }

    fn bowtie() -> Vec<Point> {
        pts(&[[-1.0, -1.0], [1.0, 1.0], [1.0, -1.0], [-1.0, 1.0]])
    }

    #[test]
    fn test_square_contour_hits_every_ray() {
        let square = pts(&[[-1.0, -1.0], [1.0, -1.0], [1.0, 1.0], [-1.0, 1.0]]);
        let contour = sample_outer_contour(&square, RAY_COUNT, 1.5);

        assert_eq!(contour.len(), RAY_COUNT);
        for p in &contour {
            let on_boundary = (p.x.abs() - 1.0).abs() < 1e-9 || (p.y.abs() - 1.0).abs() < 1e-9;
            assert!(on_boundary, "{p:?} should lie on the square");
        }

        // First ray points along +x
        assert!((contour[0].x - 1.0).abs() < 1e-9);
        assert!(contour[0].y.abs() < 1e-9);
    }

    #[test]
    fn test_contour_never_exceeds_ray_count() {
        let contour = sample_outer_contour(&bowtie(), RAY_COUNT, 1.5);
        assert!(!contour.is_empty());
        assert!(contour.len() <= RAY_COUNT);
    }

    #[test]
    fn test_hits_behind_ray_start_are_rejected() {
        // With a reach under 1 the first ray starts inside the square at (0.71, 0);
        // the right edge lies behind it, so the nearest forward hit is the left edge
        let square = pts(&[[-1.0, -1.0], [1.0, -1.0], [1.0, 1.0], [-1.0, 1.0]]);
        let contour = sample_outer_contour(&square, 4, 0.5);

        assert!((contour[0].x + 1.0).abs() < 1e-9, "got {:?}", contour[0]);
        assert!(contour[0].y.abs() < 1e-9);
    }

    #[test]
    fn test_bowtie_pinch_reached_from_vertical_rays() {
        let contour = sample_outer_contour(&bowtie(), RAY_COUNT, 1.5);
        assert_eq!(contour.len(), RAY_COUNT);

        // Rays straight down and straight up miss both vertical edges and meet
        // the crossing diagonals at the origin
        for k in [90, 270] {
            assert!(contour[k].x.abs() < 1e-9 && contour[k].y.abs() < 1e-9, "ray {k}: {:?}", contour[k]);
        }
    }

    #[test]
    fn test_short_inputs_pass_through() {
        let pair = pts(&[[0.0, 0.0], [1.0, 0.0]]);
        assert_eq!(sample_outer_contour(&pair, RAY_COUNT, 1.5), pair);
        assert_eq!(RayContourExtractor::default().apply(&pair), pair);
    }

    #[test]
    fn test_extractor_simplifies_sampled_square() {
        let square = pts(&[[-1.0, -1.0], [1.0, -1.0], [1.0, 1.0], [-1.0, 1.0]]);
        let result = RayContourExtractor::default().apply(&square);

        assert!(result.len() >= 4, "corners must survive: {result:?}");
        assert!(result.len() < RAY_COUNT);
        for p in &result {
            assert!(p.x.abs() <= 1.0 + 1e-9 && p.y.abs() <= 1.0 + 1e-9);
        }
    }

    #[test]
    fn test_coincident_points_keep_input() {
        let stacked = pts(&[[2.0, 2.0], [2.0, 2.0], [2.0, 2.0]]);
        assert_eq!(RayContourExtractor::default().apply(&stacked), stacked);
    }
}
