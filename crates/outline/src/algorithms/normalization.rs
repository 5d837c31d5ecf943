use geo::BoundingRect;
use geo_types::MultiPoint;

use crate::types::{Outline, Point};

/// Center the points on their bounding box and scale the larger box side to 1.
///
/// Degenerate inputs (empty, or every point coincident) come back unchanged.
pub fn auto_scale_points(points: &[Point]) -> Vec<Point> {
    let bounds = MultiPoint::from(points.to_vec()).bounding_rect();
    let Some(rect) = bounds else {
        return points.to_vec();
    };

    let max_dim = rect.width().max(rect.height());
    if max_dim == 0.0 {
        tracing::debug!(points = points.len(), "zero-size bounding box, skipping scale");
        return points.to_vec();
    }

    let scale = 1.0 / max_dim;
    let center = rect.center();
    points.iter().map(|&p| (p - center) * scale).collect()
}

/// Normalize an outline for extrusion: centered, largest dimension exactly 1
pub fn auto_scale_shape(outline: &Outline) -> Outline {
    Outline::new(auto_scale_points(outline.points()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_scales_largest_dimension_to_one() {
        let outline = Outline::from_xy([[10.0, 10.0], [14.0, 10.0], [14.0, 12.0], [10.0, 12.0]]);
        let scaled = auto_scale_shape(&outline);

        let bbox = scaled.bounding_box().expect("Scaled outline has a bounding box");
        assert_relative_eq!(bbox.width(), 1.0);
        assert_relative_eq!(bbox.height(), 0.5);
        assert_relative_eq!(bbox.center().x, 0.0);
        assert_relative_eq!(bbox.center().y, 0.0);
        assert_relative_eq!(scaled.points()[0].x, -0.5);
        assert_relative_eq!(scaled.points()[0].y, -0.25);
    }

    #[test]
    fn test_degenerate_inputs_unchanged() {
        let empty = Outline::default();
        assert_eq!(auto_scale_shape(&empty), empty);

        let stacked = Outline::from_xy([[3.0, 3.0], [3.0, 3.0], [3.0, 3.0]]);
        assert_eq!(auto_scale_shape(&stacked), stacked);
    }

    #[test]
    fn test_flat_outline_scales_along_its_length() {
        let flat = Outline::from_xy([[0.0, 5.0], [8.0, 5.0]]);
        let scaled = auto_scale_shape(&flat);
        assert_eq!(scaled.points(), &[Point { x: -0.5, y: 0.0 }, Point { x: 0.5, y: 0.0 }]);
    }
}
