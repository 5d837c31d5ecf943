use serde::{Deserialize, Serialize};
use geo_types::{Coord, LineString, Polygon, Rect};

use crate::error::{OutlineError, Result};

/// A 2D sample on a traced outline.
pub type Point = Coord<f64>;

/// A closed polygon loop stored as an open, ordered point sequence.
///
/// The closing edge (last point back to the first) is implicit and never
/// stored. Outlines are immutable: every cleanup stage produces a new one.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Outline {
    #[serde(with = "xy_pairs")]
    points: Vec<Point>,
}

impl Outline {
    pub fn new(points: Vec<Point>) -> Self {
        Self { points }
    }

    /// Build an outline from `[x, y]` pairs without validation
    pub fn from_xy<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = [f64; 2]>,
    {
        Self::new(pairs.into_iter().map(|[x, y]| Coord { x, y }).collect())
    }

    /// Build an outline from `[x, y]` pairs, rejecting NaN and infinite coordinates
    pub fn try_from_xy<I>(pairs: I) -> Result<Self>
    where
        I: IntoIterator<Item = [f64; 2]>,
    {
        let outline = Self::from_xy(pairs);
        outline.validate()?;
        Ok(outline)
    }

    /// Check that every coordinate is finite
    pub fn validate(&self) -> Result<()> {
        match self
            .points
            .iter()
            .enumerate()
            .find(|(_, p)| !p.x.is_finite() || !p.y.is_finite())
        {
            Some((index, p)) => Err(OutlineError::NonFiniteCoordinate { index, x: p.x, y: p.y }),
            None => Ok(()),
        }
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn into_points(self) -> Vec<Point> {
        self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Convert to a geo-types Polygon (geo closes the ring itself)
    pub fn to_geo_polygon(&self) -> Polygon<f64> {
        Polygon::new(LineString::new(self.points.clone()), vec![])
    }

    /// Axis-aligned bounding box, or `None` for an empty outline
    pub fn bounding_box(&self) -> Option<Rect<f64>> {
        use geo::BoundingRect;
        LineString::new(self.points.clone()).bounding_rect()
    }

    /// Unsigned area enclosed by the loop
    pub fn area(&self) -> f64 {
        use geo::Area;
        self.to_geo_polygon().unsigned_area()
    }

    /// Perimeter length, including the implicit closing edge
    pub fn perimeter(&self) -> f64 {
        if self.points.len() < 2 {
            return 0.0;
        }

        let open: f64 = self
            .points
            .windows(2)
            .map(|w| crate::geometry::distance(w[0], w[1]))
            .sum();

        let closing = crate::geometry::distance(self.points[self.points.len() - 1], self.points[0]);
        open + closing
    }
}

/// The outcome of one cleanup run: the canonical input and both derived shapes
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CleanupReport {
    pub mode: crate::manager::CleanupMode,
    pub original: Outline,
    /// Cleaned outline before scaling
    pub cleaned: Outline,
    /// Cleaned outline, centered and scaled to unit size
    pub normalized: Outline,
}

impl From<Vec<Point>> for Outline {
    fn from(points: Vec<Point>) -> Self {
        Self::new(points)
    }
}

/// Serialize points as `[[x, y], ...]` rather than `[{"x": .., "y": ..}, ...]`
mod xy_pairs {
    use super::Point;
    use geo_types::Coord;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    pub fn serialize<S: Serializer>(points: &[Point], serializer: S) -> Result<S::Ok, S::Error> {
        let pairs: Vec<[f64; 2]> = points.iter().map(|p| [p.x, p.y]).collect();
        pairs.serialize(serializer)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<Point>, D::Error> {
        let pairs = Vec::<[f64; 2]>::deserialize(deserializer)?;
        Ok(pairs.into_iter().map(|[x, y]| Coord { x, y }).collect())
    }
}
