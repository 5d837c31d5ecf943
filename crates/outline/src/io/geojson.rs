use geojson::{Feature, FeatureCollection, GeoJson, Geometry, Value};
use geo_types::Coord;
use std::path::Path;

use crate::{
    error::{OutlineError, Result},
    types::{CleanupReport, Outline},
};

fn number(value: f64) -> serde_json::Value {
    serde_json::Number::from_f64(value)
        .map(serde_json::Value::Number)
        .unwrap_or(serde_json::Value::Null)
}

impl Outline {
    /// GeoJSON rings repeat the first position at the end
    fn closed_ring(&self) -> Vec<Vec<f64>> {
        let mut ring: Vec<Vec<f64>> = self.points().iter().map(|p| vec![p.x, p.y]).collect();
        if let Some(first) = ring.first().cloned() {
            ring.push(first);
        }
        ring
    }

    /// Export as a GeoJSON polygon feature with measurement properties
    pub fn to_geojson_feature(&self) -> Feature {
        let geometry = (!self.is_empty()).then(|| Geometry::new(Value::Polygon(vec![self.closed_ring()])));

        let mut properties = serde_json::Map::new();
        properties.insert("point_count".to_string(), serde_json::Value::from(self.len()));
        properties.insert("area".to_string(), number(self.area()));
        properties.insert("perimeter".to_string(), number(self.perimeter()));

        Feature {
            bbox: None,
            geometry,
            id: None,
            properties: Some(properties),
            foreign_members: None,
        }
    }

    /// Read the exterior ring of the first polygon in a GeoJSON document
    pub fn from_geojson_str(geojson_str: &str) -> Result<Self> {
        let geojson: GeoJson = geojson_str.parse()?;

        let geometries: Vec<Geometry> = match geojson {
            GeoJson::Geometry(geometry) => vec![geometry],
            GeoJson::Feature(feature) => feature.geometry.into_iter().collect(),
            GeoJson::FeatureCollection(collection) => collection
                .features
                .into_iter()
                .filter_map(|feature| feature.geometry)
                .collect(),
        };

        let exterior = geometries
            .into_iter()
            .find_map(|geometry| match geometry.value {
                Value::Polygon(mut rings) if !rings.is_empty() => Some(rings.swap_remove(0)),
                _ => None,
            })
            .ok_or_else(|| OutlineError::InvalidGeometry("No polygon found in GeoJSON".to_string()))?;

        let mut points = Vec::with_capacity(exterior.len());
        for position in &exterior {
            match position.as_slice() {
                [x, y, ..] => points.push(Coord { x: *x, y: *y }),
                _ => {
                    return Err(OutlineError::InvalidGeometry(
                        "Position with fewer than two coordinates".to_string(),
                    ))
                }
            }
        }

        if points.len() > 1 && points.first() == points.last() {
            points.pop();
        }

        let outline = Outline::new(points);
        outline.validate()?;
        Ok(outline)
    }

    pub fn from_geojson_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let geojson_str = std::fs::read_to_string(path)?;
        Self::from_geojson_str(&geojson_str)
    }
}

impl CleanupReport {
    /// Export all three outlines as a feature collection tagged by role
    pub fn to_geojson(&self) -> FeatureCollection {
        let features = [
            ("original", &self.original),
            ("cleaned", &self.cleaned),
            ("normalized", &self.normalized),
        ]
        .into_iter()
        .map(|(role, outline)| {
            let mut feature = outline.to_geojson_feature();
            feature.id = Some(geojson::feature::Id::String(role.to_string()));
            feature.set_property("role", role);
            feature
        })
        .collect();

        let mut foreign_members = serde_json::Map::new();
        foreign_members.insert("mode".to_string(), serde_json::Value::String(self.mode.to_string()));
        foreign_members.insert("original_count".to_string(), serde_json::Value::from(self.original.len()));
        foreign_members.insert("cleaned_count".to_string(), serde_json::Value::from(self.cleaned.len()));

        FeatureCollection {
            bbox: None,
            features,
            foreign_members: Some(foreign_members),
        }
    }

    /// Export to GeoJSON and serialize to JSON string
    pub fn to_geojson_string(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(&self.to_geojson())?)
    }

    /// Save GeoJSON to file
    pub fn save_geojson<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        std::fs::write(path, self.to_geojson_string()?)?;
        Ok(())
    }
}
