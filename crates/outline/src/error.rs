use thiserror::Error;

#[derive(Error, Debug)]
pub enum OutlineError {
    #[error("Non-finite coordinate at index {index}: ({x}, {y})")]
    NonFiniteCoordinate { index: usize, x: f64, y: f64 },

    #[error("No outline loaded")]
    NoOutlineLoaded,

    #[error("Invalid cleanup mode: {0} (expected 0, 1 or 2)")]
    InvalidMode(u8),

    #[error("Invalid config: {0}")]
    InvalidConfig(String),

    #[error("Invalid geometry: {0}")]
    InvalidGeometry(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("GeoJSON error: {0}")]
    GeoJson(#[from] geojson::Error),
}

pub type Result<T> = std::result::Result<T, OutlineError>;
