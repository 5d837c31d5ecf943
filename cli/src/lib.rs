use outline::{CleanupConfig, CleanupMode, Outline, OutlineError};

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;


#[derive(Error, Debug)]
pub enum OutlineCliError {
    #[error(transparent)]
    SerdeError(#[from] serde_json::Error),
    #[error(transparent)]
    TomlDeError(#[from] toml::de::Error),
    #[error(transparent)]
    TomlSerError(#[from] toml::ser::Error),
    #[error(transparent)]
    IoError(#[from] std::io::Error),
    #[error(transparent)]
    OutlineError(#[from] OutlineError),
    #[error("Unsupported file format. Please use .toml, .json or .geojson files")]
    UnsupportedFileFormat,
}


/// A traced outline plus the settings to clean it with
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct OutlineJob {
    pub name: String,
    #[serde(default)]
    pub mode: CleanupMode,
    /// Where to write the GeoJSON report
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output_path: Option<String>,
    /// Raw traced points, `[x, y]` pairs in trace order
    pub points: Vec<[f64; 2]>,
    #[serde(default)]
    pub config: CleanupConfig,
}

impl OutlineJob {
    /// Wrap an already traced outline in a job with default settings
    pub fn from_outline(name: impl Into<String>, outline: &Outline) -> Self {
        Self {
            name: name.into(),
            mode: CleanupMode::default(),
            output_path: None,
            points: outline.points().iter().map(|p| [p.x, p.y]).collect(),
            config: CleanupConfig::default(),
        }
    }

    /// Validate the points and build the outline
    pub fn to_outline(&self) -> Result<Outline, OutlineCliError> {
        Ok(Outline::try_from_xy(self.points.iter().copied())?)
    }

    /// Load an OutlineJob from a TOML file
    pub fn from_toml_file<P: AsRef<Path>>(path: P) -> Result<Self, OutlineCliError> {
        let content = fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    /// Load an OutlineJob from TOML string
    pub fn from_toml(content: &str) -> Result<Self, OutlineCliError> {
        Ok(toml::from_str(content)?)
    }

    /// Load an OutlineJob from a JSON file
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self, OutlineCliError> {
        let content = fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    /// Load an OutlineJob from JSON string
    pub fn from_json(content: &str) -> Result<Self, OutlineCliError> {
        Ok(serde_json::from_str(content)?)
    }

    /// Build a default job around the first polygon of a GeoJSON file
    pub fn from_geojson_file<P: AsRef<Path>>(path: P) -> Result<Self, OutlineCliError> {
        let path_ref = path.as_ref();
        let outline = Outline::from_geojson_file(path_ref)?;
        let name = path_ref
            .file_stem()
            .map(|stem| stem.to_string_lossy().to_string())
            .unwrap_or_else(|| "outline".to_string());
        Ok(Self::from_outline(name, &outline))
    }

    /// Auto-detect file format and load the job
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, OutlineCliError> {
        let path_ref = path.as_ref();
        match path_ref.extension().and_then(|ext| ext.to_str()) {
            Some("toml") => Self::from_toml_file(path),
            Some("json") => Self::from_json_file(path),
            Some("geojson") => Self::from_geojson_file(path),
            _ => Err(OutlineCliError::UnsupportedFileFormat),
        }
    }

    /// Convert the job to TOML string
    pub fn to_toml(&self) -> Result<String, OutlineCliError> {
        let toml = toml::to_string_pretty(&self)?;
        Ok(toml)
    }
}
