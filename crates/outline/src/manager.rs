use serde::{Serialize, Deserialize};
use schemars::JsonSchema;
use strum::{Display, EnumIter, EnumString, VariantNames};

use crate::{
    algorithms::auto_scale_shape,
    config::CleanupConfig,
    error::{OutlineError, Result},
    pipeline::cleanup_shape_with,
    types::{CleanupReport, Outline},
};

#[derive(
    Debug, Clone, Copy, Default,
    Serialize, Deserialize, JsonSchema,
    Display, EnumString, EnumIter, VariantNames,
    PartialEq, Eq, Hash
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
#[repr(u8)]
pub enum CleanupMode {
    /// Keep the traced points as they are
    None = 0,
    /// Dedup, collinearity filter and Douglas-Peucker
    #[default]
    Normal = 1,
    /// Normal cleanup around a ray-sampled outer contour
    Aggressive = 2,
}

impl CleanupMode {
    /// Get a list of all available mode names
    pub fn mode_names() -> &'static [&'static str] {
        <Self as VariantNames>::VARIANTS
    }

    /// Get a description of the mode
    pub fn description(&self) -> &'static str {
        match self {
            Self::None => "Use the traced outline as-is",
            Self::Normal => "Remove duplicate and collinear points, then simplify with Douglas-Peucker",
            Self::Aggressive => "Rebuild the outer boundary by ray sampling, for self-overlapping traces",
        }
    }
}

impl TryFrom<u8> for CleanupMode {
    type Error = OutlineError;

    fn try_from(value: u8) -> Result<Self> {
        match value {
            0 => Ok(Self::None),
            1 => Ok(Self::Normal),
            2 => Ok(Self::Aggressive),
            other => Err(OutlineError::InvalidMode(other)),
        }
    }
}

impl From<CleanupMode> for u8 {
    fn from(mode: CleanupMode) -> Self {
        mode as u8
    }
}

/// Holds the canonical traced outline and its derived cleaned shapes.
///
/// Every change of outline, mode or config recomputes from the original, so
/// switching modes back and forth never compounds lossy simplification.
#[derive(Debug, Clone, Default)]
pub struct OutlineManager {
    original: Option<Outline>,
    mode: CleanupMode,
    config: CleanupConfig,
    cleaned: Option<Outline>,
    normalized: Option<Outline>,
}

impl OutlineManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a manager with a custom config
    pub fn with_config(config: CleanupConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config,
            ..Self::default()
        })
    }

    /// Store a freshly traced outline as the new original
    pub fn set_outline(&mut self, outline: Outline) -> Result<()> {
        outline.validate()?;
        self.original = Some(outline);
        self.recompute();
        Ok(())
    }

    pub fn set_mode(&mut self, mode: CleanupMode) {
        self.mode = mode;
        self.recompute();
    }

    /// Replace the config; an invalid config leaves the current one in place
    pub fn set_config(&mut self, config: CleanupConfig) -> Result<()> {
        config.validate()?;
        self.config = config;
        self.recompute();
        Ok(())
    }

    pub fn mode(&self) -> CleanupMode {
        self.mode
    }

    pub fn config(&self) -> &CleanupConfig {
        &self.config
    }

    /// The original traced outline, untouched by cleanup
    pub fn outline(&self) -> Result<&Outline> {
        self.original.as_ref().ok_or(OutlineError::NoOutlineLoaded)
    }

    /// The cleaned outline before scaling
    pub fn cleaned(&self) -> Result<&Outline> {
        self.cleaned.as_ref().ok_or(OutlineError::NoOutlineLoaded)
    }

    /// The cleaned, centered and unit-scaled outline
    pub fn normalized(&self) -> Result<&Outline> {
        self.normalized.as_ref().ok_or(OutlineError::NoOutlineLoaded)
    }

    /// Snapshot the original and derived outlines for export
    pub fn report(&self) -> Result<CleanupReport> {
        Ok(CleanupReport {
            mode: self.mode,
            original: self.outline()?.clone(),
            cleaned: self.cleaned()?.clone(),
            normalized: self.normalized()?.clone(),
        })
    }

    fn recompute(&mut self) {
        let Some(original) = self.original.as_ref() else {
            return;
        };

        let cleaned = cleanup_shape_with(original, self.mode, &self.config);
        tracing::debug!(
            mode = %self.mode,
            original = original.len(),
            cleaned = cleaned.len(),
            "recomputed outline"
        );
        self.normalized = Some(auto_scale_shape(&cleaned));
        self.cleaned = Some(cleaned);
    }
}
