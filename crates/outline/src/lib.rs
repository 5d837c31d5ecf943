//! # Outline Cleanup Library
//!
//! Turns a raw traced outline (flattened vector-path samples, possibly noisy
//! and self-overlapping) into a clean, minimal polygon centered on the origin
//! with its largest dimension scaled to 1, ready for solid extrusion.
//!
//! ## Core Features
//!
//! - **Cleanup Modes**: `none`, `normal` (dedup, collinearity filter,
//!   Douglas-Peucker) and `aggressive` (normal cleanup around a ray-sampled
//!   outer contour)
//! - **Pipeline System**: Compose cleanup stages with a fluent builder
//! - **Session Manager**: Keep the traced original and recompute on every change
//! - **GeoJSON Support**: Export cleaned outlines, read traced polygons back
//!
//! ## Quick Start
//!
//! ```rust
//! use outline::{auto_scale_shape, cleanup_shape, CleanupMode, Outline};
//!
//! let raw = Outline::from_xy([[-1.0, -1.0], [1.0, -1.0], [1.0, -1.00005], [1.0, 1.0], [-1.0, 1.0]]);
//! let cleaned = cleanup_shape(&raw, CleanupMode::Normal);
//! assert_eq!(cleaned.len(), 4);
//!
//! let normalized = auto_scale_shape(&cleaned);
//! let bbox = normalized.bounding_box().unwrap();
//! assert!((bbox.width().max(bbox.height()) - 1.0).abs() < 1e-12);
//! ```
//!
//! ## Custom Pipeline
//!
//! ```rust
//! use outline::{Outline, Pipeline};
//!
//! let pipeline = Pipeline::builder()
//!     .with_deduplication(0.01)
//!     .with_simplification(0.05)
//!     .build();
//!
//! let raw = Outline::from_xy([[0.0, 0.0], [1.0, 0.01], [2.0, 0.0], [1.0, 1.0]]);
//! let simplified = pipeline.run(&raw);
//! assert_eq!(simplified.len(), 3);
//! ```

pub mod error;
pub mod types;
pub mod geometry;
pub mod config;
pub mod traits;
pub mod algorithms;
pub mod pipeline;
pub mod io;
pub mod manager;

// Re-exports for convenience
pub use error::{OutlineError, Result};
pub use types::{CleanupReport, Outline, Point};
pub use config::{CleanupConfig, SeamPolicy};
pub use traits::*;
pub use algorithms::*;
pub use pipeline::{Pipeline, builder::PipelineBuilder, cleanup_shape, cleanup_shape_with};
pub use manager::{CleanupMode, OutlineManager};
