//! Core of pgfkit: build pgfplots documents from data series.
//!
//! A [`DocumentBuilder`] accumulates text fragments under the named regions
//! of a LaTeX template and substitutes them on [`render`](DocumentBuilder::render).
//! Typesetting is delegated to a [`Typesetter`] attached by the caller.
//!
//! ```no_run
//! use pgfkit_core::DocumentBuilder;
//!
//! # fn main() -> pgfkit_core::Result<()> {
//! let mut doc = DocumentBuilder::new("time", "value", None);
//! doc.plot(&[1, 2, 3], &[4, 5, 6], Some("measured"), None, false)?;
//! doc.save(Some("figure"))?;
//! # Ok(())
//! # }
//! ```

// Core modules
pub mod builder;
pub mod config;
pub mod error;
pub mod region;
pub mod template;
pub mod typeset;

// Re-export commonly used types
pub use builder::{BoundingBox, DocumentBuilder, PlotSeries, DEFAULT_NAME, TEX_EXTENSION};
pub use config::{LatexConfig, PlotConfig};
pub use error::{PgfError, Result};
pub use region::{Region, RegionMap};
pub use template::Template;
pub use typeset::{Typesetter, TypesetterFactory};
