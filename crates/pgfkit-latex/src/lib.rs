//! LaTeX engine resolution and execution for pgfkit.
//!
//! This crate provides the [`Typesetter`](pgfkit_core::Typesetter) that turns
//! a saved `.tex` file into a PDF and optionally opens it.
//!
//! # Engine Resolution Flow
//!
//! ```text
//! resolve_engine()
//!     ↓
//! 1. PGFKIT_LATEX (must point at a file)
//!     ↓ (unset)
//! 2. [latex] engine, if it is a path
//!     ↓ (bare name)
//! 3. which::which(engine)
//!     ↓ (not found)
//! 4. TypesetterNotFound with searched locations
//! ```
//!
//! # Examples
//!
//! ```no_run
//! use pgfkit_core::DocumentBuilder;
//! use pgfkit_latex::LatexTypesetter;
//!
//! # fn main() -> pgfkit_core::Result<()> {
//! let mut doc = DocumentBuilder::new("x", "y", None).with_typesetter(LatexTypesetter::new);
//! doc.plot(&[0, 1, 2], &[0, 1, 4], None, None, false)?;
//! doc.save(Some("squares"))?;
//! doc.typeset(false)?;
//! # Ok(())
//! # }
//! ```

// Core modules
pub mod exec;
pub mod info;
pub mod resolve;
pub mod typesetter;
pub mod view;

// Re-export commonly used types
pub use exec::{ExecOptions, ExecResult, exec_latex};
pub use info::{EngineInfo, EngineSource};
pub use resolve::{LATEX_ENV, resolve_engine};
pub use typesetter::LatexTypesetter;
pub use view::VIEWER_ENV;
