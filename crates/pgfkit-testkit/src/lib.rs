//! Test utilities for pgfkit
//!
//! This crate provides shared testing utilities used across the pgfkit workspace.

mod env;
mod fake;

pub use env::{ENV_LOCK, with_isolated_latex_env};
pub use fake::{RecordingTypesetter, TypesetCall};
#[cfg(unix)]
pub use fake::write_fake_engine;

use tempfile::TempDir;

/// Creates a temporary directory within `.tmp/` at the project root
///
/// All test output lands in one gitignored location that is easy to clean
/// up by hand.
///
/// # Panics
///
/// Panics if the current directory is unavailable or `.tmp/` cannot be created.
///
/// # Examples
///
/// ```rust
/// use pgfkit_testkit::temp_dir_in_workspace;
///
/// let temp = temp_dir_in_workspace();
/// let file_path = temp.path().join("plot.tex");
/// std::fs::write(&file_path, "% plot").unwrap();
/// // Cleanup happens automatically when temp is dropped
/// ```
pub fn temp_dir_in_workspace() -> TempDir {
    try_temp_dir_in_workspace().expect("Failed to create temporary directory in .tmp/")
}

/// Alternative with Result for non-test code
pub fn try_temp_dir_in_workspace() -> std::io::Result<TempDir> {
    let tmp_base = std::env::current_dir()?.join(".tmp");
    std::fs::create_dir_all(&tmp_base)?;
    TempDir::new_in(&tmp_base)
}
