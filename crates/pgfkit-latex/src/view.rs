//! Opening produced PDFs

use pgfkit_core::{PgfError, Result};
use std::path::Path;
use std::process::Command;

/// Environment variable overriding the PDF viewer
pub const VIEWER_ENV: &str = "PGFKIT_VIEWER";

/// Viewer program and its leading arguments
///
/// `PGFKIT_VIEWER` wins over the configured viewer, which wins over the
/// platform opener.
pub fn viewer_command(configured: Option<&str>) -> (String, Vec<String>) {
    let chosen = std::env::var(VIEWER_ENV)
        .ok()
        .filter(|v| !v.trim().is_empty())
        .or_else(|| configured.map(str::to_string));

    if let Some(viewer) = chosen {
        let mut parts = viewer.split_whitespace().map(str::to_string);
        let program = parts.next().unwrap_or_default();
        return (program, parts.collect());
    }

    platform_opener()
}

#[cfg(target_os = "macos")]
fn platform_opener() -> (String, Vec<String>) {
    ("open".to_string(), vec![])
}

#[cfg(windows)]
fn platform_opener() -> (String, Vec<String>) {
    (
        "cmd".to_string(),
        vec!["/C".to_string(), "start".to_string(), String::new()],
    )
}

#[cfg(not(any(target_os = "macos", windows)))]
fn platform_opener() -> (String, Vec<String>) {
    ("xdg-open".to_string(), vec![])
}

/// Open `pdf` in the viewer
///
/// The viewer is detached: it is never waited on and outlives the caller.
pub fn launch(pdf: &Path, configured: Option<&str>) -> Result<()> {
    let (program, args) = viewer_command(configured);
    tracing::info!("Opening {} with {}", pdf.display(), program);

    let child = Command::new(&program)
        .args(&args)
        .arg(pdf)
        .spawn()
        .map_err(|e| PgfError::ViewerFailed(format!("failed to start '{}': {}", program, e)))?;
    tracing::debug!("Viewer running detached with pid {}", child.id());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pgfkit_testkit::with_isolated_latex_env;

    #[test]
    fn test_configured_viewer_with_arguments() {
        with_isolated_latex_env(None, || {
            let (program, args) = viewer_command(Some("zathura --fork"));
            assert_eq!(program, "zathura");
            assert_eq!(args, vec!["--fork".to_string()]);
        });
    }

    #[test]
    fn test_env_viewer_overrides_config() {
        with_isolated_latex_env(None, || {
            // SAFETY: environment is serialized by with_isolated_latex_env
            unsafe { std::env::set_var(VIEWER_ENV, "evince") };
            let (program, args) = viewer_command(Some("zathura"));
            assert_eq!(program, "evince");
            assert!(args.is_empty());
        });
    }

    #[test]
    fn test_platform_default() {
        with_isolated_latex_env(None, || {
            let (program, _) = viewer_command(None);
            assert!(["open", "cmd", "xdg-open"].contains(&program.as_str()));
        });
    }

    #[cfg(unix)]
    #[test]
    fn test_launch_returns_without_waiting() {
        with_isolated_latex_env(None, || {
            launch(Path::new("x.pdf"), Some("/bin/sh -c true")).unwrap();
        });
    }

    #[test]
    fn test_missing_viewer_fails() {
        with_isolated_latex_env(None, || {
            let err = launch(Path::new("x.pdf"), Some("/nonexistent/viewer")).unwrap_err();
            assert!(matches!(err, PgfError::ViewerFailed(_)));
        });
    }
}
