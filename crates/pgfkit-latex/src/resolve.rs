use crate::info::{EngineInfo, EngineSource};
use pgfkit_core::{LatexConfig, PgfError, Result};
use std::path::{Path, PathBuf};

/// Environment variable overriding the engine binary
pub const LATEX_ENV: &str = "PGFKIT_LATEX";

/// Resolve the LaTeX engine binary
///
/// Resolution priority:
/// 1. `PGFKIT_LATEX`
/// 2. `engine` from the config, when it is a path
/// 3. `engine` looked up on the system PATH
pub fn resolve_engine(config: &LatexConfig) -> Result<EngineInfo> {
    let mut searched = Vec::new();

    if let Some(info) = resolve_env(&mut searched)? {
        return Ok(info);
    }

    if let Some(info) = resolve_configured(&config.engine, &mut searched)? {
        return Ok(info);
    }

    if let Some(info) = resolve_system(&config.engine, &mut searched) {
        return Ok(info);
    }

    Err(PgfError::TypesetterNotFound {
        engine: config.engine.clone(),
        searched: searched.join(", "),
    })
}

fn resolve_env(searched: &mut Vec<String>) -> Result<Option<EngineInfo>> {
    let Some(value) = std::env::var_os(LATEX_ENV).filter(|v| !v.is_empty()) else {
        return Ok(None);
    };

    let path = PathBuf::from(value);
    if !path.is_file() {
        // An explicit override that points nowhere is an error, not a fallback
        searched.push(format!("{}={}", LATEX_ENV, path.display()));
        return Err(PgfError::TypesetterNotFound {
            engine: path.display().to_string(),
            searched: searched.join(", "),
        });
    }

    let path = absolute(&path)?;
    tracing::debug!("Using LaTeX engine from {}: {}", LATEX_ENV, path.display());
    Ok(Some(EngineInfo {
        name: engine_name(&path),
        source: EngineSource::Env,
        path,
    }))
}

fn resolve_configured(engine: &str, searched: &mut Vec<String>) -> Result<Option<EngineInfo>> {
    let path = Path::new(engine);
    if path.components().count() < 2 {
        return Ok(None);
    }

    searched.push(path.display().to_string());
    if !path.is_file() {
        return Ok(None);
    }
    let path = absolute(path)?;
    Ok(Some(EngineInfo {
        name: engine_name(&path),
        source: EngineSource::Configured,
        path,
    }))
}

/// Anchor a relative engine path to the current working directory
///
/// The engine runs in the document's directory, so a relative path would
/// resolve against the wrong base. Symlinks are kept: TeX engines pick their
/// format from the name they are invoked by.
fn absolute(path: &Path) -> Result<PathBuf> {
    Ok(std::path::absolute(path)?)
}

fn resolve_system(engine: &str, searched: &mut Vec<String>) -> Option<EngineInfo> {
    searched.push("PATH".to_string());
    match which::which(engine) {
        Ok(path) => {
            tracing::debug!("Found {} on PATH: {}", engine, path.display());
            Some(EngineInfo {
                name: engine_name(&path),
                source: EngineSource::System,
                path,
            })
        }
        Err(_) => None,
    }
}

fn engine_name(path: &Path) -> String {
    path.file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pgfkit_testkit::{temp_dir_in_workspace, with_isolated_latex_env};

    #[test]
    fn test_engine_name_strips_extension() {
        assert_eq!(engine_name(Path::new("/usr/bin/pdflatex")), "pdflatex");
        assert_eq!(engine_name(Path::new("C:/tex/lualatex.exe")), "lualatex");
    }

    #[test]
    fn test_not_found_lists_searched_locations() {
        with_isolated_latex_env(None, || {
            let config = LatexConfig {
                engine: "definitely-not-a-latex-engine".to_string(),
                ..LatexConfig::default()
            };
            match resolve_engine(&config) {
                Err(PgfError::TypesetterNotFound { engine, searched }) => {
                    assert_eq!(engine, "definitely-not-a-latex-engine");
                    assert_eq!(searched, "PATH");
                }
                other => panic!("Expected TypesetterNotFound, got {:?}", other),
            }
        });
    }

    #[test]
    fn test_env_override_wins() {
        let temp = temp_dir_in_workspace();
        let fake = temp.path().join("xelatex");
        std::fs::write(&fake, "").unwrap();

        with_isolated_latex_env(Some(&fake), || {
            let info = resolve_engine(&LatexConfig::default()).unwrap();
            assert_eq!(info.source, EngineSource::Env);
            assert_eq!(info.path, fake);
            assert_eq!(info.name, "xelatex");
        });
    }

    #[test]
    fn test_env_override_to_missing_file_fails() {
        let temp = temp_dir_in_workspace();
        let missing = temp.path().join("nope");

        with_isolated_latex_env(Some(&missing), || {
            let err = resolve_engine(&LatexConfig::default()).unwrap_err();
            assert!(matches!(err, PgfError::TypesetterNotFound { .. }));
            assert!(err.to_string().contains("PGFKIT_LATEX="));
        });
    }

    #[test]
    fn test_configured_path() {
        let temp = temp_dir_in_workspace();
        let engine = temp.path().join("lualatex");
        std::fs::write(&engine, "").unwrap();

        with_isolated_latex_env(None, || {
            let config = LatexConfig {
                engine: engine.display().to_string(),
                ..LatexConfig::default()
            };
            let info = resolve_engine(&config).unwrap();
            assert_eq!(info.source, EngineSource::Configured);
            assert_eq!(info.path, engine);
        });
    }

    #[test]
    fn test_relative_paths_are_anchored_to_working_directory() {
        let temp = temp_dir_in_workspace();
        let engine = temp.path().join("pdflatex");
        std::fs::write(&engine, "").unwrap();
        let cwd = std::env::current_dir().unwrap();
        let relative = engine.strip_prefix(&cwd).unwrap().to_path_buf();
        assert!(relative.is_relative());

        with_isolated_latex_env(None, || {
            let config = LatexConfig {
                engine: relative.display().to_string(),
                ..LatexConfig::default()
            };
            let info = resolve_engine(&config).unwrap();
            assert_eq!(info.source, EngineSource::Configured);
            assert_eq!(info.path, engine);
            assert_eq!(info.name, "pdflatex");
        });

        with_isolated_latex_env(Some(&relative), || {
            let info = resolve_engine(&LatexConfig::default()).unwrap();
            assert_eq!(info.source, EngineSource::Env);
            assert_eq!(info.path, engine);
        });
    }
}
