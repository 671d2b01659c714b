use crate::exec::{ExecOptions, exec_latex};
use crate::resolve::resolve_engine;
use crate::view;
use pgfkit_core::builder::tex_path;
use pgfkit_core::{LatexConfig, PgfError, Result, Typesetter};
use std::path::{Path, PathBuf};

/// Lines of engine output carried in a [`PgfError::TypesetFailed`]
const LOG_TAIL_LINES: usize = 20;

/// Runs a LaTeX engine on saved documents
#[derive(Debug, Clone, Default)]
pub struct LatexTypesetter {
    config: LatexConfig,
    open_pdf: bool,
}

impl LatexTypesetter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: LatexConfig) -> Self {
        Self {
            config,
            open_pdf: false,
        }
    }

    pub fn config(&self) -> &LatexConfig {
        &self.config
    }

    /// Typeset `<stem>.tex` and return the path of the produced PDF
    pub fn typeset(&self, stem: &Path) -> Result<PathBuf> {
        let engine = resolve_engine(&self.config)?;
        let tex = tex_path(stem);
        let file_name = tex
            .file_name()
            .ok_or_else(|| PgfError::TypesetterExecFailed(format!("invalid path '{}'", tex.display())))?;
        let working_dir = match stem.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        };

        let mut args = self.config.args.clone();
        args.push(file_name.to_string_lossy().into_owned());

        tracing::info!("Typesetting {} with {}", tex.display(), engine.name);
        let result = exec_latex(ExecOptions {
            engine: engine.path,
            args,
            working_dir: working_dir.clone(),
        })?;

        if !result.success() {
            return Err(PgfError::TypesetFailed {
                exit_code: result.exit_code,
                log_tail: result.log_tail(LOG_TAIL_LINES),
            });
        }

        let mut pdf_name = stem.file_name().unwrap_or_default().to_os_string();
        pdf_name.push(".pdf");
        let pdf = working_dir.join(pdf_name);
        tracing::info!("Typeset {} in {}ms", pdf.display(), result.duration_ms);
        Ok(pdf)
    }
}

impl Typesetter for LatexTypesetter {
    fn open_pdf(&self) -> bool {
        self.open_pdf
    }

    fn set_open_pdf(&mut self, open: bool) {
        self.open_pdf = open;
    }

    fn typeset_file(&mut self, stem: &Path) -> Result<()> {
        let pdf = self.typeset(stem)?;
        if self.open_pdf {
            view::launch(&pdf, self.config.viewer.as_deref())?;
        }
        Ok(())
    }
}
