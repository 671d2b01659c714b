//! Fake typesetters

use pgfkit_core::{Result, Typesetter};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

/// One call to [`Typesetter::typeset_file`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypesetCall {
    pub stem: PathBuf,
    pub open_pdf: bool,
}

/// Typesetter that records its calls instead of running LaTeX
///
/// Clones share one call log, so a test keeps a handle while the builder
/// constructs fresh instances through its factory.
#[derive(Debug, Clone, Default)]
pub struct RecordingTypesetter {
    open_pdf: bool,
    calls: Arc<Mutex<Vec<TypesetCall>>>,
}

impl RecordingTypesetter {
    pub fn new() -> Self {
        Self::default()
    }

    /// A fresh instance writing to the same call log
    pub fn fresh(&self) -> Self {
        Self {
            open_pdf: false,
            calls: Arc::clone(&self.calls),
        }
    }

    pub fn calls(&self) -> Vec<TypesetCall> {
        self.calls
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }
}

impl Typesetter for RecordingTypesetter {
    fn open_pdf(&self) -> bool {
        self.open_pdf
    }

    fn set_open_pdf(&mut self, open: bool) {
        self.open_pdf = open;
    }

    fn typeset_file(&mut self, stem: &Path) -> Result<()> {
        self.calls
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .push(TypesetCall {
                stem: stem.to_path_buf(),
                open_pdf: self.open_pdf,
            });
        Ok(())
    }
}

/// Write an executable shell script standing in for a LaTeX engine
///
/// The script records its arguments in `args.log` next to itself, writes
/// an empty `<jobname>.pdf` in its working directory and exits with
/// `exit_code`. Unix only.
#[cfg(unix)]
pub fn write_fake_engine(dir: &Path, exit_code: i32) -> std::io::Result<PathBuf> {
    use std::os::unix::fs::PermissionsExt;

    let script = dir.join("fake-latex");
    let log = dir.join("args.log");
    let body = format!(
        "#!/bin/sh\n\
         PATH=/usr/bin:/bin; export PATH\n\
         echo \"$@\" >> '{log}'\n\
         for last; do :; done\n\
         base=$(basename \"$last\" .tex)\n\
         if [ {code} -eq 0 ]; then : > \"$base.pdf\"; fi\n\
         echo \"! fake engine exit {code}\"\n\
         exit {code}\n",
        log = log.display(),
        code = exit_code,
    );
    std::fs::write(&script, body)?;
    std::fs::set_permissions(&script, std::fs::Permissions::from_mode(0o755))?;
    Ok(script)
}
