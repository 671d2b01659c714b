use pgfkit_core::{PgfError, Result};
use std::path::PathBuf;
use std::process::Command;
use std::time::Instant;

/// Options for running the LaTeX engine
#[derive(Debug, Clone)]
pub struct ExecOptions {
    pub engine: PathBuf,
    pub args: Vec<String>,
    pub working_dir: PathBuf,
}

/// Result of one engine run
#[derive(Debug, Clone)]
pub struct ExecResult {
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
    pub duration_ms: u64,
}

impl ExecResult {
    pub fn success(&self) -> bool {
        self.exit_code == 0
    }

    /// Last `lines` lines of stdout, where LaTeX reports errors
    pub fn log_tail(&self, lines: usize) -> String {
        let all: Vec<&str> = self.stdout.lines().collect();
        let start = all.len().saturating_sub(lines);
        all[start..].join("\n")
    }
}

/// Run the engine and capture its output
///
/// A non-zero exit is reported in [`ExecResult`], not as an error.
pub fn exec_latex(options: ExecOptions) -> Result<ExecResult> {
    tracing::debug!(
        "Running {} {} in {}",
        options.engine.display(),
        options.args.join(" "),
        options.working_dir.display()
    );

    let start = Instant::now();
    let output = Command::new(&options.engine)
        .args(&options.args)
        .current_dir(&options.working_dir)
        .output()
        .map_err(|e| {
            PgfError::TypesetterExecFailed(format!(
                "failed to execute {}: {}",
                options.engine.display(),
                e
            ))
        })?;

    Ok(ExecResult {
        exit_code: output.status.code().unwrap_or(-1),
        stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
        stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        duration_ms: start.elapsed().as_millis() as u64,
    })
}
