//! Doctor command - check that the LaTeX engine resolves

use crate::output::print_json;
use anyhow::Result;
use colored::Colorize;
use pgfkit_core::{LatexConfig, PlotConfig};
use pgfkit_latex::resolve_engine;
use serde::Serialize;
use std::path::Path;

/// Doctor command JSON output schema
#[derive(Debug, Serialize)]
struct DoctorOutput {
    engine: String,
    found: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    path: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    source: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    message: Option<String>,
}

/// Report the resolved engine
///
/// Exits 0 even when no engine is found; the report says so.
pub fn run(config: Option<&Path>, json: bool) -> Result<()> {
    let latex = match config {
        Some(path) => PlotConfig::from_file(path)?.latex,
        None => LatexConfig::default(),
    };

    let report = match resolve_engine(&latex) {
        Ok(info) => DoctorOutput {
            engine: latex.engine.clone(),
            found: true,
            path: Some(info.path.display().to_string()),
            source: Some(info.source.to_string()),
            message: None,
        },
        Err(e) => DoctorOutput {
            engine: latex.engine.clone(),
            found: false,
            path: None,
            source: None,
            message: Some(e.to_string()),
        },
    };

    if json {
        print_json(&serde_json::to_string_pretty(&report)?)?;
        return Ok(());
    }

    match (&report.path, &report.source) {
        (Some(path), Some(source)) => println!(
            "{} {} found at {} ({})",
            "✓".green().bold(),
            report.engine,
            path,
            source
        ),
        _ => println!(
            "{} {}",
            "✗".red().bold(),
            report.message.as_deref().unwrap_or("engine not found")
        ),
    }
    Ok(())
}
