//! Save command - write a plot description to a .tex file

use anyhow::{Context, Result};
use colored::Colorize;
use pgfkit_core::PlotConfig;
use pgfkit_latex::LatexTypesetter;
use std::path::Path;

/// Save the document, optionally typesetting it
///
/// # Arguments
///
/// * `output` - Output stem; falls back to `[output] name`
/// * `typeset` - Typeset after saving
/// * `show` - Typeset and open the PDF (implies `typeset`)
pub fn run(
    plot: &Path,
    output: Option<String>,
    typeset: bool,
    show: bool,
    verbose: bool,
) -> Result<()> {
    let config = PlotConfig::from_file(plot)?;
    let latex = config.latex.clone();
    let mut builder = config
        .to_builder()
        .with_context(|| format!("invalid plot description '{}'", plot.display()))?
        .with_typesetter(move || LatexTypesetter::with_config(latex.clone()));

    let name = output.or(config.output.name);
    if verbose {
        println!(
            "{} Saving to {}.tex",
            "→".cyan(),
            name.as_deref().unwrap_or(pgfkit_core::DEFAULT_NAME)
        );
    }

    let path = builder.save(name.as_deref())?;
    println!("{} Saved {}", "✓".green().bold(), path.display());

    // Saving without a name has already typeset and opened the document
    if name.is_some() && (typeset || show) {
        builder.typeset(show)?;
        println!("{} Typeset {}", "✓".green().bold(), path.display());
    }

    Ok(())
}
