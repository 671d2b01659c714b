//! Render command - print the LaTeX source of a plot description

use crate::output::print_raw;
use anyhow::{Context, Result};
use pgfkit_core::PlotConfig;
use std::path::Path;

pub fn run(plot: &Path) -> Result<()> {
    let config = PlotConfig::from_file(plot)?;
    let builder = config
        .to_builder()
        .with_context(|| format!("invalid plot description '{}'", plot.display()))?;

    print_raw(&builder.render())?;
    Ok(())
}
