//! CLI command structure using clap

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "pgfkit")]
#[command(version, about = "Generate pgfplots documents from plot descriptions", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print the LaTeX source for a plot description
    Render {
        /// Plot description (TOML)
        plot: PathBuf,
    },

    /// Write the LaTeX source to <name>.tex
    ///
    /// Without a name (from --output or [output] name) the document is saved
    /// to .tmp_plot.tex, typeset and opened.
    Save {
        /// Plot description (TOML)
        plot: PathBuf,

        /// Output file stem, without extension
        #[arg(short, long)]
        output: Option<String>,

        /// Typeset after saving
        #[arg(long)]
        typeset: bool,

        /// Typeset and open the PDF after saving
        #[arg(long)]
        show: bool,
    },

    /// Check that a LaTeX engine can be found
    Doctor {
        /// Plot description whose [latex] section is checked
        #[arg(long)]
        config: Option<PathBuf>,

        #[arg(long)]
        json: bool,
    },
}
