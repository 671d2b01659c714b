mod cli;
mod commands;
mod output;

use clap::Parser;
use cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();
    log::debug!("pgfkit {}", env!("CARGO_PKG_VERSION"));

    let result = match cli.command {
        Commands::Render { plot } => commands::render::run(&plot),
        Commands::Save {
            plot,
            output,
            typeset,
            show,
        } => commands::save::run(&plot, output, typeset, show, cli.verbose),
        Commands::Doctor { config, json } => commands::doctor::run(config.as_deref(), json),
    };

    if let Err(e) = result {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}
