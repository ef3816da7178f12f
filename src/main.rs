mod cli;
mod cli_help;
mod commands;
mod config;
mod error;
mod git;
mod history;
mod metrics;
mod model;
mod report_helpers;
#[cfg(test)]
mod testing;

use std::io;

use clap::{CommandFactory, Parser};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use cli::{Cli, Commands};

/// Logs go to stderr; `RUST_LOG` wins over `-v`.
fn init_logging(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .with(filter)
        .init();
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let config_file = cli.config.as_deref();
    match cli.command {
        Commands::Metrics {
            selection,
            limit,
            clear_cache,
        } => {
            let overrides = selection.overrides(limit, cli.cache_dir.clone());
            let settings = commands::load_settings(&selection.repo, config_file, overrides)?;
            commands::run_metrics(settings, selection.json, clear_cache)
        }
        Commands::Impact { selection } => {
            let overrides = selection.overrides(None, cli.cache_dir.clone());
            let settings = commands::load_settings(&selection.repo, config_file, overrides)?;
            commands::run_impact(settings, selection.json)
        }
        Commands::Plugins { json } => commands::run_plugins(json),
        Commands::ClearCache => commands::run_clear_cache(cli.cache_dir.clone(), config_file),
        Commands::Completions { shell } => {
            clap_complete::generate(shell, &mut Cli::command(), "gitsect", &mut io::stdout());
            Ok(())
        }
    }
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(err) = run(cli) {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}
