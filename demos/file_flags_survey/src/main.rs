//! Demo entry point: resolve configuration from a YAML file, `--year`, and
//! terminal prompts, then print it.

use confill::TerminalPrompter;
use tracing_subscriber::{EnvFilter, prelude::*};

use file_flags_survey::cli;
use file_flags_survey::config::resolve;
use file_flags_survey::error::{DemoError, Result};
use file_flags_survey::report::print_report;

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .try_init()?;
    run().map_err(color_eyre::eyre::Report::from)
}

fn run() -> Result<()> {
    let (cli, mut flags) = match cli::parse(std::env::args_os()) {
        Ok(parsed) => parsed,
        Err(clap_err) => {
            if cli::is_display_request(&clap_err) {
                clap_err.exit();
            }
            return Err(DemoError::from(confill::ConfillError::from(clap_err)));
        }
    };
    let prompter = TerminalPrompter::new().with_help(cli.explain);
    let config = resolve(&cli.config, &mut flags, prompter)?;
    print_report(&config)?;
    Ok(())
}
