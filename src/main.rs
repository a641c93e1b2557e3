use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use texclean::cleaner;
use texclean::cli::args::Cli;
use texclean::cli::output::ConsoleReporter;

fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.no_color {
        colored::control::set_override(false);
    }

    let default_filter = if cli.verbose { "texclean=debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .with_writer(std::io::stderr)
        .init();

    let mut reporter = ConsoleReporter;
    cleaner::clean(&cli.root(), &mut reporter)?;

    Ok(())
}
