use clap::Parser;
use color_eyre::eyre::Result;
use tracing_subscriber::EnvFilter;

use tfdoc::cli::Cli;
use tfdoc::report;
use tfdoc::terraform::StateDocument;

fn main() -> Result<()> {
    color_eyre::install()?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let state = StateDocument::load(&cli.tfstate)?;
    tracing::info!(
        version = %state.terraform_version,
        resources = state.resources.len(),
        "state file decoded"
    );

    report::write_report(&state, &cli.name, &cli.out)?;
    println!(
        "Successfully parsed state file, html output is saved to the following location: {}",
        cli.out.display()
    );

    Ok(())
}
