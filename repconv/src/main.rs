use anyhow::Result;
use clap::Parser;
use clap::error::ErrorKind;
use std::ffi::OsString;
use tracing::{debug, info};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

mod cli;
use cli::{Cli, Commands};

/// Outcome of reading the command line
#[derive(Debug)]
enum Invocation {
    Run(Cli),
    /// Usage text for standard output; the process still exits successfully
    Usage(String),
    /// `--help` or `--version`, handled by clap itself
    Exit(clap::Error),
}

fn parse_invocation<I, T>(args: I) -> Invocation
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    match Cli::try_parse_from(args) {
        Ok(cli) => Invocation::Run(cli),
        Err(err) if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            Invocation::Exit(err)
        }
        Err(err) => Invocation::Usage(err.render().to_string()),
    }
}

fn main() -> Result<()> {
    let cli = match parse_invocation(std::env::args_os()) {
        Invocation::Run(cli) => cli,
        Invocation::Exit(err) => err.exit(),
        Invocation::Usage(usage) => {
            print!("{usage}");
            return Ok(());
        }
    };

    // Initialize tracing with appropriate verbosity
    let filter = match cli.verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };

    // Standard output carries the converted document, so logs go to stderr
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)))
        .init();

    let runtime = tokio::runtime::Builder::new_current_thread().enable_all().build()?;
    let config_path = cli.config.as_deref();

    match cli.command {
        Commands::Csv(args) => {
            debug!("Csv command: {:?}", args);
            runtime.block_on(cli::commands::csv::execute(args, config_path))?;
        }
        Commands::Structure(args) => {
            debug!("Structure command: {:?}", args);
            runtime.block_on(cli::commands::structure::execute(args, config_path))?;
        }
    }

    info!("Done");
    Ok(())
}
