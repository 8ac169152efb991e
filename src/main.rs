//! RecCli - CLI entry point

mod cli;
mod commands;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use cli::{Cli, Commands, ConfigCommands};

/// Environment variable holding the log filter (e.g. `RECCLI_LOG=debug`).
const LOG_ENV: &str = "RECCLI_LOG";

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .try_init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Export {
            capture,
            format,
            output,
            session_id,
            duration_secs,
            duration,
            timestamp,
            metadata,
            force,
            no_converter,
        } => commands::export::handle(commands::export::ExportArgs {
            capture,
            format,
            output,
            session_id,
            duration_secs,
            duration,
            timestamp,
            metadata,
            force,
            no_converter,
        }),
        Commands::Transcript {
            capture,
            no_converter,
        } => commands::transcript::handle(&capture, no_converter),
        Commands::Formats => commands::formats::handle(),
        Commands::Config(cmd) => match cmd {
            ConfigCommands::Show => commands::config::handle_show(),
            ConfigCommands::Edit => commands::config::handle_edit(),
        },
        Commands::Completions { shell } => commands::completions::handle::<Cli>(shell),
    }
}
