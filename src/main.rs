//! ANSI Board Renderer - CLI entry point

mod commands;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use ansiboard::cli::{Cli, Commands, ConfigCommands};

/// Install the stderr log subscriber.
///
/// `-v`/`-vv` override `RUST_LOG`; otherwise `RUST_LOG` applies, defaulting
/// to warnings only.
fn init_logging(verbose: u8) {
    let filter = match verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

#[cfg(not(tarpaulin_include))]
fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    let config_path = cli.config.as_deref();

    match cli.command {
        Commands::Render { files, wrap } => commands::render::handle(&files, wrap, config_path),
        Commands::Strip { files } => commands::strip::handle(&files),
        Commands::Detect { files, json } => {
            if !commands::detect::handle(&files, json)? {
                std::process::exit(1);
            }
            Ok(())
        }
        Commands::Config(cmd) => match cmd {
            ConfigCommands::Show => commands::config::handle_show(config_path),
            ConfigCommands::Path => commands::config::handle_path(config_path),
        },
        Commands::Completions { shell } => commands::completions::handle::<Cli>(shell),
    }
}
