//! Profile Resolver CLI
//!
//! Merges a profile directory and everything it inherits from into a single
//! flat profile.

mod cli;
mod commands;
mod context;
mod error;

use std::path::{Path, PathBuf};

use clap::Parser;
use colored::Colorize;
use tracing::Level;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use cli::{Cli, Commands};
use context::RunContext;
use error::Result;

fn main() {
    if let Err(e) = run() {
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Some(cmd) => execute_command(cmd, cli.config.as_deref()),
        None => {
            println!("{} Profile Resolver CLI", "profile-resolve".green().bold());
            println!();
            println!(
                "Run {} for available commands.",
                "profile-resolve --help".cyan()
            );
            Ok(())
        }
    }
}

/// Install the log subscriber; logs go to stderr so stdout stays parseable
fn init_tracing(verbose: bool) {
    if verbose {
        let subscriber = FmtSubscriber::builder()
            .with_max_level(Level::DEBUG)
            .with_target(true)
            .with_writer(std::io::stderr)
            .finish();
        tracing::subscriber::set_global_default(subscriber)
            .expect("Failed to set tracing subscriber");
        tracing::debug!("Verbose mode enabled");
    } else {
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .init();
    }
}

fn execute_command(cmd: Commands, config: Option<&Path>) -> Result<()> {
    let ctx = RunContext::load(config)?;
    match cmd {
        Commands::Resolve { walk, output } => {
            cmd_resolve(&ctx.profile(&walk)?, ctx.output(output)?, ctx.recursive(&walk))
        }
        Commands::Show { walk, json } => {
            commands::run_show(&ctx.profile(&walk)?, ctx.recursive(&walk), json)
        }
        Commands::Check { walk } => commands::run_check(&ctx.profile(&walk)?, ctx.recursive(&walk)),
    }
}

fn cmd_resolve(profile: &Path, output: PathBuf, recursive: bool) -> Result<()> {
    tracing::debug!(
        profile = %profile.display(),
        output = %output.display(),
        recursive,
        "Resolving profile"
    );
    commands::run_resolve(profile, &output, recursive)
}
