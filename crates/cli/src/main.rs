//! bedrock-auth - resolve AWS Bedrock authentication settings.
//!
//! Responsibilities:
//! - Parse command-line flags into explicit overrides.
//! - Run the resolver, publish the result, and print a summary.
//!
//! Does NOT handle:
//! - Resolution logic (see `crates/config`).
//!
//! Invariants:
//! - Logging goes to stderr so stdout carries only the summary.
//! - Resolution and publishing happen before any other thread is spawned.

mod args;
mod error;
mod output;

use anyhow::{Context, Result};
use args::Cli;
use bedrock_auth_config::{Config, setup_configuration};
use clap::Parser;
use error::ExitCode;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

fn main() {
    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();

    if let Err(e) = run(&cli) {
        eprintln!("Error: {:#}", e);
        std::process::exit(ExitCode::from(&e).as_i32());
    }
}

fn run(cli: &Cli) -> Result<()> {
    let config =
        setup_configuration(cli.setup_options()).context("Failed to resolve configuration")?;

    if cli.check {
        check(&config)?;
    }

    println!("{}", output::render(&config, cli.output)?);
    Ok(())
}

fn check(config: &Config) -> Result<()> {
    config.validate().context("Configuration check failed")?;
    tracing::debug!(mode = %config.auth_mode(), "configuration check passed");
    Ok(())
}
