// colorsh/src/main.rs
//! colorsh entry point.
//!
//! Resolves options (CLI plus optional preset), assembles the composite
//! regex once, and hands the engine to the stdin or file driver.

use anyhow::{Context, Result};
use clap::Parser;

use colorsh::cli::Cli;
use colorsh::commands::colorize;
use colorsh::logger;
use colorsh::options::RunOptions;
use colorsh_core::{assemble, compile_erase, Colorizer};

#[tokio::main]
async fn main() -> Result<()> {
    let args = Cli::parse();

    if args.debug {
        logger::init_logger(Some(log::LevelFilter::Debug));
    } else if args.quiet {
        logger::init_logger(Some(log::LevelFilter::Error));
    } else {
        logger::init_logger(None);
    }

    let opts = RunOptions::from_cli(&args)?;

    let composite =
        assemble(&opts.patterns, opts.flags).context("Failed to assemble color patterns")?;
    let erase = opts
        .erase
        .as_deref()
        .map(compile_erase)
        .transpose()
        .context("Failed to compile erase pattern")?;
    let colorizer = Colorizer::new(composite, erase, opts.styles.clone(), opts.force);

    if opts.from_stdin {
        colorize::run_stdin(&colorizer, &opts).await
    } else {
        colorize::run_files(&colorizer, &opts)
    }
}
