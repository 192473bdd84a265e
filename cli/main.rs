//! sdstats command-line analyzer
//!
//! Run with: `cargo run --release -- [VALUES]... [--file PATH] [--format table|json|csv]`
//!
//! Values that are not numbers are skipped with a warning (or rejected with
//! `--strict`). Logs go to stderr; set `RUST_LOG` or pass `-v` to see more.

mod args;
mod input;
mod report;

use std::fs;

use anyhow::{Context, Result};
use clap::Parser;
use sdstats::calculate_stats;
use tracing::info;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

use crate::args::{Args, Format};
use crate::input::{gather_tokens, validate_tokens};
use crate::report::{render_csv, render_json, render_table};

fn init_logging(verbose: u8) {
    let env_filter = EnvFilter::builder()
        .with_default_directive(
            match verbose {
                0 => LevelFilter::WARN,
                1 => LevelFilter::INFO,
                2 => LevelFilter::DEBUG,
                _3_or_more => LevelFilter::TRACE,
            }
            .into(),
        )
        .from_env_lossy();

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    let tokens = gather_tokens(&args.values, &args.file).context("could not collect input values")?;
    let sample = validate_tokens(&tokens, args.strict)?;

    let Some(stats) = calculate_stats(&sample.values) else {
        println!("No valid numeric values");
        return Ok(());
    };
    info!(count = stats.count, rejected = sample.rejected.len(), "computed statistics");

    match args.format {
        Format::Table => print!("{}", render_table(&stats, args.precision)),
        Format::Json => println!("{}", render_json(&stats).context("could not encode JSON")?),
        Format::Csv => print!("{}", render_csv(&stats, args.precision)),
    }

    if let Some(path) = &args.export {
        fs::write(path, render_csv(&stats, args.precision))
            .with_context(|| format!("failed to write {}", path.display()))?;
        info!(path = %path.display(), "exported CSV report");
    }

    Ok(())
}
