//! rsqrt Precision - Q1.16 fast_rsqrt Error Analysis & Chart Generation
//!
//! Reads the text output of the fixed-point rsqrt test program from stdin,
//! measures each approximation series against the exact reciprocal square
//! root, and writes a log-scale error chart plus summary statistics.

mod data;
mod stats;
mod charts;

use anyhow::Context;
use argh::FromArgs;
use charts::ChartRenderer;
use data::{ChartVariant, ParseError, StreamParser};
use env_logger::Env;
use log::error;
use stats::ErrorCalculator;
use std::io;
use std::path::Path;

/// Precision analysis for Q1.16 fast_rsqrt output streams.
#[derive(FromArgs, Debug)]
struct Args {
    /// newton-raphson iterations captured per row: 1 or 2 (default: 2)
    #[argh(option, short = 'i', default = "2")]
    iterations: u32,
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let args: Args = argh::from_env();
    let variant = match args.iterations {
        1 => ChartVariant::OneIteration,
        2 => ChartVariant::TwoIterations,
        other => anyhow::bail!("Unsupported iteration count {other}: expected 1 or 2"),
    };

    println!("Reading fast_rsqrt output from stdin (filtering log lines)...");

    let series = match StreamParser::new(variant).parse(io::stdin().lock()) {
        Ok(series) => series,
        Err(err @ ParseError::HeaderNotFound(_)) => {
            error!("{err}");
            println!("Failed to parse data.");
            return Ok(());
        }
        Err(err) => return Err(err).context("reading stdin"),
    };

    if series.is_empty() {
        println!("No valid data was read.");
        return Ok(());
    }
    println!("Successfully parsed {} data points.", series.len());

    println!("Calculating errors...");
    let errors = ErrorCalculator::compute_errors(&series.x, &series.approximations);

    println!("Plotting chart...");
    let output = Path::new(variant.output_file());
    ChartRenderer::render_error_chart(variant, &series.x, &errors, output)
        .with_context(|| format!("rendering {}", variant.output_file()))?;
    println!("Chart saved to '{}'", variant.output_file());

    println!();
    println!("--- Error Statistics (Q1.16 Units) ---");
    for (label, series_errors) in variant.series_labels().iter().zip(&errors) {
        let summary = ErrorCalculator::summarize(label, series_errors);
        println!(
            "{} - Mean Error: {:.2}, Max Error: {:.2}",
            summary.label, summary.mean, summary.max
        );
    }

    Ok(())
}
