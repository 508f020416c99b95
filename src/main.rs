// ==============================================================================
// main.rs - Somalier Sex-Check Reformatter Entry Point
// ==============================================================================
// Description: Reformats a somalier samples report into a MultiQC-ready TSV
// Author: Matt Barham
// Created: 2026-03-02
// Modified: 2026-03-05
// Version: 1.0.0
// ==============================================================================

use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod matcher;
mod models;
mod output;
mod parsers;
mod predictor;
mod processor;

use parsers::SomalierParser;
use predictor::{DEFAULT_FEMALE_CUTOFF, DEFAULT_MALE_CUTOFF};
use processor::SexCheckProcessor;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Somalier samples report to reformat ({sample}.somalier.samples.tsv)
    #[arg(short = 'i', long)]
    input_data: PathBuf,

    /// X het count at or above which a sample is called female
    /// (defaults to 45 when omitted or given without a value)
    #[arg(
        short = 'F',
        long,
        num_args = 0..=1,
        default_value_t = DEFAULT_FEMALE_CUTOFF,
        default_missing_value = "45"
    )]
    female_cutoff: i64,

    /// X het count at or below which a sample is called male
    /// (defaults to 1 when omitted or given without a value)
    #[arg(
        short = 'M',
        long,
        num_args = 0..=1,
        default_value_t = DEFAULT_MALE_CUTOFF,
        default_missing_value = "1"
    )]
    male_cutoff: i64,
}

fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "somalier_reformat=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Somalier sex-check reformatter starting...");

    let args = Args::parse();
    info!("Female cutoff: X_het >= {}", args.female_cutoff);
    info!("Male cutoff: X_het <= {}", args.male_cutoff);

    // 1. Parse and normalize the samples report
    let samples = SomalierParser::parse(&args.input_data)
        .with_context(|| format!("Failed to parse somalier report {:?}", args.input_data))?;
    info!("Parsed {} samples from {:?}", samples.len(), args.input_data);

    // 2. Enrich: uniqueness gate, recode, predict, match
    let processor = SexCheckProcessor::new(args.female_cutoff, args.male_cutoff);
    let records = processor
        .process(samples)
        .context("Sex-check enrichment failed")?;

    // 3. Write the MultiQC report into the working directory
    let result_path = output::write_report(&records, &args.input_data)
        .context("Failed to write MultiQC report")?;

    info!("Reformatting complete, result: {:?}", result_path);
    Ok(())
}
