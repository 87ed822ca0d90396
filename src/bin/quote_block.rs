//! Quote an entire block of requests from a JSON file
//!
//! Reads a JSON array of calculation requests, prices them in parallel
//! against one shared rate table and writes a CSV summary for comparison
//! with the product team's rate sheet.

use std::fs::{self, File};
use std::io::Write;
use std::path::PathBuf;
use std::time::Instant;

use anyhow::{anyhow, Result};
use clap::Parser;
use funeral_pricing::{CalculationParams, QuoteEngine};
use rayon::prelude::*;

#[derive(Parser, Debug)]
#[command(version, about = "Price a block of quote requests in parallel")]
struct Args {
    /// JSON array of calculation requests
    #[arg(default_value = "quote_requests.json")]
    requests: PathBuf,

    /// Rate card CSV export; defaults to the embedded standard card
    #[arg(long)]
    rates: Option<PathBuf>,

    /// Output CSV path
    #[arg(long, default_value = "quote_block_output.csv")]
    output: PathBuf,
}

fn main() -> Result<()> {
    env_logger::init();

    let args = Args::parse();
    let start = Instant::now();

    println!("Loading requests from {}...", args.requests.display());
    let raw = fs::read_to_string(&args.requests)
        .map_err(|e| anyhow!("failed to read {}: {}", args.requests.display(), e))?;
    let requests: Vec<CalculationParams> = serde_json::from_str(&raw)
        .map_err(|e| anyhow!("invalid requests in {}: {}", args.requests.display(), e))?;
    println!("Loaded {} requests in {:?}", requests.len(), start.elapsed());

    let engine = match &args.rates {
        Some(path) => QuoteEngine::from_csv_path(path)
            .map_err(|e| anyhow!("failed to load rate card {}: {}", path.display(), e))?,
        None => QuoteEngine::with_default_card()?,
    };

    println!("Pricing...");
    let pricing_start = Instant::now();

    // One immutable engine shared across all workers
    let results: Vec<_> = requests
        .par_iter()
        .map(|params| engine.calculate(params))
        .collect();

    println!("Pricing complete in {:?}", pricing_start.elapsed());

    let mut file = File::create(&args.output)
        .map_err(|e| anyhow!("failed to create {}: {}", args.output.display(), e))?;

    writeln!(
        file,
        "Request,MainAge,CoverAmount,BenefitOption,MainPremium,ExtendedPremium,TotalPremium,Error"
    )?;

    let mut quoted = 0usize;
    let mut failed = 0usize;

    for (i, (params, result)) in requests.iter().zip(&results).enumerate() {
        match result {
            Ok(quote) => {
                quoted += 1;
                writeln!(
                    file,
                    "{},{},{:.2},\"{}\",{:.2},{:.2},{:.2},",
                    i + 1,
                    params.main_member_age,
                    params.cover_amount,
                    quote.benefit_option_used,
                    quote.main_policy_premium,
                    quote.extended_family_premium,
                    quote.total_premium,
                )?;
            }
            Err(err) => {
                failed += 1;
                writeln!(
                    file,
                    "{},{},{:.2},,,,,\"{}\"",
                    i + 1,
                    params.main_member_age,
                    params.cover_amount,
                    err,
                )?;
            }
        }
    }

    println!("Output written to {}", args.output.display());

    println!("\nBlock Summary:");
    println!("  Requests: {}", requests.len());
    println!("  Quoted:   {}", quoted);
    println!("  Failed:   {}", failed);
    println!("\nTotal time: {:?}", start.elapsed());

    Ok(())
}
