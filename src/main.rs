//! Funeral Pricing CLI
//!
//! Command-line interface for quoting funeral cover premiums

use std::fs;
use std::path::PathBuf;

use anyhow::{anyhow, Result};
use clap::Parser;
use funeral_pricing::{CalculationParams, FamilyMember, QuoteEngine};

#[derive(Parser, Debug)]
#[command(version, about = "Quote funeral cover premiums from the rate card")]
struct Args {
    /// Rate card CSV export; defaults to the embedded standard card
    #[arg(long)]
    rates: Option<PathBuf>,

    /// Calculation request as a JSON file; defaults to a sample request
    #[arg(long)]
    params: Option<PathBuf>,

    /// Emit the full result as JSON instead of the breakdown table
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    env_logger::init();

    let args = Args::parse();

    println!("Funeral Pricing v0.1.0");
    println!("======================\n");

    let engine = match &args.rates {
        Some(path) => QuoteEngine::from_csv_path(path)
            .map_err(|e| anyhow!("failed to load rate card {}: {}", path.display(), e))?,
        None => QuoteEngine::with_default_card()?,
    };
    match &args.rates {
        Some(path) => println!(
            "Rate card: {} ({} benefit options)",
            path.display(),
            engine.rates().option_count()
        ),
        None => println!(
            "Rate card: embedded standard card ({} benefit options)",
            engine.rates().option_count()
        ),
    }

    let params = match &args.params {
        Some(path) => {
            let raw = fs::read_to_string(path)
                .map_err(|e| anyhow!("failed to read {}: {}", path.display(), e))?;
            serde_json::from_str(&raw)
                .map_err(|e| anyhow!("invalid request in {}: {}", path.display(), e))?
        }
        None => sample_request(),
    };

    println!(
        "Request: main member age {}, cover R{:.2}, {} additional member(s)\n",
        params.main_member_age,
        params.cover_amount,
        params.additional_members.len()
    );

    let result = engine.calculate(&params)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
        return Ok(());
    }

    println!("Benefit option: {}\n", result.benefit_option_used);

    println!("Breakdown:");
    println!("{:<14} {:>4} {:>12} {:>12}", "Life", "Age", "Cover", "Premium");
    println!("{}", "-".repeat(46));

    let main = &result.breakdown.main_member;
    println!(
        "{:<14} {:>4} {:>12.2} {:>12.2}",
        "Main member", main.age, main.cover_amount, main.premium
    );
    for line in &result.breakdown.immediate_family {
        let age = line.age.map_or("-".to_string(), |a| a.to_string());
        println!(
            "{:<14} {:>4} {:>12.2} {:>12.2}",
            format!("{:?}", line.relationship),
            age,
            line.cover_amount,
            line.premium
        );
    }
    for line in &result.breakdown.extended_family {
        println!(
            "{:<14} {:>4} {:>12.2} {:>12.2}",
            "Extended", line.age, line.cover_amount, line.premium
        );
    }

    println!("\nSummary:");
    println!("  Main policy premium:     R{:.2}", result.main_policy_premium);
    println!("  Extended family premium: R{:.2}", result.extended_family_premium);
    println!("  Total monthly premium:   R{:.2}", result.total_premium);

    Ok(())
}

/// Sample request: member, spouse, one child and an extended family member
fn sample_request() -> CalculationParams {
    CalculationParams::with_members(
        35,
        50_000.0,
        vec![
            FamilyMember::spouse(),
            FamilyMember::child(),
            FamilyMember::extended(70),
        ],
    )
}
