//! Rate card sources
//!
//! The standard product card ships embedded in the binary; updated cards
//! are loaded from CSV exports of the business rate sheet. CSV columns:
//! `BenefitOption,AgeBand,Rate`.

use std::error::Error;
use std::path::Path;

use csv::Reader;

use super::RateEntry;

/// Default path to the rate card CSV export
pub const DEFAULT_RATE_CARD_PATH: &str = "data/rate_card.csv";

/// The standard funeral cover rate card
///
/// Monthly rates per R1000 of cover, as published on the current business
/// rate sheet. Every benefit option carries bands for ages 18-65 and 66-75;
/// cover is not written outside that range.
pub fn default_rate_card() -> Vec<RateEntry> {
    vec![
        // Single member
        RateEntry::new("Main Member Only", "(18 - 65)", 2.10),
        RateEntry::new("Main Member Only", "(66 - 75)", 5.95),
        // Member plus one spouse
        RateEntry::new("Main Member and Spouse", "(18 - 65)", 3.35),
        RateEntry::new("Main Member and Spouse", "(66 - 75)", 8.25),
        // Member plus children
        RateEntry::new("Main Member and up to 6 Children", "(18 - 65)", 4.15),
        RateEntry::new("Main Member and up to 6 Children", "(66 - 75)", 9.10),
        // Member, spouse and children
        RateEntry::new("Main Member, Spouse and up to 6 Children", "(18 - 65)", 5.03),
        RateEntry::new("Main Member, Spouse and up to 6 Children", "(66 - 75)", 10.50),
        // Two-spouse tiers
        RateEntry::new("Main Member and 2 Spouses", "(18 - 65)", 4.60),
        RateEntry::new("Main Member and 2 Spouses", "(66 - 75)", 9.85),
        RateEntry::new("Main Member, 2 Spouses and up to 6 Children", "(18 - 65)", 6.25),
        RateEntry::new("Main Member, 2 Spouses and up to 6 Children", "(66 - 75)", 11.95),
        // Extended family members, priced per person
        RateEntry::new("Extended family", "(18 - 65)", 2.30),
        RateEntry::new("Extended family", "(66 - 75)", 7.48),
    ]
}

/// Load rate card rows from a CSV file
pub fn load_rate_card<P: AsRef<Path>>(path: P) -> Result<Vec<RateEntry>, Box<dyn Error>> {
    let mut reader = Reader::from_path(path)?;
    let mut rows = Vec::new();

    for result in reader.deserialize() {
        let row: RateEntry = result?;
        rows.push(row);
    }

    Ok(rows)
}

/// Load rate card rows from any reader (e.g., string buffer, network stream)
pub fn load_rate_card_from_reader<R: std::io::Read>(reader: R) -> Result<Vec<RateEntry>, Box<dyn Error>> {
    let mut csv_reader = Reader::from_reader(reader);
    let mut rows = Vec::new();

    for result in csv_reader.deserialize() {
        let row: RateEntry = result?;
        rows.push(row);
    }

    Ok(rows)
}
