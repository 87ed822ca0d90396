//! Age-banded rate table keyed by benefit option
//!
//! The business maintains the rate card as a flat list of
//! (benefit option, age band, rate) rows. `RateTable::build` ingests those
//! rows once, normalizes the benefit-option keys, parses the textual age
//! bands and groups them into an immutable lookup structure. After
//! construction the table is read-only and can be shared freely across
//! threads.

use std::collections::HashMap;

use regex::Regex;
use serde::Deserialize;

use crate::error::PricingError;

/// A raw rate card row as maintained by the business
///
/// `age_band` is textual, formatted `"(min - max)"`. `rate` is the monthly
/// premium per R1000 of cover.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RateEntry {
    #[serde(rename = "BenefitOption")]
    pub benefit_option: String,
    #[serde(rename = "AgeBand")]
    pub age_band: String,
    #[serde(rename = "Rate")]
    pub rate: f64,
}

impl RateEntry {
    /// Create a rate entry from its parts
    pub fn new(benefit_option: impl Into<String>, age_band: impl Into<String>, rate: f64) -> Self {
        Self {
            benefit_option: benefit_option.into(),
            age_band: age_band.into(),
            rate,
        }
    }
}

/// A parsed age band with its rate, closed at both ends
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RateBand {
    pub min_age: u8,
    pub max_age: u8,
    pub rate: f64,
}

impl RateBand {
    /// Whether this band covers the given age (inclusive at both ends)
    pub fn covers(&self, age: u8) -> bool {
        age >= self.min_age && age <= self.max_age
    }
}

/// Normalize a raw benefit-option key from the rate card
///
/// Spreadsheet exports wrap keys in literal quote characters and wrap long
/// option names across lines. Normalization strips every `"` character,
/// collapses each embedded newline run to a single space, and trims the
/// result. Keys that normalize to the same string are the same benefit
/// option.
pub fn normalize_benefit_key(raw: &str) -> String {
    let stripped: String = raw.chars().filter(|&c| c != '"').collect();

    let mut collapsed = String::with_capacity(stripped.len());
    let mut chars = stripped.chars().peekable();
    while let Some(c) = chars.next() {
        if c == '\n' || c == '\r' {
            while matches!(chars.peek(), Some(&('\n' | '\r'))) {
                chars.next();
            }
            collapsed.push(' ');
        } else {
            collapsed.push(c);
        }
    }

    collapsed.trim().to_string()
}

/// Immutable rate lookup structure built once from raw rate card rows
///
/// Bands for each benefit option are sorted ascending by `min_age`. The
/// shipped card has non-overlapping bands, so lookup takes the first band
/// covering the requested age.
#[derive(Debug, Clone)]
pub struct RateTable {
    bands: HashMap<String, Vec<RateBand>>,
}

impl RateTable {
    /// Build a rate table from raw rate card rows
    ///
    /// Fails with `PricingError::Configuration` if any age band does not
    /// parse as `"min - max"` or is inverted.
    pub fn build(rows: Vec<RateEntry>) -> Result<Self, PricingError> {
        let band_pattern = Regex::new(r"(\d+)\s*-\s*(\d+)").expect("valid age band pattern");

        let mut bands: HashMap<String, Vec<RateBand>> = HashMap::new();

        for row in rows {
            let key = normalize_benefit_key(&row.benefit_option);
            let band = parse_age_band(&band_pattern, &row.age_band, row.rate)?;
            bands.entry(key).or_default().push(band);
        }

        for group in bands.values_mut() {
            group.sort_by_key(|band| band.min_age);
        }

        log::debug!(
            "rate table built: {} benefit options, {} bands",
            bands.len(),
            bands.values().map(Vec::len).sum::<usize>()
        );

        Ok(Self { bands })
    }

    /// Look up the monthly rate per R1000 for a benefit option and age
    ///
    /// Returns the rate of the first band covering `age`. Fails with
    /// `PricingError::RateNotFound` if the option is absent from the card
    /// or no band covers the age.
    pub fn lookup(&self, key: &str, age: u8) -> Result<f64, PricingError> {
        let normalized = normalize_benefit_key(key);

        let group = self
            .bands
            .get(&normalized)
            .ok_or_else(|| PricingError::rate_not_found(normalized.clone(), age))?;

        group
            .iter()
            .find(|band| band.covers(age))
            .map(|band| band.rate)
            .ok_or_else(|| PricingError::rate_not_found(normalized, age))
    }

    /// Whether the card carries any bands for the given benefit option
    pub fn has_option(&self, key: &str) -> bool {
        self.bands.contains_key(&normalize_benefit_key(key))
    }

    /// Number of distinct benefit options on the card
    pub fn option_count(&self) -> usize {
        self.bands.len()
    }

    /// The sorted bands for a benefit option, if present
    pub fn bands_for(&self, key: &str) -> Option<&[RateBand]> {
        self.bands
            .get(&normalize_benefit_key(key))
            .map(Vec::as_slice)
    }
}

/// Parse a textual age band like `"(18 - 65)"` into a `RateBand`
fn parse_age_band(pattern: &Regex, raw: &str, rate: f64) -> Result<RateBand, PricingError> {
    let captures = pattern.captures(raw).ok_or_else(|| {
        PricingError::Configuration(format!("unparseable age band \"{}\"", raw.trim()))
    })?;

    // Both captures are \d+ so the only parse failure is u8 overflow
    let min_age: u8 = captures[1].parse().map_err(|_| {
        PricingError::Configuration(format!("age out of range in band \"{}\"", raw.trim()))
    })?;
    let max_age: u8 = captures[2].parse().map_err(|_| {
        PricingError::Configuration(format!("age out of range in band \"{}\"", raw.trim()))
    })?;

    if min_age > max_age {
        return Err(PricingError::Configuration(format!(
            "inverted age band \"{}\"",
            raw.trim()
        )));
    }

    Ok(RateBand { min_age, max_age, rate })
}
