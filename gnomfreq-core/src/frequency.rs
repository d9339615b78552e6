use crate::consts::FREQUENCY_DECIMALS;
use crate::errors::FrequencyError;
use crate::models::{AlleleCounts, PopulationRecord};

/// Outcome of looking up one population among a variant's records.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PopulationLookup {
    Found(AlleleCounts),
    /// No record carries the requested population id.
    NotFound,
    /// The record exists but its `ac` or `an` is null.
    MissingCounts,
}

///
/// Get the allele count and total allele count for a population.
///
/// The first record whose id equals `pop_code` (exact, case-sensitive) wins.
///
/// # Arguments
/// - records: per-population statistics for one variant and dataset
/// - pop_code: the population of interest, e.g. `NFE`
///
pub fn get_allele_counts(records: &[PopulationRecord], pop_code: &str) -> PopulationLookup {
    match records.iter().find(|record| record.id == pop_code) {
        Some(PopulationRecord {
            ac: Some(count),
            an: Some(total),
            ..
        }) => PopulationLookup::Found(AlleleCounts::new(*count, *total)),
        Some(_) => PopulationLookup::MissingCounts,
        None => PopulationLookup::NotFound,
    }
}

///
/// Derive the variant allele frequency, rounded to six decimal digits.
///
/// # Arguments
/// - count: allele count for the variant
/// - total: total allele count; must be non-zero
///
pub fn get_variant_freq(count: u64, total: u64) -> Result<f64, FrequencyError> {
    if total == 0 {
        return Err(FrequencyError::DivisionByZero);
    }
    Ok(round_to(count as f64 / total as f64, FREQUENCY_DECIMALS))
}

fn round_to(value: f64, decimals: i32) -> f64 {
    let scale = 10f64.powi(decimals);
    (value * scale).round() / scale
}
