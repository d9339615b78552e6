use std::fmt::{self, Display};

use super::build::DataCategory;
use super::population::AlleleCounts;
use crate::consts::NOT_AVAILABLE;
use crate::errors::FetchFailure;

/// How a single variant was (or wasn't) resolved.
#[derive(Debug, Clone, PartialEq)]
pub enum Resolution {
    /// A frequency was derived for the requested population.
    Resolved {
        category: DataCategory,
        population: String,
        counts: AlleleCounts,
        frequency: f64,
    },
    /// The dataset was found but has no usable counts for the population.
    PopulationUnavailable { category: DataCategory },
    /// Neither the exome nor the genome dataset has the variant.
    NoData,
    /// The API call itself failed.
    FetchFailed(FetchFailure),
}

/// The final, immutable record for one input variant.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolutionResult {
    pub variant_id: String,
    pub resolution: Resolution,
}

impl ResolutionResult {
    pub fn new(variant_id: &str, resolution: Resolution) -> Self {
        ResolutionResult {
            variant_id: variant_id.to_string(),
            resolution,
        }
    }

    /// The dataset the row was resolved from, the `filter` column of the report.
    pub fn filter(&self) -> &str {
        match &self.resolution {
            Resolution::Resolved { category, .. }
            | Resolution::PopulationUnavailable { category } => category.as_str(),
            Resolution::NoData | Resolution::FetchFailed(_) => NOT_AVAILABLE,
        }
    }

    pub fn population(&self) -> &str {
        match &self.resolution {
            Resolution::Resolved { population, .. } => population,
            _ => NOT_AVAILABLE,
        }
    }

    pub fn frequency(&self) -> Option<f64> {
        match &self.resolution {
            Resolution::Resolved { frequency, .. } => Some(*frequency),
            _ => None,
        }
    }

    ///
    /// Render the result as one tab-separated report row (without the newline):
    /// `variant`, `filter`, `population`, `variant_allele_frequency`.
    ///
    pub fn to_row(&self) -> String {
        let frequency = match self.frequency() {
            Some(frequency) => format_frequency(frequency),
            None => NOT_AVAILABLE.to_string(),
        };
        format!(
            "{}\t{}\t{}\t{}",
            self.variant_id,
            self.filter(),
            self.population(),
            frequency
        )
    }
}

///
/// Render a frequency the way reports have always shown it: the shortest decimal that
/// round-trips, always with a fractional part (`1.0`), and scientific notation with a
/// two-digit exponent below `1e-4` (`1e-05`).
///
pub fn format_frequency(frequency: f64) -> String {
    if frequency != 0.0 && frequency.abs() < 1e-4 {
        let scientific = format!("{:e}", frequency);
        return match scientific.split_once('e') {
            Some((mantissa, exponent)) => {
                let (sign, digits) = match exponent.strip_prefix('-') {
                    Some(digits) => ('-', digits),
                    None => ('+', exponent),
                };
                format!("{mantissa}e{sign}{digits:0>2}")
            }
            None => scientific,
        };
    }

    let decimal = frequency.to_string();
    if decimal.contains('.') {
        decimal
    } else {
        format!("{decimal}.0")
    }
}

impl Display for ResolutionResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_row())
    }
}
