use serde::{Deserialize, Serialize};

/// Per-population allele statistics as reported by gnomAD for one variant.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct PopulationRecord {
    pub id: String,
    pub ac: Option<u64>,
    pub an: Option<u64>,
    pub homozygote_count: Option<u64>,
    pub hemizygote_count: Option<u64>,
}

impl PopulationRecord {
    pub fn new(id: &str, ac: u64, an: u64) -> Self {
        PopulationRecord {
            id: id.to_string(),
            ac: Some(ac),
            an: Some(an),
            homozygote_count: None,
            hemizygote_count: None,
        }
    }
}

/// Allele count and total allele count for a single population.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AlleleCounts {
    pub count: u64,
    pub total: u64,
}

impl AlleleCounts {
    pub fn new(count: u64, total: u64) -> Self {
        AlleleCounts { count, total }
    }
}
