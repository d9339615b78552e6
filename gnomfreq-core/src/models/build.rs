use std::fmt::{self, Display};
use std::str::FromStr;

use crate::consts::{GNOMAD_R2_1_TOKEN, GNOMAD_R3_1_TOKEN};
use crate::errors::BuildSelectorError;

///
/// The gnomAD release (and with it the genome reference build) that variant
/// identifiers are interpreted against. Chosen once per run.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReferenceBuild {
    /// gnomAD v2.1, GRCh37 coordinates.
    GnomadR2_1,
    /// gnomAD v3.1, GRCh38 coordinates.
    GnomadR3_1,
}

impl ReferenceBuild {
    ///
    /// Map the numeric selector used on the command line to a build.
    ///
    /// # Arguments
    /// - selector: 1 for gnomad_r2_1, 2 for gnomad_r3_1
    ///
    pub fn from_selector(selector: i64) -> Result<Self, BuildSelectorError> {
        match selector {
            1 => Ok(ReferenceBuild::GnomadR2_1),
            2 => Ok(ReferenceBuild::GnomadR3_1),
            other => Err(BuildSelectorError::InvalidBuildSelector(other.to_string())),
        }
    }

    /// The dataset token sent to the API.
    pub fn token(&self) -> &'static str {
        match self {
            ReferenceBuild::GnomadR2_1 => GNOMAD_R2_1_TOKEN,
            ReferenceBuild::GnomadR3_1 => GNOMAD_R3_1_TOKEN,
        }
    }
}

impl FromStr for ReferenceBuild {
    type Err = BuildSelectorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if let Ok(selector) = s.parse::<i64>() {
            return ReferenceBuild::from_selector(selector);
        }
        match s {
            GNOMAD_R2_1_TOKEN => Ok(ReferenceBuild::GnomadR2_1),
            GNOMAD_R3_1_TOKEN => Ok(ReferenceBuild::GnomadR3_1),
            _ => Err(BuildSelectorError::InvalidBuildSelector(s.to_string())),
        }
    }
}

impl Display for ReferenceBuild {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.token())
    }
}

/// Which gnomAD sequencing dataset a frequency is read from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DataCategory {
    Exome,
    Genome,
}

impl DataCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            DataCategory::Exome => "exome",
            DataCategory::Genome => "genome",
        }
    }
}

impl Display for DataCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
