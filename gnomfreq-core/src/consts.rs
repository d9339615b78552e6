/// Marker written in place of any value that could not be resolved.
pub const NOT_AVAILABLE: &str = "N/A";

/// Number of decimal digits kept when deriving an allele frequency.
pub const FREQUENCY_DECIMALS: i32 = 6;

/// Completed variants between two pacing pauses.
pub const DEFAULT_PACING_BATCH: u64 = 10;

/// Length of a pacing pause, in milliseconds.
pub const DEFAULT_PACING_PAUSE_MS: u64 = 1000;

/// Build tokens understood by the gnomAD API.
pub const GNOMAD_R2_1_TOKEN: &str = "gnomad_r2_1";
pub const GNOMAD_R3_1_TOKEN: &str = "gnomad_r3_1";
