use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BuildSelectorError {
    #[error(
        "Invalid reference build selector: {0}. Use 1 (gnomad_r2_1, GRCh37) or 2 (gnomad_r3_1, GRCh38)"
    )]
    InvalidBuildSelector(String),
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FrequencyError {
    #[error("Can't derive an allele frequency from a total allele count of zero")]
    DivisionByZero,
}

/// Why a single lookup against the remote API produced no usable response.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FetchFailure {
    #[error("Request to the gnomAD API failed: {0}")]
    Transport(String),

    #[error("gnomAD API responded with HTTP status {0}")]
    Status(u16),

    #[error("gnomAD API reported errors: {}", .0.join("; "))]
    Api(Vec<String>),

    #[error("Can't decode the gnomAD API response: {0}")]
    Decode(String),
}

#[derive(Error, Debug)]
pub enum DriverError {
    #[error("Failed to record the result for variant {variant}: {source}")]
    Sink {
        variant: String,
        #[source]
        source: std::io::Error,
    },
}

pub type DriverResult<T> = std::result::Result<T, DriverError>;
