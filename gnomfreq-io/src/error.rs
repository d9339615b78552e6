use std::io;
use thiserror::Error;

/// Error type for reading variant lists.
#[derive(Error, Debug)]
pub enum VariantListError {
    /// The file extension isn't a supported spreadsheet or delimited text format.
    #[error(
        "Unsupported variant list format: {0}. Use a spreadsheet (.xlsx, .xls, .ods) or a .csv, .tsv or .txt file (optionally .gz)"
    )]
    UnsupportedFormat(String),

    /// The workbook opened but has no worksheet to read.
    #[error("Workbook {0} has no worksheets")]
    NoWorksheet(String),

    /// The header row has no column with the expected name.
    #[error("Variant list has no `{0}` column")]
    MissingColumn(String),

    /// The list parsed but contains no identifiers.
    #[error("Variant list contains no variants")]
    EmptyList,

    #[error(transparent)]
    Csv(#[from] csv::Error),

    #[error(transparent)]
    Workbook(#[from] calamine::Error),

    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

/// Result type alias for variant list operations.
pub type Result<T> = std::result::Result<T, VariantListError>;
