/// Column of the input sheet holding the variant identifiers.
pub const VARIANT_COLUMN: &str = "SNP";

/// Name of the report written into the output directory.
pub const REPORT_FILE_NAME: &str = "variant_gnomAD_frequencies.txt";

pub const REPORT_HEADER: &str = "variant\tfilter\tpopulation\tvariant_allele_frequency";
