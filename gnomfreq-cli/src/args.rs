//! Arguments shared by several subcommands.
use std::str::FromStr;

use anyhow::{Result, anyhow};
use clap::{Arg, ArgMatches};

use gnomfreq_client::GnomadClient;
use gnomfreq_core::ReferenceBuild;

pub const POP_CODE: &str = "pop-code";
pub const DATASET: &str = "dataset";
pub const API: &str = "api";
pub const LOG_LEVEL: &str = "log-level";

pub const DEFAULT_LOG_LEVEL: &str = "info";

pub fn pop_code_arg() -> Arg {
    Arg::new(POP_CODE)
        .long(POP_CODE)
        .visible_alias("pop_code")
        .short('p')
        .required(true)
        .help("Population code to get the frequencies for, e.g. NFE or AFR (case-sensitive)")
}

pub fn dataset_arg() -> Arg {
    Arg::new(DATASET)
        .long(DATASET)
        .short('d')
        .required(true)
        .value_parser(ReferenceBuild::from_str)
        .help("gnomAD release to query: 1 = gnomad_r2_1 (GRCh37), 2 = gnomad_r3_1 (GRCh38)")
}

pub fn api_arg() -> Arg {
    Arg::new(API)
        .long(API)
        .help("gnomAD GraphQL endpoint (defaults to $GNOMAD_API or the public API)")
}

pub fn log_level_arg() -> Arg {
    Arg::new(LOG_LEVEL)
        .long(LOG_LEVEL)
        .default_value(DEFAULT_LOG_LEVEL)
        .help("Log filter, e.g. info, debug or gnomfreq_core=debug")
}

/// Fetch a required string argument.
pub fn required<'a>(matches: &'a ArgMatches, name: &str) -> Result<&'a String> {
    matches
        .get_one::<String>(name)
        .ok_or_else(|| anyhow!("Missing required argument --{}", name))
}

pub fn reference_build(matches: &ArgMatches) -> Result<ReferenceBuild> {
    matches
        .get_one::<ReferenceBuild>(DATASET)
        .copied()
        .ok_or_else(|| anyhow!("Missing required argument --{}", DATASET))
}

/// Build the gnomAD client, honouring `--api` over `$GNOMAD_API`.
pub fn gnomad_client(matches: &ArgMatches) -> Result<GnomadClient> {
    let mut builder = GnomadClient::builder();
    if let Some(api) = matches.get_one::<String>(API) {
        builder = builder.with_api(api.clone());
    }
    builder.finish()
}

pub fn log_level(matches: &ArgMatches) -> &str {
    matches
        .get_one::<String>(LOG_LEVEL)
        .map(String::as_str)
        .unwrap_or(DEFAULT_LOG_LEVEL)
}
