use std::io;

use anyhow::Result;
use clap::ArgMatches;

use gnomfreq_core::{PacingPolicy, Resolver, ResolverConfig};
use gnomfreq_io::ReportWriter;

use super::cli::VARIANT;
use crate::args::{POP_CODE, gnomad_client, log_level, reference_build, required};
use crate::logging::init_stderr_log;

/// Resolve one variant and print the header and its row to stdout.
pub fn run_lookup(matches: &ArgMatches) -> Result<()> {
    init_stderr_log(log_level(matches));

    let variant = required(matches, VARIANT)?;
    let pop_code = required(matches, POP_CODE)?;
    let build = reference_build(matches)?;

    let config = ResolverConfig::new(build, pop_code).with_pacing(PacingPolicy::disabled());
    let resolver = Resolver::new(gnomad_client(matches)?, config);
    let result = resolver.resolve_variant(variant);

    let mut report = ReportWriter::new(io::stdout().lock())?;
    report.write_result(&result)?;

    Ok(())
}
