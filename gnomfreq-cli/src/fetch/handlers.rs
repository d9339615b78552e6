use std::fs::create_dir_all;
use std::io;
use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::ArgMatches;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::info;

use gnomfreq_core::consts::{DEFAULT_PACING_BATCH, DEFAULT_PACING_PAUSE_MS};
use gnomfreq_core::{PacingPolicy, ResolutionResult, Resolver, ResolverConfig, ResultSink};
use gnomfreq_io::{ReportWriter, read_variant_list, report_path};

use super::cli::{BATCH_SIZE, OUTPUT, PAUSE_MS, REPORT_ZERO, VAR_INPUT};
use crate::args::{POP_CODE, gnomad_client, log_level, reference_build, required};
use crate::logging::init_run_log;

/// Advances a progress bar as rows reach the wrapped sink.
struct ProgressSink<'a, K: ResultSink> {
    inner: &'a mut K,
    bar: ProgressBar,
}

impl<K: ResultSink> ResultSink for ProgressSink<'_, K> {
    fn record(&mut self, result: &ResolutionResult) -> io::Result<()> {
        self.inner.record(result)?;
        self.bar.set_message(result.variant_id.clone());
        self.bar.inc(1);
        Ok(())
    }
}

pub fn pacing_policy(matches: &ArgMatches) -> PacingPolicy {
    let every = matches
        .get_one::<u64>(BATCH_SIZE)
        .copied()
        .unwrap_or(DEFAULT_PACING_BATCH);
    let pause = matches
        .get_one::<u64>(PAUSE_MS)
        .copied()
        .unwrap_or(DEFAULT_PACING_PAUSE_MS);
    PacingPolicy::new(every, Duration::from_millis(pause))
}

/// Execute the fetch command: variant list in, frequency report out.
/// # Arguments
/// - matches: matched items from CLAP args
pub fn run_fetch(matches: &ArgMatches) -> Result<()> {
    let var_input = PathBuf::from(required(matches, VAR_INPUT)?);
    let output = PathBuf::from(required(matches, OUTPUT)?);
    let pop_code = required(matches, POP_CODE)?;
    let build = reference_build(matches)?;

    create_dir_all(&output)
        .with_context(|| format!("Failed to create output directory {}", output.display()))?;
    let log_path = init_run_log(&output, log_level(matches))?;

    // read the list before touching the previous report
    let variants = read_variant_list(&var_input)
        .with_context(|| format!("Failed to read variants from {}", var_input.display()))?;
    info!("generating a list of snps from the file: {}", var_input.display());

    let mut report = ReportWriter::create(&output)
        .with_context(|| format!("Failed to create the report in {}", output.display()))?;

    let config = ResolverConfig::new(build, pop_code)
        .with_pacing(pacing_policy(matches))
        .with_report_zero_frequency(matches.get_flag(REPORT_ZERO));
    let mut resolver = Resolver::new(gnomad_client(matches)?, config);

    println!(
        "Searching gnomAD ({}) for {} variants in the {} population",
        build,
        variants.len(),
        pop_code
    );

    let bar = ProgressBar::new(variants.len() as u64);
    bar.set_style(
        ProgressStyle::with_template("[{elapsed_precise}] {bar:40.cyan/blue} {pos:>7}/{len:7} {msg}")?
            .progress_chars("##-"),
    );
    let mut sink = ProgressSink {
        inner: &mut report,
        bar: bar.clone(),
    };

    let summary = resolver.run(&variants, &mut sink)?;
    bar.finish_and_clear();

    println!("{}", summary);
    println!("Report written to {}", report_path(&output).display());
    println!("Log written to {}", log_path.display());

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::fs;

    use gnomfreq_io::REPORT_HEADER;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    fn test_unreadable_input_keeps_previous_report() {
        let tempdir = tempfile::tempdir().unwrap();
        let output = tempdir.path().join("out");
        let previous = format!("{REPORT_HEADER}\nrs1\texome\tNFE\t0.5\n");
        fs::create_dir_all(&output).unwrap();
        fs::write(report_path(&output), &previous).unwrap();

        let missing = tempdir.path().join("missing.csv");
        let matches = crate::build_parser()
            .try_get_matches_from([
                "gnomfreq",
                "fetch",
                "--var-input",
                missing.to_str().unwrap(),
                "--output",
                output.to_str().unwrap(),
                "--pop-code",
                "NFE",
                "--dataset",
                "1",
            ])
            .unwrap();
        let (_, matches) = matches.subcommand().unwrap();

        assert!(run_fetch(matches).is_err());
        assert_eq!(fs::read_to_string(report_path(&output)).unwrap(), previous);
    }
}
