mod args;
mod fetch;
mod logging;
mod lookup;

use anyhow::Result;
use clap::Command;

pub mod consts {
    pub const VERSION: &str = env!("CARGO_PKG_VERSION");
    pub const BIN_NAME: &str = "gnomfreq";
}

fn build_parser() -> Command {
    Command::new(consts::BIN_NAME)
        .bin_name(consts::BIN_NAME)
        .version(consts::VERSION)
        .about("Look up population-specific allele frequencies for lists of variants in gnomAD.")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(fetch::cli::create_fetch_cli())
        .subcommand(lookup::cli::create_lookup_cli())
}

fn main() -> Result<()> {
    let app = build_parser();
    let matches = app.get_matches();

    match matches.subcommand() {
        //
        // FETCH
        //
        Some((fetch::cli::FETCH_CMD, matches)) => {
            fetch::handlers::run_fetch(matches)?;
        }

        //
        // LOOKUP
        //
        Some((lookup::cli::LOOKUP_CMD, matches)) => {
            lookup::handlers::run_lookup(matches)?;
        }

        _ => unreachable!("Subcommand not found"),
    };

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    use gnomfreq_core::ReferenceBuild;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    fn test_parser_is_valid() {
        build_parser().debug_assert();
    }

    #[rstest]
    fn test_fetch_arguments() {
        let matches = build_parser()
            .try_get_matches_from([
                "gnomfreq", "fetch", "--var-input", "snps.csv", "--output", "out", "--pop-code",
                "NFE", "--dataset", "2",
            ])
            .unwrap();
        let (name, matches) = matches.subcommand().unwrap();

        assert_eq!(name, fetch::cli::FETCH_CMD);
        assert_eq!(
            matches.get_one::<ReferenceBuild>(args::DATASET),
            Some(&ReferenceBuild::GnomadR3_1)
        );
        assert_eq!(matches.get_one::<u64>(fetch::cli::BATCH_SIZE), None);
        assert_eq!(
            fetch::handlers::pacing_policy(matches),
            gnomfreq_core::PacingPolicy::default()
        );
        assert!(!matches.get_flag(fetch::cli::REPORT_ZERO));
    }

    #[rstest]
    fn test_original_flag_spellings() {
        let matches = build_parser().try_get_matches_from([
            "gnomfreq", "fetch", "--var_input", "snps.csv", "--output", "out", "--pop_code", "AFR",
            "--dataset", "1",
        ]);
        assert!(matches.is_ok());
    }

    #[rstest]
    #[case("abc")]
    #[case("3")]
    #[case("0")]
    fn test_invalid_dataset_is_rejected(#[case] dataset: &str) {
        let matches = build_parser().try_get_matches_from([
            "gnomfreq", "lookup", "--variant", "rs1", "--pop-code", "NFE", "--dataset", dataset,
        ]);
        assert!(matches.is_err());
    }

    #[rstest]
    fn test_dataset_is_required() {
        let matches = build_parser().try_get_matches_from([
            "gnomfreq", "fetch", "--var-input", "snps.csv", "--output", "out", "--pop-code", "NFE",
        ]);
        assert!(matches.is_err());
    }
}
