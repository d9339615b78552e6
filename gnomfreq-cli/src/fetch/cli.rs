use clap::{Arg, ArgAction, Command, value_parser};

use gnomfreq_core::consts::{DEFAULT_PACING_BATCH, DEFAULT_PACING_PAUSE_MS};

use crate::args::{api_arg, dataset_arg, log_level_arg, pop_code_arg};

pub const FETCH_CMD: &str = "fetch";

pub const VAR_INPUT: &str = "var-input";
pub const OUTPUT: &str = "output";
pub const BATCH_SIZE: &str = "batch-size";
pub const PAUSE_MS: &str = "pause-ms";
pub const REPORT_ZERO: &str = "report-zero-frequency";

pub fn create_fetch_cli() -> Command {
    Command::new(FETCH_CMD)
        .about("Resolve allele frequencies for every variant in a list and write a tab-separated report")
        .arg(
            Arg::new(VAR_INPUT)
                .long(VAR_INPUT)
                .visible_alias("var_input")
                .short('i')
                .required(true)
                .help("Variant list with a `SNP` column: spreadsheet (.xlsx/.xls/.ods, first sheet) or .csv/.tsv/.txt, optionally .gz"),
        )
        .arg(
            Arg::new(OUTPUT)
                .long(OUTPUT)
                .short('o')
                .required(true)
                .help("Output directory for the report and the run log"),
        )
        .arg(pop_code_arg())
        .arg(dataset_arg())
        .arg(api_arg())
        .arg(
            Arg::new(BATCH_SIZE)
                .long(BATCH_SIZE)
                .value_parser(value_parser!(u64))
                .help(format!(
                    "Pause after this many variants, 0 disables pacing [default: {DEFAULT_PACING_BATCH}]"
                )),
        )
        .arg(
            Arg::new(PAUSE_MS)
                .long(PAUSE_MS)
                .value_parser(value_parser!(u64))
                .help(format!(
                    "Length of each pause in milliseconds [default: {DEFAULT_PACING_PAUSE_MS}]"
                )),
        )
        .arg(
            Arg::new(REPORT_ZERO)
                .long(REPORT_ZERO)
                .action(ArgAction::SetTrue)
                .help("Report a zero allele count as frequency 0 instead of N/A"),
        )
        .arg(log_level_arg())
}
