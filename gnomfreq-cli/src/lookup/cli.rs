use clap::{Arg, Command};

use crate::args::{api_arg, dataset_arg, log_level_arg, pop_code_arg};

pub const LOOKUP_CMD: &str = "lookup";

pub const VARIANT: &str = "variant";

pub fn create_lookup_cli() -> Command {
    Command::new(LOOKUP_CMD)
        .about("Resolve the allele frequency of a single variant and print its report row")
        .arg(
            Arg::new(VARIANT)
                .long(VARIANT)
                .short('v')
                .required(true)
                .help("Variant identifier, e.g. 1-55516888-G-GA or rs429358"),
        )
        .arg(pop_code_arg())
        .arg(dataset_arg())
        .arg(api_arg())
        .arg(log_level_arg())
}
