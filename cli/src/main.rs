//! Full benchmark runner.
//!
//! Usage:
//!   bench <CASE>     # run one case of the full table
//!   bench help       # list every case and the case count
//!   bench join       # bench.csv + case metadata -> bench.full.csv
//!
//! `--config <file>` may be given anywhere to override axes or file names.

use std::io;

use anyhow::Result;
use concbench_cli::args::{RunnerCommand, parse_runner_args};
use concbench_cli::logging;
use concbench_core::case::{CaseRecord, write_full_listing};
use concbench_core::config::BenchConfig;
use concbench_core::{exec, join};

fn main() -> Result<()> {
    logging::init_tracing();
    if let Some(result) = exec::worker_entry() {
        return result;
    }

    let args = parse_runner_args(std::env::args().skip(1))?;
    let config = BenchConfig::load_or_default(args.config.as_deref())?;
    let table = config.full_table();

    match args.command {
        RunnerCommand::Help => {
            let stdout = io::stdout();
            write_full_listing(&table, &mut stdout.lock())?;
        }
        RunnerCommand::Join => {
            join::join_files(&config.files.raw, &config.files.full, table.as_slice())?;
        }
        RunnerCommand::Run(index) => {
            let case = table.get(index)?;
            let outcome = case.algorithm().run(&case.params())?;
            logging::log_outcome(case.algorithm(), &outcome);
        }
    }
    Ok(())
}
