//! Accelerated division runner over the load-first case sequence.
//!
//! Same arguments as `bench`, but `<CASE>` indexes the table printed by
//! `cases` and the routine is always `simple_division_accelerated`.

use std::io::{self, Write};

use anyhow::Result;
use concbench_cli::args::{RunnerCommand, parse_runner_args};
use concbench_cli::logging;
use concbench_core::case::{CaseRecord, LoadCase, write_load_listing};
use concbench_core::config::BenchConfig;
use concbench_core::{exec, join};

fn main() -> Result<()> {
    logging::init_tracing();
    if let Some(result) = exec::worker_entry() {
        return result;
    }

    let args = parse_runner_args(std::env::args().skip(1))?;
    let config = BenchConfig::load_or_default(args.config.as_deref())?;
    let table = config.load_table();

    match args.command {
        RunnerCommand::Help => {
            let stdout = io::stdout();
            let mut out = stdout.lock();
            write_load_listing(&table, &mut out)?;
            writeln!(out, "number of cases: {}", table.len())?;
        }
        RunnerCommand::Join => {
            join::join_files(&config.files.raw, &config.files.full, table.as_slice())?;
        }
        RunnerCommand::Run(index) => {
            let case = table.get(index)?;
            let outcome = LoadCase::ALGORITHM.run(&case.params())?;
            logging::log_outcome(LoadCase::ALGORITHM, &outcome);
        }
    }
    Ok(())
}
