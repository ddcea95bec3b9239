//! Prints the load-first case table (`case,load,ctype,workers`).

use std::io;
use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use concbench_cli::logging;
use concbench_core::case::write_load_listing;
use concbench_core::config::BenchConfig;

#[derive(Debug, Parser)]
#[command(name = "cases", version, about = "List the load-first benchmark cases")]
struct CliArgs {
    /// TOML file overriding the `[cases]` axes
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,
}

fn main() -> Result<()> {
    logging::init_tracing();
    let args = CliArgs::parse();
    let config = BenchConfig::load_or_default(args.config.as_deref())?;

    let stdout = io::stdout();
    write_load_listing(&config.load_table(), &mut stdout.lock())
}
