//! Renders runtime-vs-workers scatter plots from every `*.full.csv` in a directory.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use concbench_cli::logging;
use concbench_core::plot;

#[derive(Debug, Parser)]
#[command(name = "bench-plot", version, about = "Plot joined benchmark results")]
struct CliArgs {
    /// Directory holding `<alg>.full.csv` files (defaults to the current directory)
    #[arg(value_name = "DIR")]
    dir: Option<PathBuf>,

    /// SVG file to write
    #[arg(long, short, value_name = "FILE", default_value = "bench.svg")]
    output: PathBuf,
}

fn main() -> Result<()> {
    logging::init_tracing();
    let args = CliArgs::parse();
    let dir = match args.dir {
        Some(dir) => dir,
        None => std::env::current_dir().context("resolve current directory")?,
    };

    let points = plot::load_full_results(&dir)?;
    let grid = plot::render_svg(&points, &args.output)?;
    println!(
        "Plotted {} algorithm(s) x {} load(s) -> {}",
        grid.algorithms.len(),
        grid.loads.len(),
        args.output.display()
    );
    Ok(())
}
