use std::path::PathBuf;

use anyhow::{Context, Result, bail};

pub const USAGE: &str = "Expected arg: [CASE]";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunnerCommand {
    /// Print every case with its index and the case count.
    Help,
    /// Merge the raw timing file with the case list.
    Join,
    /// Run the case at this index.
    Run(usize),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunnerArgs {
    pub config: Option<PathBuf>,
    pub command: RunnerCommand,
}

/// Parses runner arguments (program name already skipped).
///
/// `--config <file>` may appear anywhere. Of the remaining arguments the last
/// one decides: `help`, `join`, or else it must be the only one and name a
/// case index.
pub fn parse_runner_args<I>(args: I) -> Result<RunnerArgs>
where
    I: IntoIterator<Item = String>,
{
    let mut config = None;
    let mut positional = Vec::new();

    let mut iter = args.into_iter();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--config" => {
                let value = iter.next().context("expected path after --config <file>")?;
                config = Some(PathBuf::from(value));
            }
            _ => positional.push(arg),
        }
    }

    let command = match positional.last().map(String::as_str) {
        Some("help") => RunnerCommand::Help,
        Some("join") => RunnerCommand::Join,
        _ => {
            if positional.len() != 1 {
                bail!(USAGE);
            }
            let index = positional[0]
                .parse()
                .with_context(|| format!("case index must be a non-negative integer, got '{}'", positional[0]))?;
            RunnerCommand::Run(index)
        }
    };

    Ok(RunnerArgs { config, command })
}
