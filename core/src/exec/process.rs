use std::io::Write;
use std::process::{Child, Command, Stdio};

use anyhow::{Context, Result, anyhow, bail};
use serde::{Deserialize, Serialize};

use super::WorkerTask;

/// Hidden argument that turns any runner binary into a single-task worker.
pub const WORKER_ARG: &str = "--concbench-worker";

#[derive(Debug, Serialize, Deserialize)]
struct WorkerReport {
    partial: f64,
}

/// A worker running as a child of the current executable.
pub struct ChildWorker {
    child: Child,
    task: WorkerTask,
}

impl ChildWorker {
    pub(super) fn spawn(task: WorkerTask) -> Result<Self> {
        let exe = std::env::current_exe().context("locate current executable for worker process")?;
        let payload = serde_json::to_string(&task).context("encode worker task")?;
        let child = Command::new(&exe)
            .arg(WORKER_ARG)
            .arg(payload)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::inherit())
            .spawn()
            .with_context(|| format!("spawn worker process {}", exe.display()))?;
        Ok(Self { child, task })
    }

    pub fn id(&self) -> u32 {
        self.child.id()
    }

    pub(super) fn wait(self) -> Result<f64> {
        let task = self.task;
        let output = self.child.wait_with_output().context("wait for worker process")?;
        if !output.status.success() {
            bail!("worker process for {:?} exited with {}", task, output.status);
        }
        let stdout = String::from_utf8_lossy(&output.stdout);
        let line = stdout
            .lines()
            .rev()
            .find(|line| !line.trim().is_empty())
            .ok_or_else(|| anyhow!("worker process for {:?} wrote no report", task))?;
        let report: WorkerReport =
            serde_json::from_str(line.trim()).with_context(|| format!("parse worker report '{}'", line))?;
        Ok(report.partial)
    }
}

/// Worker side of the process mode. Returns `None` unless the current
/// process was started with [`WORKER_ARG`].
///
/// Call this first thing in `main` of every binary that runs workloads.
pub fn worker_entry() -> Option<Result<()>> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    run_worker(&args, &mut out)
}

pub fn run_worker<W: Write>(args: &[String], out: &mut W) -> Option<Result<()>> {
    match args {
        [flag, payload] if flag == WORKER_ARG => Some(execute(payload, out)),
        [flag, ..] if flag == WORKER_ARG => Some(Err(anyhow!("{} expects exactly one task payload", WORKER_ARG))),
        _ => None,
    }
}

fn execute<W: Write>(payload: &str, out: &mut W) -> Result<()> {
    let task: WorkerTask = serde_json::from_str(payload).context("decode worker task")?;
    let report = WorkerReport { partial: task.run() };
    serde_json::to_writer(&mut *out, &report).context("write worker report")?;
    writeln!(out)?;
    out.flush()?;
    Ok(())
}
