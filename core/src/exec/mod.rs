//! Fork/join dispatch of workload tasks.
//!
//! `ConcurrencyMode::spawn` starts one task (inline, on a thread, or in a
//! child process) and `WorkerHandle::join` blocks until it is done. Partial
//! results are appended to a shared sink that is only read once every handle
//! has been joined.

mod process;


use std::sync::{Arc, Mutex};
use std::thread::{self, JoinHandle};

use anyhow::{Context, Result, anyhow};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::case::ConcurrencyMode;
use crate::workload::{DivisionKernel, LeibnizTerm};

pub use process::{ChildWorker, WORKER_ARG, run_worker, worker_entry};

/// Self-contained unit of work handed to one worker.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum WorkerTask {
    Divide { kernel: DivisionKernel, start: u64, stop: u64 },
    Leibniz { term: LeibnizTerm },
}

impl WorkerTask {
    pub fn run(&self) -> f64 {
        match self {
            WorkerTask::Divide { kernel, start, stop } => kernel.apply(*start, *stop),
            WorkerTask::Leibniz { term } => term.sum(),
        }
    }
}

/// Append-only collection of worker results.
pub type PartialSink = Arc<Mutex<Vec<f64>>>;

fn push_partial(sink: &PartialSink, value: f64) -> Result<()> {
    sink.lock()
        .map_err(|_| anyhow!("partial result sink poisoned"))?
        .push(value);
    Ok(())
}

pub enum WorkerHandle {
    /// Already finished at spawn time.
    Inline,
    Thread(JoinHandle<Result<()>>),
    Process(ChildWorker),
}

impl ConcurrencyMode {
    pub fn spawn(self, id: usize, task: WorkerTask, sink: &PartialSink) -> Result<WorkerHandle> {
        match self {
            ConcurrencyMode::Sequential => {
                push_partial(sink, task.run())?;
                Ok(WorkerHandle::Inline)
            }
            ConcurrencyMode::Thread => {
                let sink = Arc::clone(sink);
                let handle = thread::Builder::new()
                    .name(format!("bench-worker-{}", id))
                    .spawn(move || push_partial(&sink, task.run()))
                    .with_context(|| format!("spawn worker thread {}", id))?;
                debug!(id, ?task, "spawned worker thread");
                Ok(WorkerHandle::Thread(handle))
            }
            ConcurrencyMode::Process => {
                let child = ChildWorker::spawn(task)?;
                debug!(id, ?task, pid = child.id(), "spawned worker process");
                Ok(WorkerHandle::Process(child))
            }
        }
    }
}

impl WorkerHandle {
    pub fn join(self, sink: &PartialSink) -> Result<()> {
        match self {
            WorkerHandle::Inline => Ok(()),
            WorkerHandle::Thread(handle) => handle.join().map_err(|_| anyhow!("worker thread panicked"))?,
            WorkerHandle::Process(child) => {
                let partial = child.wait()?;
                push_partial(sink, partial)
            }
        }
    }
}

/// Starts every task under `mode`, then waits for all of them.
///
/// Returns the partial results in completion order.
pub fn fan_out(mode: ConcurrencyMode, tasks: Vec<WorkerTask>) -> Result<Vec<f64>> {
    let sink: PartialSink = Arc::new(Mutex::new(Vec::with_capacity(tasks.len())));

    let mut handles = Vec::with_capacity(tasks.len());
    for (id, task) in tasks.into_iter().enumerate() {
        handles.push(mode.spawn(id, task, &sink)?);
    }
    for handle in handles {
        handle.join(&sink)?;
    }

    let partials = sink
        .lock()
        .map_err(|_| anyhow!("partial result sink poisoned"))?
        .clone();
    Ok(partials)
}
