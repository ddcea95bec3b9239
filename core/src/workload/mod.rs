//! CPU-bound payloads run by each case.

mod kernels;

#[cfg(test)]
mod workload_test;

use std::hint::black_box;

use anyhow::{Result, anyhow};
use tracing::info;

use crate::case::{Algorithm, ConcurrencyMode};
use crate::exec::{WorkerTask, fan_out};
use crate::split::split_ranges;

pub use kernels::{DIVISOR, DivisionKernel, LeibnizTerm};

/// Parameters of one case run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunParams {
    pub load: u64,
    pub workers: usize,
    pub mode: ConcurrencyMode,
}

/// Partial results of every worker, in completion order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RunOutcome {
    pub partials: Vec<f64>,
}

impl RunOutcome {
    pub fn total(&self) -> f64 {
        self.partials.iter().sum()
    }

    /// Pi approximation for a `peace_of_pi` run.
    pub fn pi_estimate(&self) -> f64 {
        4.0 * self.total()
    }
}

impl Algorithm {
    pub fn run(self, params: &RunParams) -> Result<RunOutcome> {
        let items = params
            .load
            .checked_mul(self.item_scale())
            .ok_or_else(|| anyhow!("load {} is too large for {}", params.load, self.name()))?;
        info!(
            algorithm = self.name(),
            mode = params.mode.display_name(),
            workers = params.workers,
            items,
            "running workload"
        );
        let tasks = match self {
            Algorithm::SimpleDivision => division_tasks(DivisionKernel::Loop, items, params),
            Algorithm::SimpleDivisionVectorized => division_tasks(DivisionKernel::Vectorized, items, params),
            Algorithm::SimpleDivisionAccelerated => division_tasks(DivisionKernel::Accelerated, items, params),
            Algorithm::PeaceOfPi => leibniz_tasks(items, params),
        };
        let partials = fan_out(params.mode, tasks)?;
        Ok(RunOutcome {
            partials: black_box(partials),
        })
    }
}

fn division_tasks(kernel: DivisionKernel, items: u64, params: &RunParams) -> Vec<WorkerTask> {
    if params.mode.is_sequential() {
        // the inline path starts at 1
        return vec![WorkerTask::Divide {
            kernel,
            start: 1,
            stop: items,
        }];
    }
    split_ranges(items, params.workers)
        .into_iter()
        .map(|range| WorkerTask::Divide {
            kernel,
            start: range.start,
            stop: range.end,
        })
        .collect()
}

fn leibniz_tasks(items: u64, params: &RunParams) -> Vec<WorkerTask> {
    let terms = if params.mode.is_sequential() {
        vec![LeibnizTerm::single(items)]
    } else {
        LeibnizTerm::plan(items, params.workers)
    };
    terms.into_iter().map(|term| WorkerTask::Leibniz { term }).collect()
}
