use std::fmt;

use serde::Deserialize;

use super::axis::{Algorithm, ConcurrencyMode};
use crate::workload::RunParams;

/// Axis value sets for the full enumerator (algorithm outermost, load innermost).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FullAxes {
    pub algorithms: Vec<Algorithm>,
    pub modes: Vec<ConcurrencyMode>,
    pub workers: Vec<usize>,
    pub loads: Vec<u64>,
}

impl Default for FullAxes {
    fn default() -> Self {
        Self {
            algorithms: Algorithm::ACTIVE.to_vec(),
            modes: ConcurrencyMode::ALL.to_vec(),
            workers: (1..=10).collect(),
            loads: vec![1, 10, 100, 1000],
        }
    }
}

/// Axis value sets for the case-only enumerator (load outermost, workers innermost).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LoadAxes {
    pub modes: Vec<ConcurrencyMode>,
    pub workers: Vec<usize>,
    pub loads: Vec<u64>,
}

impl Default for LoadAxes {
    fn default() -> Self {
        Self {
            modes: ConcurrencyMode::ALL.to_vec(),
            workers: (1..=10).collect(),
            loads: vec![1, 100, 1000, 100_000, 1_000_000],
        }
    }
}

/// Descriptive columns shared by every case kind: `alg, ctype, workers, load`.
pub trait CaseRecord {
    fn algorithm(&self) -> Algorithm;
    fn params(&self) -> RunParams;

    fn metadata(&self) -> [String; 4] {
        let params = self.params();
        [
            self.algorithm().name().to_string(),
            params.mode.display_name().to_string(),
            params.workers.to_string(),
            params.load.to_string(),
        ]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FullCase {
    pub algorithm: Algorithm,
    pub mode: ConcurrencyMode,
    pub workers: usize,
    pub load: u64,
}

impl CaseRecord for FullCase {
    fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    fn params(&self) -> RunParams {
        RunParams {
            load: self.load,
            workers: self.workers,
            mode: self.mode,
        }
    }
}

/// Case of the single-algorithm sequence; the routine is always the accelerated division.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadCase {
    pub mode: ConcurrencyMode,
    pub workers: usize,
    pub load: u64,
}

impl LoadCase {
    pub const ALGORITHM: Algorithm = Algorithm::SimpleDivisionAccelerated;
}

impl CaseRecord for LoadCase {
    fn algorithm(&self) -> Algorithm {
        Self::ALGORITHM
    }

    fn params(&self) -> RunParams {
        RunParams {
            load: self.load,
            workers: self.workers,
            mode: self.mode,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CaseIndexError {
    pub index: usize,
    pub len: usize,
}

impl fmt::Display for CaseIndexError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "case index {} out of range (0..{})", self.index, self.len)
    }
}

impl std::error::Error for CaseIndexError {}

/// Ordered, immutable list of cases. A case's index is its position here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CaseTable<C> {
    cases: Vec<C>,
}

impl CaseTable<FullCase> {
    pub fn full(axes: &FullAxes) -> Self {
        let capacity = axes.algorithms.len() * axes.modes.len() * axes.workers.len() * axes.loads.len();
        let mut cases = Vec::with_capacity(capacity);
        for &algorithm in &axes.algorithms {
            for &mode in &axes.modes {
                for &workers in &axes.workers {
                    for &load in &axes.loads {
                        cases.push(FullCase {
                            algorithm,
                            mode,
                            workers,
                            load,
                        });
                    }
                }
            }
        }
        Self { cases }
    }
}

impl CaseTable<LoadCase> {
    pub fn by_load(axes: &LoadAxes) -> Self {
        let mut cases = Vec::with_capacity(axes.loads.len() * axes.modes.len() * axes.workers.len());
        for &load in &axes.loads {
            for &mode in &axes.modes {
                for &workers in &axes.workers {
                    cases.push(LoadCase { mode, workers, load });
                }
            }
        }
        Self { cases }
    }
}

impl<C> CaseTable<C> {
    pub fn len(&self) -> usize {
        self.cases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cases.is_empty()
    }

    pub fn get(&self, index: usize) -> Result<&C, CaseIndexError> {
        self.cases.get(index).ok_or(CaseIndexError {
            index,
            len: self.cases.len(),
        })
    }

    pub fn iter(&self) -> std::slice::Iter<'_, C> {
        self.cases.iter()
    }

    pub fn as_slice(&self) -> &[C] {
        &self.cases
    }
}

impl<'a, C> IntoIterator for &'a CaseTable<C> {
    type Item = &'a C;
    type IntoIter = std::slice::Iter<'a, C>;

    fn into_iter(self) -> Self::IntoIter {
        self.cases.iter()
    }
}
