use std::fmt;

use serde::{Deserialize, Serialize};

/// How a single workload invocation is executed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConcurrencyMode {
    #[serde(alias = "none")]
    Sequential,
    Thread,
    Process,
}

impl ConcurrencyMode {
    pub const ALL: [ConcurrencyMode; 3] = [
        ConcurrencyMode::Sequential,
        ConcurrencyMode::Thread,
        ConcurrencyMode::Process,
    ];

    /// Name written to listings and joined CSVs. Sequential renders as `None`.
    pub fn display_name(self) -> &'static str {
        match self {
            ConcurrencyMode::Sequential => "None",
            ConcurrencyMode::Thread => "Thread",
            ConcurrencyMode::Process => "Process",
        }
    }

    pub fn is_sequential(self) -> bool {
        matches!(self, ConcurrencyMode::Sequential)
    }
}

impl fmt::Display for ConcurrencyMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Workload routine selected by a case.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Algorithm {
    SimpleDivision,
    SimpleDivisionVectorized,
    SimpleDivisionAccelerated,
    PeaceOfPi,
}

impl Algorithm {
    /// Routines enumerated by default. `PeaceOfPi` stays callable but is left out.
    pub const ACTIVE: [Algorithm; 3] = [
        Algorithm::SimpleDivision,
        Algorithm::SimpleDivisionVectorized,
        Algorithm::SimpleDivisionAccelerated,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Algorithm::SimpleDivision => "simple_division",
            Algorithm::SimpleDivisionVectorized => "simple_division_vectorized",
            Algorithm::SimpleDivisionAccelerated => "simple_division_accelerated",
            Algorithm::PeaceOfPi => "peace_of_pi",
        }
    }

    /// Items processed per unit of load.
    pub fn item_scale(self) -> u64 {
        match self {
            Algorithm::PeaceOfPi => 1_000,
            _ => 10_000,
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
