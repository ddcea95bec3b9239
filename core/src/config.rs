//! Optional TOML configuration.
//!
//! Every field defaults to the canonical axes, so an absent file (or an empty
//! one) reproduces the standard case numbering.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use serde::Deserialize;

use crate::case::{CaseTable, FullAxes, FullCase, LoadAxes, LoadCase};

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FileNames {
    pub raw: PathBuf,
    pub full: PathBuf,
}

impl Default for FileNames {
    fn default() -> Self {
        Self {
            raw: PathBuf::from("bench.csv"),
            full: PathBuf::from("bench.full.csv"),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BenchConfig {
    pub full: FullAxes,
    pub cases: LoadAxes,
    pub files: FileNames,
}

impl BenchConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path).with_context(|| format!("read config {}", path.display()))?;
        Self::from_toml_str(&text).with_context(|| format!("parse config {}", path.display()))
    }

    pub fn from_toml_str(text: &str) -> Result<Self> {
        let config: BenchConfig = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Defaults when `path` is `None`.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }

    pub fn full_table(&self) -> CaseTable<FullCase> {
        CaseTable::full(&self.full)
    }

    pub fn load_table(&self) -> CaseTable<LoadCase> {
        CaseTable::by_load(&self.cases)
    }

    fn validate(&self) -> Result<()> {
        check_axes("full", self.full.algorithms.len(), self.full.modes.len(), &self.full.workers, &self.full.loads)?;
        check_axes("cases", 1, self.cases.modes.len(), &self.cases.workers, &self.cases.loads)
    }
}

fn check_axes(section: &str, algorithms: usize, modes: usize, workers: &[usize], loads: &[u64]) -> Result<()> {
    if algorithms == 0 || modes == 0 || workers.is_empty() || loads.is_empty() {
        bail!("[{}] axes must not be empty", section);
    }
    if workers.contains(&0) {
        bail!("[{}] worker counts must be positive", section);
    }
    if loads.contains(&0) {
        bail!("[{}] loads must be positive", section);
    }
    Ok(())
}
