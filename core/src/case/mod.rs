//! Deterministic benchmark case enumeration.
//!
//! Two independent numbering schemes exist: the full table (algorithm, mode,
//! workers, load) used by `bench`, and the load-first table (load, mode,
//! workers) used by the accelerated runner. The external timing driver only
//! records row order, so both sequences must stay stable across runs.

mod axis;
mod table;


use std::io::Write;

use anyhow::Result;

pub use axis::{Algorithm, ConcurrencyMode};
pub use table::{CaseIndexError, CaseRecord, CaseTable, FullAxes, FullCase, LoadAxes, LoadCase};

/// `i,algorithm,ctype,workers,load` per case followed by the case count.
pub fn write_full_listing<W: Write>(table: &CaseTable<FullCase>, out: &mut W) -> Result<()> {
    for (i, case) in table.iter().enumerate() {
        let [alg, ctype, workers, load] = case.metadata();
        writeln!(out, "{},{},{},{},{}", i, alg, ctype, workers, load)?;
    }
    writeln!(out, "number of cases: {}", table.len())?;
    Ok(())
}

/// `case,load,ctype,workers` header then one row per case.
pub fn write_load_listing<W: Write>(table: &CaseTable<LoadCase>, out: &mut W) -> Result<()> {
    writeln!(out, "case,load,ctype,workers")?;
    for (i, case) in table.iter().enumerate() {
        writeln!(out, "{},{},{},{}", i, case.load, case.mode, case.workers)?;
    }
    Ok(())
}
