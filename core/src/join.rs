//! Positional join of raw timing rows with case metadata.
//!
//! The raw file carries no case index: data row `i` (the line after the
//! header, zero-based) belongs to case `i`. A raw file produced with other
//! axes or nesting joins silently wrong; only a short file is detected.

use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use anyhow::{Context, Result, anyhow};
use tracing::{info, warn};

use crate::case::CaseRecord;

/// Columns appended to every raw row.
pub const METADATA_COLUMNS: [&str; 4] = ["alg", "type", "workers", "load"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct JoinSummary {
    /// Data rows written.
    pub cases: usize,
    /// Data rows present in the raw input.
    pub raw_rows: usize,
}

fn parse_rows<R: BufRead>(raw: R) -> Result<Vec<Vec<String>>> {
    raw.lines()
        .map(|line| {
            let line = line.context("read raw results line")?;
            Ok(line.trim().split(',').map(str::to_string).collect())
        })
        .collect()
}

pub fn join_rows<R, W, C>(raw: R, cases: &[C], out: &mut W) -> Result<JoinSummary>
where
    R: BufRead,
    W: Write,
    C: CaseRecord,
{
    let rows = parse_rows(raw)?;
    let (header, data) = rows
        .split_first()
        .ok_or_else(|| anyhow!("raw results are empty; expected a header line"))?;

    if data.len() < cases.len() {
        return Err(anyhow!(
            "raw results row index {} out of range: {} data rows for {} cases",
            data.len(),
            data.len(),
            cases.len()
        ));
    }
    if data.len() > cases.len() {
        warn!(
            raw_rows = data.len(),
            cases = cases.len(),
            "raw results have more rows than cases; extra rows ignored"
        );
    }

    let mut header = header.clone();
    header.extend(METADATA_COLUMNS.iter().map(|c| c.to_string()));
    writeln!(out, "{}", header.join(","))?;

    for (row, case) in data.iter().zip(cases) {
        let mut fields = row.clone();
        fields.extend(case.metadata());
        writeln!(out, "{}", fields.join(","))?;
    }
    out.flush()?;

    Ok(JoinSummary {
        cases: cases.len(),
        raw_rows: data.len(),
    })
}

/// Joins `raw_path` into `full_path`. Nothing is written when the join fails.
pub fn join_files<C: CaseRecord>(raw_path: &Path, full_path: &Path, cases: &[C]) -> Result<JoinSummary> {
    let raw = File::open(raw_path).with_context(|| format!("open {}", raw_path.display()))?;
    let mut buffer = Vec::new();
    let summary = join_rows(BufReader::new(raw), cases, &mut buffer)
        .with_context(|| format!("join {}", raw_path.display()))?;

    let file = File::create(full_path).with_context(|| format!("create {}", full_path.display()))?;
    let mut writer = BufWriter::new(file);
    writer
        .write_all(&buffer)
        .with_context(|| format!("write {}", full_path.display()))?;
    writer.flush()?;

    info!(
        raw = %raw_path.display(),
        full = %full_path.display(),
        cases = summary.cases,
        "joined raw results"
    );
    Ok(summary)
}
