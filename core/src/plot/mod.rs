//! Loading joined results and plotting runtime against worker count.

mod render;


use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, anyhow, bail};
use tracing::debug;

pub use render::render_svg;

pub const FULL_SUFFIX: &str = ".full.csv";

/// One joined result row tagged with the algorithm label of its file.
#[derive(Debug, Clone, PartialEq)]
pub struct ResultPoint {
    pub alg: String,
    pub ctype: String,
    pub workers: f64,
    pub load: u64,
    pub mean: f64,
}

/// `*.full.csv` files in `dir`, sorted by file name.
pub fn full_result_files(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut files: Vec<PathBuf> = fs::read_dir(dir)
        .with_context(|| format!("read directory {}", dir.display()))?
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| {
            path.is_file()
                && path
                    .file_name()
                    .and_then(|name| name.to_str())
                    .map(|name| name.ends_with(FULL_SUFFIX))
                    .unwrap_or(false)
        })
        .collect();
    files.sort();
    Ok(files)
}

/// Label taken from the first dot-separated segment of the file name.
pub fn algorithm_label(path: &Path) -> String {
    path.file_name()
        .and_then(|name| name.to_str())
        .and_then(|name| name.split('.').next())
        .unwrap_or_default()
        .to_string()
}

pub fn load_full_results(dir: &Path) -> Result<Vec<ResultPoint>> {
    let files = full_result_files(dir)?;
    if files.is_empty() {
        bail!("no *{} files in {}", FULL_SUFFIX, dir.display());
    }

    let mut points = Vec::new();
    for file in &files {
        let alg = algorithm_label(file);
        let text = fs::read_to_string(file).with_context(|| format!("read {}", file.display()))?;
        let before = points.len();
        parse_full_csv(&alg, &text, &mut points).with_context(|| format!("parse {}", file.display()))?;
        debug!(file = %file.display(), rows = points.len() - before, "loaded joined results");
    }
    Ok(points)
}

struct Columns {
    ctype: usize,
    workers: usize,
    load: usize,
    mean: usize,
}

impl Columns {
    fn locate(header: &[&str]) -> Result<Self> {
        let find = |name: &str| header.iter().position(|column| *column == name);
        let require = |name: &str| find(name).ok_or_else(|| anyhow!("missing column '{}'", name));
        let ctype = find("ctype")
            .or_else(|| find("type"))
            .ok_or_else(|| anyhow!("missing column 'ctype' (or 'type')"))?;
        Ok(Self {
            ctype,
            workers: require("workers")?,
            load: require("load")?,
            mean: require("mean")?,
        })
    }
}

fn parse_full_csv(alg: &str, text: &str, points: &mut Vec<ResultPoint>) -> Result<()> {
    let mut lines = text.lines().filter(|line| !line.trim().is_empty());
    let header_line = lines.next().ok_or_else(|| anyhow!("empty file"))?;
    let header: Vec<&str> = header_line.trim().split(',').collect();
    let columns = Columns::locate(&header)?;

    for (row, line) in lines.enumerate() {
        let fields: Vec<&str> = line.trim().split(',').collect();
        let field = |idx: usize, name: &str| {
            fields
                .get(idx)
                .copied()
                .ok_or_else(|| anyhow!("row {} has no '{}' field", row + 1, name))
        };
        points.push(ResultPoint {
            alg: alg.to_string(),
            ctype: field(columns.ctype, "ctype")?.to_string(),
            workers: field(columns.workers, "workers")?
                .parse()
                .with_context(|| format!("row {}: workers is not numeric", row + 1))?,
            load: field(columns.load, "load")?
                .parse()
                .with_context(|| format!("row {}: load is not an integer", row + 1))?,
            mean: field(columns.mean, "mean")?
                .parse()
                .with_context(|| format!("row {}: mean is not numeric", row + 1))?,
        });
    }
    Ok(())
}

fn push_unique<T: PartialEq + Clone>(values: &mut Vec<T>, value: &T) {
    if !values.contains(value) {
        values.push(value.clone());
    }
}

/// Subplot layout: one row per algorithm, one column per load, one series per ctype.
/// Distinct values keep first-seen order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PlotGrid {
    pub algorithms: Vec<String>,
    pub loads: Vec<u64>,
    pub ctypes: Vec<String>,
}

impl PlotGrid {
    pub fn from_points(points: &[ResultPoint]) -> Self {
        let mut grid = Self::default();
        for point in points {
            push_unique(&mut grid.algorithms, &point.alg);
            push_unique(&mut grid.loads, &point.load);
            push_unique(&mut grid.ctypes, &point.ctype);
        }
        grid
    }

    /// `(workers, mean)` pairs of one scatter series.
    pub fn series(points: &[ResultPoint], alg: &str, load: u64, ctype: &str) -> Vec<(f64, f64)> {
        points
            .iter()
            .filter(|p| p.alg == alg && p.load == load && p.ctype == ctype)
            .map(|p| (p.workers, p.mean))
            .collect()
    }
}
