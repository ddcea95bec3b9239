use std::path::Path;

use anyhow::{Result, bail};
use plotters::prelude::*;
use tracing::info;

use super::{PlotGrid, ResultPoint};

const PANEL_SIZE: (u32, u32) = (420, 320);

fn panel_bounds(points: &[ResultPoint], alg: &str, load: u64) -> (f64, f64) {
    let (x_max, y_max) = points
        .iter()
        .filter(|p| p.alg == alg && p.load == load)
        .fold((0.0f64, 0.0f64), |(x, y), p| (x.max(p.workers), y.max(p.mean)));
    let y_max = if y_max > 0.0 { y_max * 1.1 } else { 1.0 };
    (x_max + 1.0, y_max)
}

/// Draws the runtime grid into an SVG file at `output`.
pub fn render_svg(points: &[ResultPoint], output: &Path) -> Result<PlotGrid> {
    let grid = PlotGrid::from_points(points);
    if grid.algorithms.is_empty() {
        bail!("no results to plot");
    }
    let rows = grid.algorithms.len();
    let cols = grid.loads.len();

    let size = (PANEL_SIZE.0 * cols as u32, PANEL_SIZE.1 * rows as u32);
    let root = SVGBackend::new(output, size).into_drawing_area();
    root.fill(&WHITE)?;
    let panels = root.split_evenly((rows, cols));

    for (j, alg) in grid.algorithms.iter().enumerate() {
        for (i, &load) in grid.loads.iter().enumerate() {
            let (x_max, y_max) = panel_bounds(points, alg, load);
            let mut chart = ChartBuilder::on(&panels[j * cols + i])
                .caption(format!("{} {}", alg, load), ("sans-serif", 16))
                .margin(8)
                .x_label_area_size(32)
                .y_label_area_size(56)
                .build_cartesian_2d(0f64..x_max, 0f64..y_max)?;
            chart
                .configure_mesh()
                .x_desc("workers")
                .y_desc("runtime (s)")
                .draw()?;

            for (k, ctype) in grid.ctypes.iter().enumerate() {
                let color = Palette99::pick(k).to_rgba();
                let series = PlotGrid::series(points, alg, load, ctype);
                chart
                    .draw_series(series.into_iter().map(|(x, y)| Circle::new((x, y), 3, color.filled())))?
                    .label(format!("{}_{}_{}", alg, load, ctype))
                    .legend(move |(x, y)| Circle::new((x, y), 3, color.filled()));
            }
            chart
                .configure_series_labels()
                .background_style(WHITE.mix(0.8))
                .border_style(BLACK)
                .draw()?;
        }
    }
    root.present()?;

    info!(
        output = %output.display(),
        rows,
        cols,
        series = grid.ctypes.len(),
        "rendered runtime grid"
    );
    Ok(grid)
}
