//! ASCII plotting for non-interactive terminal output.
//!
//! This is intentionally "dumb" (fixed-size grid), optimized for:
//! - quick visual sanity checks in a piped/CI context
//! - deterministic output (helpful for golden tests)
//!
//! Plot elements:
//! - observed points: `o`
//! - curves and fitted lines: `-`
//! - histogram bars: `#`

use crate::app::pipeline::PanelSet;
use crate::domain::Histogram;

/// Render all four panels stacked vertically, each with a title and a
/// range header.
pub fn render_ascii_panels(panels: &PanelSet, width: usize, height: usize) -> String {
    let mut out = String::new();

    out.push_str("Scatter Plot + Best Fit\n");
    let segment = sample_segment(panels.scatter.fit_segment, width.max(2));
    let points: Vec<(f64, f64)> = panels.scatter.points().collect();
    out.push_str(&render_xy(&points, Some(&segment), width, height));
    out.push('\n');

    out.push_str("Standard Normal PDF\n");
    let pdf: Vec<(f64, f64)> = panels.pdf.points().collect();
    out.push_str(&render_xy(&[], Some(&pdf), width, height));
    out.push('\n');

    out.push_str("Skewed Distribution\n");
    out.push_str(&render_hist(&panels.histogram, width, height));
    out.push('\n');

    out.push_str(panels.config.cdf.display_name());
    out.push('\n');
    let cdf: Vec<(f64, f64)> = panels.cdf.points().collect();
    out.push_str(&render_xy(&[], Some(&cdf), width, height));

    out
}

/// Render a scatter/curve cell into a character grid.
pub fn render_xy(
    points: &[(f64, f64)],
    curve: Option<&[(f64, f64)]>,
    width: usize,
    height: usize,
) -> String {
    let width = width.max(10);
    let height = height.max(5);

    let (x_min, x_max) = x_range(points, curve).unwrap_or((0.0, 1.0));
    let (y_min, y_max) = y_range(points, curve).unwrap_or((0.0, 1.0));
    let (y_min, y_max) = pad_range(y_min, y_max, 0.05);

    let mut grid = vec![vec![' '; width]; height];

    // Draw the curve first so points can overlay it.
    if let Some(curve) = curve {
        for &(x, y) in curve {
            let col = map_x(x, x_min, x_max, width);
            let row = map_y(y, y_min, y_max, height);
            grid[row][col] = '-';
        }
    }

    for &(x, y) in points {
        let col = map_x(x, x_min, x_max, width);
        let row = map_y(y, y_min, y_max, height);
        grid[row][col] = 'o';
    }

    render_grid(grid, x_min, x_max, y_min, y_max)
}

/// Render a histogram cell: one `#` bar per bin, scaled to the tallest bin.
pub fn render_hist(hist: &Histogram, width: usize, height: usize) -> String {
    let width = width.max(10);
    let height = height.max(5);

    let x_min = hist.bins.first().map(|&(l, _)| l).unwrap_or(0.0);
    let x_max = hist
        .bins
        .last()
        .map(|&(l, _)| l + hist.bin_width)
        .unwrap_or(1.0);
    let d_max = hist.max_density().max(f64::MIN_POSITIVE);

    let mut grid = vec![vec![' '; width]; height];

    for &(left, density) in &hist.bins {
        let col_lo = map_x(left, x_min, x_max, width);
        let col_hi = map_x(left + hist.bin_width, x_min, x_max, width);
        let bar = ((density / d_max) * height as f64).round() as usize;
        for col in col_lo..=col_hi {
            for row in 0..bar.min(height) {
                grid[height - 1 - row][col] = '#';
            }
        }
    }

    render_grid(grid, x_min, x_max, 0.0, d_max)
}

/// Sample a two-point line segment into `n` evenly spaced points so the
/// character grid shows a contiguous line rather than two endpoints.
fn sample_segment(segment: [(f64, f64); 2], n: usize) -> Vec<(f64, f64)> {
    let [(x0, y0), (x1, y1)] = segment;
    (0..n)
        .map(|i| {
            let u = i as f64 / (n - 1) as f64;
            (x0 + u * (x1 - x0), y0 + u * (y1 - y0))
        })
        .collect()
}

fn render_grid(grid: Vec<Vec<char>>, x_min: f64, x_max: f64, y_min: f64, y_max: f64) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "x=[{x_min:.2}, {x_max:.2}] | y=[{y_min:.4}, {y_max:.4}]\n"
    ));
    for row in grid {
        out.push_str(&row.into_iter().collect::<String>());
        out.push('\n');
    }
    out
}

fn x_range(points: &[(f64, f64)], curve: Option<&[(f64, f64)]>) -> Option<(f64, f64)> {
    minmax(points.iter().map(|&(x, _)| x).chain(
        curve.into_iter().flatten().map(|&(x, _)| x),
    ))
}

fn y_range(points: &[(f64, f64)], curve: Option<&[(f64, f64)]>) -> Option<(f64, f64)> {
    minmax(points.iter().map(|&(_, y)| y).chain(
        curve.into_iter().flatten().map(|&(_, y)| y),
    ))
}

fn minmax(values: impl Iterator<Item = f64>) -> Option<(f64, f64)> {
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    for v in values {
        min = min.min(v);
        max = max.max(v);
    }
    if min.is_finite() && max.is_finite() && max > min {
        Some((min, max))
    } else {
        None
    }
}

fn pad_range(min: f64, max: f64, frac: f64) -> (f64, f64) {
    let pad = (max - min) * frac;
    (min - pad, max + pad)
}

fn map_x(x: f64, min: f64, max: f64, width: usize) -> usize {
    let u = ((x - min) / (max - min)).clamp(0.0, 1.0);
    ((u * (width - 1) as f64).round() as usize).min(width - 1)
}

fn map_y(y: f64, min: f64, max: f64, height: usize) -> usize {
    let u = ((y - min) / (max - min)).clamp(0.0, 1.0);
    let row = (u * (height - 1) as f64).round() as usize;
    height - 1 - row.min(height - 1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::pipeline::build_panels;
    use crate::domain::DemoConfig;

    #[test]
    fn panels_render_deterministically() {
        let panels = build_panels(&DemoConfig::classic()).unwrap();
        let a = render_ascii_panels(&panels, 60, 10);
        let b = render_ascii_panels(&panels, 60, 10);
        assert_eq!(a, b);
        assert!(a.contains("Scatter Plot + Best Fit"));
        assert!(a.contains("Standard Normal PDF"));
        assert!(a.contains("Skewed Distribution"));
        assert!(a.contains("Standard Normal CDF"));
        assert!(a.contains('o'));
        assert!(a.contains('#'));
    }

    #[test]
    fn xy_grid_has_requested_dimensions() {
        let curve = [(0.0, 0.0), (1.0, 1.0), (2.0, 4.0)];
        let out = render_xy(&[], Some(&curve), 40, 8);
        let lines: Vec<&str> = out.lines().collect();
        // Header plus `height` grid rows.
        assert_eq!(lines.len(), 9);
        assert!(lines[1..].iter().all(|l| l.chars().count() == 40));
        assert!(out.contains('-'));
    }

    #[test]
    fn histogram_bars_scale_to_tallest_bin() {
        let hist = Histogram {
            bin_width: 1.0,
            bins: vec![(0.0, 0.1), (1.0, 0.4), (2.0, 0.2)],
        };
        let out = render_hist(&hist, 30, 10);
        // Tallest bar reaches the top row of the grid.
        let top_row = out.lines().nth(1).unwrap();
        assert!(top_row.contains('#'));
    }
}
