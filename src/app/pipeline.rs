//! Shared panel-building logic used by both the TUI and ASCII front-ends.
//!
//! Keeping this in one place avoids duplicating the core workflow:
//! sample generation -> fit -> curve evaluation -> histogram binning
//!
//! The front-ends can then focus on presentation (widgets vs text).

use crate::domain::{CdfKind, Curve, DemoConfig, FitLine, Histogram, ScatterKind};
use crate::error::AppError;
use crate::stats;

/// Scatter panel: observed points plus the fitted line segment.
#[derive(Debug, Clone, PartialEq)]
pub struct ScatterPanel {
    pub x: Vec<f64>,
    pub y: Vec<f64>,
    pub fit: FitLine,
    /// Endpoints of the fitted line, evaluated at min/max observed x.
    pub fit_segment: [(f64, f64); 2],
}

impl ScatterPanel {
    pub fn points(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.x.iter().copied().zip(self.y.iter().copied())
    }
}

/// All computed outputs of a single demo run, one field per chart cell.
#[derive(Debug, Clone, PartialEq)]
pub struct PanelSet {
    pub scatter: ScatterPanel,
    pub pdf: Curve,
    pub histogram: Histogram,
    pub cdf: Curve,
    pub config: DemoConfig,
}

/// Compute all four panels from the demonstration constants.
///
/// Pure computation: every call with the same config yields the same panels.
pub fn build_panels(config: &DemoConfig) -> Result<PanelSet, AppError> {
    let scatter = build_scatter(config)?;

    let pdf = stats::sample_curve(
        stats::standard_normal_pdf,
        config.curve_min,
        config.curve_max,
        config.curve_step,
    )?;

    let samples = stats::generate_skewed_samples(
        config.gamma_seed,
        config.gamma_count,
        config.gamma_shape,
        config.gamma_scale,
    )?;
    let histogram = stats::density_histogram(&samples, config.hist_bins)?;

    let cdf_fn: fn(f64) -> f64 = match config.cdf {
        CdfKind::NormalApprox => stats::standard_normal_cdf,
        CdfKind::Logistic => stats::logistic_cdf,
    };
    let cdf = stats::sample_curve(cdf_fn, config.curve_min, config.curve_max, config.curve_step)?;

    Ok(PanelSet {
        scatter,
        pdf,
        histogram,
        cdf,
        config: config.clone(),
    })
}

fn build_scatter(config: &DemoConfig) -> Result<ScatterPanel, AppError> {
    let (x, y) = match config.scatter {
        ScatterKind::LinearTrend => {
            let x = stats::generate_uniform_averages(
                config.scatter_seed,
                config.scatter_count,
                1,
                config.scatter_low,
                config.scatter_high,
            )?;
            let noise = stats::generate_uniform_averages(
                config.noise_seed,
                config.scatter_count,
                1,
                config.noise_low,
                config.noise_high,
            )?;
            let y = x
                .iter()
                .zip(noise.iter())
                .map(|(&xi, &ni)| xi * config.trend_slope + ni)
                .collect();
            (x, y)
        }
        ScatterKind::Parabola => {
            stats::generate_noisy_parabola(config.scatter_seed, config.scatter_count)
        }
    };

    let fit = stats::best_fit_line(&x, &y)?;

    let mut x_min = f64::INFINITY;
    let mut x_max = f64::NEG_INFINITY;
    for &v in &x {
        x_min = x_min.min(v);
        x_max = x_max.max(v);
    }

    Ok(ScatterPanel {
        fit,
        fit_segment: [(x_min, fit.y_at(x_min)), (x_max, fit.y_at(x_max))],
        x,
        y,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classic_panels_have_expected_shapes() {
        let config = DemoConfig::classic();
        let panels = build_panels(&config).unwrap();

        assert_eq!(panels.scatter.x.len(), 100);
        assert_eq!(panels.scatter.y.len(), 100);
        assert_eq!(panels.pdf.len(), 60);
        assert_eq!(panels.histogram.bins.len(), 50);
        assert_eq!(panels.cdf.len(), 60);

        // CDF values stay in [0, 1] and rise from near 0 to near 1.
        assert!(panels.cdf.y.iter().all(|&v| (0.0..=1.0).contains(&v)));
        assert!(panels.cdf.y[0] < 0.01);
        assert!(*panels.cdf.y.last().unwrap() > 0.99);
    }

    #[test]
    fn classic_scatter_trend_is_recovered() {
        // y = x / 1.5 + U(0, 20): the fitted slope should sit near 1/1.5 and
        // the intercept near the mean of the noise (10).
        let panels = build_panels(&DemoConfig::classic()).unwrap();
        let fit = panels.scatter.fit;
        assert!((fit.slope - 1.0 / 1.5).abs() < 0.1, "slope {}", fit.slope);
        assert!((fit.intercept - 10.0).abs() < 6.0, "intercept {}", fit.intercept);
    }

    #[test]
    fn build_is_deterministic() {
        let config = DemoConfig::classic();
        let a = build_panels(&config).unwrap();
        let b = build_panels(&config).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn parabola_variant_swaps_scatter_and_cdf() {
        let panels = build_panels(&DemoConfig::parabola()).unwrap();

        // x is the index sequence 0..count-1.
        assert_eq!(panels.scatter.x[0], 0.0);
        assert_eq!(*panels.scatter.x.last().unwrap(), 99.0);

        // Logistic CDF is steeper than the normal CDF near 0; its value at
        // the first grid point past 0 already exceeds the normal one.
        let mid = panels.cdf.x.iter().position(|&x| x > 0.0).unwrap();
        let x = panels.cdf.x[mid];
        assert!((panels.cdf.y[mid] - crate::stats::logistic_cdf(x)).abs() < 1e-12);
    }

    #[test]
    fn fit_segment_spans_observed_range() {
        let panels = build_panels(&DemoConfig::classic()).unwrap();
        let [(x0, y0), (x1, y1)] = panels.scatter.fit_segment;
        assert!(x0 < x1);
        assert!((y0 - panels.scatter.fit.y_at(x0)).abs() < 1e-12);
        assert!((y1 - panels.scatter.fit.y_at(x1)).abs() < 1e-12);
    }
}
