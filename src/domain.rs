//! Shared domain types.
//!
//! These types are intentionally kept lightweight so they can be:
//!
//! - produced by the numeric routines in `stats`
//! - assembled into panels by the pipeline
//! - handed as plain (x, y) data to whichever renderer is active

/// An evaluated curve: parallel x/y vectors over an evenly spaced domain.
#[derive(Debug, Clone, PartialEq)]
pub struct Curve {
    pub x: Vec<f64>,
    pub y: Vec<f64>,
}

impl Curve {
    pub fn len(&self) -> usize {
        self.x.len()
    }

    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }

    /// Iterate the curve as (x, y) pairs (the shape Plotters wants).
    pub fn points(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.x.iter().copied().zip(self.y.iter().copied())
    }
}

/// Ordinary least-squares fit parameters.
///
/// Computed once from two equal-length sample sequences; immutable after
/// creation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FitLine {
    pub slope: f64,
    pub intercept: f64,
}

impl FitLine {
    /// Evaluate the fitted line at `x`.
    pub fn y_at(&self, x: f64) -> f64 {
        self.slope * x + self.intercept
    }
}

/// An equal-width density histogram.
///
/// `bins` holds `(left_edge, density)` per bin; densities are normalized so
/// that `Σ density_i * bin_width == 1`.
#[derive(Debug, Clone, PartialEq)]
pub struct Histogram {
    pub bin_width: f64,
    pub bins: Vec<(f64, f64)>,
}

impl Histogram {
    /// Maximum bar height (0.0 for an empty histogram).
    pub fn max_density(&self) -> f64 {
        self.bins.iter().map(|&(_, d)| d).fold(0.0, f64::max)
    }
}

/// Which synthetic dataset feeds the scatter panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScatterKind {
    /// Uniform-average x values with a linear trend plus uniform noise.
    LinearTrend,
    /// `y = 0.05 (x - 50)^2` plus uniform noise in [-20, 20].
    Parabola,
}

/// Which cumulative-distribution curve fills the fourth panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CdfKind {
    /// Abramowitz-Stegun approximation of the standard normal CDF.
    NormalApprox,
    /// Logistic sigmoid `1 / (1 + exp(-2x))`.
    Logistic,
}

impl CdfKind {
    /// Panel title for terminal output.
    pub fn display_name(self) -> &'static str {
        match self {
            CdfKind::NormalApprox => "Standard Normal CDF",
            CdfKind::Logistic => "Logistic CDF",
        }
    }
}

/// Every demonstration constant in one place.
///
/// The historical demo existed as two near-identical scripts that differed
/// only in these values; here the variants are presets over a single
/// parameterized pipeline.
#[derive(Debug, Clone, PartialEq)]
pub struct DemoConfig {
    pub scatter: ScatterKind,
    pub cdf: CdfKind,

    /// Seed for the scatter panel's x samples (or the parabola noise).
    pub scatter_seed: u64,
    /// Seed for the additive noise samples (linear-trend variant only).
    pub noise_seed: u64,
    pub scatter_count: usize,
    pub scatter_low: f64,
    pub scatter_high: f64,
    pub noise_low: f64,
    pub noise_high: f64,
    /// Slope of the underlying trend before noise (linear-trend variant).
    pub trend_slope: f64,

    /// Gamma sample parameters for the skewed histogram panel.
    pub gamma_seed: u64,
    pub gamma_count: usize,
    pub gamma_shape: f64,
    pub gamma_scale: f64,
    pub hist_bins: usize,

    /// Evaluation domain for the PDF and CDF curve panels.
    pub curve_min: f64,
    pub curve_max: f64,
    pub curve_step: f64,
}

impl DemoConfig {
    /// The classic demo: linear-trend scatter and the normal CDF.
    pub fn classic() -> Self {
        Self {
            scatter: ScatterKind::LinearTrend,
            cdf: CdfKind::NormalApprox,
            scatter_seed: 1,
            noise_seed: 2,
            scatter_count: 100,
            scatter_low: 0.0,
            scatter_high: 100.0,
            noise_low: 0.0,
            noise_high: 20.0,
            trend_slope: 1.0 / 1.5,
            gamma_seed: 0,
            gamma_count: 10_000,
            gamma_shape: 2.0,
            gamma_scale: 250.0,
            hist_bins: 50,
            curve_min: -3.0,
            curve_max: 3.0,
            curve_step: 0.1,
        }
    }

    /// The parabola variant: noisy-parabola scatter and the logistic CDF.
    pub fn parabola() -> Self {
        Self {
            scatter: ScatterKind::Parabola,
            cdf: CdfKind::Logistic,
            ..Self::classic()
        }
    }
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self::classic()
    }
}
