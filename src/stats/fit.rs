//! Ordinary least-squares line fitting.
//!
//! The scatter panel only ever needs a single straight line through two
//! equal-length sequences, so we use the textbook closed form directly:
//!
//! ```text
//! slope     = Σ (x_i - x̄)(y_i - ȳ) / Σ (x_i - x̄)²
//! intercept = ȳ - slope · x̄
//! ```
//!
//! No design matrix, no solver: the denominator is the only thing that can
//! go wrong, and it is checked explicitly.

use crate::domain::FitLine;
use crate::error::AppError;

/// Fit `y = slope * x + intercept` by ordinary least squares.
///
/// Requires `x.len() == y.len() >= 2`. Fails with `DivisionByZero` when all
/// x values are identical (zero variance in x).
pub fn best_fit_line(x: &[f64], y: &[f64]) -> Result<FitLine, AppError> {
    if x.len() != y.len() {
        return Err(AppError::invalid_argument(format!(
            "Length mismatch: {} x values vs {} y values.",
            x.len(),
            y.len()
        )));
    }
    if x.len() < 2 {
        return Err(AppError::invalid_argument(
            "Best-fit line needs at least 2 points.",
        ));
    }

    let n = x.len() as f64;
    let x_bar = x.iter().sum::<f64>() / n;
    let y_bar = y.iter().sum::<f64>() / n;

    let mut numerator = 0.0;
    let mut denominator = 0.0;
    for (&xi, &yi) in x.iter().zip(y.iter()) {
        let dx = xi - x_bar;
        numerator += dx * (yi - y_bar);
        denominator += dx * dx;
    }

    if denominator == 0.0 {
        return Err(AppError::division_by_zero(
            "All x values are identical (zero variance).",
        ));
    }

    let slope = numerator / denominator;
    Ok(FitLine {
        slope,
        intercept: y_bar - slope * x_bar,
    })
}
