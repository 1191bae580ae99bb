//! Synthetic sample generation.
//!
//! All generators here follow the same reproducibility contract: the caller
//! passes a seed, the function builds a local `StdRng` from it, and the
//! returned sequence is fully determined by the seed and parameters. No
//! generator state outlives the call.

use rand::prelude::*;
use rand::rngs::StdRng;
use rand_distr::Gamma;

use crate::error::AppError;

/// Quadratic coefficient for the noisy parabola: `y = 0.05 (x - 50)^2 + noise`.
const PARABOLA_COEFF: f64 = 0.05;
/// Horizontal offset of the parabola vertex.
const PARABOLA_CENTER: f64 = 50.0;
/// Half-width of the uniform noise band around the parabola.
const PARABOLA_NOISE: f64 = 20.0;

/// Generate `count` points, each the arithmetic mean of `samples_per_point`
/// uniform draws in `[low, high]`.
///
/// With `samples_per_point == 1` this is plain uniform sampling; with larger
/// values the averages tend toward a normal shape (central limit theorem),
/// which is what the PDF/CDF demo panels illustrate.
pub fn generate_uniform_averages(
    seed: u64,
    count: usize,
    samples_per_point: usize,
    low: f64,
    high: f64,
) -> Result<Vec<f64>, AppError> {
    if samples_per_point == 0 {
        return Err(AppError::invalid_argument(
            "samples_per_point must be > 0.",
        ));
    }
    if !(low.is_finite() && high.is_finite()) || high < low {
        return Err(AppError::invalid_argument(format!(
            "Invalid uniform range [{low}, {high}]."
        )));
    }

    let mut rng = StdRng::seed_from_u64(seed);
    let mut out = Vec::with_capacity(count);
    for _ in 0..count {
        let mut sum = 0.0;
        for _ in 0..samples_per_point {
            sum += rng.gen_range(low..=high);
        }
        out.push(sum / samples_per_point as f64);
    }
    Ok(out)
}

/// Generate a noisy parabola: `x = 0..count-1`,
/// `y = 0.05 (x - 50)^2 + U(-20, 20)`.
///
/// Deterministic per seed; the noise draws consume the local generator in
/// index order.
pub fn generate_noisy_parabola(seed: u64, count: usize) -> (Vec<f64>, Vec<f64>) {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut xs = Vec::with_capacity(count);
    let mut ys = Vec::with_capacity(count);
    for i in 0..count {
        let x = i as f64;
        let noise = rng.gen_range(-PARABOLA_NOISE..=PARABOLA_NOISE);
        xs.push(x);
        ys.push(PARABOLA_COEFF * (x - PARABOLA_CENTER).powi(2) + noise);
    }
    (xs, ys)
}

/// Generate `count` gamma-distributed draws (positively skewed).
///
/// Used for the skewed-histogram panel; shape=2, scale=250 reproduces the
/// classic demo's long right tail.
pub fn generate_skewed_samples(
    seed: u64,
    count: usize,
    shape: f64,
    scale: f64,
) -> Result<Vec<f64>, AppError> {
    let gamma = Gamma::new(shape, scale).map_err(|e| {
        AppError::invalid_argument(format!("Invalid gamma parameters: {e}"))
    })?;

    let mut rng = StdRng::seed_from_u64(seed);
    Ok((0..count).map(|_| gamma.sample(&mut rng)).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    #[test]
    fn uniform_averages_reproducible_per_seed() {
        let a = generate_uniform_averages(1, 200, 5, 0.0, 100.0).unwrap();
        let b = generate_uniform_averages(1, 200, 5, 0.0, 100.0).unwrap();
        assert_eq!(a, b);

        let c = generate_uniform_averages(2, 200, 5, 0.0, 100.0).unwrap();
        assert_ne!(a, c);
    }

    #[test]
    fn uniform_averages_stay_in_range() {
        let v = generate_uniform_averages(7, 500, 1, 10.0, 20.0).unwrap();
        assert_eq!(v.len(), 500);
        assert!(v.iter().all(|&x| (10.0..=20.0).contains(&x)));
    }

    #[test]
    fn uniform_averages_concentrate_around_midpoint() {
        // Averaging 50 draws per point should pull every point well inside
        // the raw range; the sample mean lands near (low + high) / 2.
        let v = generate_uniform_averages(3, 1_000, 50, 0.0, 100.0).unwrap();
        let mean = v.iter().sum::<f64>() / v.len() as f64;
        assert!((mean - 50.0).abs() < 2.0, "mean {mean} too far from 50");
        assert!(v.iter().all(|&x| (20.0..=80.0).contains(&x)));
    }

    #[test]
    fn uniform_averages_rejects_bad_arguments() {
        let err = generate_uniform_averages(1, 10, 0, 0.0, 1.0).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidArgument);

        let err = generate_uniform_averages(1, 10, 1, 5.0, 1.0).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidArgument);

        let err = generate_uniform_averages(1, 10, 1, 0.0, f64::NAN).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidArgument);
    }

    #[test]
    fn uniform_averages_degenerate_range_is_constant() {
        let v = generate_uniform_averages(1, 10, 3, 5.0, 5.0).unwrap();
        assert!(v.iter().all(|&x| x == 5.0));
    }

    #[test]
    fn noisy_parabola_reproducible_per_seed() {
        let (x1, y1) = generate_noisy_parabola(1, 100);
        let (x2, y2) = generate_noisy_parabola(1, 100);
        assert_eq!(x1, x2);
        assert_eq!(y1, y2);
    }

    #[test]
    fn noisy_parabola_shape() {
        let (xs, ys) = generate_noisy_parabola(42, 100);
        assert_eq!(xs.len(), 100);
        assert_eq!(ys.len(), 100);

        for (i, (&x, &y)) in xs.iter().zip(ys.iter()).enumerate() {
            assert_eq!(x, i as f64);
            let base = 0.05 * (x - 50.0).powi(2);
            assert!(
                (y - base).abs() <= 20.0,
                "y[{i}] = {y} outside noise band around {base}"
            );
        }
    }

    #[test]
    fn skewed_samples_are_positive_and_reproducible() {
        let a = generate_skewed_samples(0, 1_000, 2.0, 250.0).unwrap();
        let b = generate_skewed_samples(0, 1_000, 2.0, 250.0).unwrap();
        assert_eq!(a, b);
        assert!(a.iter().all(|&x| x > 0.0));

        // Gamma(2, 250) has mean 500; a 1000-draw sample mean should be close.
        let mean = a.iter().sum::<f64>() / a.len() as f64;
        assert!((mean - 500.0).abs() < 60.0, "sample mean {mean}");
    }

    #[test]
    fn skewed_samples_rejects_bad_parameters() {
        let err = generate_skewed_samples(0, 10, -1.0, 250.0).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidArgument);
    }
}
