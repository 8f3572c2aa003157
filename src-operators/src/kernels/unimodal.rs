//! Unimodal kernels
//!
//! Single-optimum kernels used as components of the shifted/rotated and
//! composition benchmark families. All of them vanish at the origin.

use ndarray::Array1;

/// Sphere kernel
/// Minimum: f(z) = 0 at z = (0, 0, ..., 0)
pub fn sphere(z: &Array1<f64>) -> f64 {
    z.iter().map(|&zi| zi * zi).sum()
}

/// Bent cigar kernel - smooth but narrow ridge
/// Minimum: f(z) = 0 at z = (0, 0, ..., 0)
pub fn bent_cigar(z: &Array1<f64>) -> f64 {
    if z.is_empty() {
        return 0.0;
    }
    z[0] * z[0] + 1e6 * z.iter().skip(1).map(|&zi| zi * zi).sum::<f64>()
}

/// Discus kernel - one sensitive direction
/// Minimum: f(z) = 0 at z = (0, 0, ..., 0)
pub fn discus(z: &Array1<f64>) -> f64 {
    if z.is_empty() {
        return 0.0;
    }
    1e6 * z[0] * z[0] + z.iter().skip(1).map(|&zi| zi * zi).sum::<f64>()
}

/// High conditioned elliptic kernel, condition number 1e6
/// Minimum: f(z) = 0 at z = (0, 0, ..., 0)
pub fn high_conditioned_elliptic(z: &Array1<f64>) -> f64 {
    let d = z.len();
    if d <= 1 {
        return z.iter().map(|&zi| zi * zi).sum();
    }
    z.iter()
        .enumerate()
        .map(|(i, &zi)| 1e6_f64.powf(i as f64 / (d - 1) as f64) * zi * zi)
        .sum()
}

/// Zakharov kernel
/// Minimum: f(z) = 0 at z = (0, 0, ..., 0)
pub fn zakharov(z: &Array1<f64>) -> f64 {
    let sum1: f64 = z.iter().map(|&zi| zi * zi).sum();
    let sum2: f64 = z.iter().enumerate().map(|(i, &zi)| 0.5 * (i + 1) as f64 * zi).sum();
    sum1 + sum2.powi(2) + sum2.powi(4)
}

/// Rosenbrock kernel, with the published internal +1 offset
/// Minimum: f(z) = 0 at z = (0, 0, ..., 0)
pub fn rosenbrock(z: &Array1<f64>) -> f64 {
    let y: Vec<f64> = z.iter().map(|&zi| zi + 1.0).collect();
    y.windows(2)
        .map(|w| 100.0 * (w[0] * w[0] - w[1]).powi(2) + (w[0] - 1.0).powi(2))
        .sum()
}
