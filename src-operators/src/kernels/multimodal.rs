//! Multimodal kernels
//!
//! Many-local-minima kernels. As for the unimodal group, every kernel
//! attains its minimum value 0 at the origin; happy cat and hgbat carry
//! their published internal -1 offset for that reason.

use ndarray::Array1;
use std::f64::consts::{E, TAU};

/// Ackley kernel
/// Minimum: f(z) = 0 at z = (0, 0, ..., 0)
pub fn ackley(z: &Array1<f64>) -> f64 {
    let d = z.len();
    if d == 0 {
        return 0.0;
    }
    let nd = d as f64;
    let sum_sq: f64 = z.iter().map(|&zi| zi * zi).sum();
    let sum_cos: f64 = z.iter().map(|&zi| (TAU * zi).cos()).sum();
    -20.0 * (-0.2 * (sum_sq / nd).sqrt()).exp() - (sum_cos / nd).exp() + 20.0 + E
}

/// Griewank kernel
/// Minimum: f(z) = 0 at z = (0, 0, ..., 0)
pub fn griewank(z: &Array1<f64>) -> f64 {
    let sum_sq: f64 = z.iter().map(|&zi| zi * zi).sum();
    let prod_cos: f64 =
        z.iter().enumerate().map(|(i, &zi)| (zi / ((i + 1) as f64).sqrt()).cos()).product();
    sum_sq / 4000.0 - prod_cos + 1.0
}

/// Rastrigin kernel
/// Minimum: f(z) = 0 at z = (0, 0, ..., 0)
pub fn rastrigin(z: &Array1<f64>) -> f64 {
    z.iter().map(|&zi| zi * zi - 10.0 * (TAU * zi).cos() + 10.0).sum()
}

/// Non-continuous rastrigin kernel: coordinates beyond 0.5 snap to half steps
/// Minimum: f(z) = 0 at z = (0, 0, ..., 0)
pub fn non_continuous_rastrigin(z: &Array1<f64>) -> f64 {
    z.iter()
        .map(|&zi| if zi.abs() <= 0.5 { zi } else { (2.0 * zi).round() / 2.0 })
        .map(|yi| yi * yi - 10.0 * (TAU * yi).cos() + 10.0)
        .sum()
}

/// Weierstrass kernel, a = 0.5, b = 3, k_max = 20
/// Continuous everywhere yet differentiable only on a set of points.
/// Minimum: f(z) = 0 at z = (0, 0, ..., 0)
pub fn weierstrass(z: &Array1<f64>) -> f64 {
    const A: f64 = 0.5;
    const B: f64 = 3.0;
    const K_MAX: i32 = 20;

    let series = |x: f64| -> f64 {
        (0..=K_MAX).map(|k| A.powi(k) * (TAU * B.powi(k) * (x + 0.5)).cos()).sum()
    };
    let sum: f64 = z.iter().map(|&zi| series(zi)).sum();
    sum - z.len() as f64 * series(0.0)
}

/// Argmin of g(v) = v sin(sqrt(|v|)) on [0, 500], anchoring the modified
/// schwefel kernel at zero.
const SCHWEFEL_OPT: f64 = 420.9687462275036;

/// Modified schwefel kernel
/// Minimum: f(z) = 0 at z = (0, 0, ..., 0)
pub fn modified_schwefel(z: &Array1<f64>) -> f64 {
    let d = z.len() as f64;
    let g = |v: f64| -> f64 {
        if v.abs() <= 500.0 {
            v * v.abs().sqrt().sin()
        } else if v > 500.0 {
            let w = 500.0 - v % 500.0;
            w * w.abs().sqrt().sin() - (v - 500.0).powi(2) / (10000.0 * d)
        } else {
            let w = v.abs() % 500.0 - 500.0;
            w * w.abs().sqrt().sin() - (v + 500.0).powi(2) / (10000.0 * d)
        }
    };
    let anchor = g(SCHWEFEL_OPT);
    z.iter().map(|&zi| anchor - g(zi + SCHWEFEL_OPT)).sum()
}

/// Katsuura kernel, 32 inner terms
/// Continuous everywhere yet differentiable nowhere.
/// Minimum: f(z) = 0 at z = (0, 0, ..., 0)
pub fn katsuura(z: &Array1<f64>) -> f64 {
    let d = z.len();
    if d == 0 {
        return 0.0;
    }
    let nd = d as f64;
    let factor = 10.0 / (nd * nd);
    let exponent = 10.0 / nd.powf(1.2);

    let product: f64 = z
        .iter()
        .enumerate()
        .map(|(i, &zi)| {
            let inner: f64 = (1..=32)
                .map(|j| {
                    let p = 2.0_f64.powi(j);
                    (p * zi - (p * zi).round()).abs() / p
                })
                .sum();
            (1.0 + (i + 1) as f64 * inner).powf(exponent)
        })
        .product();

    factor * product - factor
}

/// Happy cat kernel, with the published internal -1 offset
/// Minimum: f(z) = 0 at z = (0, 0, ..., 0)
pub fn happy_cat(z: &Array1<f64>) -> f64 {
    let d = z.len();
    if d == 0 {
        return 0.0;
    }
    let nd = d as f64;
    let r2: f64 = z.iter().map(|&zi| (zi - 1.0) * (zi - 1.0)).sum();
    let s: f64 = z.iter().map(|&zi| zi - 1.0).sum();
    (r2 - nd).abs().powf(0.25) + (0.5 * r2 + s) / nd + 0.5
}

/// HGBat kernel, with the published internal -1 offset
/// Minimum: f(z) = 0 at z = (0, 0, ..., 0)
pub fn hgbat(z: &Array1<f64>) -> f64 {
    let d = z.len();
    if d == 0 {
        return 0.0;
    }
    let nd = d as f64;
    let r2: f64 = z.iter().map(|&zi| (zi - 1.0) * (zi - 1.0)).sum();
    let s: f64 = z.iter().map(|&zi| zi - 1.0).sum();
    (r2 * r2 - s * s).abs().sqrt() + (0.5 * r2 + s) / nd + 0.5
}

/// Levy kernel, w = 1 + z/4 so the kernel vanishes at the origin
/// Minimum: f(z) = 0 at z = (0, 0, ..., 0)
pub fn levy(z: &Array1<f64>) -> f64 {
    use std::f64::consts::PI;
    let d = z.len();
    if d == 0 {
        return 0.0;
    }
    let w: Vec<f64> = z.iter().map(|&zi| 1.0 + zi / 4.0).collect();

    let head = (PI * w[0]).sin().powi(2);
    let body: f64 = w[..d - 1]
        .iter()
        .map(|&wi| (wi - 1.0).powi(2) * (1.0 + 10.0 * (PI * wi + 1.0).sin().powi(2)))
        .sum();
    let wd = w[d - 1];
    let tail = (wd - 1.0).powi(2) * (1.0 + (TAU * wd).sin().powi(2));

    head + body + tail
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::Array1;

    const TOL: f64 = 1e-10;

    #[test]
    fn test_multimodal_kernels_vanish_at_origin() {
        for d in [2, 10, 30] {
            let z = Array1::zeros(d);
            assert!(ackley(&z).abs() < TOL, "ackley, d={}", d);
            assert!(griewank(&z).abs() < TOL, "griewank, d={}", d);
            assert!(rastrigin(&z).abs() < TOL, "rastrigin, d={}", d);
            assert!(non_continuous_rastrigin(&z).abs() < TOL, "nc rastrigin, d={}", d);
            assert!(weierstrass(&z).abs() < TOL, "weierstrass, d={}", d);
            assert!(modified_schwefel(&z).abs() < TOL, "modified schwefel, d={}", d);
            assert!(katsuura(&z).abs() < TOL, "katsuura, d={}", d);
            assert!(happy_cat(&z).abs() < TOL, "happy cat, d={}", d);
            assert!(hgbat(&z).abs() < TOL, "hgbat, d={}", d);
            assert!(levy(&z).abs() < TOL, "levy, d={}", d);
        }
    }

    #[test]
    fn test_rastrigin_known_value() {
        // integer coordinates leave only the quadratic term
        let z = Array1::from_vec(vec![1.0, 2.0]);
        assert!((rastrigin(&z) - 5.0).abs() < 1e-9);
    }

    #[test]
    fn test_non_continuous_rastrigin_snaps() {
        let z = Array1::from_vec(vec![0.74, 0.74]);
        let snapped = Array1::from_vec(vec![0.5, 0.5]);
        assert!((non_continuous_rastrigin(&z) - rastrigin(&snapped)).abs() < 1e-12);
    }

    #[test]
    fn test_ackley_bounded_range() {
        let z = Array1::from_vec(vec![25.0, -30.0, 12.0]);
        let v = ackley(&z);
        assert!(v > 15.0 && v < 25.0);
    }

    #[test]
    fn test_happy_cat_and_hgbat_positive_away_from_origin() {
        let z = Array1::from_vec(vec![1.0, 1.0, 1.0, 1.0]);
        assert!(happy_cat(&z) > 0.0);
        assert!(hgbat(&z) > 0.0);
    }

    #[test]
    fn test_modified_schwefel_branches_finite() {
        let z = Array1::from_vec(vec![600.0, -600.0, 100.0]);
        assert!(modified_schwefel(&z).is_finite());
        assert!(modified_schwefel(&z) > 0.0);
    }

    #[test]
    fn test_weierstrass_positive_off_origin() {
        let z = Array1::from_vec(vec![0.25, -0.25]);
        assert!(weierstrass(&z) > 0.0);
    }
}
