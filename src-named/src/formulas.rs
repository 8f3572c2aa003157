//! Closed-form formulas for the name-based catalog
//!
//! Kernels whose formula differs from the CEC operator library (the CEC
//! kernels are re-centered on the origin; the classics below keep their
//! published optimum location).

use ndarray::Array1;
use std::f64::consts::PI;

/// Beale function - 2D only
/// Global minimum: f(x) = 0 at x = (3, 0.5)
/// Bounds: x_i in [-4.5, 4.5]
pub fn beale(x: &Array1<f64>) -> f64 {
    let (x1, x2) = (x[0], x[1]);
    (1.5 - x1 + x1 * x2).powi(2)
        + (2.25 - x1 + x1 * x2.powi(2)).powi(2)
        + (2.625 - x1 + x1 * x2.powi(3)).powi(2)
}

/// Bird function - 2D, highly multimodal
/// Global minimum: f(x) = -106.7645 at (4.70104, 3.15294) and (-1.58214, -3.13024)
/// Bounds: x_i in [-2*pi, 2*pi]
pub fn bird(x: &Array1<f64>) -> f64 {
    let (x1, x2) = (x[0], x[1]);
    x1.sin() * ((1.0 - x2.cos()).powi(2)).exp()
        + x2.cos() * ((1.0 - x1.sin()).powi(2)).exp()
        + (x1 - x2).powi(2)
}

/// Bohachevsky function N.1 - 2D
/// Global minimum: f(x) = 0 at x = (0, 0)
/// Bounds: x_i in [-100, 100]
pub fn bohachevsky1(x: &Array1<f64>) -> f64 {
    let (x1, x2) = (x[0], x[1]);
    x1.powi(2) + 2.0 * x2.powi(2) - 0.3 * (3.0 * PI * x1).cos() - 0.4 * (4.0 * PI * x2).cos() + 0.7
}

/// Bohachevsky function N.2 - 2D
/// Global minimum: f(x) = 0 at x = (0, 0)
/// Bounds: x_i in [-100, 100]
pub fn bohachevsky2(x: &Array1<f64>) -> f64 {
    let (x1, x2) = (x[0], x[1]);
    x1.powi(2) + 2.0 * x2.powi(2) - 0.3 * (3.0 * PI * x1).cos() * (4.0 * PI * x2).cos() + 0.3
}

/// Booth function - 2D unimodal
/// Global minimum: f(x) = 0 at x = (1, 3)
/// Bounds: x_i in [-10, 10]
pub fn booth(x: &Array1<f64>) -> f64 {
    let (x1, x2) = (x[0], x[1]);
    (x1 + 2.0 * x2 - 7.0).powi(2) + (2.0 * x1 + x2 - 5.0).powi(2)
}

/// Branin function - 2D with 3 global minima
/// Global minimum: f(x) = 0.397887 at (-pi, 12.275), (pi, 2.275), (9.42478, 2.475)
/// Bounds: x1 in [-5, 10], x2 in [0, 15]
pub fn branin(x: &Array1<f64>) -> f64 {
    let (x1, x2) = (x[0], x[1]);
    let a = 1.0;
    let b = 5.1 / (4.0 * PI * PI);
    let c = 5.0 / PI;
    let r = 6.0;
    let s = 10.0;
    let t = 1.0 / (8.0 * PI);
    a * (x2 - b * x1.powi(2) + c * x1 - r).powi(2) + s * (1.0 - t) * x1.cos() + s
}

/// Bukin function N.6 - narrow curved valley
/// Global minimum: f(x) = 0 at x = (-10, 1)
/// Bounds: x1 in [-15, -5], x2 in [-3, 3]
pub fn bukin_n6(x: &Array1<f64>) -> f64 {
    let (x1, x2) = (x[0], x[1]);
    100.0 * (x2 - x1.powi(2) / 100.0).abs().sqrt() + 0.01 * (x1 + 10.0).abs()
}

/// Cross-in-tray function - 2D with 4 global minima
/// Global minimum: f(x) = -2.06261 at (+-1.34941, +-1.34941)
/// Bounds: x_i in [-10, 10]
pub fn cross_in_tray(x: &Array1<f64>) -> f64 {
    let (x1, x2) = (x[0], x[1]);
    let inner = (x1.sin() * x2.sin() * (100.0 - (x1.powi(2) + x2.powi(2)).sqrt() / PI).abs().exp())
        .abs()
        + 1.0;
    -0.0001 * inner.powf(0.1)
}

/// Easom function - tiny basin in a flat landscape
/// Global minimum: f(x) = -1 at x = (pi, pi)
/// Bounds: x_i in [-100, 100]
pub fn easom(x: &Array1<f64>) -> f64 {
    let (x1, x2) = (x[0], x[1]);
    -x1.cos() * x2.cos() * (-(x1 - PI).powi(2) - (x2 - PI).powi(2)).exp()
}

/// Eggholder function - highly multimodal, very challenging
/// Global minimum: f(x) = -959.6407 at x = (512, 404.2319)
/// Bounds: x_i in [-512, 512]
pub fn eggholder(x: &Array1<f64>) -> f64 {
    let (x1, x2) = (x[0], x[1]);
    -(x2 + 47.0) * (x2 + x1 / 2.0 + 47.0).abs().sqrt().sin()
        - x1 * (x1 - x2 - 47.0).abs().sqrt().sin()
}

/// Goldstein-Price function - 2D multimodal
/// Global minimum: f(x) = 3 at x = (0, -1)
/// Bounds: x_i in [-2, 2]
pub fn goldstein_price(x: &Array1<f64>) -> f64 {
    let (x1, x2) = (x[0], x[1]);
    let term1 = 1.0
        + (x1 + x2 + 1.0).powi(2)
            * (19.0 - 14.0 * x1 + 3.0 * x1.powi(2) - 14.0 * x2 + 6.0 * x1 * x2
                + 3.0 * x2.powi(2));
    let term2 = 30.0
        + (2.0 * x1 - 3.0 * x2).powi(2)
            * (18.0 - 32.0 * x1 + 12.0 * x1.powi(2) + 48.0 * x2 - 36.0 * x1 * x2
                + 27.0 * x2.powi(2));
    term1 * term2
}

/// Himmelblau function - 2D with 4 global minima
/// Global minimum: f(x) = 0 at (3, 2), (-2.805118, 3.131312),
/// (-3.779310, -3.283186), (3.584428, -1.848126)
/// Bounds: x_i in [-5, 5]
pub fn himmelblau(x: &Array1<f64>) -> f64 {
    let (x1, x2) = (x[0], x[1]);
    (x1.powi(2) + x2 - 11.0).powi(2) + (x1 + x2.powi(2) - 7.0).powi(2)
}

/// Holder table function - 2D with 4 global minima
/// Global minimum: f(x) = -19.2085 at (+-8.05502, +-9.66459)
/// Bounds: x_i in [-10, 10]
pub fn holder_table(x: &Array1<f64>) -> f64 {
    let (x1, x2) = (x[0], x[1]);
    -(x1.sin() * x2.cos() * (1.0 - (x1.powi(2) + x2.powi(2)).sqrt() / PI).abs().exp()).abs()
}

/// Levy function N.13 - 2D multimodal
/// Global minimum: f(x) = 0 at x = (1, 1)
/// Bounds: x_i in [-10, 10]
pub fn levy_n13(x: &Array1<f64>) -> f64 {
    let (x1, x2) = (x[0], x[1]);
    (3.0 * PI * x1).sin().powi(2)
        + (x1 - 1.0).powi(2) * (1.0 + (3.0 * PI * x2).sin().powi(2))
        + (x2 - 1.0).powi(2) * (1.0 + (2.0 * PI * x2).sin().powi(2))
}

/// Matyas function - 2D unimodal plate
/// Global minimum: f(x) = 0 at x = (0, 0)
/// Bounds: x_i in [-10, 10]
pub fn matyas(x: &Array1<f64>) -> f64 {
    let (x1, x2) = (x[0], x[1]);
    0.26 * (x1.powi(2) + x2.powi(2)) - 0.48 * x1 * x2
}

/// McCormick function - 2D
/// Global minimum: f(x) = -1.9133 at x = (-0.54719, -1.54719)
/// Bounds: x1 in [-1.5, 4], x2 in [-3, 4]
pub fn mccormick(x: &Array1<f64>) -> f64 {
    let (x1, x2) = (x[0], x[1]);
    (x1 + x2).sin() + (x1 - x2).powi(2) - 1.5 * x1 + 2.5 * x2 + 1.0
}

/// Schaffer function N.2 - 2D
/// Global minimum: f(x) = 0 at x = (0, 0)
/// Bounds: x_i in [-100, 100]
pub fn schaffer_n2(x: &Array1<f64>) -> f64 {
    let (x1, x2) = (x[0], x[1]);
    0.5 + ((x1.powi(2) - x2.powi(2)).sin().powi(2) - 0.5)
        / (1.0 + 0.001 * (x1.powi(2) + x2.powi(2))).powi(2)
}

/// Six-hump camel function - 2D with 2 global minima
/// Global minimum: f(x) = -1.0316 at (0.0898, -0.7126) and (-0.0898, 0.7126)
/// Bounds: x1 in [-3, 3], x2 in [-2, 2]
pub fn six_hump_camel(x: &Array1<f64>) -> f64 {
    let (x1, x2) = (x[0], x[1]);
    (4.0 - 2.1 * x1.powi(2) + x1.powi(4) / 3.0) * x1.powi(2)
        + x1 * x2
        + (-4.0 + 4.0 * x2.powi(2)) * x2.powi(2)
}

/// Three-hump camel function - 2D
/// Global minimum: f(x) = 0 at x = (0, 0)
/// Bounds: x_i in [-5, 5]
pub fn three_hump_camel(x: &Array1<f64>) -> f64 {
    let (x1, x2) = (x[0], x[1]);
    2.0 * x1.powi(2) - 1.05 * x1.powi(4) + x1.powi(6) / 6.0 + x1 * x2 + x2.powi(2)
}

/// Rosenbrock function (classic form) - N-dimensional banana valley
/// Global minimum: f(x) = 0 at x = (1, 1, ..., 1)
/// Bounds: x_i in [-2.048, 2.048]
pub fn rosenbrock(x: &Array1<f64>) -> f64 {
    (0..x.len().saturating_sub(1))
        .map(|i| 100.0 * (x[i + 1] - x[i] * x[i]).powi(2) + (1.0 - x[i]).powi(2))
        .sum()
}

/// Schwefel function (classic form) - N-dimensional, many deep local minima
/// Global minimum: f(x) ~ 0 at x = (420.9687, ..., 420.9687)
/// Bounds: x_i in [-500, 500]
pub fn schwefel(x: &Array1<f64>) -> f64 {
    let n = x.len() as f64;
    418.9829 * n - x.iter().map(|&xi| xi * xi.abs().sqrt().sin()).sum::<f64>()
}

/// Styblinski-Tang function - N-dimensional
/// Global minimum: f(x) ~ -39.1662 n at x = (-2.903534, ..., -2.903534)
/// Bounds: x_i in [-5, 5]
pub fn styblinski_tang(x: &Array1<f64>) -> f64 {
    0.5 * x.iter().map(|&xi| xi.powi(4) - 16.0 * xi.powi(2) + 5.0 * xi).sum::<f64>()
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    const TOL: f64 = 1e-10;

    #[test]
    fn test_exact_minima() {
        assert!(beale(&array![3.0, 0.5]).abs() < TOL);
        assert!(bohachevsky1(&array![0.0, 0.0]).abs() < TOL);
        assert!(bohachevsky2(&array![0.0, 0.0]).abs() < TOL);
        assert!(booth(&array![1.0, 3.0]).abs() < TOL);
        assert!(bukin_n6(&array![-10.0, 1.0]).abs() < TOL);
        assert!((easom(&array![PI, PI]) + 1.0).abs() < TOL);
        assert!((goldstein_price(&array![0.0, -1.0]) - 3.0).abs() < TOL);
        assert!(himmelblau(&array![3.0, 2.0]).abs() < TOL);
        assert!(levy_n13(&array![1.0, 1.0]).abs() < TOL);
        assert!(matyas(&array![0.0, 0.0]).abs() < TOL);
        assert!(schaffer_n2(&array![0.0, 0.0]).abs() < TOL);
        assert!(three_hump_camel(&array![0.0, 0.0]).abs() < TOL);
        assert!(rosenbrock(&array![1.0, 1.0, 1.0]).abs() < TOL);
    }

    #[test]
    fn test_published_approximate_minima() {
        assert!((bird(&array![4.70104, 3.15294]) + 106.7645).abs() < 1e-3);
        assert!((branin(&array![PI, 2.275]) - 0.397887).abs() < 1e-5);
        assert!((cross_in_tray(&array![1.34941, 1.34941]) + 2.06261).abs() < 1e-5);
        assert!((eggholder(&array![512.0, 404.2319]) + 959.6407).abs() < 1e-3);
        assert!((holder_table(&array![8.05502, 9.66459]) + 19.2085).abs() < 1e-3);
        assert!((mccormick(&array![-0.54719, -1.54719]) + 1.9133).abs() < 1e-3);
        assert!((six_hump_camel(&array![0.0898, -0.7126]) + 1.0316).abs() < 1e-3);
        assert!((schwefel(&array![420.9687, 420.9687]).abs()) < 1e-3);
        assert!((styblinski_tang(&array![-2.903534, -2.903534]) + 2.0 * 39.16617).abs() < 1e-3);
    }

    #[test]
    fn test_himmelblau_all_four_minima() {
        for m in [
            [3.0, 2.0],
            [-2.805118, 3.131312],
            [-3.779310, -3.283186],
            [3.584428, -1.848126],
        ] {
            assert!(himmelblau(&array![m[0], m[1]]).abs() < 1e-6, "minimum {:?}", m);
        }
    }
}
