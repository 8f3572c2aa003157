//! Expanded kernels
//!
//! Kernels built by chaining a two-argument core over consecutive
//! coordinate pairs (cyclically, so the last coordinate pairs with the
//! first). All of them vanish at the origin.

use ndarray::Array1;

fn schaffer_f6_pair(x: f64, y: f64) -> f64 {
    let r2 = x * x + y * y;
    0.5 + (r2.sqrt().sin().powi(2) - 0.5) / (1.0 + 0.001 * r2).powi(2)
}

/// Expanded schaffer F6 kernel
/// Minimum: f(z) = 0 at z = (0, 0, ..., 0)
pub fn expanded_schaffer_f6(z: &Array1<f64>) -> f64 {
    let d = z.len();
    if d < 2 {
        return 0.0;
    }
    (0..d).map(|i| schaffer_f6_pair(z[i], z[(i + 1) % d])).sum()
}

/// Expanded griewank-rosenbrock kernel, with the published internal +1 offset
/// Minimum: f(z) = 0 at z = (0, 0, ..., 0)
pub fn expanded_griewank_rosenbrock(z: &Array1<f64>) -> f64 {
    let d = z.len();
    if d < 2 {
        return 0.0;
    }
    let y: Vec<f64> = z.iter().map(|&zi| zi + 1.0).collect();
    (0..d)
        .map(|i| {
            let (a, b) = (y[i], y[(i + 1) % d]);
            let r = 100.0 * (a * a - b).powi(2) + (a - 1.0).powi(2);
            r * r / 4000.0 - r.cos() + 1.0
        })
        .sum()
}

/// Schaffer F7 kernel
/// Minimum: f(z) = 0 at z = (0, 0, ..., 0)
pub fn schaffer_f7(z: &Array1<f64>) -> f64 {
    let d = z.len();
    if d < 2 {
        return 0.0;
    }
    let sum: f64 = (0..d - 1)
        .map(|i| {
            let s = (z[i] * z[i] + z[i + 1] * z[i + 1]).sqrt();
            let t = (50.0 * s.powf(0.2)).sin();
            s.sqrt() + s.sqrt() * t * t
        })
        .sum();
    (sum / (d - 1) as f64).powi(2)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::Array1;

    #[test]
    fn test_expanded_kernels_vanish_at_origin() {
        for d in [2, 10, 30] {
            let z = Array1::zeros(d);
            assert_eq!(expanded_schaffer_f6(&z), 0.0, "schaffer f6, d={}", d);
            assert!(expanded_griewank_rosenbrock(&z).abs() < 1e-12, "grie-rosen, d={}", d);
            assert_eq!(schaffer_f7(&z), 0.0, "schaffer f7, d={}", d);
        }
    }

    #[test]
    fn test_schaffer_f6_pair_bounds() {
        // each pair term lies in [0, 1)
        let z = Array1::from_vec(vec![10.0, -7.0, 3.0]);
        let v = expanded_schaffer_f6(&z);
        assert!(v > 0.0 && v < 3.0);
    }

    #[test]
    fn test_expanded_griewank_rosenbrock_positive() {
        let z = Array1::from_vec(vec![0.5, -0.5, 0.25]);
        assert!(expanded_griewank_rosenbrock(&z) > 0.0);
    }

    #[test]
    fn test_schaffer_f7_scales_with_distance() {
        let near = Array1::from_vec(vec![0.1, 0.1, 0.1]);
        let far = Array1::from_vec(vec![10.0, 10.0, 10.0]);
        assert!(schaffer_f7(&near) < schaffer_f7(&far));
    }
}
