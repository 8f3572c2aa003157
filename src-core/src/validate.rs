//! Construction and evaluation validation helpers

use ndarray::Array1;

use crate::error::BenchError;

/// Dimension handling of a benchmark family or function: default and
/// maximum dimension, the supported set (empty means any `1..=max`), and
/// the default per-coordinate bounds.
#[derive(Debug, Clone)]
pub struct DimensionDefaults {
    pub default: usize,
    pub max: usize,
    pub supported: Vec<usize>,
    /// Uniform default bounds, replicated to the resolved dimension.
    pub bounds: (f64, f64),
    /// Per-coordinate default bounds for fixed-dimension functions with an
    /// asymmetric domain; takes precedence over `bounds` when the length
    /// matches the resolved dimension.
    pub bounds_per_dim: Option<Vec<(f64, f64)>>,
}

impl DimensionDefaults {
    /// A fixed-dimension function (the supported set is exactly `{ndim}`).
    pub fn fixed(ndim: usize, bounds: (f64, f64)) -> Self {
        Self { default: ndim, max: ndim, supported: vec![ndim], bounds, bounds_per_dim: None }
    }

    /// A fixed-dimension function with per-coordinate default bounds.
    pub fn fixed_asymmetric(bounds: Vec<(f64, f64)>) -> Self {
        let ndim = bounds.len();
        let cover = bounds
            .iter()
            .fold((f64::INFINITY, f64::NEG_INFINITY), |acc, b| (acc.0.min(b.0), acc.1.max(b.1)));
        Self {
            default: ndim,
            max: ndim,
            supported: vec![ndim],
            bounds: cover,
            bounds_per_dim: Some(bounds),
        }
    }

    /// A freely scalable function accepting any `1..=max`.
    pub fn scalable(default: usize, max: usize, bounds: (f64, f64)) -> Self {
        Self { default, max, supported: Vec::new(), bounds, bounds_per_dim: None }
    }
}

/// Resolve the final dimension and bounds of an instance under
/// construction.
///
/// The requested dimension (when given) must be positive, at most
/// `defaults.max`, and a member of the supported set when that set is
/// non-empty; otherwise the default dimension applies. Explicit bounds
/// must have exactly one pair per resolved dimension; otherwise the
/// default pair is replicated.
///
/// # Errors
///
/// `BenchError::Dimension` / `BenchError::Bounds` on the respective
/// violations.
pub fn resolve_ndim_and_bounds(
    defaults: &DimensionDefaults,
    ndim: Option<usize>,
    bounds: Option<Vec<(f64, f64)>>,
) -> Result<(usize, Vec<(f64, f64)>), BenchError> {
    let resolved = match ndim {
        Some(n) => {
            let member_ok = defaults.supported.is_empty() || defaults.supported.contains(&n);
            if n == 0 || n > defaults.max || !member_ok {
                return Err(BenchError::Dimension {
                    requested: n,
                    max: defaults.max,
                    supported: defaults.supported.clone(),
                });
            }
            n
        }
        None => defaults.default,
    };

    let bounds = match bounds {
        Some(b) => {
            if b.len() != resolved {
                return Err(BenchError::Bounds { expected: resolved, got: b.len() });
            }
            b
        }
        None => match &defaults.bounds_per_dim {
            Some(pd) if pd.len() == resolved => pd.clone(),
            _ => vec![defaults.bounds; resolved],
        },
    };

    Ok((resolved, bounds))
}

/// Input-length guard run on every `evaluate` call.
///
/// # Errors
///
/// `BenchError::Input` on length mismatch.
pub fn check_solution(x: &Array1<f64>, ndim: usize) -> Result<(), BenchError> {
    if x.len() != ndim {
        return Err(BenchError::Input { expected: ndim, got: x.len() });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn defaults() -> DimensionDefaults {
        DimensionDefaults {
            default: 10,
            max: 30,
            supported: vec![10, 30],
            bounds: (-100.0, 100.0),
            bounds_per_dim: None,
        }
    }

    #[test]
    fn test_default_dimension_and_bounds() {
        let (ndim, bounds) = resolve_ndim_and_bounds(&defaults(), None, None).unwrap();
        assert_eq!(ndim, 10);
        assert_eq!(bounds.len(), 10);
        assert_eq!(bounds[0], (-100.0, 100.0));
    }

    #[test]
    fn test_supported_set_is_enforced() {
        assert!(matches!(
            resolve_ndim_and_bounds(&defaults(), Some(7), None),
            Err(BenchError::Dimension { requested: 7, .. })
        ));
        assert!(resolve_ndim_and_bounds(&defaults(), Some(30), None).is_ok());
    }

    #[test]
    fn test_max_is_enforced_when_set_is_empty() {
        let d = DimensionDefaults::scalable(2, 100, (-10.0, 10.0));
        assert!(resolve_ndim_and_bounds(&d, Some(77), None).is_ok());
        assert!(matches!(
            resolve_ndim_and_bounds(&d, Some(101), None),
            Err(BenchError::Dimension { .. })
        ));
        assert!(matches!(
            resolve_ndim_and_bounds(&d, Some(0), None),
            Err(BenchError::Dimension { .. })
        ));
    }

    #[test]
    fn test_bounds_length_must_match() {
        let b = vec![(-1.0, 1.0); 3];
        assert!(matches!(
            resolve_ndim_and_bounds(&defaults(), Some(10), Some(b)),
            Err(BenchError::Bounds { expected: 10, got: 3 })
        ));

        let b = vec![(-1.0, 1.0); 10];
        let (_, bounds) = resolve_ndim_and_bounds(&defaults(), Some(10), Some(b)).unwrap();
        assert_eq!(bounds[3], (-1.0, 1.0));
    }

    #[test]
    fn test_asymmetric_default_bounds() {
        let d = DimensionDefaults::fixed_asymmetric(vec![(-15.0, -5.0), (-3.0, 3.0)]);
        let (ndim, bounds) = resolve_ndim_and_bounds(&d, None, None).unwrap();
        assert_eq!(ndim, 2);
        assert_eq!(bounds, vec![(-15.0, -5.0), (-3.0, 3.0)]);
    }

    #[test]
    fn test_check_solution() {
        let x = Array1::zeros(10);
        assert!(check_solution(&x, 10).is_ok());
        assert!(matches!(
            check_solution(&x, 30),
            Err(BenchError::Input { expected: 30, got: 10 })
        ));
    }
}
