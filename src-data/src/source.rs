//! The data-provider contract

use ndarray::{Array1, Array2};

use crate::error::DataError;

/// Key-value contract for auxiliary benchmark data.
///
/// Identifiers ending in `_D` are dimension-dependent (the requested
/// dimension participates in the lookup); all others are resolved
/// exact-match. Oversized stored data is truncated to the requested shape;
/// undersized data is a [`DataError::Shape`], never padded.
pub trait DataSource {
    /// Shift vector of length `ndim`.
    fn vector(&self, id: &str, ndim: usize) -> Result<Array1<f64>, DataError>;

    /// Square rotation matrix of shape `ndim x ndim`.
    fn matrix(&self, id: &str, ndim: usize) -> Result<Array2<f64>, DataError>;

    /// Table of `rows` shift vectors, one per composition component,
    /// shape `rows x ndim`.
    fn shift_table(&self, id: &str, rows: usize, ndim: usize) -> Result<Array2<f64>, DataError>;

    /// `count` square rotation matrices stored stacked `(count*ndim) x ndim`.
    fn matrix_stack(
        &self,
        id: &str,
        count: usize,
        ndim: usize,
    ) -> Result<Vec<Array2<f64>>, DataError>;

    /// Shuffle of the coordinate indices: a permutation of `1..=ndim` in
    /// storage, returned 0-based.
    fn permutation(&self, id: &str, ndim: usize) -> Result<Vec<usize>, DataError>;
}

/// True when the identifier asks for a dimension-dependent lookup.
pub(crate) fn is_dimensioned(id: &str) -> bool {
    id.ends_with("_D")
}

/// Validate a 1-based index list as a permutation and rebase it to 0.
pub(crate) fn rebase_permutation(
    id: &str,
    ndim: usize,
    raw: &[f64],
) -> Result<Vec<usize>, DataError> {
    let err = || DataError::Permutation { id: id.to_string(), ndim };
    if raw.len() < ndim {
        return Err(err());
    }
    let mut seen = vec![false; ndim];
    let mut out = Vec::with_capacity(ndim);
    for &v in &raw[..ndim] {
        if v.fract() != 0.0 || v < 1.0 || v > ndim as f64 {
            return Err(err());
        }
        let idx = v as usize - 1;
        if seen[idx] {
            return Err(err());
        }
        seen[idx] = true;
        out.push(idx);
    }
    Ok(out)
}
