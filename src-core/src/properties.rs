//! Mathematical property descriptor

use serde::Serialize;

/// Static mathematical properties of a benchmark function.
///
/// A plain immutable record attached to each configuration; the
/// `randomized_term` flag is informational (evaluation stays
/// deterministic).
#[derive(Debug, Clone, Serialize)]
pub struct FunctionProperties {
    pub continuous: bool,
    pub linear: bool,
    pub convex: bool,
    pub unimodal: bool,
    pub separable: bool,
    pub differentiable: bool,
    pub scalable: bool,
    pub randomized_term: bool,
    pub parametric: bool,
    pub shifted: bool,
    pub rotated: bool,
    /// True when the number of ambiguous peaks is large or unknown.
    pub modality: bool,
    pub characteristics: Vec<String>,
}

impl Default for FunctionProperties {
    /// Baseline for the CEC families: continuous, differentiable,
    /// scalable, shifted and rotated, neither convex nor unimodal.
    fn default() -> Self {
        Self {
            continuous: true,
            linear: false,
            convex: false,
            unimodal: false,
            separable: false,
            differentiable: true,
            scalable: true,
            randomized_term: false,
            parametric: true,
            shifted: true,
            rotated: true,
            modality: false,
            characteristics: Vec::new(),
        }
    }
}

impl FunctionProperties {
    /// Baseline for the classic name-based functions: a literal formula,
    /// not shifted, not rotated, not parametric.
    pub fn named() -> Self {
        Self { scalable: false, parametric: false, shifted: false, rotated: false, ..Self::default() }
    }
}
