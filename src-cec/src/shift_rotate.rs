//! Single-kernel shifted/rotated benchmark functions

use log::debug;
use ndarray::{Array1, Array2};

use optbench_core::{
    BenchError, BenchmarkFunction, DimensionDefaults, EvalCounter, FunctionProperties,
    check_solution, resolve_ndim_and_bounds,
};
use optbench_data::DataSource;
use optbench_operators::Kernel;

/// Configuration record for a [`ShiftRotate`] function.
///
/// Replaces per-function subclassing: sibling functions differ only in the
/// kernel, the data identifiers, the bias and the rescale factor.
#[derive(Debug, Clone)]
pub struct ShiftRotateSpec {
    pub name: &'static str,
    pub formula: &'static str,
    pub kernel: Kernel,
    pub shift_id: &'static str,
    pub matrix_id: &'static str,
    pub bias: f64,
    pub rescale: f64,
    pub properties: FunctionProperties,
}

/// Benchmark function `f(x) = kernel(M (rescale * (x - o))) + bias`.
pub struct ShiftRotate {
    name: &'static str,
    formula: &'static str,
    kernel: Kernel,
    ndim: usize,
    bounds: Vec<(f64, f64)>,
    shift: Array1<f64>,
    rotation: Array2<f64>,
    bias: f64,
    rescale: f64,
    properties: FunctionProperties,
    x_global: Array1<f64>,
    n_eval: EvalCounter,
}

impl ShiftRotate {
    /// Construct an instance, resolving the dimension and bounds and
    /// loading the shift vector and rotation matrix.
    ///
    /// # Errors
    ///
    /// `BenchError::Dimension` / `BenchError::Bounds` on invalid requests,
    /// `BenchError::Data` when the store cannot supply the configured
    /// identifiers at the resolved dimension.
    pub fn new(
        spec: ShiftRotateSpec,
        defaults: &DimensionDefaults,
        ndim: Option<usize>,
        bounds: Option<Vec<(f64, f64)>>,
        store: &dyn DataSource,
    ) -> Result<Self, BenchError> {
        let (ndim, bounds) = resolve_ndim_and_bounds(defaults, ndim, bounds)?;
        debug!("constructing '{}' with D={}", spec.name, ndim);

        let shift = store.vector(spec.shift_id, ndim)?;
        let rotation = store.matrix(spec.matrix_id, ndim)?;
        let x_global = shift.clone();

        Ok(Self {
            name: spec.name,
            formula: spec.formula,
            kernel: spec.kernel,
            ndim,
            bounds,
            shift,
            rotation,
            bias: spec.bias,
            rescale: spec.rescale,
            properties: spec.properties,
            x_global,
            n_eval: EvalCounter::new(),
        })
    }

    /// Shift vector consumed during evaluation.
    pub fn shift(&self) -> &Array1<f64> {
        &self.shift
    }

    /// Rotation matrix consumed during evaluation.
    pub fn rotation(&self) -> &Array2<f64> {
        &self.rotation
    }

    /// Global bias added to every evaluation.
    pub fn bias(&self) -> f64 {
        self.bias
    }

    /// Linear rescale factor applied before rotation.
    pub fn rescale(&self) -> f64 {
        self.rescale
    }
}

impl BenchmarkFunction for ShiftRotate {
    fn name(&self) -> &str {
        self.name
    }

    fn formula(&self) -> &str {
        self.formula
    }

    fn ndim(&self) -> usize {
        self.ndim
    }

    fn bounds(&self) -> &[(f64, f64)] {
        &self.bounds
    }

    fn x_global(&self) -> &Array1<f64> {
        &self.x_global
    }

    fn f_global(&self) -> f64 {
        self.bias
    }

    fn properties(&self) -> &FunctionProperties {
        &self.properties
    }

    fn n_eval(&self) -> u64 {
        self.n_eval.get()
    }

    fn evaluate(&self, x: &Array1<f64>) -> Result<f64, BenchError> {
        check_solution(x, self.ndim)?;
        self.n_eval.bump();

        let z = self.rotation.dot(&((x - &self.shift) * self.rescale));
        Ok((self.kernel)(&z) + self.bias)
    }
}
