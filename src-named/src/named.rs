//! Name-based benchmark function type

use ndarray::Array1;

use optbench_core::{
    BenchError, BenchmarkFunction, DimensionDefaults, EvalCounter, FunctionProperties,
    check_solution, resolve_ndim_and_bounds,
};
use optbench_operators::Kernel;

/// Configuration record for a [`Named`] function.
#[derive(Debug, Clone)]
pub struct NamedSpec {
    pub name: &'static str,
    pub formula: &'static str,
    pub defaults: DimensionDefaults,
    pub kernel: Kernel,
    /// Known minimizer for a given dimension, with the analytic minimum
    /// value when one exists. Optima published as decimal approximations
    /// return `None` and are anchored by evaluating the kernel there, so
    /// the optimum invariant stays exact.
    pub optimum: fn(usize) -> (Array1<f64>, Option<f64>),
    pub properties: FunctionProperties,
}

/// A classic closed-form benchmark function.
pub struct Named {
    name: &'static str,
    formula: &'static str,
    ndim: usize,
    bounds: Vec<(f64, f64)>,
    kernel: Kernel,
    x_global: Array1<f64>,
    f_global: f64,
    properties: FunctionProperties,
    n_eval: EvalCounter,
}

impl Named {
    /// Construct an instance.
    ///
    /// # Errors
    ///
    /// `BenchError::Dimension` when the requested dimension is outside the
    /// function's supported set, `BenchError::Bounds` on a bounds length
    /// mismatch.
    pub fn new(
        spec: NamedSpec,
        ndim: Option<usize>,
        bounds: Option<Vec<(f64, f64)>>,
    ) -> Result<Self, BenchError> {
        let (ndim, bounds) = resolve_ndim_and_bounds(&spec.defaults, ndim, bounds)?;
        let (x_global, f_known) = (spec.optimum)(ndim);
        let f_global = f_known.unwrap_or_else(|| (spec.kernel)(&x_global));

        Ok(Self {
            name: spec.name,
            formula: spec.formula,
            ndim,
            bounds,
            kernel: spec.kernel,
            x_global,
            f_global,
            properties: spec.properties,
            n_eval: EvalCounter::new(),
        })
    }
}

impl BenchmarkFunction for Named {
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
        self.f_global
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
        Ok((self.kernel)(x))
    }
}
