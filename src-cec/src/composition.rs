//! Composition benchmark functions
//!
//! A composition blends several shifted/rotated kernels with
//! distance-based weights: component `i` contributes
//! `lambda_i * g_i(x) + bias_i` weighted by
//! `w_i = exp(-d_i^2 / (2 D sigma_i^2)) / sqrt(d_i^2)` where
//! `d_i = ||x - o_i||`, the weights normalized to sum 1. The first
//! component's shift is the global optimum and its local bias must be 0.

use log::debug;
use ndarray::{Array1, Array2};

use optbench_core::{
    BenchError, BenchmarkFunction, DimensionDefaults, EvalCounter, FunctionProperties,
    check_solution, resolve_ndim_and_bounds,
};
use optbench_data::DataSource;
use optbench_operators::Kernel;

/// One component of a [`Composition`].
#[derive(Debug, Clone, Copy)]
pub struct CompositionComponent {
    pub sigma: f64,
    pub lambda: f64,
    pub bias: f64,
    pub kernel: Kernel,
    pub rescale: f64,
    /// Components with an identity rotation skip the matrix product.
    pub rotated: bool,
}

/// Configuration record for a [`Composition`] function.
#[derive(Debug, Clone)]
pub struct CompositionSpec {
    pub name: &'static str,
    pub formula: &'static str,
    pub shift_id: &'static str,
    pub matrix_id: &'static str,
    pub bias: f64,
    pub components: &'static [CompositionComponent],
    pub properties: FunctionProperties,
}

/// Benchmark function blending several shifted/rotated kernels.
pub struct Composition {
    name: &'static str,
    formula: &'static str,
    ndim: usize,
    bounds: Vec<(f64, f64)>,
    shifts: Array2<f64>,
    rotations: Vec<Array2<f64>>,
    components: &'static [CompositionComponent],
    bias: f64,
    properties: FunctionProperties,
    x_global: Array1<f64>,
    n_eval: EvalCounter,
}

impl Composition {
    /// Construct an instance; loads the component shift table and the
    /// stacked rotation matrices.
    ///
    /// # Errors
    ///
    /// Same contract as [`crate::ShiftRotate::new`].
    pub fn new(
        spec: CompositionSpec,
        defaults: &DimensionDefaults,
        ndim: Option<usize>,
        bounds: Option<Vec<(f64, f64)>>,
        store: &dyn DataSource,
    ) -> Result<Self, BenchError> {
        let (ndim, bounds) = resolve_ndim_and_bounds(defaults, ndim, bounds)?;
        let n_funcs = spec.components.len();
        debug!("constructing '{}' with D={}, N={}", spec.name, ndim, n_funcs);

        let shifts = store.shift_table(spec.shift_id, n_funcs, ndim)?;
        let rotations = store.matrix_stack(spec.matrix_id, n_funcs, ndim)?;
        let x_global = shifts.row(0).to_owned();

        Ok(Self {
            name: spec.name,
            formula: spec.formula,
            ndim,
            bounds,
            shifts,
            rotations,
            components: spec.components,
            bias: spec.bias,
            properties: spec.properties,
            x_global,
            n_eval: EvalCounter::new(),
        })
    }

    /// Per-component shift vectors, one row per component.
    pub fn shifts(&self) -> &Array2<f64> {
        &self.shifts
    }

    /// Per-component sigma/lambda/bias/rescale records.
    pub fn components(&self) -> &[CompositionComponent] {
        self.components
    }
}

impl BenchmarkFunction for Composition {
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

        let nd = self.ndim as f64;
        let n_funcs = self.components.len();
        let mut weights = Vec::with_capacity(n_funcs);
        let mut values = Vec::with_capacity(n_funcs);

        for (i, comp) in self.components.iter().enumerate() {
            let diff = x - &self.shifts.row(i);
            let dist2: f64 = diff.iter().map(|&v| v * v).sum();

            let w = if dist2 == 0.0 {
                1e99
            } else {
                (-dist2 / (2.0 * nd * comp.sigma * comp.sigma)).exp() / dist2.sqrt()
            };
            weights.push(w);

            let y = &diff * comp.rescale;
            let z = if comp.rotated { self.rotations[i].dot(&y) } else { y };
            values.push(comp.lambda * (comp.kernel)(&z) + comp.bias);
        }

        let w_sum: f64 = weights.iter().sum();
        if w_sum == 0.0 {
            // all components are so far away that every weight underflowed
            weights.fill(1.0 / n_funcs as f64);
        } else {
            for w in &mut weights {
                *w /= w_sum;
            }
        }

        let blended: f64 = weights.iter().zip(values.iter()).map(|(w, v)| w * v).sum();
        Ok(blended + self.bias)
    }
}
