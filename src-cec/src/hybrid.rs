//! Hybrid benchmark functions
//!
//! A hybrid function shifts the input, permutes the coordinates with a
//! stored shuffle, rotates, then partitions the result into consecutive
//! blocks and applies one kernel per block. Block `k` takes
//! `ceil(p_k * D)` coordinates; the last block takes the remainder.

use log::debug;
use ndarray::{Array1, Array2, s};

use optbench_core::{
    BenchError, BenchmarkFunction, DimensionDefaults, EvalCounter, FunctionProperties,
    check_solution, resolve_ndim_and_bounds,
};
use optbench_data::DataSource;
use optbench_operators::Kernel;

/// Configuration record for a [`Hybrid`] function.
#[derive(Debug, Clone)]
pub struct HybridSpec {
    pub name: &'static str,
    pub formula: &'static str,
    pub shift_id: &'static str,
    pub matrix_id: &'static str,
    pub shuffle_id: &'static str,
    pub bias: f64,
    /// `(fraction, kernel)` per block, fractions summing to 1.
    pub components: &'static [(f64, Kernel)],
    pub properties: FunctionProperties,
}

/// Benchmark function summing kernels over shuffled coordinate blocks.
pub struct Hybrid {
    name: &'static str,
    formula: &'static str,
    ndim: usize,
    bounds: Vec<(f64, f64)>,
    shift: Array1<f64>,
    rotation: Array2<f64>,
    shuffle: Vec<usize>,
    kernels: Vec<Kernel>,
    block_sizes: Vec<usize>,
    bias: f64,
    properties: FunctionProperties,
    x_global: Array1<f64>,
    n_eval: EvalCounter,
}

fn block_sizes(fractions: &[f64], ndim: usize) -> Vec<usize> {
    let mut sizes = Vec::with_capacity(fractions.len());
    let mut used = 0;
    for (k, &p) in fractions.iter().enumerate() {
        let n = if k + 1 == fractions.len() {
            ndim - used
        } else {
            (((p * ndim as f64).ceil()) as usize).min(ndim - used)
        };
        sizes.push(n);
        used += n;
    }
    sizes
}

impl Hybrid {
    /// Construct an instance; loads the shift, rotation and shuffle and
    /// precomputes the block partition.
    ///
    /// # Errors
    ///
    /// Same contract as [`crate::ShiftRotate::new`].
    pub fn new(
        spec: HybridSpec,
        defaults: &DimensionDefaults,
        ndim: Option<usize>,
        bounds: Option<Vec<(f64, f64)>>,
        store: &dyn DataSource,
    ) -> Result<Self, BenchError> {
        let (ndim, bounds) = resolve_ndim_and_bounds(defaults, ndim, bounds)?;
        debug!("constructing '{}' with D={}, N={}", spec.name, ndim, spec.components.len());

        let shift = store.vector(spec.shift_id, ndim)?;
        let rotation = store.matrix(spec.matrix_id, ndim)?;
        let shuffle = store.permutation(spec.shuffle_id, ndim)?;
        let x_global = shift.clone();

        let fractions: Vec<f64> = spec.components.iter().map(|&(p, _)| p).collect();
        let kernels: Vec<Kernel> = spec.components.iter().map(|&(_, k)| k).collect();

        Ok(Self {
            name: spec.name,
            formula: spec.formula,
            ndim,
            bounds,
            shift,
            rotation,
            shuffle,
            kernels,
            block_sizes: block_sizes(&fractions, ndim),
            bias: spec.bias,
            properties: spec.properties,
            x_global,
            n_eval: EvalCounter::new(),
        })
    }

    /// Shift vector consumed during evaluation.
    pub fn shift(&self) -> &Array1<f64> {
        &self.shift
    }

    /// Coordinate shuffle applied before rotation, 0-based.
    pub fn shuffle(&self) -> &[usize] {
        &self.shuffle
    }

    /// Sizes of the per-kernel coordinate blocks.
    pub fn block_sizes(&self) -> &[usize] {
        &self.block_sizes
    }
}

impl BenchmarkFunction for Hybrid {
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

        let y = x - &self.shift;
        let mut permuted = Array1::zeros(self.ndim);
        for (k, &src) in self.shuffle.iter().enumerate() {
            permuted[k] = y[src];
        }
        let z = self.rotation.dot(&permuted);

        let mut total = self.bias;
        let mut start = 0;
        for (kernel, &len) in self.kernels.iter().zip(self.block_sizes.iter()) {
            let block = z.slice(s![start..start + len]).to_owned();
            total += kernel(&block);
            start += len;
        }
        Ok(total)
    }
}
