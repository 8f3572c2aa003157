//! The benchmark function contract

use ndarray::Array1;

use crate::error::BenchError;
use crate::properties::FunctionProperties;
use crate::validate::check_solution;

/// Default tolerance for [`BenchmarkFunction::is_succeed`].
pub const SUCCESS_TOL: f64 = 1e-8;

/// One benchmark problem instance.
///
/// Instances are immutable after construction apart from the evaluation
/// counter, so shared references can be evaluated from several threads;
/// the counter stays advisory (relaxed atomics). Construction itself is
/// not guarded; concurrent instantiation against a shared data store is
/// unsupported.
///
/// The defining correctness property of every implementation:
/// `evaluate(x_global())` equals `f_global()` within 1e-8.
pub trait BenchmarkFunction: Send + Sync {
    /// Human-readable name, e.g. `"F1: Rotated Bent Cigar Function"`.
    fn name(&self) -> &str;

    /// Short formula description.
    fn formula(&self) -> &str;

    /// Effective input length.
    fn ndim(&self) -> usize;

    /// One `(lower, upper)` pair per dimension. Metadata: `evaluate` does
    /// not clip or reject out-of-domain inputs.
    fn bounds(&self) -> &[(f64, f64)];

    /// The known minimizer.
    fn x_global(&self) -> &Array1<f64>;

    /// The known minimum fitness (bias included).
    fn f_global(&self) -> f64;

    /// Static mathematical properties.
    fn properties(&self) -> &FunctionProperties;

    /// Evaluations so far; incremented once per accepted `evaluate` call,
    /// left unchanged by rejected calls, never reset.
    fn n_eval(&self) -> u64;

    /// Fitness of a candidate solution.
    ///
    /// # Errors
    ///
    /// `BenchError::Input` when `x.len() != ndim()`; the counter is not
    /// incremented in that case.
    fn evaluate(&self, x: &Array1<f64>) -> Result<f64, BenchError>;

    /// Success test: value-closeness or location-closeness within `tol`.
    ///
    /// Counts as one evaluation (the value check calls [`Self::evaluate`]).
    fn is_succeed(&self, x: &Array1<f64>, tol: f64) -> Result<bool, BenchError> {
        Ok(self.is_succeed_by_value(x, tol)? || self.is_succeed_by_position(x, tol)?)
    }

    /// Success as fitness-closeness: `|evaluate(x) - f_global| <= tol`.
    fn is_succeed_by_value(&self, x: &Array1<f64>, tol: f64) -> Result<bool, BenchError> {
        Ok((self.evaluate(x)? - self.f_global()).abs() <= tol)
    }

    /// Success as location-closeness: `max_i |x_i - x*_i| <= tol`.
    /// Does not evaluate, so the counter is untouched.
    fn is_succeed_by_position(&self, x: &Array1<f64>, tol: f64) -> Result<bool, BenchError> {
        check_solution(x, self.ndim())?;
        Ok(x.iter().zip(self.x_global().iter()).all(|(a, b)| (a - b).abs() <= tol))
    }
}
