//! Operator library: pure mathematical kernels
//!
//! This library provides the building-block functions composed by the CEC
//! benchmark families. Kernels are organized by category:
//!
//! - **Unimodal**: single-optimum kernels (sphere, bent cigar, discus, etc.)
//! - **Multimodal**: many-local-minima kernels (rastrigin, weierstrass, etc.)
//! - **Expanded**: pairwise-chained kernels (griewank-rosenbrock, schaffer)
//!
//! Every kernel maps a real vector to a scalar, handles any vector length,
//! carries no state and no randomness, and attains its minimum value 0 at
//! the origin. Kernels whose classic form optimizes elsewhere carry the
//! published internal offset (rosenbrock +1, happy cat and hgbat -1) so the
//! origin property holds uniformly.
//!
//! # Example
//!
//! ```rust
//! use ndarray::Array1;
//! use optbench_operators::bent_cigar;
//!
//! let z = Array1::zeros(10);
//! assert_eq!(bent_cigar(&z), 0.0);
//! ```

use ndarray::Array1;

pub mod kernels;
pub use kernels::*;

/// Signature shared by all kernels
pub type Kernel = fn(&Array1<f64>) -> f64;
