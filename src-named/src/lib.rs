//! Classic name-based benchmark functions
//!
//! The peripheral counterpart of the CEC families: functions with a
//! literal closed-form formula, keyed by common name rather than
//! competition id. No shift, rotation or auxiliary data is involved; the
//! optimum sits where the published formula puts it.
//!
//! ```rust
//! use ndarray::array;
//! use optbench_core::{BenchmarkFunction, SUCCESS_TOL};
//! use optbench_named::catalog;
//!
//! let beale = catalog::create("beale", None, None).unwrap();
//! let solved = beale.is_succeed(&array![3.0, 0.5], SUCCESS_TOL).unwrap();
//! assert!(solved);
//! ```

pub mod catalog;
pub mod formulas;
pub mod named;

pub use catalog::{NAMES, create};
pub use named::{Named, NamedSpec};
