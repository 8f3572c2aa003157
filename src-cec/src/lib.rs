//! CEC competition benchmark families
//!
//! The evaluation engine for CEC-style benchmark functions. Three
//! parameterized function types cover the whole catalog:
//!
//! - [`ShiftRotate`]: one kernel behind a shift/rescale/rotate transform
//!   plus a bias
//! - [`Hybrid`]: one transform, the coordinates shuffled and partitioned
//!   into blocks, one kernel per block
//! - [`Composition`]: several shifted/rotated kernels blended with
//!   distance-based weights
//!
//! Each competition year is a catalog of configuration records fed into
//! these types; see [`y2015`] and [`y2022`]. Auxiliary data (shifts,
//! rotations, shuffles) comes from any [`optbench_data::DataSource`].
//!
//! ```rust
//! use optbench_core::BenchmarkFunction;
//! use optbench_data::SyntheticStore;
//! use optbench_cec::y2015;
//!
//! let store = SyntheticStore::new();
//! let f1 = y2015::f1(Some(10), None, &store).unwrap();
//! let at_optimum = f1.evaluate(f1.x_global()).unwrap();
//! assert!((at_optimum - 100.0).abs() < 1e-8);
//! ```

pub mod composition;
pub mod hybrid;
pub mod shift_rotate;
pub mod y2015;
pub mod y2022;

pub use composition::{Composition, CompositionComponent, CompositionSpec};
pub use hybrid::{Hybrid, HybridSpec};
pub use shift_rotate::{ShiftRotate, ShiftRotateSpec};
